//! Request middleware

mod gate;

pub use gate::{session_gate, GatePolicy};
