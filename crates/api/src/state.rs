//! Shared request state

use std::sync::Arc;

use walletgate_session::SessionCodec;

use crate::middleware::GatePolicy;

/// Application state shared by the session handlers and the gate.
///
/// Everything in here is immutable after startup, so handlers never need
/// locking or coordination.
#[derive(Clone)]
pub struct SessionState {
    pub codec: Arc<SessionCodec>,
    pub gate: Arc<GatePolicy>,
}
