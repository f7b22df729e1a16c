//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from worker coordination and rejected combat commands so
//! clients can bubble them up with consistent context.
use thiserror::Error;
use tokio::sync::oneshot;

use game_core::{CombatError, ErrorSeverity, GameError};

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("simulation worker command channel closed")]
    CommandChannelClosed,

    #[error("simulation worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("simulation worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error("runtime requires a map and entities before building")]
    MissingWorld,

    #[error(transparent)]
    Combat(#[from] CombatError),
}

impl RuntimeError {
    /// Severity of a rejected combat command, if that is what this is.
    pub fn combat_severity(&self) -> Option<ErrorSeverity> {
        match self {
            RuntimeError::Combat(error) => Some(error.severity()),
            _ => None,
        }
    }
}
