use crate::error::{ErrorSeverity, GameError};
use crate::state::EntityId;

use super::SessionId;

/// Reasons a combat request was rejected.
///
/// Every variant describes a no-op: the arbiter's state is unchanged when one
/// of these is returned.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CombatError {
    #[error("turn-based sessions are disabled in real-time mode")]
    RealTimeMode,

    #[error("combat session {session} is already active")]
    SessionActive { session: SessionId },

    #[error("no combat session is active")]
    NoSession,

    #[error("it is not the player's turn (current: {current:?})")]
    NotPlayersTurn { current: Option<EntityId> },

    #[error("no living enemy to target")]
    NoTarget,

    #[error("no living enemy among the session candidates")]
    NoCandidates,

    #[error("session initiator {initiator} is missing or dead")]
    InitiatorUnavailable { initiator: EntityId },

    #[error("nothing left to use: {item}")]
    ItemUnavailable { item: &'static str },

    #[error("the player has been defeated")]
    PlayerDefeated,
}

impl GameError for CombatError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::SessionActive { .. }
            | Self::NoSession
            | Self::NotPlayersTurn { .. }
            | Self::NoTarget
            | Self::ItemUnavailable { .. } => ErrorSeverity::Recoverable,
            Self::RealTimeMode
            | Self::NoCandidates
            | Self::InitiatorUnavailable { .. }
            | Self::PlayerDefeated => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::RealTimeMode => "COMBAT_REAL_TIME_MODE",
            Self::SessionActive { .. } => "COMBAT_SESSION_ACTIVE",
            Self::NoSession => "COMBAT_NO_SESSION",
            Self::NotPlayersTurn { .. } => "COMBAT_NOT_PLAYERS_TURN",
            Self::NoTarget => "COMBAT_NO_TARGET",
            Self::NoCandidates => "COMBAT_NO_CANDIDATES",
            Self::InitiatorUnavailable { .. } => "COMBAT_INITIATOR_UNAVAILABLE",
            Self::ItemUnavailable { .. } => "COMBAT_ITEM_UNAVAILABLE",
            Self::PlayerDefeated => "COMBAT_PLAYER_DEFEATED",
        }
    }
}
