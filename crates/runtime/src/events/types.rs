//! Event types for different topics.

use game_core::{EntityId, SessionId};
use serde::{Deserialize, Serialize};

/// Player-facing notifications emitted by the combat arbiter and game loop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum UiEvent {
    /// A line for the combat log.
    Log(String),
    /// The attack control became usable or unusable.
    PlayerActionEnabled(bool),
    /// The turn-based session overlay was shown or hidden.
    SessionOverlay(bool),
}

/// Gameplay milestones, for frontends and tests that want structure rather
/// than log text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    SessionStarted {
        session: SessionId,
        combatants: Vec<EntityId>,
    },
    SessionEnded {
        session: SessionId,
    },
    EnemyDefeated {
        enemy: EntityId,
        archetype: String,
        coins: u32,
    },
    PlayerDefeated,
}
