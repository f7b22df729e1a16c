//! Game rules and data types shared across clients.
//!
//! `game-core` defines the entity model, the tile map, movement rules and the
//! combat arbiter that decides between real-time and turn-based play. It does
//! no I/O and keeps no clock: callers pass elapsed time and a
//! [`combat::CombatNotifier`] into every operation that needs them.
pub mod combat;
pub mod config;
pub mod env;
pub mod error;
pub mod movement;
pub mod state;

pub use combat::{
    AttackOutcome, CombatArbiter, CombatError, CombatMode, CombatNotifier, CombatSession,
    Notification, NullNotifier, PlayerAction, PlayerActOutcome, RecordingNotifier, SessionId,
    SessionState,
};
pub use config::{
    ArchetypeStats, ArchetypeTable, CombatConfig, FrameConfig, GameConfig, MapConfig,
    PlayerConfig,
};
pub use env::{MapDimensions, MapOracle, Room, TerrainKind, TileMap};
pub use error::{ErrorSeverity, GameError};
pub use state::{
    AnimationTimer, Combatant, CombatantKind, EnemyData, EntitiesState, EntityId, InventoryState,
    ItemStack, PlayerData, Position, ResourceMeter, Vector,
};
