//! Runtime orchestration for the dungeon simulation.
//!
//! This crate wires the synchronous [`GameLoop`] into a background worker and
//! exposes it through a cloneable [`RuntimeHandle`]. Consumers embed
//! [`Runtime`] to feed input, subscribe to events, and read rendered frames.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] provides topic-based event bus for flexible event routing
//! - [`game_loop`] runs movement, proximity checks and combat per frame
//! - [`render`] defines the camera and the per-frame draw contract
//! - `workers` keeps background tasks internal to the crate
pub mod api;
pub mod events;
pub mod game_loop;
pub mod render;
pub mod runtime;

mod workers;

pub use api::{GameSnapshot, Result, RuntimeError, RuntimeHandle};
pub use events::{BusNotifier, Event, EventBus, GameEvent, Topic, UiEvent};
pub use game_loop::{DefeatedEnemy, FrameOutcome, GameLoop};
pub use render::{
    Camera, CombatantView, FrameRenderer, FrameSnapshot, GameStatus, HudView, NullRenderer,
    SnapshotRenderer,
};
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
