//! Live game state: combatants, their inventories and the registry owning them.
//!
//! The registry is the single owner of combatant data. Other layers (combat
//! sessions, renderers) refer to combatants by [`EntityId`] only.
mod animation;
mod combatant;
mod common;
mod entities;
pub mod inventory;

pub use animation::AnimationTimer;
pub use combatant::{Combatant, CombatantKind, EnemyData, PlayerData};
pub use common::{EntityId, Position, ResourceMeter, Vector};
pub use entities::EntitiesState;
pub use inventory::{InventoryState, ItemStack};
