//! Data-driven content definitions, loaders and world generation.
//!
//! - Game configuration (data-driven via TOML)
//! - Enemy archetype tables (data-driven via RON)
//! - Procedural dungeon layout ([`MapGenerator`])
//! - Initial population ([`Spawner`])
//!
//! All loaders use game-core types directly with serde for RON/TOML deserialization.

pub mod mapgen;
pub mod spawn;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use mapgen::MapGenerator;
pub use spawn::Spawner;

#[cfg(feature = "loaders")]
pub use loaders::{ArchetypeLoader, ConfigLoader, ContentFactory, LoadResult};
