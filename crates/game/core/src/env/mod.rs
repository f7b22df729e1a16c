//! Read-only world data.
//!
//! The map is generated once and then only queried. [`MapOracle`] is the seam
//! movement and rendering depend on; [`TileMap`] is the concrete grid.
mod map;

pub use map::{MapDimensions, MapOracle, Room, TerrainKind, TileMap};
