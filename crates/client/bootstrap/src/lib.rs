//! Shared bootstrap utilities for client front-ends.
//!
//! Provides configuration loading, world assembly, and runtime setup that can
//! be reused by the terminal frontend or any other front-end crate.
pub mod builder;
pub mod config;
pub mod world;

pub use builder::{RuntimeBuilder, RuntimeSetup};
pub use config::BootstrapConfig;
pub use world::{ArenaWorldFactory, GeneratedWorldFactory, World, WorldFactory};
