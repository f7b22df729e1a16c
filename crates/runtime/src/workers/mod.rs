//! Worker tasks that back the runtime orchestration.
//!
//! The simulation worker owns the game loop and processes frame ticks and
//! commands serially.

mod simulation;

pub use simulation::{Command, SimulationWorker};
