//! High-level runtime orchestrator.
//!
//! The runtime owns the simulation worker, wires up command/event channels,
//! and exposes a builder-based API for clients to drive the dungeon.

use std::sync::Arc;
use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::info;

use game_core::{EntitiesState, GameConfig, TileMap};

use crate::api::{Result, RuntimeError, RuntimeHandle};
use crate::events::EventBus;
use crate::game_loop::GameLoop;
use crate::render::{Camera, FrameSnapshot};
use crate::workers::{Command, SimulationWorker};

/// Runtime configuration shared across the orchestrator and workers.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub game_config: GameConfig,
    pub event_buffer_size: usize,
    pub command_buffer_size: usize,
    /// Period of the built-in frame clock. `None` leaves stepping to
    /// [`RuntimeHandle::step`].
    pub frame_interval: Option<Duration>,
    /// Camera viewport in world units.
    pub viewport: (f32, f32),
}

impl RuntimeConfig {
    pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(16);

    /// Configuration for drivers that step frames by hand.
    pub fn manual(game_config: GameConfig) -> Self {
        Self {
            game_config,
            frame_interval: None,
            ..Self::default()
        }
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            game_config: GameConfig::default(),
            event_buffer_size: 100,
            command_buffer_size: 32,
            frame_interval: Some(Self::DEFAULT_FRAME_INTERVAL),
            viewport: (Camera::DEFAULT_WIDTH, Camera::DEFAULT_HEIGHT),
        }
    }
}

/// Main runtime that orchestrates the simulation
///
/// Design: Runtime owns the worker and coordinates its lifetime.
/// [`RuntimeHandle`] provides a cloneable façade for clients.
pub struct Runtime {
    handle: RuntimeHandle,
    sim_worker_handle: JoinHandle<()>,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime
    ///
    /// The handle can be shared across clients and async tasks.
    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    /// Shutdown the runtime gracefully
    pub async fn shutdown(self) -> Result<()> {
        // A closed channel means the worker already stopped.
        let _ = self.handle.shutdown().await;
        drop(self.handle);

        self.sim_worker_handle
            .await
            .map_err(RuntimeError::WorkerJoin)
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    map: Option<TileMap>,
    entities: Option<EntitiesState>,
    seed: Option<u64>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            map: None,
            entities: None,
            seed: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Provide the dungeon layout
    pub fn map(mut self, map: TileMap) -> Self {
        self.map = Some(map);
        self
    }

    /// Provide the initial player and enemies
    pub fn entities(mut self, entities: EntitiesState) -> Self {
        self.entities = Some(entities);
        self
    }

    /// Seed for coin drops and idle roaming. Random when unset.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the runtime and spawn its worker
    pub async fn build(self) -> Result<Runtime> {
        let (Some(map), Some(entities)) = (self.map, self.entities) else {
            return Err(RuntimeError::MissingWorld);
        };
        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let shared_map = Arc::new(map.clone());
        let mut game = GameLoop::new(self.config.game_config.clone(), map, entities, rng);
        let (width, height) = self.config.viewport;
        game.set_viewport(width, height);

        let (command_tx, command_rx) = mpsc::channel::<Command>(self.config.command_buffer_size);
        let event_bus = EventBus::with_capacity(self.config.event_buffer_size);
        let (frame_tx, frame_rx) = watch::channel(FrameSnapshot::default());

        let handle = RuntimeHandle::new(command_tx, event_bus.clone(), frame_rx, shared_map);

        info!(
            mode = %self.config.game_config.combat.mode,
            frame_interval = ?self.config.frame_interval,
            "starting runtime"
        );
        let sim_worker = SimulationWorker::new(
            game,
            command_rx,
            event_bus,
            frame_tx,
            self.config.frame_interval,
        );

        let sim_worker_handle = tokio::spawn(async move {
            sim_worker.run().await;
        });

        Ok(Runtime {
            handle,
            sim_worker_handle,
        })
    }
}
