//! Builds the world, game config and runtime bundle used by front-ends.
use std::sync::Arc;

use anyhow::Result;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

use game_core::GameConfig;
use runtime::{Runtime, RuntimeConfig};

use crate::config::BootstrapConfig;
use crate::world::{GeneratedWorldFactory, WorldFactory};

/// Builder that assembles the world, configuration and runtime for clients.
pub struct RuntimeBuilder {
    config: BootstrapConfig,
    world_factory: Arc<dyn WorldFactory>,
}

impl RuntimeBuilder {
    pub fn new(config: BootstrapConfig) -> Self {
        let default_factory = GeneratedWorldFactory::new().with_enemy_count(config.enemy_count);
        Self {
            config,
            world_factory: Arc::new(default_factory),
        }
    }

    /// Provide a custom world factory (e.g., a fixed arena for demos).
    pub fn world_factory(mut self, factory: impl WorldFactory + 'static) -> Self {
        self.world_factory = Arc::new(factory);
        self
    }

    pub async fn build(self) -> Result<RuntimeSetup> {
        let game_config = self.config.load_game_config()?;
        let seed = self.config.seed.unwrap_or_else(rand::random);

        let mut rng = StdRng::seed_from_u64(seed);
        let world = self.world_factory.build(&game_config, &mut rng);
        info!(
            seed,
            mode = %game_config.combat.mode,
            enemies = world.entities.enemies.len(),
            "world assembled"
        );

        let runtime_config = RuntimeConfig {
            game_config: game_config.clone(),
            frame_interval: self.config.frame_interval,
            ..RuntimeConfig::default()
        };
        let runtime = Runtime::builder()
            .config(runtime_config)
            .map(world.map)
            .entities(world.entities)
            .seed(seed.wrapping_add(1))
            .build()
            .await?;

        Ok(RuntimeSetup {
            config: self.config,
            game_config,
            seed,
            runtime,
        })
    }
}

pub struct RuntimeSetup {
    pub config: BootstrapConfig,
    pub game_config: GameConfig,
    pub seed: u64,
    pub runtime: Runtime,
}
