//! World assembly: the map plus its initial population.
use rand::rngs::StdRng;
use tracing::debug;

use game_content::{MapGenerator, Spawner};
use game_core::{EntitiesState, GameConfig, MapDimensions, MapOracle, TileMap};

/// A freshly built dungeon, ready to hand to the runtime.
#[derive(Clone, Debug)]
pub struct World {
    pub map: TileMap,
    pub entities: EntitiesState,
}

pub trait WorldFactory: Send + Sync {
    fn build(&self, config: &GameConfig, rng: &mut StdRng) -> World;
}

/// Procedurally generated rooms and corridors, populated by [`Spawner`].
#[derive(Clone, Debug)]
pub struct GeneratedWorldFactory {
    enemy_count: Option<usize>,
    boss: bool,
}

impl GeneratedWorldFactory {
    pub fn new() -> Self {
        Self {
            enemy_count: None,
            boss: true,
        }
    }

    /// `None` keeps the spawner's default roster size.
    pub fn with_enemy_count(mut self, count: Option<usize>) -> Self {
        self.enemy_count = count;
        self
    }

    pub fn without_boss(mut self) -> Self {
        self.boss = false;
        self
    }
}

impl Default for GeneratedWorldFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl WorldFactory for GeneratedWorldFactory {
    fn build(&self, config: &GameConfig, rng: &mut StdRng) -> World {
        let map = MapGenerator::new(config.map).generate(rng);

        let mut spawner = Spawner::new(config);
        if let Some(count) = self.enemy_count {
            spawner = spawner.with_enemy_count(count);
        }
        if !self.boss {
            spawner = spawner.without_boss();
        }
        let entities = spawner.populate(&map, rng);

        debug!(
            rooms = map.rooms().len(),
            enemies = entities.enemies.len(),
            "generated world"
        );
        World { map, entities }
    }
}

/// Open walled arena with enemies at fixed cells. Deterministic; used for
/// demos and scripted tests.
#[derive(Clone, Debug)]
pub struct ArenaWorldFactory {
    size: MapDimensions,
    player: (i32, i32),
    enemies: Vec<(String, (i32, i32))>,
}

impl ArenaWorldFactory {
    pub fn new(size: MapDimensions, player: (i32, i32)) -> Self {
        Self {
            size,
            player,
            enemies: Vec::new(),
        }
    }

    pub fn with_enemy(mut self, archetype: impl Into<String>, cell: (i32, i32)) -> Self {
        self.enemies.push((archetype.into(), cell));
        self
    }
}

impl WorldFactory for ArenaWorldFactory {
    fn build(&self, config: &GameConfig, _rng: &mut StdRng) -> World {
        let map = TileMap::open_arena(self.size, config.map.tile_size);
        let (px, py) = self.player;
        let mut entities = EntitiesState::with_player(map.to_pixel_center(px, py), &config.player);
        for (archetype, (x, y)) in &self.enemies {
            let stats = config.archetypes.get_or_fallback(archetype);
            entities.spawn_enemy(map.to_pixel_center(*x, *y), archetype, stats);
        }
        World { map, entities }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn generated_world_honours_enemy_count() {
        let config = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(11);
        let world = GeneratedWorldFactory::new()
            .with_enemy_count(Some(3))
            .without_boss()
            .build(&config, &mut rng);
        assert!(world.entities.enemies.len() <= 3);
        assert!(world.map.is_walkable_at(world.entities.player.position));
    }

    #[test]
    fn arena_places_enemies_on_cell_centres() {
        let config = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(0);
        let world = ArenaWorldFactory::new(MapDimensions::new(12, 12), (3, 3))
            .with_enemy("bat", (5, 3))
            .build(&config, &mut rng);
        assert_eq!(world.entities.enemies.len(), 1);
        let bat = &world.entities.enemies[0];
        assert_eq!(bat.position, world.map.to_pixel_center(5, 3));
        assert_eq!(bat.display_name(), "bat");
    }
}
