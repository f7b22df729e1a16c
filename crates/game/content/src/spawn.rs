//! Initial population of a generated dungeon.

use rand::Rng;
use rand::seq::SliceRandom;

use game_core::{ArchetypeTable, EntitiesState, GameConfig, MapOracle, Room, TileMap};

/// Places the player and the enemy roster on a generated map.
#[derive(Clone, Debug)]
pub struct Spawner<'a> {
    config: &'a GameConfig,
    enemy_count: usize,
    boss: Option<&'a str>,
}

impl<'a> Spawner<'a> {
    pub const DEFAULT_ENEMY_COUNT: usize = 8;
    /// Tries per enemy before giving up on a flooded spot.
    const PLACEMENT_ATTEMPTS: usize = 4;
    /// Used when the generator produced no rooms at all.
    const FALLBACK_ROOM: Room = Room::new(2, 2, 4, 4);

    pub fn new(config: &'a GameConfig) -> Self {
        Self {
            config,
            enemy_count: Self::DEFAULT_ENEMY_COUNT,
            boss: Some(ArchetypeTable::DRAGON),
        }
    }

    #[must_use]
    pub fn with_enemy_count(mut self, count: usize) -> Self {
        self.enemy_count = count;
        self
    }

    #[must_use]
    pub fn without_boss(mut self) -> Self {
        self.boss = None;
        self
    }

    /// Player at the first room's centre, common enemies in random room
    /// interiors, and the boss at the last room's centre.
    pub fn populate(&self, map: &TileMap, rng: &mut impl Rng) -> EntitiesState {
        let rooms = map.rooms();
        let start = rooms.first().copied().unwrap_or(Self::FALLBACK_ROOM);
        let (sx, sy) = start.center();
        let mut entities =
            EntitiesState::with_player(map.to_pixel_center(sx, sy), &self.config.player);

        for _ in 0..self.enemy_count {
            let Some((cx, cy)) = self.pick_interior(map, rng) else {
                continue;
            };
            let Some(&archetype) = ArchetypeTable::COMMON.choose(rng) else {
                continue;
            };
            entities.spawn_enemy(
                map.to_pixel_center(cx, cy),
                archetype,
                self.config.archetypes.get_or_fallback(archetype),
            );
        }

        if let Some(boss) = self.boss
            && let Some(last) = rooms.last()
        {
            let (bx, by) = last.center();
            entities.spawn_enemy(
                map.to_pixel_center(bx, by),
                boss,
                self.config.archetypes.get_or_fallback(boss),
            );
        }
        entities
    }

    fn pick_interior(&self, map: &TileMap, rng: &mut impl Rng) -> Option<(i32, i32)> {
        for _ in 0..Self::PLACEMENT_ATTEMPTS {
            let room = map.rooms().choose(rng)?;
            let cx = room.x + 1 + rng.gen_range(0..(room.w - 2).max(1));
            let cy = room.y + 1 + rng.gen_range(0..(room.h - 2).max(1));
            if map.is_walkable(cx, cy) {
                return Some((cx, cy));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MapGenerator;
    use game_core::EntityId;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn dungeon(seed: u64) -> (GameConfig, TileMap, StdRng) {
        let config = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(seed);
        let map = MapGenerator::new(config.map).generate(&mut rng);
        (config, map, rng)
    }

    #[test]
    fn player_starts_in_first_room() {
        let (config, map, mut rng) = dungeon(11);
        let entities = Spawner::new(&config).populate(&map, &mut rng);
        let (cx, cy) = map.rooms()[0].center();
        assert_eq!(entities.player.id, EntityId::PLAYER);
        assert_eq!(entities.player.position, map.to_pixel_center(cx, cy));
    }

    #[test]
    fn dragon_guards_last_room() {
        let (config, map, mut rng) = dungeon(12);
        let entities = Spawner::new(&config).populate(&map, &mut rng);
        let boss = entities.enemies.last().unwrap();
        let (cx, cy) = map.rooms().last().unwrap().center();
        assert_eq!(boss.display_name(), "dragon");
        assert!(boss.as_enemy().unwrap().is_boss);
        assert_eq!(boss.position, map.to_pixel_center(cx, cy));
    }

    #[test]
    fn enemies_spawn_on_walkable_cells() {
        for seed in 0..20 {
            let (config, map, mut rng) = dungeon(seed);
            let entities = Spawner::new(&config).populate(&map, &mut rng);
            assert!(entities.enemies.len() <= Spawner::DEFAULT_ENEMY_COUNT + 1);
            for enemy in &entities.enemies {
                assert!(map.is_walkable_at(enemy.position), "seed {seed}");
                let name = enemy.display_name();
                assert!(name == "dragon" || ArchetypeTable::COMMON.contains(&name));
            }
        }
    }

    #[test]
    fn enemy_count_is_configurable() {
        let (config, map, mut rng) = dungeon(5);
        let entities = Spawner::new(&config)
            .with_enemy_count(0)
            .without_boss()
            .populate(&map, &mut rng);
        assert!(entities.enemies.is_empty());
    }
}
