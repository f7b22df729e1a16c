//! Random room-and-corridor dungeon generation.

use rand::Rng;

use game_core::{MapConfig, MapDimensions, Room, TerrainKind, TileMap};

/// Builds a [`TileMap`] of non-overlapping rooms joined by L-shaped corridors.
///
/// Generation is driven entirely by the supplied RNG, so a seeded
/// [`rand::rngs::StdRng`] reproduces the same dungeon.
#[derive(Clone, Debug)]
pub struct MapGenerator {
    config: MapConfig,
    room_attempts: usize,
    min_room: i32,
    max_room: i32,
    water_cells: usize,
}

impl MapGenerator {
    pub const DEFAULT_ROOM_ATTEMPTS: usize = 10;
    pub const DEFAULT_WATER_CELLS: usize = 10;
    const MIN_ROOM: i32 = 3;
    const MAX_ROOM: i32 = 8;

    pub fn new(config: MapConfig) -> Self {
        Self {
            config,
            room_attempts: Self::DEFAULT_ROOM_ATTEMPTS,
            min_room: Self::MIN_ROOM,
            max_room: Self::MAX_ROOM,
            water_cells: Self::DEFAULT_WATER_CELLS,
        }
    }

    #[must_use]
    pub fn with_room_attempts(mut self, attempts: usize) -> Self {
        self.room_attempts = attempts;
        self
    }

    #[must_use]
    pub fn with_water_cells(mut self, cells: usize) -> Self {
        self.water_cells = cells;
        self
    }

    pub fn generate(&self, rng: &mut impl Rng) -> TileMap {
        let dimensions = MapDimensions::new(self.config.cols, self.config.rows);
        let cols = self.config.cols as i32;
        let rows = self.config.rows as i32;

        // A room needs a one-cell wall border plus at least one cell of slack.
        let max_w = self.max_room.min(cols - 3);
        let max_h = self.max_room.min(rows - 3);
        if max_w < self.min_room || max_h < self.min_room {
            return TileMap::open_arena(dimensions, self.config.tile_size);
        }

        let mut map = TileMap::solid(dimensions, self.config.tile_size);
        for _ in 0..self.room_attempts {
            let w = rng.gen_range(self.min_room..=max_w);
            let h = rng.gen_range(self.min_room..=max_h);
            let x = 1 + rng.gen_range(0..cols - w - 2);
            let y = 1 + rng.gen_range(0..rows - h - 2);
            let room = Room::new(x, y, w, h);

            if map.rooms().iter().any(|existing| existing.intersects(&room)) {
                continue;
            }
            let previous = map.rooms().last().copied();
            map.carve_room(room);
            if let Some(previous) = previous {
                connect(&mut map, previous, room, rng.gen_bool(0.5));
            }
        }

        self.scatter_water(&mut map, cols, rows, rng);
        map
    }

    /// Floods random interior cells, leaving room centres dry so spawn
    /// points stay walkable.
    fn scatter_water(&self, map: &mut TileMap, cols: i32, rows: i32, rng: &mut impl Rng) {
        for _ in 0..self.water_cells {
            let cx = 1 + rng.gen_range(0..cols - 2);
            let cy = 1 + rng.gen_range(0..rows - 2);
            if map.rooms().iter().any(|room| room.center() == (cx, cy)) {
                continue;
            }
            map.set(cx, cy, TerrainKind::Water);
        }
    }
}

fn connect(map: &mut TileMap, from: Room, to: Room, horizontal_first: bool) {
    let (ax, ay) = from.center();
    let (bx, by) = to.center();
    if horizontal_first {
        map.carve_horizontal(ax, bx, ay);
        map.carve_vertical(ay, by, bx);
    } else {
        map.carve_vertical(ay, by, ax);
        map.carve_horizontal(ax, bx, by);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::MapOracle;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn same_seed_same_map() {
        let generator = MapGenerator::new(MapConfig::default());
        let a = generator.generate(&mut StdRng::seed_from_u64(7));
        let b = generator.generate(&mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn rooms_never_overlap_and_centres_stay_walkable() {
        let generator = MapGenerator::new(MapConfig::default());
        for seed in 0..50 {
            let map = generator.generate(&mut StdRng::seed_from_u64(seed));
            let rooms = map.rooms();
            assert!(!rooms.is_empty());
            for (i, a) in rooms.iter().enumerate() {
                let (cx, cy) = a.center();
                assert!(map.is_walkable(cx, cy), "seed {seed}: room {i} centre blocked");
                for b in &rooms[i + 1..] {
                    assert!(!a.intersects(b), "seed {seed}: rooms overlap");
                }
            }
        }
    }

    #[test]
    fn border_stays_solid() {
        let generator = MapGenerator::new(MapConfig::default()).with_water_cells(0);
        let map = generator.generate(&mut StdRng::seed_from_u64(3));
        let dims = map.dimensions();
        for x in 0..dims.width as i32 {
            assert_eq!(map.terrain(x, 0), Some(TerrainKind::Wall));
            assert_eq!(map.terrain(x, dims.height as i32 - 1), Some(TerrainKind::Wall));
        }
    }

    #[test]
    fn tiny_maps_fall_back_to_arena() {
        let config = MapConfig {
            cols: 5,
            rows: 5,
            tile_size: 16.0,
        };
        let map = MapGenerator::new(config).generate(&mut StdRng::seed_from_u64(1));
        assert_eq!(map.rooms().len(), 1);
        assert!(map.is_walkable(2, 2));
    }
}
