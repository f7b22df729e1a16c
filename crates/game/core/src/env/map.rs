use crate::state::Position;

/// Read-only map queries used by movement and rendering.
///
/// Movement logic only ever asks questions through this trait; nothing in the
/// core mutates map state after generation.
pub trait MapOracle: Send + Sync {
    fn dimensions(&self) -> MapDimensions;

    /// Side length of one cell in world units.
    fn tile_size(&self) -> f32;

    fn terrain(&self, cell_x: i32, cell_y: i32) -> Option<TerrainKind>;

    /// Out-of-bounds cells are never walkable.
    fn is_walkable(&self, cell_x: i32, cell_y: i32) -> bool {
        self.terrain(cell_x, cell_y)
            .is_some_and(TerrainKind::is_passable)
    }

    /// World position of the centre of a cell.
    fn to_pixel_center(&self, cell_x: i32, cell_y: i32) -> Position {
        let t = self.tile_size();
        Position::new(cell_x as f32 * t + t / 2.0, cell_y as f32 * t + t / 2.0)
    }

    /// Cell containing a world position.
    fn cell_at(&self, position: Position) -> (i32, i32) {
        let t = self.tile_size();
        ((position.x / t).floor() as i32, (position.y / t).floor() as i32)
    }

    fn is_walkable_at(&self, position: Position) -> bool {
        let (cx, cy) = self.cell_at(position);
        self.is_walkable(cx, cy)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapDimensions {
    pub width: u32,
    pub height: u32,
}

impl MapDimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, cell_x: i32, cell_y: i32) -> bool {
        cell_x >= 0 && cell_y >= 0 && cell_x < self.width as i32 && cell_y < self.height as i32
    }
}

/// Canonical terrain classes for map cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum TerrainKind {
    Floor,
    Wall,
    Water,
}

impl TerrainKind {
    pub fn is_passable(self) -> bool {
        matches!(self, TerrainKind::Floor)
    }
}

/// Axis-aligned rectangle of carved floor, in cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Room {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Room {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub fn center(&self) -> (i32, i32) {
        (self.x + self.w / 2, self.y + self.h / 2)
    }

    /// True when the rooms overlap or touch edge to edge.
    pub fn intersects(&self, other: &Room) -> bool {
        !(self.x + self.w < other.x
            || other.x + other.w < self.x
            || self.y + self.h < other.y
            || other.y + other.h < self.y)
    }

    pub fn contains(&self, cell_x: i32, cell_y: i32) -> bool {
        cell_x >= self.x && cell_x < self.x + self.w && cell_y >= self.y && cell_y < self.y + self.h
    }
}

/// Dense tile grid plus the rooms it was carved from.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileMap {
    dimensions: MapDimensions,
    tile_size: f32,
    cells: Vec<TerrainKind>,
    rooms: Vec<Room>,
}

impl TileMap {
    /// A map made entirely of walls.
    pub fn solid(dimensions: MapDimensions, tile_size: f32) -> Self {
        let len = (dimensions.width * dimensions.height) as usize;
        Self {
            dimensions,
            tile_size,
            cells: vec![TerrainKind::Wall; len],
            rooms: Vec::new(),
        }
    }

    /// A walled rectangle with open floor inside; handy for tests and demos.
    pub fn open_arena(dimensions: MapDimensions, tile_size: f32) -> Self {
        let mut map = Self::solid(dimensions, tile_size);
        let room = Room::new(
            1,
            1,
            dimensions.width as i32 - 2,
            dimensions.height as i32 - 2,
        );
        map.carve_room(room);
        map
    }

    fn index(&self, cell_x: i32, cell_y: i32) -> Option<usize> {
        self.dimensions
            .contains(cell_x, cell_y)
            .then(|| (cell_y as u32 * self.dimensions.width + cell_x as u32) as usize)
    }

    pub fn set(&mut self, cell_x: i32, cell_y: i32, terrain: TerrainKind) {
        if let Some(idx) = self.index(cell_x, cell_y) {
            self.cells[idx] = terrain;
        }
    }

    /// Fills `room` with floor and records it.
    pub fn carve_room(&mut self, room: Room) {
        for y in room.y..room.y + room.h {
            for x in room.x..room.x + room.w {
                self.set(x, y, TerrainKind::Floor);
            }
        }
        self.rooms.push(room);
    }

    pub fn carve_horizontal(&mut self, x1: i32, x2: i32, y: i32) {
        for x in x1.min(x2)..=x1.max(x2) {
            self.set(x, y, TerrainKind::Floor);
        }
    }

    pub fn carve_vertical(&mut self, y1: i32, y2: i32, x: i32) {
        for y in y1.min(y2)..=y1.max(y2) {
            self.set(x, y, TerrainKind::Floor);
        }
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Size of the whole map in world units.
    pub fn pixel_size(&self) -> (f32, f32) {
        (
            self.dimensions.width as f32 * self.tile_size,
            self.dimensions.height as f32 * self.tile_size,
        )
    }
}

impl MapOracle for TileMap {
    fn dimensions(&self) -> MapDimensions {
        self.dimensions
    }

    fn tile_size(&self) -> f32 {
        self.tile_size
    }

    fn terrain(&self, cell_x: i32, cell_y: i32) -> Option<TerrainKind> {
        self.index(cell_x, cell_y).map(|idx| self.cells[idx])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arena() -> TileMap {
        TileMap::open_arena(MapDimensions::new(6, 5), 32.0)
    }

    #[test]
    fn out_of_bounds_is_not_walkable() {
        let map = arena();
        assert!(!map.is_walkable(-1, 2));
        assert!(!map.is_walkable(6, 2));
        assert!(!map.is_walkable(2, 5));
    }

    #[test]
    fn walls_and_water_block() {
        let mut map = arena();
        assert!(!map.is_walkable(0, 0));
        assert!(map.is_walkable(2, 2));
        map.set(2, 2, TerrainKind::Water);
        assert!(!map.is_walkable(2, 2));
    }

    #[test]
    fn pixel_center_round_trips_to_cell() {
        let map = arena();
        let center = map.to_pixel_center(3, 2);
        assert_eq!(center, Position::new(112.0, 80.0));
        assert_eq!(map.cell_at(center), (3, 2));
    }

    #[test]
    fn touching_rooms_intersect() {
        let a = Room::new(1, 1, 3, 3);
        assert!(a.intersects(&Room::new(4, 1, 3, 3)));
        assert!(!a.intersects(&Room::new(5, 1, 3, 3)));
    }
}
