//! Grid view of the map window a camera currently covers.
use game_core::{MapOracle, Position, TerrainKind, TileMap};
use runtime::Camera;

/// Position inside a [`MapView`], in cells from its top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScreenCell {
    pub col: usize,
    pub row: usize,
}

/// The cells visible through a camera, one entry per map cell.
///
/// Cells outside the map are reported as `None` so frontends can leave them
/// blank.
#[derive(Clone, Debug, PartialEq)]
pub struct MapView {
    /// Map cell shown at the top-left corner.
    pub origin: (i32, i32),
    pub width: usize,
    pub height: usize,
    pub rows: Vec<Vec<Option<TerrainKind>>>,
    tile_size: f32,
}

impl MapView {
    pub fn from_map(map: &TileMap, camera: &Camera) -> Self {
        let tile_size = map.tile_size();
        let (origin_x, origin_y) = map.cell_at(Position::new(camera.x, camera.y));
        let width = (camera.width / tile_size).ceil().max(0.0) as usize;
        let height = (camera.height / tile_size).ceil().max(0.0) as usize;

        let rows = (0..height as i32)
            .map(|dy| {
                (0..width as i32)
                    .map(|dx| map.terrain(origin_x + dx, origin_y + dy))
                    .collect()
            })
            .collect();

        Self {
            origin: (origin_x, origin_y),
            width,
            height,
            rows,
            tile_size,
        }
    }

    /// Screen cell showing a world position, if it is inside the view.
    pub fn cell_of(&self, position: Position) -> Option<ScreenCell> {
        let col = (position.x / self.tile_size).floor() as i32 - self.origin.0;
        let row = (position.y / self.tile_size).floor() as i32 - self.origin.1;
        let inside = (0..self.width as i32).contains(&col) && (0..self.height as i32).contains(&row);
        inside.then(|| ScreenCell {
            col: col as usize,
            row: row as usize,
        })
    }
}
