//! Camera and the per-frame draw contract.
//!
//! The game loop never draws anything itself. Every frame it calls a
//! [`FrameRenderer`] in a fixed back-to-front order: map, each enemy, player,
//! then the HUD. [`SnapshotRenderer`] is the renderer the runtime worker uses;
//! it turns those calls into a [`FrameSnapshot`] that frontends display.

use serde::{Deserialize, Serialize};

use game_core::{
    AnimationTimer, CombatMode, Combatant, EntityId, ItemStack, Position, ResourceMeter, TileMap,
};

/// Viewport into the world, in world units.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Camera {
    pub const DEFAULT_WIDTH: f32 = 960.0;
    pub const DEFAULT_HEIGHT: f32 = 640.0;

    pub fn new(width: f32, height: f32) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width,
            height,
        }
    }

    /// Centres on `target`, clamped so the view never leaves the map.
    ///
    /// On maps smaller than the viewport the camera pins to the origin.
    pub fn follow(&mut self, target: Position, map_size: (f32, f32)) {
        let (map_w, map_h) = map_size;
        self.x = (target.x - self.width / 2.0).min(map_w - self.width).max(0.0);
        self.y = (target.y - self.height / 2.0).min(map_h - self.height).max(0.0);
    }

    pub fn to_screen(&self, position: Position) -> (f32, f32) {
        (position.x - self.x, position.y - self.y)
    }

    pub fn contains(&self, position: Position) -> bool {
        let (sx, sy) = self.to_screen(position);
        (0.0..=self.width).contains(&sx) && (0.0..=self.height).contains(&sy)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WIDTH, Self::DEFAULT_HEIGHT)
    }
}

/// Whether the run is still going.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    Playing,
    Defeated,
}

/// Readouts shown around the map: health, purse, combat state.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HudView {
    pub health: ResourceMeter,
    pub coins: u32,
    pub potions: u32,
    pub inventory: Vec<ItemStack>,
    pub mode: CombatMode,
    pub status: GameStatus,
    pub in_session: bool,
    pub player_turn: bool,
    pub current: Option<EntityId>,
    pub queue: Vec<EntityId>,
}

/// One drawable combatant.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CombatantView {
    pub id: EntityId,
    pub name: String,
    pub position: Position,
    pub health: ResourceMeter,
    pub frame: u8,
    pub is_boss: bool,
}

impl CombatantView {
    pub fn from_combatant(combatant: &Combatant) -> Self {
        Self {
            id: combatant.id,
            name: combatant.display_name().to_owned(),
            position: combatant.position,
            health: combatant.health,
            frame: combatant.animation.frame % AnimationTimer::FRAME_COUNT,
            is_boss: combatant.as_enemy().is_some_and(|enemy| enemy.is_boss),
        }
    }
}

/// Everything a frontend needs to draw one frame, minus the static map.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub frame: u64,
    pub camera: Camera,
    pub enemies: Vec<CombatantView>,
    pub player: Option<CombatantView>,
    pub hud: HudView,
}

/// Draw calls issued once per frame, in declaration order.
pub trait FrameRenderer {
    fn draw_map(&mut self, map: &TileMap, camera: &Camera);
    fn draw_enemy(&mut self, enemy: &Combatant, camera: &Camera);
    fn draw_player(&mut self, player: &Combatant, camera: &Camera);
    fn draw_hud(&mut self, hud: &HudView);
}

/// Renderer that ignores every call.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullRenderer;

impl FrameRenderer for NullRenderer {
    fn draw_map(&mut self, _map: &TileMap, _camera: &Camera) {}
    fn draw_enemy(&mut self, _enemy: &Combatant, _camera: &Camera) {}
    fn draw_player(&mut self, _player: &Combatant, _camera: &Camera) {}
    fn draw_hud(&mut self, _hud: &HudView) {}
}

/// Collects draw calls into a [`FrameSnapshot`].
///
/// `draw_map` opens a new frame; the snapshot is complete after `draw_hud`.
#[derive(Clone, Debug, Default)]
pub struct SnapshotRenderer {
    building: FrameSnapshot,
    frames: u64,
}

impl SnapshotRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently assembled frame.
    pub fn snapshot(&self) -> &FrameSnapshot {
        &self.building
    }
}

impl FrameRenderer for SnapshotRenderer {
    fn draw_map(&mut self, _map: &TileMap, camera: &Camera) {
        self.frames += 1;
        self.building = FrameSnapshot {
            frame: self.frames,
            camera: *camera,
            ..FrameSnapshot::default()
        };
    }

    fn draw_enemy(&mut self, enemy: &Combatant, camera: &Camera) {
        if camera.contains(enemy.position) {
            self.building
                .enemies
                .push(CombatantView::from_combatant(enemy));
        }
    }

    fn draw_player(&mut self, player: &Combatant, _camera: &Camera) {
        self.building.player = Some(CombatantView::from_combatant(player));
    }

    fn draw_hud(&mut self, hud: &HudView) {
        self.building.hud = hud.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camera_centres_on_target() {
        let mut camera = Camera::new(100.0, 80.0);
        camera.follow(Position::new(500.0, 400.0), (1280.0, 960.0));
        assert_eq!((camera.x, camera.y), (450.0, 360.0));
        assert_eq!(camera.to_screen(Position::new(500.0, 400.0)), (50.0, 40.0));
    }

    #[test]
    fn camera_clamps_to_map_edges() {
        let mut camera = Camera::new(100.0, 80.0);
        camera.follow(Position::new(10.0, 10.0), (1280.0, 960.0));
        assert_eq!((camera.x, camera.y), (0.0, 0.0));

        camera.follow(Position::new(1275.0, 955.0), (1280.0, 960.0));
        assert_eq!((camera.x, camera.y), (1180.0, 880.0));
    }

    #[test]
    fn camera_pins_on_small_maps() {
        let mut camera = Camera::default();
        camera.follow(Position::new(100.0, 100.0), (320.0, 320.0));
        assert_eq!((camera.x, camera.y), (0.0, 0.0));
    }
}
