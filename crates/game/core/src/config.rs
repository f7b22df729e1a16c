//! Game configuration constants and tunable parameters.
//!
//! Every section deserializes with defaults so a TOML file only needs to name
//! the values it overrides.
use std::collections::BTreeMap;
use std::time::Duration;

use crate::combat::CombatMode;

#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    pub map: MapConfig,
    pub player: PlayerConfig,
    pub combat: CombatConfig,
    pub frame: FrameConfig,
    pub archetypes: ArchetypeTable,
}

impl GameConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Same defaults with a different combat mode.
    #[must_use]
    pub fn with_combat_mode(mut self, mode: CombatMode) -> Self {
        self.combat.mode = mode;
        self
    }
}

/// Grid size of the generated dungeon.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MapConfig {
    pub cols: u32,
    pub rows: u32,
    /// Side length of one cell in world units.
    pub tile_size: f32,
}

impl MapConfig {
    pub const DEFAULT_COLS: u32 = 40;
    pub const DEFAULT_ROWS: u32 = 30;
    pub const DEFAULT_TILE_SIZE: f32 = 32.0;
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            cols: Self::DEFAULT_COLS,
            rows: Self::DEFAULT_ROWS,
            tile_size: Self::DEFAULT_TILE_SIZE,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlayerConfig {
    /// World units per second.
    pub speed: f32,
    pub max_health: u32,
    pub attack_damage: u32,
    pub attack_range: f32,
    /// Health restored by one potion.
    pub potion_heal: u32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            speed: 120.0,
            max_health: 100,
            attack_damage: 12,
            attack_range: 36.0,
            potion_heal: 30,
        }
    }
}

/// Combat arbiter settings.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombatConfig {
    pub mode: CombatMode,
    /// Distance below which hybrid mode escalates to a turn-based session.
    pub trigger_radius: f32,
    /// Pause before an enemy's automatic action resolves.
    pub enemy_action_delay_ms: u64,
    /// Pause between one turn ending and the next being announced.
    pub turn_gap_ms: u64,
}

impl CombatConfig {
    pub const DEFAULT_TRIGGER_RADIUS: f32 = 48.0;
    pub const DEFAULT_ENEMY_ACTION_DELAY_MS: u64 = 700;
    pub const DEFAULT_TURN_GAP_MS: u64 = 150;

    pub fn enemy_action_delay(&self) -> Duration {
        Duration::from_millis(self.enemy_action_delay_ms)
    }

    pub fn turn_gap(&self) -> Duration {
        Duration::from_millis(self.turn_gap_ms)
    }

    /// Same settings with every pacing delay removed, so turns resolve
    /// synchronously inside the call that triggers them.
    #[must_use]
    pub fn immediate(mut self) -> Self {
        self.enemy_action_delay_ms = 0;
        self.turn_gap_ms = 0;
        self
    }
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self {
            mode: CombatMode::Hybrid,
            trigger_radius: Self::DEFAULT_TRIGGER_RADIUS,
            enemy_action_delay_ms: Self::DEFAULT_ENEMY_ACTION_DELAY_MS,
            turn_gap_ms: Self::DEFAULT_TURN_GAP_MS,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FrameConfig {
    /// Upper bound for a single simulation step, in seconds.
    pub max_step: f32,
    /// Per-frame chance that an idle enemy wanders.
    pub idle_roam_chance: f64,
    /// Largest idle jitter along each axis, in world units.
    pub idle_roam_distance: f32,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            max_step: 0.05,
            idle_roam_chance: 0.002,
            idle_roam_distance: 8.0,
        }
    }
}

/// Base stats for one enemy archetype.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArchetypeStats {
    pub health: u32,
    pub damage: u32,
    pub speed: f32,
    pub detection_radius: f32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub boss: bool,
}

impl ArchetypeStats {
    pub const DEFAULT_DETECTION_RADIUS: f32 = 160.0;

    /// Stats used for names missing from the table.
    pub const FALLBACK: Self = Self {
        health: 15,
        damage: 4,
        speed: 60.0,
        detection_radius: Self::DEFAULT_DETECTION_RADIUS,
        boss: false,
    };
}

/// Per-archetype stats keyed by archetype name.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ArchetypeTable {
    entries: BTreeMap<String, ArchetypeStats>,
}

impl ArchetypeTable {
    pub const SLIME: &'static str = "slime";
    pub const SKELETON: &'static str = "skeleton";
    pub const BAT: &'static str = "bat";
    pub const DRAGON: &'static str = "dragon";

    /// Archetypes that populate ordinary rooms.
    pub const COMMON: [&'static str; 3] = [Self::SLIME, Self::SKELETON, Self::BAT];

    pub fn new(entries: BTreeMap<String, ArchetypeStats>) -> Self {
        Self { entries }
    }

    pub fn get(&self, name: &str) -> Option<&ArchetypeStats> {
        self.entries.get(name)
    }

    /// Looks up `name`, falling back to [`ArchetypeStats::FALLBACK`].
    pub fn get_or_fallback(&self, name: &str) -> &ArchetypeStats {
        self.entries.get(name).unwrap_or(&ArchetypeStats::FALLBACK)
    }

    pub fn insert(&mut self, name: impl Into<String>, stats: ArchetypeStats) {
        self.entries.insert(name.into(), stats);
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ArchetypeTable {
    fn default() -> Self {
        let detect = ArchetypeStats::DEFAULT_DETECTION_RADIUS;
        let stats = |health, damage, speed, boss| ArchetypeStats {
            health,
            damage,
            speed,
            detection_radius: detect,
            boss,
        };

        let mut entries = BTreeMap::new();
        entries.insert(Self::SLIME.to_owned(), stats(20, 6, 40.0, false));
        entries.insert(Self::SKELETON.to_owned(), stats(30, 8, 60.0, false));
        entries.insert(Self::BAT.to_owned(), stats(15, 4, 80.0, false));
        entries.insert(Self::DRAGON.to_owned(), stats(250, 40, 60.0, true));
        Self { entries }
    }
}
