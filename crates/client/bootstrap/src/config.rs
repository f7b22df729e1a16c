//! Client bootstrap configuration and loaders.
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::warn;

use game_content::{ArchetypeLoader, ConfigLoader, ContentFactory};
use game_core::{CombatMode, GameConfig};
use runtime::RuntimeConfig;

/// Configuration required to assemble a world and start the runtime.
#[derive(Clone, Debug)]
pub struct BootstrapConfig {
    /// Directory holding `config.toml` and `archetypes.ron`.
    pub data_dir: PathBuf,
    /// Explicit game config file, overriding `data_dir/config.toml`.
    pub config_path: Option<PathBuf>,
    /// Explicit archetype table, overriding `data_dir/archetypes.ron`.
    pub archetypes_path: Option<PathBuf>,
    /// World seed. Random when unset.
    pub seed: Option<u64>,
    /// Overrides the combat mode from the config file.
    pub combat_mode: Option<CombatMode>,
    /// Built-in frame clock period; `None` means frames are stepped by hand.
    pub frame_interval: Option<Duration>,
    /// Overrides the spawner's enemy count.
    pub enemy_count: Option<usize>,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            data_dir: ContentFactory::bundled_data_dir(),
            config_path: None,
            archetypes_path: None,
            seed: None,
            combat_mode: None,
            frame_interval: Some(RuntimeConfig::DEFAULT_FRAME_INTERVAL),
            enemy_count: None,
        }
    }
}

impl BootstrapConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `CONTENT_DATA_DIR` - Data directory (default: bundled game-content data)
    /// - `GAME_CONFIG` - Path to a TOML game config
    /// - `GAME_ARCHETYPES` - Path to a RON archetype table
    /// - `GAME_SEED` - World seed (default: random)
    /// - `COMBAT_MODE` - `real_time`, `turn_based` or `hybrid`
    /// - `FRAME_INTERVAL_MS` - Frame clock period, `0` disables it (default: 16)
    /// - `GAME_ENEMIES` - Number of ordinary enemies to spawn
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = env::var("CONTENT_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }
        config.config_path = env::var("GAME_CONFIG").ok().map(PathBuf::from);
        config.archetypes_path = env::var("GAME_ARCHETYPES").ok().map(PathBuf::from);
        config.seed = read_env::<u64>("GAME_SEED");
        config.combat_mode = read_env::<CombatMode>("COMBAT_MODE");
        if let Some(ms) = read_env::<u64>("FRAME_INTERVAL_MS") {
            config.frame_interval = frame_interval_from_millis(ms);
        }
        config.enemy_count = read_env::<usize>("GAME_ENEMIES");

        config
    }

    /// Loads the game config and archetype table, then applies overrides.
    pub fn load_game_config(&self) -> Result<GameConfig> {
        let factory = ContentFactory::new(&self.data_dir);

        let mut game_config = match &self.config_path {
            Some(path) => ConfigLoader::load(path),
            None => factory.load_config(),
        }
        .context("loading game config")?;

        game_config.archetypes = match &self.archetypes_path {
            Some(path) => ArchetypeLoader::load(path),
            None => factory.load_archetypes(),
        }
        .context("loading archetype table")?;

        if let Some(mode) = self.combat_mode {
            game_config.combat.mode = mode;
        }
        Ok(game_config)
    }
}

fn frame_interval_from_millis(ms: u64) -> Option<Duration> {
    (ms > 0).then(|| Duration::from_millis(ms))
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: FromStr,
{
    let raw = env::var(key).ok()?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(key, value = %raw, "ignoring unparsable environment variable");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_load_bundled_content() {
        let config = BootstrapConfig::default().load_game_config().unwrap();
        assert_eq!(config.combat.mode, CombatMode::Hybrid);
        assert!(config.archetypes.get("dragon").is_some());
    }

    #[test]
    fn mode_override_wins_over_file() {
        let config = BootstrapConfig {
            combat_mode: Some(CombatMode::RealTime),
            ..BootstrapConfig::default()
        };
        assert_eq!(
            config.load_game_config().unwrap().combat.mode,
            CombatMode::RealTime
        );
    }

    #[test]
    fn explicit_archetype_file_replaces_bundled_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.ron");
        std::fs::write(
            &path,
            r#"{ "rat": (health: 5, damage: 1, speed: 90.0, detection_radius: 120.0) }"#,
        )
        .unwrap();

        let config = BootstrapConfig {
            archetypes_path: Some(path),
            ..BootstrapConfig::default()
        };
        let loaded = config.load_game_config().unwrap();
        assert_eq!(loaded.archetypes.len(), 1);
        assert_eq!(loaded.archetypes.get("rat").unwrap().health, 5);
    }

    #[test]
    fn missing_data_dir_is_an_error() {
        let config = BootstrapConfig {
            data_dir: PathBuf::from("/nonexistent/dungeon-data"),
            ..BootstrapConfig::default()
        };
        assert!(config.load_game_config().is_err());
    }

    #[test]
    fn zero_interval_means_manual_stepping() {
        assert_eq!(frame_interval_from_millis(0), None);
        assert_eq!(
            frame_interval_from_millis(33),
            Some(Duration::from_millis(33))
        );
    }
}
