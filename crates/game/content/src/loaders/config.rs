//! Game configuration loader.

use std::path::Path;

use game_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Sections and keys missing from the file keep their defaults.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse config data from TOML text.
    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::CombatMode;
    use std::io::Write;

    #[test]
    fn partial_file_keeps_defaults() {
        let config = ConfigLoader::parse(
            r#"
            [combat]
            mode = "turn_based"
            turn_gap_ms = 0
            "#,
        )
        .unwrap();

        assert_eq!(config.combat.mode, CombatMode::TurnBased);
        assert_eq!(config.combat.turn_gap_ms, 0);
        assert_eq!(config.combat.enemy_action_delay_ms, 700);
        assert_eq!(config.map.cols, 40);
        assert_eq!(config.player.max_health, 100);
    }

    #[test]
    fn unknown_mode_is_rejected() {
        let err = ConfigLoader::parse("[combat]\nmode = \"arcade\"\n").unwrap_err();
        assert!(err.to_string().contains("Failed to parse config TOML"));
    }

    #[test]
    fn load_reads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[player]\nspeed = 200.0").unwrap();

        let config = ConfigLoader::load(file.path()).unwrap();
        assert_eq!(config.player.speed, 200.0);
    }

    #[test]
    fn missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");
        let err = ConfigLoader::load(&path).unwrap_err();
        assert!(err.to_string().contains("nope.toml"));
    }
}
