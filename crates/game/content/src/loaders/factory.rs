//! Content factory for loading everything from a data directory.

use std::path::{Path, PathBuf};

use game_core::GameConfig;

use crate::loaders::{ArchetypeLoader, ConfigLoader, LoadResult};

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// └── archetypes.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub const CONFIG_FILE: &'static str = "config.toml";
    pub const ARCHETYPES_FILE: &'static str = "archetypes.ron";

    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Factory over the data files shipped with this crate.
    pub fn bundled() -> Self {
        Self::new(Self::bundled_data_dir())
    }

    pub fn bundled_data_dir() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Load game configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        ConfigLoader::load(&self.data_dir.join(Self::CONFIG_FILE))
    }

    /// Load the archetype table from `archetypes.ron`.
    pub fn load_archetypes(&self) -> LoadResult<game_core::ArchetypeTable> {
        ArchetypeLoader::load(&self.data_dir.join(Self::ARCHETYPES_FILE))
    }

    /// Load `config.toml` and replace its archetype table with `archetypes.ron`.
    pub fn load_game_config(&self) -> LoadResult<GameConfig> {
        let mut config = self.load_config()?;
        config.archetypes = self.load_archetypes()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{ArchetypeTable, CombatMode};

    #[test]
    fn bundled_files_parse() {
        let config = ContentFactory::bundled().load_game_config().unwrap();

        assert_eq!(config.combat.mode, CombatMode::Hybrid);
        assert_eq!(config.combat.trigger_radius, 48.0);
        assert_eq!(config.archetypes, ArchetypeTable::default());
    }

    #[test]
    fn missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let factory = ContentFactory::new(dir.path().join("absent"));
        assert!(factory.load_game_config().is_err());
    }
}
