//! Enemy archetype table loader.

use std::path::Path;

use game_core::ArchetypeTable;

use crate::loaders::{LoadResult, read_file};

/// Loader for the archetype stat table from RON files.
pub struct ArchetypeLoader;

impl ArchetypeLoader {
    /// Load an archetype table from a RON file.
    ///
    /// RON format: `{ "name": (health: u32, damage: u32, speed: f32, detection_radius: f32, boss: bool) }`
    /// where `boss` may be omitted.
    pub fn load(path: &Path) -> LoadResult<ArchetypeTable> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<ArchetypeTable> {
        let table: ArchetypeTable = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse archetype RON: {}", e))?;

        if table.is_empty() {
            anyhow::bail!("Archetype table is empty");
        }
        for name in table.names() {
            let stats = table.get_or_fallback(name);
            if stats.health == 0 {
                anyhow::bail!("Archetype '{}' has zero health", name);
            }
        }
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boss_flag_is_optional() {
        let table = ArchetypeLoader::parse(
            r#"{
                "imp": (health: 9, damage: 3, speed: 90.0, detection_radius: 120.0),
                "lich": (health: 80, damage: 15, speed: 30.0, detection_radius: 200.0, boss: true),
            }"#,
        )
        .unwrap();

        assert_eq!(table.len(), 2);
        assert!(!table.get("imp").unwrap().boss);
        assert!(table.get("lich").unwrap().boss);
    }

    #[test]
    fn zero_health_is_rejected() {
        let err = ArchetypeLoader::parse(
            r#"{ "ghost": (health: 0, damage: 1, speed: 10.0, detection_radius: 10.0) }"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("ghost"));
    }

    #[test]
    fn empty_table_is_rejected() {
        assert!(ArchetypeLoader::parse("{}").is_err());
    }
}
