//! Content factory for loading tactical data from a directory.

use std::path::{Path, PathBuf};

use game_core::{ArmyComposition, Race, TacticsConfig};
use tracing::debug;

use crate::loaders::{CompositionLoader, ConfigLoader, LoadResult, Scenario, ScenarioLoader};

/// Content factory that loads all tactical content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── compositions/
/// │   ├── terran.ron
/// │   └── zerg.ron
/// └── scenarios/
///     └── skirmish.ron
/// ```
///
/// Missing `config.toml` or composition files fall back to built-in defaults.
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load `config.toml`, or the defaults when it does not exist.
    pub fn load_config(&self) -> LoadResult<TacticsConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(TacticsConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load `compositions/{race}.ron`, or the race default when absent.
    pub fn load_composition(&self, race: Race) -> LoadResult<ArmyComposition> {
        let name: &'static str = race.into();
        let path = self
            .data_dir
            .join("compositions")
            .join(format!("{}.ron", name.to_lowercase()));
        if !path.exists() {
            debug!(%race, "no composition file, using race default");
            return Ok(ArmyComposition::default_for(race));
        }
        CompositionLoader::load(&path)
    }

    /// Load `scenarios/{name}.ron`.
    pub fn load_scenario(&self, name: &str) -> LoadResult<Scenario> {
        let path = self.data_dir.join("scenarios").join(format!("{}.ron", name));
        ScenarioLoader::load(&path)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use game_core::UnitTypeId;

    use super::*;

    #[test]
    fn empty_directory_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let factory = ContentFactory::new(dir.path());
        assert_eq!(factory.load_config().unwrap(), TacticsConfig::default());
        assert_eq!(
            factory.load_composition(Race::Protoss).unwrap(),
            ArmyComposition::default_for(Race::Protoss)
        );
        assert!(factory.load_scenario("missing").is_err());
    }

    #[test]
    fn composition_file_is_picked_by_race() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("compositions")).unwrap();
        std::fs::write(
            dir.path().join("compositions/terran.ron"),
            "{ Marine: (proportion: 0.8, priority: 0), Marauder: (proportion: 0.2, priority: 1) }",
        )
        .unwrap();

        let factory = ContentFactory::new(dir.path());
        let composition = factory.load_composition(Race::Terran).unwrap();
        assert_eq!(composition.len(), 2);
        assert!(composition.get(UnitTypeId::Marauder).is_some());
        assert_eq!(
            factory.load_composition(Race::Zerg).unwrap(),
            ArmyComposition::default_for(Race::Zerg)
        );
    }
}
