//! Tactics configuration loader.

use std::path::Path;

use game_core::TacticsConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for [`TacticsConfig`] from TOML files.
///
/// Missing keys fall back to the defaults, so a file only lists overrides.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and validate config data from a TOML file.
    pub fn load(path: &Path) -> LoadResult<TacticsConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse and validate config data from TOML text.
    pub fn parse(content: &str) -> LoadResult<TacticsConfig> {
        let config: TacticsConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        config
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid config: {}", e))?;
        Ok(config)
    }
}
