//! Army composition loader.

use std::path::Path;

use game_core::ArmyComposition;

use crate::loaders::{LoadResult, read_file};

/// Loader for [`ArmyComposition`] tables from RON files.
///
/// The file is a map from unit type to entry:
///
/// ```ron
/// {
///     Roach: (proportion: 0.7, priority: 0),
///     Hydralisk: (proportion: 0.3, priority: 1),
/// }
/// ```
pub struct CompositionLoader;

impl CompositionLoader {
    pub fn load(path: &Path) -> LoadResult<ArmyComposition> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parses a table and checks its proportions sum to one.
    pub fn parse(content: &str) -> LoadResult<ArmyComposition> {
        let composition: ArmyComposition = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse composition RON: {}", e))?;
        composition
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid composition: {}", e))?;
        Ok(composition)
    }
}
