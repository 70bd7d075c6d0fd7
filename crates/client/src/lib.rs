//! Replay client for the warband tactical core.
//!
//! Loads a tactics config and a recorded scenario, then feeds the scenario's
//! frames through a [`runtime::TacticsSession`] and logs every command the
//! session emits.

pub mod config;
pub mod replay;

pub use config::ReplayConfig;
pub use replay::{Replay, ReplaySummary};

use anyhow::{Context, Result};
use game_content::{ConfigLoader, ContentFactory, ScenarioLoader};

/// Loads every input named by `config` and replays the scenario.
///
/// # Errors
///
/// Fails when no scenario is configured, a data file cannot be read or
/// parsed, or the session rejects the config or map.
pub fn run(config: &ReplayConfig) -> Result<ReplaySummary> {
    let scenario_path = config
        .scenario_path
        .as_deref()
        .context("no scenario given; set WARBAND_SCENARIO or pass a path")?;

    let factory = ContentFactory::new(&config.data_dir);
    let tactics = match &config.config_path {
        Some(path) => ConfigLoader::load(path)?,
        None => factory.load_config()?,
    };

    let scenario = ScenarioLoader::load(scenario_path)?;
    let composition = match &scenario.composition {
        Some(composition) => composition.clone(),
        None => factory.load_composition(scenario.race)?,
    };

    tracing::info!(
        scenario = %scenario_path.display(),
        race = %scenario.race,
        frames = scenario.frames.len(),
        "starting replay"
    );

    let replay = Replay::new(tactics, &scenario, composition)?;
    Ok(replay.run(&scenario.frames))
}
