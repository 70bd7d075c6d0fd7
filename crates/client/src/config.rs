//! Replay configuration from the command line and environment.

use std::path::PathBuf;

use clap::Parser;

/// Replay a recorded scenario through the tactics core
#[derive(Clone, Debug, PartialEq, Parser)]
#[command(name = "warband")]
#[command(about = "Replay a recorded scenario through the tactics core", long_about = None)]
#[command(version)]
pub struct ReplayConfig {
    /// RON replay scenario
    #[arg(value_name = "SCENARIO", env = "WARBAND_SCENARIO")]
    pub scenario_path: Option<PathBuf>,

    /// TOML tactics config; overrides `<DATA_DIR>/config.toml`
    #[arg(value_name = "CONFIG", env = "WARBAND_CONFIG")]
    pub config_path: Option<PathBuf>,

    /// Directory holding `config.toml` and `compositions/`
    #[arg(
        short,
        long,
        value_name = "DIR",
        env = "WARBAND_DATA_DIR",
        default_value = ReplayConfig::DEFAULT_DATA_DIR
    )]
    pub data_dir: PathBuf,
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            scenario_path: None,
            config_path: None,
            data_dir: PathBuf::from(Self::DEFAULT_DATA_DIR),
        }
    }
}

impl ReplayConfig {
    pub const DEFAULT_DATA_DIR: &'static str = "data";
}
