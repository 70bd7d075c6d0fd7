//! `warband` replay binary.
//!
//! # Examples
//!
//! ```bash
//! # Scenario and config as positional arguments
//! cargo run -p warband-client -- data/scenarios/skirmish.ron
//!
//! # Or from the environment (a .env file is read too); `--help` lists both
//! WARBAND_SCENARIO=skirmish.ron WARBAND_CONFIG=tuned.toml RUST_LOG=debug cargo run -p warband-client
//! ```

use anyhow::Result;
use clap::Parser;
use warband_client::ReplayConfig;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = ReplayConfig::parse();
    let summary = warband_client::run(&config)?;

    tracing::info!(
        ticks = summary.ticks,
        commands = summary.commands,
        production = summary.production,
        gate_opened_at = ?summary.gate_opened_at,
        degraded_ticks = summary.degraded_ticks,
        "replay finished"
    );
    Ok(())
}
