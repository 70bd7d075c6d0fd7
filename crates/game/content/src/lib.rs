//! Data-driven content and loaders.
//!
//! This crate reads the tactical core's inputs from data files:
//! - Tuning parameters (TOML, [`ConfigLoader`])
//! - Army composition tables (RON, [`CompositionLoader`])
//! - Replay scenarios: map, race, and per-tick frames (RON, [`ScenarioLoader`])
//!
//! All loaders deserialize straight into game-core types where those carry
//! serde support, and use small spec structs where a file format is friendlier
//! than the in-memory type.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    CompositionLoader, ConfigLoader, ContentFactory, Frame, GridSpec, HostileSpec, InfluenceSpec,
    LoadResult, MineralSpec, Scenario, ScenarioLoader, StructureSpec, UnitSpec,
};
