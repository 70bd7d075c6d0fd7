//! Deterministic tactical rules and data types shared across crates.
//!
//! `game-core` defines the vocabulary of the decision core (units, hostile
//! snapshots, commands, cost fields), the collaborator traits the core calls
//! into ([`env`]), and the stateful pieces that persist between ticks
//! ([`tactics`]): attack-target scanning, burrow stance, and the activation
//! gate. Nothing here performs I/O or logging setup.
pub mod action;
pub mod config;
pub mod env;
pub mod error;
pub mod state;
pub mod tactics;

pub use action::{AbilityId, AbilityTarget, ProductionRequest, UnitAction, UpgradeId};
pub use config::TacticsConfig;
pub use env::{
    CommandSink, OracleError, PathingOracle, QueryScope, RoleStore, SpatialOracle, TacticsEnv,
    TargetPriorityOracle, UnitRole, VisibilityOracle, WeaponRangeOracle,
};
pub use error::{ErrorSeverity, GameError, RoleError, SetupError};
pub use state::{
    Capabilities, CostGrid, EconomySnapshot, HostileSnapshot, MapInfo, MineralField,
    OwnStructure, Point, Race, Stance, Unit, UnitTag, UnitTypeId, UpgradeStatus,
};
pub use tactics::{
    ActivationGate, ArmyComposition, CompositionEntry, StanceChange, StanceController,
    TargetSelector, TargetingView,
};
