//! Per-tick tactical decision runtime.
//!
//! This crate wires the `game-core` rules into a [`TacticsSession`] that a
//! game-engine adapter drives once per tick. Consumers hand it a
//! [`TickInput`] and a [`game_core::TacticsEnv`] and receive commands through
//! a [`game_core::CommandSink`].
//!
//! Modules are organized by responsibility:
//! - [`session`] hosts the orchestrator
//! - [`api`] exposes the types downstream clients interact with
//! - [`providers`] produces commands: engagement, production, macro chores
//! - [`oracle`] and [`repository`] provide in-memory adapters for replay and tests
pub mod api;
pub mod oracle;
pub mod providers;
pub mod repository;
pub mod session;

pub use api::{Result, RuntimeError, TickInput, TickReport};
pub use oracle::{
    GeometricWeaponRange, OracleManager, SightVisibility, SnapshotSpatial, StraightLinePathing,
    WeakestFirst,
};
pub use providers::ai::{CombatOracles, Decision, ManeuverStep, decide_action};
pub use providers::{MacroTasks, ProductionAllocator};
pub use repository::{CommandBuffer, RoleTable};
pub use session::TacticsSession;
