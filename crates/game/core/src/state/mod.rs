//! Snapshot data the engine reports each tick.
//!
//! Types here are plain data: the core reads them, decides, and never writes
//! them back. Persistent decision state lives in [`crate::tactics`].
mod common;
mod economy;
mod grid;
mod hostile;
mod map;
mod unit;

pub use common::{Point, UnitTag};
pub use economy::{EconomySnapshot, MineralField, OwnStructure, UpgradeStatus};
pub use grid::CostGrid;
pub use hostile::HostileSnapshot;
pub use map::MapInfo;
pub use unit::{Capabilities, Race, Stance, Unit, UnitTypeId};
