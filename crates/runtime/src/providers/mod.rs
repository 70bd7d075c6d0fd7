//! Command producers driven by the session each tick.

pub mod ai;
pub mod macro_tasks;
pub mod production;

pub use macro_tasks::MacroTasks;
pub use production::ProductionAllocator;
