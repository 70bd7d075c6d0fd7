//! Decision state that persists between ticks.
//!
//! Each type here is the single writer of its slice of state: the selector
//! owns the base target cursor, the stance controller owns stance records,
//! and the gate owns the attack latch.
mod composition;
mod gate;
mod stance;
mod target;

pub use composition::{ArmyComposition, CompositionEntry};
pub use gate::ActivationGate;
pub use stance::{StanceChange, StanceController};
pub use target::{TargetSelector, TargetingView};
