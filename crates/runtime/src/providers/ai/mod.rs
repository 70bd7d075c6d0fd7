//! Engagement evaluator for controlled combat units.
//!
//! Each unit's command is decided by a priority stack expressed as a
//! behavior tree over a per-unit [`ManeuverContext`]:
//!
//! 1. **Stance**: burrow-capable units run the stance controller first; a
//!    stance change suppresses combat for the tick
//! 2. **Shoot**: fire on an enemy unit in range, else a structure in range
//! 3. **Engage**: low-shield units retreat, everything else stutter-steps
//! 4. **Travel**: with no hostile near, path to the shared attack target,
//!    attack-moving when pathing makes no progress
//!
//! # Core Components
//!
//! - [`decide_action`]: builds the tree and context and returns the [`Decision`]
//! - [`nodes`]: condition and action nodes
//! - [`subtrees`]: the assembled engagement tree

pub mod context;
pub mod evaluator;
pub mod nodes;
pub mod subtrees;

pub use context::{CombatOracles, Decision, ManeuverContext, ManeuverStep};
pub use evaluator::decide_action;
