//! Priority-stack behavior nodes for per-tick unit control.
//!
//! A unit's decision for one game tick is modelled as an ordered stack of
//! behaviors: the first one whose preconditions hold produces the unit's
//! command and everything below it is skipped.
//!
//! - **Synchronous**: a tick completes immediately, there is no Running state
//! - **Borrowing**: nodes may capture references, trees are cheap to rebuild
//!   every tick
//! - **Zero dependencies**
//!
//! # Architecture
//!
//! - [`Behavior`]: core trait for all nodes, [`Leaf`] lifts closures into nodes
//! - [`Status`]: Success or Failure
//! - Composite nodes: [`Selector`] (priority stack), [`Sequence`]
//! - Decorator nodes: [`Guard`], [`Branch`], [`Inverter`]

pub mod behavior;
pub mod builder;
pub mod composite;
pub mod decorator;
pub mod status;

pub use behavior::{Behavior, Leaf, Node};
pub use composite::{Selector, Sequence};
pub use decorator::{Branch, Guard, Inverter};
pub use status::Status;
