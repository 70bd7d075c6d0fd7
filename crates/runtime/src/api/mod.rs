//! Types downstream clients interact with.
mod errors;
mod tick;

pub use errors::{Result, RuntimeError};
pub use tick::{TickInput, TickReport};
