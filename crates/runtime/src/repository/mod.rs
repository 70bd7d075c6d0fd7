//! In-memory stores the session writes to.
mod commands;
mod roles;

pub use commands::CommandBuffer;
pub use roles::RoleTable;
