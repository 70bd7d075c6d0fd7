use crate::action::{ProductionRequest, UnitAction};
use crate::error::RoleError;
use crate::state::UnitTag;

/// Outbound command channel to the game engine.
///
/// Commands addressed to units that vanished since the snapshot are the
/// sink's concern to drop.
pub trait CommandSink {
    fn submit(&mut self, tag: UnitTag, action: UnitAction);

    fn request_production(&mut self, request: ProductionRequest);
}

/// Job a controlled unit is committed to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnitRole {
    Attacking,
}

/// Registry of unit roles.
pub trait RoleStore: Send {
    /// Records `role` for `tag`.
    ///
    /// # Errors
    ///
    /// Returns [`RoleError::AlreadyAssigned`] if `tag` already holds a role.
    fn assign(&mut self, tag: UnitTag, role: UnitRole) -> Result<(), RoleError>;

    fn role_of(&self, tag: UnitTag) -> Option<UnitRole>;

    /// Tags holding `role`, in ascending tag order.
    fn units_with_role(&self, role: UnitRole) -> Vec<UnitTag>;

    /// Forgets `tag`, returning the role it held.
    fn release(&mut self, tag: UnitTag) -> Option<UnitRole>;
}
