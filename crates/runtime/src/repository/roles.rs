use std::collections::BTreeMap;

use game_core::{RoleError, RoleStore, UnitRole, UnitTag};

/// In-memory [`RoleStore`] keyed by tag.
#[derive(Clone, Debug, Default)]
pub struct RoleTable {
    roles: BTreeMap<UnitTag, UnitRole>,
}

impl RoleTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}

impl RoleStore for RoleTable {
    fn assign(&mut self, tag: UnitTag, role: UnitRole) -> Result<(), RoleError> {
        if let Some(&existing) = self.roles.get(&tag) {
            return Err(RoleError::AlreadyAssigned { tag, existing });
        }
        self.roles.insert(tag, role);
        Ok(())
    }

    fn role_of(&self, tag: UnitTag) -> Option<UnitRole> {
        self.roles.get(&tag).copied()
    }

    fn units_with_role(&self, role: UnitRole) -> Vec<UnitTag> {
        self.roles
            .iter()
            .filter_map(|(tag, r)| (*r == role).then_some(*tag))
            .collect()
    }

    fn release(&mut self, tag: UnitTag) -> Option<UnitRole> {
        self.roles.remove(&tag)
    }
}
