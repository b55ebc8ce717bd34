use crate::{CapabilitySet, RoleId, UserId};

/// The acting member for a permission check: their id, the roles they hold,
/// and the effective capabilities granted by those roles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Principal {
    pub user_id: UserId,
    pub role_ids: Vec<RoleId>,
    pub capabilities: CapabilitySet,
    pub is_bot: bool,
}

impl Principal {
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            ..Default::default()
        }
    }

    pub fn has_role(&self, role_id: RoleId) -> bool {
        self.role_ids.contains(&role_id)
    }
}
