use serde::{Deserialize, Serialize};

use crate::{GuildId, RoleId};

/// Per-guild bot settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuildConfig {
    /// Owning guild.
    pub guild_id: GuildId,
    /// Command prefix.
    pub prefix: String,
    /// Roles granted access to vetting channels.
    pub moderator_roles: Vec<RoleId>,
}

impl GuildConfig {
    pub fn new(guild_id: GuildId, prefix: impl Into<String>) -> Self {
        Self {
            guild_id,
            prefix: prefix.into(),
            moderator_roles: Vec::new(),
        }
    }
}
