use serde::{Deserialize, Serialize};

use crate::{ChannelId, GuildId, RoleId, UserId};

/// An administrator-defined vetting command, owned by exactly one guild and
/// uniquely named within it. Names are stored case-folded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomCommandConfig {
    /// Owning guild.
    pub guild_id: GuildId,
    /// Case-folded command name.
    pub name: String,
    /// Kick the vetted member.
    pub kick: bool,
    /// Kick reason.
    pub kick_reason: Option<String>,
    /// Ban the vetted member.
    pub ban: bool,
    /// Ban reason.
    pub ban_reason: Option<String>,
    /// Roles granted to the vetted member.
    pub add_roles: Vec<RoleId>,
    /// Roles revoked from the vetted member.
    pub remove_roles: Vec<RoleId>,
    /// Roles allowed to run the command. The guild id doubles as the
    /// "everyone" sentinel.
    pub allowed_roles: Vec<RoleId>,
    /// Users allowed to run the command.
    pub allowed_users: Vec<UserId>,
    /// Roles forbidden from running the command.
    pub forbidden_roles: Vec<RoleId>,
    /// Users forbidden from running the command.
    pub forbidden_users: Vec<UserId>,
    /// Channel for the optional ping sub-action.
    pub ping_channel: Option<ChannelId>,
    /// Message template for the optional ping sub-action.
    pub ping_message: Option<String>,
}

impl CustomCommandConfig {
    pub fn new(guild_id: GuildId, name: &str) -> Self {
        Self {
            guild_id,
            name: name.to_lowercase(),
            ..Default::default()
        }
    }

    /// Whether the ping sub-action is configured. Channel and message are
    /// always both present or both absent in committed configurations.
    pub fn has_ping(&self) -> bool {
        self.ping_channel.is_some() && self.ping_message.is_some()
    }
}
