use async_trait::async_trait;
use vetbot_models::{ChannelId, GuildId, RoleId, UserId};

use crate::Result;

/// Discord API adapter interface.
#[cfg_attr(feature = "testkit", mockall::automock)]
#[async_trait]
pub trait DiscordService: Send + Sync {
    /// List all roles of a guild.
    async fn guild_roles(&self, guild_id: GuildId) -> Result<Vec<RoleId>>;
    /// Check that a role exists in a guild.
    async fn role_exists(&self, guild_id: GuildId, role_id: RoleId) -> Result<bool> {
        Ok(self.guild_roles(guild_id).await?.contains(&role_id))
    }
    /// Check that a text channel exists in a guild.
    async fn channel_exists(&self, guild_id: GuildId, channel_id: ChannelId) -> Result<bool>;
    /// Grant roles to a guild member.
    async fn member_add_roles(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        roles: &[RoleId],
    ) -> Result<()>;
    /// Revoke roles from a guild member.
    async fn member_remove_roles(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        roles: &[RoleId],
    ) -> Result<()>;
    /// Kick a guild member.
    async fn member_kick(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        reason: Option<String>,
    ) -> Result<()>;
    /// Ban a guild member.
    async fn member_ban(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        reason: Option<String>,
    ) -> Result<()>;
    /// Send a message to a text channel.
    async fn message_send(&self, channel_id: ChannelId, message: &str) -> Result<()>;
}
