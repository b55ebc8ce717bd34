use async_trait::async_trait;
use vetbot_models::{CustomCommandConfig, GuildConfig, GuildId};

use crate::{DatabaseError, Result};

#[async_trait]
pub trait DbService: Send + Sync {
    async fn guilds_create(&self, instance: GuildConfig) -> Result<GuildConfig>;
    async fn guilds_update(&self, instance: GuildConfig) -> Result<GuildConfig>;
    async fn guilds_all(&self) -> Result<Vec<GuildConfig>>;
    async fn guilds_get(&self, guild_id: GuildId) -> Result<Option<GuildConfig>>;
    async fn guilds_get_expect(&self, guild_id: GuildId) -> Result<GuildConfig> {
        self.guilds_get(guild_id)
            .await?
            .ok_or(DatabaseError::UnknownGuild(guild_id))
    }
    async fn guilds_delete(&self, guild_id: GuildId) -> Result<bool>;
    async fn custom_commands_create(
        &self,
        instance: CustomCommandConfig,
    ) -> Result<CustomCommandConfig>;
    async fn custom_commands_update(
        &self,
        instance: CustomCommandConfig,
    ) -> Result<CustomCommandConfig>;
    async fn custom_commands_get(
        &self,
        guild_id: GuildId,
        name: &str,
    ) -> Result<Option<CustomCommandConfig>>;
    async fn custom_commands_get_expect(
        &self,
        guild_id: GuildId,
        name: &str,
    ) -> Result<CustomCommandConfig> {
        self.custom_commands_get(guild_id, name)
            .await?
            .ok_or_else(|| DatabaseError::UnknownCustomCommand(guild_id, name.into()))
    }
    async fn custom_commands_delete(&self, guild_id: GuildId, name: &str) -> Result<bool>;
    async fn custom_commands_list(&self, guild_id: GuildId) -> Result<Vec<CustomCommandConfig>>;
    async fn custom_commands_all(&self) -> Result<Vec<CustomCommandConfig>>;
    async fn health_check(&self) -> Result<()>;
}
