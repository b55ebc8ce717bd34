use async_trait::async_trait;
use shaku::{Component, Interface};
use vetbot_models::{GuildConfig, GuildId};

use crate::{CoreContext, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait GetGuildConfigInterface: Interface {
    async fn run<'a>(&self, ctx: &CoreContext<'a>, guild_id: GuildId) -> Result<GuildConfig>;
}

/// Get-or-create: unknown guilds receive a fresh configuration with the
/// process default prefix.
#[derive(Component)]
#[shaku(interface = GetGuildConfigInterface)]
pub(crate) struct GetGuildConfig;

#[async_trait]
impl GetGuildConfigInterface for GetGuildConfig {
    #[tracing::instrument(skip_all, fields(guild_id = %guild_id))]
    async fn run<'a>(&self, ctx: &CoreContext<'a>, guild_id: GuildId) -> Result<GuildConfig> {
        match ctx.db_service.guilds_get(guild_id).await? {
            Some(config) => Ok(config),
            None => {
                let config = ctx
                    .db_service
                    .guilds_create(GuildConfig::new(guild_id, &ctx.config.default_prefix))
                    .await?;
                Ok(config)
            }
        }
    }
}
