use async_trait::async_trait;
use shaku::{Component, Interface};
use vetbot_models::{CustomCommandConfig, GuildId};

use crate::{CoreContext, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ListCustomCommandsInterface: Interface {
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        guild_id: GuildId,
    ) -> Result<Vec<CustomCommandConfig>>;
}

#[derive(Component)]
#[shaku(interface = ListCustomCommandsInterface)]
pub(crate) struct ListCustomCommands;

#[async_trait]
impl ListCustomCommandsInterface for ListCustomCommands {
    #[tracing::instrument(skip_all, fields(guild_id = %guild_id))]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        guild_id: GuildId,
    ) -> Result<Vec<CustomCommandConfig>> {
        let commands = ctx.db_service.custom_commands_list(guild_id).await?;
        Ok(commands)
    }
}
