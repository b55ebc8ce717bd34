use async_trait::async_trait;
use shaku::{Component, Interface};
use vetbot_models::GuildId;

use crate::{CoreContext, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait DeleteCustomCommandInterface: Interface {
    async fn run<'a>(&self, ctx: &CoreContext<'a>, guild_id: GuildId, name: &str) -> Result<bool>;
}

#[derive(Component)]
#[shaku(interface = DeleteCustomCommandInterface)]
pub(crate) struct DeleteCustomCommand;

#[async_trait]
impl DeleteCustomCommandInterface for DeleteCustomCommand {
    #[tracing::instrument(skip_all, fields(guild_id = %guild_id, name = name))]
    async fn run<'a>(&self, ctx: &CoreContext<'a>, guild_id: GuildId, name: &str) -> Result<bool> {
        let name = name.to_lowercase();
        let deleted = ctx.db_service.custom_commands_delete(guild_id, &name).await?;
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use vetbot_database_interface::DbService;
    use vetbot_models::CustomCommandConfig;

    use super::*;
    use crate::context::tests::CoreContextTest;

    #[tokio::test]
    async fn run_deletes_existing_command() -> Result<()> {
        let ctx = CoreContextTest::new();
        ctx.db_service
            .custom_commands_create(CustomCommandConfig::new(GuildId(1), "vet"))
            .await?;

        assert!(DeleteCustomCommand
            .run(&ctx.as_context(), GuildId(1), "VET")
            .await?);
        assert!(!DeleteCustomCommand
            .run(&ctx.as_context(), GuildId(1), "vet")
            .await?);

        Ok(())
    }
}
