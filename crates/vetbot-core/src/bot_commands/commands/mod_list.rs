use async_trait::async_trait;
use shaku::HasComponent;

use crate::{
    bot_commands::{
        command::{CommandExecutionResult, ResultAction},
        BotCommand, CommandContext,
    },
    mentions::role_mention,
    use_cases::guilds::GetGuildConfigInterface,
    Result,
};

pub struct ListModeratorRolesCommand;

impl ListModeratorRolesCommand {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl BotCommand for ListModeratorRolesCommand {
    async fn handle(&self, ctx: &CommandContext) -> Result<CommandExecutionResult> {
        let get_guild_config: &dyn GetGuildConfigInterface = ctx.core_module.resolve_ref();
        let config = get_guild_config
            .run(&ctx.as_core_context(), ctx.guild_id)
            .await?;

        let comment = if config.moderator_roles.is_empty() {
            "There are currently no moderator roles configured.".to_string()
        } else {
            format!(
                "Current moderator roles: {}",
                config
                    .moderator_roles
                    .iter()
                    .map(|role| role_mention(*role, ctx.guild_id))
                    .collect::<Vec<_>>()
                    .join(", ")
            )
        };

        Ok(CommandExecutionResult::builder()
            .with_action(ResultAction::Reply(comment))
            .build())
    }
}

#[cfg(test)]
mod tests {
    use vetbot_database_interface::DbService;
    use vetbot_models::{GuildConfig, RoleId};

    use super::*;
    use crate::bot_commands::CommandContextTest;

    #[tokio::test]
    async fn test_command_empty() -> Result<()> {
        let ctx = CommandContextTest::new();
        let cmd = ListModeratorRolesCommand::new();

        let result = cmd.handle(&ctx.as_context()).await?;
        assert_eq!(
            result.result_actions,
            vec![ResultAction::Reply(
                "There are currently no moderator roles configured.".into()
            )]
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_command_lists_roles() -> Result<()> {
        let ctx = CommandContextTest::new();
        let mut config = GuildConfig::new(ctx.guild_id, "!");
        config.moderator_roles.extend([RoleId(5), RoleId(6)]);
        ctx.db_service.guilds_create(config).await?;

        let cmd = ListModeratorRolesCommand::new();
        let result = cmd.handle(&ctx.as_context()).await?;
        assert_eq!(
            result.result_actions,
            vec![ResultAction::Reply(
                "Current moderator roles: <@&5>, <@&6>".into()
            )]
        );

        Ok(())
    }
}
