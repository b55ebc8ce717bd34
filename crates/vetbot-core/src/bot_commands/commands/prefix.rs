use async_trait::async_trait;
use shaku::HasComponent;

use crate::{
    bot_commands::{
        command::{CommandExecutionResult, ResultAction},
        BotCommand, CommandContext,
    },
    use_cases::guilds::{GetGuildConfigInterface, SetGuildPrefixInterface},
    Result,
};

pub struct PrefixCommand {
    prefix: String,
}

impl PrefixCommand {
    pub fn new(args: &str) -> Self {
        Self {
            prefix: args.trim().to_string(),
        }
    }
}

#[async_trait]
impl BotCommand for PrefixCommand {
    async fn handle(&self, ctx: &CommandContext) -> Result<CommandExecutionResult> {
        if self.prefix.is_empty() {
            return Ok(CommandExecutionResult::builder()
                .with_action(ResultAction::Reply("Missing prefix argument.".into()))
                .build());
        }

        let core_ctx = ctx.as_core_context();
        let get_guild_config: &dyn GetGuildConfigInterface = ctx.core_module.resolve_ref();
        let before = get_guild_config.run(&core_ctx, ctx.guild_id).await?.prefix;

        let set_guild_prefix: &dyn SetGuildPrefixInterface = ctx.core_module.resolve_ref();
        let config = set_guild_prefix
            .run(&core_ctx, ctx.guild_id, &self.prefix)
            .await?;

        let comment = format!("Changed prefix from `{}` to `{}`.", before, config.prefix);
        Ok(CommandExecutionResult::builder()
            .with_action(ResultAction::Reply(comment))
            .build())
    }
}

#[cfg(test)]
mod tests {
    use vetbot_database_interface::DbService;
    use super::*;
    use crate::bot_commands::CommandContextTest;

    #[tokio::test]
    async fn test_command() -> Result<()> {
        let ctx = CommandContextTest::new();
        let cmd = PrefixCommand::new(" ? ");

        let result = cmd.handle(&ctx.as_context()).await?;
        assert_eq!(
            result.result_actions,
            vec![ResultAction::Reply("Changed prefix from `!` to `?`.".into())]
        );
        assert_eq!(
            ctx.db_service.guilds_get_expect(ctx.guild_id).await?.prefix,
            "?"
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_command_missing_argument() -> Result<()> {
        let ctx = CommandContextTest::new();
        let cmd = PrefixCommand::new("");

        let result = cmd.handle(&ctx.as_context()).await?;
        assert_eq!(
            result.result_actions,
            vec![ResultAction::Reply("Missing prefix argument.".into())]
        );

        Ok(())
    }
}
