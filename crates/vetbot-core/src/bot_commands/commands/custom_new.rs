use async_trait::async_trait;
use shaku::HasComponent;

use crate::{
    bot_commands::{
        command::{CommandExecutionResult, ResultAction},
        BotCommand, CommandContext,
    },
    custom_commands::{describe_custom_command, parse_edit_request},
    use_cases::{
        custom::{CreateCustomCommandInterface, CreateOutcome},
        guilds::GetGuildConfigInterface,
    },
    Result,
};

pub struct NewCustomCommandCommand {
    name: String,
    args: String,
}

impl NewCustomCommandCommand {
    pub fn new(args: &str) -> Self {
        let (name, args) = match args.trim().split_once(' ') {
            Some((name, args)) => (name, args),
            None => (args.trim(), ""),
        };
        Self {
            name: name.to_string(),
            args: args.to_string(),
        }
    }
}

#[async_trait]
impl BotCommand for NewCustomCommandCommand {
    async fn handle(&self, ctx: &CommandContext) -> Result<CommandExecutionResult> {
        if self.name.is_empty() {
            return Ok(CommandExecutionResult::builder()
                .with_action(ResultAction::Reply("Missing command name.".into()))
                .build());
        }

        let core_ctx = ctx.as_core_context();
        let guild_roles = ctx.api_service.guild_roles(ctx.guild_id).await?;
        let builder = parse_edit_request(ctx.guild_id, &guild_roles, &self.args, true);

        let create_custom_command: &dyn CreateCustomCommandInterface =
            ctx.core_module.resolve_ref();
        let outcome = create_custom_command
            .run(&core_ctx, ctx.guild_id, &self.name, &builder)
            .await?;

        let comment = match outcome {
            CreateOutcome::Created(config) => {
                let get_guild_config: &dyn GetGuildConfigInterface = ctx.core_module.resolve_ref();
                let prefix = get_guild_config.run(&core_ctx, ctx.guild_id).await?.prefix;
                format!(
                    "Added new command `{}{}`\n\n{}",
                    prefix,
                    config.name,
                    describe_custom_command(&config)
                )
            }
            CreateOutcome::AlreadyExists(name) => {
                format!("Command `{name}` already exists.")
            }
            CreateOutcome::Invalid(violation) => violation.to_string(),
        };

        Ok(CommandExecutionResult::builder()
            .with_action(ResultAction::Reply(comment))
            .build())
    }
}

#[cfg(test)]
mod tests {
    use vetbot_database_interface::DbService;
    use vetbot_models::{CustomCommandConfig, RoleId};

    use super::*;
    use crate::bot_commands::CommandContextTest;

    #[tokio::test]
    async fn test_command() -> Result<()> {
        let mut ctx = CommandContextTest::new();
        ctx.api_service
            .expect_guild_roles()
            .returning(|_| Ok(vec![RoleId(10), RoleId(20)]));

        let cmd = NewCustomCommandCommand::new("Vet + <@&10> allow <@&20>");
        let result = cmd.handle(&ctx.as_context()).await?;

        let ResultAction::Reply(reply) = &result.result_actions[0];
        assert!(reply.starts_with("Added new command `!vet`"));

        let stored = ctx
            .db_service
            .custom_commands_get_expect(ctx.guild_id, "vet")
            .await?;
        assert_eq!(stored.add_roles, vec![RoleId(10)]);
        assert_eq!(stored.allowed_roles, vec![RoleId(20)]);

        Ok(())
    }

    #[tokio::test]
    async fn test_command_already_exists() -> Result<()> {
        let mut ctx = CommandContextTest::new();
        ctx.api_service
            .expect_guild_roles()
            .returning(|_| Ok(vec![]));
        ctx.db_service
            .custom_commands_create(CustomCommandConfig::new(ctx.guild_id, "vet"))
            .await?;

        let cmd = NewCustomCommandCommand::new("vet");
        let result = cmd.handle(&ctx.as_context()).await?;
        assert_eq!(
            result.result_actions,
            vec![ResultAction::Reply("Command `vet` already exists.".into())]
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_command_missing_name() -> Result<()> {
        let ctx = CommandContextTest::new();

        let cmd = NewCustomCommandCommand::new("");
        let result = cmd.handle(&ctx.as_context()).await?;
        assert_eq!(
            result.result_actions,
            vec![ResultAction::Reply("Missing command name.".into())]
        );

        Ok(())
    }
}
