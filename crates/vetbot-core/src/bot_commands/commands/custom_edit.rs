use async_trait::async_trait;
use shaku::HasComponent;

use crate::{
    bot_commands::{
        command::{CommandExecutionResult, ResultAction},
        BotCommand, CommandContext,
    },
    custom_commands::{describe_custom_command, parse_edit_request},
    use_cases::{
        custom::{EditKind, UpdateCustomCommandInterface, UpdateOutcome},
        guilds::GetGuildConfigInterface,
    },
    Result,
};

pub struct EditCustomCommandCommand {
    name: String,
    args: String,
    kind: EditKind,
}

impl EditCustomCommandCommand {
    pub fn new(args: &str, kind: EditKind) -> Self {
        let (name, args) = match args.trim().split_once(' ') {
            Some((name, args)) => (name, args),
            None => (args.trim(), ""),
        };
        Self {
            name: name.to_string(),
            args: args.to_string(),
            kind,
        }
    }
}

#[async_trait]
impl BotCommand for EditCustomCommandCommand {
    async fn handle(&self, ctx: &CommandContext) -> Result<CommandExecutionResult> {
        if self.name.is_empty() {
            return Ok(CommandExecutionResult::builder()
                .with_action(ResultAction::Reply("Missing command name.".into()))
                .build());
        }

        let core_ctx = ctx.as_core_context();
        let guild_roles = ctx.api_service.guild_roles(ctx.guild_id).await?;
        let include_reason = self.kind == EditKind::Add;
        let builder = parse_edit_request(ctx.guild_id, &guild_roles, &self.args, include_reason);

        let update_custom_command: &dyn UpdateCustomCommandInterface =
            ctx.core_module.resolve_ref();
        let outcome = update_custom_command
            .run(&core_ctx, ctx.guild_id, &self.name, self.kind, &builder)
            .await?;

        let comment = match outcome {
            UpdateOutcome::Updated(config) => {
                let get_guild_config: &dyn GetGuildConfigInterface = ctx.core_module.resolve_ref();
                let prefix = get_guild_config.run(&core_ctx, ctx.guild_id).await?.prefix;
                format!(
                    "Updated command `{}{}`\n\n{}",
                    prefix,
                    config.name,
                    describe_custom_command(&config)
                )
            }
            UpdateOutcome::NotFound(_) => "Command doesn't exist.".into(),
            UpdateOutcome::Invalid(violation) => violation.to_string(),
        };

        Ok(CommandExecutionResult::builder()
            .with_action(ResultAction::Reply(comment))
            .build())
    }
}
