use async_trait::async_trait;
use shaku::HasComponent;

use crate::{
    bot_commands::{
        command::{CommandExecutionResult, ResultAction},
        BotCommand, CommandContext,
    },
    use_cases::custom::DeleteCustomCommandInterface,
    Result,
};

pub struct DeleteCustomCommandCommand {
    name: String,
}

impl DeleteCustomCommandCommand {
    pub fn new(args: &str) -> Self {
        Self {
            name: args.trim().to_string(),
        }
    }
}

#[async_trait]
impl BotCommand for DeleteCustomCommandCommand {
    async fn handle(&self, ctx: &CommandContext) -> Result<CommandExecutionResult> {
        if self.name.is_empty() {
            return Ok(CommandExecutionResult::builder()
                .with_action(ResultAction::Reply("Missing command name.".into()))
                .build());
        }

        let delete_custom_command: &dyn DeleteCustomCommandInterface =
            ctx.core_module.resolve_ref();
        let deleted = delete_custom_command
            .run(&ctx.as_core_context(), ctx.guild_id, &self.name)
            .await?;

        let comment = if deleted {
            format!("Deleted command {}.", self.name)
        } else {
            "Command doesn't exist.".into()
        };

        Ok(CommandExecutionResult::builder()
            .with_action(ResultAction::Reply(comment))
            .build())
    }
}
