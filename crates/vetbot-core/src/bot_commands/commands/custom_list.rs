use async_trait::async_trait;
use shaku::HasComponent;

use crate::{
    bot_commands::{
        command::{CommandExecutionResult, ResultAction},
        BotCommand, CommandContext,
    },
    custom_commands::describe_custom_command,
    use_cases::{custom::ListCustomCommandsInterface, guilds::GetGuildConfigInterface},
    Result,
};

pub struct ListCustomCommandsCommand;

impl ListCustomCommandsCommand {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl BotCommand for ListCustomCommandsCommand {
    async fn handle(&self, ctx: &CommandContext) -> Result<CommandExecutionResult> {
        let core_ctx = ctx.as_core_context();
        let list_custom_commands: &dyn ListCustomCommandsInterface = ctx.core_module.resolve_ref();
        let commands = list_custom_commands.run(&core_ctx, ctx.guild_id).await?;

        if commands.is_empty() {
            return Ok(CommandExecutionResult::builder()
                .with_action(ResultAction::Reply(
                    "No vetting commands are currently configured for this guild.".into(),
                ))
                .build());
        }

        let get_guild_config: &dyn GetGuildConfigInterface = ctx.core_module.resolve_ref();
        let prefix = get_guild_config.run(&core_ctx, ctx.guild_id).await?.prefix;

        let sections: Vec<String> = commands
            .iter()
            .map(|command| {
                format!(
                    "`{}{}`\n{}",
                    prefix,
                    command.name,
                    describe_custom_command(command)
                )
            })
            .collect();

        Ok(CommandExecutionResult::builder()
            .with_action(ResultAction::Reply(sections.join("\n\n")))
            .build())
    }
}
