use async_trait::async_trait;
use shaku::HasComponent;

use crate::{
    bot_commands::{
        command::{CommandExecutionResult, ResultAction},
        registry::CommandRegistry,
        BotCommand, CommandContext,
    },
    use_cases::guilds::GetGuildConfigInterface,
    Result,
};

pub struct HelpCommand<'a> {
    registry: &'a CommandRegistry,
}

impl<'a> HelpCommand<'a> {
    pub fn new(registry: &'a CommandRegistry) -> Self {
        Self { registry }
    }
}

#[async_trait]
impl BotCommand for HelpCommand<'_> {
    async fn handle(&self, ctx: &CommandContext) -> Result<CommandExecutionResult> {
        let get_guild_config: &dyn GetGuildConfigInterface = ctx.core_module.resolve_ref();
        let prefix = get_guild_config
            .run(&ctx.as_core_context(), ctx.guild_id)
            .await?
            .prefix;

        let mut lines = vec!["Available commands:".to_string()];
        for command in self.registry.commands() {
            lines.push(format!(
                "`{}{}`: {}",
                prefix,
                command.primary_name(),
                command.quick_help()
            ));
        }

        Ok(CommandExecutionResult::builder()
            .with_action(ResultAction::Reply(lines.join("\n")))
            .build())
    }
}
