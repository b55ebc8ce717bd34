use async_trait::async_trait;

use crate::{
    bot_commands::{
        command::{CommandExecutionResult, ResultAction},
        BotCommand, CommandContext,
    },
    mentions::user_mention,
    Result,
};

pub struct PingCommand;

impl PingCommand {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl BotCommand for PingCommand {
    async fn handle(&self, ctx: &CommandContext) -> Result<CommandExecutionResult> {
        let comment = format!("Pong {}.", user_mention(ctx.principal.user_id));
        Ok(CommandExecutionResult::builder()
            .with_action(ResultAction::Reply(comment))
            .build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bot_commands::{command::CommandHandlingStatus, CommandContextTest};

    #[tokio::test]
    async fn test_command() -> Result<()> {
        let ctx = CommandContextTest::new();
        let cmd = PingCommand::new();

        let result = cmd.handle(&ctx.as_context()).await?;
        assert_eq!(result.handling_status, CommandHandlingStatus::Handled);
        assert_eq!(
            result.result_actions,
            vec![ResultAction::Reply("Pong <@!3>.".into())]
        );

        Ok(())
    }
}
