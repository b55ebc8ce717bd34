use std::collections::HashMap;

use async_trait::async_trait;
use vetbot_models::CustomCommandConfig;

use crate::{
    bot_commands::{
        command::{CommandExecutionResult, ResultAction},
        BotCommand, CommandContext,
    },
    mentions::{channel_mention, user_mention},
    templates::ping_template,
    Result,
};

/// Leaf handler for an administrator-defined vetting command, acting on the
/// member under vetting in the invoking channel.
pub struct CustomVettingCommand<'a> {
    config: &'a CustomCommandConfig,
    args: &'a str,
}

impl<'a> CustomVettingCommand<'a> {
    pub fn new(config: &'a CustomCommandConfig, args: &'a str) -> Self {
        Self { config, args }
    }

    fn reason(&self, stored: &Option<String>) -> Option<String> {
        if self.args.is_empty() {
            stored.clone()
        } else {
            Some(self.args.to_string())
        }
    }
}

#[async_trait]
impl BotCommand for CustomVettingCommand<'_> {
    async fn handle(&self, ctx: &CommandContext) -> Result<CommandExecutionResult> {
        let member = match ctx.target_member {
            Some(member) => member,
            None => {
                return Ok(CommandExecutionResult::builder()
                    .with_action(ResultAction::Reply(
                        "Can only run custom commands inside of vetting channels.".into(),
                    ))
                    .build())
            }
        };

        if self.config.ban {
            ctx.api_service
                .member_ban(ctx.guild_id, member, self.reason(&self.config.ban_reason))
                .await?;
            return Ok(CommandExecutionResult::builder().build());
        }
        if self.config.kick {
            ctx.api_service
                .member_kick(ctx.guild_id, member, self.reason(&self.config.kick_reason))
                .await?;
            return Ok(CommandExecutionResult::builder().build());
        }

        if !self.config.remove_roles.is_empty() {
            ctx.api_service
                .member_remove_roles(ctx.guild_id, member, &self.config.remove_roles)
                .await?;
        }
        if !self.config.add_roles.is_empty() {
            ctx.api_service
                .member_add_roles(ctx.guild_id, member, &self.config.add_roles)
                .await?;
        }

        if let (Some(channel), Some(message)) =
            (self.config.ping_channel, self.config.ping_message.as_deref())
        {
            let values = HashMap::from([
                ("member", user_mention(member)),
                ("mod", user_mention(ctx.principal.user_id)),
                ("channel", channel_mention(channel)),
            ]);
            let expanded = ping_template().expand(message, &values)?;
            ctx.api_service.message_send(channel, &expanded).await?;
        }

        Ok(CommandExecutionResult::builder().build())
    }
}
