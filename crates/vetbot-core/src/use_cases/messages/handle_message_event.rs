use async_trait::async_trait;
use shaku::{Component, HasComponent, Interface};
use vetbot_models::{ChannelId, GuildId, Principal, UserId};

use crate::{
    bot_commands::{CommandContext, CommandExecutorInterface},
    CoreContext, Result,
};

/// An inbound guild message, as delivered by the gateway. `target_member` is
/// the member under vetting when the message was sent in a vetting channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageEvent {
    pub guild_id: GuildId,
    pub channel_id: ChannelId,
    pub principal: Principal,
    pub target_member: Option<UserId>,
    pub content: String,
}

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait HandleMessageEventInterface: Interface {
    async fn run<'a>(&self, ctx: &CoreContext<'a>, event: &MessageEvent) -> Result<()>;
}

#[derive(Component)]
#[shaku(interface = HandleMessageEventInterface)]
pub(crate) struct HandleMessageEvent;

#[async_trait]
impl HandleMessageEventInterface for HandleMessageEvent {
    #[tracing::instrument(
        skip_all,
        fields(
            guild_id = %event.guild_id,
            channel_id = %event.channel_id,
            user_id = %event.principal.user_id
        )
    )]
    async fn run<'a>(&self, ctx: &CoreContext<'a>, event: &MessageEvent) -> Result<()> {
        let command_ctx = CommandContext {
            config: ctx.config,
            core_module: ctx.core_module,
            api_service: ctx.api_service,
            db_service: ctx.db_service,
            guild_id: event.guild_id,
            channel_id: event.channel_id,
            principal: &event.principal,
            target_member: event.target_member,
        };

        let executor: &dyn CommandExecutorInterface = ctx.core_module.resolve_ref();
        if let Err(error) = executor.execute(&command_ctx, &event.content).await {
            tracing::error!(
                content = event.content,
                error = %error,
                "Message handling failed"
            );
        }

        Ok(())
    }
}
