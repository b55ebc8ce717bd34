use async_trait::async_trait;
use shaku::{Component, Interface};

use super::{
    command::{Command, CommandExecutionResult, ResultAction},
    commands::{
        BotCommand, CommandContext, CustomVettingCommand, DeleteCustomCommandCommand,
        EditCustomCommandCommand, EditModeratorRolesCommand, HelpCommand,
        ListCustomCommandsCommand, ListModeratorRolesCommand, ModEditKind, NewCustomCommandCommand,
        PingCommand, PrefixCommand,
    },
    registry::CommandRegistry,
    resolver::{CommandResolver, Resolution},
};
use crate::{bot_commands::command::BuiltInAction, use_cases::custom::EditKind, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait CommandExecutorInterface: Interface {
    async fn execute<'a>(
        &self,
        ctx: &CommandContext<'a>,
        message: &str,
    ) -> Result<CommandExecutionResult>;

    async fn process_result<'a>(
        &self,
        ctx: &CommandContext<'a>,
        result: &CommandExecutionResult,
    ) -> Result<()>;
}

/// Resolves an inbound message against the built-in tree and the guild's
/// custom commands, runs the matching handler, then applies the resulting
/// actions. Messages without the guild prefix are ignored before any guild
/// record is created or the custom command list is fetched. Handler failures are contained here: they are logged and turned
/// into a generic reply, so one failing command never takes down message
/// handling.
#[derive(Component)]
#[shaku(interface = CommandExecutorInterface)]
pub(crate) struct CommandExecutor {
    #[shaku(default)]
    registry: CommandRegistry,
}

#[async_trait]
impl CommandExecutorInterface for CommandExecutor {
    #[tracing::instrument(
        skip_all,
        fields(
            guild_id = %ctx.guild_id,
            channel_id = %ctx.channel_id,
            user_id = %ctx.principal.user_id
        )
    )]
    async fn execute<'a>(
        &self,
        ctx: &CommandContext<'a>,
        message: &str,
    ) -> Result<CommandExecutionResult> {
        let prefix = match ctx.db_service.guilds_get(ctx.guild_id).await? {
            Some(config) => config.prefix,
            None => ctx.config.default_prefix.clone(),
        };
        if !message.starts_with(&prefix) {
            return Ok(CommandExecutionResult::builder().ignored().build());
        }
        let custom_commands = ctx.db_service.custom_commands_list(ctx.guild_id).await?;

        let resolver = CommandResolver::new(&self.registry);
        let (command, args) = match resolver.resolve(
            &prefix,
            &custom_commands,
            ctx.guild_id,
            ctx.principal,
            message,
        ) {
            Resolution::NoMatch => {
                return Ok(CommandExecutionResult::builder().ignored().build())
            }
            Resolution::Denied => return Ok(CommandExecutionResult::builder().denied().build()),
            Resolution::Resolved { command, args } => (command, args),
        };

        let result = match self.dispatch(ctx, command, args).await {
            Ok(result) => result,
            Err(error) => {
                tracing::error!(
                    command = command.primary_name(),
                    error = %error,
                    "Command execution failed"
                );
                CommandExecutionResult::builder()
                    .with_action(ResultAction::Reply(
                        "Something went wrong while running the command.".into(),
                    ))
                    .build()
            }
        };

        self.process_result(ctx, &result).await?;
        Ok(result)
    }

    async fn process_result<'a>(
        &self,
        ctx: &CommandContext<'a>,
        result: &CommandExecutionResult,
    ) -> Result<()> {
        for action in &result.result_actions {
            match action {
                ResultAction::Reply(message) => {
                    ctx.api_service.message_send(ctx.channel_id, message).await?;
                }
            }
        }

        Ok(())
    }
}

impl CommandExecutor {
    async fn dispatch(
        &self,
        ctx: &CommandContext<'_>,
        command: Command<'_>,
        args: &str,
    ) -> Result<CommandExecutionResult> {
        match command {
            Command::Custom(config) => CustomVettingCommand::new(config, args).handle(ctx).await,
            Command::BuiltIn(command) => match command.action() {
                BuiltInAction::Ping => PingCommand::new().handle(ctx).await,
                BuiltInAction::Help => HelpCommand::new(&self.registry).handle(ctx).await,
                BuiltInAction::SetPrefix => PrefixCommand::new(args).handle(ctx).await,
                BuiltInAction::ListCustomCommands => {
                    ListCustomCommandsCommand::new().handle(ctx).await
                }
                BuiltInAction::NewCustomCommand => {
                    NewCustomCommandCommand::new(args).handle(ctx).await
                }
                BuiltInAction::AddToCustomCommand => {
                    EditCustomCommandCommand::new(args, EditKind::Add)
                        .handle(ctx)
                        .await
                }
                BuiltInAction::RemoveFromCustomCommand => {
                    EditCustomCommandCommand::new(args, EditKind::Remove)
                        .handle(ctx)
                        .await
                }
                BuiltInAction::DeleteCustomCommand => {
                    DeleteCustomCommandCommand::new(args).handle(ctx).await
                }
                BuiltInAction::ListModeratorRoles => {
                    ListModeratorRolesCommand::new().handle(ctx).await
                }
                BuiltInAction::AddModeratorRoles => {
                    EditModeratorRolesCommand::new(args, ModEditKind::Add)
                        .handle(ctx)
                        .await
                }
                BuiltInAction::RemoveModeratorRoles => {
                    EditModeratorRolesCommand::new(args, ModEditKind::Remove)
                        .handle(ctx)
                        .await
                }
            },
        }
    }
}
