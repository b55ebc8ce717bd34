use async_trait::async_trait;
use shaku::HasComponent;
use vetbot_models::RoleId;

use crate::{
    bot_commands::{
        command::{CommandExecutionResult, ResultAction},
        BotCommand, CommandContext,
    },
    mentions::{find_all_snowflakes, role_mention},
    use_cases::guilds::{AddModeratorRolesInterface, RemoveModeratorRolesInterface},
    Result,
};

/// Direction of a moderator role edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModEditKind {
    Add,
    Remove,
}

pub struct EditModeratorRolesCommand {
    args: String,
    kind: ModEditKind,
}

impl EditModeratorRolesCommand {
    pub fn new(args: &str, kind: ModEditKind) -> Self {
        Self {
            args: args.to_string(),
            kind,
        }
    }
}

#[async_trait]
impl BotCommand for EditModeratorRolesCommand {
    async fn handle(&self, ctx: &CommandContext) -> Result<CommandExecutionResult> {
        let roles: Vec<RoleId> = find_all_snowflakes(&self.args)
            .into_iter()
            .map(RoleId)
            .collect();
        if roles.is_empty() {
            return Ok(CommandExecutionResult::builder()
                .with_action(ResultAction::Reply("No roles found in arguments.".into()))
                .build());
        }

        let guild_roles = ctx.api_service.guild_roles(ctx.guild_id).await?;
        if roles.iter().any(|role| !guild_roles.contains(role)) {
            return Ok(CommandExecutionResult::builder()
                .with_action(ResultAction::Reply(
                    "Not all roles are valid roles. Make sure to either mention roles directly \
                     or pass the id of the role."
                        .into(),
                ))
                .build());
        }

        let core_ctx = ctx.as_core_context();
        let mentions = roles
            .iter()
            .map(|role| role_mention(*role, ctx.guild_id))
            .collect::<Vec<_>>()
            .join(", ");

        let comment = match self.kind {
            ModEditKind::Add => {
                let add_moderator_roles: &dyn AddModeratorRolesInterface =
                    ctx.core_module.resolve_ref();
                add_moderator_roles.run(&core_ctx, ctx.guild_id, roles).await?;
                format!("Added moderator roles: {mentions}")
            }
            ModEditKind::Remove => {
                let remove_moderator_roles: &dyn RemoveModeratorRolesInterface =
                    ctx.core_module.resolve_ref();
                remove_moderator_roles
                    .run(&core_ctx, ctx.guild_id, roles)
                    .await?;
                format!("Removed moderator roles: {mentions}")
            }
        };

        Ok(CommandExecutionResult::builder()
            .with_action(ResultAction::Reply(comment))
            .build())
    }
}
