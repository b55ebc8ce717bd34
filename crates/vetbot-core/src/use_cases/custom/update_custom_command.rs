use async_trait::async_trait;
use shaku::{Component, Interface};
use vetbot_models::{CustomCommandConfig, GuildId};

use crate::{
    custom_commands::{ConfigViolation, CustomCommandBuilder, ValidationOutcome},
    CoreContext, Result,
};

/// Direction of a configuration edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKind {
    Add,
    Remove,
}

#[derive(Debug, PartialEq, Eq)]
pub enum UpdateOutcome {
    Updated(CustomCommandConfig),
    NotFound(String),
    Invalid(ConfigViolation),
}

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait UpdateCustomCommandInterface: Interface {
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        guild_id: GuildId,
        name: &str,
        kind: EditKind,
        builder: &CustomCommandBuilder,
    ) -> Result<UpdateOutcome>;
}

#[derive(Component)]
#[shaku(interface = UpdateCustomCommandInterface)]
pub(crate) struct UpdateCustomCommand;

#[async_trait]
impl UpdateCustomCommandInterface for UpdateCustomCommand {
    #[tracing::instrument(skip_all, fields(guild_id = %guild_id, name = name, kind = ?kind))]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        guild_id: GuildId,
        name: &str,
        kind: EditKind,
        builder: &CustomCommandBuilder,
    ) -> Result<UpdateOutcome> {
        let name = name.to_lowercase();
        let config = match ctx.db_service.custom_commands_get(guild_id, &name).await? {
            Some(config) => config,
            None => return Ok(UpdateOutcome::NotFound(name)),
        };

        let merged = match kind {
            EditKind::Add => {
                if let ValidationOutcome::Invalid(violation) =
                    builder.validate(ctx, guild_id).await?
                {
                    return Ok(UpdateOutcome::Invalid(violation));
                }
                let merged = builder.add_to(config);
                if let Some(violation) = CustomCommandBuilder::check_merged(&merged) {
                    return Ok(UpdateOutcome::Invalid(violation));
                }
                merged
            }
            EditKind::Remove => builder.remove_from(config),
        };

        let config = ctx.db_service.custom_commands_update(merged).await?;
        Ok(UpdateOutcome::Updated(config))
    }
}

#[cfg(test)]
mod tests {
    use vetbot_database_interface::DbService;
    use vetbot_models::RoleId;

    use super::*;
    use crate::context::tests::CoreContextTest;

    #[tokio::test]
    async fn run_adds_to_existing_command() -> Result<()> {
        let mut ctx = CoreContextTest::new();
        ctx.api_service
            .expect_guild_roles()
            .returning(|_| Ok(vec![RoleId(10), RoleId(20)]));

        let mut existing = CustomCommandConfig::new(GuildId(1), "vet");
        existing.add_roles = vec![RoleId(10)];
        ctx.db_service.custom_commands_create(existing).await?;

        let builder = CustomCommandBuilder {
            add_roles: vec![RoleId(20)],
            ..Default::default()
        };

        let outcome = UpdateCustomCommand
            .run(&ctx.as_context(), GuildId(1), "vet", EditKind::Add, &builder)
            .await?;
        match outcome {
            UpdateOutcome::Updated(config) => {
                assert_eq!(config.add_roles, vec![RoleId(10), RoleId(20)]);
            }
            other => panic!("unexpected outcome: {other:?}"),
        }

        Ok(())
    }

    #[tokio::test]
    async fn run_removes_from_existing_command() -> Result<()> {
        let ctx = CoreContextTest::new();

        let mut existing = CustomCommandConfig::new(GuildId(1), "vet");
        existing.kick = true;
        existing.kick_reason = Some("Goodbye.".into());
        existing.add_roles = vec![RoleId(10), RoleId(20)];
        ctx.db_service.custom_commands_create(existing).await?;

        let builder = CustomCommandBuilder {
            kick: true,
            add_roles: vec![RoleId(10)],
            ..Default::default()
        };

        let outcome = UpdateCustomCommand
            .run(
                &ctx.as_context(),
                GuildId(1),
                "vet",
                EditKind::Remove,
                &builder,
            )
            .await?;
        match outcome {
            UpdateOutcome::Updated(config) => {
                assert!(!config.kick);
                assert_eq!(config.kick_reason, None);
                assert_eq!(config.add_roles, vec![RoleId(20)]);
            }
            other => panic!("unexpected outcome: {other:?}"),
        }

        Ok(())
    }

    #[tokio::test]
    async fn run_reports_unknown_command() -> Result<()> {
        let ctx = CoreContextTest::new();

        let outcome = UpdateCustomCommand
            .run(
                &ctx.as_context(),
                GuildId(1),
                "vet",
                EditKind::Add,
                &CustomCommandBuilder::default(),
            )
            .await?;
        assert_eq!(outcome, UpdateOutcome::NotFound("vet".into()));

        Ok(())
    }

    #[tokio::test]
    async fn run_rejects_merged_kick_and_ban() -> Result<()> {
        let mut ctx = CoreContextTest::new();
        ctx.api_service
            .expect_guild_roles()
            .returning(|_| Ok(vec![]));

        let mut existing = CustomCommandConfig::new(GuildId(1), "vet");
        existing.kick = true;
        ctx.db_service.custom_commands_create(existing).await?;

        let builder = CustomCommandBuilder {
            ban: true,
            ..Default::default()
        };

        let outcome = UpdateCustomCommand
            .run(&ctx.as_context(), GuildId(1), "vet", EditKind::Add, &builder)
            .await?;
        assert_eq!(outcome, UpdateOutcome::Invalid(ConfigViolation::KickAndBan));

        let stored = ctx
            .db_service
            .custom_commands_get_expect(GuildId(1), "vet")
            .await?;
        assert!(!stored.ban);

        Ok(())
    }
}
