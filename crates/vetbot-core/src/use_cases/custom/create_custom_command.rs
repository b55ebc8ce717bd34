use async_trait::async_trait;
use shaku::{Component, Interface};
use vetbot_models::{CustomCommandConfig, GuildId};

use crate::{
    custom_commands::{ConfigViolation, CustomCommandBuilder, ValidationOutcome},
    CoreContext, Result,
};

#[derive(Debug, PartialEq, Eq)]
pub enum CreateOutcome {
    Created(CustomCommandConfig),
    AlreadyExists(String),
    Invalid(ConfigViolation),
}

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait CreateCustomCommandInterface: Interface {
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        guild_id: GuildId,
        name: &str,
        builder: &CustomCommandBuilder,
    ) -> Result<CreateOutcome>;
}

#[derive(Component)]
#[shaku(interface = CreateCustomCommandInterface)]
pub(crate) struct CreateCustomCommand;

#[async_trait]
impl CreateCustomCommandInterface for CreateCustomCommand {
    #[tracing::instrument(skip_all, fields(guild_id = %guild_id, name = name))]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        guild_id: GuildId,
        name: &str,
        builder: &CustomCommandBuilder,
    ) -> Result<CreateOutcome> {
        let name = name.to_lowercase();
        if ctx
            .db_service
            .custom_commands_get(guild_id, &name)
            .await?
            .is_some()
        {
            return Ok(CreateOutcome::AlreadyExists(name));
        }

        if let ValidationOutcome::Invalid(violation) = builder.validate(ctx, guild_id).await? {
            return Ok(CreateOutcome::Invalid(violation));
        }

        let config = builder.add_to(CustomCommandConfig::new(guild_id, &name));
        if let Some(violation) = CustomCommandBuilder::check_merged(&config) {
            return Ok(CreateOutcome::Invalid(violation));
        }

        let config = ctx.db_service.custom_commands_create(config).await?;
        Ok(CreateOutcome::Created(config))
    }
}

#[cfg(test)]
mod tests {
    use vetbot_database_interface::DbService;
    use vetbot_models::RoleId;

    use super::*;
    use crate::context::tests::CoreContextTest;

    #[tokio::test]
    async fn run_creates_command() -> Result<()> {
        let mut ctx = CoreContextTest::new();
        ctx.api_service
            .expect_guild_roles()
            .returning(|_| Ok(vec![RoleId(10)]));

        let builder = CustomCommandBuilder {
            add_roles: vec![RoleId(10)],
            ..Default::default()
        };

        let outcome = CreateCustomCommand
            .run(&ctx.as_context(), GuildId(1), "Vet", &builder)
            .await?;
        match outcome {
            CreateOutcome::Created(config) => {
                assert_eq!(config.name, "vet");
                assert_eq!(config.add_roles, vec![RoleId(10)]);
            }
            other => panic!("unexpected outcome: {other:?}"),
        }

        assert!(ctx
            .db_service
            .custom_commands_get(GuildId(1), "vet")
            .await?
            .is_some());

        Ok(())
    }

    #[tokio::test]
    async fn run_rejects_duplicate_name() -> Result<()> {
        let ctx = CoreContextTest::new();
        ctx.db_service
            .custom_commands_create(CustomCommandConfig::new(GuildId(1), "vet"))
            .await?;

        let outcome = CreateCustomCommand
            .run(
                &ctx.as_context(),
                GuildId(1),
                "VET",
                &CustomCommandBuilder::default(),
            )
            .await?;
        assert_eq!(outcome, CreateOutcome::AlreadyExists("vet".into()));

        Ok(())
    }

    #[tokio::test]
    async fn run_rejects_invalid_edit() -> Result<()> {
        let mut ctx = CoreContextTest::new();
        ctx.api_service
            .expect_guild_roles()
            .returning(|_| Ok(vec![]));

        let builder = CustomCommandBuilder {
            add_roles: vec![RoleId(10)],
            ..Default::default()
        };

        let outcome = CreateCustomCommand
            .run(&ctx.as_context(), GuildId(1), "vet", &builder)
            .await?;
        assert!(matches!(
            outcome,
            CreateOutcome::Invalid(ConfigViolation::UnknownRole { .. })
        ));
        assert!(ctx
            .db_service
            .custom_commands_get(GuildId(1), "vet")
            .await?
            .is_none());

        Ok(())
    }

    #[tokio::test]
    async fn run_rejects_kick_and_ban() -> Result<()> {
        let mut ctx = CoreContextTest::new();
        ctx.api_service
            .expect_guild_roles()
            .returning(|_| Ok(vec![]));

        let builder = CustomCommandBuilder {
            kick: true,
            ban: true,
            ..Default::default()
        };

        let outcome = CreateCustomCommand
            .run(&ctx.as_context(), GuildId(1), "vet", &builder)
            .await?;
        assert_eq!(outcome, CreateOutcome::Invalid(ConfigViolation::KickAndBan));

        Ok(())
    }
}
