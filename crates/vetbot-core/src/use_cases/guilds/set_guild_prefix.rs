use async_trait::async_trait;
use shaku::{Component, Interface};
use vetbot_models::{GuildConfig, GuildId};

use crate::{CoreContext, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait SetGuildPrefixInterface: Interface {
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        guild_id: GuildId,
        prefix: &str,
    ) -> Result<GuildConfig>;
}

#[derive(Component)]
#[shaku(interface = SetGuildPrefixInterface)]
pub(crate) struct SetGuildPrefix;

#[async_trait]
impl SetGuildPrefixInterface for SetGuildPrefix {
    #[tracing::instrument(skip_all, fields(guild_id = %guild_id, prefix = prefix))]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        guild_id: GuildId,
        prefix: &str,
    ) -> Result<GuildConfig> {
        let config = match ctx.db_service.guilds_get(guild_id).await? {
            Some(config) => {
                ctx.db_service
                    .guilds_update(GuildConfig {
                        prefix: prefix.into(),
                        ..config
                    })
                    .await?
            }
            None => {
                ctx.db_service
                    .guilds_create(GuildConfig::new(guild_id, prefix))
                    .await?
            }
        };

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use vetbot_database_interface::DbService;
    use vetbot_models::RoleId;

    use super::*;
    use crate::context::tests::CoreContextTest;

    #[tokio::test]
    async fn run_creates_missing_guild() -> Result<()> {
        let ctx = CoreContextTest::new();

        let config = SetGuildPrefix
            .run(&ctx.as_context(), GuildId(1), "?")
            .await?;
        assert_eq!(config.prefix, "?");
        assert_eq!(ctx.db_service.guilds_get_expect(GuildId(1)).await?.prefix, "?");

        Ok(())
    }

    #[tokio::test]
    async fn run_keeps_moderator_roles() -> Result<()> {
        let ctx = CoreContextTest::new();

        let mut existing = GuildConfig::new(GuildId(1), "!");
        existing.moderator_roles.push(RoleId(5));
        ctx.db_service.guilds_create(existing).await?;

        let config = SetGuildPrefix
            .run(&ctx.as_context(), GuildId(1), "$")
            .await?;
        assert_eq!(config.prefix, "$");
        assert_eq!(config.moderator_roles, vec![RoleId(5)]);

        Ok(())
    }
}
