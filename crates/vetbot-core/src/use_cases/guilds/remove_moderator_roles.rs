use async_trait::async_trait;
use shaku::{Component, Interface};
use vetbot_models::{GuildConfig, GuildId, RoleId};

use crate::{CoreContext, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait RemoveModeratorRolesInterface: Interface {
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        guild_id: GuildId,
        roles: Vec<RoleId>,
    ) -> Result<GuildConfig>;
}

#[derive(Component)]
#[shaku(interface = RemoveModeratorRolesInterface)]
pub(crate) struct RemoveModeratorRoles;

#[async_trait]
impl RemoveModeratorRolesInterface for RemoveModeratorRoles {
    #[tracing::instrument(skip_all, fields(guild_id = %guild_id, roles = ?roles))]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        guild_id: GuildId,
        roles: Vec<RoleId>,
    ) -> Result<GuildConfig> {
        let mut config = match ctx.db_service.guilds_get(guild_id).await? {
            Some(config) => config,
            None => {
                ctx.db_service
                    .guilds_create(GuildConfig::new(guild_id, &ctx.config.default_prefix))
                    .await?
            }
        };

        config.moderator_roles.retain(|role| !roles.contains(role));

        let config = ctx.db_service.guilds_update(config).await?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use vetbot_database_interface::DbService;
    use super::*;
    use crate::context::tests::CoreContextTest;

    #[tokio::test]
    async fn run_removes_known_roles() -> Result<()> {
        let ctx = CoreContextTest::new();

        let mut existing = GuildConfig::new(GuildId(1), "!");
        existing.moderator_roles.extend([RoleId(5), RoleId(6)]);
        ctx.db_service.guilds_create(existing).await?;

        let config = RemoveModeratorRoles
            .run(&ctx.as_context(), GuildId(1), vec![RoleId(6), RoleId(7)])
            .await?;
        assert_eq!(config.moderator_roles, vec![RoleId(5)]);

        Ok(())
    }

    #[tokio::test]
    async fn run_creates_missing_guild() -> Result<()> {
        let ctx = CoreContextTest::new();

        let config = RemoveModeratorRoles
            .run(&ctx.as_context(), GuildId(1), vec![RoleId(5)])
            .await?;
        assert!(config.moderator_roles.is_empty());

        Ok(())
    }
}
