use std::{collections::HashMap, sync::RwLock};

use async_trait::async_trait;
use vetbot_database_interface::{DbService, Result};
use vetbot_models::{CustomCommandConfig, GuildConfig, GuildId};

#[derive(Debug, Default)]
pub struct MemoryDb {
    guilds: RwLock<HashMap<u64, GuildConfig>>,
    custom_commands: RwLock<HashMap<(u64, String), CustomCommandConfig>>,
}

impl MemoryDb {
    pub fn new() -> Self {
        Default::default()
    }
}

#[async_trait]
impl DbService for MemoryDb {
    async fn guilds_create(&self, instance: GuildConfig) -> Result<GuildConfig> {
        self.guilds
            .write()
            .unwrap()
            .insert(instance.guild_id.into(), instance.clone());
        Ok(instance)
    }

    async fn guilds_update(&self, instance: GuildConfig) -> Result<GuildConfig> {
        self.guilds
            .write()
            .unwrap()
            .insert(instance.guild_id.into(), instance.clone());
        Ok(instance)
    }

    async fn guilds_all(&self) -> Result<Vec<GuildConfig>> {
        let mut values: Vec<_> = self.guilds.read().unwrap().values().cloned().collect();
        values.sort_by_key(|g| g.guild_id);
        Ok(values)
    }

    async fn guilds_get(&self, guild_id: GuildId) -> Result<Option<GuildConfig>> {
        Ok(self.guilds.read().unwrap().get(&guild_id.into()).cloned())
    }

    async fn guilds_delete(&self, guild_id: GuildId) -> Result<bool> {
        if self.guilds.read().unwrap().get(&guild_id.into()).is_some() {
            self.guilds.write().unwrap().remove(&guild_id.into());
            self.custom_commands
                .write()
                .unwrap()
                .retain(|(gid, _), _| *gid != u64::from(guild_id));
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn custom_commands_create(
        &self,
        instance: CustomCommandConfig,
    ) -> Result<CustomCommandConfig> {
        self.custom_commands
            .write()
            .unwrap()
            .insert((instance.guild_id.into(), instance.name.clone()), instance.clone());
        Ok(instance)
    }

    async fn custom_commands_update(
        &self,
        instance: CustomCommandConfig,
    ) -> Result<CustomCommandConfig> {
        self.custom_commands
            .write()
            .unwrap()
            .insert((instance.guild_id.into(), instance.name.clone()), instance.clone());
        Ok(instance)
    }

    async fn custom_commands_get(
        &self,
        guild_id: GuildId,
        name: &str,
    ) -> Result<Option<CustomCommandConfig>> {
        Ok(self
            .custom_commands
            .read()
            .unwrap()
            .get(&(guild_id.into(), name.into()))
            .cloned())
    }

    async fn custom_commands_delete(&self, guild_id: GuildId, name: &str) -> Result<bool> {
        let key = (guild_id.into(), name.to_string());
        if self.custom_commands.read().unwrap().get(&key).is_some() {
            self.custom_commands.write().unwrap().remove(&key);
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn custom_commands_list(&self, guild_id: GuildId) -> Result<Vec<CustomCommandConfig>> {
        let mut values: Vec<_> = self
            .custom_commands
            .read()
            .unwrap()
            .values()
            .filter(|c| c.guild_id == guild_id)
            .cloned()
            .collect();
        values.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(values)
    }

    async fn custom_commands_all(&self) -> Result<Vec<CustomCommandConfig>> {
        let mut values: Vec<_> = self
            .custom_commands
            .read()
            .unwrap()
            .values()
            .cloned()
            .collect();
        values.sort_by(|a, b| (a.guild_id, &a.name).cmp(&(b.guild_id, &b.name)));
        Ok(values)
    }

    async fn health_check(&self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use vetbot_database_interface::DbService;
    use vetbot_models::{CustomCommandConfig, GuildConfig, GuildId, RoleId};

    use super::MemoryDb;

    #[tokio::test]
    async fn guilds() {
        let db = MemoryDb::new();

        let guild = db
            .guilds_create(GuildConfig::new(GuildId(1), "!"))
            .await
            .unwrap();
        assert_eq!(db.guilds_get(GuildId(1)).await.unwrap(), Some(guild.clone()));
        assert_eq!(db.guilds_get(GuildId(2)).await.unwrap(), None);

        let mut updated = guild;
        updated.moderator_roles.push(RoleId(10));
        db.guilds_update(updated.clone()).await.unwrap();
        assert_eq!(db.guilds_get_expect(GuildId(1)).await.unwrap(), updated);

        assert!(db.guilds_delete(GuildId(1)).await.unwrap());
        assert!(!db.guilds_delete(GuildId(1)).await.unwrap());
    }

    #[tokio::test]
    async fn custom_commands() {
        let db = MemoryDb::new();

        db.custom_commands_create(CustomCommandConfig::new(GuildId(1), "vet"))
            .await
            .unwrap();
        db.custom_commands_create(CustomCommandConfig::new(GuildId(1), "accept"))
            .await
            .unwrap();
        db.custom_commands_create(CustomCommandConfig::new(GuildId(2), "vet"))
            .await
            .unwrap();

        let names: Vec<_> = db
            .custom_commands_list(GuildId(1))
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["accept".to_string(), "vet".to_string()]);

        assert!(db
            .custom_commands_get(GuildId(2), "vet")
            .await
            .unwrap()
            .is_some());
        assert!(db.custom_commands_delete(GuildId(2), "vet").await.unwrap());
        assert!(!db.custom_commands_delete(GuildId(2), "vet").await.unwrap());
    }

    #[tokio::test]
    async fn guild_delete_drops_custom_commands() {
        let db = MemoryDb::new();

        db.guilds_create(GuildConfig::new(GuildId(1), "!"))
            .await
            .unwrap();
        db.custom_commands_create(CustomCommandConfig::new(GuildId(1), "vet"))
            .await
            .unwrap();

        assert!(db.guilds_delete(GuildId(1)).await.unwrap());
        assert!(db
            .custom_commands_list(GuildId(1))
            .await
            .unwrap()
            .is_empty());
    }
}
