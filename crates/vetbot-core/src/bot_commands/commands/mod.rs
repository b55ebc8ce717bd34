use async_trait::async_trait;

use crate::{bot_commands::command::CommandExecutionResult, Result};

mod context;
mod custom_delete;
mod custom_edit;
mod custom_list;
mod custom_new;
mod custom_vetting;
mod help;
mod mod_edit;
mod mod_list;
mod ping;
mod prefix;

pub use context::CommandContext;
pub use custom_delete::DeleteCustomCommandCommand;
pub use custom_edit::EditCustomCommandCommand;
pub use custom_list::ListCustomCommandsCommand;
pub use custom_new::NewCustomCommandCommand;
pub use custom_vetting::CustomVettingCommand;
pub use help::HelpCommand;
pub use mod_edit::{EditModeratorRolesCommand, ModEditKind};
pub use mod_list::ListModeratorRolesCommand;
pub use ping::PingCommand;
pub use prefix::PrefixCommand;

#[async_trait]
pub trait BotCommand {
    async fn handle(&self, ctx: &CommandContext) -> Result<CommandExecutionResult>;
}

#[cfg(test)]
pub(crate) mod tests {
    use vetbot_config::Config;
    use vetbot_database_memory::MemoryDb;
    use vetbot_discord_interface::MockDiscordService;
    use vetbot_models::{ChannelId, GuildId, Principal, UserId};

    use super::*;
    use crate::CoreModule;

    pub(crate) struct CommandContextTest {
        pub config: Config,
        pub core_module: CoreModule,
        pub api_service: MockDiscordService,
        pub db_service: MemoryDb,
        pub guild_id: GuildId,
        pub channel_id: ChannelId,
        pub principal: Principal,
        pub target_member: Option<UserId>,
    }

    impl CommandContextTest {
        pub fn new() -> Self {
            Self {
                config: Config::from_env_no_version(),
                core_module: CoreModule::builder().build(),
                api_service: MockDiscordService::new(),
                db_service: MemoryDb::new(),
                guild_id: GuildId(1),
                channel_id: ChannelId(2),
                principal: Principal::new(UserId(3)),
                target_member: None,
            }
        }

        pub fn as_context(&self) -> CommandContext {
            CommandContext {
                config: &self.config,
                core_module: &self.core_module,
                api_service: &self.api_service,
                db_service: &self.db_service,
                guild_id: self.guild_id,
                channel_id: self.channel_id,
                principal: &self.principal,
                target_member: self.target_member,
            }
        }
    }
}
