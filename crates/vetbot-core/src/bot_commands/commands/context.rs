use vetbot_config::Config;
use vetbot_database_interface::DbService;
use vetbot_discord_interface::DiscordService;
use vetbot_models::{ChannelId, GuildId, Principal, UserId};

use crate::{CoreContext, CoreModule};

pub struct CommandContext<'a> {
    pub config: &'a Config,
    pub core_module: &'a CoreModule,
    pub api_service: &'a (dyn DiscordService + 'a),
    pub db_service: &'a (dyn DbService + 'a),
    pub guild_id: GuildId,
    pub channel_id: ChannelId,
    pub principal: &'a Principal,
    /// The member under vetting, resolved by the gateway from the invoking
    /// channel. Absent outside vetting channels.
    pub target_member: Option<UserId>,
}

impl<'a> CommandContext<'a> {
    pub fn as_core_context(&self) -> CoreContext<'a> {
        CoreContext {
            config: self.config,
            core_module: self.core_module,
            api_service: self.api_service,
            db_service: self.db_service,
        }
    }
}
