mod capability;
mod custom_command;
mod guild_config;
mod ids;
mod principal;

pub use capability::{Capability, CapabilityError, CapabilitySet};
pub use custom_command::CustomCommandConfig;
pub use guild_config::GuildConfig;
pub use ids::{ChannelId, GuildId, IdParseError, RoleId, UserId};
pub use principal::Principal;
