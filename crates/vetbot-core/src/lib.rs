//! Logic module.

#![warn(clippy::all)]
#![allow(clippy::new_without_default)]

pub mod bot_commands;
mod context;
pub mod custom_commands;
pub mod errors;
pub mod mentions;
pub mod templates;
pub mod use_cases;

use bot_commands::executor::CommandExecutor;
pub use context::CoreContext;
pub use errors::{DomainError, Result};
use shaku::module;
use use_cases::{
    custom::{
        create_custom_command::CreateCustomCommand, delete_custom_command::DeleteCustomCommand,
        list_custom_commands::ListCustomCommands, update_custom_command::UpdateCustomCommand,
    },
    guilds::{
        add_moderator_roles::AddModeratorRoles, get_guild_config::GetGuildConfig,
        remove_moderator_roles::RemoveModeratorRoles, set_guild_prefix::SetGuildPrefix,
    },
    messages::handle_message_event::HandleMessageEvent,
};

module! {
    pub CoreModule {
        components = [
            AddModeratorRoles,
            CommandExecutor,
            CreateCustomCommand,
            DeleteCustomCommand,
            GetGuildConfig,
            HandleMessageEvent,
            ListCustomCommands,
            RemoveModeratorRoles,
            SetGuildPrefix,
            UpdateCustomCommand
        ],
        providers = []
    }
}
