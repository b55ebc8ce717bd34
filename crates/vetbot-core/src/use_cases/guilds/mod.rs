pub(crate) mod add_moderator_roles;
pub(crate) mod get_guild_config;
pub(crate) mod remove_moderator_roles;
pub(crate) mod set_guild_prefix;

pub use add_moderator_roles::AddModeratorRolesInterface;
pub use get_guild_config::GetGuildConfigInterface;
pub use remove_moderator_roles::RemoveModeratorRolesInterface;
pub use set_guild_prefix::SetGuildPrefixInterface;

#[cfg(any(test, feature = "testkit"))]
pub use self::{
    add_moderator_roles::MockAddModeratorRolesInterface,
    get_guild_config::MockGetGuildConfigInterface,
    remove_moderator_roles::MockRemoveModeratorRolesInterface,
    set_guild_prefix::MockSetGuildPrefixInterface,
};
