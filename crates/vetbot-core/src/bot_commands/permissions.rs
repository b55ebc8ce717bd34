use vetbot_models::{GuildId, Principal};

use super::command::Command;

/// Decide whether a principal may invoke a command.
///
/// Built-in commands require a non-bot principal whose capabilities are a
/// superset of the declared set (if any). Custom commands evaluate their
/// access lists in strict precedence order, first match deciding:
/// forbidden users, allowed users, forbidden roles, allowed roles, the
/// everyone sentinel. An explicit per-user rule always overrides role rules,
/// and role-level forbid overrides role-level allow.
pub fn can_execute(command: Command<'_>, guild_id: GuildId, principal: &Principal) -> bool {
    if principal.is_bot {
        return false;
    }

    match command {
        Command::BuiltIn(command) => {
            let required = command.required_capabilities();
            required.is_empty() || principal.capabilities.contains_all(required)
        }
        Command::Custom(config) => {
            if config.forbidden_users.contains(&principal.user_id) {
                return false;
            }
            if config.allowed_users.contains(&principal.user_id) {
                return true;
            }
            if principal
                .role_ids
                .iter()
                .any(|role| config.forbidden_roles.contains(role))
            {
                return false;
            }
            if principal
                .role_ids
                .iter()
                .any(|role| config.allowed_roles.contains(role))
            {
                return true;
            }
            if config.allowed_roles.contains(&guild_id.everyone_role()) {
                return true;
            }
            false
        }
    }
}
