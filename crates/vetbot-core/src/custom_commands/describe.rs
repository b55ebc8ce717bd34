use vetbot_models::CustomCommandConfig;

use crate::mentions::{channel_mention, role_mention, user_mention};

/// Human-readable summary of what a custom command does and who may run it,
/// shown to administrators after edits and in command listings.
pub fn describe_custom_command(config: &CustomCommandConfig) -> String {
    let mut lines: Vec<String> = Vec::new();
    let guild_id = config.guild_id;

    if config.ban {
        lines.push(match &config.ban_reason {
            Some(reason) => format!("Bans the user being vetted with reason \"{reason}\"."),
            None => "Bans the user being vetted.".into(),
        });
    } else if config.kick {
        lines.push(match &config.kick_reason {
            Some(reason) => format!("Kicks the user being vetted with reason \"{reason}\"."),
            None => "Kicks the user being vetted.".into(),
        });
    } else {
        if !config.add_roles.is_empty() {
            let roles = config
                .add_roles
                .iter()
                .map(|role| role_mention(*role, guild_id))
                .collect::<Vec<_>>()
                .join(", ");
            lines.push(format!("Adds roles: {roles}"));
        }
        if !config.remove_roles.is_empty() {
            let roles = config
                .remove_roles
                .iter()
                .map(|role| role_mention(*role, guild_id))
                .collect::<Vec<_>>()
                .join(", ");
            lines.push(format!("Removes roles: {roles}"));
        }
        if config.add_roles.is_empty() && config.remove_roles.is_empty() && !config.has_ping() {
            lines.push("Does nothing.".into());
        }
    }

    if let (Some(channel), Some(message)) = (config.ping_channel, &config.ping_message) {
        lines.push(format!("Pings in {}: {message}", channel_mention(channel)));
    }

    if !config.forbidden_users.is_empty() {
        let users = config
            .forbidden_users
            .iter()
            .map(|user| user_mention(*user))
            .collect::<Vec<_>>()
            .join(", ");
        lines.push(format!("Forbidden users: {users}"));
    }
    if !config.allowed_users.is_empty() {
        let users = config
            .allowed_users
            .iter()
            .map(|user| user_mention(*user))
            .collect::<Vec<_>>()
            .join(", ");
        lines.push(format!("Allowed users: {users}"));
    }
    if !config.forbidden_roles.is_empty() {
        let roles = config
            .forbidden_roles
            .iter()
            .map(|role| role_mention(*role, guild_id))
            .collect::<Vec<_>>()
            .join(", ");
        lines.push(format!("Forbidden roles: {roles}"));
    }
    if !config.allowed_roles.is_empty() {
        let roles = config
            .allowed_roles
            .iter()
            .map(|role| role_mention(*role, guild_id))
            .collect::<Vec<_>>()
            .join(", ");
        lines.push(format!("Allowed roles: {roles}"));
    }

    if config.allowed_roles.is_empty() && config.allowed_users.is_empty() {
        lines.push("**Warning:** Nobody can execute the command.".into());
    }

    lines.join("\n")
}
