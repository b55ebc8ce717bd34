use vetbot_models::{ChannelId, GuildId, RoleId, UserId};

use super::builder::CustomCommandBuilder;
use crate::mentions::find_snowflake;

/// Pending role edit armed by a bare `+` or `-`, consumed by the next token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PendingRole {
    None,
    Add,
    Remove,
}

/// Sticky access-list context set by `allow` / `forbid`, applied to every
/// following id token until overridden.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PendingAccess {
    None,
    Allow,
    Forbid,
}

fn record<T: PartialEq>(list: &mut Vec<T>, value: T) {
    if !list.contains(&value) {
        list.push(value);
    }
}

fn join_remainder(tokens: &[&str]) -> Option<String> {
    if tokens.is_empty() {
        None
    } else {
        Some(tokens.join(" "))
    }
}

/// Parse an administrator's free-text edit request into a builder.
///
/// Single left-to-right pass over whitespace-separated tokens. `ban` and
/// `kick` consume the whole remainder as a reason when `include_reason` is
/// set, and `ping` consumes a channel reference plus the remainder as the
/// message body; in all three cases parsing terminates so that free text is
/// never mistaken for further directives. `allow`/`forbid` ids naming the
/// guild itself or an existing guild role are filed under the role lists,
/// anything else under the user lists.
pub fn parse_edit_request(
    guild_id: GuildId,
    guild_roles: &[RoleId],
    text: &str,
    include_reason: bool,
) -> CustomCommandBuilder {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let mut builder = CustomCommandBuilder::default();

    let mut pending_role = PendingRole::None;
    let mut pending_access = PendingAccess::None;

    for (i, &token) in tokens.iter().enumerate() {
        let mut next_pending_role = PendingRole::None;

        match token {
            "ban" => {
                builder.ban = true;
                if include_reason {
                    builder.ban_reason = join_remainder(&tokens[i + 1..]);
                    return builder;
                }
            }
            "kick" => {
                builder.kick = true;
                if include_reason {
                    builder.kick_reason = join_remainder(&tokens[i + 1..]);
                    return builder;
                }
            }
            "ping" => {
                builder.ping = true;
                if include_reason {
                    if let Some((channel, message)) = tokens[i + 1..].split_first() {
                        builder.ping_channel = find_snowflake(channel).map(ChannelId);
                        builder.ping_message = Some(message.join(" "));
                        return builder;
                    }
                }
            }
            "allow" => pending_access = PendingAccess::Allow,
            "forbid" => pending_access = PendingAccess::Forbid,
            _ if token.starts_with('+') => match find_snowflake(token) {
                Some(id) => record(&mut builder.add_roles, RoleId(id)),
                None => next_pending_role = PendingRole::Add,
            },
            _ if token.starts_with('-') => match find_snowflake(token) {
                Some(id) => record(&mut builder.remove_roles, RoleId(id)),
                None => next_pending_role = PendingRole::Remove,
            },
            _ => match pending_role {
                PendingRole::Add => {
                    if let Some(id) = find_snowflake(token) {
                        record(&mut builder.add_roles, RoleId(id));
                    }
                }
                PendingRole::Remove => {
                    if let Some(id) = find_snowflake(token) {
                        record(&mut builder.remove_roles, RoleId(id));
                    }
                }
                PendingRole::None => {
                    if let Some(id) = find_snowflake(token) {
                        let is_role =
                            id == u64::from(guild_id) || guild_roles.contains(&RoleId(id));
                        match pending_access {
                            PendingAccess::Allow if is_role => {
                                record(&mut builder.allowed_roles, RoleId(id))
                            }
                            PendingAccess::Allow => record(&mut builder.allowed_users, UserId(id)),
                            PendingAccess::Forbid if is_role => {
                                record(&mut builder.forbidden_roles, RoleId(id))
                            }
                            PendingAccess::Forbid => {
                                record(&mut builder.forbidden_users, UserId(id))
                            }
                            PendingAccess::None => {}
                        }
                    }
                }
            },
        }

        pending_role = next_pending_role;
    }

    builder
}
