use thiserror::Error;
use vetbot_models::{ChannelId, CustomCommandConfig, GuildId, RoleId, UserId};

use crate::{
    mentions::{channel_mention, role_mention},
    templates::{highlight, ping_template},
    CoreContext, Result,
};

/// A rule violated by a requested configuration edit. The edit is rejected
/// and nothing is committed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigViolation {
    #[error("{role} is not a valid role.")]
    UnknownRole { role: String },

    #[error("{roles} are not valid roles.")]
    UnknownRoles { roles: String },

    #[error("A command cannot both kick and ban.")]
    KickAndBan,

    #[error("Missing channel for ping.")]
    MissingPingChannel,

    #[error("{channel} is not a valid channel.")]
    UnknownPingChannel { channel: String },

    #[error("Missing message for ping.")]
    MissingPingMessage,

    #[error("Invalid template: {message} Highlighted problem: {highlighted}")]
    InvalidPingTemplate { message: String, highlighted: String },
}

#[derive(Debug, PartialEq, Eq)]
pub enum ValidationOutcome {
    Valid,
    Invalid(ConfigViolation),
}

/// Accumulated edit request, produced by the argument parser and merged
/// into an existing configuration with [`add_to`](Self::add_to) or
/// [`remove_from`](Self::remove_from).
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CustomCommandBuilder {
    pub kick: bool,
    pub kick_reason: Option<String>,
    pub ban: bool,
    pub ban_reason: Option<String>,
    pub add_roles: Vec<RoleId>,
    pub remove_roles: Vec<RoleId>,
    pub allowed_roles: Vec<RoleId>,
    pub allowed_users: Vec<UserId>,
    pub forbidden_roles: Vec<RoleId>,
    pub forbidden_users: Vec<UserId>,
    pub ping: bool,
    pub ping_channel: Option<ChannelId>,
    pub ping_message: Option<String>,
}

fn union<T: PartialEq + Copy>(base: &[T], extra: &[T]) -> Vec<T> {
    let mut out = base.to_vec();
    for value in extra {
        if !out.contains(value) {
            out.push(*value);
        }
    }
    out
}

fn difference<T: PartialEq + Copy>(base: &[T], removed: &[T]) -> Vec<T> {
    base.iter()
        .copied()
        .filter(|value| !removed.contains(value))
        .collect()
}

impl CustomCommandBuilder {
    /// Merge this edit into a configuration. Booleans are OR'd, reasons fall
    /// back to the prior value, role lists are unioned. Allowing a role or
    /// user removes it from the opposing forbidden list and vice versa.
    /// Ping fields overwrite only when newly supplied.
    pub fn add_to(&self, config: CustomCommandConfig) -> CustomCommandConfig {
        CustomCommandConfig {
            kick: self.kick || config.kick,
            kick_reason: self.kick_reason.clone().or(config.kick_reason),
            ban: self.ban || config.ban,
            ban_reason: self.ban_reason.clone().or(config.ban_reason),
            add_roles: union(&config.add_roles, &self.add_roles),
            remove_roles: union(&config.remove_roles, &self.remove_roles),
            allowed_roles: difference(
                &union(&config.allowed_roles, &self.allowed_roles),
                &self.forbidden_roles,
            ),
            allowed_users: difference(
                &union(&config.allowed_users, &self.allowed_users),
                &self.forbidden_users,
            ),
            forbidden_roles: union(
                &difference(&config.forbidden_roles, &self.allowed_roles),
                &self.forbidden_roles,
            ),
            forbidden_users: union(
                &difference(&config.forbidden_users, &self.allowed_users),
                &self.forbidden_users,
            ),
            ping_channel: self.ping_channel.or(config.ping_channel),
            ping_message: self.ping_message.clone().or(config.ping_message),
            ..config
        }
    }

    /// Undo this edit from a configuration. Booleans become false only if
    /// this removal targeted them, lists are set-differenced, and both ping
    /// fields are cleared when a ping removal was requested.
    pub fn remove_from(&self, config: CustomCommandConfig) -> CustomCommandConfig {
        CustomCommandConfig {
            kick: !self.kick && config.kick,
            kick_reason: if self.kick { None } else { config.kick_reason },
            ban: !self.ban && config.ban,
            ban_reason: if self.ban { None } else { config.ban_reason },
            add_roles: difference(&config.add_roles, &self.add_roles),
            remove_roles: difference(&config.remove_roles, &self.remove_roles),
            allowed_roles: difference(&config.allowed_roles, &self.allowed_roles),
            allowed_users: difference(&config.allowed_users, &self.allowed_users),
            forbidden_roles: difference(&config.forbidden_roles, &self.forbidden_roles),
            forbidden_users: difference(&config.forbidden_users, &self.forbidden_users),
            ping_channel: if self.ping { None } else { config.ping_channel },
            ping_message: if self.ping { None } else { config.ping_message },
            ..config
        }
    }

    /// Check this edit against the guild it targets: referenced roles must
    /// exist, and a requested ping needs an existing channel plus a message
    /// passing template validation.
    pub async fn validate(
        &self,
        ctx: &CoreContext<'_>,
        guild_id: GuildId,
    ) -> Result<ValidationOutcome> {
        let guild_roles = ctx.api_service.guild_roles(guild_id).await?;
        let unknown: Vec<RoleId> = self
            .add_roles
            .iter()
            .chain(self.remove_roles.iter())
            .copied()
            .filter(|role| !guild_roles.contains(role))
            .collect();

        if let [role] = unknown[..] {
            return Ok(ValidationOutcome::Invalid(ConfigViolation::UnknownRole {
                role: role_mention(role, guild_id),
            }));
        }
        if !unknown.is_empty() {
            let roles = unknown
                .iter()
                .map(|role| role_mention(*role, guild_id))
                .collect::<Vec<_>>()
                .join(", ");
            return Ok(ValidationOutcome::Invalid(ConfigViolation::UnknownRoles {
                roles,
            }));
        }

        if self.ping {
            let channel = match self.ping_channel {
                Some(channel) => channel,
                None => {
                    return Ok(ValidationOutcome::Invalid(
                        ConfigViolation::MissingPingChannel,
                    ))
                }
            };
            if !ctx.api_service.channel_exists(guild_id, channel).await? {
                return Ok(ValidationOutcome::Invalid(
                    ConfigViolation::UnknownPingChannel {
                        channel: channel_mention(channel),
                    },
                ));
            }
            let message = match self.ping_message.as_deref() {
                Some(message) if !message.trim().is_empty() => message,
                _ => {
                    return Ok(ValidationOutcome::Invalid(
                        ConfigViolation::MissingPingMessage,
                    ))
                }
            };
            if let Some(result) = ping_template().validate(message) {
                return Ok(ValidationOutcome::Invalid(
                    ConfigViolation::InvalidPingTemplate {
                        message: result.kind.to_string(),
                        highlighted: highlight(message, &result),
                    },
                ));
            }
        }

        Ok(ValidationOutcome::Valid)
    }

    /// Invariant check on a merged configuration, before it is committed.
    pub fn check_merged(config: &CustomCommandConfig) -> Option<ConfigViolation> {
        if config.kick && config.ban {
            Some(ConfigViolation::KickAndBan)
        } else {
            None
        }
    }
}
