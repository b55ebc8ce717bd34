//! Snowflake and mention helpers.
//!
//! Role, user and channel references arrive either as bare decimal ids or
//! wrapped in platform mention syntax (`<@&id>`, `<@!id>`, `<#id>`). Parsing
//! only cares about the embedded digits.

use lazy_static::lazy_static;
use regex::Regex;
use vetbot_models::{ChannelId, GuildId, RoleId, UserId};

lazy_static! {
    static ref SNOWFLAKE_REGEX: Regex = Regex::new(r"\d+").unwrap();
}

/// Extract the first decimal id embedded in a token, if any.
pub fn find_snowflake(text: &str) -> Option<u64> {
    SNOWFLAKE_REGEX
        .find(text)
        .and_then(|m| m.as_str().parse().ok())
}

/// Extract every decimal id embedded in a text.
pub fn find_all_snowflakes(text: &str) -> Vec<u64> {
    SNOWFLAKE_REGEX
        .find_iter(text)
        .filter_map(|m| m.as_str().parse().ok())
        .collect()
}

/// Render a role mention, using `@everyone` for the guild-wide sentinel.
pub fn role_mention(role_id: RoleId, guild_id: GuildId) -> String {
    if role_id == guild_id.everyone_role() {
        "@everyone".into()
    } else {
        format!("<@&{}>", role_id)
    }
}

pub fn user_mention(user_id: UserId) -> String {
    format!("<@!{}>", user_id)
}

pub fn channel_mention(channel_id: ChannelId) -> String {
    format!("<#{}>", channel_id)
}
