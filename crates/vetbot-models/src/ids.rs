use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Id parsing error.
#[derive(Debug, Error)]
pub enum IdParseError {
    /// Not a decimal snowflake.
    #[error("Invalid id: {}", value)]
    InvalidId { value: String },
}

macro_rules! snowflake_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(
            Debug,
            Clone,
            Copy,
            Default,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            Serialize,
            Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                self.0.fmt(f)
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for u64 {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl FromStr for $name {
            type Err = IdParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse::<u64>()
                    .map(Self)
                    .map_err(|_| IdParseError::InvalidId { value: s.into() })
            }
        }
    };
}

snowflake_id!(
    /// A Discord guild (server) id.
    GuildId
);
snowflake_id!(
    /// A Discord role id.
    RoleId
);
snowflake_id!(
    /// A Discord user id.
    UserId
);
snowflake_id!(
    /// A Discord channel id.
    ChannelId
);

impl GuildId {
    /// The "everyone" sentinel role: Discord assigns the guild id itself to
    /// the implicit everyone role.
    pub fn everyone_role(self) -> RoleId {
        RoleId(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_display() {
        let id: GuildId = "12345".parse().unwrap();
        assert_eq!(id, GuildId(12345));
        assert_eq!(id.to_string(), "12345");

        assert!("not-an-id".parse::<RoleId>().is_err());
    }

    #[test]
    fn everyone_role_matches_guild_id() {
        assert_eq!(GuildId(42).everyone_role(), RoleId(42));
    }

    #[test]
    fn serde_transparent() {
        let id = UserId(7);
        assert_eq!(serde_json::to_string(&id).unwrap(), "7");
        assert_eq!(serde_json::from_str::<UserId>("7").unwrap(), id);
    }
}
