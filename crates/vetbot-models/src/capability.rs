use std::{collections::BTreeSet, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CapabilityError {
    /// Unknown capability.
    #[error("Unknown capability: {}", capability)]
    UnknownCapability { capability: String },
}

/// A platform-granted permission usable as a gate on built-in commands.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    /// Administrator.
    Administrator,
    /// Manage guild settings.
    ManageGuild,
    /// Manage roles.
    ManageRoles,
    /// Kick members.
    KickMembers,
    /// Ban members.
    BanMembers,
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let value = match self {
            Self::Administrator => "administrator",
            Self::ManageGuild => "manage_guild",
            Self::ManageRoles => "manage_roles",
            Self::KickMembers => "kick_members",
            Self::BanMembers => "ban_members",
        };

        f.write_str(value)
    }
}

impl FromStr for Capability {
    type Err = CapabilityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

impl TryFrom<&str> for Capability {
    type Error = CapabilityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "administrator" => Ok(Self::Administrator),
            "manage_guild" => Ok(Self::ManageGuild),
            "manage_roles" => Ok(Self::ManageRoles),
            "kick_members" => Ok(Self::KickMembers),
            "ban_members" => Ok(Self::BanMembers),
            other => Err(CapabilityError::UnknownCapability {
                capability: other.into(),
            }),
        }
    }
}

/// A set of capabilities held by a principal or required by a command.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CapabilitySet(BTreeSet<Capability>);

impl CapabilitySet {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, capability: Capability) -> bool {
        self.0.contains(&capability)
    }

    /// Whether this set is a superset of `other`.
    pub fn contains_all(&self, other: &CapabilitySet) -> bool {
        self.0.is_superset(&other.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = Capability> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<Capability> for CapabilitySet {
    fn from_iter<T: IntoIterator<Item = Capability>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[Capability; N]> for CapabilitySet {
    fn from(value: [Capability; N]) -> Self {
        value.into_iter().collect()
    }
}
