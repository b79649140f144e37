//! Rich player identities and the keys used to add or remove them.

use crate::{Error, PlayerId};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Returns the case-insensitive comparison key for a player or group name.
pub fn fold_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// A player reference carrying a display name and a stable unique ID,
/// either of which may be absent.
///
/// Group membership is answered by the identity itself; domains only store
/// group names and ask the player whether it belongs to them.
pub trait LocalPlayer {
    /// Returns the player's display name, if known.
    fn name(&self) -> Option<&str>;

    /// Returns the player's unique ID, if known.
    fn unique_id(&self) -> Option<PlayerId>;

    /// Returns true if the player is a member of the named group.
    fn has_group(&self, group: &str) -> bool;

    /// Returns the key that addresses this player in a domain, or `None`
    /// if the player carries neither a name nor an ID.
    fn key(&self) -> Option<PlayerKey> {
        PlayerKey::from_parts(self.name(), self.unique_id())
    }
}

/// Identifies a player entry for add/remove requests.
///
/// A player may be stored by name, by unique ID, or under both keys at once.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlayerKey {
    Name(String),
    Id(PlayerId),
    Both { name: String, id: PlayerId },
}

impl PlayerKey {
    /// Builds a key from optional parts. Blank names count as absent.
    #[must_use]
    pub fn from_parts(name: Option<&str>, id: Option<PlayerId>) -> Option<Self> {
        let name = name.map(str::trim).filter(|n| !n.is_empty());
        match (name, id) {
            (Some(name), Some(id)) => Some(Self::Both {
                name: name.to_string(),
                id,
            }),
            (Some(name), None) => Some(Self::Name(name.to_string())),
            (None, Some(id)) => Some(Self::Id(id)),
            (None, None) => None,
        }
    }

    /// Returns the name part of the key, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Name(name) | Self::Both { name, .. } => Some(name.as_str()),
            Self::Id(_) => None,
        }
    }

    /// Returns the ID part of the key, if any.
    #[must_use]
    pub fn id(&self) -> Option<PlayerId> {
        match self {
            Self::Id(id) | Self::Both { id, .. } => Some(*id),
            Self::Name(_) => None,
        }
    }
}

impl From<&str> for PlayerKey {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for PlayerKey {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<PlayerId> for PlayerKey {
    fn from(id: PlayerId) -> Self {
        Self::Id(id)
    }
}

/// Parses command-style input: a UUID becomes an ID key, anything else a
/// name key.
impl FromStr for PlayerKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(Error::InvalidName(s.to_string()));
        }
        match PlayerId::parse(trimmed) {
            Ok(id) => Ok(Self::Id(id)),
            Err(_) => Ok(Self::Name(trimmed.to_string())),
        }
    }
}

/// Plain-data player identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRef {
    name: Option<String>,
    unique_id: Option<PlayerId>,
    #[serde(default)]
    groups: Vec<String>,
}

impl PlayerRef {
    #[must_use]
    pub fn new(name: impl Into<String>, unique_id: PlayerId) -> Self {
        Self {
            name: Some(name.into()),
            unique_id: Some(unique_id),
            groups: Vec::new(),
        }
    }

    /// Creates an identity known only by name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Creates an identity known only by unique ID.
    #[must_use]
    pub fn with_id(unique_id: PlayerId) -> Self {
        Self {
            unique_id: Some(unique_id),
            ..Self::default()
        }
    }

    /// Adds a group membership.
    #[must_use]
    pub fn in_group(mut self, group: impl Into<String>) -> Self {
        self.groups.push(group.into());
        self
    }

    pub fn groups(&self) -> &[String] {
        &self.groups
    }
}

impl LocalPlayer for PlayerRef {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn unique_id(&self) -> Option<PlayerId> {
        self.unique_id
    }

    fn has_group(&self, group: &str) -> bool {
        let folded = fold_name(group);
        self.groups.iter().any(|g| fold_name(g) == folded)
    }
}
