//! On-disk form of a domain.
//!
//! Records are plain TOML:
//!
//! ```toml
//! players = ["Bob"]
//! unique-ids = ["0f8fad5b-d9cb-469f-a165-70867728950e"]
//! groups = ["mods", "admins"]
//! ```

use crate::default_domain::Members;
use crate::domain::ChangeTracked;
use crate::{DefaultDomain, DomainError, DomainResult};
use guardian_types::PlayerId;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Serializable snapshot of a [`DefaultDomain`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct DomainRecord {
    #[serde(default)]
    pub players: Vec<String>,
    #[serde(default)]
    pub unique_ids: Vec<String>,
    #[serde(default)]
    pub groups: Vec<String>,
}

impl DomainRecord {
    /// Parses a record from TOML text.
    pub fn from_toml_str(contents: &str) -> DomainResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Encodes the record as TOML text.
    pub fn to_toml_string(&self) -> DomainResult<String> {
        Ok(toml::to_string(self)?)
    }

    /// Reads a record from a TOML file.
    pub fn load_from(path: impl AsRef<Path>) -> DomainResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| DomainError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let record = Self::from_toml_str(&contents)?;
        info!(
            path = %path.display(),
            players = record.players.len(),
            unique_ids = record.unique_ids.len(),
            groups = record.groups.len(),
            "Loaded domain record"
        );
        Ok(record)
    }

    /// Writes the record to a TOML file, replacing any existing file.
    pub fn save_to(&self, path: impl AsRef<Path>) -> DomainResult<()> {
        let path = path.as_ref();
        let contents = self.to_toml_string()?;
        std::fs::write(path, contents).map_err(|source| DomainError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), "Saved domain record");
        Ok(())
    }

    fn from_members(members: &Members) -> Self {
        let mut players: Vec<String> = members.players.players().map(str::to_string).collect();
        players.sort_unstable();
        let mut ids: Vec<PlayerId> = members.players.unique_ids().collect();
        ids.sort_unstable();
        Self {
            players,
            unique_ids: ids.iter().map(PlayerId::to_string).collect(),
            groups: members.groups.groups().map(str::to_string).collect(),
        }
    }
}

impl From<&DefaultDomain> for DomainRecord {
    fn from(domain: &DefaultDomain) -> Self {
        Self::from_members(&domain.snapshot())
    }
}

/// Builds a clean (not dirty) domain. Fails on the first malformed unique ID.
impl TryFrom<DomainRecord> for DefaultDomain {
    type Error = DomainError;

    fn try_from(record: DomainRecord) -> DomainResult<Self> {
        let mut members = Members::default();
        for name in &record.players {
            members.players.add_player(name.as_str());
        }
        for value in &record.unique_ids {
            let id = PlayerId::parse(value).map_err(|source| DomainError::InvalidUuid {
                value: value.clone(),
                source,
            })?;
            members.players.add_player(id);
        }
        for group in &record.groups {
            members.groups.add_group(group);
        }
        members.players.set_dirty(false);
        members.groups.set_dirty(false);
        Ok(Self::from_members(members))
    }
}

impl DefaultDomain {
    /// Loads a domain from a TOML record file. The result is not dirty.
    pub fn load_from(path: impl AsRef<Path>) -> DomainResult<Self> {
        Self::try_from(DomainRecord::load_from(path)?)
    }

    /// Saves the domain to a TOML record file and clears the dirty flag.
    ///
    /// The flag is cleared together with taking the snapshot, so a change made
    /// while the file is written stays dirty. If writing fails the flag is
    /// set again.
    pub fn save_to(&self, path: impl AsRef<Path>) -> DomainResult<()> {
        let record = {
            let mut members = self.write();
            let record = DomainRecord::from_members(&members);
            members.players.set_dirty(false);
            members.groups.set_dirty(false);
            record
        };
        if let Err(e) = record.save_to(path) {
            self.set_dirty(true);
            return Err(e);
        }
        Ok(())
    }
}
