//! Access domains for Guardian.
//!
//! A domain answers "who is allowed". This crate provides:
//!
//! - [`PlayerDomain`] — players stored by name, by unique ID, or both
//! - [`GroupDomain`] — group names in insertion order
//! - [`DefaultDomain`] — the union of both behind one reader-writer lock,
//!   with merge operations and user-facing formatting
//! - [`ProfileCache`] / [`HashMapCache`] — last known names for unique IDs
//! - [`DomainRecord`] — the TOML form used to persist a domain
//!
//! Bare name and ID lookups on a [`DefaultDomain`] only consult players.
//! Lookups with a full [`LocalPlayer`] also match through group membership.

mod default_domain;
mod domain;
mod error;
mod format;
mod group_domain;
mod player_domain;
mod profile_cache;
mod record;
mod rich;

pub use default_domain::DefaultDomain;
pub use domain::{ChangeTracked, Domain};
pub use error::{DomainError, DomainResult};
pub use format::{groups_string, players_string, user_friendly_string};
pub use group_domain::GroupDomain;
pub use player_domain::PlayerDomain;
pub use profile_cache::{HashMapCache, ProfileCache};
pub use record::DomainRecord;
pub use rich::{
    groups_component, list_players, players_component, user_friendly_component, ListedPlayer,
    PlayerListing,
};

pub use guardian_types::{LocalPlayer, PlayerId, PlayerKey, PlayerRef, Profile};
