//! Core type definitions for Guardian access domains.
//!
//! This crate defines the identity types shared by the domain and text
//! crates:
//! - Player identifiers (`PlayerId`, a stable UUID)
//! - Rich player identities (`LocalPlayer`, `PlayerRef`)
//! - Add/remove request keys (`PlayerKey`)
//! - Resolved profiles returned by name caches (`Profile`)

mod ids;
mod player;
mod profile;

pub use ids::PlayerId;
pub use player::{fold_name, LocalPlayer, PlayerKey, PlayerRef};
pub use profile::Profile;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid UUID: {0}")]
    InvalidUuid(#[from] uuid::Error),

    #[error("invalid player name: {0:?}")]
    InvalidName(String),
}
