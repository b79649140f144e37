use crate::PlayerId;
use serde::{Deserialize, Serialize};

/// A player's last known name, as resolved by a name cache.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Profile {
    unique_id: PlayerId,
    name: String,
}

impl Profile {
    #[must_use]
    pub fn new(unique_id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            unique_id,
            name: name.into(),
        }
    }

    #[must_use]
    pub fn unique_id(&self) -> PlayerId {
        self.unique_id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}
