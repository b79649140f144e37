//! Last known names for player unique IDs.

use guardian_types::{PlayerId, Profile};
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

/// Resolves unique IDs to the player's last known name.
///
/// Lookups never block on remote services: a miss simply means the name is
/// not known yet.
pub trait ProfileCache: Send + Sync {
    /// Records a profile, replacing any previous name for its ID.
    fn put(&self, profile: Profile);

    /// Returns the cached profile for an ID.
    fn get_if_present(&self, id: PlayerId) -> Option<Profile>;

    /// Records every profile.
    fn put_all(&self, profiles: &[Profile]) {
        for profile in profiles {
            self.put(profile.clone());
        }
    }

    /// Returns the cached profiles for the given IDs. Misses are omitted.
    fn get_all_present(&self, ids: &[PlayerId]) -> HashMap<PlayerId, Profile> {
        ids.iter()
            .filter_map(|id| self.get_if_present(*id).map(|profile| (*id, profile)))
            .collect()
    }
}

/// In-memory profile cache.
#[derive(Debug, Default)]
pub struct HashMapCache {
    names: RwLock<HashMap<PlayerId, String>>,
}

impl HashMapCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.names.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ProfileCache for HashMapCache {
    fn put(&self, profile: Profile) {
        self.names
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(profile.unique_id(), profile.name().to_string());
    }

    fn get_if_present(&self, id: PlayerId) -> Option<Profile> {
        self.names
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&id)
            .map(|name| Profile::new(id, name.clone()))
    }

    fn put_all(&self, profiles: &[Profile]) {
        let mut names = self.names.write().unwrap_or_else(PoisonError::into_inner);
        for profile in profiles {
            names.insert(profile.unique_id(), profile.name().to_string());
        }
    }

    fn get_all_present(&self, ids: &[PlayerId]) -> HashMap<PlayerId, Profile> {
        let names = self.names.read().unwrap_or_else(PoisonError::into_inner);
        ids.iter()
            .filter_map(|id| names.get(id).map(|name| (*id, Profile::new(*id, name.clone()))))
            .collect()
    }
}
