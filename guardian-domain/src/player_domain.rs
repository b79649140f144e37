//! Players identified by name, unique ID, or both.

use crate::domain::{ChangeTracked, Domain};
use guardian_types::{fold_name, LocalPlayer, PlayerId, PlayerKey};
use std::collections::{HashMap, HashSet};
use std::fmt;

/// A set of players.
///
/// Names and unique IDs are kept as two independent indices: a player added
/// by name is not found by ID and vice versa. Name lookups are
/// case-insensitive, and the spelling first added is kept for display.
/// Blank names are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerDomain {
    /// Folded name to display spelling.
    names: HashMap<String, String>,
    unique_ids: HashSet<PlayerId>,
    dirty: bool,
}

impl Default for PlayerDomain {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerDomain {
    /// Creates an empty domain. New domains start dirty since they have
    /// never been saved.
    #[must_use]
    pub fn new() -> Self {
        Self {
            names: HashMap::new(),
            unique_ids: HashSet::new(),
            dirty: true,
        }
    }

    /// Adds a player under every part of the key.
    pub fn add_player(&mut self, key: impl Into<PlayerKey>) {
        let key = key.into();
        if let Some(name) = key.name() {
            self.add_name(name);
        }
        if let Some(id) = key.id() {
            if self.unique_ids.insert(id) {
                self.dirty = true;
            }
        }
    }

    /// Removes a player under every part of the key.
    pub fn remove_player(&mut self, key: impl Into<PlayerKey>) {
        let key = key.into();
        if let Some(name) = key.name() {
            if self.names.remove(&fold_name(name)).is_some() {
                self.dirty = true;
            }
        }
        if let Some(id) = key.id() {
            if self.unique_ids.remove(&id) {
                self.dirty = true;
            }
        }
    }

    /// Adds a player under whichever of name and ID it carries.
    pub fn add_local_player(&mut self, player: &dyn LocalPlayer) {
        if let Some(key) = player.key() {
            self.add_player(key);
        }
    }

    /// Removes a player under whichever of name and ID it carries.
    pub fn remove_local_player(&mut self, player: &dyn LocalPlayer) {
        if let Some(key) = player.key() {
            self.remove_player(key);
        }
    }

    fn add_name(&mut self, name: &str) {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return;
        }
        let folded = fold_name(trimmed);
        if !self.names.contains_key(&folded) {
            self.names.insert(folded, trimmed.to_string());
            self.dirty = true;
        }
    }

    /// Returns the stored player names, in no particular order.
    pub fn players(&self) -> impl Iterator<Item = &str> {
        self.names.values().map(String::as_str)
    }

    /// Returns the stored unique IDs, in no particular order.
    pub fn unique_ids(&self) -> impl Iterator<Item = PlayerId> {
        self.unique_ids.iter().copied()
    }

    pub fn name_count(&self) -> usize {
        self.names.len()
    }

    pub fn unique_id_count(&self) -> usize {
        self.unique_ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty() && self.unique_ids.is_empty()
    }
}

impl Domain for PlayerDomain {
    fn contains(&self, player: &dyn LocalPlayer) -> bool {
        player.unique_id().is_some_and(|id| self.contains_id(id))
            || player.name().is_some_and(|name| self.contains_name(name))
    }

    fn contains_id(&self, id: PlayerId) -> bool {
        self.unique_ids.contains(&id)
    }

    fn contains_name(&self, name: &str) -> bool {
        self.names.contains_key(&fold_name(name))
    }

    fn size(&self) -> usize {
        self.names.len() + self.unique_ids.len()
    }

    fn clear(&mut self) {
        if !self.is_empty() {
            self.names.clear();
            self.unique_ids.clear();
            self.dirty = true;
        }
    }
}

impl ChangeTracked for PlayerDomain {
    fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn set_dirty(&mut self, dirty: bool) {
        self.dirty = dirty;
    }
}

impl fmt::Display for PlayerDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.players().collect();
        names.sort_unstable();
        let mut ids: Vec<PlayerId> = self.unique_ids().collect();
        ids.sort_unstable();
        let ids: Vec<String> = ids.iter().map(PlayerId::to_string).collect();
        write!(
            f,
            "{{names=[{}], unique_ids=[{}]}}",
            names.join(", "),
            ids.join(", ")
        )
    }
}
