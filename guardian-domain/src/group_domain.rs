//! Named groups of players.

use crate::domain::{ChangeTracked, Domain};
use guardian_types::{fold_name, LocalPlayer, PlayerId};
use std::fmt;

/// An insertion-ordered set of group names.
///
/// The domain stores names only. Whether a player belongs to a group is
/// answered by the player itself, see [`LocalPlayer::has_group`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupDomain {
    groups: Vec<String>,
    dirty: bool,
}

impl Default for GroupDomain {
    fn default() -> Self {
        Self::new()
    }
}

impl GroupDomain {
    /// Creates an empty domain, initially dirty.
    #[must_use]
    pub fn new() -> Self {
        Self {
            groups: Vec::new(),
            dirty: true,
        }
    }

    /// Adds a group. Blank and already present names are ignored.
    pub fn add_group(&mut self, name: &str) {
        let trimmed = name.trim();
        if trimmed.is_empty() || self.contains_group(trimmed) {
            return;
        }
        self.groups.push(trimmed.to_string());
        self.dirty = true;
    }

    pub fn remove_group(&mut self, name: &str) {
        let folded = fold_name(name);
        let before = self.groups.len();
        self.groups.retain(|g| fold_name(g) != folded);
        if self.groups.len() != before {
            self.dirty = true;
        }
    }

    /// Returns true if the group name is stored (case-insensitive).
    #[must_use]
    pub fn contains_group(&self, name: &str) -> bool {
        let folded = fold_name(name);
        self.groups.iter().any(|g| fold_name(g) == folded)
    }

    /// Returns the group names in insertion order.
    pub fn groups(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl Domain for GroupDomain {
    fn contains(&self, player: &dyn LocalPlayer) -> bool {
        self.groups.iter().any(|g| player.has_group(g))
    }

    fn contains_id(&self, _id: PlayerId) -> bool {
        false
    }

    fn contains_name(&self, _name: &str) -> bool {
        false
    }

    fn size(&self) -> usize {
        self.groups.len()
    }

    fn clear(&mut self) {
        if !self.groups.is_empty() {
            self.groups.clear();
            self.dirty = true;
        }
    }
}

impl ChangeTracked for GroupDomain {
    fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn set_dirty(&mut self, dirty: bool) {
        self.dirty = dirty;
    }
}

impl fmt::Display for GroupDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{groups=[{}]}}", self.groups.join(", "))
    }
}
