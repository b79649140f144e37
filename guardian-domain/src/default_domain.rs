//! The union of a player domain and a group domain.

use crate::domain::{ChangeTracked, Domain};
use crate::{format, rich, GroupDomain, PlayerDomain, ProfileCache};
use guardian_text::Component;
use guardian_types::{LocalPlayer, PlayerId, PlayerKey};
use std::fmt;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub(crate) struct Members {
    pub(crate) players: PlayerDomain,
    pub(crate) groups: GroupDomain,
}

/// A combination of a [`PlayerDomain`] and a [`GroupDomain`].
///
/// Both collaborators sit behind one reader-writer lock. Every mutation runs
/// under the write lock and every query or listing reads both collaborators
/// under one read lock, so callers never observe a half-applied change.
/// Collaborators handed in through the setters are copied, and the getters
/// return copies; no caller ever aliases the domain's own state.
#[derive(Debug, Default)]
pub struct DefaultDomain {
    members: RwLock<Members>,
}

impl DefaultDomain {
    /// Creates an empty domain.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_members(members: Members) -> Self {
        Self {
            members: RwLock::new(members),
        }
    }

    // The guarded collaborators have no cross-field invariant a panic could
    // leave broken, so a poisoned lock is still usable.
    fn read(&self) -> RwLockReadGuard<'_, Members> {
        self.members.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn write(&self) -> RwLockWriteGuard<'_, Members> {
        self.members.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn snapshot(&self) -> Members {
        self.read().clone()
    }

    // ── Collaborators ────────────────────────────────────────────

    /// Returns a copy of the player domain.
    pub fn player_domain(&self) -> PlayerDomain {
        self.read().players.clone()
    }

    /// Runs `f` against the live player domain under the read lock.
    pub fn with_player_domain<R>(&self, f: impl FnOnce(&PlayerDomain) -> R) -> R {
        f(&self.read().players)
    }

    /// Replaces the player domain with a copy of `players`.
    pub fn set_player_domain(&self, players: &PlayerDomain) {
        let copy = players.clone();
        debug!(size = copy.size(), "Replacing player domain");
        self.write().players = copy;
    }

    /// Returns a copy of the group domain.
    pub fn group_domain(&self) -> GroupDomain {
        self.read().groups.clone()
    }

    /// Runs `f` against the live group domain under the read lock.
    pub fn with_group_domain<R>(&self, f: impl FnOnce(&GroupDomain) -> R) -> R {
        f(&self.read().groups)
    }

    /// Replaces the group domain with a copy of `groups`.
    pub fn set_group_domain(&self, groups: &GroupDomain) {
        let copy = groups.clone();
        debug!(size = copy.size(), "Replacing group domain");
        self.write().groups = copy;
    }

    // ── Players ──────────────────────────────────────────────────

    /// Adds a player by name, by unique ID, or under both.
    pub fn add_player(&self, key: impl Into<PlayerKey>) {
        self.write().players.add_player(key);
    }

    /// Removes a player by name, by unique ID, or under both.
    pub fn remove_player(&self, key: impl Into<PlayerKey>) {
        self.write().players.remove_player(key);
    }

    /// Adds a player under whichever of name and ID it carries.
    pub fn add_local_player(&self, player: &dyn LocalPlayer) {
        self.write().players.add_local_player(player);
    }

    /// Removes a player under whichever of name and ID it carries.
    pub fn remove_local_player(&self, player: &dyn LocalPlayer) {
        self.write().players.remove_local_player(player);
    }

    /// Returns the stored player names.
    pub fn players(&self) -> Vec<String> {
        self.read().players.players().map(str::to_string).collect()
    }

    /// Returns the stored player unique IDs.
    pub fn unique_ids(&self) -> Vec<PlayerId> {
        self.read().players.unique_ids().collect()
    }

    // ── Groups ───────────────────────────────────────────────────

    pub fn add_group(&self, name: &str) {
        self.write().groups.add_group(name);
    }

    pub fn remove_group(&self, name: &str) {
        self.write().groups.remove_group(name);
    }

    /// Returns the group names in insertion order.
    pub fn groups(&self) -> Vec<String> {
        self.read().groups.groups().map(str::to_string).collect()
    }

    // ── Merging ──────────────────────────────────────────────────

    /// Adds every player name, player ID and group of `other`.
    ///
    /// `other` is copied first and the entries are then applied under a single
    /// write lock, so `domain.add_all(&domain)` is safe.
    pub fn add_all(&self, other: &DefaultDomain) {
        let other = other.snapshot();
        let mut members = self.write();
        for name in other.players.players() {
            members.players.add_player(name);
        }
        for id in other.players.unique_ids() {
            members.players.add_player(id);
        }
        for group in other.groups.groups() {
            members.groups.add_group(group);
        }
        debug!(
            added = other.players.size() + other.groups.size(),
            size = members.players.size() + members.groups.size(),
            "Merged domain"
        );
    }

    /// Removes every player name, player ID and group of `other`.
    pub fn remove_all(&self, other: &DefaultDomain) {
        let other = other.snapshot();
        let mut members = self.write();
        for name in other.players.players() {
            members.players.remove_player(name);
        }
        for id in other.players.unique_ids() {
            members.players.remove_player(id);
        }
        for group in other.groups.groups() {
            members.groups.remove_group(group);
        }
        debug!(
            removed = other.players.size() + other.groups.size(),
            size = members.players.size() + members.groups.size(),
            "Subtracted domain"
        );
    }

    // ── Queries ──────────────────────────────────────────────────

    /// Returns true if the player is stored by name or ID, or belongs to one
    /// of the stored groups.
    pub fn contains(&self, player: &dyn LocalPlayer) -> bool {
        let members = self.read();
        members.players.contains(player) || members.groups.contains(player)
    }

    /// Returns true if the unique ID is stored. Groups are not consulted.
    pub fn contains_id(&self, id: PlayerId) -> bool {
        self.read().players.contains_id(id)
    }

    /// Returns true if the player name is stored. Groups are not consulted.
    pub fn contains_name(&self, name: &str) -> bool {
        self.read().players.contains_name(name)
    }

    /// Returns the number of player names, player IDs and groups.
    pub fn size(&self) -> usize {
        let members = self.read();
        members.players.size() + members.groups.size()
    }

    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Empties both collaborators.
    pub fn clear(&self) {
        let mut members = self.write();
        members.players.clear();
        members.groups.clear();
    }

    /// Returns true if either collaborator has unsaved changes.
    pub fn is_dirty(&self) -> bool {
        let members = self.read();
        members.players.is_dirty() || members.groups.is_dirty()
    }

    /// Sets the dirty flag on both collaborators.
    pub fn set_dirty(&self, dirty: bool) {
        let mut members = self.write();
        members.players.set_dirty(dirty);
        members.groups.set_dirty(dirty);
    }

    // ── Listings ─────────────────────────────────────────────────

    /// See [`players_string`](crate::players_string).
    pub fn to_players_string(&self, cache: Option<&dyn ProfileCache>) -> String {
        format::players_string(&self.read().players, cache)
    }

    /// See [`groups_string`](crate::groups_string).
    pub fn to_groups_string(&self) -> String {
        format::groups_string(&self.read().groups)
    }

    /// See [`user_friendly_string`](crate::user_friendly_string).
    pub fn to_user_friendly_string(&self, cache: Option<&dyn ProfileCache>) -> String {
        let members = self.read();
        format::user_friendly_string(&members.players, &members.groups, cache)
    }

    /// See [`user_friendly_component`](crate::user_friendly_component).
    pub fn to_user_friendly_component(&self, cache: Option<&dyn ProfileCache>) -> Component {
        let members = self.read();
        rich::user_friendly_component(&members.players, &members.groups, cache)
    }
}

/// Copies both collaborators.
impl Clone for DefaultDomain {
    fn clone(&self) -> Self {
        Self::from_members(self.snapshot())
    }
}

impl Domain for DefaultDomain {
    fn contains(&self, player: &dyn LocalPlayer) -> bool {
        DefaultDomain::contains(self, player)
    }

    fn contains_id(&self, id: PlayerId) -> bool {
        DefaultDomain::contains_id(self, id)
    }

    fn contains_name(&self, name: &str) -> bool {
        DefaultDomain::contains_name(self, name)
    }

    fn size(&self) -> usize {
        DefaultDomain::size(self)
    }

    fn clear(&mut self) {
        DefaultDomain::clear(self);
    }
}

impl ChangeTracked for DefaultDomain {
    fn is_dirty(&self) -> bool {
        DefaultDomain::is_dirty(self)
    }

    fn set_dirty(&mut self, dirty: bool) {
        DefaultDomain::set_dirty(self, dirty);
    }
}

impl fmt::Display for DefaultDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let members = self.read();
        write!(f, "{{players={}, groups={}}}", members.players, members.groups)
    }
}
