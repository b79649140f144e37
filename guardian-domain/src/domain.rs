use guardian_types::{LocalPlayer, PlayerId};

/// A set-like collection of "who".
pub trait Domain {
    /// Returns true if the player is a member, by any means the domain
    /// supports.
    fn contains(&self, player: &dyn LocalPlayer) -> bool;

    /// Returns true if the unique ID is stored directly.
    fn contains_id(&self, id: PlayerId) -> bool;

    /// Returns true if the player name is stored directly.
    fn contains_name(&self, name: &str) -> bool;

    /// Returns the number of stored entries.
    fn size(&self) -> usize;

    /// Removes every entry.
    fn clear(&mut self);
}

/// Tracks unsaved changes for the persistence layer.
pub trait ChangeTracked {
    fn is_dirty(&self) -> bool;

    fn set_dirty(&mut self, dirty: bool);
}
