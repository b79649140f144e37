//! Interactive chat listings of domain members.
//!
//! Rendering happens in two steps. [`list_players`] decides what is shown
//! (sorted names, which of them stand for a unique ID, which IDs could not
//! be resolved) without touching any text types. [`PlayerListing::to_component`]
//! then turns that decision into styled, clickable segments.

use crate::{GroupDomain, PlayerDomain, ProfileCache};
use guardian_text::{Component, TextColor};
use guardian_types::{PlayerId, Profile};
use std::collections::{BTreeMap, HashMap};

const CLICK_TO_COPY: &str = "Click to copy";

/// One named entry in a player listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListedPlayer {
    /// A player stored by name only.
    NameOnly(String),
    /// A unique ID shown under its last known name.
    Resolved { name: String, id: PlayerId },
}

impl ListedPlayer {
    /// Returns the name shown for this entry.
    pub fn label(&self) -> &str {
        match self {
            Self::NameOnly(name) | Self::Resolved { name, .. } => name,
        }
    }
}

/// What a player listing shows: named entries plus the IDs no name is known
/// for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerListing {
    /// Named entries, sorted by name (case-sensitive).
    pub entries: Vec<ListedPlayer>,
    /// Unique IDs without a cached name, in ascending order.
    pub unresolved: Vec<PlayerId>,
}

/// Builds a listing from stored names, stored IDs and the profiles a cache
/// resolved for those IDs.
///
/// A resolved name equal to a stored name replaces the name-only entry.
pub fn list_players<'a>(
    names: impl IntoIterator<Item = &'a str>,
    ids: &[PlayerId],
    resolved: &HashMap<PlayerId, Profile>,
) -> PlayerListing {
    let mut by_name: BTreeMap<String, Option<PlayerId>> = names
        .into_iter()
        .map(|name| (name.to_string(), None))
        .collect();

    let mut unresolved = Vec::new();
    for id in ids {
        match resolved.get(id) {
            Some(profile) => {
                by_name.insert(profile.name().to_string(), Some(*id));
            }
            None => unresolved.push(*id),
        }
    }
    unresolved.sort_unstable();

    let entries = by_name
        .into_iter()
        .map(|(name, id)| match id {
            Some(id) => ListedPlayer::Resolved { name, id },
            None => ListedPlayer::NameOnly(name),
        })
        .collect();

    PlayerListing {
        entries,
        unresolved,
    }
}

impl PlayerListing {
    /// Renders the listing: yellow names that copy their name or ID when
    /// clicked, followed by one gray summary for all unresolved IDs.
    pub fn to_component(&self) -> Component {
        let mut out = Component::empty();
        let mut entries = self.entries.iter().peekable();
        while let Some(entry) = entries.next() {
            out = out.append(entry_segment(entry));
            if entries.peek().is_some() || !self.unresolved.is_empty() {
                out = out.append(Component::text(", "));
            }
        }
        if !self.unresolved.is_empty() {
            out = out.append(unresolved_segment(&self.unresolved));
        }
        out
    }
}

fn entry_segment(entry: &ListedPlayer) -> Component {
    match entry {
        ListedPlayer::NameOnly(name) => Component::colored(name.as_str(), TextColor::Yellow)
            .with_hover_text(
                Component::colored("Name only", TextColor::Gray)
                    .append(Component::newline())
                    .append(Component::text(CLICK_TO_COPY)),
            )
            .copy_on_click(name.as_str()),
        ListedPlayer::Resolved { name, id } => Component::colored(name.as_str(), TextColor::Yellow)
            .with_hover_text(
                Component::colored("Last known name of uuid: ", TextColor::Gray)
                    .append(Component::colored(id.to_string(), TextColor::White))
                    .append(Component::newline())
                    .append(Component::text(CLICK_TO_COPY)),
            )
            .copy_on_click(id.to_string()),
    }
}

fn unresolved_label(count: usize) -> String {
    if count == 1 {
        "1 unknown uuid".to_string()
    } else {
        format!("{count} unknown uuids")
    }
}

fn unresolved_segment(ids: &[PlayerId]) -> Component {
    let ids: Vec<String> = ids.iter().map(PlayerId::to_string).collect();
    Component::colored(unresolved_label(ids.len()), TextColor::Gray)
        .with_hover_text(
            Component::colored("Unable to resolve the name for:", TextColor::Gray)
                .append(Component::newline())
                .append(Component::colored(ids.join("\n"), TextColor::White))
                .append(Component::newline())
                .append(Component::text(CLICK_TO_COPY)),
        )
        .copy_on_click(ids.join(","))
}

/// Renders the players of a domain, resolving IDs through `cache`.
pub fn players_component(players: &PlayerDomain, cache: Option<&dyn ProfileCache>) -> Component {
    let mut ids: Vec<PlayerId> = players.unique_ids().collect();
    ids.sort_unstable();
    let resolved = cache
        .map(|cache| cache.get_all_present(&ids))
        .unwrap_or_default();
    list_players(players.players(), &ids, &resolved).to_component()
}

/// Renders groups as gray `g:` and gold names in insertion order, with a
/// "Groups" hover over the whole section.
pub fn groups_component(groups: &GroupDomain) -> Component {
    let mut out = Component::empty();
    let mut names = groups.groups().peekable();
    while let Some(name) = names.next() {
        out = out
            .append(Component::colored("g:", TextColor::Gray))
            .append(Component::colored(name, TextColor::Gold));
        if names.peek().is_some() {
            out = out.append(Component::text(", "));
        }
    }
    out.with_hover_text(Component::text("Groups"))
}

/// Players, then groups, separated by `"; "` when both are present.
pub fn user_friendly_component(
    players: &PlayerDomain,
    groups: &GroupDomain,
    cache: Option<&dyn ProfileCache>,
) -> Component {
    let mut out = Component::empty();
    if !players.is_empty() {
        out = out.append(players_component(players, cache));
    }
    if !groups.is_empty() {
        if !players.is_empty() {
            out = out.append(Component::text("; "));
        }
        out = out.append(groups_component(groups));
    }
    out
}
