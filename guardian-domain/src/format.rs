//! Plain-text listings of domain members.

use crate::{GroupDomain, PlayerDomain, ProfileCache};
use guardian_types::PlayerId;
use std::cmp::Ordering;

/// Case-insensitive order, ties broken by the exact text.
fn case_insensitive(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Lists players as `name:<name>`, `<resolved>*` or `uuid:<uuid>`, sorted
/// case-insensitively by the rendered text and joined with `", "`.
///
/// Unique IDs render as their cached name followed by `*` when `cache` knows
/// them. The sort runs over the rendered entries, so a resolved `Alice*`
/// sorts among `name:` entries rather than with the `uuid:` ones.
pub fn players_string(players: &PlayerDomain, cache: Option<&dyn ProfileCache>) -> String {
    let mut output: Vec<String> = players.players().map(|name| format!("name:{name}")).collect();

    let ids: Vec<PlayerId> = players.unique_ids().collect();
    let resolved = cache
        .map(|cache| cache.get_all_present(&ids))
        .unwrap_or_default();
    for id in &ids {
        match resolved.get(id) {
            Some(profile) => output.push(format!("{}*", profile.name())),
            None => output.push(format!("uuid:{id}")),
        }
    }

    output.sort_by(|a, b| case_insensitive(a, b));
    output.join(", ")
}

/// Lists groups as `g:<name>` in insertion order, joined with `", "`.
pub fn groups_string(groups: &GroupDomain) -> String {
    groups
        .groups()
        .map(|group| format!("g:{group}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Players, then groups, separated by `"; "`. Empty sections are left out
/// along with their separator.
pub fn user_friendly_string(
    players: &PlayerDomain,
    groups: &GroupDomain,
    cache: Option<&dyn ProfileCache>,
) -> String {
    let mut out = String::new();
    if !players.is_empty() {
        out.push_str(&players_string(players, cache));
    }
    if !groups.is_empty() {
        if !out.is_empty() {
            out.push_str("; ");
        }
        out.push_str(&groups_string(groups));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_insensitive_breaks_ties_deterministically() {
        assert_eq!(case_insensitive("alice*", "Alice*"), Ordering::Greater);
        assert_eq!(case_insensitive("Alice*", "name:bob"), Ordering::Less);
        assert_eq!(case_insensitive("b", "B"), Ordering::Greater);
    }
}
