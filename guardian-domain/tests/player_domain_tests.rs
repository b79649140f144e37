use guardian_domain::{ChangeTracked, Domain, PlayerDomain, PlayerId, PlayerKey, PlayerRef};

// ── Adding ────────────────────────────────────────────────────────

#[test]
fn new_domain_is_empty_and_dirty() {
    let domain = PlayerDomain::new();
    assert!(domain.is_empty());
    assert_eq!(domain.size(), 0);
    assert!(domain.is_dirty());
}

#[test]
fn add_by_name_and_id_are_independent() {
    let id = PlayerId::new();
    let mut domain = PlayerDomain::new();
    domain.add_player("Steve");
    domain.add_player(id);

    assert!(domain.contains_name("Steve"));
    assert!(domain.contains_id(id));
    assert_eq!(domain.name_count(), 1);
    assert_eq!(domain.unique_id_count(), 1);
    assert_eq!(domain.size(), 2);
}

#[test]
fn names_are_case_insensitive_and_trimmed() {
    let mut domain = PlayerDomain::new();
    domain.add_player("  Steve ");
    assert!(domain.contains_name("steve"));
    assert!(domain.contains_name("STEVE"));
    assert_eq!(domain.players().collect::<Vec<_>>(), vec!["Steve"]);
}

#[test]
fn blank_names_are_ignored() {
    let mut domain = PlayerDomain::new();
    domain.set_dirty(false);
    domain.add_player("   ");
    domain.add_player("");
    assert!(domain.is_empty());
    assert!(!domain.is_dirty());
}

#[test]
fn add_both_key_stores_under_both() {
    let id = PlayerId::new();
    let mut domain = PlayerDomain::new();
    domain.add_player(PlayerKey::Both {
        name: "Alex".into(),
        id,
    });
    assert!(domain.contains_name("Alex"));
    assert!(domain.contains_id(id));
    assert_eq!(domain.size(), 2);
}

#[test]
fn add_local_player_uses_every_identifier() {
    let id = PlayerId::new();
    let mut domain = PlayerDomain::new();
    domain.add_local_player(&PlayerRef::new("Alex", id));
    assert!(domain.contains_name("Alex"));
    assert!(domain.contains_id(id));
}

#[test]
fn add_local_player_without_identifiers_is_noop() {
    let mut domain = PlayerDomain::new();
    domain.set_dirty(false);
    domain.add_local_player(&PlayerRef::default());
    assert!(domain.is_empty());
    assert!(!domain.is_dirty());
}

// ── Removing ──────────────────────────────────────────────────────

#[test]
fn remove_local_player_removes_by_name_and_id() {
    let id = PlayerId::new();
    let mut domain = PlayerDomain::new();
    domain.add_player("Alex");
    domain.add_player(id);
    domain.add_player("Steve");

    domain.remove_local_player(&PlayerRef::new("alex", id));
    assert!(!domain.contains_name("Alex"));
    assert!(!domain.contains_id(id));
    assert!(domain.contains_name("Steve"));
    assert_eq!(domain.size(), 1);
}

#[test]
fn remove_missing_player_keeps_domain_clean() {
    let mut domain = PlayerDomain::new();
    domain.add_player("Steve");
    domain.set_dirty(false);
    domain.remove_player("Alex");
    domain.remove_player(PlayerId::new());
    assert!(!domain.is_dirty());
    assert_eq!(domain.size(), 1);
}

// ── Membership ────────────────────────────────────────────────────

#[test]
fn contains_player_matches_either_identifier() {
    let id = PlayerId::new();
    let mut domain = PlayerDomain::new();
    domain.add_player("Steve");
    domain.add_player(id);

    assert!(domain.contains(&PlayerRef::named("steve")));
    assert!(domain.contains(&PlayerRef::with_id(id)));
    assert!(domain.contains(&PlayerRef::new("Someone", id)));
    assert!(!domain.contains(&PlayerRef::new("Someone", PlayerId::new())));
    assert!(!domain.contains(&PlayerRef::default()));
}

// ── Clearing and copying ──────────────────────────────────────────

#[test]
fn clear_empties_and_marks_dirty() {
    let mut domain = PlayerDomain::new();
    domain.add_player("Steve");
    domain.add_player(PlayerId::new());
    domain.set_dirty(false);

    domain.clear();
    assert!(domain.is_empty());
    assert!(domain.is_dirty());
}

#[test]
fn clone_is_independent() {
    let mut original = PlayerDomain::new();
    original.add_player("Steve");
    let mut copy = original.clone();
    copy.add_player("Alex");
    original.remove_player("Steve");

    assert!(copy.contains_name("Steve"));
    assert!(!original.contains_name("Alex"));
}

#[test]
fn display_lists_sorted_entries() {
    let mut domain = PlayerDomain::new();
    domain.add_player("b");
    domain.add_player("a");
    assert_eq!(domain.to_string(), "{names=[a, b], unique_ids=[]}");
}
