use guardian_domain::{
    ChangeTracked, DefaultDomain, Domain, GroupDomain, PlayerDomain, PlayerId, PlayerKey,
    PlayerRef,
};

fn sample() -> (DefaultDomain, PlayerId) {
    let id = PlayerId::new();
    let domain = DefaultDomain::new();
    domain.add_player("Steve");
    domain.add_player(id);
    domain.add_group("mods");
    (domain, id)
}

fn sorted<T: Ord>(mut items: Vec<T>) -> Vec<T> {
    items.sort();
    items
}

// ── Size and clearing ─────────────────────────────────────────────

#[test]
fn size_is_sum_of_collaborators() {
    let (domain, _) = sample();
    assert_eq!(
        domain.size(),
        domain.player_domain().size() + domain.group_domain().size()
    );
    assert_eq!(domain.size(), 3);
}

#[test]
fn clear_removes_everything() {
    let (domain, id) = sample();
    domain.clear();
    assert_eq!(domain.size(), 0);
    assert!(domain.is_empty());
    assert!(!domain.contains_name("Steve"));
    assert!(!domain.contains_id(id));
    assert!(!domain.contains(&PlayerRef::named("x").in_group("mods")));
}

// ── Players and groups ────────────────────────────────────────────

#[test]
fn add_and_remove_player_by_each_key() {
    let id = PlayerId::new();
    let domain = DefaultDomain::new();
    domain.add_player(PlayerKey::Both {
        name: "Alex".into(),
        id,
    });
    assert!(domain.contains_name("Alex"));
    assert!(domain.contains_id(id));

    domain.remove_player(id);
    assert!(domain.contains_name("Alex"));
    assert!(!domain.contains_id(id));

    domain.remove_player("alex");
    assert!(domain.is_empty());
}

#[test]
fn local_player_add_and_remove() {
    let id = PlayerId::new();
    let player = PlayerRef::new("Alex", id);
    let domain = DefaultDomain::new();
    domain.add_local_player(&player);
    assert_eq!(domain.players(), vec!["Alex".to_string()]);
    assert_eq!(domain.unique_ids(), vec![id]);

    domain.remove_local_player(&player);
    assert!(domain.is_empty());
}

#[test]
fn groups_are_listed_in_insertion_order() {
    let domain = DefaultDomain::new();
    domain.add_group("mods");
    domain.add_group("admins");
    assert_eq!(domain.groups(), vec!["mods".to_string(), "admins".to_string()]);
    domain.remove_group("mods");
    assert_eq!(domain.groups(), vec!["admins".to_string()]);
}

// ── Membership asymmetry ──────────────────────────────────────────

#[test]
fn rich_identity_matches_through_groups() {
    let (domain, _) = sample();
    let member = PlayerRef::new("Nobody", PlayerId::new()).in_group("mods");
    assert!(domain.contains(&member));
}

#[test]
fn bare_lookups_ignore_groups() {
    let (domain, _) = sample();
    assert!(!domain.contains_name("mods"));
    assert!(!domain.contains_id(PlayerId::new()));
}

#[test]
fn rich_identity_matches_by_name_or_id() {
    let (domain, id) = sample();
    assert!(domain.contains(&PlayerRef::named("STEVE")));
    assert!(domain.contains(&PlayerRef::with_id(id)));
    assert!(!domain.contains(&PlayerRef::named("Alex")));
}

// ── Copies ────────────────────────────────────────────────────────

#[test]
fn clone_is_deep() {
    let (original, id) = sample();
    let copy = original.clone();

    original.add_player("Alex");
    copy.remove_player(id);
    copy.add_group("admins");

    assert!(!copy.contains_name("Alex"));
    assert!(original.contains_id(id));
    assert_eq!(original.groups(), vec!["mods".to_string()]);
}

#[test]
fn setters_install_copies() {
    let domain = DefaultDomain::new();
    let mut players = PlayerDomain::new();
    players.add_player("Steve");
    let mut groups = GroupDomain::new();
    groups.add_group("mods");

    domain.set_player_domain(&players);
    domain.set_group_domain(&groups);
    players.add_player("Alex");
    groups.add_group("admins");

    assert_eq!(domain.size(), 2);
    assert!(!domain.contains_name("Alex"));
}

#[test]
fn getters_return_copies() {
    let (domain, _) = sample();
    let mut players = domain.player_domain();
    players.clear();
    let mut groups = domain.group_domain();
    groups.clear();
    assert_eq!(domain.size(), 3);
}

#[test]
fn with_accessors_read_live_state() {
    let (domain, _) = sample();
    assert_eq!(domain.with_player_domain(|p| p.name_count()), 1);
    assert_eq!(domain.with_group_domain(|g| g.size()), 1);
}

// ── Merging ───────────────────────────────────────────────────────

#[test]
fn add_all_then_remove_all_restores() {
    let (target, _) = sample();
    let before_players = sorted(target.players());
    let before_ids = sorted(target.unique_ids());
    let before_groups = target.groups();

    let other = DefaultDomain::new();
    other.add_player("Alex");
    other.add_player(PlayerId::new());
    other.add_group("admins");

    target.add_all(&other);
    assert_eq!(target.size(), 6);
    target.remove_all(&other);

    assert_eq!(sorted(target.players()), before_players);
    assert_eq!(sorted(target.unique_ids()), before_ids);
    assert_eq!(target.groups(), before_groups);
}

#[test]
fn add_all_with_itself_is_idempotent() {
    let (domain, _) = sample();
    domain.add_all(&domain);
    assert_eq!(domain.size(), 3);
}

#[test]
fn remove_all_with_itself_empties() {
    let (domain, _) = sample();
    domain.remove_all(&domain);
    assert!(domain.is_empty());
}

// ── Dirty tracking ────────────────────────────────────────────────

#[test]
fn dirty_is_or_of_collaborators() {
    let domain = DefaultDomain::new();
    assert!(domain.is_dirty());

    domain.set_dirty(false);
    assert!(!domain.is_dirty());
    assert!(!domain.player_domain().is_dirty());
    assert!(!domain.group_domain().is_dirty());

    domain.add_group("mods");
    assert!(domain.is_dirty());
    assert!(!domain.player_domain().is_dirty());
}

#[test]
fn trait_impls_delegate() {
    let (mut domain, id) = sample();
    assert!(Domain::contains_id(&domain, id));
    assert_eq!(Domain::size(&domain), 3);
    ChangeTracked::set_dirty(&mut domain, false);
    assert!(!ChangeTracked::is_dirty(&domain));
    Domain::clear(&mut domain);
    assert!(domain.is_empty());
}

#[test]
fn display_shows_both_collaborators() {
    let domain = DefaultDomain::new();
    domain.add_player("Steve");
    domain.add_group("mods");
    assert_eq!(
        domain.to_string(),
        "{players={names=[Steve], unique_ids=[]}, groups={groups=[mods]}}"
    );
}
