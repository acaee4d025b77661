use super::*;

fn id(name: &str, color: &str) -> Identity {
    Identity::new(name, color)
}

// =============================================================
// join
// =============================================================

#[test]
fn join_appends_in_order() {
    let mut registry = PresenceRegistry::new();
    registry.join(id("a", "#111"));
    registry.join(id("b", "#222"));
    assert_eq!(registry.users(), &[id("a", "#111"), id("b", "#222")]);
}

#[test]
fn join_keeps_duplicates() {
    let mut registry = PresenceRegistry::new();
    registry.join(id("a", "#111"));
    registry.join(id("a", "#111"));
    assert_eq!(registry.len(), 2);
}

// =============================================================
// rename
// =============================================================

#[test]
fn rename_updates_first_match_only() {
    let mut registry = PresenceRegistry::new();
    registry.join(id("a", "#111"));
    registry.join(id("a", "#111"));

    registry.rename(&id("a", "#111"), id("b", "#222"));
    assert_eq!(registry.users(), &[id("b", "#222"), id("a", "#111")]);
}

#[test]
fn rename_requires_exact_pair_match() {
    let mut registry = PresenceRegistry::new();
    registry.join(id("a", "#111"));

    // Same name, different color: no match.
    registry.rename(&id("a", "#999"), id("b", "#222"));
    assert_eq!(registry.users(), &[id("a", "#111")]);
}

#[test]
fn rename_without_match_is_noop() {
    let mut registry = PresenceRegistry::new();
    registry.join(id("a", "#111"));

    registry.rename(&id("ghost", "#000"), id("b", "#222"));
    assert_eq!(registry.users(), &[id("a", "#111")]);
}

// =============================================================
// replace_all
// =============================================================

#[test]
fn replace_all_adopts_snapshot_in_order() {
    let mut registry = PresenceRegistry::new();
    registry.join(id("old", "#000"));

    registry.replace_all(vec![id("a", "#111"), id("b", "#222")]);
    assert_eq!(registry.users(), &[id("a", "#111"), id("b", "#222")]);
}

#[test]
fn replace_all_with_empty_snapshot_clears() {
    let mut registry = PresenceRegistry::new();
    registry.join(id("a", "#111"));

    registry.replace_all(Vec::new());
    assert!(registry.is_empty());
}

#[test]
fn rename_after_replace_mutates_exactly_one() {
    let mut registry = PresenceRegistry::new();
    registry.replace_all(vec![id("a", "#111"), id("b", "#222")]);

    registry.rename(&id("a", "#111"), id("c", "#333"));
    assert_eq!(registry.users(), &[id("c", "#333"), id("b", "#222")]);
}

#[test]
fn rename_after_replace_with_absent_identity_mutates_none() {
    let mut registry = PresenceRegistry::new();
    registry.replace_all(vec![id("a", "#111"), id("b", "#222")]);

    registry.rename(&id("z", "#999"), id("c", "#333"));
    assert_eq!(registry.users(), &[id("a", "#111"), id("b", "#222")]);
}
