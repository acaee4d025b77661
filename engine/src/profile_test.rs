use super::*;

// =============================================================
// MemoryStore
// =============================================================

#[test]
fn memory_store_round_trips() {
    let mut store = MemoryStore::default();
    store.set("k", "v");
    assert_eq!(store.get("k"), Some("v".to_owned()));
}

#[test]
fn memory_store_missing_key_is_none() {
    let store = MemoryStore::default();
    assert_eq!(store.get("missing"), None);
}

// =============================================================
// ProfileStore
// =============================================================

#[test]
fn save_then_load_round_trips() {
    let mut profile = ProfileStore::new(Box::new(MemoryStore::default()));
    let identity = Identity::new("anna", "#123456");
    profile.save(&identity);
    assert_eq!(profile.load(), Some(identity));
}

#[test]
fn save_writes_the_fixed_key() {
    let mut backing = MemoryStore::default();
    backing.set("unrelated", "x");
    let mut profile = ProfileStore::new(Box::new(backing));
    profile.save(&Identity::new("anna", "#123456"));

    let raw = profile.store.get(PROFILE_KEY).expect("profile record");
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["name"], "anna");
    assert_eq!(value["color"], "#123456");
}

#[test]
fn load_on_empty_store_is_none() {
    let profile = ProfileStore::new(Box::new(MemoryStore::default()));
    assert_eq!(profile.load(), None);
}

#[test]
fn load_on_corrupt_record_is_none() {
    let mut backing = MemoryStore::default();
    backing.set(PROFILE_KEY, "{not json");
    let profile = ProfileStore::new(Box::new(backing));
    assert_eq!(profile.load(), None);
}

#[test]
fn load_or_default_falls_back() {
    let mut backing = MemoryStore::default();
    backing.set(PROFILE_KEY, "[1, 2, 3]");
    let profile = ProfileStore::new(Box::new(backing));
    assert_eq!(profile.load_or_default(), default_identity());
}

#[test]
fn default_identity_matches_consts() {
    let identity = default_identity();
    assert_eq!(identity.name, DEFAULT_NAME);
    assert_eq!(identity.color, DEFAULT_COLOR);
}
