//! Durable persistence of the local user's display identity.
//!
//! DESIGN
//! ======
//! The identity survives sessions through a minimal key-value interface; the
//! underlying medium (browser localStorage, a JSON file on disk) is an
//! external collaborator supplied by the host. A corrupt record is logged
//! and treated as absent — the caller falls back to the default identity
//! rather than surfacing an error.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use std::collections::BTreeMap;

use messages::Identity;

use crate::consts::{DEFAULT_COLOR, DEFAULT_NAME, PROFILE_KEY};

/// Minimal durable key-value interface the profile store depends on.
///
/// Writes are best-effort: an implementation that cannot persist (quota,
/// read-only medium) logs and drops the write rather than failing the
/// session.
pub trait KvStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory store for tests and hosts without durable storage.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_owned(), value.to_owned());
    }
}

/// Persists and restores the local identity under a fixed key.
pub struct ProfileStore {
    store: Box<dyn KvStore>,
}

impl ProfileStore {
    #[must_use]
    pub fn new(store: Box<dyn KvStore>) -> Self {
        Self { store }
    }

    /// Restore the persisted identity, or `None` when absent or corrupt.
    #[must_use]
    pub fn load(&self) -> Option<Identity> {
        let raw = self.store.get(PROFILE_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(identity) => Some(identity),
            Err(err) => {
                tracing::warn!("discarding corrupt profile record: {err}");
                None
            }
        }
    }

    /// Restore the persisted identity, falling back to the default.
    #[must_use]
    pub fn load_or_default(&self) -> Identity {
        self.load().unwrap_or_else(default_identity)
    }

    /// Persist `identity` under the fixed key.
    pub fn save(&mut self, identity: &Identity) {
        match serde_json::to_string(identity) {
            Ok(json) => self.store.set(PROFILE_KEY, &json),
            Err(err) => tracing::warn!("failed to serialize profile: {err}"),
        }
    }
}

/// The identity used before the user picks one.
#[must_use]
pub fn default_identity() -> Identity {
    Identity::new(DEFAULT_NAME, DEFAULT_COLOR)
}
