//! Roster of peers known to be in the current session.
//!
//! DESIGN
//! ======
//! The roster is authoritative-from-the-network: joins append without any
//! client-side dedup (only the token-gated server guarantees unique names),
//! renames match by value against the announced previous identity, and a
//! snapshot replaces the whole roster. There is no leave notification in the
//! protocol — departure is inferred only when a later snapshot omits a user.

#[cfg(test)]
#[path = "presence_test.rs"]
mod presence_test;

use messages::Identity;

/// Ordered registry of present users.
#[derive(Clone, Debug, Default)]
pub struct PresenceRegistry {
    users: Vec<Identity>,
}

impl PresenceRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a user unconditionally; duplicates are kept.
    pub fn join(&mut self, user: Identity) {
        self.users.push(user);
    }

    /// Update the first entry whose `(name, color)` equals `prev` exactly.
    /// Silently no-ops when nothing matches. Two users sharing an identical
    /// identity cannot be told apart; the wire protocol has no stable id.
    pub fn rename(&mut self, prev: &Identity, next: Identity) {
        if let Some(entry) = self.users.iter_mut().find(|u| *u == prev) {
            *entry = next;
        }
    }

    /// Discard the roster and adopt `snapshot` exactly, in the order given.
    pub fn replace_all(&mut self, snapshot: Vec<Identity>) {
        self.users = snapshot;
    }

    /// Present users in registration order.
    #[must_use]
    pub fn users(&self) -> &[Identity] {
        &self.users
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
