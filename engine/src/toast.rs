//! FIFO queue of short-lived user-visible notices.
//!
//! DESIGN
//! ======
//! Entries expire in push order after a fixed delay, so the queue is
//! self-limiting without a cap. Expiry is driven by the host's timer calling
//! [`NotificationQueue::expire_at`]; the call is safe at any time, including
//! after the owning session has ended (a no-op on an empty queue).

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use crate::consts::TOAST_DELAY_MS;

/// A transient notice and the time it was queued.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub text: String,
    /// Milliseconds since the Unix epoch at push time.
    pub created_at: i64,
}

/// Ordered queue of live toasts.
#[derive(Clone, Debug)]
pub struct NotificationQueue {
    toasts: Vec<Toast>,
    delay_ms: i64,
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self { toasts: Vec::new(), delay_ms: TOAST_DELAY_MS }
    }
}

impl NotificationQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A queue whose entries live for `delay_ms` instead of the default.
    #[must_use]
    pub fn with_delay(delay_ms: i64) -> Self {
        Self { toasts: Vec::new(), delay_ms }
    }

    /// Queue a notice at `now_ms`.
    pub fn push_at(&mut self, text: impl Into<String>, now_ms: i64) {
        self.toasts.push(Toast { text: text.into(), created_at: now_ms });
    }

    /// Remove every entry whose delay has elapsed by `now_ms`, oldest first.
    /// Returns how many were removed.
    pub fn expire_at(&mut self, now_ms: i64) -> usize {
        let mut removed = 0;
        while self
            .toasts
            .first()
            .is_some_and(|t| now_ms - t.created_at >= self.delay_ms)
        {
            self.toasts.remove(0);
            removed += 1;
        }
        removed
    }

    /// Live toasts in push order, safe to render at any instant.
    #[must_use]
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
