//! Bounded, ordered chat transcript.
//!
//! DESIGN
//! ======
//! Lines are buffered here so the render layer can paint the transcript
//! without re-querying the server. The buffer is bounded to prevent
//! unbounded memory growth in long-lived sessions.

#[cfg(test)]
#[path = "transcript_test.rs"]
mod transcript_test;

use crate::consts::TRANSCRIPT_CAP;

/// One attributed transcript line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatLine {
    /// Display name of the sender.
    pub from: String,
    pub text: String,
}

/// Ordered transcript, bounded by [`TRANSCRIPT_CAP`].
#[derive(Clone, Debug)]
pub struct Transcript {
    lines: Vec<ChatLine>,
    cap: usize,
}

impl Default for Transcript {
    fn default() -> Self {
        Self { lines: Vec::new(), cap: TRANSCRIPT_CAP }
    }
}

impl Transcript {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A transcript bounded by `cap` instead of the default.
    #[must_use]
    pub fn with_cap(cap: usize) -> Self {
        Self { lines: Vec::new(), cap }
    }

    /// Append a line, evicting the oldest when the cap is reached.
    pub fn push(&mut self, from: impl Into<String>, text: impl Into<String>) {
        if self.lines.len() >= self.cap {
            self.lines.remove(0);
        }
        self.lines.push(ChatLine { from: from.into(), text: text.into() });
    }

    /// Lines in arrival order.
    #[must_use]
    pub fn lines(&self) -> &[ChatLine] {
        &self.lines
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Deterministic display color for a sender name.
///
/// Hashes the name's UTF-16 code units into an HSL hue so every client
/// colors a given sender identically without coordination.
#[must_use]
pub fn colorize(name: &str) -> String {
    let mut hash: i32 = 0;
    for unit in name.encode_utf16() {
        hash = hash.wrapping_shl(5).wrapping_sub(hash).wrapping_add(i32::from(unit));
    }
    format!("hsl({}, 90%, 36%)", (hash % 360).abs())
}
