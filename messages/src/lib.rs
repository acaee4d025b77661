//! Shared wire model and JSON codec for the realtime session transport.
//!
//! This crate owns the wire representation used by both deployment profiles
//! (drawing and token-gated chat). One frame on the wire is a single JSON
//! envelope `{"type": <int>, "text": <string>, "user"?: {...}}`; `text`
//! carries a profile-specific secondary payload (a newline-joined identity,
//! a serialized stroke, or a roster snapshot). The two profiles assign
//! different meanings to the same `type` integers and must never be mixed on
//! one connection, so each gets its own closed message enum in [`draw`] and
//! [`chat`].

pub mod chat;
pub mod draw;

use serde::{Deserialize, Serialize};

/// Error returned by the decode paths.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The raw text could not be decoded as a JSON envelope or payload.
    #[error("failed to decode JSON frame: {0}")]
    Json(#[from] serde_json::Error),
    /// The `type` integer on the wire does not map to a known kind for the
    /// active profile.
    #[error("unknown message type: {0}")]
    UnknownType(i64),
    /// The secondary payload inside `text` did not have the expected shape.
    #[error("malformed {0} payload")]
    MalformedPayload(&'static str),
}

/// A user's display identity: a name and an opaque style token.
///
/// The color is never validated beyond what the payload split yields; in the
/// chat profile the slot carries the entry email instead of a color. Not
/// globally unique — only the token-gated server enforces name uniqueness.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub name: String,
    pub color: String,
}

impl Identity {
    #[must_use]
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self { name: name.into(), color: color.into() }
    }
}

/// A sampled input location in session-local coordinates.
///
/// Serialized on the wire as a two-element array `[x, y]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance to `other`.
    ///
    /// Threshold comparisons in the capture pipeline are done on squared
    /// distances; the square root is never taken.
    #[must_use]
    pub fn dist_sq(self, other: Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

impl From<[f64; 2]> for Point {
    fn from(value: [f64; 2]) -> Self {
        Self { x: value[0], y: value[1] }
    }
}

impl From<Point> for [f64; 2] {
    fn from(value: Point) -> Self {
        [value.x, value.y]
    }
}

/// One committed freehand gesture: an ordered point sequence plus a display
/// color. Immutable once committed.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub color: String,
    pub points: Vec<Point>,
}

impl Stroke {
    #[must_use]
    pub fn new(color: impl Into<String>, points: Vec<Point>) -> Self {
        Self { color: color.into(), points }
    }
}

/// The raw wire frame shared by both profiles.
///
/// `user` is stamped by the server side to attribute an incoming event to
/// its sender; self-originated frames leave it unset and it is omitted from
/// the serialized form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    #[serde(rename = "type")]
    pub kind: i64,
    #[serde(default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<Identity>,
}

impl Envelope {
    #[must_use]
    pub fn new(kind: i64, text: impl Into<String>) -> Self {
        Self { kind, text: text.into(), user: None }
    }

    /// Serialize the envelope into one transport frame.
    #[must_use]
    pub fn encode(&self) -> String {
        // Serializing a struct of plain strings and integers is infallible;
        // serde_json only errors on non-string map keys or failing Serialize
        // impls, neither of which can occur here.
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Parse one transport frame into an envelope.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Json`] for malformed frames.
    pub fn decode(raw: &str) -> Result<Self, CodecError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// The sender identity stamped by the server, or an empty identity when
    /// the frame was not attributed.
    #[must_use]
    pub fn sender(&self) -> Identity {
        self.user.clone().unwrap_or_default()
    }
}

/// Split a `"<a>\n<b>"` secondary payload into its two halves.
///
/// Requires exactly two non-empty parts; anything else is malformed.
pub(crate) fn split_pair(text: &str) -> Option<(&str, &str)> {
    let parts: Vec<&str> = text.split('\n').collect();
    match parts.as_slice() {
        [a, b] if !a.is_empty() && !b.is_empty() => Some((a, b)),
        _ => None,
    }
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
