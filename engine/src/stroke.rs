//! Committed strokes plus the single in-progress stroke.
//!
//! DESIGN
//! ======
//! The store is the source of truth for what must be rendered: the committed
//! list is append-only for the lifetime of a session (cleared only by an
//! explicit canvas clear), and the in-progress stroke is the one mutable
//! slot, emptied on every commit.

#[cfg(test)]
#[path = "stroke_test.rs"]
mod stroke_test;

use messages::{Point, Stroke};

/// Ordered collection of committed strokes and the in-progress point buffer.
#[derive(Clone, Debug, Default)]
pub struct StrokeStore {
    committed: Vec<Stroke>,
    current: Vec<Point>,
}

impl StrokeStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Anchor a new in-progress stroke at `pt`, discarding any stale buffer.
    pub fn begin(&mut self, pt: Point) {
        self.current.clear();
        self.current.push(pt);
    }

    /// Append a sample to the in-progress stroke.
    pub fn extend(&mut self, pt: Point) {
        self.current.push(pt);
    }

    /// Commit the in-progress stroke under `color` and reset the buffer.
    ///
    /// The committed stroke is returned for broadcast; a single-point stroke
    /// is a valid commit.
    pub fn commit(&mut self, color: &str) -> Stroke {
        let stroke = Stroke::new(color, std::mem::take(&mut self.current));
        self.committed.push(stroke.clone());
        stroke
    }

    /// Append a stroke received from a peer.
    pub fn push(&mut self, stroke: Stroke) {
        self.committed.push(stroke);
    }

    /// Drop every committed stroke and the in-progress buffer.
    pub fn clear(&mut self) {
        self.committed.clear();
        self.current.clear();
    }

    /// Committed strokes in commit order.
    #[must_use]
    pub fn strokes(&self) -> &[Stroke] {
        &self.committed
    }

    /// Points of the in-progress stroke, oldest first.
    #[must_use]
    pub fn current(&self) -> &[Point] {
        &self.current
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.committed.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.committed.is_empty()
    }
}
