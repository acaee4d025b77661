//! Gesture capture: turns raw pointer/touch samples into stroke points.
//!
//! DESIGN
//! ======
//! The capture tracks one gesture between press and release and filters the
//! sample stream twice: a jump threshold rejects stray far-away contacts
//! mid-gesture (palm rejection), and a smoothing threshold drops samples too
//! close to the previous point to matter visually. Both comparisons are on
//! squared distances; the square root is never taken. The capture writes
//! accepted samples into the [`StrokeStore`]'s in-progress buffer and tells
//! the caller when the buffer is ready to commit — it never attaches a color
//! or touches the committed list itself.

#[cfg(test)]
#[path = "capture_test.rs"]
mod capture_test;

use messages::Point;

use crate::consts::{
    CURVE_SMOOTHING_LIMIT_SQ, PALM_REJECTION_LIMIT_SQ, STROKE_WIDTH_BASE, STROKE_WIDTH_MAX,
    STROKE_WIDTH_SPEED_DIVISOR,
};
use crate::stroke::StrokeStore;

/// Squared-distance thresholds for one deployment's screen scale.
#[derive(Clone, Copy, Debug)]
pub struct CaptureConfig {
    /// Samples farther than this from the previous point end the gesture.
    pub jump_limit_sq: f64,
    /// Samples closer than this to the previous point are discarded.
    pub smoothing_limit_sq: f64,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            jump_limit_sq: PALM_REJECTION_LIMIT_SQ,
            smoothing_limit_sq: CURVE_SMOOTHING_LIMIT_SQ,
        }
    }
}

/// Outcome of feeding one sample into the capture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CaptureEvent {
    /// The sample was not tracked (no active gesture, or a rejected press).
    Ignored,
    /// A new in-progress stroke was anchored at the press point.
    Started,
    /// The sample was appended; `width_hint` is a speed-derived rendering
    /// parameter, capped at a maximum. It never affects transmitted points.
    Extended { width_hint: f64 },
    /// The sample fell inside the smoothing threshold and was dropped.
    Smoothed,
    /// The gesture finished; the in-progress stroke is ready to commit.
    /// A jump past the palm-rejection threshold ends the gesture without
    /// including the far sample.
    Ended,
}

/// State for the gesture being tracked between press and release.
#[derive(Clone, Debug, Default)]
pub struct StrokeCapture {
    config: CaptureConfig,
    last: Option<Point>,
}

impl StrokeCapture {
    #[must_use]
    pub fn new(config: CaptureConfig) -> Self {
        Self { config, last: None }
    }

    /// Whether a gesture is currently being tracked.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.last.is_some()
    }

    /// Handle a press. A press reporting more than one simultaneous contact
    /// is a resting palm and the whole gesture is ignored.
    pub fn press(&mut self, store: &mut StrokeStore, pt: Point, contacts: u32) -> CaptureEvent {
        if contacts > 1 {
            return CaptureEvent::Ignored;
        }

        self.last = Some(pt);
        store.begin(pt);
        CaptureEvent::Started
    }

    /// Handle a move sample while dragging.
    pub fn movement(&mut self, store: &mut StrokeStore, pt: Point) -> CaptureEvent {
        let Some(last) = self.last else {
            return CaptureEvent::Ignored;
        };

        let sq_dist = last.dist_sq(pt);
        if sq_dist > self.config.jump_limit_sq {
            // A contact landed far from the gesture while still "dragging":
            // implicit release, without the stray sample.
            self.last = None;
            return CaptureEvent::Ended;
        }
        if sq_dist <= self.config.smoothing_limit_sq {
            return CaptureEvent::Smoothed;
        }

        self.last = Some(pt);
        store.extend(pt);
        CaptureEvent::Extended { width_hint: width_hint(sq_dist) }
    }

    /// Handle a release. Commits even a single-point stroke; a release with
    /// no active gesture (e.g. after a rejected press) is ignored.
    pub fn release(&mut self) -> CaptureEvent {
        if self.last.take().is_none() {
            return CaptureEvent::Ignored;
        }
        CaptureEvent::Ended
    }
}

/// Rendering width as a saturating function of sample speed.
fn width_hint(sq_dist: f64) -> f64 {
    (STROKE_WIDTH_BASE + sq_dist / STROKE_WIDTH_SPEED_DIVISOR).min(STROKE_WIDTH_MAX)
}
