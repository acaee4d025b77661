use super::*;

use crate::consts::{CURVE_SMOOTHING_LIMIT_SQ, PALM_REJECTION_LIMIT_SQ, STROKE_WIDTH_MAX};

fn capture() -> (StrokeCapture, StrokeStore) {
    (StrokeCapture::new(CaptureConfig::default()), StrokeStore::new())
}

// =============================================================
// press
// =============================================================

#[test]
fn press_anchors_stroke() {
    let (mut cap, mut store) = capture();
    let event = cap.press(&mut store, Point::new(0.0, 0.0), 1);
    assert_eq!(event, CaptureEvent::Started);
    assert!(cap.is_active());
    assert_eq!(store.current(), &[Point::new(0.0, 0.0)]);
}

#[test]
fn press_with_multiple_contacts_is_rejected() {
    let (mut cap, mut store) = capture();
    let event = cap.press(&mut store, Point::new(0.0, 0.0), 2);
    assert_eq!(event, CaptureEvent::Ignored);
    assert!(!cap.is_active());
    assert!(store.current().is_empty());
}

// =============================================================
// movement
// =============================================================

#[test]
fn movement_without_press_is_ignored() {
    let (mut cap, mut store) = capture();
    let event = cap.movement(&mut store, Point::new(5.0, 5.0));
    assert_eq!(event, CaptureEvent::Ignored);
    assert!(store.current().is_empty());
}

#[test]
fn movement_below_smoothing_threshold_is_dropped() {
    let (mut cap, mut store) = capture();
    cap.press(&mut store, Point::new(0.0, 0.0), 1);

    // (1,1) is 2.0 squared units away, under the smoothing threshold.
    let event = cap.movement(&mut store, Point::new(1.0, 1.0));
    assert_eq!(event, CaptureEvent::Smoothed);
    assert_eq!(store.current(), &[Point::new(0.0, 0.0)]);
}

#[test]
fn smoothed_sample_does_not_move_the_anchor() {
    let (mut cap, mut store) = capture();
    cap.press(&mut store, Point::new(0.0, 0.0), 1);
    cap.movement(&mut store, Point::new(1.0, 1.0));

    // Still measured from (0,0), so (2,2) is 8.0 squared units and dropped.
    let event = cap.movement(&mut store, Point::new(2.0, 2.0));
    assert_eq!(event, CaptureEvent::Smoothed);
    assert_eq!(store.current(), &[Point::new(0.0, 0.0)]);
}

#[test]
fn movement_past_smoothing_threshold_extends() {
    let (mut cap, mut store) = capture();
    cap.press(&mut store, Point::new(0.0, 0.0), 1);

    let event = cap.movement(&mut store, Point::new(50.0, 50.0));
    assert!(matches!(event, CaptureEvent::Extended { .. }));
    assert_eq!(store.current(), &[Point::new(0.0, 0.0), Point::new(50.0, 50.0)]);
}

#[test]
fn movement_past_jump_threshold_ends_without_the_sample() {
    let (mut cap, mut store) = capture();
    cap.press(&mut store, Point::new(0.0, 0.0), 1);

    let event = cap.movement(&mut store, Point::new(500.0, 500.0));
    assert_eq!(event, CaptureEvent::Ended);
    assert!(!cap.is_active());
    // The far sample is not part of the stroke.
    assert_eq!(store.current(), &[Point::new(0.0, 0.0)]);
}

#[test]
fn jump_does_not_start_a_new_stroke() {
    let (mut cap, mut store) = capture();
    cap.press(&mut store, Point::new(0.0, 0.0), 1);
    cap.movement(&mut store, Point::new(500.0, 500.0));

    // Further movement is untracked until the next press.
    let event = cap.movement(&mut store, Point::new(501.0, 501.0));
    assert_eq!(event, CaptureEvent::Ignored);
}

#[test]
fn no_two_consecutive_appended_points_within_smoothing_threshold() {
    let (mut cap, mut store) = capture();
    cap.press(&mut store, Point::new(0.0, 0.0), 1);

    let samples = [
        Point::new(0.5, 0.5),
        Point::new(4.0, 0.0),
        Point::new(4.5, 0.5),
        Point::new(9.0, 1.0),
        Point::new(9.1, 1.1),
        Point::new(14.0, 2.0),
    ];
    for pt in samples {
        cap.movement(&mut store, pt);
    }

    let points = store.current();
    for pair in points.windows(2).skip(1) {
        assert!(pair[0].dist_sq(pair[1]) > CURVE_SMOOTHING_LIMIT_SQ);
    }
}

// =============================================================
// release
// =============================================================

#[test]
fn release_ends_the_gesture() {
    let (mut cap, mut store) = capture();
    cap.press(&mut store, Point::new(0.0, 0.0), 1);
    assert_eq!(cap.release(), CaptureEvent::Ended);
    assert!(!cap.is_active());
}

#[test]
fn release_without_press_is_ignored() {
    let (mut cap, _) = capture();
    assert_eq!(cap.release(), CaptureEvent::Ignored);
}

#[test]
fn release_after_rejected_press_is_ignored() {
    let (mut cap, mut store) = capture();
    cap.press(&mut store, Point::new(0.0, 0.0), 3);
    assert_eq!(cap.release(), CaptureEvent::Ignored);
}

// =============================================================
// width hint
// =============================================================

#[test]
fn width_hint_grows_with_speed() {
    let (mut cap, mut store) = capture();
    cap.press(&mut store, Point::new(0.0, 0.0), 1);
    let CaptureEvent::Extended { width_hint: slow } =
        cap.movement(&mut store, Point::new(4.0, 0.0))
    else {
        panic!("expected Extended");
    };
    let CaptureEvent::Extended { width_hint: fast } =
        cap.movement(&mut store, Point::new(54.0, 0.0))
    else {
        panic!("expected Extended");
    };
    assert!(fast > slow);
}

#[test]
fn width_hint_saturates_at_max() {
    let (mut cap, mut store) = capture();
    cap.press(&mut store, Point::new(0.0, 0.0), 1);
    let CaptureEvent::Extended { width_hint } =
        cap.movement(&mut store, Point::new(199.0, 0.0))
    else {
        panic!("expected Extended");
    };
    assert!((width_hint - STROKE_WIDTH_MAX).abs() < f64::EPSILON);
}

// =============================================================
// configurable thresholds
// =============================================================

#[test]
fn custom_thresholds_are_honored() {
    let config = CaptureConfig { jump_limit_sq: 100.0, smoothing_limit_sq: 1.0 };
    let mut cap = StrokeCapture::new(config);
    let mut store = StrokeStore::new();

    cap.press(&mut store, Point::new(0.0, 0.0), 1);
    // 4.0 squared units: past the tightened smoothing threshold.
    assert!(matches!(
        cap.movement(&mut store, Point::new(2.0, 0.0)),
        CaptureEvent::Extended { .. }
    ));
    // 121.0 squared units: past the tightened jump threshold.
    assert_eq!(cap.movement(&mut store, Point::new(13.0, 0.0)), CaptureEvent::Ended);
}

#[test]
fn default_config_uses_shared_limits() {
    let config = CaptureConfig::default();
    assert!((config.jump_limit_sq - PALM_REJECTION_LIMIT_SQ).abs() < f64::EPSILON);
    assert!((config.smoothing_limit_sq - CURVE_SMOOTHING_LIMIT_SQ).abs() < f64::EPSILON);
}
