// Host-side tests for tap/swipe classification and drag tracking.

use folio_core::*;
use glam::Vec2;

fn cfg() -> InteractionConfig {
    InteractionConfig::default()
}

#[test]
fn quick_small_press_is_a_tap() {
    assert_eq!(
        classify(100.0, 5.0, 5.0, Orientation::Landscape, &cfg()),
        Gesture::Tap
    );
}

#[test]
fn long_horizontal_drag_is_a_swipe() {
    assert_eq!(
        classify(300.0, 80.0, 80.0, Orientation::Landscape, &cfg()),
        Gesture::Swipe
    );
    assert_eq!(
        classify(300.0, 80.0, -80.0, Orientation::Landscape, &cfg()),
        Gesture::Swipe
    );
}

#[test]
fn slow_press_without_travel_is_ignored() {
    assert_eq!(
        classify(600.0, 4.0, 4.0, Orientation::Landscape, &cfg()),
        Gesture::Ignored
    );
    // Vertical travel does not count toward a swipe.
    assert_eq!(
        classify(300.0, 80.0, 2.0, Orientation::Landscape, &cfg()),
        Gesture::Ignored
    );
}

#[test]
fn portrait_is_more_lenient() {
    let c = cfg();
    assert!(c.portrait.max_duration_ms > c.landscape.max_duration_ms);
    assert!(c.portrait.max_movement_px > c.landscape.max_movement_px);
    assert_eq!(
        classify(200.0, 15.0, 15.0, Orientation::Landscape, &c),
        Gesture::Ignored
    );
    assert_eq!(
        classify(200.0, 15.0, 15.0, Orientation::Portrait, &c),
        Gesture::Tap
    );
}

#[test]
fn tap_wins_even_with_a_large_dx_threshold_crossing() {
    // A tap is checked first; a single gesture gets exactly one class.
    let mut c = cfg();
    c.swipe_min_movement_px = 1.0;
    assert_eq!(
        classify(50.0, 5.0, 5.0, Orientation::Landscape, &c),
        Gesture::Tap
    );
}

#[test]
fn tracker_builds_a_gesture_on_release() {
    let mut t = DragTracker::default();
    assert!(t.end(10.0, Vec2::ZERO).is_none());

    t.begin(1000.0, Vec2::new(100.0, 100.0));
    assert!(t.is_active());
    assert_eq!(t.update(Vec2::new(120.0, 101.0)), Some(Vec2::new(20.0, 1.0)));
    assert_eq!(t.update(Vec2::new(190.0, 104.0)), Some(Vec2::new(70.0, 3.0)));

    let drag = t.end(1300.0, Vec2::new(190.0, 104.0)).unwrap();
    assert!(!t.is_active());
    assert_eq!(drag.duration_ms, 300.0);
    assert_eq!(drag.displacement, Vec2::new(90.0, 4.0));
    assert_eq!(drag.horizontal_direction(), Some(1));
    assert_eq!(
        classify_drag(&drag, Orientation::Landscape, &cfg()),
        Gesture::Swipe
    );
}

#[test]
fn tracker_ignores_moves_without_a_press() {
    let mut t = DragTracker::default();
    assert_eq!(t.update(Vec2::ONE), None);
    t.begin(0.0, Vec2::ZERO);
    t.cancel();
    assert!(t.end(5.0, Vec2::ONE).is_none());
}

#[test]
fn vertical_drag_has_no_horizontal_direction() {
    let drag = DragGesture {
        start_ms: 0.0,
        displacement: Vec2::new(10.0, -60.0),
        duration_ms: 200.0,
    };
    assert_eq!(drag.horizontal_direction(), None);
}

#[test]
fn orientation_from_viewport() {
    assert_eq!(Orientation::from_viewport(390.0, 844.0), Orientation::Portrait);
    assert_eq!(Orientation::from_viewport(1440.0, 900.0), Orientation::Landscape);
    assert_eq!(Orientation::from_viewport(500.0, 500.0), Orientation::Landscape);
}

#[test]
fn drag_scroll_waits_until_past_tap_range() {
    let mut scroll = DragScroll::default();
    let tap = cfg().tap(Orientation::Landscape).max_movement_px;

    assert_eq!(scroll.on_move(Vec2::new(0.0, 4.0), Vec2::new(0.0, 4.0), tap), None);
    assert_eq!(scroll.on_move(Vec2::new(0.0, 4.0), Vec2::new(0.0, 8.0), tap), None);
    assert!(!scroll.is_streaming());

    // Crossing the threshold releases everything held back so far.
    assert_eq!(scroll.on_move(Vec2::new(0.0, 6.0), Vec2::new(0.0, 14.0), tap), Some(14.0));
    assert!(scroll.is_streaming());
    assert_eq!(scroll.on_move(Vec2::new(1.0, -3.0), Vec2::new(1.0, 11.0), tap), Some(-3.0));
    assert_eq!(scroll.on_move(Vec2::new(5.0, 1.0), Vec2::new(6.0, 12.0), tap), None);
}

#[test]
fn horizontal_drags_never_scroll() {
    let mut scroll = DragScroll::default();
    assert_eq!(scroll.on_move(Vec2::new(40.0, 5.0), Vec2::new(40.0, 5.0), 10.0), None);
    assert!(!scroll.is_streaming());
}

#[test]
fn a_streamed_press_is_not_a_tap() {
    let mut scroll = DragScroll::default();
    assert!(scroll.on_move(Vec2::new(0.0, 30.0), Vec2::new(0.0, 30.0), 10.0).is_some());
    // Pointer wandered back near the press point before a quick release.
    assert_eq!(scroll.finish(Gesture::Tap), Gesture::Ignored);
    assert!(!scroll.is_streaming());

    // The next press starts clean.
    assert_eq!(scroll.finish(Gesture::Tap), Gesture::Tap);
}

#[test]
fn tracker_reports_displacement_while_active() {
    let mut t = DragTracker::default();
    assert_eq!(t.displacement(), None);
    t.begin(0.0, Vec2::new(10.0, 10.0));
    t.update(Vec2::new(12.0, 30.0));
    assert_eq!(t.displacement(), Some(Vec2::new(2.0, 20.0)));
    t.cancel();
    assert_eq!(t.displacement(), None);
}
