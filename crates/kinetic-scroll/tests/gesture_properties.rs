use std::time::Duration;

use kinetic_core::{
    Axis, BlurConfig, FingerGeometry, IndicatorConfig, IndicatorPolicy, KineticConfig, Point,
    ScrollerConfig, Size,
};
use kinetic_scroll::{
    PointerEvent, PointerKind, ScrollCoordinator, Scroller, ScrollerSignal, TargetId,
};

const TARGET: TargetId = TargetId(1);

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn event(kind: PointerKind, x: i32, y: i32, t: u64) -> PointerEvent {
    PointerEvent::new(TARGET, kind, Point::new(x, y), ms(t))
}

fn finger_40_scroller() -> Scroller {
    Scroller::new(TARGET, &ScrollerConfig::default(), &FingerGeometry::new(40, 40))
}

fn flung(scroller: &mut Scroller) -> bool {
    scroller
        .drain_signals()
        .any(|s| s == ScrollerSignal::AboutToStart)
}

#[test]
fn test_constant_velocity_converges() {
    let mut scroller = finger_40_scroller();
    scroller.handle_event(&event(PointerKind::Press, 0, 0, 0));

    for step in 1..=10 {
        scroller.handle_event(&event(PointerKind::Move, 0, step * 20, step as u64 * 40));
        assert!((scroller.velocity().y - 500.0).abs() < 1e-6);
    }
}

#[test]
fn test_short_distance_never_flings() {
    for (dx, dt) in [(10, 1), (39, 2), (39, 50), (20, 100)] {
        let mut scroller = finger_40_scroller();
        scroller.handle_event(&event(PointerKind::Press, 0, 0, 0));
        scroller.handle_event(&event(PointerKind::Move, dx, 0, dt));
        scroller.handle_event(&event(PointerKind::Release, dx, 0, dt));
        assert!(!flung(&mut scroller), "dx={} dt={}", dx, dt);
    }
}

#[test]
fn test_stale_release_never_flings() {
    for pause in [301, 500, 5000] {
        let mut scroller = finger_40_scroller();
        scroller.handle_event(&event(PointerKind::Press, 0, 0, 0));
        scroller.handle_event(&event(PointerKind::Move, 400, 0, 10));
        scroller.handle_event(&event(PointerKind::Release, 400, 0, 10 + pause));
        assert!(!flung(&mut scroller), "pause={}", pause);
    }
}

#[test]
fn test_clamp_preserves_sign() {
    for (dx, dy) in [(200, -300), (-500, 100), (-90, -90)] {
        let mut scroller = finger_40_scroller();
        scroller.handle_event(&event(PointerKind::Press, 0, 0, 0));
        scroller.handle_event(&event(PointerKind::Move, dx, dy, 100));
        scroller.handle_event(&event(PointerKind::Release, dx, dy, 100));
        assert!(flung(&mut scroller));

        let v = scroller.velocity();
        assert_eq!(v.x, 80.0 * (dx as f64).signum());
        assert_eq!(v.y, 80.0 * (dy as f64).signum());
    }
}

#[test]
fn test_finger_40_fling_scenario() {
    let mut scroller = finger_40_scroller();
    assert_eq!(scroller.min_recognized_velocity(), 120);
    assert_eq!(scroller.max_reached_velocity(), 80);
    assert_eq!(scroller.drag_start_distance(), 40);

    scroller.handle_event(&event(PointerKind::Press, 0, 0, 0));
    scroller.handle_event(&event(PointerKind::Move, 100, 0, 200));
    assert!((scroller.velocity().x - 500.0).abs() < 1e-9);

    scroller.handle_event(&event(PointerKind::Release, 100, 0, 250));
    assert!(flung(&mut scroller));
    assert_eq!(scroller.velocity().x, 80.0);
    assert_eq!(scroller.momentum_target(), Some(Point::new(100 + 80 * 3, 0)));
}

#[test]
fn test_press_stops_momentum_and_decay() {
    let mut area = ScrollCoordinator::from_config(TARGET, &KineticConfig::default());
    area.set_viewport_size(Size::new(200, 200));
    area.set_content_size(Size::new(200, 2000));

    // Fling upward from the top edge: overshoot decays while momentum runs
    area.handle_event(&event(PointerKind::Press, 0, 0, 0));
    area.handle_event(&event(PointerKind::Move, 0, 60, 100));
    area.handle_event(&event(PointerKind::Release, 0, 60, 100));
    area.tick(ms(120));
    assert!(area.scroller().unwrap().is_scrolling());
    assert!(area.blur(Axis::Vertical).is_active());

    area.handle_event(&event(PointerKind::Press, 0, 0, 130));
    let scroller = area.scroller().unwrap();
    assert!(!scroller.is_scrolling());
    assert_eq!(scroller.distance(), 0);
    assert_eq!(scroller.velocity().x, 0.0);
    assert_eq!(scroller.velocity().y, 0.0);

    let held = area.overshoot();
    assert!(held.y < 0);
    assert!(!area.tick(ms(1000)));
    assert_eq!(area.overshoot(), held);
}

#[test]
fn test_scroll_by_at_lower_bound() {
    let mut area = ScrollCoordinator::new(TARGET, IndicatorConfig::default(), BlurConfig::default());
    area.set_viewport_size(Size::new(100, 100));
    area.set_content_size(Size::new(400, 400));

    let applied = area.scroll_by(-25, 10);
    assert_eq!(applied.x, 0);
    assert_eq!(applied.y, 10);
}

#[test]
fn test_normalize_is_idempotent_and_in_range() {
    let mut area = ScrollCoordinator::new(TARGET, IndicatorConfig::default(), BlurConfig::default());
    area.set_viewport_size(Size::new(100, 100));
    area.set_content_size(Size::new(400, 400));
    area.scroll_to(Point::new(300, 300));

    area.set_viewport_size(Size::new(350, 50));
    let once = area.offset();
    area.normalize();
    assert_eq!(area.offset(), once);
    let max = area.max_offset();
    assert!((0..=max.x).contains(&once.x));
    assert!((0..=max.y).contains(&once.y));
}

#[test]
fn test_indicator_ratio_scenario() {
    let indicator = IndicatorConfig {
        vertical_policy: IndicatorPolicy::AlwaysShow,
        ..Default::default()
    };
    let mut area = ScrollCoordinator::new(TARGET, indicator, BlurConfig::default());
    area.set_viewport_size(Size::new(200, 200));
    area.set_content_size(Size::new(200, 1000));
    area.scroll_to(Point::new(0, 400));

    let state = area.indicator(Axis::Vertical);
    assert!(state.visible);
    assert!((state.length_ratio - 0.2).abs() < 1e-9);
    assert!((state.position_ratio - 0.5).abs() < 1e-9);
    assert!(!area.indicator(Axis::Horizontal).visible);
}
