//! Scroll-area coordination
//!
//! A [`ScrollCoordinator`] owns the offset of scrolled content inside a
//! viewport. It applies direct drags (with elastic overshoot at the
//! edges), consumes the momentum deltas of an optional [`Scroller`], and
//! keeps the indicator fade and edge decay animations in step with both.
//! The host feeds it pointer events and frame ticks, then polls
//! [`position`](ScrollCoordinator::position),
//! [`indicator`](ScrollCoordinator::indicator) and
//! [`blur`](ScrollCoordinator::blur) when painting.

use std::time::Duration;

use kinetic_core::{
    Axis, BlurConfig, BlurPolicy, IndicatorConfig, IndicatorPolicy, KineticConfig, Point, Size,
};

use crate::blur::{self, BlurState};
use crate::event::{PointerEvent, PointerKind, TargetId};
use crate::indicator::{self, IndicatorState};
use crate::scroll::{BlurConfigExt, EasingType, IndicatorConfigExt, ValueAnimation};
use crate::scroller::{Scroller, ScrollerSignal};

/// Default margin kept around a point passed to `ensure_visible`
pub const DEFAULT_VISIBLE_MARGIN: i32 = 50;

#[derive(Debug, Clone)]
pub struct ScrollCoordinator {
    target: TargetId,
    indicator_config: IndicatorConfig,
    blur_config: BlurConfig,

    viewport: Size,
    content: Size,
    /// Always within `[0, max_offset]` once normalized
    offset: Point,
    /// Signed distance dragged past the range, per axis
    overshoot: Point,

    scroller: Option<Scroller>,
    dragging: bool,
    last_pointer: Point,

    /// Returns overshoot to zero after an elastic drag
    decay: ValueAnimation<Point>,
    /// Indicator opacity after scrolling stops
    fade: ValueAnimation<f64>,
    opacity: f64,
}

impl ScrollCoordinator {
    /// Create a coordinator without a momentum source
    pub fn new(target: TargetId, indicator_config: IndicatorConfig, blur_config: BlurConfig) -> Self {
        Self {
            target,
            indicator_config,
            blur_config,
            viewport: Size::default(),
            content: Size::default(),
            offset: Point::ZERO,
            overshoot: Point::ZERO,
            scroller: None,
            dragging: false,
            last_pointer: Point::ZERO,
            decay: ValueAnimation::new(),
            fade: ValueAnimation::new(),
            opacity: 0.0,
        }
    }

    /// Create a coordinator with a scroller, both configured from `config`
    pub fn from_config(target: TargetId, config: &KineticConfig) -> Self {
        Self::new(target, config.indicator.clone(), config.blur.clone())
            .with_scroller(Scroller::new(target, &config.scroller, &config.finger))
    }

    /// Source fling deltas from `scroller`, re-attached to this coordinator's target
    pub fn with_scroller(mut self, mut scroller: Scroller) -> Self {
        scroller.attach(self.target);
        self.scroller = Some(scroller);
        self
    }

    pub fn scroller(&self) -> Option<&Scroller> {
        self.scroller.as_ref()
    }

    pub fn scroller_mut(&mut self) -> Option<&mut Scroller> {
        self.scroller.as_mut()
    }

    pub fn target(&self) -> TargetId {
        self.target
    }

    pub fn attach(&mut self, target: TargetId) {
        self.target = target;
        self.dragging = false;
        if let Some(scroller) = self.scroller.as_mut() {
            scroller.attach(target);
        }
    }

    pub fn indicator_config(&self) -> &IndicatorConfig {
        &self.indicator_config
    }

    pub fn set_indicator_config(&mut self, config: IndicatorConfig) {
        self.indicator_config = config;
    }

    pub fn indicator_policy(&self, axis: Axis) -> IndicatorPolicy {
        match axis {
            Axis::Horizontal => self.indicator_config.horizontal_policy,
            Axis::Vertical => self.indicator_config.vertical_policy,
        }
    }

    pub fn set_indicator_policy(&mut self, axis: Axis, policy: IndicatorPolicy) {
        match axis {
            Axis::Horizontal => self.indicator_config.horizontal_policy = policy,
            Axis::Vertical => self.indicator_config.vertical_policy = policy,
        }
    }

    pub fn blur_config(&self) -> &BlurConfig {
        &self.blur_config
    }

    pub fn blur_policy(&self) -> BlurPolicy {
        self.blur_config.policy
    }

    /// Takes effect on the next drag; an overshoot in progress still decays
    pub fn set_blur_policy(&mut self, policy: BlurPolicy) {
        self.blur_config.policy = policy;
    }

    pub fn viewport_size(&self) -> Size {
        self.viewport
    }

    pub fn set_viewport_size(&mut self, size: Size) {
        self.viewport = size;
        self.normalize();
    }

    pub fn content_size(&self) -> Size {
        self.content
    }

    pub fn set_content_size(&mut self, size: Size) {
        self.content = size;
        self.normalize();
    }

    /// Largest valid offset per axis, never negative
    pub fn max_offset(&self) -> Point {
        Point::new(self.max_along(Axis::Horizontal), self.max_along(Axis::Vertical))
    }

    fn max_along(&self, axis: Axis) -> i32 {
        (self.content.extent(axis) - self.viewport.extent(axis)).max(0)
    }

    /// In-range scroll offset
    pub fn offset(&self) -> Point {
        self.offset
    }

    /// Signed overshoot past the scroll range
    pub fn overshoot(&self) -> Point {
        self.overshoot
    }

    /// Where the host should draw the content: offset plus overshoot
    pub fn position(&self) -> Point {
        self.offset + self.overshoot
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Whether any animation still needs ticks
    pub fn is_animating(&self) -> bool {
        self.momentum_running() || self.decay.is_running() || self.fade.is_running()
    }

    fn momentum_running(&self) -> bool {
        self.scroller.as_ref().is_some_and(Scroller::is_scrolling)
    }

    /// Scrolling, dragging or snapping back
    fn is_active(&self) -> bool {
        self.dragging || self.momentum_running() || self.decay.is_running()
    }

    /// Move the offset by `(dx, dy)`, clamped to the scroll range
    ///
    /// Returns the delta actually applied, which is smaller than requested
    /// when a boundary is hit.
    pub fn scroll_by(&mut self, dx: i32, dy: i32) -> Point {
        let max = self.max_offset();
        let before = self.offset;
        self.offset = Point::new(
            before.x.saturating_add(dx).clamp(0, max.x),
            before.y.saturating_add(dy).clamp(0, max.y),
        );
        let applied = self.offset - before;
        if applied != Point::new(dx, dy) {
            tracing::trace!(requested = %Point::new(dx, dy), applied = %applied, "Scroll clamped at edge");
        }
        applied
    }

    /// Move to an absolute offset, clamped to the scroll range
    pub fn scroll_to(&mut self, target: Point) -> Point {
        let delta = target - self.offset;
        self.scroll_by(delta.x, delta.y)
    }

    /// Re-clamp after the viewport or content changed size
    pub fn normalize(&mut self) {
        let max = self.max_offset();
        self.offset = Point::new(self.offset.x.clamp(0, max.x), self.offset.y.clamp(0, max.y));

        for axis in Axis::ALL {
            let limit = self.overshoot_limit(axis) as i32;
            let current = self.overshoot.get(axis);
            self.overshoot.set(axis, current.clamp(-limit, limit));
        }
    }

    /// Scroll so that content point `(x, y)` lies inside the viewport,
    /// keeping `xmargin`/`ymargin` of space around it where possible
    pub fn ensure_visible(&mut self, x: i32, y: i32, xmargin: i32, ymargin: i32) -> Point {
        let mut target = self.offset;
        for (axis, pos, margin) in [(Axis::Horizontal, x, xmargin), (Axis::Vertical, y, ymargin)] {
            let view = self.viewport.extent(axis);
            let current = self.offset.get(axis);
            if pos.saturating_sub(margin) < current {
                target.set(axis, pos.saturating_sub(margin));
            } else if pos > current.saturating_add(view).saturating_sub(margin) {
                target.set(axis, pos.saturating_sub(view).saturating_add(margin));
            }
        }
        self.scroll_to(target)
    }

    /// Indicator state for an axis, for the host's paint routine
    pub fn indicator(&self, axis: Axis) -> IndicatorState {
        indicator::compute(
            self.viewport.extent(axis),
            self.content.extent(axis),
            self.offset.get(axis),
            self.indicator_policy(axis),
            self.opacity,
            &self.indicator_config,
        )
    }

    /// Edge effect state for an axis, for the host's paint routine
    pub fn blur(&self, axis: Axis) -> BlurState {
        BlurState::from_overshoot(self.overshoot.get(axis), &self.blur_config)
    }

    /// Feed a pointer event from the host
    pub fn handle_event(&mut self, event: &PointerEvent) {
        if event.target != self.target {
            return;
        }

        if let Some(scroller) = self.scroller.as_mut() {
            scroller.handle_event(event);
        }
        self.process_signals(event.time);

        match event.kind {
            PointerKind::Press => {
                if self.decay.stop() {
                    tracing::trace!(overshoot = %self.overshoot, "Edge decay interrupted by press");
                }
                self.dragging = true;
                self.last_pointer = event.pos;
                self.wake_indicators();
            }
            PointerKind::Move => {
                if self.dragging {
                    let delta = event.pos - self.last_pointer;
                    self.last_pointer = event.pos;
                    // Content follows the finger
                    self.drag_by(-delta);
                }
            }
            PointerKind::Release => {
                if self.dragging {
                    self.dragging = false;
                    if !self.overshoot.is_zero() {
                        tracing::debug!(overshoot = %self.overshoot, "Starting edge decay");
                        self.decay.start(
                            self.overshoot,
                            Point::ZERO,
                            self.blur_config.decay_time(),
                            EasingType::Cubic,
                            event.time,
                        );
                    }
                    self.settle(event.time);
                }
            }
        }
    }

    /// Advance all animations to `now`
    ///
    /// Returns whether another tick is needed.
    pub fn tick(&mut self, now: Duration) -> bool {
        if let Some(scroller) = self.scroller.as_mut() {
            scroller.tick(now);
        }
        self.process_signals(now);

        if let Some(tick) = self.decay.tick(now) {
            self.overshoot = tick.value;
            if tick.finished {
                self.settle(now);
            }
        }

        if let Some(tick) = self.fade.tick(now) {
            self.opacity = tick.value;
        }

        self.is_animating()
    }

    fn process_signals(&mut self, now: Duration) {
        let Some(scroller) = self.scroller.as_mut() else {
            return;
        };
        let signals: Vec<ScrollerSignal> = scroller.drain_signals().collect();

        for signal in signals {
            match signal {
                ScrollerSignal::AboutToStart => self.wake_indicators(),
                ScrollerSignal::Scroll { dx, dy } => {
                    self.scroll_by(dx.saturating_neg(), dy.saturating_neg());
                }
                ScrollerSignal::Finished => self.settle(now),
            }
        }
    }

    fn drag_by(&mut self, delta: Point) {
        let max = self.max_offset();
        for axis in Axis::ALL {
            let (offset, overshoot) = blur::drag_axis(
                self.offset.get(axis),
                self.overshoot.get(axis),
                max.get(axis),
                delta.get(axis),
                self.overshoot_limit(axis),
            );
            self.offset.set(axis, offset);
            self.overshoot.set(axis, overshoot);
        }
    }

    /// How far an axis may be dragged past its range
    fn overshoot_limit(&self, axis: Axis) -> u32 {
        if self.blur_config.policy.allows(axis) && self.max_along(axis) > 0 {
            self.blur_config.max_overshoot
        } else {
            0
        }
    }

    fn wake_indicators(&mut self) {
        self.fade.stop();
        self.opacity = 1.0;
    }

    /// Start fading indicators once nothing is moving any more
    fn settle(&mut self, now: Duration) {
        if self.is_active() || self.fade.is_running() || self.opacity <= 0.0 {
            return;
        }
        self.fade.start(
            self.opacity,
            0.0,
            self.indicator_config.fade_time(),
            EasingType::Linear,
            now,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TARGET: TargetId = TargetId(3);

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn coordinator() -> ScrollCoordinator {
        let mut area =
            ScrollCoordinator::new(TARGET, IndicatorConfig::default(), BlurConfig::default());
        area.set_viewport_size(Size::new(200, 200));
        area.set_content_size(Size::new(1000, 1000));
        area
    }

    fn send(area: &mut ScrollCoordinator, kind: PointerKind, x: i32, y: i32, t: u64) {
        area.handle_event(&PointerEvent::new(TARGET, kind, Point::new(x, y), ms(t)));
    }

    #[test]
    fn test_scroll_by_reports_applied_delta() {
        let mut area = coordinator();
        assert_eq!(area.scroll_by(-10, 30), Point::new(0, 30));
        assert_eq!(area.offset(), Point::new(0, 30));
        assert_eq!(area.scroll_by(900, 900), Point::new(800, 770));
        assert_eq!(area.offset(), Point::new(800, 800));
    }

    #[test]
    fn test_normalize_after_shrink() {
        let mut area = coordinator();
        area.scroll_to(Point::new(700, 700));
        area.set_content_size(Size::new(500, 1000));
        assert_eq!(area.offset(), Point::new(300, 700));
        area.normalize();
        assert_eq!(area.offset(), Point::new(300, 700));
    }

    #[test]
    fn test_negative_sizes_degrade_to_empty_range() {
        let mut area = coordinator();
        area.set_viewport_size(Size::new(-100, 200));
        area.set_content_size(Size::new(-5, -5));
        assert_eq!(area.max_offset(), Point::ZERO);
        assert_eq!(area.scroll_by(10, 10), Point::ZERO);
    }

    #[test]
    fn test_ensure_visible() {
        let mut area = coordinator();
        area.ensure_visible(500, 10, DEFAULT_VISIBLE_MARGIN, DEFAULT_VISIBLE_MARGIN);
        assert_eq!(area.offset(), Point::new(350, 0));

        area.ensure_visible(100, 10, DEFAULT_VISIBLE_MARGIN, DEFAULT_VISIBLE_MARGIN);
        assert_eq!(area.offset(), Point::new(50, 0));

        area.ensure_visible(990, 990, DEFAULT_VISIBLE_MARGIN, DEFAULT_VISIBLE_MARGIN);
        assert_eq!(area.offset(), Point::new(800, 800));
    }

    #[test]
    fn test_extreme_coordinates_clamp() {
        let mut area = coordinator();
        area.scroll_to(Point::new(400, 400));
        area.ensure_visible(i32::MIN + 10, 0, 50, 50);
        assert_eq!(area.offset(), Point::new(0, 0));

        area.ensure_visible(i32::MAX - 10, i32::MAX, -50, 50);
        assert_eq!(area.offset(), Point::new(800, 800));

        area.scroll_to(Point::new(i32::MIN, i32::MAX));
        assert_eq!(area.offset(), Point::new(0, 800));
    }

    #[test]
    fn test_drag_moves_content_with_finger() {
        let mut area = coordinator();
        area.scroll_to(Point::new(0, 300));
        send(&mut area, PointerKind::Press, 100, 100, 0);
        send(&mut area, PointerKind::Move, 100, 60, 500);
        assert_eq!(area.offset(), Point::new(0, 340));
        assert!(area.is_dragging());
        assert!(area.indicator(Axis::Vertical).visible);
    }

    #[test]
    fn test_elastic_overshoot_and_decay() {
        let mut area = coordinator();
        send(&mut area, PointerKind::Press, 100, 100, 0);
        send(&mut area, PointerKind::Move, 100, 140, 1000);
        assert_eq!(area.offset(), Point::ZERO);
        assert_eq!(area.overshoot(), Point::new(0, -40));
        assert_eq!(area.position(), Point::new(0, -40));

        let blur = area.blur(Axis::Vertical);
        assert_eq!(blur.edge, Some(crate::blur::Edge::Leading));
        assert!((blur.pressure - 0.5).abs() < 1e-9);
        assert!(!area.blur(Axis::Horizontal).is_active());

        send(&mut area, PointerKind::Release, 100, 140, 1000);
        assert!(area.is_animating());

        let mut t = 1000;
        while area.tick(ms(t)) {
            t += 16;
        }
        assert_eq!(area.overshoot(), Point::ZERO);
        assert_eq!(area.blur(Axis::Vertical).pressure, 0.0);
        assert!(!area.indicator(Axis::Vertical).visible);
    }

    #[test]
    fn test_press_stops_decay() {
        let mut area = coordinator();
        send(&mut area, PointerKind::Press, 0, 0, 0);
        send(&mut area, PointerKind::Move, 0, 60, 1000);
        send(&mut area, PointerKind::Release, 0, 60, 1000);
        area.tick(ms(1100));
        let held = area.overshoot();
        assert!(held.y < 0);

        send(&mut area, PointerKind::Press, 0, 0, 1110);
        area.tick(ms(2000));
        assert_eq!(area.overshoot(), held);
    }

    #[test]
    fn test_blur_policy_limits_axes() {
        let mut area = coordinator();
        area.set_blur_policy(BlurPolicy::HorizontalOnly);
        send(&mut area, PointerKind::Press, 0, 0, 0);
        send(&mut area, PointerKind::Move, 30, 30, 1000);
        assert_eq!(area.overshoot(), Point::new(-30, 0));

        let mut area = coordinator();
        area.set_blur_policy(BlurPolicy::None);
        send(&mut area, PointerKind::Press, 0, 0, 0);
        send(&mut area, PointerKind::Move, 30, 30, 1000);
        assert_eq!(area.overshoot(), Point::ZERO);
        assert_eq!(area.offset(), Point::ZERO);
    }

    #[test]
    fn test_overshoot_capped() {
        let mut area = coordinator();
        send(&mut area, PointerKind::Press, 0, 0, 0);
        send(&mut area, PointerKind::Move, 0, 500, 1000);
        assert_eq!(area.overshoot(), Point::new(0, -80));
        assert_eq!(area.blur(Axis::Vertical).pressure, 1.0);
    }

    #[test]
    fn test_fling_scrolls_content() {
        let mut area = ScrollCoordinator::from_config(TARGET, &KineticConfig::default());
        area.set_viewport_size(Size::new(200, 200));
        area.set_content_size(Size::new(200, 5000));
        area.scroll_to(Point::new(0, 2000));

        send(&mut area, PointerKind::Press, 50, 300, 0);
        send(&mut area, PointerKind::Move, 50, 200, 100);
        send(&mut area, PointerKind::Release, 50, 200, 100);
        assert_eq!(area.offset(), Point::new(0, 2100));
        assert!(area.scroller().unwrap().is_scrolling());

        let mut t = 100;
        while area.tick(ms(t)) {
            t += 16;
        }
        // Clamped to 80 units/s for 3s
        assert_eq!(area.offset(), Point::new(0, 2340));
        assert!(!area.indicator(Axis::Vertical).visible);
    }

    #[test]
    fn test_other_target_ignored() {
        let mut area = coordinator();
        area.handle_event(&PointerEvent::press(TargetId(99), Point::ZERO, ms(0)));
        assert!(!area.is_dragging());
    }

    #[test]
    fn test_indicator_policy_per_axis() {
        let mut area = coordinator();
        area.set_indicator_policy(Axis::Horizontal, IndicatorPolicy::AlwaysShow);
        area.set_indicator_policy(Axis::Vertical, IndicatorPolicy::AlwaysHide);
        assert!(area.indicator(Axis::Horizontal).visible);

        send(&mut area, PointerKind::Press, 0, 0, 0);
        assert!(!area.indicator(Axis::Vertical).visible);
    }
}
