//! Kinetic gesture recognizer
//!
//! A [`Scroller`] watches the pointer events of one target, estimates the
//! drag velocity from recent motion and, when the finger lifts fast enough,
//! runs a momentum animation whose per-frame deltas are published as
//! [`ScrollerSignal::Scroll`]. It does not know who consumes the deltas.

use std::collections::vec_deque::Drain;
use std::collections::VecDeque;
use std::time::Duration;

use kinetic_core::{FingerGeometry, Point, ScrollerConfig};

use crate::event::{PointerEvent, PointerKind, TargetId};
use crate::scroll::{EasingType, ScrollerConfigExt, ValueAnimation};

/// Velocity samples are never measured over less than this
const MIN_SAMPLE_INTERVAL: Duration = Duration::from_millis(1);

/// Notifications published by a [`Scroller`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollerSignal {
    /// A fling was recognized and momentum is about to start
    AboutToStart,
    /// Finger-space delta produced by one momentum frame
    Scroll { dx: i32, dy: i32 },
    /// Momentum completed or was interrupted by a new press
    Finished,
}

/// Drag velocity in units per second
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Velocity {
    pub x: f64,
    pub y: f64,
}

impl Velocity {
    pub const ZERO: Velocity = Velocity { x: 0.0, y: 0.0 };

    /// Clamp each component to `[-max, max]`, keeping its sign
    pub fn clamped(self, max: f64) -> Velocity {
        Velocity {
            x: clamp_magnitude(self.x, max),
            y: clamp_magnitude(self.y, max),
        }
    }
}

#[inline]
fn clamp_magnitude(value: f64, max: f64) -> f64 {
    if value.abs() > max {
        max.copysign(value)
    } else {
        value
    }
}

/// Kinetic scrolling gesture engine attached to a single target
#[derive(Debug, Clone)]
pub struct Scroller {
    target: TargetId,

    min_velocity: u32,
    max_velocity: u32,
    drag_start_distance: u32,
    scroll_time: Duration,
    scrolling_curve: EasingType,
    max_pause: Duration,
    jitter_threshold: u32,

    pressed: bool,
    /// Last pointer position, then the last momentum value
    pos: Point,
    /// Time of the last velocity sample (or of the press)
    sample_time: Option<Duration>,
    /// Manhattan distance travelled since press
    distance: u32,
    velocity: Velocity,

    momentum: ValueAnimation,
    signals: VecDeque<ScrollerSignal>,
}

impl Scroller {
    /// Create a scroller for `target` from configuration
    pub fn new(target: TargetId, config: &ScrollerConfig, finger: &FingerGeometry) -> Self {
        Self {
            target,
            min_velocity: config.min_velocity_for(finger),
            max_velocity: config.max_velocity_for(finger),
            drag_start_distance: config.drag_start_distance_for(finger),
            scroll_time: if config.scroll_time_ms > 0 {
                config.scroll_time()
            } else {
                ScrollerConfig::default().scroll_time()
            },
            scrolling_curve: config.easing,
            max_pause: config.max_pause(),
            jitter_threshold: config.jitter_threshold,
            pressed: false,
            pos: Point::ZERO,
            sample_time: None,
            distance: 0,
            velocity: Velocity::ZERO,
            momentum: ValueAnimation::new(),
            signals: VecDeque::new(),
        }
    }

    /// Create with default configuration and finger geometry
    pub fn with_defaults(target: TargetId) -> Self {
        Self::new(target, &ScrollerConfig::default(), &FingerGeometry::default())
    }

    pub fn target(&self) -> TargetId {
        self.target
    }

    /// Follow a different event source
    ///
    /// Any gesture in progress on the old target is abandoned.
    pub fn attach(&mut self, target: TargetId) {
        if self.target != target {
            self.target = target;
            self.pressed = false;
            self.sample_time = None;
        }
    }

    pub fn min_recognized_velocity(&self) -> u32 {
        self.min_velocity
    }

    pub fn set_min_recognized_velocity(&mut self, v: u32) {
        self.min_velocity = v;
    }

    pub fn max_reached_velocity(&self) -> u32 {
        self.max_velocity
    }

    /// Velocity clamp applied before projecting a fling; 0 disables it
    pub fn set_max_reached_velocity(&mut self, v: u32) {
        self.max_velocity = v;
    }

    pub fn drag_start_distance(&self) -> u32 {
        self.drag_start_distance
    }

    pub fn set_drag_start_distance(&mut self, v: u32) {
        self.drag_start_distance = v;
    }

    pub fn scroll_time(&self) -> Duration {
        self.scroll_time
    }

    /// Zero is rejected and leaves the current value in place
    pub fn set_scroll_time(&mut self, time: Duration) {
        if time.is_zero() {
            tracing::debug!("Ignoring zero scroll time");
            return;
        }
        self.scroll_time = time;
    }

    pub fn scrolling_curve(&self) -> EasingType {
        self.scrolling_curve
    }

    pub fn set_scrolling_curve(&mut self, curve: EasingType) {
        self.scrolling_curve = curve;
    }

    pub fn max_pause(&self) -> Duration {
        self.max_pause
    }

    pub fn set_max_pause(&mut self, pause: Duration) {
        self.max_pause = pause;
    }

    pub fn jitter_threshold(&self) -> u32 {
        self.jitter_threshold
    }

    pub fn set_jitter_threshold(&mut self, threshold: u32) {
        self.jitter_threshold = threshold;
    }

    #[inline]
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Whether a momentum animation is running
    #[inline]
    pub fn is_scrolling(&self) -> bool {
        self.momentum.is_running()
    }

    /// Most recent velocity estimate
    pub fn velocity(&self) -> Velocity {
        self.velocity
    }

    /// Manhattan distance travelled since the last press
    pub fn distance(&self) -> u32 {
        self.distance
    }

    /// End point of the running momentum animation
    pub fn momentum_target(&self) -> Option<Point> {
        self.momentum.end_value()
    }

    /// Feed a pointer event from the host
    ///
    /// Events for other targets are ignored.
    pub fn handle_event(&mut self, event: &PointerEvent) {
        if event.target != self.target {
            return;
        }

        match event.kind {
            PointerKind::Press => self.on_press(event.pos, event.time),
            PointerKind::Move => self.on_move(event.pos, event.time),
            PointerKind::Release => self.on_release(event.time),
        }
    }

    /// Advance the momentum animation to `now`
    ///
    /// Returns whether momentum is still running afterwards.
    pub fn tick(&mut self, now: Duration) -> bool {
        if let Some(tick) = self.momentum.tick(now) {
            let delta = tick.value - self.pos;
            self.pos = tick.value;

            if !delta.is_zero() {
                self.signals.push_back(ScrollerSignal::Scroll {
                    dx: delta.x,
                    dy: delta.y,
                });
            }

            if tick.finished {
                tracing::trace!(pos = %self.pos, "Momentum finished");
                self.signals.push_back(ScrollerSignal::Finished);
            }
        }

        self.momentum.is_running()
    }

    /// Take all signals published since the last drain, oldest first
    pub fn drain_signals(&mut self) -> Drain<'_, ScrollerSignal> {
        self.signals.drain(..)
    }

    fn on_press(&mut self, pos: Point, time: Duration) {
        if self.momentum.stop() {
            tracing::trace!("Momentum interrupted by press");
            self.signals.push_back(ScrollerSignal::Finished);
        }

        self.pos = pos;
        self.pressed = true;
        self.velocity = Velocity::ZERO;
        self.distance = 0;
        self.sample_time = Some(time);
    }

    fn on_move(&mut self, pos: Point, time: Duration) {
        if !self.pressed {
            return;
        }
        let Some(sample_time) = self.sample_time else {
            return;
        };

        let delta = pos - self.pos;
        let step = delta.manhattan_length();
        self.distance = self.distance.saturating_add(step);
        self.pos = pos;

        if step > self.jitter_threshold {
            let secs = time
                .saturating_sub(sample_time)
                .max(MIN_SAMPLE_INTERVAL)
                .as_secs_f64();
            self.velocity = Velocity {
                x: delta.x as f64 / secs,
                y: delta.y as f64 / secs,
            };
            self.sample_time = Some(time);
        }
    }

    fn on_release(&mut self, time: Duration) {
        let sample_time = self.sample_time.take();
        let was_pressed = std::mem::replace(&mut self.pressed, false);

        let Some(sample_time) = sample_time.filter(|_| was_pressed) else {
            return;
        };

        let pause = time.saturating_sub(sample_time);
        if pause > self.max_pause {
            tracing::debug!(pause_ms = pause.as_millis(), "Release after pause, not a fling");
            return;
        }
        if self.distance < self.drag_start_distance {
            tracing::debug!(distance = self.distance, "Release too short for a fling");
            return;
        }

        let min = self.min_velocity as f64;
        if self.velocity.x.abs() < min && self.velocity.y.abs() < min {
            tracing::debug!(
                vx = self.velocity.x,
                vy = self.velocity.y,
                "Release too slow for a fling"
            );
            return;
        }

        if self.max_velocity > 0 {
            self.velocity = self.velocity.clamped(self.max_velocity as f64);
        }

        let secs = self.scroll_time.as_secs_f64();
        let end = self.pos
            + Point::new(
                (self.velocity.x * secs).round() as i32,
                (self.velocity.y * secs).round() as i32,
            );

        tracing::debug!(
            vx = self.velocity.x,
            vy = self.velocity.y,
            from = %self.pos,
            to = %end,
            "Fling recognized"
        );

        self.signals.push_back(ScrollerSignal::AboutToStart);
        self.momentum
            .start(self.pos, end, self.scroll_time, self.scrolling_curve, time);
    }
}
