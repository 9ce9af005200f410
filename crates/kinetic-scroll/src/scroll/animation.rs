//! L3 Molecular Layer: Host-ticked value animation
//!
//! Combines easing functions and timing utilities into the one animation
//! primitive the engine needs: drive a value from `from` to `to` over a
//! duration, producing an interpolated value each time the host ticks it.
//! Momentum, edge decay and indicator fade all run on this type.

use std::time::Duration;

use kinetic_core::Point;

use super::easing::{EasingType, EasingTypeExt};
use super::timing::{is_complete, progress, Interpolate};

/// Running animation parameters
#[derive(Debug, Clone)]
struct ActiveAnimation<T> {
    /// Host time the animation started at
    start: Duration,
    /// Starting value
    from: T,
    /// Final value
    to: T,
    /// Animation duration
    duration: Duration,
    /// Easing function
    easing: EasingType,
}

/// One step of a running animation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationTick<T = Point> {
    /// Interpolated value at this tick
    pub value: T,
    /// Whether this was the final tick (value == end value)
    pub finished: bool,
}

/// Value animation controller
///
/// Call `start()` to begin, then `tick()` with the host's current time on
/// every frame. A stopped or finished animation yields no ticks.
#[derive(Debug, Clone)]
pub struct ValueAnimation<T = Point> {
    animation: Option<ActiveAnimation<T>>,
}

impl<T> Default for ValueAnimation<T> {
    fn default() -> Self {
        Self { animation: None }
    }
}

impl<T: Interpolate> ValueAnimation<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or restart) the animation
    pub fn start(
        &mut self,
        from: T,
        to: T,
        duration: Duration,
        easing: EasingType,
        now: Duration,
    ) {
        self.animation = Some(ActiveAnimation {
            start: now,
            from,
            to,
            duration,
            easing,
        });
    }

    /// Stop without delivering the end value
    ///
    /// Returns whether an animation was running.
    pub fn stop(&mut self) -> bool {
        self.animation.take().is_some()
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.animation.is_some()
    }

    /// End value of the running animation
    pub fn end_value(&self) -> Option<T> {
        self.animation.as_ref().map(|a| a.to)
    }

    /// Advance to `now` and return the interpolated value
    pub fn tick(&mut self, now: Duration) -> Option<AnimationTick<T>> {
        let anim = self.animation.as_ref()?;

        if is_complete(anim.start, now, anim.duration) {
            let value = anim.to;
            self.animation = None;
            return Some(AnimationTick {
                value,
                finished: true,
            });
        }

        let t = progress(anim.start, now, anim.duration);
        let eased_t = anim.easing.apply(t);
        Some(AnimationTick {
            value: T::interpolate(anim.from, anim.to, eased_t),
            finished: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn test_idle_animation_does_not_tick() {
        let mut anim: ValueAnimation = ValueAnimation::new();
        assert!(!anim.is_running());
        assert!(anim.tick(ms(10)).is_none());
    }

    #[test]
    fn test_linear_progress() {
        let mut anim = ValueAnimation::new();
        anim.start(Point::ZERO, Point::new(100, -50), ms(100), EasingType::Linear, ms(1000));

        let tick = anim.tick(ms(1050)).unwrap();
        assert_eq!(tick.value, Point::new(50, -25));
        assert!(!tick.finished);
        assert!(anim.is_running());
    }

    #[test]
    fn test_final_tick_delivers_end_value() {
        let mut anim = ValueAnimation::new();
        anim.start(Point::ZERO, Point::new(7, 9), ms(100), EasingType::OutCirc, ms(0));

        let tick = anim.tick(ms(250)).unwrap();
        assert_eq!(tick.value, Point::new(7, 9));
        assert!(tick.finished);
        assert!(!anim.is_running());
        assert!(anim.tick(ms(300)).is_none());
    }

    #[test]
    fn test_zero_duration_finishes_on_first_tick() {
        let mut anim = ValueAnimation::new();
        anim.start(Point::ZERO, Point::new(1, 1), Duration::ZERO, EasingType::Cubic, ms(5));
        assert!(anim.tick(ms(5)).unwrap().finished);
    }

    #[test]
    fn test_scalar_animation() {
        let mut anim = ValueAnimation::<f64>::new();
        anim.start(1.0, 0.0, ms(200), EasingType::Linear, ms(0));
        let tick = anim.tick(ms(50)).unwrap();
        assert!((tick.value - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_stop_discards_animation() {
        let mut anim = ValueAnimation::new();
        anim.start(Point::ZERO, Point::new(10, 0), ms(100), EasingType::Linear, ms(0));
        assert_eq!(anim.end_value(), Some(Point::new(10, 0)));
        assert!(anim.stop());
        assert!(!anim.stop());
        assert!(anim.tick(ms(200)).is_none());
    }
}
