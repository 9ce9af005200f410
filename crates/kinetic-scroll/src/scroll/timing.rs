//! L4 Atomic Layer: Time calculation utilities for scroll animations
//!
//! Timestamps are supplied by the host as a `Duration` since an arbitrary
//! epoch; nothing here reads the wall clock.

use std::time::Duration;

use kinetic_core::Point;

/// Calculate animation progress (0.0 to 1.0)
///
/// # Arguments
/// * `start` - Animation start time
/// * `now` - Current host time
/// * `duration` - Total animation duration
///
/// # Returns
/// Progress value clamped to [0.0, 1.0]
#[inline]
pub fn progress(start: Duration, now: Duration, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_sub(start);
    let ratio = elapsed.as_secs_f64() / duration.as_secs_f64();
    ratio.clamp(0.0, 1.0)
}

/// Check if animation is complete
#[inline]
pub fn is_complete(start: Duration, now: Duration, duration: Duration) -> bool {
    now.saturating_sub(start) >= duration
}

/// Linear interpolation between two values
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Linear interpolation for integer positions, rounded to nearest
#[inline]
pub fn lerp_i32(from: i32, to: i32, t: f64) -> i32 {
    lerp(from as f64, to as f64, t).round() as i32
}

/// Component-wise interpolation between two points
#[inline]
pub fn lerp_point(from: Point, to: Point, t: f64) -> Point {
    Point::new(lerp_i32(from.x, to.x, t), lerp_i32(from.y, to.y, t))
}

/// Values a [`ValueAnimation`](super::ValueAnimation) can drive
pub trait Interpolate: Copy {
    fn interpolate(from: Self, to: Self, t: f64) -> Self;
}

impl Interpolate for f64 {
    #[inline]
    fn interpolate(from: f64, to: f64, t: f64) -> f64 {
        lerp(from, to, t)
    }
}

impl Interpolate for Point {
    #[inline]
    fn interpolate(from: Point, to: Point, t: f64) -> Point {
        lerp_point(from, to, t)
    }
}
