//! L4 Atomic Layer: Pure easing functions for scroll animations
//!
//! Maps animation progress in [0, 1] to eased progress in [0, 1].

// Re-export EasingType from core
pub use kinetic_core::EasingType;

/// Extension trait for EasingType with calculation methods
pub trait EasingTypeExt {
    /// Apply the easing function to a progress value
    ///
    /// # Arguments
    /// * `t` - Progress value in range [0, 1]
    ///
    /// # Returns
    /// Eased value in range [0, 1]
    fn apply(&self, t: f64) -> f64;
}

impl EasingTypeExt for EasingType {
    #[inline]
    fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingType::None => if t < 1.0 { 0.0 } else { 1.0 },
            EasingType::Linear => t,
            EasingType::Cubic => cubic_ease_out(t),
            EasingType::Quintic => quintic_ease_out(t),
            EasingType::EaseOut => exponential_ease_out(t),
            EasingType::OutQuad => quad_ease_out(t),
            EasingType::OutCirc => circular_ease_out(t),
        }
    }
}

#[inline]
fn quad_ease_out(t: f64) -> f64 {
    let inv = 1.0 - t;
    1.0 - inv * inv
}

/// Cubic ease-out: f(t) = 1 - (1-t)³
#[inline]
fn cubic_ease_out(t: f64) -> f64 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

/// Quintic ease-out: f(t) = 1 - (1-t)⁵
#[inline]
fn quintic_ease_out(t: f64) -> f64 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv * inv * inv
}

/// Exponential ease-out: f(t) = 1 - 2^(-10t)
#[inline]
fn exponential_ease_out(t: f64) -> f64 {
    if t >= 1.0 {
        1.0
    } else {
        1.0 - 2.0_f64.powf(-10.0 * t)
    }
}

/// Circular ease-out: f(t) = sqrt(1 - (t-1)²)
#[inline]
fn circular_ease_out(t: f64) -> f64 {
    let shifted = t - 1.0;
    (1.0 - shifted * shifted).max(0.0).sqrt()
}
