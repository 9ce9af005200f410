//! Animation building blocks for the kinetic scroll engine
//!
//! # Architecture
//!
//! ## L4 Atomic Layer
//! - `easing` - Pure easing functions (cubic, quintic, exponential, circular)
//! - `timing` - Time calculation utilities (progress, interpolation)
//! - `config` - Duration views of the engine configuration (types from kinetic-core)
//!
//! ## L3 Molecular Layer
//! - `animation` - Host-ticked value animation combining atoms
//!
//! # Usage
//!
//! ```ignore
//! use kinetic_scroll::scroll::{EasingType, ValueAnimation};
//!
//! let mut anim = ValueAnimation::new();
//! anim.start(from, to, Duration::from_millis(300), EasingType::OutCirc, now);
//!
//! // In the host's frame callback
//! if let Some(tick) = anim.tick(now) {
//!     apply(tick.value);
//! }
//! ```

// L4 Atomic Layer
pub mod config;
pub mod easing;
pub mod timing;

// L3 Molecular Layer
pub mod animation;

// Re-exports for convenient access
pub use animation::{AnimationTick, ValueAnimation};
pub use config::{BlurConfigExt, GeneralConfigExt, IndicatorConfigExt, ScrollerConfigExt};
pub use easing::{EasingType, EasingTypeExt};
pub use timing::Interpolate;
