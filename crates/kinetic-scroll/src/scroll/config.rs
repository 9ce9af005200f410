//! L4 Atomic Layer: Configuration helpers for the scroll engine
//!
//! Re-exports configuration from kinetic-core and adds `Duration` views of
//! the millisecond fields.

use std::time::Duration;

// Re-export config types from core
pub use kinetic_core::config::GeneralConfig;
pub use kinetic_core::{BlurConfig, IndicatorConfig, KineticConfig, ScrollerConfig};

/// Extension trait for ScrollerConfig with utility methods
pub trait ScrollerConfigExt {
    /// Momentum animation duration
    fn scroll_time(&self) -> Duration;

    /// Longest pause before a release stops counting as a fling
    fn max_pause(&self) -> Duration;
}

impl ScrollerConfigExt for ScrollerConfig {
    #[inline]
    fn scroll_time(&self) -> Duration {
        Duration::from_millis(self.scroll_time_ms)
    }

    #[inline]
    fn max_pause(&self) -> Duration {
        Duration::from_millis(self.max_pause_ms)
    }
}

/// Extension trait for IndicatorConfig
pub trait IndicatorConfigExt {
    fn fade_time(&self) -> Duration;
}

impl IndicatorConfigExt for IndicatorConfig {
    #[inline]
    fn fade_time(&self) -> Duration {
        Duration::from_millis(self.fade_time_ms)
    }
}

/// Extension trait for BlurConfig
pub trait BlurConfigExt {
    fn decay_time(&self) -> Duration;
}

impl BlurConfigExt for BlurConfig {
    #[inline]
    fn decay_time(&self) -> Duration {
        Duration::from_millis(self.decay_time_ms)
    }
}

/// Extension trait for GeneralConfig
pub trait GeneralConfigExt {
    /// Interval between host animation ticks
    fn tick_duration(&self) -> Duration;
}

impl GeneralConfigExt for GeneralConfig {
    #[inline]
    fn tick_duration(&self) -> Duration {
        if self.frame_rate == 0 {
            Duration::from_millis(16) // ~60fps fallback
        } else {
            Duration::from_millis((1000 / self.frame_rate as u64).max(1))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroller_durations() {
        let config = ScrollerConfig::default();
        assert_eq!(config.scroll_time(), Duration::from_millis(3000));
        assert_eq!(config.max_pause(), Duration::from_millis(300));
    }

    #[test]
    fn test_tick_duration() {
        let mut config = GeneralConfig::default();
        assert_eq!(config.tick_duration(), Duration::from_millis(16));

        config.frame_rate = 100;
        assert_eq!(config.tick_duration(), Duration::from_millis(10));

        config.frame_rate = 0;
        assert_eq!(config.tick_duration(), Duration::from_millis(16));
    }
}
