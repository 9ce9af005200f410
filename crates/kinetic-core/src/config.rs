use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KineticConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub finger: FingerGeometry,
    #[serde(default)]
    pub scroller: ScrollerConfig,
    #[serde(default)]
    pub indicator: IndicatorConfig,
    #[serde(default)]
    pub blur: BlurConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Frames per second the host ticks animations at
    #[serde(default = "default_frame_rate")]
    pub frame_rate: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            frame_rate: default_frame_rate(),
        }
    }
}

/// Approximate size of a touch contact, in device units
///
/// Gesture thresholds are expressed as multiples of this unit so that they
/// scale with display density.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FingerGeometry {
    #[serde(default = "default_finger_extent")]
    pub width: u32,
    #[serde(default = "default_finger_extent")]
    pub height: u32,
}

impl Default for FingerGeometry {
    fn default() -> Self {
        Self {
            width: default_finger_extent(),
            height: default_finger_extent(),
        }
    }
}

impl FingerGeometry {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// The larger of the two extents
    pub fn unit(&self) -> u32 {
        self.width.max(self.height)
    }
}

/// Easing curve applied to animation progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    /// Jump straight to the end value
    None,
    Linear,
    /// 1 - (1-t)³
    Cubic,
    /// 1 - (1-t)⁵
    Quintic,
    /// 1 - 2^(-10t)
    EaseOut,
    /// 1 - (1-t)²
    OutQuad,
    /// sqrt(1 - (t-1)²), a strong deceleration suited to momentum
    #[default]
    OutCirc,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollerConfig {
    /// Minimum release velocity (units/s) for a fling; defaults to 3 finger units
    #[serde(default)]
    pub min_velocity: Option<u32>,
    /// Velocity clamp (units/s) before projecting the fling; defaults to 2 finger units
    #[serde(default)]
    pub max_velocity: Option<u32>,
    /// Minimum distance travelled for a fling; defaults to 1 finger unit
    #[serde(default)]
    pub drag_start_distance: Option<u32>,
    /// Momentum animation duration in milliseconds
    #[serde(default = "default_scroll_time")]
    pub scroll_time_ms: u64,
    /// Longest pause between the last move and the release that still flings
    #[serde(default = "default_max_pause")]
    pub max_pause_ms: u64,
    /// Moves shorter than this (manhattan) do not update velocity
    #[serde(default = "default_jitter_threshold")]
    pub jitter_threshold: u32,
    /// Momentum easing curve
    #[serde(default)]
    pub easing: EasingType,
}

impl Default for ScrollerConfig {
    fn default() -> Self {
        Self {
            min_velocity: None,
            max_velocity: None,
            drag_start_distance: None,
            scroll_time_ms: default_scroll_time(),
            max_pause_ms: default_max_pause(),
            jitter_threshold: default_jitter_threshold(),
            easing: EasingType::default(),
        }
    }
}

impl ScrollerConfig {
    pub fn min_velocity_for(&self, finger: &FingerGeometry) -> u32 {
        self.min_velocity.unwrap_or(finger.unit().saturating_mul(3))
    }

    pub fn max_velocity_for(&self, finger: &FingerGeometry) -> u32 {
        self.max_velocity.unwrap_or(finger.unit().saturating_mul(2))
    }

    pub fn drag_start_distance_for(&self, finger: &FingerGeometry) -> u32 {
        self.drag_start_distance.unwrap_or(finger.unit())
    }
}

/// When a scroll indicator is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorPolicy {
    AlwaysShow,
    /// Shown while scrolling, then faded out
    #[default]
    WhileScrolling,
    AlwaysHide,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorConfig {
    #[serde(default)]
    pub horizontal_policy: IndicatorPolicy,
    #[serde(default)]
    pub vertical_policy: IndicatorPolicy,
    /// Indicator thickness across the track
    #[serde(default = "default_indicator_thickness")]
    pub thickness: u32,
    /// Shortest indicator length along the track
    #[serde(default = "default_indicator_min_length")]
    pub min_length: u32,
    /// Gap kept at both ends of the track
    #[serde(default = "default_indicator_margin")]
    pub margin: u32,
    /// Fade-out duration once scrolling stops
    #[serde(default = "default_fade_time")]
    pub fade_time_ms: u64,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            horizontal_policy: IndicatorPolicy::default(),
            vertical_policy: IndicatorPolicy::default(),
            thickness: default_indicator_thickness(),
            min_length: default_indicator_min_length(),
            margin: default_indicator_margin(),
            fade_time_ms: default_fade_time(),
        }
    }
}

/// Which axes may overshoot their scroll range during a drag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlurPolicy {
    #[default]
    Both,
    HorizontalOnly,
    VerticalOnly,
    None,
}

impl BlurPolicy {
    pub fn allows(&self, axis: crate::Axis) -> bool {
        use crate::Axis;
        matches!(
            (self, axis),
            (BlurPolicy::Both, _)
                | (BlurPolicy::HorizontalOnly, Axis::Horizontal)
                | (BlurPolicy::VerticalOnly, Axis::Vertical)
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlurConfig {
    #[serde(default)]
    pub policy: BlurPolicy,
    /// Pressure reported at full overshoot
    #[serde(default = "default_max_pressure")]
    pub max_pressure: f64,
    /// Farthest the content may be dragged past an edge
    #[serde(default = "default_max_overshoot")]
    pub max_overshoot: u32,
    /// Duration of the snap-back once the finger lifts
    #[serde(default = "default_decay_time")]
    pub decay_time_ms: u64,
}

impl Default for BlurConfig {
    fn default() -> Self {
        Self {
            policy: BlurPolicy::default(),
            max_pressure: default_max_pressure(),
            max_overshoot: default_max_overshoot(),
            decay_time_ms: default_decay_time(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_frame_rate() -> u32 {
    60
}

fn default_finger_extent() -> u32 {
    40
}

fn default_scroll_time() -> u64 {
    3000
}

fn default_max_pause() -> u64 {
    300
}

fn default_jitter_threshold() -> u32 {
    5
}

fn default_indicator_thickness() -> u32 {
    3
}

fn default_indicator_min_length() -> u32 {
    10
}

fn default_indicator_margin() -> u32 {
    2
}

fn default_fade_time() -> u64 {
    300
}

fn default_max_pressure() -> f64 {
    1.0
}

fn default_max_overshoot() -> u32 {
    80
}

fn default_decay_time() -> u64 {
    300
}

impl KineticConfig {
    /// Load configuration from the default path or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from an explicit file
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> crate::Result<Self> {
        let mut config: Self =
            toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))?;
        config.sanitize();
        Ok(config)
    }

    pub fn to_toml(&self) -> crate::Result<String> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Get the configuration file path
    /// Always uses ~/.config/kinetic/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("kinetic")
            .join("config.toml")
    }

    /// Replace values the engine would reject at runtime with their defaults
    fn sanitize(&mut self) {
        if self.scroller.scroll_time_ms == 0 {
            tracing::warn!(
                "scroller.scroll_time_ms must be positive, using {}",
                default_scroll_time()
            );
            self.scroller.scroll_time_ms = default_scroll_time();
        }
        if self.general.frame_rate == 0 {
            tracing::warn!(
                "general.frame_rate must be positive, using {}",
                default_frame_rate()
            );
            self.general.frame_rate = default_frame_rate();
        }
        if !self.blur.max_pressure.is_finite() || self.blur.max_pressure < 0.0 {
            tracing::warn!(
                "blur.max_pressure must be a non-negative number, using {}",
                default_max_pressure()
            );
            self.blur.max_pressure = default_max_pressure();
        }
    }
}
