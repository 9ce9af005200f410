pub mod config;
pub mod error;
pub mod geometry;

pub use config::{
    BlurConfig, BlurPolicy, EasingType, FingerGeometry, IndicatorConfig, IndicatorPolicy,
    KineticConfig, ScrollerConfig,
};
pub use error::{Error, Result};
pub use geometry::{Axis, Point, Size};
