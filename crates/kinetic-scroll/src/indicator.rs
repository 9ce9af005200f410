//! Scroll indicator geometry
//!
//! Indicators are derived state: everything here is a pure function of the
//! viewport extent, content extent and offset along one axis.

use serde::Serialize;

use kinetic_core::{IndicatorConfig, IndicatorPolicy};

/// Geometry and visibility of one axis' indicator, in track coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct IndicatorState {
    pub visible: bool,
    /// 1.0 while scrolling, fading to 0.0 afterwards
    pub opacity: f64,
    pub thickness: i32,
    /// Length along the track
    pub length: i32,
    /// Start of the indicator along the track
    pub position: i32,
    /// viewport / content
    pub length_ratio: f64,
    /// offset / scroll range
    pub position_ratio: f64,
}

/// Whether content overflows the viewport along an axis
#[inline]
pub fn is_scrollable(viewport: i32, content: i32) -> bool {
    content.max(0) > viewport.max(0)
}

/// Compute indicator geometry for one axis
///
/// `opacity` is the coordinator's current fade level; visibility follows
/// from it together with the policy and whether the axis can scroll.
pub fn compute(
    viewport: i32,
    content: i32,
    offset: i32,
    policy: IndicatorPolicy,
    opacity: f64,
    config: &IndicatorConfig,
) -> IndicatorState {
    let viewport = viewport.max(0);
    let content = content.max(0);
    let range = (content - viewport).max(0);

    let length_ratio = if content > 0 {
        (viewport as f64 / content as f64).min(1.0)
    } else {
        1.0
    };
    let position_ratio = if range > 0 {
        offset.clamp(0, range) as f64 / range as f64
    } else {
        0.0
    };

    let margin = config.margin.min(i32::MAX as u32) as i32;
    let track = viewport.saturating_sub(margin.saturating_mul(2)).max(0);
    let min_length = (config.min_length as i32).min(track);
    let length = ((track as f64 * length_ratio).round() as i32).clamp(min_length, track);
    let position = margin.saturating_add(((track - length) as f64 * position_ratio).round() as i32);

    let scrollable = is_scrollable(viewport, content);
    let (visible, opacity) = match policy {
        IndicatorPolicy::AlwaysShow => (scrollable, if scrollable { 1.0 } else { 0.0 }),
        IndicatorPolicy::WhileScrolling => {
            let opacity = if scrollable { opacity.clamp(0.0, 1.0) } else { 0.0 };
            (opacity > 0.0, opacity)
        }
        IndicatorPolicy::AlwaysHide => (false, 0.0),
    };

    IndicatorState {
        visible,
        opacity,
        thickness: config.thickness as i32,
        length,
        position,
        length_ratio,
        position_ratio,
    }
}
