//! Elastic edge overshoot and the blur pressure derived from it

use serde::Serialize;

use kinetic_core::BlurConfig;

/// Edge of the scroll range an overshoot happened at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Edge {
    /// Before offset 0 (top or left)
    Leading,
    /// Past the maximum offset (bottom or right)
    Trailing,
}

/// Edge effect state for one axis
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct BlurState {
    pub edge: Option<Edge>,
    /// In `[0, max_pressure]`, proportional to overshoot
    pub pressure: f64,
}

impl BlurState {
    /// Derive the edge effect from a signed overshoot
    pub fn from_overshoot(overshoot: i32, config: &BlurConfig) -> Self {
        let edge = match overshoot {
            0 => None,
            o if o < 0 => Some(Edge::Leading),
            _ => Some(Edge::Trailing),
        };

        let pressure = if overshoot == 0 || config.max_overshoot == 0 {
            0.0
        } else {
            let max_pressure = config.max_pressure.max(0.0);
            (overshoot.unsigned_abs() as f64 / config.max_overshoot as f64 * max_pressure)
                .min(max_pressure)
        };

        Self { edge, pressure }
    }

    pub fn is_active(&self) -> bool {
        self.edge.is_some()
    }
}

/// Apply a drag delta to one axis, letting it run past the range by up to `limit`
///
/// `offset` is in `[0, max]`; the returned offset is too. Any part of the
/// movement beyond the range lands in the returned overshoot, capped at
/// `limit` in magnitude. A `limit` of zero hard-clamps.
pub fn drag_axis(offset: i32, overshoot: i32, max: i32, delta: i32, limit: u32) -> (i32, i32) {
    let max = max.max(0);
    let limit = limit.min(i32::MAX as u32) as i32;
    let raw = offset.saturating_add(overshoot).saturating_add(delta);

    if raw < 0 {
        (0, raw.max(-limit))
    } else if raw > max {
        (max, (raw - max).min(limit))
    } else {
        (raw, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pressure_is_proportional_and_capped() {
        let config = BlurConfig {
            max_pressure: 2.0,
            max_overshoot: 80,
            ..Default::default()
        };
        let half = BlurState::from_overshoot(-40, &config);
        assert_eq!(half.edge, Some(Edge::Leading));
        assert!((half.pressure - 1.0).abs() < 1e-9);

        let full = BlurState::from_overshoot(500, &config);
        assert_eq!(full.edge, Some(Edge::Trailing));
        assert_eq!(full.pressure, 2.0);

        assert!(!BlurState::from_overshoot(0, &config).is_active());
    }

    #[test]
    fn test_drag_inside_range() {
        assert_eq!(drag_axis(100, 0, 800, 50, 80), (150, 0));
    }

    #[test]
    fn test_drag_past_edges_overshoots() {
        assert_eq!(drag_axis(10, 0, 800, -30, 80), (0, -20));
        assert_eq!(drag_axis(790, 0, 800, 30, 80), (800, 20));
        assert_eq!(drag_axis(0, -70, 800, -30, 80), (0, -80));
    }

    #[test]
    fn test_drag_back_consumes_overshoot_first() {
        assert_eq!(drag_axis(0, -20, 800, 15, 80), (0, -5));
        assert_eq!(drag_axis(0, -20, 800, 50, 80), (30, 0));
    }

    #[test]
    fn test_zero_limit_hard_clamps() {
        assert_eq!(drag_axis(10, 0, 800, -30, 0), (0, 0));
        assert_eq!(drag_axis(0, 0, -5, 10, 80), (0, 10));
    }
}
