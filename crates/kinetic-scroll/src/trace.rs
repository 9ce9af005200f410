//! Recorded pointer traces
//!
//! A trace is a JSON array of [`PointerEvent`]s in delivery order, e.g.
//! `[{"kind":"press","pos":{"x":0,"y":0},"time":0}, ...]`.

use std::path::Path;
use std::time::Duration;

use kinetic_core::{Error, Point, Result};

use crate::event::{PointerEvent, TargetId};

/// Parse and validate a trace
pub fn parse_trace(json: &str) -> Result<Vec<PointerEvent>> {
    let events: Vec<PointerEvent> = serde_json::from_str(json)?;

    if events.is_empty() {
        return Err(Error::Trace("trace contains no events".to_string()));
    }
    if let Some(pair) = events.windows(2).find(|pair| pair[1].time < pair[0].time) {
        return Err(Error::Trace(format!(
            "events out of order: {}ms after {}ms",
            pair[1].time.as_millis(),
            pair[0].time.as_millis()
        )));
    }

    Ok(events)
}

pub fn load_trace(path: &Path) -> Result<Vec<PointerEvent>> {
    let content = std::fs::read_to_string(path)?;
    let events = parse_trace(&content)?;
    tracing::debug!(path = %path.display(), events = events.len(), "Loaded pointer trace");
    Ok(events)
}

/// Synthesize a straight swipe: press at `start`, `steps` evenly spaced
/// moves reaching `start + delta` after `duration`, then release there
pub fn swipe(
    target: TargetId,
    start: Point,
    delta: Point,
    duration: Duration,
    steps: u32,
) -> Vec<PointerEvent> {
    let steps = steps.max(1);
    let mut events = Vec::with_capacity(steps as usize + 2);
    events.push(PointerEvent::press(target, start, Duration::ZERO));

    for i in 1..=steps {
        let t = i as f64 / steps as f64;
        let pos = start
            + Point::new(
                (delta.x as f64 * t).round() as i32,
                (delta.y as f64 * t).round() as i32,
            );
        let time = duration * i / steps;
        events.push(PointerEvent::moved(target, pos, time));
    }

    events.push(PointerEvent::release(target, start + delta, duration));
    events
}
