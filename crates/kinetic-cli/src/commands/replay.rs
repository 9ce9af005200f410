use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Serialize;

use kinetic_core::{Axis, KineticConfig, Point, Size};
use kinetic_scroll::scroll::GeneralConfigExt;
use kinetic_scroll::{
    trace, BlurState, IndicatorState, PointerEvent, ScrollCoordinator, TargetId,
};

/// How the simulated host lays out and paces the scroll area
pub struct HostOptions {
    pub viewport: Size,
    pub content: Size,
    pub json: bool,
    pub realtime: bool,
}

/// Everything the host would paint for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
struct Frame {
    offset: Point,
    position: Point,
    overshoot: Point,
    horizontal: AxisFrame,
    vertical: AxisFrame,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
struct AxisFrame {
    indicator: IndicatorState,
    blur: BlurState,
}

#[derive(Serialize)]
struct FrameLine<'a> {
    time_ms: u128,
    #[serde(flatten)]
    frame: &'a Frame,
}

impl Frame {
    fn capture(area: &ScrollCoordinator) -> Self {
        let axis = |axis| AxisFrame {
            indicator: area.indicator(axis),
            blur: area.blur(axis),
        };
        Self {
            offset: area.offset(),
            position: area.position(),
            overshoot: area.overshoot(),
            horizontal: axis(Axis::Horizontal),
            vertical: axis(Axis::Vertical),
        }
    }
}

pub async fn run(config: &KineticConfig, path: &Path, host: HostOptions) -> Result<()> {
    let events = trace::load_trace(path)
        .with_context(|| format!("Failed to load trace {}", path.display()))?;
    drive(config, events, &host).await
}

/// Feed `events` to a fresh scroll area frame by frame until it comes to rest
pub async fn drive(
    config: &KineticConfig,
    events: Vec<PointerEvent>,
    host: &HostOptions,
) -> Result<()> {
    let mut area = ScrollCoordinator::from_config(TargetId::default(), config);
    area.set_viewport_size(host.viewport);
    area.set_content_size(host.content);

    let step = config.general.tick_duration();
    let mut interval = host.realtime.then(|| tokio::time::interval(step));

    tracing::info!(
        events = events.len(),
        viewport = %host.viewport,
        content = %host.content,
        frame_ms = step.as_millis() as u64,
        "Replaying gesture"
    );

    let mut pending = events.into_iter().peekable();
    let mut now = Duration::ZERO;
    let mut last: Option<Frame> = None;
    let mut frames = 0usize;

    loop {
        if let Some(interval) = interval.as_mut() {
            interval.tick().await;
        }

        while let Some(event) = pending.next_if(|event| event.time <= now) {
            tracing::trace!(kind = ?event.kind, pos = %event.pos, "Delivering event");
            area.handle_event(&event);
        }
        let animating = area.tick(now);

        let frame = Frame::capture(&area);
        if last.as_ref() != Some(&frame) {
            print_frame(now, &frame, host.json)?;
            frames += 1;
            last = Some(frame);
        }

        if pending.peek().is_none() && !animating {
            break;
        }
        now += step;
    }

    tracing::info!(
        frames,
        elapsed_ms = now.as_millis() as u64,
        offset = %area.offset(),
        "Scroll area at rest"
    );
    Ok(())
}

fn print_frame(now: Duration, frame: &Frame, json: bool) -> Result<()> {
    if json {
        let line = FrameLine {
            time_ms: now.as_millis(),
            frame,
        };
        println!("{}", serde_json::to_string(&line)?);
        return Ok(());
    }

    let v = &frame.vertical;
    let h = &frame.horizontal;
    println!(
        "{:>6}ms  offset {:<12} overshoot {:<10} v-bar {}+{} ({:.2})  h-bar {}+{} ({:.2})  blur v={:.2} h={:.2}",
        now.as_millis(),
        frame.offset.to_string(),
        frame.overshoot.to_string(),
        v.indicator.position,
        v.indicator.length,
        v.indicator.opacity,
        h.indicator.position,
        h.indicator.length,
        h.indicator.opacity,
        v.blur.pressure,
        h.blur.pressure,
    );
    Ok(())
}
