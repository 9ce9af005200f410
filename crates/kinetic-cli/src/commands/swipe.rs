use std::time::Duration;

use anyhow::Result;

use kinetic_core::{KineticConfig, Point};
use kinetic_scroll::{trace, TargetId};

use super::replay::{self, HostOptions};

pub async fn run(
    config: &KineticConfig,
    dx: i32,
    dy: i32,
    duration_ms: u64,
    steps: u32,
    host: HostOptions,
) -> Result<()> {
    // Start from the middle of the viewport
    let start = Point::new(host.viewport.width / 2, host.viewport.height / 2);
    let events = trace::swipe(
        TargetId::default(),
        start,
        Point::new(dx, dy),
        Duration::from_millis(duration_ms),
        steps,
    );

    replay::drive(config, events, &host).await
}
