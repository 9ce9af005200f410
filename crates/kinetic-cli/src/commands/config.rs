use std::path::PathBuf;

use anyhow::Result;

use kinetic_core::KineticConfig;

pub fn run(config: &KineticConfig, path: Option<PathBuf>) -> Result<()> {
    if let Some(path) = path {
        println!("{}", path.display());
        return Ok(());
    }

    let finger = &config.finger;
    println!("# finger unit: {}", finger.unit());
    println!(
        "# effective scroller thresholds: min_velocity={} max_velocity={} drag_start_distance={}",
        config.scroller.min_velocity_for(finger),
        config.scroller.max_velocity_for(finger),
        config.scroller.drag_start_distance_for(finger),
    );
    print!("{}", config.to_toml()?);

    Ok(())
}
