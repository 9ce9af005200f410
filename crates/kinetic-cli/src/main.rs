use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, reload, util::SubscriberInitExt, EnvFilter};

use kinetic_core::{KineticConfig, Size};

mod commands;

/// Log level in effect until the configuration is loaded
const DEFAULT_LOG_LEVEL: &str = "info";

/// `RUST_LOG` wins over the configured level
fn log_directives(rust_log: Option<&str>, configured: &str) -> String {
    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .unwrap_or(configured)
        .to_string()
}

#[derive(Parser)]
#[command(name = "kinetic")]
#[command(author, version, about = "Replay pointer gestures through the kinetic scroll engine")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (defaults to ~/.config/kinetic/config.toml)
    #[arg(short = 'c', long = "config", global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a recorded pointer trace (JSON array of events)
    Replay {
        /// Trace file
        trace: PathBuf,
        #[command(flatten)]
        host: HostArgs,
    },
    /// Synthesize a straight swipe and replay it
    Swipe {
        /// Horizontal finger travel
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        dx: i32,
        /// Vertical finger travel
        #[arg(long, default_value_t = -200, allow_hyphen_values = true)]
        dy: i32,
        /// Time from press to release
        #[arg(long, default_value_t = 150)]
        duration_ms: u64,
        /// Number of move events
        #[arg(long, default_value_t = 8)]
        steps: u32,
        #[command(flatten)]
        host: HostArgs,
    },
    /// Show the effective configuration
    Config {
        /// Print only the configuration file path
        #[arg(long)]
        path: bool,
    },
}

/// Geometry and pacing of the simulated host
#[derive(Args)]
struct HostArgs {
    /// Viewport size as WIDTHxHEIGHT
    #[arg(long, default_value = "320x480")]
    viewport: Size,
    /// Content size as WIDTHxHEIGHT
    #[arg(long, default_value = "320x4000")]
    content: Size,
    /// Print frames as JSON lines
    #[arg(long)]
    json: bool,
    /// Pace frames in wall-clock time instead of virtual time
    #[arg(long)]
    realtime: bool,
}

impl From<HostArgs> for commands::replay::HostOptions {
    fn from(args: HostArgs) -> Self {
        Self {
            viewport: args.viewport,
            content: args.content,
            json: args.json,
            realtime: args.realtime,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; the configured level replaces the startup filter once loaded
    let rust_log = std::env::var("RUST_LOG").ok();
    let (filter, filter_handle) = reload::Layer::new(EnvFilter::new(log_directives(
        rust_log.as_deref(),
        DEFAULT_LOG_LEVEL,
    )));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    // Load configuration
    let config = match &cli.config {
        Some(path) => KineticConfig::load_from(path)?,
        None => KineticConfig::load()?,
    };
    filter_handle.reload(EnvFilter::new(log_directives(
        rust_log.as_deref(),
        &config.general.log_level,
    )))?;

    match cli.command {
        Commands::Replay { trace, host } => {
            commands::replay::run(&config, &trace, host.into()).await
        }
        Commands::Swipe {
            dx,
            dy,
            duration_ms,
            steps,
            host,
        } => commands::swipe::run(&config, dx, dy, duration_ms, steps, host.into()).await,
        Commands::Config { path } => {
            let path = path.then(|| cli.config.unwrap_or_else(KineticConfig::config_path));
            commands::config::run(&config, path)
        }
    }
}
