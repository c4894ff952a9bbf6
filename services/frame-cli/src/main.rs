//! Local frame conversion tool.
//!
//! Converts between geographic coordinates and a local planar frame:
//! - Project a LAT,LNG point into anchor-relative meters
//! - Recover LAT,LNG from local meters
//! - Rotate points and measure bearings in the plane
//!
//! Results are printed to stdout as JSON; logs go to stderr.

mod commands;
mod config;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use commands::Command;
use config::FrameConfig;

#[derive(Parser, Debug)]
#[command(name = "local-frame")]
#[command(about = "Convert between geographic coordinates and local planar frames")]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// YAML file with default frame settings
    #[arg(long, env = "FRAME_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Validate inputs and reject polar anchors
    #[arg(long, env = "FRAME_STRICT", global = true)]
    strict: bool,

    /// Log level
    #[arg(long, env = "LOG_LEVEL", default_value = "info", global = true)]
    log_level: String,
}

fn main() -> Result<()> {
    // Load environment from .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Initialize tracing
    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr)
        .json()
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    info!(command = args.command.name(), "Starting local-frame");

    let config = FrameConfig::load(args.config.as_deref())?;
    let strict = args.strict || config.strict;

    let output = commands::execute(&args.command, &config, strict)?;
    println!("{}", serde_json::to_string(&output)?);

    Ok(())
}
