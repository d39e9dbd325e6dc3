// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "orbit-scene")]
#[command(about = "Animated showcase scene driven headless", long_about = None)]
pub struct Cli {
    /// Number of frames to drive before exiting
    #[arg(long, default_value_t = 300)]
    pub frames: u64,

    /// Frame cadence in Hz
    #[arg(long, default_value_t = 60.0)]
    pub fps: f32,

    /// Path to a typeface JSON file for the title text
    #[arg(long)]
    pub typeface: Option<PathBuf>,
}
