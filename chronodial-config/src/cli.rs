use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::util::parse_duration;

/// Command-line overrides. Anything set here wins over the environment and
/// the timeline document.
#[derive(Debug, Clone, Default, Parser)]
#[command(
    name = "chronodial",
    version,
    about = "Circular period selector with an animated event carousel"
)]
pub struct Cli {
    /// Timeline document (.toml or .json)
    #[arg(long, value_name = "PATH")]
    pub timeline: Option<PathBuf>,

    /// Heading shown above the selector
    #[arg(long)]
    pub title: Option<String>,

    /// Duration shared by every transition tween (e.g. "800ms", "1s"; bare
    /// numbers are milliseconds)
    #[arg(long, value_name = "DURATION", value_parser = parse_duration)]
    pub duration: Option<Duration>,

    /// Pause before the event carousel fades back in
    #[arg(long = "fade-pause", value_name = "DURATION", value_parser = parse_duration)]
    pub fade_pause: Option<Duration>,

    /// Extra .env file to read before resolving environment overrides
    #[arg(long = "env-file", value_name = "PATH")]
    pub env_file: Option<PathBuf>,
}
