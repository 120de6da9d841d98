use std::path::PathBuf;

use clap::Parser;

/// Top-level CLI parser for the `parklot` binary.
///
/// The lot itself is driven from the interactive menu; flags only tune
/// logging and where configuration comes from.
#[derive(Debug, Parser)]
#[command(
    name = "parklot",
    version,
    about = "Parking lot console - admit cars, list spaces, bill departures"
)]
pub struct Cli {
    /// Quiet mode (only errors are logged)
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Extra TOML config file, layered above `.parklot/config.toml`
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}
