// Clap definitions in derive style

use std::path::PathBuf;

#[derive(clap::Parser, Debug)]
#[command(name = "mucat", version, about)]
pub struct Cli {
    /// Set the level of verbosity
    /// -v for info, -vv for debug, -vvv for trace
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Album file the sample album is saved to and reloaded from
    #[arg(short, long, value_name = "PATH", default_value = "album.txt")]
    pub output: PathBuf,

    /// Also export the sorted album as CSV
    #[arg(long, value_name = "PATH")]
    pub csv: Option<PathBuf>,

    /// Lower bound of the duration search, in seconds
    #[arg(long, default_value_t = 190, allow_negative_numbers = true)]
    pub min: i64,

    /// Upper bound of the duration search, in seconds
    #[arg(long, default_value_t = 210, allow_negative_numbers = true)]
    pub max: i64,
}

impl Cli {
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}

impl Default for Cli {
    /// Same values as running with no arguments.
    fn default() -> Self {
        <Cli as clap::Parser>::parse_from(["mucat"])
    }
}
