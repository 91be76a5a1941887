use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Lytics - developer tooling for the Lytics CDP
#[derive(Parser, Debug)]
#[command(name = "lytics")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit one JSON event per line
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// API key (overrides LIOKEY and config files)
    #[arg(long, global = true)]
    pub key: Option<String>,

    /// API base url (overrides LYTICS_API_URL and config files)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Watch a directory of .lql/.json/.csv files and preview query output
    ///
    /// Files sharing a base name belong together: orders.lql is evaluated
    /// against the records in orders.json or orders.csv. Without sample
    /// files, recent events of the query's stream are used.
    Watch {
        /// Directory to watch
        path: PathBuf,
    },
}
