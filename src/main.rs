//! Lytics CLI
//!
//! Usage: lytics [OPTIONS] <COMMAND>
//!
//! Commands:
//!   watch   Preview .lql queries against sample files as they change

mod cli;
mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use commands::watch::{cmd_watch, WatchOverrides};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Watch { path } => cmd_watch(
            &path,
            WatchOverrides {
                json: cli.json,
                color: cli.color,
                key: cli.key,
                api_url: cli.api_url,
            },
        ),
    }
}

/// Logs go to stderr; `RUST_LOG` wins over `-v`
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
