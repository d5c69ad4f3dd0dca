//! next-site - CLI tool for Next.js site configuration.
//!
//! This is a thin wrapper over `nextsite-core` and `nextsite-file`, used to
//! manage site settings and to inspect the preview and live links a CMS
//! would hand to editors.

mod cli;
mod commands;
mod output;
mod storage;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cli::{Cli, Commands};
use commands::{link, site};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose, cli.json_logs);

    let storage = storage::open(cli.data_dir.as_deref())?;

    match cli.command {
        Commands::Site(site_cmd) => site::handle(site_cmd, &storage),
        Commands::Link(link_cmd) => link::handle(link_cmd, &storage),
    }
}

fn init_logging(verbosity: u8, json: bool) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .init();
    }
}
