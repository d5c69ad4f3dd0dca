//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::link::LinkCommand;
use crate::commands::site::SiteCommand;

/// Manage Next.js sites and resolve preview and live links.
#[derive(Parser, Debug)]
#[command(name = "next-site")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Directory holding site configuration
    #[arg(long, global = true, env = "NEXT_SITE_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Site configuration management
    Site(SiteCommand),

    /// Preview and live link resolution
    Link(LinkCommand),
}
