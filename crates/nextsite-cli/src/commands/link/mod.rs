//! Link subcommand implementations.

mod live;
mod preview;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use nextsite_core::ContentRecord;
use nextsite_file::FileSiteStorage;

#[derive(Args, Debug)]
pub struct LinkCommand {
    #[command(subcommand)]
    pub command: LinkSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum LinkSubcommand {
    /// Print the signed preview link for a content record
    Preview(preview::PreviewArgs),

    /// Print the public live link for a content record
    Live(live::LiveArgs),
}

pub fn handle(cmd: LinkCommand, storage: &FileSiteStorage) -> Result<()> {
    match cmd.command {
        LinkSubcommand::Preview(args) => preview::run(args, storage),
        LinkSubcommand::Live(args) => live::run(args, storage),
    }
}

/// Read a content record from a JSON file.
fn load_record(path: &Path) -> Result<ContentRecord> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read record file {}", path.display()))?;
    serde_json::from_str(&json).context("Invalid record file")
}
