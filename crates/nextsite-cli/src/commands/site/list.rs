//! List sites command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use serde::Serialize;

use nextsite_file::FileSiteStorage;

use crate::output;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Print one JSON object per site
    #[arg(long)]
    pub json: bool,
}

/// Listing entry; never includes the preview secret.
#[derive(Serialize)]
struct SiteSummary<'a> {
    id: &'a str,
    label: &'a str,
    base_url: Option<&'a str>,
    preview_url: Option<&'a str>,
}

pub fn run(args: ListArgs, storage: &FileSiteStorage) -> Result<()> {
    let sites = storage.load_multiple().context("Failed to list sites")?;

    if sites.is_empty() {
        output::notice("No sites found.");
        return Ok(());
    }

    for site in &sites {
        if args.json {
            output::json(&SiteSummary {
                id: site.id().as_str(),
                label: site.label(),
                base_url: site.base_url(),
                preview_url: site.preview_url(),
            })?;
        } else {
            println!(
                "{}  {}  {}",
                site.id().as_str().bold(),
                site.label(),
                site.base_url().unwrap_or("-").dimmed()
            );
        }
    }

    Ok(())
}
