//! Live link command implementation.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use nextsite_core::PreviewContext;
use nextsite_file::FileSiteStorage;

use super::load_record;
use crate::commands::site::load_site;
use crate::output;

#[derive(Args, Debug)]
pub struct LiveArgs {
    /// Machine name of the site
    pub site: String,

    /// JSON file describing the content record
    #[arg(long)]
    pub record: PathBuf,

    /// The record is an unsaved preview
    #[arg(long)]
    pub in_preview: bool,
}

pub fn run(args: LiveArgs, storage: &FileSiteStorage) -> Result<()> {
    let site = load_site(storage, &args.site)?;
    let record = load_record(&args.record)?;

    let url = nextsite_core::link::live_url(&site, &record, PreviewContext::from(args.in_preview))
        .context("Failed to resolve live link")?;

    match url {
        Some(url) => println!("{}", url),
        None => output::notice("No live link: the record is unpublished or in preview."),
    }

    Ok(())
}
