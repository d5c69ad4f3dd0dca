//! Preview link command implementation.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;

use nextsite_core::{LinkResolver, PreviewContext, PreviewQuery};
use nextsite_file::{FileRegistry, FileSiteStorage};

use super::load_record;
use crate::commands::site::load_site;
use crate::output;

#[derive(Args, Debug)]
pub struct PreviewArgs {
    /// Machine name of the site
    pub site: String,

    /// JSON file describing the content record
    #[arg(long)]
    pub record: PathBuf,

    /// JSON file describing the CMS resource types and routes
    #[arg(long)]
    pub registry: PathBuf,

    /// The record is an unsaved preview
    #[arg(long)]
    pub in_preview: bool,

    /// Print every decoded query parameter of the link as JSON instead of the URL
    #[arg(long)]
    pub explain: bool,
}

pub fn run(args: PreviewArgs, storage: &FileSiteStorage) -> Result<()> {
    let site = load_site(storage, &args.site)?;
    let record = load_record(&args.record)?;
    let registry = FileRegistry::from_path(&args.registry).context("Failed to load registry")?;

    let resolver = LinkResolver::from_host(Arc::new(registry));
    let url = resolver
        .preview_url(&site, &record, PreviewContext::from(args.in_preview))
        .context("Failed to resolve preview link")?;

    if args.explain {
        PreviewQuery::from_url(&url).context("Failed to decode preview link")?;
        let pairs: serde_json::Map<String, serde_json::Value> = url
            .query_pairs()
            .map(|(key, value)| (key.into_owned(), serde_json::Value::String(value.into_owned())))
            .collect();
        return output::json_pretty(&pairs);
    }

    println!("{}", url);

    Ok(())
}
