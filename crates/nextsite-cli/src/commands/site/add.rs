//! Add site command implementation.

use anyhow::{Context, Result};
use clap::Args;

use nextsite_core::{NextSite, PreviewSecret, SiteId};
use nextsite_file::FileSiteStorage;

use crate::output;

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Machine name of the site (lowercase letters, digits, underscores)
    pub id: String,

    /// Human-readable name
    #[arg(long)]
    pub label: String,

    /// Public URL of the front-end (e.g., https://www.example.com)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Preview endpoint of the front-end (e.g., https://www.example.com/api/preview)
    #[arg(long)]
    pub preview_url: Option<String>,

    /// Shared secret sent with preview links
    #[arg(long, conflicts_with = "generate_secret")]
    pub preview_secret: Option<String>,

    /// Generate a random preview secret
    #[arg(long)]
    pub generate_secret: bool,
}

pub fn run(args: AddArgs, storage: &FileSiteStorage) -> Result<()> {
    let id = SiteId::new(&args.id).context("Invalid site id")?;
    let mut site = NextSite::new(id, &args.label);

    if let Some(base_url) = args.base_url {
        site.set_base_url(base_url);
    }
    if let Some(preview_url) = args.preview_url {
        site.set_preview_url(preview_url);
    }
    if args.generate_secret {
        site.set_preview_secret(PreviewSecret::generate().expose());
    } else if let Some(secret) = args.preview_secret {
        site.set_preview_secret(secret);
    }

    let stored = storage.create(site).context("Failed to add site")?;

    output::field("ID", stored.site.id().as_str());
    output::field("UUID", &stored.site.uuid().to_string());
    output::field("Label", stored.site.label());
    output::success("Site added");

    Ok(())
}
