//! Edit site command implementation.

use anyhow::{Context, Result, bail};
use clap::Args;

use nextsite_file::FileSiteStorage;

use super::load_site;
use crate::output;

#[derive(Args, Debug)]
pub struct EditArgs {
    /// Machine name of the site
    pub id: String,

    /// New human-readable name
    #[arg(long)]
    pub label: Option<String>,

    /// New public URL of the front-end
    #[arg(long)]
    pub base_url: Option<String>,

    /// New preview endpoint of the front-end
    #[arg(long)]
    pub preview_url: Option<String>,

    /// New shared secret sent with preview links
    #[arg(long)]
    pub preview_secret: Option<String>,
}

pub fn run(args: EditArgs, storage: &FileSiteStorage) -> Result<()> {
    if args.label.is_none()
        && args.base_url.is_none()
        && args.preview_url.is_none()
        && args.preview_secret.is_none()
    {
        bail!("Nothing to change. Pass at least one of --label, --base-url, --preview-url, --preview-secret");
    }

    let mut site = load_site(storage, &args.id)?;

    if let Some(label) = args.label {
        site.set_label(label);
    }
    if let Some(base_url) = args.base_url {
        site.set_base_url(base_url);
    }
    if let Some(preview_url) = args.preview_url {
        site.set_preview_url(preview_url);
    }
    if let Some(secret) = args.preview_secret {
        site.set_preview_secret(secret);
    }

    storage.save(site).context("Failed to save site")?;

    output::success(&format!("Site {} updated", args.id));

    Ok(())
}
