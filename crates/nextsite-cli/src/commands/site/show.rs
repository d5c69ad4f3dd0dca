//! Show site command implementation.

use anyhow::{Context, Result};
use chrono::SecondsFormat;
use clap::Args;

use nextsite_core::SiteId;
use nextsite_file::FileSiteStorage;

use crate::output;

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Machine name of the site
    pub id: String,

    /// Print the preview secret instead of masking it
    #[arg(long)]
    pub reveal_secret: bool,

    /// Print the exported configuration as JSON (includes the secret)
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: ShowArgs, storage: &FileSiteStorage) -> Result<()> {
    let id = SiteId::new(&args.id).context("Invalid site id")?;
    let stored = storage
        .load_stored(&id)
        .context("Failed to load site")?
        .with_context(|| format!("Site '{}' not found. Run 'next-site site list'.", id))?;

    if args.json {
        return output::json_pretty(&stored.site);
    }

    let site = &stored.site;
    let secret = site.preview_secret().map(|secret| {
        if args.reveal_secret {
            secret.expose().to_string()
        } else {
            "********".to_string()
        }
    });

    output::field("ID", site.id().as_str());
    output::field("UUID", &site.uuid().to_string());
    output::field("Label", site.label());
    output::optional_field("Base URL", site.base_url());
    output::optional_field("Preview URL", site.preview_url());
    output::optional_field("Preview secret", secret.as_deref());
    output::field("Created", &stored.created_at.to_rfc3339_opts(SecondsFormat::Secs, true));
    output::field("Changed", &stored.changed_at.to_rfc3339_opts(SecondsFormat::Secs, true));

    Ok(())
}
