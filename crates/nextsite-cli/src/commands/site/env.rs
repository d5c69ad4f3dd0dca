//! Environment variables command implementation.

use anyhow::{Context, Result};
use clap::Args;

use nextsite_file::FileSiteStorage;

use super::load_site;

#[derive(Args, Debug)]
pub struct EnvArgs {
    /// Machine name of the site
    pub id: String,

    /// Base URL of the CMS the front-end fetches content from
    #[arg(long)]
    pub cms_base_url: String,
}

pub fn run(args: EnvArgs, storage: &FileSiteStorage) -> Result<()> {
    let site = load_site(storage, &args.id)?;

    let vars = site
        .environment_variables(&args.cms_base_url)
        .context("Invalid CMS base URL")?;

    for (name, value) in vars {
        println!("{}={}", name, value);
    }

    Ok(())
}
