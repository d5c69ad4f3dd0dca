//! Delete site command implementation.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Args;

use nextsite_file::FileSiteStorage;

use super::load_site;
use crate::output;

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Machine name of the site
    pub id: String,

    /// Skip confirmation prompt
    #[arg(long, short = 'f')]
    pub force: bool,
}

pub fn run(args: DeleteArgs, storage: &FileSiteStorage) -> Result<()> {
    let site = load_site(storage, &args.id)?;

    // Confirm unless --force
    if !args.force {
        eprint!("This will delete site {} ({}). Continue? [y/N] ", site.id(), site.label());
        io::stderr().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        if !input.trim().eq_ignore_ascii_case("y") {
            eprintln!("Aborted.");
            return Ok(());
        }
    }

    storage.delete(site.id()).context("Failed to delete site")?;

    output::success(&format!("Site {} deleted", site.id()));

    Ok(())
}
