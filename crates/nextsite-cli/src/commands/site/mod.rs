//! Site subcommand implementations.

mod add;
mod delete;
mod edit;
mod env;
mod list;
mod show;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use nextsite_core::{NextSite, SiteId};
use nextsite_file::FileSiteStorage;

#[derive(Args, Debug)]
pub struct SiteCommand {
    #[command(subcommand)]
    pub command: SiteSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum SiteSubcommand {
    /// Add a new site
    Add(add::AddArgs),

    /// Change settings of an existing site
    Edit(edit::EditArgs),

    /// Delete a site
    Delete(delete::DeleteArgs),

    /// List all sites
    List(list::ListArgs),

    /// Display a site's settings
    Show(show::ShowArgs),

    /// Print the environment variables for a site's front-end
    Env(env::EnvArgs),
}

pub fn handle(cmd: SiteCommand, storage: &FileSiteStorage) -> Result<()> {
    match cmd.command {
        SiteSubcommand::Add(args) => add::run(args, storage),
        SiteSubcommand::Edit(args) => edit::run(args, storage),
        SiteSubcommand::Delete(args) => delete::run(args, storage),
        SiteSubcommand::List(args) => list::run(args, storage),
        SiteSubcommand::Show(args) => show::run(args, storage),
        SiteSubcommand::Env(args) => env::run(args, storage),
    }
}

/// Load a site by id, failing if it does not exist.
pub(crate) fn load_site(storage: &FileSiteStorage, id: &str) -> Result<NextSite> {
    let id = SiteId::new(id).context("Invalid site id")?;
    storage
        .load(&id)
        .context("Failed to load site")?
        .with_context(|| format!("Site '{}' not found. Run 'next-site site list'.", id))
}
