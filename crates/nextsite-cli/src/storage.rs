//! Location of the site configuration storage.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use tracing::debug;

use nextsite_file::FileSiteStorage;

/// Get the data directory, preferring an explicit override.
fn data_dir(override_dir: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = override_dir {
        return Ok(dir.to_path_buf());
    }

    let dirs =
        ProjectDirs::from("", "", "next-site").context("Could not determine data directory")?;
    Ok(dirs.data_dir().to_path_buf())
}

/// Open site storage in the data directory, creating it if needed.
pub fn open(override_dir: Option<&Path>) -> Result<FileSiteStorage> {
    let dir = data_dir(override_dir)?;
    fs::create_dir_all(&dir).context("Failed to create data directory")?;

    debug!(dir = %dir.display(), "Using data directory");

    Ok(FileSiteStorage::new(dir))
}
