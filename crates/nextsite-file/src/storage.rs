//! Filesystem storage for site configuration.
//!
//! Each site is one JSON document at `<root>/next_site/<id>.json`. Writes
//! hold an exclusive lock on `<root>/next_site.lock`. Loaded sites are
//! cached by id for the lifetime of the storage value.

use std::collections::HashMap;
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use fs2::FileExt;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use nextsite_core::error::StorageError;
use nextsite_core::{NextSite, Result, SiteId};

const CONFIG_PREFIX: &str = "next_site";

/// A site together with its storage timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSite {
    /// The site configuration.
    pub site: NextSite,
    /// When the site was created.
    pub created_at: DateTime<Utc>,
    /// When the site was last saved.
    pub changed_at: DateTime<Utc>,
}

/// Filesystem-backed site storage with a per-process cache.
#[derive(Debug, Clone)]
pub struct FileSiteStorage {
    root: PathBuf,
    cache: Arc<Mutex<HashMap<SiteId, StoredSite>>>,
}

/// Exclusive write lock, released on drop.
struct WriteLock(File);

impl Drop for WriteLock {
    fn drop(&mut self) {
        let _ = self.0.unlock();
    }
}

impl FileSiteStorage {
    /// Create storage rooted at the given directory.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            cache: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Get the root directory path.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn sites_dir(&self) -> PathBuf {
        self.root.join(CONFIG_PREFIX)
    }

    fn site_path(&self, id: &SiteId) -> PathBuf {
        self.sites_dir().join(format!("{}.json", id))
    }

    fn lock_path(&self) -> PathBuf {
        self.root.join(format!("{}.lock", CONFIG_PREFIX))
    }

    fn cache(&self) -> MutexGuard<'_, HashMap<SiteId, StoredSite>> {
        // The map stays consistent even if a holder panicked.
        self.cache.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn lock(&self) -> Result<WriteLock> {
        fs::create_dir_all(self.sites_dir())?;

        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(self.lock_path())?;
        file.lock_exclusive()?;

        Ok(WriteLock(file))
    }

    fn read(&self, path: &Path) -> Result<StoredSite> {
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            StorageError::Corrupt {
                path: path.display().to_string(),
                message: e.to_string(),
            }
            .into()
        })
    }

    fn write(&self, stored: &StoredSite) -> Result<()> {
        let path = self.site_path(stored.site.id());
        let content = serde_json::to_string_pretty(stored).map_err(|e| StorageError::Encode {
            id: stored.site.id().to_string(),
            message: e.to_string(),
        })?;

        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, content)?;
        if let Err(err) = fs::rename(&tmp, &path) {
            let _ = fs::remove_file(&tmp);
            return Err(err.into());
        }

        Ok(())
    }

    /// Store a new site.
    ///
    /// # Errors
    ///
    /// Fails with `AlreadyExists` if a site with the same id is stored.
    #[instrument(skip(self, site), fields(id = %site.id()))]
    pub fn create(&self, site: NextSite) -> Result<StoredSite> {
        let _lock = self.lock()?;

        let path = self.site_path(site.id());
        if path.exists() {
            return Err(StorageError::AlreadyExists {
                id: site.id().to_string(),
            }
            .into());
        }

        let now = Utc::now();
        let stored = StoredSite {
            site,
            created_at: now,
            changed_at: now,
        };
        self.write(&stored)?;
        self.cache().insert(stored.site.id().clone(), stored.clone());

        debug!("Created site");

        Ok(stored)
    }

    /// Update an existing site, keeping its creation time.
    ///
    /// # Errors
    ///
    /// Fails with `NotFound` if no site with the id is stored.
    #[instrument(skip(self, site), fields(id = %site.id()))]
    pub fn save(&self, site: NextSite) -> Result<StoredSite> {
        let _lock = self.lock()?;

        let path = self.site_path(site.id());
        if !path.exists() {
            return Err(StorageError::NotFound {
                id: site.id().to_string(),
            }
            .into());
        }

        let existing = self.read(&path)?;
        let stored = StoredSite {
            site,
            created_at: existing.created_at,
            changed_at: Utc::now(),
        };
        self.write(&stored)?;
        self.cache().insert(stored.site.id().clone(), stored.clone());

        debug!("Saved site");

        Ok(stored)
    }

    /// Load a site by id.
    pub fn load(&self, id: &SiteId) -> Result<Option<NextSite>> {
        Ok(self.load_stored(id)?.map(|stored| stored.site))
    }

    /// Load a site and its timestamps by id.
    pub fn load_stored(&self, id: &SiteId) -> Result<Option<StoredSite>> {
        if let Some(stored) = self.cache().get(id) {
            return Ok(Some(stored.clone()));
        }

        let path = self.site_path(id);
        if !path.exists() {
            return Ok(None);
        }

        let stored = self.read(&path)?;
        if stored.site.id() != id {
            return Err(StorageError::Corrupt {
                path: path.display().to_string(),
                message: format!("stored id '{}' does not match file name", stored.site.id()),
            }
            .into());
        }

        self.cache().insert(id.clone(), stored.clone());
        Ok(Some(stored))
    }

    /// Load every stored site, sorted by id.
    pub fn load_multiple(&self) -> Result<Vec<NextSite>> {
        let dir = self.sites_dir();
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut sites = Vec::new();
        for entry in fs::read_dir(&dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }

            let Some(id) = path
                .file_stem()
                .and_then(|stem| stem.to_str())
                .and_then(|stem| SiteId::new(stem).ok())
            else {
                debug!(path = %path.display(), "Skipping file with invalid site id");
                continue;
            };

            if let Some(stored) = self.load_stored(&id)? {
                sites.push(stored.site);
            }
        }

        sites.sort_by(|a, b| a.id().cmp(b.id()));
        Ok(sites)
    }

    /// Delete a site.
    ///
    /// # Errors
    ///
    /// Fails with `NotFound` if no site with the id is stored.
    #[instrument(skip(self))]
    pub fn delete(&self, id: &SiteId) -> Result<()> {
        let _lock = self.lock()?;

        let path = self.site_path(id);
        if !path.exists() {
            return Err(StorageError::NotFound { id: id.to_string() }.into());
        }

        fs::remove_file(&path)?;
        self.cache().remove(id);

        debug!("Deleted site");

        Ok(())
    }

    /// Drop all cached sites so the next load reads from disk.
    pub fn reset_cache(&self) {
        self.cache().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nextsite_core::Error;
    use tempfile::TempDir;

    fn site(id: &str) -> NextSite {
        let mut site = NextSite::new(SiteId::new(id).unwrap(), format!("Site {id}"));
        site.set_base_url("https://site.example")
            .set_preview_url("https://site.example/api/preview")
            .set_preview_secret("s3cr3t");
        site
    }

    fn id(s: &str) -> SiteId {
        SiteId::new(s).unwrap()
    }

    #[test]
    fn create_and_load() {
        let temp = TempDir::new().unwrap();
        let storage = FileSiteStorage::new(temp.path());

        let created = storage.create(site("blog")).unwrap();
        assert_eq!(created.created_at, created.changed_at);
        assert!(temp.path().join("next_site/blog.json").exists());

        let loaded = storage.load(&id("blog")).unwrap().unwrap();
        assert_eq!(loaded, created.site);
        assert_eq!(loaded.preview_secret().unwrap().expose(), "s3cr3t");
    }

    #[test]
    fn load_reads_from_disk_in_fresh_storage() {
        let temp = TempDir::new().unwrap();
        let created = FileSiteStorage::new(temp.path()).create(site("blog")).unwrap();

        let other = FileSiteStorage::new(temp.path());
        assert_eq!(other.load(&id("blog")).unwrap(), Some(created.site));
    }

    #[test]
    fn load_unknown_is_none() {
        let temp = TempDir::new().unwrap();
        let storage = FileSiteStorage::new(temp.path());
        assert!(storage.load(&id("missing")).unwrap().is_none());
    }

    #[test]
    fn create_duplicate_fails() {
        let temp = TempDir::new().unwrap();
        let storage = FileSiteStorage::new(temp.path());
        storage.create(site("blog")).unwrap();

        let err = storage.create(site("blog")).unwrap_err();
        assert!(matches!(err, Error::Storage(StorageError::AlreadyExists { .. })));
    }

    #[test]
    fn save_keeps_uuid_and_created_at() {
        let temp = TempDir::new().unwrap();
        let storage = FileSiteStorage::new(temp.path());
        let created = storage.create(site("blog")).unwrap();

        let mut edited = created.site.clone();
        edited.set_label("Renamed");
        let saved = storage.save(edited).unwrap();

        assert_eq!(saved.created_at, created.created_at);
        assert!(saved.changed_at >= created.changed_at);

        storage.reset_cache();
        let loaded = storage.load(&id("blog")).unwrap().unwrap();
        assert_eq!(loaded.label(), "Renamed");
        assert_eq!(loaded.uuid(), created.site.uuid());
    }

    #[test]
    fn save_unknown_fails() {
        let temp = TempDir::new().unwrap();
        let storage = FileSiteStorage::new(temp.path());

        let err = storage.save(site("blog")).unwrap_err();
        assert!(matches!(err, Error::Storage(StorageError::NotFound { .. })));
    }

    #[test]
    fn load_multiple_sorted() {
        let temp = TempDir::new().unwrap();
        let storage = FileSiteStorage::new(temp.path());
        assert!(storage.load_multiple().unwrap().is_empty());

        storage.create(site("zeta")).unwrap();
        storage.create(site("alpha")).unwrap();
        fs::write(temp.path().join("next_site/notes.txt"), "ignored").unwrap();

        let ids: Vec<_> = storage
            .load_multiple()
            .unwrap()
            .iter()
            .map(|s| s.id().to_string())
            .collect();
        assert_eq!(ids, vec!["alpha", "zeta"]);
    }

    #[test]
    fn delete_evicts_cache() {
        let temp = TempDir::new().unwrap();
        let storage = FileSiteStorage::new(temp.path());
        storage.create(site("blog")).unwrap();
        assert!(storage.load(&id("blog")).unwrap().is_some());

        storage.delete(&id("blog")).unwrap();
        assert!(storage.load(&id("blog")).unwrap().is_none());

        let err = storage.delete(&id("blog")).unwrap_err();
        assert!(matches!(err, Error::Storage(StorageError::NotFound { .. })));
    }

    #[test]
    fn failed_write_leaves_no_temp_file() {
        let temp = TempDir::new().unwrap();
        let storage = FileSiteStorage::new(temp.path());
        // A non-empty directory in place of the site file makes the rename fail.
        fs::create_dir_all(temp.path().join("next_site/blog.json/inner")).unwrap();

        let now = Utc::now();
        let stored = StoredSite {
            site: site("blog"),
            created_at: now,
            changed_at: now,
        };

        let err = storage.write(&stored).unwrap_err();
        assert!(matches!(err, Error::Storage(StorageError::Io { .. })));
        assert!(!temp.path().join("next_site/blog.json.tmp").exists());
    }

    #[test]
    fn corrupt_file_is_reported() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("next_site")).unwrap();
        fs::write(temp.path().join("next_site/blog.json"), "{not json").unwrap();

        let storage = FileSiteStorage::new(temp.path());
        let err = storage.load(&id("blog")).unwrap_err();
        assert!(matches!(err, Error::Storage(StorageError::Corrupt { .. })));
    }

    #[test]
    fn mismatched_id_is_corrupt() {
        let temp = TempDir::new().unwrap();
        let storage = FileSiteStorage::new(temp.path());
        storage.create(site("blog")).unwrap();
        fs::copy(
            temp.path().join("next_site/blog.json"),
            temp.path().join("next_site/other.json"),
        )
        .unwrap();

        let err = storage.load(&id("other")).unwrap_err();
        assert!(matches!(err, Error::Storage(StorageError::Corrupt { .. })));
    }
}
