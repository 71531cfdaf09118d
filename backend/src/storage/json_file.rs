//! # JSON File Store
//!
//! File-backed [`KeyValueStore`] for native tooling and integration tests.
//! Each key is stored as its own file holding the raw JSON blob.
//!
//! ## File Structure
//!
//! ```text
//! data/
//! ├── freelancingHistory.json
//! ├── sellingHistory.json
//! ├── freelancingSourceOptions.json
//! ├── freelancingTypeOptions.json
//! ├── sellingSourceOptions.json
//! ├── sellingTypeOptions.json
//! └── trackerConfig.json          (optional)
//! ```
//!
//! ## Features
//!
//! - Base directory created on construction
//! - Atomic file writes with temp files
//! - Keys restricted to plain file names

use anyhow::{bail, Context, Result};
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

use super::traits::KeyValueStore;

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    base_directory: PathBuf,
}

impl JsonFileStore {
    /// Create a store rooted at `base_directory`, creating it if needed
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_directory = base_directory.as_ref().to_path_buf();
        if !base_directory.exists() {
            fs::create_dir_all(&base_directory).with_context(|| {
                format!("Failed to create data directory {}", base_directory.display())
            })?;
            info!("Created data directory: {}", base_directory.display());
        }
        Ok(Self { base_directory })
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    fn file_path(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty() || key.starts_with('.') || key.contains(['/', '\\']) {
            bail!("Invalid storage key: {:?}", key);
        }
        Ok(self.base_directory.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.file_path(key)?;
        if !path.exists() {
            debug!("No file for key {}", key);
            return Ok(None);
        }
        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Ok(Some(contents))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.file_path(key)?;
        let temp_path = path.with_extension("json.tmp");

        fs::write(&temp_path, value)
            .with_context(|| format!("Failed to write {}", temp_path.display()))?;
        fs::rename(&temp_path, &path)
            .with_context(|| format!("Failed to replace {}", path.display()))?;

        debug!("Wrote {} bytes to {}", value.len(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup_store() -> (JsonFileStore, TempDir) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = JsonFileStore::new(temp_dir.path().join("data")).expect("Failed to create store");
        (store, temp_dir)
    }

    #[test]
    fn test_new_creates_directory() {
        let (store, _temp_dir) = setup_store();
        assert!(store.base_directory().is_dir());
    }

    #[test]
    fn test_set_and_get() {
        let (mut store, _temp_dir) = setup_store();

        assert_eq!(store.get("sellingHistory").unwrap(), None);

        store.set("sellingHistory", "[]").unwrap();
        assert_eq!(store.get("sellingHistory").unwrap().as_deref(), Some("[]"));

        store.set("sellingHistory", "[1]").unwrap();
        assert_eq!(store.get("sellingHistory").unwrap().as_deref(), Some("[1]"));
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let (mut store, _temp_dir) = setup_store();
        store.set("freelancingHistory", "[]").unwrap();

        let names: Vec<String> = fs::read_dir(store.base_directory())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["freelancingHistory.json".to_string()]);
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let (mut store, _temp_dir) = setup_store();

        assert!(store.set("../escape", "x").is_err());
        assert!(store.get("nested/key").is_err());
        assert!(store.set("", "x").is_err());
    }
}
