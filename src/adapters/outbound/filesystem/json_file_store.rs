use crate::ports::outbound::KeyValueStore;
use crate::shared::error::ArchVizError;
use crate::shared::security::{
    validate_not_symlink, validate_regular_file, validate_store_key, validate_value_size,
    MAX_VALUE_SIZE,
};
use crate::shared::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// JsonFileStore adapter: one `<key>.json` file per key in a data directory
///
/// Writes go to a temporary sibling first and are renamed into place, so a
/// crash never leaves a half-written value behind.
#[derive(Debug)]
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    /// Opens (and creates if needed) the data directory
    ///
    /// # Errors
    /// Returns `InvalidDataDir` if the path cannot be created, is not a
    /// directory, or is a symbolic link
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        let invalid = |reason: String| ArchVizError::InvalidDataDir {
            path: root.clone(),
            reason,
        };

        if !root.exists() {
            fs::create_dir_all(&root).map_err(|e| invalid(e.to_string()))?;
            log::info!("Created data directory {}", root.display());
        }
        validate_not_symlink(&root, "data directory").map_err(|e| invalid(e.to_string()))?;
        if !root.is_dir() {
            return Err(invalid("Not a directory".to_string()).into());
        }

        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        validate_store_key(key)?;
        let path = self.path_for(key);
        if fs::symlink_metadata(&path).is_err() {
            return Ok(None);
        }

        let read_error = |details: String| ArchVizError::StoreReadError {
            key: key.to_string(),
            path: path.clone(),
            details,
        };
        validate_regular_file(&path, "stored value").map_err(|e| read_error(e.to_string()))?;
        let size = fs::metadata(&path)
            .map_err(|e| read_error(e.to_string()))?
            .len();
        validate_value_size(size, key, MAX_VALUE_SIZE).map_err(|e| read_error(e.to_string()))?;

        let content = fs::read_to_string(&path).map_err(|e| read_error(e.to_string()))?;
        log::debug!("Read '{}' ({} bytes) from {}", key, size, path.display());
        Ok(Some(content))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        validate_store_key(key)?;
        let path = self.path_for(key);
        let write_error = |details: String| ArchVizError::StoreWriteError {
            key: key.to_string(),
            path: path.clone(),
            details,
        };

        validate_value_size(value.len() as u64, key, MAX_VALUE_SIZE)
            .map_err(|e| write_error(e.to_string()))?;
        if fs::symlink_metadata(&path).is_ok() {
            validate_not_symlink(&path, "write").map_err(|e| write_error(e.to_string()))?;
        }

        let staging = self.root.join(format!(".{}.json.tmp", key));
        fs::write(&staging, value).map_err(|e| write_error(e.to_string()))?;
        fs::rename(&staging, &path).map_err(|e| write_error(e.to_string()))?;
        log::debug!("Wrote '{}' ({} bytes) to {}", key, value.len(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_creates_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("nested").join("archviz");
        let store = JsonFileStore::open(&root).unwrap();
        assert!(store.root().is_dir());
    }

    #[test]
    fn test_open_rejects_file_as_directory() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("plain.txt");
        fs::write(&file, "x").unwrap();

        let err = JsonFileStore::open(&file).unwrap_err();
        assert!(err.to_string().contains("Invalid data directory"));
    }

    #[test]
    fn test_get_absent_key_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::open(temp_dir.path()).unwrap();
        assert_eq!(store.get("components").unwrap(), None);
    }

    #[test]
    fn test_set_then_get() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::open(temp_dir.path()).unwrap();
        store.set("relatedApps", "[]").unwrap();

        assert_eq!(store.get("relatedApps").unwrap().as_deref(), Some("[]"));
        assert!(temp_dir.path().join("relatedApps.json").is_file());
        assert!(!temp_dir.path().join(".relatedApps.json.tmp").exists());
    }

    #[test]
    fn test_set_rejects_value_over_quota() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::open(temp_dir.path()).unwrap();
        let huge = "x".repeat(MAX_VALUE_SIZE as usize + 1);

        let err = store.set("components", &huge).unwrap_err();
        assert!(err.to_string().contains("Quota exceeded"));
        assert_eq!(store.get("components").unwrap(), None);
    }

    #[test]
    fn test_key_cannot_escape_directory() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::open(temp_dir.path()).unwrap();
        assert!(store.set("../outside", "[]").is_err());
        assert!(store.get("a/b").is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_get_rejects_symlinked_value() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::open(temp_dir.path()).unwrap();
        let target = temp_dir.path().join("elsewhere.txt");
        fs::write(&target, "[]").unwrap();
        std::os::unix::fs::symlink(&target, temp_dir.path().join("components.json")).unwrap();

        let err = store.get("components").unwrap_err();
        assert!(err.to_string().contains("symbolic link"));
    }
}
