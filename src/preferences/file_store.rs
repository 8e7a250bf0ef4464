// JSON-file backed preference store, written through on every set

use super::PreferenceStore;
use crate::error::{Result, ShellError};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Opens the store at `path`. A missing file starts empty. A file that
    /// cannot be read or parsed also starts empty and is replaced by the
    /// next successful write.
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let entries = match Self::read_entries(&path) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!("Ignoring unreadable preferences: {}", e);
                BTreeMap::new()
            }
        };
        tracing::debug!("Opened preferences at {} ({} entries)", path.display(), entries.len());
        Self { path, entries }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(path: &Path) -> Result<BTreeMap<String, String>> {
        if !path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(path).map_err(|e| ShellError::io(path, e))?;
        serde_json::from_str(&content).map_err(|e| ShellError::json(path, e))
    }

    fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| ShellError::io(parent, e))?;
        }
        let content =
            serde_json::to_string_pretty(entries).map_err(|e| ShellError::json(&self.path, e))?;
        fs::write(&self.path, content).map_err(|e| ShellError::io(&self.path, e))
    }
}

impl PreferenceStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut next = self.entries.clone();
        next.insert(key.to_string(), value.to_string());
        // Only commit in memory once the file has the new value.
        self.write_entries(&next)?;
        self.entries = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn values_survive_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs").join("preferences.json");

        let mut store = JsonFileStore::open(&path);
        assert_eq!(store.get("theme"), None);
        store.set("theme", "dark").unwrap();

        let reopened = JsonFileStore::open(&path);
        assert_eq!(reopened.get("theme").as_deref(), Some("dark"));
    }

    #[test]
    fn corrupt_file_loads_empty_and_is_replaced() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("preferences.json");
        fs::write(&path, "{ theme: dark").unwrap();

        let mut store = JsonFileStore::open(&path);
        assert_eq!(store.get("theme"), None);

        store.set("theme", "light").unwrap();
        let reopened = JsonFileStore::open(&path);
        assert_eq!(reopened.get("theme").as_deref(), Some("light"));
    }

    #[test]
    fn failed_write_leaves_previous_value() {
        let dir = TempDir::new().unwrap();
        // A directory where the file should be makes the write fail.
        let path = dir.path().join("preferences.json");
        fs::create_dir(&path).unwrap();

        let mut store = JsonFileStore::open(&path);
        let err = store.set("theme", "dark").unwrap_err();

        assert!(matches!(err, ShellError::Io { .. }));
        assert_eq!(store.get("theme"), None);
    }
}
