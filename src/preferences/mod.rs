//! # Preferences
//!
//! A tiny synchronous key-value capability. The shell only ever reads and
//! writes string values under fixed keys, so the trait stays that small.

pub mod file_store;

pub use file_store::JsonFileStore;

use crate::error::Result;
use std::collections::HashMap;

pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Process-local store with no backing file.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.entries.insert(key.to_string(), value.to_string());
        store
    }

    /// Number of successful `set` calls since creation.
    pub fn write_count(&self) -> usize {
        self.writes
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_overwrites_single_value() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("theme"), None);

        store.set("theme", "dark").unwrap();
        store.set("theme", "light").unwrap();

        assert_eq!(store.get("theme").as_deref(), Some("light"));
        assert_eq!(store.write_count(), 2);
    }
}
