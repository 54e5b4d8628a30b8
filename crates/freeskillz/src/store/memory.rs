//! In-memory local store for tests.

use std::collections::BTreeMap;

use super::LocalStore;
use crate::error::Result;

/// A [`LocalStore`] backed by an in-memory map.
///
/// Test double for [`super::SqliteStore`]; operations are infallible.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Iterate over the stored keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl LocalStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<bool> {
        Ok(self.entries.remove(key).is_some())
    }

    fn remove_prefix(&mut self, prefix: &str) -> Result<usize> {
        let doomed: Vec<String> = self
            .entries
            .keys()
            .filter(|k| k.starts_with(prefix))
            .cloned()
            .collect();
        for key in &doomed {
            self.entries.remove(key);
        }
        Ok(doomed.len())
    }

    fn len(&self) -> Result<usize> {
        Ok(self.entries.len())
    }
}
