//! Local key-value store for the FreeSkillz pages.
//!
//! All user state lives in a string-keyed, string-valued store with
//! the shape of browser local storage. This module defines that store
//! as an injected abstraction so the session manager can run against a
//! durable SQLite-backed implementation or an in-memory fake in tests.

mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use crate::error::Result;

/// A string-keyed, string-valued store with the shape of browser
/// local storage.
///
/// All mutations are synchronous read-modify-write operations; each
/// call completes before control returns to the caller, so no lock
/// discipline is required on top of this trait.
pub trait LocalStore: Send {
    /// Get the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the store operation fails.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, overwriting any existing value.
    ///
    /// # Errors
    ///
    /// Returns an error if the store operation fails.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove the value stored under `key`.
    ///
    /// Returns `true` if a value was removed, `false` if the key was
    /// absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the store operation fails.
    fn remove(&mut self, key: &str) -> Result<bool>;

    /// Remove every key that starts with `prefix`.
    ///
    /// Returns the number of keys removed. The prefix is matched
    /// literally; characters like `_` carry no wildcard meaning.
    ///
    /// # Errors
    ///
    /// Returns an error if the store operation fails.
    fn remove_prefix(&mut self, prefix: &str) -> Result<usize>;

    /// Number of keys currently stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the store operation fails.
    fn len(&self) -> Result<usize>;

    /// Check if the store holds no keys.
    ///
    /// # Errors
    ///
    /// Returns an error if the store operation fails.
    fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}
