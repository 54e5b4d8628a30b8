//! SQLite-backed local store.

use std::path::{Path, PathBuf};

use rusqlite::{params, Connection, OptionalExtension};
use tracing::{debug, info};

use super::LocalStore;
use crate::error::{Error, Result};

/// SQL statement to create the key-value table.
const CREATE_STORE_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS store (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
)
";

/// Durable [`LocalStore`] backed by a single-table `SQLite` database.
///
/// Stands in for the browser's local storage when the cores run
/// outside a browser. One database holds exactly one user's state;
/// there is no multi-profile support.
#[derive(Debug)]
pub struct SqliteStore {
    /// Path to the database file.
    path: PathBuf,
    /// Database connection.
    conn: Connection,
}

impl SqliteStore {
    /// Open or create a store database at the given path.
    ///
    /// Creates the parent directories and database file if they don't
    /// exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or the schema
    /// cannot be created.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        // Create parent directories if needed
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|source| Error::DirectoryCreate {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        debug!("Opening store at {}", path.display());
        let conn = Connection::open(&path).map_err(|source| Error::StoreOpen {
            path: path.clone(),
            source,
        })?;

        // Enable WAL mode for better concurrent read performance
        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA synchronous=NORMAL;")?;
        conn.execute(CREATE_STORE_TABLE, [])?;

        info!("Store opened at {}", path.display());
        Ok(Self { path, conn })
    }

    /// Create an in-memory store instance for testing.
    ///
    /// # Errors
    ///
    /// Returns an error if the in-memory database cannot be created.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(|source| Error::StoreOpen {
            path: PathBuf::from(":memory:"),
            source,
        })?;
        conn.execute(CREATE_STORE_TABLE, [])?;

        Ok(Self {
            path: PathBuf::from(":memory:"),
            conn,
        })
    }

    /// Get the path to the database file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Escape `%`, `_`, and the escape character itself so a prefix can be
/// used literally in a LIKE pattern. The progress-marker prefix ends
/// in `_`, which LIKE would otherwise treat as a single-char wildcard.
fn escape_like(prefix: &str) -> String {
    let mut escaped = String::with_capacity(prefix.len());
    for c in prefix.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

impl LocalStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM store WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO store (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<bool> {
        let affected = self.conn.execute("DELETE FROM store WHERE key = ?1", [key])?;
        Ok(affected > 0)
    }

    fn remove_prefix(&mut self, prefix: &str) -> Result<usize> {
        let pattern = format!("{}%", escape_like(prefix));
        let affected = self.conn.execute(
            r"DELETE FROM store WHERE key LIKE ?1 ESCAPE '\'",
            [pattern],
        )?;
        if affected > 0 {
            debug!("Removed {} keys with prefix {}", affected, prefix);
        }
        Ok(affected)
    }

    fn len(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM store", [], |row| row.get(0))?;
        Ok(usize::try_from(count).unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_store() -> SqliteStore {
        SqliteStore::open_in_memory().expect("failed to create test store")
    }

    #[test]
    fn test_open_in_memory() {
        assert!(SqliteStore::open_in_memory().is_ok());
    }

    #[test]
    fn test_set_and_get() {
        let mut store = create_test_store();
        store.set("userName", "Riya").unwrap();

        assert_eq!(store.get("userName").unwrap(), Some("Riya".to_string()));
    }

    #[test]
    fn test_get_absent_key() {
        let store = create_test_store();
        assert_eq!(store.get("userName").unwrap(), None);
    }

    #[test]
    fn test_set_overwrites() {
        let mut store = create_test_store();
        store.set("userName", "Riya").unwrap();
        store.set("userName", "Karan").unwrap();

        assert_eq!(store.get("userName").unwrap(), Some("Karan".to_string()));
        assert_eq!(store.len().unwrap(), 1);
    }

    #[test]
    fn test_remove() {
        let mut store = create_test_store();
        store.set("enrollments", "[]").unwrap();

        assert!(store.remove("enrollments").unwrap());
        assert_eq!(store.get("enrollments").unwrap(), None);
        assert!(!store.remove("enrollments").unwrap());
    }

    #[test]
    fn test_remove_prefix() {
        let mut store = create_test_store();
        store.set("completedLessons_webdev", "[0,1]").unwrap();
        store.set("completedLessons_python", "[2]").unwrap();
        store.set("userName", "Riya").unwrap();

        let removed = store.remove_prefix("completedLessons_").unwrap();
        assert_eq!(removed, 2);
        assert_eq!(store.get("userName").unwrap(), Some("Riya".to_string()));
    }

    #[test]
    fn test_remove_prefix_underscore_is_literal() {
        let mut store = create_test_store();
        // Without escaping, LIKE would treat `_` as a single-char
        // wildcard and also match this key.
        store.set("completedXLessons", "[0]").unwrap();
        store.set("completedLessons_webdev", "[0]").unwrap();

        let removed = store.remove_prefix("completedLessons_").unwrap();
        assert_eq!(removed, 1);
        assert!(store.get("completedXLessons").unwrap().is_some());
    }

    #[test]
    fn test_remove_prefix_percent_is_literal() {
        let mut store = create_test_store();
        store.set("a%b", "1").unwrap();
        store.set("axb", "2").unwrap();

        let removed = store.remove_prefix("a%").unwrap();
        assert_eq!(removed, 1);
        assert!(store.get("axb").unwrap().is_some());
    }

    #[test]
    fn test_len_and_is_empty() {
        let mut store = create_test_store();
        assert!(store.is_empty().unwrap());

        store.set("userName", "Riya").unwrap();
        store.set("enrollments", "[]").unwrap();
        assert_eq!(store.len().unwrap(), 2);
        assert!(!store.is_empty().unwrap());
    }

    #[test]
    fn test_escape_like() {
        assert_eq!(escape_like("completedLessons_"), "completedLessons\\_");
        assert_eq!(escape_like("100%"), "100\\%");
        assert_eq!(escape_like("a\\b"), "a\\\\b");
        assert_eq!(escape_like("plain"), "plain");
    }

    #[test]
    fn test_unicode_values() {
        let mut store = create_test_store();
        store.set("userName", "Priya ✨").unwrap();
        assert_eq!(store.get("userName").unwrap(), Some("Priya ✨".to_string()));
    }

    #[test]
    fn test_open_file_based() {
        let temp_dir = std::env::temp_dir();
        let db_path = temp_dir.join(format!("freeskillz_store_test_{}.db", std::process::id()));

        let mut store = SqliteStore::open(&db_path).unwrap();
        store.set("userName", "Riya").unwrap();
        assert_eq!(store.path(), db_path);
        drop(store);

        // State survives reopening
        let store = SqliteStore::open(&db_path).unwrap();
        assert_eq!(store.get("userName").unwrap(), Some("Riya".to_string()));

        drop(store);
        let _ = std::fs::remove_file(&db_path);
        let _ = std::fs::remove_file(db_path.with_extension("db-wal"));
        let _ = std::fs::remove_file(db_path.with_extension("db-shm"));
    }

    #[test]
    fn test_open_creates_parent_dirs() {
        let temp_dir = std::env::temp_dir();
        let nested_path = temp_dir.join(format!(
            "freeskillz_store_test_{}/nested/store.sqlite",
            std::process::id()
        ));

        if let Some(parent) = nested_path.parent() {
            let _ = std::fs::remove_dir_all(parent);
        }

        let store = SqliteStore::open(&nested_path).unwrap();
        assert!(nested_path.exists());

        drop(store);
        if let Some(parent) = nested_path.parent() {
            let _ = std::fs::remove_dir_all(parent.parent().unwrap());
        }
    }
}
