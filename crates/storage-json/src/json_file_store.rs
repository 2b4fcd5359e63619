use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::RwLock;

use log::error;

use fintrack_core::errors::{Result, StoreError};
use fintrack_core::store::StoreBackend;

/// Persistent key-value backend over a single JSON document.
///
/// The whole document is held in memory and rewritten to disk synchronously
/// on every mutation; `set`/`remove` do not return until the rename is done.
/// Writes go to a sibling temp file first so a crash mid-write leaves the
/// previous document intact.
pub struct JsonFileStore {
    path: PathBuf,
    entries: RwLock<BTreeMap<String, String>>,
}

impl JsonFileStore {
    /// Opens the store at `path`, creating parent directories on first
    /// write. A missing file opens as an empty store; an unreadable or
    /// malformed document is logged and opened as empty rather than
    /// failing open.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(entries) => entries,
                Err(e) => {
                    error!(
                        "Store document {} is malformed, starting empty: {}",
                        path.display(),
                        e
                    );
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(StoreError::Io(e.to_string()).into()),
        };

        Ok(JsonFileStore {
            path,
            entries: RwLock::new(entries),
        })
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn persist(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                fs::create_dir_all(dir).map_err(|e| StoreError::Io(e.to_string()))?;
            }
        }

        let raw = serde_json::to_string_pretty(entries)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, raw).map_err(|e| StoreError::Io(e.to_string()))?;
        fs::rename(&tmp, &self.path).map_err(|e| StoreError::Io(e.to_string()))?;
        Ok(())
    }
}

impl StoreBackend for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self
            .entries
            .read()
            .map_err(|e| StoreError::Internal(e.to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| StoreError::Internal(e.to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        self.persist(&entries)
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| StoreError::Internal(e.to_string()))?;
        if entries.remove(key).is_some() {
            self.persist(&entries)?;
        }
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>> {
        let entries = self
            .entries
            .read()
            .map_err(|e| StoreError::Internal(e.to_string()))?;
        Ok(entries.keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_path(dir: &tempfile::TempDir) -> PathBuf {
        dir.path().join("store.json")
    }

    #[test]
    fn test_missing_file_opens_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(store_path(&dir)).unwrap();
        assert!(store.keys().unwrap().is_empty());
        assert!(store.get("users").unwrap().is_none());
    }

    #[test]
    fn test_round_trip_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = store_path(&dir);

        {
            let store = JsonFileStore::open(&path).unwrap();
            store.set("users", r#"[{"id":"u1"}]"#).unwrap();
            store.set("expenses_u1", "[]").unwrap();
        }

        let reopened = JsonFileStore::open(&path).unwrap();
        assert_eq!(
            reopened.get("users").unwrap().as_deref(),
            Some(r#"[{"id":"u1"}]"#)
        );
        let mut keys = reopened.keys().unwrap();
        keys.sort();
        assert_eq!(keys, vec!["expenses_u1", "users"]);
    }

    #[test]
    fn test_malformed_document_opens_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = store_path(&dir);
        fs::write(&path, "{{{{ not json").unwrap();

        let store = JsonFileStore::open(&path).unwrap();
        assert!(store.keys().unwrap().is_empty());

        // A write repairs the document on disk.
        store.set("users", "[]").unwrap();
        let reopened = JsonFileStore::open(&path).unwrap();
        assert_eq!(reopened.get("users").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_remove_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = store_path(&dir);

        let store = JsonFileStore::open(&path).unwrap();
        store.set("current_user", r#"{"id":"u1"}"#).unwrap();
        store.remove("current_user").unwrap();

        let reopened = JsonFileStore::open(&path).unwrap();
        assert!(reopened.get("current_user").unwrap().is_none());
    }

    #[test]
    fn test_remove_unknown_key_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(store_path(&dir)).unwrap();
        store.remove("never_written").unwrap();
        assert!(store.keys().unwrap().is_empty());
    }

    #[test]
    fn test_set_overwrites_prior_value() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(store_path(&dir)).unwrap();
        store.set("goals_u1", r#"["a","b"]"#).unwrap();
        store.set("goals_u1", r#"["c"]"#).unwrap();
        assert_eq!(store.get("goals_u1").unwrap().as_deref(), Some(r#"["c"]"#));
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let dir = tempfile::tempdir().unwrap();
        let path = store_path(&dir);
        let store = JsonFileStore::open(&path).unwrap();
        store.set("users", "[]").unwrap();

        let leftovers: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path() != path)
            .collect();
        assert!(leftovers.is_empty());
    }
}
