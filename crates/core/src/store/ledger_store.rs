use std::sync::Arc;

use log::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::Result;
use crate::store::store_traits::StoreBackend;

/// Typed facade over a raw [`StoreBackend`].
///
/// Collections live under string keys as JSON arrays; single objects (the
/// session slot, settings) as JSON objects. An absent key reads as the empty
/// collection. A malformed payload also reads as empty: the payload is
/// logged and discarded, and the next successful write repairs the slot.
#[derive(Clone)]
pub struct LedgerStore {
    backend: Arc<dyn StoreBackend>,
}

impl LedgerStore {
    pub fn new(backend: Arc<dyn StoreBackend>) -> Self {
        LedgerStore { backend }
    }

    /// Builds a per-user key, e.g. `accounts_<userId>`.
    pub fn user_key(name: &str, user_id: &str) -> String {
        format!("{}_{}", name, user_id)
    }

    pub fn get_collection<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>> {
        match self.backend.get(key)? {
            None => Ok(Vec::new()),
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(items) => Ok(items),
                Err(e) => {
                    warn!("Discarding malformed payload under key '{}': {}", key, e);
                    Ok(Vec::new())
                }
            },
        }
    }

    pub fn put_collection<T: Serialize>(&self, key: &str, items: &[T]) -> Result<()> {
        let raw = serde_json::to_string(items)?;
        self.backend.set(key, &raw)
    }

    pub fn get_object<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.backend.get(key)? {
            None => Ok(None),
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(value) => Ok(Some(value)),
                Err(e) => {
                    warn!("Discarding malformed payload under key '{}': {}", key, e);
                    Ok(None)
                }
            },
        }
    }

    pub fn put_object<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value)?;
        self.backend.set(key, &raw)
    }

    pub fn delete(&self, key: &str) -> Result<()> {
        self.backend.remove(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory_store::MemoryStore;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Entry {
        id: String,
        label: String,
    }

    fn make_store() -> LedgerStore {
        LedgerStore::new(Arc::new(MemoryStore::new()))
    }

    #[test]
    fn test_absent_key_reads_as_empty() {
        let store = make_store();
        let items: Vec<Entry> = store.get_collection("expenses_u1").unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn test_collection_round_trip() {
        let store = make_store();
        let items = vec![
            Entry {
                id: "1".to_string(),
                label: "groceries".to_string(),
            },
            Entry {
                id: "2".to_string(),
                label: "rent".to_string(),
            },
        ];
        store.put_collection("expenses_u1", &items).unwrap();
        let loaded: Vec<Entry> = store.get_collection("expenses_u1").unwrap();
        assert_eq!(loaded, items);
    }

    #[test]
    fn test_malformed_payload_reads_as_empty_and_write_repairs() {
        let backend = Arc::new(MemoryStore::new());
        backend.set("expenses_u1", "{not json").unwrap();
        let store = LedgerStore::new(backend);

        let items: Vec<Entry> = store.get_collection("expenses_u1").unwrap();
        assert!(items.is_empty());

        let repaired = vec![Entry {
            id: "1".to_string(),
            label: "coffee".to_string(),
        }];
        store.put_collection("expenses_u1", &repaired).unwrap();
        let loaded: Vec<Entry> = store.get_collection("expenses_u1").unwrap();
        assert_eq!(loaded, repaired);
    }

    #[test]
    fn test_object_slot() {
        let store = make_store();
        assert!(store.get_object::<Entry>("current_user").unwrap().is_none());

        let session = Entry {
            id: "u1".to_string(),
            label: "alice".to_string(),
        };
        store.put_object("current_user", &session).unwrap();
        assert_eq!(store.get_object("current_user").unwrap(), Some(session));

        store.delete("current_user").unwrap();
        assert!(store.get_object::<Entry>("current_user").unwrap().is_none());
    }

    #[test]
    fn test_user_key_format() {
        assert_eq!(LedgerStore::user_key("accounts", "u42"), "accounts_u42");
    }

    #[test]
    fn test_set_overwrites_wholesale() {
        let store = make_store();
        let first = vec![
            Entry {
                id: "1".to_string(),
                label: "a".to_string(),
            },
            Entry {
                id: "2".to_string(),
                label: "b".to_string(),
            },
        ];
        store.put_collection("goals_u1", &first).unwrap();

        let second = vec![Entry {
            id: "3".to_string(),
            label: "c".to_string(),
        }];
        store.put_collection("goals_u1", &second).unwrap();

        let loaded: Vec<Entry> = store.get_collection("goals_u1").unwrap();
        assert_eq!(loaded, second);
    }
}
