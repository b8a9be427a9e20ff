use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::store::{SessionStore, StoreError};

/// In-memory SessionStore for tests and non-browser fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.lock().unwrap().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.values.lock().unwrap().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_state() {
        let store = MemoryStore::new();
        let alias = store.clone();
        store.set("token", "abc").unwrap();
        assert_eq!(alias.get("token").unwrap().as_deref(), Some("abc"));
        alias.remove("token").unwrap();
        assert_eq!(store.get("token").unwrap(), None);
    }
}
