//! localStorage-backed SessionStore for the web platform.

use crate::store::{SessionStore, StoreError};

/// Browser localStorage backend.
///
/// Zero-size; `window.localStorage` is looked up on every operation, so the
/// type stays `Clone + Send + Sync` without holding a JS handle across await
/// points. A disabled or missing localStorage surfaces as
/// [`StoreError::Unavailable`], which the manager degrades to "no session".
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Result<web_sys::Storage, StoreError> {
        web_sys::window()
            .and_then(|window| window.local_storage().ok().flatten())
            .ok_or(StoreError::Unavailable)
    }
}

impl SessionStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Self::storage()?
            .get_item(key)
            .map_err(|_| StoreError::Backend(format!("get_item({key})")))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        // quota-exceeded lands here
        Self::storage()?
            .set_item(key, value)
            .map_err(|_| StoreError::Backend(format!("set_item({key})")))
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        Self::storage()?
            .remove_item(key)
            .map_err(|_| StoreError::Backend(format!("remove_item({key})")))
    }
}
