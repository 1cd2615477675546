//! Browser Storage
//!
//! [`KeyValueStore`] over `window.localStorage`.

use todo_persist::{KeyValueStore, PersistError, PersistResult};

/// `localStorage` of the current origin, resolved on every call
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage(&self) -> PersistResult<web_sys::Storage> {
        let window = web_sys::window().ok_or_else(|| PersistError::Unavailable("no window".into()))?;
        window
            .local_storage()
            .map_err(|e| PersistError::Unavailable(format!("{:?}", e)))?
            .ok_or_else(|| PersistError::Unavailable("localStorage disabled".into()))
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> PersistResult<Option<String>> {
        self.storage()?
            .get_item(key)
            .map_err(|e| PersistError::Storage(format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> PersistResult<()> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| PersistError::Storage(format!("{:?}", e)))
    }
}
