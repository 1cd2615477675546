//! Todo List Owner
//!
//! Owns the in-memory list for a page session and mirrors every change
//! into a [`KeyValueStore`] as one JSON array under a fixed key.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{PersistError, PersistResult};
use crate::store::KeyValueStore;

/// Ordered, newest-first todo list backed by a store
#[derive(Debug, Clone)]
pub struct TodoList<T, S> {
    key: String,
    entries: Vec<T>,
    store: S,
}

impl<T, S> TodoList<T, S>
where
    T: Serialize + DeserializeOwned,
    S: KeyValueStore,
{
    /// Restore the list saved under `key`.
    ///
    /// A missing (or empty) value yields an empty list. Malformed data is
    /// returned as [`PersistError::Corrupt`].
    pub fn load(store: S, key: impl Into<String>) -> PersistResult<Self> {
        let key = key.into();
        let entries = match store.get(&key)? {
            Some(raw) if !raw.is_empty() => {
                let entries: Vec<T> = serde_json::from_str(&raw)
                    .map_err(|e| PersistError::Corrupt(format!("{}: {}", key, e)))?;
                log::info!("Loaded {} saved todos", entries.len());
                entries
            }
            _ => {
                log::info!("No saved todos");
                Vec::new()
            }
        };
        Ok(Self { key, entries, store })
    }

    /// Insert `item` at the front and overwrite the stored list
    pub fn prepend(&mut self, item: T) -> PersistResult<()> {
        self.entries.insert(0, item);
        let raw = self.serialize()?;
        self.store.set(&self.key, &raw)?;
        log::debug!("Saved todo under '{}', {} total", self.key, self.entries.len());
        Ok(())
    }

    /// Encoding written to the store
    pub fn serialize(&self) -> PersistResult<String> {
        serde_json::to_string(&self.entries).map_err(|e| PersistError::Encode(e.to_string()))
    }
}

impl<T, S> TodoList<T, S> {
    pub fn entries(&self) -> &[T] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}
