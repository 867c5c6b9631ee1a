//! Preference storage backed by `localStorage`.

use gloo::storage::{LocalStorage, Storage};
use page_enhancer_core::{MemoryStorage, PreferenceStorage};
use web_sys::Window;

use crate::dom::js_error_message;

#[derive(Debug, thiserror::Error)]
pub enum WebStorageError {
    #[error("localStorage call failed: {0}")]
    Storage(String),
}

/// Durable storage when the browser allows it, otherwise an in-memory map
/// that lasts for this page view.
#[derive(Debug)]
pub enum PageStorage {
    Local,
    Memory(MemoryStorage),
}

impl PageStorage {
    /// Use `localStorage`, falling back to memory when it is disabled.
    #[must_use]
    pub fn open(win: &Window) -> Self {
        match win.local_storage() {
            Ok(Some(_)) => Self::Local,
            Ok(None) => {
                log::warn!("localStorage unavailable; theme choice will not persist");
                Self::Memory(MemoryStorage::default())
            }
            Err(err) => {
                log::warn!("localStorage blocked: {}", js_error_message(&err));
                Self::Memory(MemoryStorage::default())
            }
        }
    }
}

// Values are stored as bare strings rather than gloo's JSON encoding so
// inline page scripts reading the same key see `dark`, not `"dark"`.
impl PreferenceStorage for PageStorage {
    type Error = WebStorageError;

    fn load(&self, key: &str) -> Result<Option<String>, Self::Error> {
        match self {
            Self::Local => LocalStorage::raw()
                .get_item(key)
                .map_err(|e| WebStorageError::Storage(js_error_message(&e))),
            Self::Memory(memory) => Ok(memory.load(key).unwrap_or_default()),
        }
    }

    fn store(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        match self {
            Self::Local => LocalStorage::raw()
                .set_item(key, value)
                .map_err(|e| WebStorageError::Storage(js_error_message(&e))),
            Self::Memory(memory) => {
                let _ = memory.store(key, value);
                Ok(())
            }
        }
    }
}
