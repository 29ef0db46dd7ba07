use sms_ui_core::{KeyValueStore, MemoryStore};
use web_sys::{window, Storage};

/// Preference store for the current page: `localStorage` when the browser
/// grants it, otherwise an in-memory map that lasts until unload.
pub enum PageStore {
    Local(Storage),
    Memory(MemoryStore),
}

pub fn page_store() -> PageStore {
    match window().and_then(|w| w.local_storage().ok().flatten()) {
        Some(storage) => PageStore::Local(storage),
        None => {
            log::warn!("localStorage unavailable, preferences will not persist");
            PageStore::Memory(MemoryStore::new())
        }
    }
}

impl KeyValueStore for PageStore {
    fn get(&self, key: &str) -> Option<String> {
        match self {
            PageStore::Local(storage) => storage.get_item(key).ok()?,
            PageStore::Memory(memory) => memory.get(key),
        }
    }

    fn set(&self, key: &str, value: &str) {
        match self {
            PageStore::Local(storage) => {
                let _ = storage.set_item(key, value);
            }
            PageStore::Memory(memory) => memory.set(key, value),
        }
    }

    fn remove(&self, key: &str) {
        match self {
            PageStore::Local(storage) => {
                let _ = storage.remove_item(key);
            }
            PageStore::Memory(memory) => memory.remove(key),
        }
    }
}
