//! `localStorage`-backed theme persistence.

use web_sys::{Storage, Window};

use crate::dom::elements::js_error;
use crate::error::BehaviorError;
use crate::theme::{MemoryStorage, ThemeStorage};

/// `localStorage` when the browser allows it, otherwise an in-memory map
/// that lasts for the page.
pub enum BrowserStorage {
    Local(Storage),
    Memory(MemoryStorage),
}

impl BrowserStorage {
    pub fn open(window: &Window) -> Self {
        match window.local_storage() {
            Ok(Some(storage)) => Self::Local(storage),
            Ok(None) => {
                log::warn!("theme: localStorage unavailable, preference will not persist");
                Self::Memory(MemoryStorage::new())
            }
            Err(e) => {
                log::warn!("theme: {}; preference will not persist", js_error("localStorage", &e));
                Self::Memory(MemoryStorage::new())
            }
        }
    }
}

impl ThemeStorage for BrowserStorage {
    fn read(&self, key: &str) -> Option<String> {
        match self {
            Self::Local(storage) => match storage.get_item(key) {
                Ok(value) => value,
                Err(e) => {
                    log::warn!("theme: {}", js_error("localStorage.getItem", &e));
                    None
                }
            },
            Self::Memory(memory) => memory.read(key),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), BehaviorError> {
        match self {
            Self::Local(storage) => storage.set_item(key, value).map_err(|e| js_error("localStorage.setItem", &e)),
            Self::Memory(memory) => memory.write(key, value),
        }
    }
}
