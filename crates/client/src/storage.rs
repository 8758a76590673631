//! Cross-platform durable key/value storage.
//!
//! Values are stored as plain text:
//! - Web: `localStorage`
//! - Desktop: one file per key in the platform-appropriate config directory:
//!   - Linux: `~/.config/aidswap/`
//!   - macOS: `~/Library/Application Support/aidswap/`
//!   - Windows: `%APPDATA%\aidswap\`

use std::cell::RefCell;
use std::collections::HashMap;

/// Text storage backend used by the session store.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    /// Returns `true` if the value was persisted.
    fn set(&self, key: &str, value: &str) -> bool;

    fn remove(&self, key: &str);
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for std::rc::Rc<T> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> bool {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key)
    }
}

/// The platform's durable storage.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        load_raw(key)
    }

    fn set(&self, key: &str, value: &str) -> bool {
        save_raw(key, value)
    }

    fn remove(&self, key: &str) {
        remove_raw(key);
    }
}

/// Volatile storage, used in tests and when no durable storage exists.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> bool {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        true
    }

    fn remove(&self, key: &str) {
        self.values.borrow_mut().remove(key);
    }
}

// =========================================
// Web (WASM) implementation
// =========================================

#[cfg(target_arch = "wasm32")]
fn save_raw(key: &str, value: &str) -> bool {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            return storage.set_item(key, value).is_ok();
        }
    }
    false
}

#[cfg(target_arch = "wasm32")]
fn load_raw(key: &str) -> Option<String> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok()??;
    storage.get_item(key).ok()?
}

#[cfg(target_arch = "wasm32")]
fn remove_raw(key: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

// =========================================
// Desktop (native) implementation
// =========================================

#[cfg(not(target_arch = "wasm32"))]
fn get_config_dir() -> Option<std::path::PathBuf> {
    let config_dir = dirs::config_dir()?;
    let app_dir = config_dir.join("aidswap");

    if !app_dir.exists() {
        std::fs::create_dir_all(&app_dir).ok()?;
    }

    Some(app_dir)
}

#[cfg(not(target_arch = "wasm32"))]
fn get_file_path(key: &str) -> Option<std::path::PathBuf> {
    let config_dir = get_config_dir()?;
    Some(config_dir.join(file_name_for(key)))
}

#[cfg(not(target_arch = "wasm32"))]
fn file_name_for(key: &str) -> String {
    // Keys become file names, so strip path separators and reserved chars
    let safe_key = key.replace(['/', '\\', ':', '*', '?', '"', '<', '>', '|'], "_");
    format!("{safe_key}.txt")
}

#[cfg(not(target_arch = "wasm32"))]
fn save_raw(key: &str, value: &str) -> bool {
    let Some(path) = get_file_path(key) else {
        return false;
    };
    std::fs::write(path, value).is_ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn load_raw(key: &str) -> Option<String> {
    let path = get_file_path(key)?;
    std::fs::read_to_string(path).ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn remove_raw(key: &str) {
    if let Some(path) = get_file_path(key) {
        let _ = std::fs::remove_file(path);
    }
}
