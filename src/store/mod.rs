//! Durable key/value persistence for the application state.
//!
//! Reads never fail: a missing or unreadable value yields the caller's
//! default. Writes never fail either; problems are logged and the in-memory
//! state keeps working for the rest of the session.

pub mod file;
pub mod memory;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::core::state::AppState;
use crate::error::StoreError;

pub use file::FileStorage;
pub use memory::MemoryStorage;

pub const LISTS_KEY: &str = "taskLists";
pub const ACTIVE_LIST_KEY: &str = "currentListId";
pub const SIDEBAR_KEY: &str = "sidebarCollapsed";

/// A string key/value store.
pub trait Storage {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Deserialize the value under `key`, or return `default`.
pub fn load<T: DeserializeOwned>(storage: &dyn Storage, key: &str, default: T) -> T {
    match storage.get(key) {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("Ignoring malformed {}: {}", key, e);
                default
            }
        },
        Ok(None) => default,
        Err(e) => {
            log::error!("Failed to read {}: {}", key, e);
            default
        }
    }
}

/// Serialize `value` under `key`. Failures are logged only.
pub fn save<T: Serialize + ?Sized>(storage: &mut dyn Storage, key: &str, value: &T) {
    let json = match serde_json::to_string_pretty(value) {
        Ok(json) => json,
        Err(e) => {
            log::error!("Failed to serialize {}: {}", key, e);
            return;
        }
    };
    if let Err(e) = storage.set(key, &json) {
        log::error!("Failed to save {}: {}", key, e);
    }
}

/// Load the three persisted values, each with its own default. The result is
/// not repaired.
pub fn load_state(storage: &dyn Storage) -> AppState {
    let defaults = AppState::default();
    AppState {
        lists: load(storage, LISTS_KEY, defaults.lists),
        active_list_id: load(storage, ACTIVE_LIST_KEY, defaults.active_list_id),
        sidebar_collapsed: load(storage, SIDEBAR_KEY, defaults.sidebar_collapsed),
    }
}

pub fn save_state(storage: &mut dyn Storage, state: &AppState) {
    save(storage, LISTS_KEY, &state.lists);
    save(storage, ACTIVE_LIST_KEY, &state.active_list_id);
    save(storage, SIDEBAR_KEY, &state.sidebar_collapsed);
}
