//! Browser `localStorage` helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Values are stored as raw strings. Reads and writes are best-effort: a
//! missing or blocked storage behaves like an empty one, and the server
//! build always reports nothing stored.

#[cfg(test)]
#[path = "ui_persistence_test.rs"]
mod ui_persistence_test;

/// Read the raw string stored under `key`.
pub fn load_item(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Store `value` under `key`.
pub fn save_item(key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        if let Err(e) = storage.set_item(key, value) {
            log::debug!("localStorage write for {key} failed: {e:?}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}
