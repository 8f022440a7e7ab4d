//! Durable key-value storage backed by `localStorage`.
//!
//! Storage may be absent (no browser window, private-mode restrictions,
//! disabled cookies). Every accessor degrades to `None` / no-op in that case;
//! the synchronizer then runs on defaults. Nothing here panics.

use web_sys::Storage;

fn local_storage() -> Option<Storage> {
    let window = web_sys::window()?;
    if let Ok(Some(storage)) = window.local_storage() {
        Some(storage)
    } else {
        log::debug!("localStorage unavailable; persisted UI state disabled");
        None
    }
}

/// Read a stored value. Absent key and unavailable storage both read as `None`.
#[must_use]
pub fn read(key: &str) -> Option<String> {
    let storage = local_storage()?;
    if let Ok(value) = storage.get_item(key) {
        value
    } else {
        None
    }
}

/// Write a value, silently dropping the write if storage is unavailable.
pub fn write(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        if storage.set_item(key, value).is_err() {
            log::warn!("failed to persist {key}");
        }
    }
}
