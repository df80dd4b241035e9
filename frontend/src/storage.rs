//! `window.localStorage` as the Record Store's storage medium.

use common::error::StoreError;
use common::store::KeyValueStorage;
use web_sys::Storage;

/// Browser-backed [`KeyValueStorage`].
///
/// When `localStorage` is unavailable (private mode in some browsers, storage
/// disabled by policy) reads return nothing and writes fail with
/// [`StoreError::Write`], so the app still runs with in-memory data.
pub struct BrowserStorage {
    inner: Option<Storage>,
}

impl BrowserStorage {
    pub fn open() -> Self {
        let inner = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if inner.is_none() {
            gloo_console::warn!("localStorage is unavailable; changes will not survive a reload");
        }
        Self { inner }
    }
}

impl KeyValueStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let storage = self.inner.as_ref().ok_or_else(|| StoreError::Write {
            key: key.to_string(),
            reason: "localStorage is unavailable".to_string(),
        })?;

        storage.set_item(key, value).map_err(|e| StoreError::Write {
            key: key.to_string(),
            reason: format!("{:?}", e),
        })
    }
}
