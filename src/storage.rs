use viewer_core::{KeyValueStore, StoreError};
use web_sys as web;

/// `window.localStorage` behind the core key-value seam.
pub struct LocalStorage {
    inner: Option<web::Storage>,
}

impl LocalStorage {
    /// Grab the page's local storage. Private browsing modes may refuse it;
    /// the viewer then runs with nothing persisted.
    pub fn from_window() -> Self {
        let inner = web::window().and_then(|w| w.local_storage().ok().flatten());
        if inner.is_none() {
            log::warn!("[presets] localStorage unavailable, presets will not persist");
        }
        Self { inner }
    }

    pub fn is_available(&self) -> bool {
        self.inner.is_some()
    }
}

impl KeyValueStore for LocalStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.inner.as_ref()?.get_item(key).ok().flatten()
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let Some(storage) = &self.inner else {
            return Err(StoreError::Write {
                key: key.to_owned(),
                reason: "localStorage unavailable".to_owned(),
            });
        };
        storage.set_item(key, value).map_err(|e| StoreError::Write {
            key: key.to_owned(),
            reason: format!("{:?}", e),
        })
    }

    fn remove_item(&mut self, key: &str) {
        if let Some(storage) = &self.inner {
            _ = storage.remove_item(key);
        }
    }
}
