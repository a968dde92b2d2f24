use anyhow::Context;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use viewer_core::{KeyValueStore, StoreError};

/// Key-value storage kept in a single JSON object on disk, standing in for
/// the browser's localStorage.
pub struct JsonFileStorage {
    path: PathBuf,
    items: BTreeMap<String, String>,
}

impl JsonFileStorage {
    pub fn open(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let items = if path.exists() {
            let text = fs::read_to_string(&path)
                .with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("parsing {}", path.display()))?
        } else {
            BTreeMap::new()
        };
        log::info!("[presets] storage file {} ({} keys)", path.display(), items.len());
        Ok(Self { path, items })
    }

    fn flush(&self) -> Result<(), StoreError> {
        let text = serde_json::to_string_pretty(&self.items).map_err(|e| StoreError::Encode {
            key: self.path.display().to_string(),
            source: e,
        })?;
        fs::write(&self.path, text).map_err(|e| StoreError::Write {
            key: self.path.display().to_string(),
            reason: e.to_string(),
        })
    }
}

impl KeyValueStore for JsonFileStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.items.insert(key.to_owned(), value.to_owned());
        self.flush()
    }

    fn remove_item(&mut self, key: &str) {
        if self.items.remove(key).is_some() {
            if let Err(e) = self.flush() {
                log::warn!("[presets] {}", e);
            }
        }
    }
}
