//! Named camera presets persisted as one JSON blob.
//!
//! Layout under [`PRESETS_KEY`]:
//! `{ "<name>": { "position": [x, y, z], "target": [x, y, z] }, ... }`.
//! A single-pose record under [`LEGACY_HOME_KEY`] from older builds is folded
//! into `"Home"` the first time the store is loaded.

use crate::constants::{HOME, LEGACY_HOME_KEY, PRESETS_KEY};
use crate::pose::{Pose, PoseInput};
use crate::storage::{KeyValueStore, StoreError};
use fnv::FnvHashMap;

/// How the persisted blob was found when loading.
#[derive(Debug)]
pub enum LoadOutcome {
    /// A well-formed blob was read.
    Loaded,
    /// Nothing was persisted yet.
    Empty,
    /// The blob was unreadable and has been ignored; the store starts empty.
    Degraded(StoreError),
}

impl LoadOutcome {
    pub fn is_degraded(&self) -> bool {
        matches!(self, LoadOutcome::Degraded(_))
    }
}

#[derive(Debug)]
pub struct LoadedPresets {
    pub store: PresetStore,
    pub outcome: LoadOutcome,
    /// The legacy single-pose record was consumed into `"Home"`.
    pub migrated_legacy: bool,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PresetStore {
    presets: FnvHashMap<String, Pose>,
}

impl PresetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the store from `storage`. Never fails: a missing or corrupt blob
    /// yields an empty store and a non-`Loaded` outcome.
    pub fn load(storage: &mut impl KeyValueStore) -> LoadedPresets {
        let (presets, outcome) = match storage.get_item(PRESETS_KEY) {
            None => (FnvHashMap::default(), LoadOutcome::Empty),
            Some(text) => match serde_json::from_str::<FnvHashMap<String, Pose>>(&text) {
                Ok(map) => (map, LoadOutcome::Loaded),
                Err(source) => {
                    let err = StoreError::Decode {
                        key: PRESETS_KEY.to_owned(),
                        source,
                    };
                    log::warn!("[presets] ignoring stored presets: {}", err);
                    (FnvHashMap::default(), LoadOutcome::Degraded(err))
                }
            },
        };
        let mut store = PresetStore { presets };

        let migrated_legacy = store.migrate_legacy_home(storage);
        if migrated_legacy {
            if let Err(e) = store.save(storage) {
                log::warn!("[presets] migrated Home not persisted: {}", e);
            }
        }
        log::debug!(
            "[presets] loaded {} preset(s) ({:?}, migrated_legacy={})",
            store.len(),
            outcome,
            migrated_legacy
        );
        LoadedPresets {
            store,
            outcome,
            migrated_legacy,
        }
    }

    fn migrate_legacy_home(&mut self, storage: &mut impl KeyValueStore) -> bool {
        let Some(text) = storage.get_item(LEGACY_HOME_KEY) else {
            return false;
        };
        let input = match serde_json::from_str::<PoseInput>(&text) {
            Ok(input) => input,
            Err(e) => {
                log::warn!("[presets] unreadable legacy `{}`: {}", LEGACY_HOME_KEY, e);
                return false;
            }
        };
        if self.presets.contains_key(HOME) {
            return false;
        }
        let Some(pose) = input.complete() else {
            return false;
        };
        self.presets.insert(HOME.to_owned(), pose);
        storage.remove_item(LEGACY_HOME_KEY);
        log::info!("[presets] migrated legacy `{}` into Home", LEGACY_HOME_KEY);
        true
    }

    /// Persist the whole store in a single write.
    pub fn save(&self, storage: &mut impl KeyValueStore) -> Result<(), StoreError> {
        let text = serde_json::to_string(&self.presets).map_err(|source| StoreError::Encode {
            key: PRESETS_KEY.to_owned(),
            source,
        })?;
        storage.set_item(PRESETS_KEY, &text)
    }

    /// Insert or overwrite `name`, then persist. A failed write is logged;
    /// the in-memory entry is kept either way.
    pub fn set(&mut self, storage: &mut impl KeyValueStore, name: &str, pose: Pose) {
        self.presets.insert(name.to_owned(), pose);
        if let Err(e) = self.save(storage) {
            log::warn!("[presets] `{}` kept in memory only: {}", name, e);
        }
    }

    /// Insert each default whose name is absent. Persists once if anything
    /// was added and returns the names that were seeded.
    pub fn seed_missing(
        &mut self,
        storage: &mut impl KeyValueStore,
        defaults: &[(String, Pose)],
    ) -> Vec<String> {
        let mut seeded = Vec::new();
        for (name, pose) in defaults {
            if !self.presets.contains_key(name) {
                self.presets.insert(name.clone(), *pose);
                seeded.push(name.clone());
            }
        }
        if !seeded.is_empty() {
            log::info!("[presets] seeded defaults: {}", seeded.join(", "));
            if let Err(e) = self.save(storage) {
                log::warn!("[presets] seeded defaults kept in memory only: {}", e);
            }
        }
        seeded
    }

    pub fn get(&self, name: &str) -> Option<Pose> {
        self.presets.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.presets.contains_key(name)
    }

    /// Preset names, sorted for stable output.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.presets.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}
