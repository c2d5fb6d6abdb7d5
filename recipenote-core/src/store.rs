//! Persistence for the record collection.
//!
//! The whole collection is stored as one JSON array under a fixed key in a
//! string-keyed store, the shape browser local storage exposes. Storage
//! failures never reach the caller: reads fall back to an empty collection
//! and writes are dropped, both with a warning.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use thiserror::Error;

use crate::types::Recipe;

/// Fixed key the collection is stored under.
pub const RECIPES_KEY: &str = "recipes";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("store read failed: {0}")]
    Read(#[source] io::Error),

    #[error("store write failed: {0}")]
    Write(#[source] io::Error),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// String-keyed persistent store.
pub trait StringStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// File-backed store: one file per key under a data directory.
///
/// The directory is created lazily on the first write, so opening a
/// notebook never touches the disk until something is saved.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StringStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.key_path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::Read(e)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir).map_err(StoreError::Write)?;
        fs::write(self.key_path(key), value).map_err(StoreError::Write)
    }
}

/// In-memory store for tests.
#[derive(Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
    fail_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a key, builder style.
    pub fn with_value(self, key: &str, value: &str) -> Self {
        self.values
            .lock()
            .expect("store lock poisoned")
            .insert(key.to_string(), value.to_string());
        self
    }

    /// A store whose writes always fail, for exercising the save path.
    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }
}

impl StringStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self
            .values
            .lock()
            .expect("store lock poisoned")
            .get(key)
            .cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.fail_writes {
            return Err(StoreError::Unavailable("writes disabled".to_string()));
        }
        self.values
            .lock()
            .expect("store lock poisoned")
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Loads and saves the full collection through a [`StringStore`].
pub struct RecipeStore<S: StringStore> {
    store: S,
}

impl<S: StringStore> RecipeStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Load the collection.
    ///
    /// A missing value yields an empty collection. So does anything that
    /// fails to parse as an array of well-shaped records: corrupt data is
    /// discarded rather than propagated.
    pub fn load(&self) -> Vec<Recipe> {
        let raw = match self.store.get(RECIPES_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to load recipes");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Recipe>>(&raw) {
            Ok(recipes) => recipes,
            Err(e) => {
                tracing::warn!(error = %e, "discarding corrupt recipe data");
                Vec::new()
            }
        }
    }

    /// Save the collection. Failures are logged and dropped; the caller is
    /// never informed.
    pub fn save(&self, recipes: &[Recipe]) {
        let raw = match serde_json::to_string(recipes) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(error = %e, "failed to serialize recipes");
                return;
            }
        };

        if let Err(e) = self.store.set(RECIPES_KEY, &raw) {
            tracing::warn!(error = %e, "failed to save recipes");
        }
    }
}
