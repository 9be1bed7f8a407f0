//! Cart persistence backends
//!
//! A storage holds string values under string keys, the same contract as
//! browser local storage. The cart keeps its whole item list as one JSON
//! value under [`CART_STORAGE_KEY`](super::CART_STORAGE_KEY).

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use crate::error::CartStorageError;

pub trait CartStorage {
    fn load(&self, key: &str) -> Result<Option<String>, CartStorageError>;
    fn save(&mut self, key: &str, value: &str) -> Result<(), CartStorageError>;
}

/// In-process storage, lost on drop
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    values: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }
}

impl CartStorage for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>, CartStorageError> {
        Ok(self.values.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), CartStorageError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// One `<key>.json` file per key under a directory
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl CartStorage for FileStorage {
    fn load(&self, key: &str) -> Result<Option<String>, CartStorageError> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    /// Writes `<key>.json.tmp` then renames it over `<key>.json`, so an
    /// interrupted save leaves the previous value readable
    fn save(&mut self, key: &str, value: &str) -> Result<(), CartStorageError> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }
}
