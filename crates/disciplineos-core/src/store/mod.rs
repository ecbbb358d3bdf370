//! Key-value persistence.
//!
//! Each tracker persists its whole record as one serialized string under a
//! single key. [`StateStore`] is the minimal surface the engine layer needs:
//! get, set, remove. [`FileStore`] maps each key to a file in the data
//! directory; [`MemoryStore`] backs tests and embedders.

mod state;

pub use state::{load_record, save_record};

use std::collections::HashMap;
use std::path::PathBuf;

use crate::error::StoreError;

/// Returns `~/.config/disciplineos[-dev]/` based on DISCIPLINEOS_ENV.
///
/// Set DISCIPLINEOS_ENV=dev to use the development data directory.
///
/// # Errors
/// Returns an error if the directory cannot be created.
pub fn data_dir() -> Result<PathBuf, StoreError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("DISCIPLINEOS_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("disciplineos-dev")
    } else {
        base_dir.join("disciplineos")
    };

    std::fs::create_dir_all(&dir).map_err(|e| StoreError::DataDir(e.to_string()))?;
    Ok(dir)
}

/// Minimal key-value store the trackers persist through.
///
/// Write failures must leave previously stored values intact; they surface
/// as [`StoreError::WriteBlocked`] and are never retried.
pub trait StateStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// File-backed store: one file per key under the data directory.
///
/// Keys are the storage identifiers from the tracker profiles; they contain
/// no path separators, so they are used as file names directly.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open the store rooted at the default data directory.
    pub fn open() -> Result<Self, StoreError> {
        Ok(Self { dir: data_dir()? })
    }

    /// Open a store rooted at a custom directory.
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl StateStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.path_for(key)).ok()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        std::fs::write(self.path_for(key), value).map_err(|e| StoreError::WriteBlocked {
            key: key.to_string(),
            source: Some(e),
        })
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        match std::fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::WriteBlocked {
                key: key.to_string(),
                source: Some(e),
            }),
        }
    }
}

/// In-memory store for tests and embedders.
#[derive(Debug, Default)]
pub struct MemoryStore {
    map: HashMap<String, String>,
    fail_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose writes always fail, for exercising the
    /// storage-blocked path.
    pub fn failing() -> Self {
        Self {
            map: HashMap::new(),
            fail_writes: true,
        }
    }

    /// Seed a raw value, bypassing the failure flag.
    pub fn seed(&mut self, key: &str, value: &str) {
        self.map.insert(key.to_string(), value.to_string());
    }
}

impl StateStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.map.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.fail_writes {
            return Err(StoreError::WriteBlocked {
                key: key.to_string(),
                source: None,
            });
        }
        self.map.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        if self.fail_writes {
            return Err(StoreError::WriteBlocked {
                key: key.to_string(),
                source: None,
            });
        }
        self.map.remove(key);
        Ok(())
    }
}
