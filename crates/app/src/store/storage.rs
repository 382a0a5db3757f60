//! State storage
//!
//! The client-side mirror for the cart store, the desktop analogue of
//! browser local storage.

use std::{fs, io, path::PathBuf};

use thiserror::Error;

use super::StoreState;

/// Errors reading or writing mirrored state.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Filesystem failure.
    #[error("storage io error")]
    Io(#[from] io::Error),

    /// State could not be encoded or decoded.
    #[error("storage serialization error")]
    Serde(#[from] serde_json::Error),
}

/// Persistence mirror for the cart store.
pub trait StateStorage: Send + Sync {
    /// Persist the full state, replacing whatever was stored before.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the state cannot be written.
    fn save(&self, state: &StoreState) -> Result<(), StorageError>;

    /// Load the stored state; `None` when nothing was saved yet.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when stored state exists but cannot be
    /// read or decoded.
    fn load(&self) -> Result<Option<StoreState>, StorageError>;
}

/// JSON file mirror.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    /// Mirror state at the given path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl StateStorage for JsonFileStorage {
    fn save(&self, state: &StoreState) -> Result<(), StorageError> {
        let encoded = serde_json::to_vec_pretty(state)?;
        fs::write(&self.path, encoded)?;

        Ok(())
    }

    fn load(&self) -> Result<Option<StoreState>, StorageError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(error) => return Err(error.into()),
        };

        Ok(Some(serde_json::from_slice(&bytes)?))
    }
}
