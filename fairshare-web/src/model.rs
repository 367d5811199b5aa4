//! Web-specific persistence implementation
//!
//! This module provides the browser localStorage implementation of the
//! fairshare-model storage trait and re-exports the core model types.

use gloo::storage::{LocalStorage, Storage, errors::StorageError};

// Re-export all types from fairshare-model
pub use fairshare_model::*;

/// localStorage key holding the exploration collection, as a bare JSON
/// array. The key predates this implementation and must not change.
pub const STORAGE_KEY: &str = "climateExplorations";

/// Exploration storage backed by browser localStorage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WebExplorationStore;

#[derive(Debug, thiserror::Error)]
pub enum WebStoreError {
    #[error("storage error: {0}")]
    Storage(String),
}

impl ExplorationStore for WebExplorationStore {
    type Error = WebStoreError;

    fn load(&self) -> Result<Vec<Exploration>, Self::Error> {
        match LocalStorage::get(STORAGE_KEY) {
            Ok(explorations) => Ok(explorations),
            // Nothing stored yet is a normal first boot, not a failure.
            Err(StorageError::KeyNotFound(_)) => Ok(Vec::new()),
            Err(err) => Err(WebStoreError::Storage(err.to_string())),
        }
    }

    fn save(&self, explorations: &[Exploration]) -> Result<(), Self::Error> {
        LocalStorage::set(STORAGE_KEY, explorations)
            .map_err(|err| WebStoreError::Storage(err.to_string()))
    }
}

/// Session type used by the application.
pub type WebSession = ExplorationSession<WebExplorationStore>;

/// Load the session from browser storage.
#[must_use]
pub fn load_web_session() -> WebSession {
    ExplorationSession::load(WebExplorationStore)
}
