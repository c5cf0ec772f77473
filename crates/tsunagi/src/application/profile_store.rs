//! Storage port for connection profiles.
//!
//! The application layer only needs one capability from storage: append a
//! profile to the durable list.  Keeping the trait this narrow lets tests
//! substitute a mock or an in-memory recorder without touching the disk.

use std::path::PathBuf;

use thiserror::Error;
use tsunagi_core::ConnectionProfile;

#[cfg(test)]
use mockall::automock;

/// Errors reported by a profile store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The configured store path does not end in a file name (empty,
    /// a filesystem root, or ending in `..`).
    #[error("profile store path {path} does not name a file")]
    InvalidPath { path: PathBuf },

    /// The directory that should contain the store file could not be created.
    #[error("failed to create store directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading, writing, or replacing the store file failed.
    #[error("I/O error accessing profile store at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The store file exists and is non-empty but is not a JSON array of
    /// profiles.  The file is left as-is for the user to repair or remove.
    #[error("profile store at {path} is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The profile list could not be serialized.
    #[error("failed to serialize profiles: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Durable, append-only collection of connection profiles.
#[cfg_attr(test, automock)]
pub trait ProfileStore {
    /// Appends `profile` after every profile already stored.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] describing the first failure.  Nothing is
    /// retried.
    fn save(&self, profile: &ConnectionProfile) -> Result<(), StoreError>;
}

impl<S: ProfileStore + ?Sized> ProfileStore for &S {
    fn save(&self, profile: &ConnectionProfile) -> Result<(), StoreError> {
        (**self).save(profile)
    }
}
