//! JSON file persistence for connection profiles.
//!
//! All profiles live in one document: a JSON array, pretty-printed with
//! two-space indentation, in the order they were added.
//!
//! ```json
//! [
//!   {
//!     "name": "db1",
//!     "port": 50000,
//!     "projectName": "proj",
//!     "region": "asia-northeast1",
//!     "instanceName": "inst1"
//!   }
//! ]
//! ```
//!
//! # Save cycle
//!
//! Every [`save`](FileProfileStore::save) reads the whole document, appends
//! one entry, and replaces the whole document.  The replacement is written to
//! a sibling `<file>.tmp`, flushed to disk, and then renamed over the target,
//! so a crash mid-write leaves either the old or the new document.
//!
//! The rename lands on the file the store path resolves to: a symlinked store
//! keeps its link and the linked file receives the new content.  An existing
//! file's permissions are carried over to the replacement.
//!
//! There is no locking.  Two processes saving at the same time race, and the
//! later rename wins.
//!
//! # Missing, empty, and corrupt files
//!
//! | on disk                  | treated as                     |
//! |--------------------------|--------------------------------|
//! | file absent              | empty list                     |
//! | zero-byte file           | empty list                     |
//! | anything else non-JSON   | [`StoreError::Corrupt`]        |

use std::ffi::OsString;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;
use tsunagi_core::ConnectionProfile;

use crate::application::profile_store::{ProfileStore, StoreError};

/// Profile store backed by a single JSON file.
#[derive(Debug, Clone)]
pub struct FileProfileStore {
    path: PathBuf,
}

impl FileProfileStore {
    /// Creates a store at `base_dir` joined with `relative`.
    ///
    /// The path is resolved once here; later changes to the environment do
    /// not move the store.  An absolute `relative` replaces `base_dir`
    /// entirely, following [`Path::join`].
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidPath`] if `relative` is empty or the
    /// joined path does not end in a file name.
    pub fn new(
        base_dir: impl AsRef<Path>,
        relative: impl AsRef<Path>,
    ) -> Result<Self, StoreError> {
        let relative = relative.as_ref();
        if relative.as_os_str().is_empty() {
            return Err(StoreError::InvalidPath {
                path: base_dir.as_ref().to_path_buf(),
            });
        }
        Self::at(base_dir.as_ref().join(relative))
    }

    /// Creates a store at an already-resolved path.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidPath`] if `path` does not end in a file
    /// name.
    pub fn at(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        if path.file_name().is_none() {
            return Err(StoreError::InvalidPath { path });
        }
        debug!(path = %path.display(), "profile store resolved");
        Ok(Self { path })
    }

    /// Location of the store file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads every stored profile in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] for read failures other than "not found",
    /// and [`StoreError::Corrupt`] if a non-empty file is not a JSON array of
    /// profiles.
    pub fn load(&self) -> Result<Vec<ConnectionProfile>, StoreError> {
        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        if bytes.is_empty() {
            return Ok(Vec::new());
        }

        let profiles: Vec<ConnectionProfile> =
            serde_json::from_slice(&bytes).map_err(|source| StoreError::Corrupt {
                path: self.path.clone(),
                source,
            })?;
        debug!(path = %self.path.display(), count = profiles.len(), "profiles loaded");
        Ok(profiles)
    }

    fn ensure_parent_dir(&self) -> Result<(), StoreError> {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => {
                std::fs::create_dir_all(dir).map_err(|source| StoreError::CreateDir {
                    path: dir.to_path_buf(),
                    source,
                })
            }
            _ => Ok(()),
        }
    }

    /// The file the rename must land on: symlinks are followed when the
    /// store file exists, otherwise the configured path itself.
    fn replace_target(&self) -> Result<PathBuf, StoreError> {
        match std::fs::canonicalize(&self.path) {
            Ok(real) => Ok(real),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(self.path.clone()),
            Err(source) => Err(StoreError::Io {
                path: self.path.clone(),
                source,
            }),
        }
    }

    /// Replaces the whole document with `profiles`.
    fn write_all(&self, profiles: &[ConnectionProfile]) -> Result<(), StoreError> {
        let content = serde_json::to_vec_pretty(profiles).map_err(StoreError::Serialize)?;
        let target = self.replace_target()?;
        replace_file(&target, &content)
    }
}

/// Sibling of `target` that the new content is staged in.
///
/// `target` always has a file name: [`FileProfileStore::at`] rejects paths
/// without one, and canonicalizing a file keeps it.
fn temp_path_for(target: &Path) -> PathBuf {
    let mut name = target.file_name().map(OsString::from).unwrap_or_default();
    name.push(".tmp");
    target.with_file_name(name)
}

/// Writes `content` to a synced temp file, then renames it over `target`.
///
/// The temp file is removed on any failure.
fn replace_file(target: &Path, content: &[u8]) -> Result<(), StoreError> {
    let tmp = temp_path_for(target);
    let permissions = std::fs::metadata(target)
        .ok()
        .filter(|meta| meta.is_file())
        .map(|meta| meta.permissions());

    let staged = write_synced(&tmp, content, permissions);
    if let Err(source) = staged {
        std::fs::remove_file(&tmp).ok();
        return Err(StoreError::Io { path: tmp, source });
    }

    std::fs::rename(&tmp, target).map_err(|source| {
        std::fs::remove_file(&tmp).ok();
        StoreError::Io {
            path: target.to_path_buf(),
            source,
        }
    })
}

fn write_synced(
    path: &Path,
    content: &[u8],
    permissions: Option<std::fs::Permissions>,
) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    if let Some(permissions) = permissions {
        file.set_permissions(permissions)?;
    }
    file.write_all(content)?;
    file.sync_all()
}

impl ProfileStore for FileProfileStore {
    fn save(&self, profile: &ConnectionProfile) -> Result<(), StoreError> {
        self.ensure_parent_dir()?;

        let mut profiles = self.load()?;
        profiles.push(profile.clone());
        self.write_all(&profiles)?;

        debug!(
            path = %self.path.display(),
            name = %profile.name,
            total = profiles.len(),
            "profile saved"
        );
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
