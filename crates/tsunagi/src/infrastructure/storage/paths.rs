//! Base-directory resolution for the profile store.
//!
//! The store path is configured relative to a base directory, which is the
//! user's home directory unless the caller overrides it:
//!
//! - Unix / macOS: `$HOME`
//! - Windows:      `%USERPROFILE%`

use std::path::PathBuf;

use thiserror::Error;

/// Store path used when neither `--config-file` nor `TSUNAGI_CONFIG_FILE`
/// is given.
pub const DEFAULT_STORE_PATH: &str = ".tsunagi/config.json";

/// Error type for path resolution.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathError {
    /// Neither `HOME` nor `USERPROFILE` is set to a non-empty value.
    #[error("could not determine home directory (HOME / USERPROFILE unset)")]
    NoHomeDir,
}

/// Returns the current user's home directory.
///
/// # Errors
///
/// Returns [`PathError::NoHomeDir`] when no home variable is available.
pub fn home_dir() -> Result<PathBuf, PathError> {
    home_dir_from(|key| std::env::var_os(key))
}

/// Picks the base directory: an explicit override wins over the home
/// directory.
///
/// # Errors
///
/// Returns [`PathError::NoHomeDir`] if no override is given and the home
/// directory cannot be determined.
pub fn resolve_base_dir(override_dir: Option<PathBuf>) -> Result<PathBuf, PathError> {
    match override_dir {
        Some(dir) => Ok(dir),
        None => home_dir(),
    }
}

fn home_dir_from<F>(lookup: F) -> Result<PathBuf, PathError>
where
    F: Fn(&str) -> Option<std::ffi::OsString>,
{
    ["HOME", "USERPROFILE"]
        .into_iter()
        .filter_map(|key| lookup(key))
        .find(|value| !value.is_empty())
        .map(PathBuf::from)
        .ok_or(PathError::NoHomeDir)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
