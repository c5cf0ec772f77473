//! Connection profile domain entity.
//!
//! A [`ConnectionProfile`] describes one Cloud SQL instance the user wants to
//! reach through a locally bound proxy port.  Profiles are built by the caller
//! (from flags or prompts), checked with [`ConnectionProfile::validate`], and
//! only then handed to a store.
//!
//! # Validation order
//!
//! Rules are checked in a fixed order and the first failure wins:
//!
//! ```text
//! name  ──►  port  ──►  project  ──►  region (present)  ──►  region (known)  ──►  instance
//! ```
//!
//! A profile with several problems therefore always reports the same error,
//! which keeps CLI output and tests deterministic.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::region::is_valid_region;

/// Lowest local port a profile may bind (start of the IANA dynamic range).
pub const BIND_PORT_MIN: u32 = 49152;

/// Highest local port a profile may bind.
pub const BIND_PORT_MAX: u32 = 65535;

/// Reasons a connection profile is rejected.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// The profile name is empty.
    #[error("name is required")]
    NameRequired,

    /// The bind port lies outside the dynamic port range.
    #[error("port is out of range")]
    PortOutOfRange,

    /// The project name is empty.
    #[error("project name is required")]
    ProjectNameRequired,

    /// The region is empty.
    #[error("region is required")]
    RegionRequired,

    /// The region is not part of the region catalog.
    #[error("region is not valid")]
    RegionInvalid,

    /// The instance name is empty.
    #[error("instance name is required")]
    InstanceNameRequired,
}

/// A named connection configuration as stored on disk.
///
/// Serialized field order and key casing are part of the store format:
///
/// ```json
/// {
///   "name": "db1",
///   "port": 50000,
///   "projectName": "proj",
///   "region": "asia-northeast1",
///   "instanceName": "inst1"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionProfile {
    /// Identifier chosen by the user.  Not required to be unique.
    pub name: String,
    /// Local port the proxy listens on.
    ///
    /// Wider than `u16` so that out-of-range input reaches validation instead
    /// of failing at parse time.
    pub port: u32,
    /// Cloud project identifier.
    pub project_name: String,
    /// Region code, one of [`REGIONS`](super::region::REGIONS).
    pub region: String,
    /// Database instance identifier.
    pub instance_name: String,
}

impl ConnectionProfile {
    /// Checks every rule in order and returns the first violation.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] for the first rule the profile breaks.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::NameRequired);
        }
        if !(BIND_PORT_MIN..=BIND_PORT_MAX).contains(&self.port) {
            return Err(ValidationError::PortOutOfRange);
        }
        if self.project_name.is_empty() {
            return Err(ValidationError::ProjectNameRequired);
        }
        if self.region.is_empty() {
            return Err(ValidationError::RegionRequired);
        }
        if !is_valid_region(&self.region) {
            return Err(ValidationError::RegionInvalid);
        }
        if self.instance_name.is_empty() {
            return Err(ValidationError::InstanceNameRequired);
        }
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
