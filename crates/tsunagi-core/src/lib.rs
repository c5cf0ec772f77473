//! # tsunagi-core
//!
//! Shared library for tsunagi containing the connection profile entity, its
//! validation rules, and the catalog of regions a profile may point at.
//!
//! This crate has zero dependencies on the file system, processes, or the
//! network.  Persistence and the command-line shell live in the `tsunagi`
//! crate.
//!
//! # Architecture overview (for beginners)
//!
//! tsunagi remembers how to reach a Cloud SQL instance: which project, which
//! region, which instance, and which local port the database proxy should
//! listen on.  Each such bundle is a *connection profile*.
//!
//! - **`domain::profile`** – The [`ConnectionProfile`] struct and the ordered
//!   list of rules it must satisfy before it may be stored.
//!
//! - **`domain::region`** – The fixed, ordered list of valid region codes.

pub mod domain;

// Re-export the most-used types at the crate root so callers can write
// `tsunagi_core::ConnectionProfile` instead of the full module path.
pub use domain::profile::{ConnectionProfile, ValidationError, BIND_PORT_MAX, BIND_PORT_MIN};
pub use domain::region::{is_valid_region, REGIONS};
