//! Storage infrastructure: profile file persistence.
//!
//! - `paths` resolves the base directory the store path is relative to.
//! - `profile_file` implements [`ProfileStore`](crate::application::profile_store::ProfileStore)
//!   on top of a single JSON document.

pub mod paths;
pub mod profile_file;

pub use profile_file::FileProfileStore;
