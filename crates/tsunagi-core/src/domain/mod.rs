//! Domain layer: pure business rules for connection profiles.
//!
//! Nothing in here touches the file system or the environment.  The
//! application crate decides where profiles are stored; this layer only
//! decides whether a profile is acceptable.

pub mod profile;
pub mod region;
