//! Infrastructure layer.
//!
//! Contains OS-facing adapters: today that is file-system storage for
//! connection profiles and the lookup of the user's home directory.
//!
//! **Dependency rule**: this layer may depend on `application` and
//! `tsunagi_core`, but MUST NOT be imported by the `application` or domain
//! layers.

pub mod storage;
