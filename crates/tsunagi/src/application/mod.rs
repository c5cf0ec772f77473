//! Application layer use cases.
//!
//! # What is the "application" layer? (for beginners)
//!
//! In Clean Architecture the *application* layer sits between the domain
//! (pure business rules in `tsunagi-core`) and the infrastructure (files,
//! environment, command line).
//!
//! Use cases in this layer:
//!
//! - **Orchestrate** domain objects to fulfil a user goal (e.g., "remember
//!   this connection profile").
//! - **Depend on abstractions** (traits) rather than concrete implementations,
//!   so the store can be swapped for an in-memory double in tests.
//! - **Contain no file system access**.
//!
//! # Sub-modules
//!
//! - **`profile_store`** – The [`ProfileStore`](profile_store::ProfileStore)
//!   port and the errors a store may report.
//!
//! - **`add_profile`** – Validates a candidate profile and hands it to the
//!   store.

pub mod add_profile;
pub mod profile_store;
