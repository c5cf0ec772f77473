//! AddProfileUseCase: validate a candidate profile, then persist it.
//!
//! [`ProfileManager`] is a validate-then-delegate step.  It holds no state of
//! its own besides the store handle, so every call to [`ProfileManager::add`]
//! is independent of the previous one.
//!
//! ```text
//! caller ──► ProfileManager::add ──► ConnectionProfile::validate
//!                                         │ ok
//!                                         ▼
//!                                   ProfileStore::save
//! ```
//!
//! Validation always runs before the store is touched, so a rejected profile
//! can never cause a partial write.

use thiserror::Error;
use tracing::debug;
use tsunagi_core::{ConnectionProfile, ValidationError};

use super::profile_store::{ProfileStore, StoreError};

/// Error returned by [`ProfileManager::add`].
#[derive(Debug, Error)]
pub enum AddProfileError {
    /// The profile broke a validation rule; the store was not called.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The profile was valid but the store failed to persist it.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Gatekeeper between user input and durable storage.
pub struct ProfileManager<S> {
    store: S,
}

impl<S: ProfileStore> ProfileManager<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Validates `profile` and, if it passes, appends it to the store.
    ///
    /// # Errors
    ///
    /// Returns [`AddProfileError::Validation`] with the first broken rule, or
    /// [`AddProfileError::Store`] carrying the store's error unchanged.
    pub fn add(&self, profile: ConnectionProfile) -> Result<(), AddProfileError> {
        profile.validate()?;
        debug!(name = %profile.name, port = profile.port, "profile accepted");
        self.store.save(&profile)?;
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::profile_store::MockProfileStore;
    use std::path::PathBuf;

    fn valid_profile() -> ConnectionProfile {
        ConnectionProfile {
            name: "test-config".to_string(),
            port: 50000,
            project_name: "test-project".to_string(),
            region: "asia-northeast1".to_string(),
            instance_name: "test-instance".to_string(),
        }
    }

    fn store_that_must_not_be_called() -> MockProfileStore {
        let mut store = MockProfileStore::new();
        store.expect_save().never();
        store
    }

    #[test]
    fn test_add_valid_profile_saves_it_once() {
        // Arrange
        let expected = valid_profile();
        let mut store = MockProfileStore::new();
        store
            .expect_save()
            .withf(move |p| *p == expected)
            .times(1)
            .returning(|_| Ok(()));
        let manager = ProfileManager::new(store);

        // Act
        let result = manager.add(valid_profile());

        // Assert
        assert!(result.is_ok());
    }

    #[test]
    fn test_add_out_of_range_port_never_reaches_store() {
        for port in [0, 1000, 49151, 65536, 70000] {
            let manager = ProfileManager::new(store_that_must_not_be_called());
            let profile = ConnectionProfile {
                port,
                ..valid_profile()
            };

            let result = manager.add(profile);

            assert!(
                matches!(
                    result,
                    Err(AddProfileError::Validation(ValidationError::PortOutOfRange))
                ),
                "port {port} must be rejected"
            );
        }
    }

    #[test]
    fn test_add_unknown_region_is_rejected() {
        let manager = ProfileManager::new(store_that_must_not_be_called());
        let profile = ConnectionProfile {
            region: "invalid-region".to_string(),
            ..valid_profile()
        };

        let result = manager.add(profile);

        assert!(matches!(
            result,
            Err(AddProfileError::Validation(ValidationError::RegionInvalid))
        ));
    }

    #[test]
    fn test_add_reports_first_violation_only() {
        let manager = ProfileManager::new(store_that_must_not_be_called());
        let profile = ConnectionProfile {
            name: String::new(),
            port: 1000,
            project_name: String::new(),
            region: String::new(),
            instance_name: String::new(),
        };

        let err = manager.add(profile).expect_err("profile must be rejected");

        assert_eq!(err.to_string(), "name is required");
    }

    #[test]
    fn test_add_accepts_port_boundaries() {
        for port in [49152, 65535] {
            let mut store = MockProfileStore::new();
            store
                .expect_save()
                .withf(move |p| p.port == port)
                .times(1)
                .returning(|_| Ok(()));
            let manager = ProfileManager::new(store);

            let result = manager.add(ConnectionProfile {
                port,
                ..valid_profile()
            });

            assert!(result.is_ok(), "port {port} must be accepted");
        }
    }

    #[test]
    fn test_add_forwards_store_error_unchanged() {
        // Arrange: the store fails with an I/O error for a known path
        let mut store = MockProfileStore::new();
        store.expect_save().times(1).returning(|_| {
            Err(StoreError::Io {
                path: PathBuf::from("/tmp/profiles.json"),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
            })
        });
        let manager = ProfileManager::new(store);

        // Act
        let result = manager.add(valid_profile());

        // Assert
        match result {
            Err(AddProfileError::Store(StoreError::Io { path, source })) => {
                assert_eq!(path, PathBuf::from("/tmp/profiles.json"));
                assert_eq!(source.kind(), std::io::ErrorKind::PermissionDenied);
            }
            other => panic!("expected forwarded store error, got {other:?}"),
        }
    }

    #[test]
    fn test_store_error_message_is_not_rewrapped() {
        let mut store = MockProfileStore::new();
        store.expect_save().returning(|_| {
            Err(StoreError::Io {
                path: PathBuf::from("profiles.json"),
                source: std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
            })
        });
        let manager = ProfileManager::new(store);

        let err = manager.add(valid_profile()).expect_err("store failure");

        assert_eq!(
            err.to_string(),
            "I/O error accessing profile store at profiles.json: disk full"
        );
    }

    #[test]
    fn test_duplicate_names_are_passed_through() {
        let mut store = MockProfileStore::new();
        store.expect_save().times(2).returning(|_| Ok(()));
        let manager = ProfileManager::new(store);

        assert!(manager.add(valid_profile()).is_ok());
        assert!(manager.add(valid_profile()).is_ok());
    }
}
