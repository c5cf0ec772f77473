//! Catalog of region codes a connection profile may reference.
//!
//! The list is ordered the way it is presented to users (grouped by
//! geography, then alphabetically) and never changes at runtime.

/// Every region code accepted by profile validation, in display order.
pub const REGIONS: &[&str] = &[
    "asia-east1",
    "asia-east2",
    "asia-northeast1",
    "asia-northeast2",
    "asia-northeast3",
    "asia-south1",
    "asia-south2",
    "asia-southeast1",
    "asia-southeast2",
    "australia-southeast1",
    "australia-southeast2",
    "europe-central2",
    "europe-north1",
    "europe-southwest1",
    "europe-west1",
    "europe-west2",
    "europe-west3",
    "europe-west4",
    "europe-west6",
    "europe-west8",
    "me-west1",
    "northamerica-northeast1",
    "northamerica-northeast2",
    "southamerica-east1",
    "southamerica-west1",
    "us-central1",
    "us-east1",
    "us-east4",
    "us-west1",
    "us-west2",
    "us-west3",
    "us-west4",
];

/// Returns `true` when `region` exactly matches a catalog entry.
///
/// The comparison is case-sensitive: `"US-WEST4"` is not a valid region.
pub fn is_valid_region(region: &str) -> bool {
    REGIONS.contains(&region)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_contains_well_known_regions() {
        assert!(is_valid_region("asia-northeast1"));
        assert!(is_valid_region("asia-east1"));
        assert!(is_valid_region("us-central1"));
        assert!(is_valid_region("us-west4"));
    }

    #[test]
    fn test_unknown_region_is_rejected() {
        assert!(!is_valid_region("invalid-region"));
        assert!(!is_valid_region("mars-north1"));
    }

    #[test]
    fn test_empty_region_is_rejected() {
        assert!(!is_valid_region(""));
    }

    #[test]
    fn test_region_match_is_case_sensitive() {
        assert!(!is_valid_region("US-WEST4"));
        assert!(!is_valid_region("Asia-Northeast1"));
    }

    #[test]
    fn test_region_match_does_not_trim_whitespace() {
        assert!(!is_valid_region(" us-west4"));
        assert!(!is_valid_region("us-west4\n"));
    }

    #[test]
    fn test_catalog_has_no_duplicates() {
        let unique: HashSet<&str> = REGIONS.iter().copied().collect();
        assert_eq!(unique.len(), REGIONS.len(), "region codes must be unique");
    }

    #[test]
    fn test_catalog_order_is_stable() {
        // The first and last entries anchor the display order.
        assert_eq!(REGIONS.first(), Some(&"asia-east1"));
        assert_eq!(REGIONS.last(), Some(&"us-west4"));
    }

    #[test]
    fn test_catalog_entries_are_lowercase_codes() {
        for region in REGIONS {
            assert!(
                region
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
                "unexpected character in region code {region:?}"
            );
        }
    }
}
