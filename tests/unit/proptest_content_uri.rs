//! Property-based tests for content URI parsing
//!
//! Uses proptest to verify properties that should hold for all inputs.

use idmapper::core::models::{ContentUri, is_valid_uuid};
use proptest::prelude::*;

const UUID_PATTERN: &str = "[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}";

proptest! {
    /// Any canonical UUID behind any host round-trips out of the location
    #[test]
    fn canonical_location_yields_its_uuid(
        host in "[a-z]{1,10}(\\.[a-z]{2,5}){0,2}",
        uuid in UUID_PATTERN,
    ) {
        let location = format!("http://{host}/content/{uuid}");
        let parsed = ContentUri::parse(&location).unwrap();
        prop_assert_eq!(parsed.host(), host.as_str());
        prop_assert_eq!(parsed.uuid(), uuid.as_str());
    }

    /// A successful parse always yields a valid UUID
    #[test]
    fn parsed_uuid_is_always_valid(location in "\\PC{0,80}") {
        if let Ok(parsed) = ContentUri::parse(&location) {
            prop_assert!(is_valid_uuid(parsed.uuid()));
        }
    }

    /// Strings without the `/content/` marker never parse
    #[test]
    fn locations_without_content_segment_rejected(location in "[a-z:/.]{0,40}") {
        prop_assume!(!location.contains("/content/"));
        prop_assert!(ContentUri::parse(&location).is_err());
    }

    /// Canonical UUIDs are 36 characters
    #[test]
    fn valid_uuids_have_canonical_length(uuid in UUID_PATTERN) {
        prop_assert!(is_valid_uuid(&uuid));
        prop_assert_eq!(uuid.len(), 36);
    }
}
