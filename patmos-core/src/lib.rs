//! Patmos Core - Record Types
//!
//! Pure data structures for the prophecy knowledge base. All other crates
//! depend on this. This crate contains ONLY data types - no table content,
//! no lookup logic.

mod entities;
mod enums;
mod error;

pub use entities::{
    BiblicalParallel, Calculation, HistoricalFulfillment, ParallelEvent, PatternExample,
    ProphecyAnchor, ProphecyDuration, PropheticFulfillment, PropheticPassage, PropheticPattern,
    TimeProphecy,
};
pub use enums::{
    FulfillmentLayer, ParallelCategory, PassageCategory, ProphecyCategory, TimeUnit,
};
pub use error::{KbError, KbResult, TagParseError, Violation};

// ============================================================================
// TESTS
// ============================================================================


// ============================================================================
// PROPERTY-BASED TESTS
// ============================================================================

#[cfg(test)]
mod prop_tests {
    use super::*;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn any_passage_category() -> impl Strategy<Value = PassageCategory> {
        prop::sample::select(PassageCategory::ALL.to_vec())
    }

    fn any_prophecy_category() -> impl Strategy<Value = ProphecyCategory> {
        prop::sample::select(ProphecyCategory::ALL.to_vec())
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Tag parsing is case-insensitive for every category.
        #[test]
        fn prop_passage_tags_parse_case_insensitively(category in any_passage_category()) {
            let upper = category.as_tag().to_uppercase();
            prop_assert_eq!(PassageCategory::from_str(&upper).unwrap(), category);
        }

        /// Serde and FromStr agree on the wire form of a tag.
        #[test]
        fn prop_prophecy_tag_wire_forms_agree(category in any_prophecy_category()) {
            let json = serde_json::to_string(&category).unwrap();
            let tag: String = serde_json::from_str::<String>(&json).unwrap();
            prop_assert_eq!(ProphecyCategory::from_str(&tag).unwrap(), category);
            prop_assert_eq!(tag.as_str(), category.as_tag());
        }

        /// Arbitrary alphabetic garbage never parses into a layer.
        #[test]
        fn prop_garbage_layer_tokens_fail(token in "[a-z]{9,16}") {
            prop_assume!(!["near", "intermediate", "ultimate"].contains(&token.as_str()));
            prop_assert!(FulfillmentLayer::from_str(&token).is_err());
        }
    }
}
