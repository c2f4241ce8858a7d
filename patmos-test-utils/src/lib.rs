//! Patmos Test Utilities
//!
//! Centralized test infrastructure for the workspace:
//! - Record builders with minimal valid defaults
//! - Fixture table sets for validation and broken-link scenarios
//! - Proptest generators for tags and search queries

pub use patmos_core::{
    BiblicalParallel, Calculation, FulfillmentLayer, HistoricalFulfillment, ParallelCategory,
    ParallelEvent, PassageCategory, PatternExample, ProphecyAnchor, ProphecyCategory,
    ProphecyDuration, PropheticFulfillment, PropheticPassage, PropheticPattern, TimeProphecy,
    TimeUnit,
};
pub use patmos_kb::Tables;

use proptest::prelude::*;

// ============================================================================
// RECORD BUILDERS
// ============================================================================

/// A minimal valid time prophecy under the given code.
pub fn prophecy(code: &str) -> TimeProphecy {
    TimeProphecy {
        code: code.to_string(),
        name: format!("Test prophecy {code}"),
        duration: ProphecyDuration {
            value: 70,
            unit: TimeUnit::Years,
        },
        category: ProphecyCategory::Exile,
        start: anchor("A decree goes forth", "605 BC", -605),
        end: anchor("The span expires", "536 BC", -536),
        calculation: Calculation {
            steps: vec!["Count seventy years from the decree".to_string()],
            verification: "The end lands where the start demands".to_string(),
        },
        fulfillment: HistoricalFulfillment {
            event: "The expected event arrives".to_string(),
            date: "536 BC".to_string(),
            description: "The span closes on schedule".to_string(),
            key_figures: vec!["A witness".to_string()],
            significance: "Time kept".to_string(),
        },
        spiritual_significance: vec!["Spans are measured".to_string()],
        connection: "Connected to the wider timeline".to_string(),
        parallels_and_patterns: vec![],
        key_verses: vec!["Jeremiah 25:11".to_string()],
        misunderstandings: vec![],
        applications: vec![],
    }
}

/// A prophecy whose pattern-links point at the given codes.
pub fn prophecy_with_links(code: &str, links: &[&str]) -> TimeProphecy {
    let mut record = prophecy(code);
    record.parallels_and_patterns = links.iter().map(|s| s.to_string()).collect();
    record
}

fn anchor(event: &str, date: &str, year: i32) -> ProphecyAnchor {
    ProphecyAnchor {
        event: event.to_string(),
        date: date.to_string(),
        year,
        verse: "Daniel 9:2".to_string(),
    }
}

/// A minimal valid parallel under the given id.
pub fn parallel(id: &str) -> BiblicalParallel {
    BiblicalParallel {
        id: id.to_string(),
        title: format!("Test parallel {id}"),
        category: ParallelCategory::Deliverance,
        earlier: parallel_event("Exodus 14", "The sea opens"),
        later: parallel_event("Romans 6:4", "The grave opens"),
        echoes: vec!["Passage through death-water".to_string()],
        escalation: "The later deliverance outruns the earlier".to_string(),
        lesson: "Deliverance repeats at greater depth".to_string(),
    }
}

fn parallel_event(reference: &str, title: &str) -> ParallelEvent {
    ParallelEvent {
        reference: reference.to_string(),
        title: title.to_string(),
        description: format!("{title}, described"),
    }
}

/// A minimal valid passage with one fulfillment at each given layer.
pub fn passage(id: &str, layers: &[FulfillmentLayer]) -> PropheticPassage {
    PropheticPassage {
        id: id.to_string(),
        reference: "Isaiah 40:1".to_string(),
        title: format!("Test passage {id}"),
        text: "Comfort ye, comfort ye my people".to_string(),
        category: PassageCategory::Restoration,
        primary_context: "A word of comfort to exiles".to_string(),
        fulfillments: layers.iter().map(|&layer| fulfillment(layer)).collect(),
        notes: vec![],
        key_verses: vec!["Isaiah 40:1".to_string()],
        related_passages: vec![],
    }
}

/// A passage whose related-passage list points at the given ids.
pub fn passage_with_related(
    id: &str,
    layers: &[FulfillmentLayer],
    related: &[&str],
) -> PropheticPassage {
    let mut record = passage(id, layers);
    record.related_passages = related.iter().map(|s| s.to_string()).collect();
    record
}

/// A minimal fulfillment at the given layer.
pub fn fulfillment(layer: FulfillmentLayer) -> PropheticFulfillment {
    PropheticFulfillment {
        layer,
        event: "A fulfillment event".to_string(),
        era: "an era".to_string(),
        description: "The passage lands in history".to_string(),
        markers: vec!["a textual marker".to_string()],
        historical_connection: "Anchored in the record".to_string(),
        spiritual_significance: "Meaning carried forward".to_string(),
        proof_texts: vec!["Luke 24:27".to_string()],
    }
}

/// A minimal valid pattern under the given id.
pub fn pattern(id: &str) -> PropheticPattern {
    PropheticPattern {
        id: id.to_string(),
        name: format!("Test pattern {id}"),
        description: "A reusable interpretive shape".to_string(),
        template: "Shadow -> Substance -> Consummation".to_string(),
        examples: vec![PatternExample {
            reference: "Exodus 12".to_string(),
            near: "The first instance".to_string(),
            intermediate: "The gospel-age instance".to_string(),
            ultimate: "The final instance".to_string(),
        }],
    }
}

// ============================================================================
// FIXTURE TABLE SETS
// ============================================================================

/// A small, fully valid table set: three linked prophecies, one parallel,
/// two cross-linked passages, one pattern.
pub fn valid_tables() -> Tables {
    Tables {
        prophecies: vec![
            prophecy_with_links("@a", &["@b", "@c"]),
            prophecy("@b"),
            prophecy("@c"),
        ],
        parallels: vec![parallel("test-parallel")],
        passages: vec![
            passage_with_related(
                "first-passage",
                &[FulfillmentLayer::Near, FulfillmentLayer::Ultimate],
                &["second-passage"],
            ),
            passage("second-passage", &[FulfillmentLayer::Intermediate]),
        ],
        patterns: vec![pattern("test-pattern")],
    }
}

// ============================================================================
// PROPTEST GENERATORS
// ============================================================================

/// Any prophecy category.
pub fn any_prophecy_category() -> impl Strategy<Value = ProphecyCategory> {
    prop::sample::select(ProphecyCategory::ALL.to_vec())
}

/// Any parallel category.
pub fn any_parallel_category() -> impl Strategy<Value = ParallelCategory> {
    prop::sample::select(ParallelCategory::ALL.to_vec())
}

/// Any passage category.
pub fn any_passage_category() -> impl Strategy<Value = PassageCategory> {
    prop::sample::select(PassageCategory::ALL.to_vec())
}

/// Any fulfillment layer.
pub fn any_layer() -> impl Strategy<Value = FulfillmentLayer> {
    prop::sample::select(FulfillmentLayer::ALL.to_vec())
}

/// Search queries of mixed case, spacing, and punctuation.
pub fn any_query() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 :@-]{0,16}"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_tables_fixture_is_valid() {
        let tables = valid_tables();
        assert!(patmos_kb::validate(&tables).is_empty());
    }
}
