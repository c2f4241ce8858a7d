//! Core record structures
//!
//! Plain data shapes for the four knowledge-base tables. Records are
//! authored once as static content and never mutated at runtime; nothing
//! here carries behavior beyond small accessors.

use crate::{
    FulfillmentLayer, ParallelCategory, PassageCategory, ProphecyCategory, TimeUnit,
};
use serde::{Deserialize, Serialize};

// ============================================================================
// TIME PROPHECIES
// ============================================================================

/// A named prophetic time span with a historically anchored start and end.
///
/// `code` is the unique key (`@`-prefixed lowercase token, e.g. `@2300`).
/// `parallels_and_patterns` links to other prophecy codes; link resolution
/// is validated when the tables are loaded, not by the type system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeProphecy {
    pub code: String,
    pub name: String,
    pub duration: ProphecyDuration,
    pub category: ProphecyCategory,
    pub start: ProphecyAnchor,
    pub end: ProphecyAnchor,
    pub calculation: Calculation,
    pub fulfillment: HistoricalFulfillment,
    pub spiritual_significance: Vec<String>,
    pub connection: String,
    pub parallels_and_patterns: Vec<String>,
    pub key_verses: Vec<String>,
    pub misunderstandings: Vec<String>,
    pub applications: Vec<String>,
}

/// Length of a prophetic span and the unit it is reckoned in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProphecyDuration {
    pub value: u32,
    pub unit: TimeUnit,
}

/// Starting or ending point of a time prophecy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProphecyAnchor {
    /// Event the span is anchored to
    pub event: String,
    /// Display form of the date (e.g. "457 BC")
    pub date: String,
    /// Signed ordinal year for timeline ordering; negative is BC
    pub year: i32,
    /// Supporting verse reference
    pub verse: String,
}

/// Ordered derivation of a prophecy's span, with a verification note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Calculation {
    pub steps: Vec<String>,
    pub verification: String,
}

/// The historical event a prophecy terminated in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoricalFulfillment {
    pub event: String,
    pub date: String,
    pub description: String,
    pub key_figures: Vec<String>,
    pub significance: String,
}

// ============================================================================
// PARALLELS
// ============================================================================

/// A mirrored pair of narrative events connected by thematic echoes.
///
/// Exactly two event descriptors: the earlier narrative and the later one
/// that is read as escalating it. No N-way parallels in this model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BiblicalParallel {
    pub id: String,
    pub title: String,
    pub category: ParallelCategory,
    pub earlier: ParallelEvent,
    pub later: ParallelEvent,
    pub echoes: Vec<String>,
    pub escalation: String,
    pub lesson: String,
}

/// One side of a parallel: a located narrative event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParallelEvent {
    pub reference: String,
    pub title: String,
    pub description: String,
}

// ============================================================================
// PROPHETIC PASSAGES
// ============================================================================

/// One Scripture passage analyzed across multiple fulfillment layers.
///
/// Layer tags within `fulfillments` are distinct per passage and
/// `related_passages` ids resolve within the passage table; both are
/// checked by the load-time validation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropheticPassage {
    pub id: String,
    pub reference: String,
    pub title: String,
    pub text: String,
    pub category: PassageCategory,
    pub primary_context: String,
    pub fulfillments: Vec<PropheticFulfillment>,
    pub notes: Vec<String>,
    pub key_verses: Vec<String>,
    #[serde(default)]
    pub related_passages: Vec<String>,
}

impl PropheticPassage {
    /// The fulfillment at a given layer, if the passage declares one.
    pub fn fulfillment_at(&self, layer: FulfillmentLayer) -> Option<&PropheticFulfillment> {
        self.fulfillments.iter().find(|f| f.layer == layer)
    }
}

/// One layer's reading of a prophetic passage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropheticFulfillment {
    pub layer: FulfillmentLayer,
    pub event: String,
    pub era: String,
    pub description: String,
    pub markers: Vec<String>,
    pub historical_connection: String,
    pub spiritual_significance: String,
    pub proof_texts: Vec<String>,
}

// ============================================================================
// PROPHETIC PATTERNS
// ============================================================================

/// A reusable interpretive template instantiated across multiple passages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropheticPattern {
    pub id: String,
    pub name: String,
    pub description: String,
    pub template: String,
    pub examples: Vec<PatternExample>,
}

/// One worked example of a pattern, mapped onto the three layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternExample {
    pub reference: String,
    pub near: String,
    pub intermediate: String,
    pub ultimate: String,
}
