//! Derived views over the tables
//!
//! Pure projections used by library browsers and study cards: timeline
//! ordering, cross-passage layer slices, and category summaries.

use crate::Knowledge;
use patmos_core::{
    FulfillmentLayer, PassageCategory, PatternExample, ProphecyCategory, PropheticFulfillment,
    PropheticPassage, TimeProphecy,
};

/// One passage's fulfillment at a particular layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerView<'a> {
    pub passage: &'a PropheticPassage,
    pub fulfillment: &'a PropheticFulfillment,
}

impl Knowledge {
    /// Prophecies ordered by starting-anchor year, earliest first.
    ///
    /// The sort is stable, so prophecies sharing a starting year keep
    /// their curated relative order.
    pub fn timeline(&self) -> Vec<&TimeProphecy> {
        let mut ordered: Vec<&TimeProphecy> = self.prophecies().iter().collect();
        ordered.sort_by_key(|p| p.start.year);
        ordered
    }

    /// Every fulfillment at `layer`, across all passages, in table order.
    pub fn fulfillments_at(&self, layer: FulfillmentLayer) -> Vec<LayerView<'_>> {
        self.passages()
            .iter()
            .filter_map(|passage| {
                passage.fulfillment_at(layer).map(|fulfillment| LayerView {
                    passage,
                    fulfillment,
                })
            })
            .collect()
    }

    /// Record count per prophecy category, in enumeration order.
    pub fn prophecy_category_counts(&self) -> Vec<(ProphecyCategory, usize)> {
        ProphecyCategory::ALL
            .iter()
            .map(|&category| (category, self.prophecies_in(category).len()))
            .collect()
    }

    /// Record count per passage category, in enumeration order.
    pub fn passage_category_counts(&self) -> Vec<(PassageCategory, usize)> {
        PassageCategory::ALL
            .iter()
            .map(|&category| (category, self.passages_in(category).len()))
            .collect()
    }

    /// A pattern's worked example for a given passage reference.
    pub fn pattern_example_for(
        &self,
        pattern_id: &str,
        reference: &str,
    ) -> Option<&PatternExample> {
        self.pattern(pattern_id)?
            .examples
            .iter()
            .find(|example| example.reference == reference)
    }
}
