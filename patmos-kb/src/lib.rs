//! Patmos KB - The Prophetic/Typological Knowledge Base
//!
//! A read-only, in-memory content index of biblical cross-references:
//! time prophecies, typological parallels, prophetic passages read across
//! three fulfillment layers, and reusable interpretive patterns.
//!
//! The canonical tables are embedded in the crate, validated once at first
//! access, and immutable afterward. Every operation is a pure function
//! over that data: keyed lookup, category filtering, substring search,
//! relationship expansion, and derived views. There is no mutation, no
//! persistence, and no I/O here.

mod content;
mod index;
mod related;
mod search;
mod validate;
mod views;

pub use content::{canonical_tables, Tables};
pub use index::{knowledge, Knowledge};
pub use related::Layered;
pub use search::{SearchHit, Searchable};
pub use validate::validate;
pub use views::LayerView;

// Re-export the record types so downstream code needs only this crate.
pub use patmos_core::{
    BiblicalParallel, Calculation, FulfillmentLayer, HistoricalFulfillment, KbError, KbResult,
    ParallelCategory, ParallelEvent, PassageCategory, PatternExample, ProphecyAnchor,
    ProphecyCategory, ProphecyDuration, PropheticFulfillment, PropheticPassage, PropheticPattern,
    TagParseError, TimeProphecy, TimeUnit, Violation,
};
