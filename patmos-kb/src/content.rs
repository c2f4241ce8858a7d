//! Embedded canonical content
//!
//! The curated tables ship inside the crate as JSON fixtures and are
//! deserialized once. Content is data, not code: serde rejects unknown
//! category and layer tags at this boundary, before validation even runs.

use patmos_core::{BiblicalParallel, PropheticPassage, PropheticPattern, TimeProphecy};
use serde::{Deserialize, Serialize};

const PROPHECIES_JSON: &str = include_str!("../content/prophecies.json");
const PARALLELS_JSON: &str = include_str!("../content/parallels.json");
const PASSAGES_JSON: &str = include_str!("../content/passages.json");
const PATTERNS_JSON: &str = include_str!("../content/patterns.json");

/// The four knowledge-base tables, each in curated presentation order.
///
/// Consumers receive references and must not read semantic meaning into the
/// ordering beyond "this is the order the curators chose to present".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tables {
    pub prophecies: Vec<TimeProphecy>,
    pub parallels: Vec<BiblicalParallel>,
    pub passages: Vec<PropheticPassage>,
    pub patterns: Vec<PropheticPattern>,
}

impl Tables {
    /// Total record count across all four tables.
    pub fn len(&self) -> usize {
        self.prophecies.len() + self.parallels.len() + self.passages.len() + self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Deserialize the embedded canonical tables.
///
/// A deserialization failure here means the shipped fixtures are broken,
/// which is a build defect; callers surface it as fatal.
pub fn canonical_tables() -> Result<Tables, serde_json::Error> {
    Ok(Tables {
        prophecies: serde_json::from_str(PROPHECIES_JSON)?,
        parallels: serde_json::from_str(PARALLELS_JSON)?,
        passages: serde_json::from_str(PASSAGES_JSON)?,
        patterns: serde_json::from_str(PATTERNS_JSON)?,
    })
}
