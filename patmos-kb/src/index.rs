//! The knowledge index
//!
//! `Knowledge` owns a validated table set plus key-to-position maps built
//! once at construction, so keyed lookup is O(1) instead of a scan per
//! call. Instances are immutable after construction and safe to share
//! across any number of reader threads without synchronization.

use crate::content::{canonical_tables, Tables};
use crate::validate::validate;
use once_cell::sync::Lazy;
use patmos_core::{
    BiblicalParallel, KbError, KbResult, ParallelCategory, PassageCategory, ProphecyCategory,
    PropheticPassage, PropheticPattern, TimeProphecy, Violation,
};
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use tracing::debug;

static CANONICAL: Lazy<Knowledge> = Lazy::new(|| {
    let tables = canonical_tables()
        .unwrap_or_else(|e| panic!("embedded knowledge-base content failed to parse: {e}"));
    Knowledge::new(tables).unwrap_or_else(|violations| {
        let report: Vec<String> = violations.iter().map(|v| v.to_string()).collect();
        panic!(
            "embedded knowledge-base content failed validation:\n  {}",
            report.join("\n  ")
        )
    })
});

/// The canonical knowledge base.
///
/// Built from the embedded tables on first access. Malformed embedded
/// content is fatal here: the process refuses to serve partial or broken
/// data (a load-time defect, not a runtime condition).
pub fn knowledge() -> &'static Knowledge {
    &CANONICAL
}

/// A validated, indexed, immutable set of knowledge-base tables.
#[derive(Debug, Clone)]
pub struct Knowledge {
    tables: Tables,
    prophecies_by_code: HashMap<String, usize>,
    parallels_by_id: HashMap<String, usize>,
    passages_by_id: HashMap<String, usize>,
    patterns_by_id: HashMap<String, usize>,
}

impl Knowledge {
    /// Validate a table set and build the key indices.
    ///
    /// Returns every violation found when the content is malformed; the
    /// caller decides whether that is fatal (it is, for the canonical
    /// tables) or a test expectation.
    pub fn new(tables: Tables) -> Result<Self, Vec<Violation>> {
        let violations = validate(&tables);
        if !violations.is_empty() {
            return Err(violations);
        }

        debug!(
            prophecies = tables.prophecies.len(),
            parallels = tables.parallels.len(),
            passages = tables.passages.len(),
            patterns = tables.patterns.len(),
            "knowledge base loaded"
        );

        Ok(Self::index(tables))
    }

    /// Build without refusing on content violations.
    ///
    /// Violations are logged (by the validation pass) and otherwise
    /// ignored; lookups and relationship expansion behave best-effort, so
    /// an unresolved link resolves to nothing and a duplicated key is won
    /// by the later record. For authoring tools and tests - the canonical
    /// tables always load through [`Knowledge::new`].
    pub fn new_lenient(tables: Tables) -> Self {
        let _ = validate(&tables);
        Self::index(tables)
    }

    fn index(tables: Tables) -> Self {
        let prophecies_by_code = tables
            .prophecies
            .iter()
            .enumerate()
            .map(|(i, p)| (p.code.clone(), i))
            .collect();
        let parallels_by_id = tables
            .parallels
            .iter()
            .enumerate()
            .map(|(i, p)| (p.id.clone(), i))
            .collect();
        let passages_by_id = tables
            .passages
            .iter()
            .enumerate()
            .map(|(i, p)| (p.id.clone(), i))
            .collect();
        let patterns_by_id = tables
            .patterns
            .iter()
            .enumerate()
            .map(|(i, p)| (p.id.clone(), i))
            .collect();

        Self {
            tables,
            prophecies_by_code,
            parallels_by_id,
            passages_by_id,
            patterns_by_id,
        }
    }

    /// The underlying tables, in curated presentation order.
    pub fn tables(&self) -> &Tables {
        &self.tables
    }

    pub fn prophecies(&self) -> &[TimeProphecy] {
        &self.tables.prophecies
    }

    pub fn parallels(&self) -> &[BiblicalParallel] {
        &self.tables.parallels
    }

    pub fn passages(&self) -> &[PropheticPassage] {
        &self.tables.passages
    }

    pub fn patterns(&self) -> &[PropheticPattern] {
        &self.tables.patterns
    }

    // === Lookup by key ===
    //
    // Absence is an expected outcome, never a panic. The empty string is
    // simply a key that is not present.

    /// Look up a time prophecy by its `@`-code.
    pub fn prophecy(&self, code: &str) -> Option<&TimeProphecy> {
        self.prophecies_by_code
            .get(code)
            .map(|&i| &self.tables.prophecies[i])
    }

    /// Look up a parallel by id.
    pub fn parallel(&self, id: &str) -> Option<&BiblicalParallel> {
        self.parallels_by_id
            .get(id)
            .map(|&i| &self.tables.parallels[i])
    }

    /// Look up a prophetic passage by id.
    pub fn passage(&self, id: &str) -> Option<&PropheticPassage> {
        self.passages_by_id
            .get(id)
            .map(|&i| &self.tables.passages[i])
    }

    /// Look up a pattern by id.
    pub fn pattern(&self, id: &str) -> Option<&PropheticPattern> {
        self.patterns_by_id
            .get(id)
            .map(|&i| &self.tables.patterns[i])
    }

    // === Category filters ===
    //
    // Ordered subsequences of the tables; an empty Vec when nothing
    // matches, never an error.

    pub fn prophecies_in(&self, category: ProphecyCategory) -> Vec<&TimeProphecy> {
        self.tables
            .prophecies
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    pub fn parallels_in(&self, category: ParallelCategory) -> Vec<&BiblicalParallel> {
        self.tables
            .parallels
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    pub fn passages_in(&self, category: PassageCategory) -> Vec<&PropheticPassage> {
        self.tables
            .passages
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    // === String-tag filters ===
    //
    // For callers holding a tag as text (query parameters, CLI input).
    // An unknown tag is a caller bug and fails fast with the full tag set
    // named in the error; it is never treated as an empty result.

    /// Filter prophecies by a category tag given as text.
    pub fn prophecies_tagged(&self, tag: &str) -> KbResult<Vec<&TimeProphecy>> {
        let category: ProphecyCategory = tag.parse().map_err(KbError::Tag)?;
        Ok(self.prophecies_in(category))
    }

    /// Filter parallels by a category tag given as text.
    pub fn parallels_tagged(&self, tag: &str) -> KbResult<Vec<&BiblicalParallel>> {
        let category: ParallelCategory = tag.parse().map_err(KbError::Tag)?;
        Ok(self.parallels_in(category))
    }

    /// Filter passages by a category tag given as text.
    pub fn passages_tagged(&self, tag: &str) -> KbResult<Vec<&PropheticPassage>> {
        let category: PassageCategory = tag.parse().map_err(KbError::Tag)?;
        Ok(self.passages_in(category))
    }

    /// SHA-256 fingerprint (hex) of the canonical JSON serialization.
    ///
    /// Stable identity for a content revision; two `Knowledge` instances
    /// with equal tables produce equal fingerprints.
    pub fn fingerprint(&self) -> String {
        let json = serde_json::to_vec(&self.tables)
            .unwrap_or_else(|e| panic!("knowledge tables failed to serialize: {e}"));
        let mut hasher = Sha256::new();
        hasher.update(&json);
        hex::encode(hasher.finalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_knowledge_loads() {
        let kb = knowledge();
        assert!(!kb.prophecies().is_empty());
    }

    #[test]
    fn test_lookup_hit_returns_matching_key() {
        let kb = knowledge();
        for prophecy in kb.prophecies() {
            let found = kb.prophecy(&prophecy.code).expect("indexed code resolves");
            assert_eq!(found.code, prophecy.code);
        }
        for passage in kb.passages() {
            let found = kb.passage(&passage.id).expect("indexed id resolves");
            assert_eq!(found.id, passage.id);
        }
    }

    #[test]
    fn test_lookup_miss_is_none() {
        let kb = knowledge();
        assert!(kb.prophecy("does-not-exist").is_none());
        assert!(kb.prophecy("").is_none());
        assert!(kb.parallel("@2300").is_none());
        assert!(kb.pattern("nope").is_none());
    }

    #[test]
    fn test_filters_are_sound_and_complete() {
        let kb = knowledge();
        for category in ProphecyCategory::ALL {
            let matched = kb.prophecies_in(category);
            assert!(matched.iter().all(|p| p.category == category));
            let expected = kb
                .prophecies()
                .iter()
                .filter(|p| p.category == category)
                .count();
            assert_eq!(matched.len(), expected);
        }
    }

    #[test]
    fn test_string_tag_filters_parse_or_fail_fast() {
        let kb = knowledge();
        let messianic = kb.passages_tagged("messianic").expect("known tag parses");
        assert_eq!(messianic, kb.passages_in(PassageCategory::Messianic));

        let err = kb.passages_tagged("apocryphal").unwrap_err();
        assert!(matches!(err, KbError::Tag(_)));
        assert!(err.to_string().contains("passage category"));
    }

    #[test]
    fn test_fingerprint_is_stable() {
        let kb = knowledge();
        assert_eq!(kb.fingerprint(), kb.fingerprint());
        assert_eq!(kb.fingerprint().len(), 64);

        // Equal tables produce equal fingerprints in a fresh instance.
        let rebuilt = Knowledge::new(kb.tables().clone()).expect("canonical tables revalidate");
        assert_eq!(rebuilt.fingerprint(), kb.fingerprint());
    }
}
