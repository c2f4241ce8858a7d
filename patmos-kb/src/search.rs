//! Free-text search
//!
//! Case-insensitive substring filtering over a fixed, documented field set
//! per entity. No ranking and no index: results keep curated table order,
//! and an empty query matches every record (empty-substring semantics,
//! kept deliberately - see the `search` contract).

use crate::Knowledge;
use patmos_core::{BiblicalParallel, PropheticPassage, PropheticPattern, TimeProphecy};

/// A record that exposes its searchable text.
///
/// Implementations list the exact fields that participate in matching;
/// anything not collected here is invisible to `search`.
pub trait Searchable {
    /// Push every searchable field of this record into `out`.
    fn collect_text<'a>(&'a self, out: &mut Vec<&'a str>);

    /// Whether this record matches a query, case-insensitively.
    ///
    /// The empty query matches every record.
    fn matches(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let needle = query.to_lowercase();
        let mut haystacks = Vec::new();
        self.collect_text(&mut haystacks);
        haystacks
            .iter()
            .any(|text| text.to_lowercase().contains(&needle))
    }
}

/// Searchable fields: code, name, category tag, anchor events and verses,
/// fulfillment narrative, spiritual significance, connection, key verses,
/// misunderstandings, applications.
impl Searchable for TimeProphecy {
    fn collect_text<'a>(&'a self, out: &mut Vec<&'a str>) {
        out.push(&self.code);
        out.push(&self.name);
        out.push(self.category.as_tag());
        for anchor in [&self.start, &self.end] {
            out.push(&anchor.event);
            out.push(&anchor.date);
            out.push(&anchor.verse);
        }
        out.push(&self.fulfillment.event);
        out.push(&self.fulfillment.description);
        out.push(&self.fulfillment.significance);
        out.extend(self.fulfillment.key_figures.iter().map(String::as_str));
        out.extend(self.spiritual_significance.iter().map(String::as_str));
        out.push(&self.connection);
        out.extend(self.key_verses.iter().map(String::as_str));
        out.extend(self.misunderstandings.iter().map(String::as_str));
        out.extend(self.applications.iter().map(String::as_str));
    }
}

/// Searchable fields: id, title, category tag, both event references,
/// titles, and descriptions, echoes, escalation, lesson.
impl Searchable for BiblicalParallel {
    fn collect_text<'a>(&'a self, out: &mut Vec<&'a str>) {
        out.push(&self.id);
        out.push(&self.title);
        out.push(self.category.as_tag());
        for event in [&self.earlier, &self.later] {
            out.push(&event.reference);
            out.push(&event.title);
            out.push(&event.description);
        }
        out.extend(self.echoes.iter().map(String::as_str));
        out.push(&self.escalation);
        out.push(&self.lesson);
    }
}

/// Searchable fields: id, reference, title, quoted text, category tag,
/// primary context, every fulfillment's event/era/description/markers/
/// connections/proof texts, notes, key verses.
impl Searchable for PropheticPassage {
    fn collect_text<'a>(&'a self, out: &mut Vec<&'a str>) {
        out.push(&self.id);
        out.push(&self.reference);
        out.push(&self.title);
        out.push(&self.text);
        out.push(self.category.as_tag());
        out.push(&self.primary_context);
        for fulfillment in &self.fulfillments {
            out.push(&fulfillment.event);
            out.push(&fulfillment.era);
            out.push(&fulfillment.description);
            out.extend(fulfillment.markers.iter().map(String::as_str));
            out.push(&fulfillment.historical_connection);
            out.push(&fulfillment.spiritual_significance);
            out.extend(fulfillment.proof_texts.iter().map(String::as_str));
        }
        out.extend(self.notes.iter().map(String::as_str));
        out.extend(self.key_verses.iter().map(String::as_str));
    }
}

/// Searchable fields: id, name, description, template, every example's
/// reference and three layer descriptions.
impl Searchable for PropheticPattern {
    fn collect_text<'a>(&'a self, out: &mut Vec<&'a str>) {
        out.push(&self.id);
        out.push(&self.name);
        out.push(&self.description);
        out.push(&self.template);
        for example in &self.examples {
            out.push(&example.reference);
            out.push(&example.near);
            out.push(&example.intermediate);
            out.push(&example.ultimate);
        }
    }
}

/// One cross-table search result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SearchHit<'a> {
    Prophecy(&'a TimeProphecy),
    Parallel(&'a BiblicalParallel),
    Passage(&'a PropheticPassage),
    Pattern(&'a PropheticPattern),
}

impl<'a> SearchHit<'a> {
    /// The record's unique key, whichever table it came from.
    pub fn key(&self) -> &'a str {
        match self {
            SearchHit::Prophecy(p) => &p.code,
            SearchHit::Parallel(p) => &p.id,
            SearchHit::Passage(p) => &p.id,
            SearchHit::Pattern(p) => &p.id,
        }
    }
}

impl Knowledge {
    /// Search every table.
    ///
    /// Results preserve curated order within each table, with tables
    /// concatenated as prophecies, parallels, passages, patterns. The
    /// empty query matches all records.
    pub fn search(&self, query: &str) -> Vec<SearchHit<'_>> {
        let mut hits = Vec::new();
        hits.extend(self.search_prophecies(query).into_iter().map(SearchHit::Prophecy));
        hits.extend(self.search_parallels(query).into_iter().map(SearchHit::Parallel));
        hits.extend(self.search_passages(query).into_iter().map(SearchHit::Passage));
        hits.extend(self.search_patterns(query).into_iter().map(SearchHit::Pattern));
        hits
    }

    pub fn search_prophecies(&self, query: &str) -> Vec<&TimeProphecy> {
        self.prophecies().iter().filter(|p| p.matches(query)).collect()
    }

    pub fn search_parallels(&self, query: &str) -> Vec<&BiblicalParallel> {
        self.parallels().iter().filter(|p| p.matches(query)).collect()
    }

    pub fn search_passages(&self, query: &str) -> Vec<&PropheticPassage> {
        self.passages().iter().filter(|p| p.matches(query)).collect()
    }

    pub fn search_patterns(&self, query: &str) -> Vec<&PropheticPattern> {
        self.patterns().iter().filter(|p| p.matches(query)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge;

    #[test]
    fn test_empty_query_matches_everything() {
        let kb = knowledge();
        assert_eq!(kb.search("").len(), kb.tables().len());
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let kb = knowledge();
        let lower = kb.search("sanctuary");
        let upper = kb.search("SANCTUARY");
        assert!(!lower.is_empty());
        assert_eq!(lower, upper);
    }

    #[test]
    fn test_search_preserves_table_order() {
        let kb = knowledge();
        let hits = kb.search("");
        let keys: Vec<&str> = hits.iter().map(|h| h.key()).collect();
        let mut expected: Vec<&str> = Vec::new();
        expected.extend(kb.prophecies().iter().map(|p| p.code.as_str()));
        expected.extend(kb.parallels().iter().map(|p| p.id.as_str()));
        expected.extend(kb.passages().iter().map(|p| p.id.as_str()));
        expected.extend(kb.patterns().iter().map(|p| p.id.as_str()));
        assert_eq!(keys, expected);
    }

    #[test]
    fn test_no_match_returns_empty() {
        let kb = knowledge();
        assert!(kb.search("zzzzxqvw").is_empty());
    }
}
