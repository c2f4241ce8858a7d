//! Relationship expansion and layered lookup

use crate::Knowledge;
use patmos_core::{BiblicalParallel, PropheticPassage, PropheticPattern, TimeProphecy};

impl Knowledge {
    /// Resolve a prophecy's pattern-links into full records.
    ///
    /// Links resolve in declared order. A link that does not resolve is
    /// silently dropped - best-effort enrichment for presentation code -
    /// and an unknown `code` yields an empty Vec. (Canonical tables cannot
    /// carry broken links; validation refuses them at load.)
    pub fn related_prophecies(&self, code: &str) -> Vec<&TimeProphecy> {
        self.prophecy(code)
            .map(|p| {
                p.parallels_and_patterns
                    .iter()
                    .filter_map(|target| self.prophecy(target))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Resolve a passage's related-passage ids into full records.
    ///
    /// Same contract as [`Knowledge::related_prophecies`].
    pub fn related_passages(&self, id: &str) -> Vec<&PropheticPassage> {
        self.passage(id)
            .map(|p| {
                p.related_passages
                    .iter()
                    .filter_map(|target| self.passage(target))
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Keyed lookup over a primary knowledge base with a fallback behind it.
///
/// Precedence is fixed and explicit: the primary layer is consulted first,
/// and only a miss falls through to the fallback. Records are never merged
/// across layers - a primary record shadows a fallback record with the
/// same key in its entirety. Table iteration and search stay per-layer by
/// design; only keyed access is layered.
#[derive(Debug, Clone, Copy)]
pub struct Layered<'a> {
    primary: &'a Knowledge,
    fallback: &'a Knowledge,
}

impl<'a> Layered<'a> {
    pub fn new(primary: &'a Knowledge, fallback: &'a Knowledge) -> Self {
        Self { primary, fallback }
    }

    pub fn primary(&self) -> &'a Knowledge {
        self.primary
    }

    pub fn fallback(&self) -> &'a Knowledge {
        self.fallback
    }

    pub fn prophecy(&self, code: &str) -> Option<&'a TimeProphecy> {
        self.primary
            .prophecy(code)
            .or_else(|| self.fallback.prophecy(code))
    }

    pub fn parallel(&self, id: &str) -> Option<&'a BiblicalParallel> {
        self.primary
            .parallel(id)
            .or_else(|| self.fallback.parallel(id))
    }

    pub fn passage(&self, id: &str) -> Option<&'a PropheticPassage> {
        self.primary
            .passage(id)
            .or_else(|| self.fallback.passage(id))
    }

    pub fn pattern(&self, id: &str) -> Option<&'a PropheticPattern> {
        self.primary
            .pattern(id)
            .or_else(|| self.fallback.pattern(id))
    }
}

#[cfg(test)]
mod tests {
    use crate::knowledge;

    #[test]
    fn test_related_prophecies_resolve_in_declared_order() {
        let kb = knowledge();
        let related = kb.related_prophecies("@490");
        let codes: Vec<&str> = related.iter().map(|p| p.code.as_str()).collect();
        assert_eq!(codes, vec!["@70y", "@2300"]);
    }

    #[test]
    fn test_related_on_unknown_key_is_empty() {
        let kb = knowledge();
        assert!(kb.related_prophecies("@nope").is_empty());
        assert!(kb.related_passages("nope").is_empty());
    }
}
