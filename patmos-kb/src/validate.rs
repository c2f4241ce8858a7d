//! Load-time content validation
//!
//! Malformed content is a build-time defect, not a runtime error: the
//! canonical tables refuse to load while any violation is present. The
//! checks here exist because the tables are authored by hand - duplicate
//! keys, drifted key casing, and dangling cross-references are exactly the
//! defects hand-curation produces.

use crate::Tables;
use once_cell::sync::Lazy;
use patmos_core::Violation;
use regex::Regex;
use std::collections::HashSet;
use tracing::warn;

/// Prophecy codes: `@`-prefixed lowercase token, e.g. `@2300`, `@70y`.
static PROPHECY_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^@[a-z0-9][a-z0-9-]*$").expect("invalid prophecy code regex"));

/// Record ids: lowercase kebab slug, e.g. `sinai-pentecost`.
static RECORD_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9][a-z0-9-]*$").expect("invalid record id regex"));

/// Validate a table set, returning every violation found.
///
/// An empty list means the tables are valid. Checks, per table:
/// - key uniqueness (codes and ids)
/// - key format (per-table pattern, catching casing drift)
/// - cross-reference resolution (prophecy pattern-links, related passages)
/// - distinct fulfillment layers within each passage
/// - non-empty required display fields (name/title/reference)
pub fn validate(tables: &Tables) -> Vec<Violation> {
    let mut violations = Vec::new();

    check_keys(
        "prophecies",
        tables.prophecies.iter().map(|p| p.code.as_str()),
        &PROPHECY_CODE,
        "an @-prefixed lowercase token",
        &mut violations,
    );
    check_keys(
        "parallels",
        tables.parallels.iter().map(|p| p.id.as_str()),
        &RECORD_ID,
        "a lowercase kebab-case slug",
        &mut violations,
    );
    check_keys(
        "passages",
        tables.passages.iter().map(|p| p.id.as_str()),
        &RECORD_ID,
        "a lowercase kebab-case slug",
        &mut violations,
    );
    check_keys(
        "patterns",
        tables.patterns.iter().map(|p| p.id.as_str()),
        &RECORD_ID,
        "a lowercase kebab-case slug",
        &mut violations,
    );

    let prophecy_codes: HashSet<&str> =
        tables.prophecies.iter().map(|p| p.code.as_str()).collect();
    for prophecy in &tables.prophecies {
        for target in &prophecy.parallels_and_patterns {
            if !prophecy_codes.contains(target.as_str()) {
                violations.push(Violation::UnresolvedLink {
                    table: "prophecies",
                    key: prophecy.code.clone(),
                    target: target.clone(),
                });
            }
        }
        if prophecy.name.trim().is_empty() {
            violations.push(Violation::EmptyField {
                table: "prophecies",
                key: prophecy.code.clone(),
                field: "name",
            });
        }
    }

    let passage_ids: HashSet<&str> = tables.passages.iter().map(|p| p.id.as_str()).collect();
    for passage in &tables.passages {
        for target in &passage.related_passages {
            if !passage_ids.contains(target.as_str()) {
                violations.push(Violation::UnresolvedLink {
                    table: "passages",
                    key: passage.id.clone(),
                    target: target.clone(),
                });
            }
        }
        let mut seen_layers = HashSet::new();
        for fulfillment in &passage.fulfillments {
            if !seen_layers.insert(fulfillment.layer) {
                violations.push(Violation::DuplicateLayer {
                    key: passage.id.clone(),
                    layer: fulfillment.layer,
                });
            }
        }
        if passage.title.trim().is_empty() {
            violations.push(Violation::EmptyField {
                table: "passages",
                key: passage.id.clone(),
                field: "title",
            });
        }
        if passage.reference.trim().is_empty() {
            violations.push(Violation::EmptyField {
                table: "passages",
                key: passage.id.clone(),
                field: "reference",
            });
        }
    }

    for parallel in &tables.parallels {
        if parallel.title.trim().is_empty() {
            violations.push(Violation::EmptyField {
                table: "parallels",
                key: parallel.id.clone(),
                field: "title",
            });
        }
    }
    for pattern in &tables.patterns {
        if pattern.name.trim().is_empty() {
            violations.push(Violation::EmptyField {
                table: "patterns",
                key: pattern.id.clone(),
                field: "name",
            });
        }
    }

    for violation in &violations {
        warn!(%violation, "knowledge-base content violation");
    }
    violations
}

fn check_keys<'a>(
    table: &'static str,
    keys: impl Iterator<Item = &'a str>,
    pattern: &Regex,
    expected: &'static str,
    violations: &mut Vec<Violation>,
) {
    let mut seen = HashSet::new();
    for key in keys {
        if !seen.insert(key) {
            violations.push(Violation::DuplicateKey {
                table,
                key: key.to_string(),
            });
        }
        if !pattern.is_match(key) {
            violations.push(Violation::MalformedKey {
                table,
                key: key.to_string(),
                expected,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::canonical_tables;

    #[test]
    fn test_canonical_tables_have_no_violations() {
        let tables = canonical_tables().expect("embedded content must parse");
        let violations = validate(&tables);
        assert!(
            violations.is_empty(),
            "canonical content must be clean, found: {:?}",
            violations
        );
    }
}
