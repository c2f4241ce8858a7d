//! Error types for knowledge-base operations
//!
//! The taxonomy is deliberately small: lookup misses are `Option`, never an
//! error. What remains is bad tags at call sites and bad content at load
//! time.

use crate::FulfillmentLayer;
use thiserror::Error;

/// Error when a string does not name a member of a fixed tag set.
///
/// Indicates a programming error in the caller (an invalid filter value),
/// not a data condition, so the message names the full tag set.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown {set} tag {token:?}, expected one of: {expected}")]
pub struct TagParseError {
    pub set: &'static str,
    pub token: String,
    pub expected: &'static str,
}

impl TagParseError {
    pub fn new(set: &'static str, token: impl Into<String>, expected: &'static str) -> Self {
        Self {
            set,
            token: token.into(),
            expected,
        }
    }
}

/// A single content defect found by the load-time validation pass.
///
/// Malformed content is a build-time defect, not a runtime condition: the
/// canonical tables refuse to load while any violation is present.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Violation {
    #[error("duplicate {table} key: {key}")]
    DuplicateKey { table: &'static str, key: String },

    #[error("malformed {table} key {key:?}: expected {expected}")]
    MalformedKey {
        table: &'static str,
        key: String,
        expected: &'static str,
    },

    #[error("{table} record {key} links to unknown key {target}")]
    UnresolvedLink {
        table: &'static str,
        key: String,
        target: String,
    },

    #[error("passage {key} declares the {layer} layer more than once")]
    DuplicateLayer { key: String, layer: FulfillmentLayer },

    #[error("{table} record {key} has an empty required field: {field}")]
    EmptyField {
        table: &'static str,
        key: String,
        field: &'static str,
    },
}

/// Master error type for knowledge-base operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum KbError {
    #[error(transparent)]
    Tag(#[from] TagParseError),

    #[error("invalid knowledge-base content: {} violation(s)", .0.len())]
    Content(Vec<Violation>),
}

/// Result type alias for knowledge-base operations.
pub type KbResult<T> = Result<T, KbError>;
