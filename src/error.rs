//! Error types.
//!
//! Only [`Error`] reaches callers of the matching functions. [`TableError`]
//! describes entries skipped while loading a table, and [`FieldError`] is the
//! per-pattern assembly failure the engine absorbs before trying the next
//! pattern.

use crate::Field;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("no date pattern matched {input:?}")]
    NotFound { input: String },
    #[error("unknown locale tag {tag:?}")]
    UnknownLocale { tag: String },
}

/// A malformed table entry. The entry is skipped; loading continues.
#[derive(Debug, Clone, Error)]
pub enum TableError {
    #[error("pattern {key:?} has an empty grammar")]
    MissingGrammar { key: String },
    #[error("pattern {key:?} has no output template")]
    MissingTemplate { key: String },
    #[error("pattern {key:?} does not capture the {field} field")]
    MissingField { key: String, field: Field },
    #[error("pattern {key:?} captures the {field} field more than once")]
    DuplicateField { key: String, field: Field },
    #[error("pattern key {key:?} is already registered")]
    DuplicateKey { key: String },
    #[error("pattern {key:?} does not compile: {source}")]
    InvalidGrammar {
        key: String,
        #[source]
        source: regex::Error,
    },
}

impl TableError {
    /// Key of the offending entry.
    pub fn key(&self) -> &str {
        match self {
            TableError::MissingGrammar { key }
            | TableError::MissingTemplate { key }
            | TableError::MissingField { key, .. }
            | TableError::DuplicateField { key, .. }
            | TableError::DuplicateKey { key }
            | TableError::InvalidGrammar { key, .. } => key,
        }
    }
}

/// Captured fields that cannot form a calendar value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("the {0} field was not captured")]
    Missing(Field),
    #[error("{year:04}-{month:02}-{day:02} is not a calendar date")]
    InvalidDate { year: i32, month: u32, day: u32 },
    #[error("{hour:02}:{minute:02}:{second:02} is not a time of day")]
    InvalidTime { hour: u32, minute: u32, second: u32 },
}
