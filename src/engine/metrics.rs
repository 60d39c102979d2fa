//! Per-call match metrics.
//!
//! Every [`MatchResult`] carries a [`MatchMetrics`] describing what the call
//! cost: how many patterns were looked at, how many the locale filter and
//! the prefix rules removed, and how many grammars actually ran. These are
//! the numbers to watch when tuning a table or checking that a session is
//! paying off.

use crate::{Fields, PatternKey};
use chrono::NaiveDateTime;
use std::time::Duration;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MatchMetrics {
    /// Patterns taken from the trial order.
    pub considered: usize,
    /// Patterns skipped by the locale filter.
    pub locale_skipped: usize,
    /// Patterns skipped by their prefix rule.
    pub prefix_rejected: usize,
    /// Full grammar evaluations.
    pub grammar_evaluations: usize,
    /// Grammar matches whose fields did not form a valid date.
    pub invalid_fields: usize,
    /// The winner came from the session's preferred order.
    pub cache_hit: bool,
    pub elapsed: Duration,
}

/// Outcome of one match call.
#[derive(Debug, Clone)]
pub struct MatchResult {
    pub matched: bool,
    pub pattern_key: Option<PatternKey>,
    /// Raw captured values; empty on a miss.
    pub fields: Fields,
    pub normalized_value: Option<NaiveDateTime>,
    pub metrics: MatchMetrics,
}

impl MatchResult {
    pub(crate) fn found(key: PatternKey, fields: Fields, value: NaiveDateTime, metrics: MatchMetrics) -> Self {
        MatchResult { matched: true, pattern_key: Some(key), fields, normalized_value: Some(value), metrics }
    }

    pub(crate) fn missed(metrics: MatchMetrics) -> Self {
        MatchResult { matched: false, pattern_key: None, fields: Fields::default(), normalized_value: None, metrics }
    }

    pub fn key(&self) -> Option<&str> {
        self.pattern_key.as_deref()
    }
}
