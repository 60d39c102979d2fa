//! The match loop.
//!
//! ```text
//! new()  -> normalize + InputShape::scan
//! run()  -> trial order
//!             session.preferred_order(shape_key)   (most recent first)
//!               a preferred hit at table position p is confirmed against
//!               positions 0..p; the earliest accepting pattern wins
//!             then every other pattern in table order
//!           for each pattern (attempt):
//!             locale filter   -> skip
//!             prefix rule     -> skip
//!             grammar         -> fields or next
//!             template        -> value, or InvalidFieldCombination -> next
//!           first value wins, recorded into the session
//! ```
//!
//! The winner is always the first pattern in table order that yields a
//! value, so a session never changes what is returned. It saves work when
//! the preferred pattern sits early in the table or few earlier patterns
//! pass their prefix rules.
//!
//! A miss is not an error here: it is a `MatchResult` with `matched: false`.

use super::metrics::{MatchMetrics, MatchResult};
use super::prefix::{InputShape, normalize};
use super::session::{Session, ShapeKey};
use super::table::PatternTable;
use crate::{Context, Fields, Options};
use chrono::NaiveDateTime;
use std::borrow::Cow;
use std::time::Instant;
use tracing::{debug, trace};

/// Runs one input against a [`PatternTable`].
#[derive(Debug)]
pub struct Matcher<'a> {
    table: &'a PatternTable,
    /// Normalized input.
    input: Cow<'a, str>,
    shape: InputShape,
}

impl<'a> Matcher<'a> {
    pub fn new(input: &'a str, table: &'a PatternTable) -> Self {
        let input = normalize(input);
        let shape = InputShape::scan(&input);
        Matcher { table, input, shape }
    }

    pub fn run(&self, context: &Context, options: &Options, mut session: Option<&mut Session>) -> MatchResult {
        let started = Instant::now();
        let mut metrics = MatchMetrics::default();

        let shape_key = session.as_ref().map(|_| ShapeKey::of(&self.input));
        let preferred: Vec<usize> = match (session.as_deref(), &shape_key) {
            (Some(session), Some(shape_key)) => {
                session.preferred_order(shape_key).iter().filter_map(|key| self.table.position(key)).collect()
            }
            _ => Vec::new(),
        };

        let mut winner = None;
        for (rank, &idx) in preferred.iter().enumerate() {
            let Some(hit) = self.attempt(idx, context, options, &mut metrics, session.as_deref_mut()) else {
                continue;
            };

            // A preferred hit stands only if no earlier pattern accepts the input.
            let tried = &preferred[..rank];
            let mut earlier = None;
            for before in (0..idx).filter(|before| !tried.contains(before)) {
                if let Some(found) = self.attempt(before, context, options, &mut metrics, session.as_deref_mut()) {
                    earlier = Some((before, found));
                    break;
                }
            }
            winner = Some(match earlier {
                Some(found) => (found, false),
                None => ((idx, hit), true),
            });
            break;
        }

        if winner.is_none() {
            for idx in (0..self.table.len()).filter(|idx| !preferred.contains(idx)) {
                if let Some(hit) = self.attempt(idx, context, options, &mut metrics, session.as_deref_mut()) {
                    winner = Some(((idx, hit), false));
                    break;
                }
            }
        }

        metrics.elapsed = started.elapsed();
        let Some(((idx, (fields, value)), cache_hit)) = winner else {
            debug!(
                input = %self.input,
                considered = metrics.considered,
                prefix_rejected = metrics.prefix_rejected,
                grammar_evaluations = metrics.grammar_evaluations,
                "no pattern matched"
            );
            return MatchResult::missed(metrics);
        };

        let pattern = &self.table.patterns()[idx];
        metrics.cache_hit = cache_hit;
        if let (Some(session), Some(shape_key)) = (session.as_deref_mut(), &shape_key) {
            session.record(shape_key, pattern.key());
        }
        debug!(
            input = %self.input,
            pattern = &**pattern.key(),
            %value,
            grammar_evaluations = metrics.grammar_evaluations,
            cache_hit = metrics.cache_hit,
            "matched"
        );
        MatchResult::found(pattern.key().clone(), fields, value, metrics)
    }

    /// Try the pattern at `idx` alone: filters, grammar, then template.
    fn attempt(
        &self,
        idx: usize,
        context: &Context,
        options: &Options,
        metrics: &mut MatchMetrics,
        session: Option<&mut Session>,
    ) -> Option<(Fields, NaiveDateTime)> {
        let pattern = &self.table.patterns()[idx];
        metrics.considered += 1;

        if options.locales.is_some_and(|set| !set.admits(pattern.locale())) {
            metrics.locale_skipped += 1;
            return None;
        }
        if options.prefix_filter && !pattern.prefix_rule().applies(&self.shape) {
            metrics.prefix_rejected += 1;
            return None;
        }

        metrics.grammar_evaluations += 1;
        if let Some(session) = session {
            session.note_attempt(pattern.key());
        }

        let Some(fields) = pattern.grammar().captures(&self.input) else {
            trace!(pattern = &**pattern.key(), "grammar rejected");
            return None;
        };

        match pattern.template().assemble(&fields, context.reference_time) {
            Ok(value) => Some((fields, value)),
            Err(err) => {
                metrics.invalid_fields += 1;
                trace!(pattern = &**pattern.key(), error = %err, "invalid field combination");
                None
            }
        }
    }
}
