//! Session cache.
//!
//! A [`Session`] remembers, per input [`ShapeKey`], which patterns recently
//! won. The matcher tries those first, so a batch of inputs from one source
//! usually costs a single grammar evaluation each once the first input has
//! been matched.
//!
//! ```text
//! "15/03/2021"  -> ShapeKey { bucket: 2, signature: "9/9/9" }
//! "16/03/2021"  -> same key        -> preferred: [date_1]
//! "12 May 2021" -> ShapeKey { bucket: 2, signature: "9 a 9" } -> cold
//! ```
//!
//! The cache only reorders trials. A preferred pattern that no longer
//! matches falls through to the normal table order.

use crate::PatternKey;
use std::collections::HashMap;
use tracing::debug;

const MAX_SIGNATURE_RUNS: usize = 16;

/// Coarse structural signature of a normalized input.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShapeKey {
    bucket: u8,
    signature: Box<str>,
}

impl ShapeKey {
    /// Length bucket (chars / 4) plus a run-collapsed class signature:
    /// digits become `9`, letters `a`, everything else is kept verbatim.
    pub fn of(input: &str) -> Self {
        let mut signature = String::new();
        let mut last = None;
        let mut runs = 0;
        let mut len = 0usize;

        for c in input.chars() {
            len += 1;
            let class = if c.is_ascii_digit() {
                '9'
            } else if c.is_alphabetic() {
                'a'
            } else {
                c
            };
            if last != Some(class) && runs < MAX_SIGNATURE_RUNS {
                signature.push(class);
                runs += 1;
            }
            last = Some(class);
        }

        ShapeKey { bucket: u8::try_from(len / 4).unwrap_or(u8::MAX), signature: signature.into_boxed_str() }
    }

    pub fn signature(&self) -> &str {
        &self.signature
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SessionConfig {
    /// How many recent winners to keep per shape. At least 1.
    pub history: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig { history: 3 }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PatternCounter {
    /// Grammar evaluations of this pattern.
    pub attempts: u32,
    pub successes: u32,
}

/// Summary returned by [`Session::end`].
#[derive(Debug, Clone, Default)]
pub struct SessionReport {
    /// Successful matches recorded during the session.
    pub matches: usize,
    /// Distinct shapes seen with a success.
    pub shapes: usize,
    /// Per-pattern counters, most successful first.
    pub counters: Vec<(PatternKey, PatternCounter)>,
}

/// Caller-scoped cache of recent pattern successes.
///
/// Not shared between threads; give each concurrent batch its own session.
#[derive(Debug, Default)]
pub struct Session {
    config: SessionConfig,
    shape_stats: HashMap<ShapeKey, Vec<PatternKey>>,
    counters: HashMap<PatternKey, PatternCounter>,
    matches: usize,
}

impl Session {
    pub fn start() -> Self {
        Self::with_config(SessionConfig::default())
    }

    pub fn with_config(config: SessionConfig) -> Self {
        let config = SessionConfig { history: config.history.max(1) };
        Session { config, ..Session::default() }
    }

    /// Record that `key` matched an input of `shape`, moving it to the front.
    pub fn record(&mut self, shape: &ShapeKey, key: &PatternKey) {
        self.matches += 1;
        self.counters.entry(key.clone()).or_default().successes += 1;

        let history = self.shape_stats.entry(shape.clone()).or_default();
        history.retain(|k| k != key);
        history.insert(0, key.clone());
        history.truncate(self.config.history);
    }

    pub(crate) fn note_attempt(&mut self, key: &PatternKey) {
        self.counters.entry(key.clone()).or_default().attempts += 1;
    }

    /// Recent winners for `shape`, most recent first.
    pub fn preferred_order(&self, shape: &ShapeKey) -> &[PatternKey] {
        self.shape_stats.get(shape).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn counter(&self, key: &str) -> PatternCounter {
        self.counters.get(key).copied().unwrap_or_default()
    }

    pub fn matches(&self) -> usize {
        self.matches
    }

    /// Close the session, releasing its cache and returning its counters.
    pub fn end(self) -> SessionReport {
        let mut counters: Vec<(PatternKey, PatternCounter)> = self.counters.into_iter().collect();
        counters.sort_by(|(ka, a), (kb, b)| b.successes.cmp(&a.successes).then_with(|| ka.cmp(kb)));

        let report = SessionReport { matches: self.matches, shapes: self.shape_stats.len(), counters };
        debug!(matches = report.matches, shapes = report.shapes, "session ended");
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(name: &str) -> PatternKey {
        PatternKey::from(name)
    }

    #[test]
    fn shape_key_groups_same_layout() {
        assert_eq!(ShapeKey::of("15/03/2021"), ShapeKey::of("16/04/2022"));
        assert_eq!(ShapeKey::of("15/03/2021").signature(), "9/9/9");
        assert_ne!(ShapeKey::of("15/03/2021"), ShapeKey::of("15.03.2021"));
        assert_ne!(ShapeKey::of("12 May 2021"), ShapeKey::of("12 September 2021"));
        assert_eq!(ShapeKey::of("12 May 2021").signature(), "9 a 9");
    }

    #[test]
    fn record_keeps_most_recent_first() {
        let mut session = Session::start();
        let shape = ShapeKey::of("15/03/2021");

        session.record(&shape, &key("a"));
        session.record(&shape, &key("b"));
        session.record(&shape, &key("a"));

        assert_eq!(session.preferred_order(&shape), &[key("a"), key("b")]);
        assert_eq!(session.counter("a").successes, 2);
        assert_eq!(session.matches(), 3);
    }

    #[test]
    fn history_is_bounded() {
        let mut session = Session::with_config(SessionConfig { history: 2 });
        let shape = ShapeKey::of("x");
        for name in ["a", "b", "c"] {
            session.record(&shape, &key(name));
        }
        assert_eq!(session.preferred_order(&shape), &[key("c"), key("b")]);

        let mut session = Session::with_config(SessionConfig { history: 0 });
        session.record(&shape, &key("a"));
        assert_eq!(session.preferred_order(&shape).len(), 1);
    }

    #[test]
    fn unknown_shape_has_no_preference() {
        let session = Session::start();
        assert!(session.preferred_order(&ShapeKey::of("1.1.2000")).is_empty());
    }

    #[test]
    fn end_reports_counters() {
        let mut session = Session::start();
        let shape = ShapeKey::of("15/03/2021");
        session.note_attempt(&key("a"));
        session.note_attempt(&key("b"));
        session.note_attempt(&key("b"));
        session.record(&shape, &key("b"));

        let report = session.end();
        assert_eq!(report.matches, 1);
        assert_eq!(report.shapes, 1);
        assert_eq!(report.counters[0], (key("b"), PatternCounter { attempts: 2, successes: 1 }));
        assert_eq!(report.counters[1], (key("a"), PatternCounter { attempts: 1, successes: 0 }));
    }
}
