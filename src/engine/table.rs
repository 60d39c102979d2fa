//! Pattern table loading and compilation.
//!
//! This module holds the *static* side of the engine. Authored
//! [`PatternSpec`]s are validated, expanded into variants and compiled into
//! [`PatternDefinition`]s once; the resulting [`PatternTable`] is immutable.
//!
//! ## Variant expansion
//!
//! Each authored grammar yields up to six compiled patterns:
//!
//! ```text
//! date_1            15/03/2021
//! date_1:hm         15/03/2021 07:30      (optional "," "|" or "T" before the time)
//! date_1:hms        15/03/2021 07:30:00
//! ...every other spec's base/hm/hms...
//! date_1:hms:tail
//! date_1:hm:tail    15/03/2021, 07:30 BST
//! date_1:tail       15/03/2021 by the editors
//! ```
//!
//! Tail variants are appended after every exact variant so that an exact
//! reading always wins over one that ignores trailing text. Within one spec
//! the tails run richest first, otherwise `date_1:tail` would swallow the
//! clock time as trailing text.
//!
//! ## Invariants
//!
//! - Keys are unique. A spec whose key (or a generated variant key) is
//!   already taken is skipped and reported.
//! - Table order is authored order and does not depend on hashing, so the
//!   cold trial order is the same on every run.

use super::grammar::Grammar;
use super::matcher::Matcher;
use super::metrics::MatchResult;
use super::prefix::{PrefixRule, normalize};
use super::session::Session;
use crate::{
    Context, Error, Field, FieldError, Fields, Locale, LocaleSet, OutputTemplate, Options, PatternKey, PatternSpec,
    TableError, Tok, Variants, YearRule,
};
use chrono::NaiveDateTime;
use std::collections::{HashMap, HashSet};
use tracing::{debug, warn};

/// Separators accepted between a date and its clock time.
const CLOCK_SEPARATORS: &[&str] = &[",", "|", "T"];

/// A compiled, immutable table entry.
#[derive(Debug, Clone)]
pub struct PatternDefinition {
    key: PatternKey,
    locale: Locale,
    prefix_rule: PrefixRule,
    grammar: Grammar,
    template: OutputTemplate,
}

impl PatternDefinition {
    fn compile(key: String, locale: Locale, tokens: Vec<Tok>, template: OutputTemplate) -> Result<Self, TableError> {
        let prefix_rule = PrefixRule::derive(&tokens);
        let grammar = Grammar::compile(tokens).map_err(|source| TableError::InvalidGrammar { key: key.clone(), source })?;
        Ok(PatternDefinition { key: PatternKey::from(key), locale, prefix_rule, grammar, template })
    }

    pub fn key(&self) -> &PatternKey {
        &self.key
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn prefix_rule(&self) -> &PrefixRule {
        &self.prefix_rule
    }

    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    pub fn template(&self) -> &OutputTemplate {
        &self.template
    }

    /// Run this pattern's grammar alone on `input`.
    pub fn extract(&self, input: &str) -> Option<Fields> {
        self.grammar.captures(&normalize(input))
    }

    pub fn assemble(&self, fields: &Fields, context: &Context) -> Result<NaiveDateTime, FieldError> {
        self.template.assemble(fields, context.reference_time)
    }

    /// Serialize `value` in this pattern's canonical layout.
    pub fn render(&self, value: NaiveDateTime) -> Option<String> {
        self.grammar.render(value, &self.template)
    }
}

/// What happened while loading a table.
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    /// Compiled patterns, variants included.
    pub loaded: usize,
    /// Entries that were skipped, in authored order.
    pub skipped: Vec<TableError>,
}

/// An ordered, immutable collection of compiled patterns.
#[derive(Debug)]
pub struct PatternTable {
    patterns: Vec<PatternDefinition>,
    positions: HashMap<PatternKey, usize>,
    report: LoadReport,
}

impl PatternTable {
    /// Load the built-in patterns, optionally restricted to `locales`.
    pub fn load(locales: Option<LocaleSet>) -> Self {
        Self::from_specs(crate::patterns::all(), locales)
    }

    /// Compile caller-supplied specs.
    ///
    /// Malformed entries are skipped and listed in [`PatternTable::report`];
    /// the rest of the table loads normally.
    pub fn from_specs<I>(specs: I, locales: Option<LocaleSet>) -> Self
    where
        I: IntoIterator<Item = PatternSpec>,
    {
        let mut report = LoadReport::default();
        let mut taken: HashSet<String> = HashSet::new();
        let mut exact = Vec::new();
        let mut tails = Vec::new();

        for spec in specs {
            if locales.is_some_and(|set| !set.admits(spec.locale)) {
                continue;
            }

            match compile_spec(&spec, &mut taken) {
                Ok((heads, tail_variants)) => {
                    exact.extend(heads);
                    tails.extend(tail_variants);
                }
                Err(err) => {
                    warn!(key = spec.key, error = %err, "skipping malformed pattern");
                    report.skipped.push(err);
                }
            }
        }

        let patterns: Vec<PatternDefinition> = exact.into_iter().chain(tails).collect();
        let positions = patterns.iter().enumerate().map(|(idx, p)| (p.key.clone(), idx)).collect();
        report.loaded = patterns.len();

        debug!(loaded = report.loaded, skipped = report.skipped.len(), "pattern table loaded");

        PatternTable { patterns, positions, report }
    }

    pub fn patterns(&self) -> &[PatternDefinition] {
        &self.patterns
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&PatternDefinition> {
        self.position(key).map(|idx| &self.patterns[idx])
    }

    /// Index of `key` in trial order.
    pub fn position(&self, key: &str) -> Option<usize> {
        self.positions.get(key).copied()
    }

    pub fn report(&self) -> &LoadReport {
        &self.report
    }

    /// Match `input` against this table.
    pub fn match_with(
        &self,
        input: &str,
        context: &Context,
        options: &Options,
        session: Option<&mut Session>,
    ) -> MatchResult {
        Matcher::new(input, self).run(context, options, session)
    }

    /// Like [`PatternTable::match_with`], returning only the value.
    pub fn parse_with(
        &self,
        input: &str,
        context: &Context,
        options: &Options,
        session: Option<&mut Session>,
    ) -> Result<NaiveDateTime, Error> {
        self.match_with(input, context, options, session)
            .normalized_value
            .ok_or_else(|| Error::NotFound { input: input.to_string() })
    }
}

type Compiled = (Vec<PatternDefinition>, Vec<PatternDefinition>);

/// Validate one spec and compile its exact and tail variants.
fn compile_spec(spec: &PatternSpec, taken: &mut HashSet<String>) -> Result<Compiled, TableError> {
    let template = validate(spec)?;

    let mut exact_grammars: Vec<(String, Vec<Tok>)> = vec![(spec.key.to_string(), spec.grammar.clone())];
    let has_clock = spec.grammar.iter().any(|tok| matches!(tok, Tok::Num { field: Field::Hour, .. }));
    if spec.variants.contains(Variants::TIME) && !has_clock {
        let mut hm = spec.grammar.clone();
        hm.extend([Tok::OptWords(CLOCK_SEPARATORS), num!(Hour, 1, 2), lit!(":"), num!(Minute, 2, 2)]);
        let mut hms = hm.clone();
        hms.extend([lit!(":"), num!(Second, 2, 2)]);
        exact_grammars.push((format!("{}:hm", spec.key), hm));
        exact_grammars.push((format!("{}:hms", spec.key), hms));
    }

    let mut tail_grammars = Vec::new();
    if spec.variants.contains(Variants::TAIL) && spec.grammar.last() != Some(&Tok::Rest) {
        for (key, tokens) in exact_grammars.iter().rev() {
            let mut tail = tokens.clone();
            tail.push(Tok::Rest);
            tail_grammars.push((format!("{key}:tail"), tail));
        }
    }

    for (key, _) in exact_grammars.iter().chain(&tail_grammars) {
        if taken.contains(key) {
            return Err(TableError::DuplicateKey { key: key.clone() });
        }
    }

    let compile_all = |grammars: Vec<(String, Vec<Tok>)>| -> Result<Vec<PatternDefinition>, TableError> {
        grammars
            .into_iter()
            .map(|(key, tokens)| PatternDefinition::compile(key, spec.locale, tokens, template))
            .collect()
    };
    let exact = compile_all(exact_grammars)?;
    let tails = compile_all(tail_grammars)?;

    taken.extend(exact.iter().chain(&tails).map(|p| p.key.to_string()));
    Ok((exact, tails))
}

/// Structural checks on an authored spec.
fn validate(spec: &PatternSpec) -> Result<OutputTemplate, TableError> {
    let key = || spec.key.to_string();

    if spec.grammar.is_empty() {
        return Err(TableError::MissingGrammar { key: key() });
    }
    let template = spec.template.ok_or_else(|| TableError::MissingTemplate { key: key() })?;

    let mut captured: Vec<Field> = Vec::new();
    for tok in &spec.grammar {
        let field = match tok {
            Tok::Num { field, .. } => *field,
            Tok::Month(_) => Field::Month,
            _ => continue,
        };
        if captured.contains(&field) {
            return Err(TableError::DuplicateField { key: key(), field });
        }
        captured.push(field);
    }

    let mut required = vec![Field::Month, Field::Day];
    if template.year != YearRule::Reference {
        required.insert(0, Field::Year);
    }
    if let Some(field) = required.into_iter().find(|field| !captured.contains(field)) {
        return Err(TableError::MissingField { key: key(), field });
    }

    Ok(template)
}
