extern crate self as dateglean;

use std::fmt;
use std::sync::Arc;

#[macro_use]
mod macros;
mod api;
mod engine;
mod error;
mod locale;
mod patterns;

pub use api::{Context, Options, default_table, match_date, match_with, parse, parse_with, with_session};
pub use engine::{
    Delims, Grammar, InputShape, LeadClass, LoadReport, MatchMetrics, MatchResult, PatternCounter, PatternDefinition,
    PatternTable, PrefixRule, Session, SessionConfig, SessionReport, ShapeKey, normalize, year_from,
};
pub use error::{Error, FieldError, TableError};
pub use locale::{Locale, LocaleSet};

// --- Pattern data types -----------------------------------------------------

/// Identifier of a compiled pattern, shared between the table, match results
/// and session caches.
pub type PatternKey = Arc<str>;

/// Calendar names by position (January or Monday first). Each position lists
/// every accepted spelling; the first one is used when rendering.
pub type NameTable = &'static [&'static [&'static str]];

/// A date/time field a grammar can capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
}

impl Field {
    pub const ALL: [Field; 6] = [Field::Year, Field::Month, Field::Day, Field::Hour, Field::Minute, Field::Second];

    /// Capture group name used in compiled grammars.
    pub fn name(self) -> &'static str {
        match self {
            Field::Year => "year",
            Field::Month => "month",
            Field::Day => "day",
            Field::Hour => "hour",
            Field::Minute => "minute",
            Field::Second => "second",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Raw field values extracted by a grammar, before any template defaults.
///
/// `year` is stored as written: `"82"` stays `82` here and only becomes 1982
/// once a two-digit template resolves it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Fields {
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub day: Option<u32>,
    pub hour: Option<u32>,
    pub minute: Option<u32>,
    pub second: Option<u32>,
}

impl Fields {
    pub(crate) fn set(&mut self, field: Field, value: u32) {
        match field {
            Field::Year => self.year = i32::try_from(value).ok(),
            Field::Month => self.month = Some(value),
            Field::Day => self.day = Some(value),
            Field::Hour => self.hour = Some(value),
            Field::Minute => self.minute = Some(value),
            Field::Second => self.second = Some(value),
        }
    }
}

/// Grammar building blocks. Consecutive tokens may be separated by at most
/// one space; names and words match case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tok {
    /// A run of `min..=max` ASCII digits captured into `field`.
    Num { field: Field, min: u8, max: u8 },
    /// A month name, captured into the month field by position.
    Month(NameTable),
    /// A weekday name. Matched but not captured or checked against the date.
    Weekday(NameTable),
    /// Required literal text (case-sensitive).
    Lit(&'static str),
    /// Optional literal text.
    Opt(&'static str),
    /// One of the given words.
    Words(&'static [&'static str]),
    /// Optionally one of the given words.
    OptWords(&'static [&'static str]),
    /// Trailing text after a separator. Added by tail variants.
    Rest,
}

bitflags::bitflags! {
    /// Extra variants generated from an authored grammar at load time.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Variants: u8 {
        /// `:hm` and `:hms` variants with a trailing clock time.
        const TIME = 1 << 0;
        /// `:tail` variants that accept trailing text.
        const TAIL = 1 << 1;
    }
}

/// How the year is obtained when assembling a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum YearRule {
    /// The captured year is used as written.
    Full,
    /// Two-digit years: values at or above `pivot` land in the 1900s, the rest in the 2000s.
    TwoDigit { pivot: u8 },
    /// The grammar has no year; the year of [`Context::reference_time`] is used.
    Reference,
}

/// Instructions for turning captured fields into a calendar value.
///
/// Missing time fields default to midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OutputTemplate {
    pub year: YearRule,
}

impl OutputTemplate {
    pub const FULL_YEAR: Self = OutputTemplate { year: YearRule::Full };
    pub const TWO_DIGIT_YEAR: Self = Self::two_digit(50);
    pub const NO_YEAR: Self = OutputTemplate { year: YearRule::Reference };

    pub const fn two_digit(pivot: u8) -> Self {
        OutputTemplate { year: YearRule::TwoDigit { pivot } }
    }
}

/// An authored table entry, as consumed by [`PatternTable::from_specs`].
///
/// Build these with the `pattern!` macro. A spec missing its grammar or
/// template is reported and skipped at load time.
#[derive(Debug, Clone)]
pub struct PatternSpec {
    pub key: &'static str,
    pub locale: Locale,
    pub grammar: Vec<Tok>,
    pub template: Option<OutputTemplate>,
    pub variants: Variants,
}
