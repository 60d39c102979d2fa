//! Prefix filtering (input pre-classification).
//!
//! Before any grammar runs, the input is scanned once into an [`InputShape`]:
//! length, leading character class, the leading digit run and what follows
//! it, and which delimiter characters occur. Every pattern carries a
//! [`PrefixRule`] over that shape, derived from its grammar tokens when the
//! table is loaded.
//!
//! ```text
//! "15/03/2021"  ->  len=10 first='1' leading_digits=2 after_digits='/' delims={/}
//!
//! d/m/yyyy   rule:  len 5..=12, digit lead, 1..=2 digits then '/', needs {/}   -> pass
//! yyyy-m-d   rule:  len 8..=14, digit lead, 4..=4 digits then '-', needs {-}   -> reject
//! ```
//!
//! ## Soundness
//!
//! A rule may pass inputs its grammar later rejects (a wasted grammar run),
//! but it must never reject an input the grammar accepts. Deriving rules from
//! the tokens keeps that true by construction: every check is implied by the
//! regex the same tokens compile to.

use crate::Tok;
use std::borrow::Cow;

bitflags::bitflags! {
    /// Delimiter characters present in an input or required by a grammar.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Delims: u8 {
        const DOT   = 1 << 0;
        const SLASH = 1 << 1;
        const DASH  = 1 << 2;
        const COMMA = 1 << 3;
        const COLON = 1 << 4;
    }
}

impl Delims {
    fn of(c: char) -> Delims {
        match c {
            '.' => Delims::DOT,
            '/' => Delims::SLASH,
            '-' => Delims::DASH,
            ',' => Delims::COMMA,
            ':' => Delims::COLON,
            _ => Delims::empty(),
        }
    }
}

/// Trim and collapse every whitespace run to a single space.
pub fn normalize(input: &str) -> Cow<'_, str> {
    regex!(r"\s+").replace_all(input.trim(), " ")
}

/// Coarse structure of a normalized input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputShape {
    /// Length in chars.
    pub len: usize,
    pub first: Option<char>,
    /// Number of ASCII digits the input starts with.
    pub leading_digits: usize,
    /// First non-space char after the leading digit run.
    pub after_digits: Option<char>,
    pub delims: Delims,
}

impl InputShape {
    /// Scan a normalized input in one pass.
    pub fn scan(input: &str) -> Self {
        #[derive(PartialEq)]
        enum Phase {
            Digits,
            Space,
            Done,
        }

        let mut shape =
            InputShape { len: 0, first: None, leading_digits: 0, after_digits: None, delims: Delims::empty() };
        let mut phase = Phase::Digits;

        for c in input.chars() {
            if shape.len == 0 {
                shape.first = Some(c);
            }
            shape.len += 1;
            shape.delims |= Delims::of(c);

            match phase {
                Phase::Digits if c.is_ascii_digit() => shape.leading_digits += 1,
                Phase::Digits if shape.leading_digits == 0 => phase = Phase::Done,
                Phase::Digits if c == ' ' => phase = Phase::Space,
                Phase::Digits | Phase::Space => {
                    shape.after_digits = Some(c);
                    phase = Phase::Done;
                }
                Phase::Done => {}
            }
        }

        shape
    }
}

/// Class of the first char a grammar can start with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeadClass {
    Any,
    Digit,
    Letter,
}

/// Cheap structural predicate attached to each pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixRule {
    pub min_len: usize,
    /// `None` when the grammar accepts trailing text.
    pub max_len: Option<usize>,
    pub lead: LeadClass,
    /// Bounds on [`InputShape::leading_digits`], when the grammar pins them.
    pub leading_digits: Option<(usize, usize)>,
    pub after_digits: Option<char>,
    /// Delimiters the input must contain.
    pub delims: Delims,
}

impl PrefixRule {
    /// Derive the rule implied by a token list.
    pub fn derive(tokens: &[Tok]) -> Self {
        let mut min_len = 0;
        let mut max_len = Some(0);
        let mut delims = Delims::empty();

        for (idx, tok) in tokens.iter().enumerate() {
            let (lo, hi) = token_len(tok);
            min_len += lo;
            max_len = max_len.zip(hi).map(|(acc, hi)| acc + hi);
            if idx > 0 && *tok != Tok::Rest {
                max_len = max_len.map(|acc| acc + 1);
            }
            if let Tok::Lit(text) = tok {
                for c in text.chars() {
                    delims |= Delims::of(c);
                }
            }
        }

        let lead = match tokens.first() {
            Some(Tok::Num { .. }) => LeadClass::Digit,
            Some(Tok::Lit(text)) => lead_of([*text].into_iter()),
            Some(Tok::Words(words)) => lead_of(words.iter().copied()),
            Some(Tok::Month(names) | Tok::Weekday(names)) => lead_of(names.iter().flat_map(|s| s.iter().copied())),
            Some(Tok::Opt(_) | Tok::OptWords(_) | Tok::Rest) | None => LeadClass::Any,
        };

        let (leading_digits, after_digits) = match tokens.split_first() {
            Some((Tok::Num { min, max, .. }, rest)) if digit_run_is_bounded(rest) => {
                let after = match rest.first() {
                    Some(Tok::Lit(text)) => text.chars().next(),
                    _ => None,
                };
                (Some((usize::from(*min), usize::from(*max))), after)
            }
            _ => (None, None),
        };

        PrefixRule { min_len, max_len, lead, leading_digits, after_digits, delims }
    }

    pub fn applies(&self, shape: &InputShape) -> bool {
        if shape.len < self.min_len || self.max_len.is_some_and(|max| shape.len > max) {
            return false;
        }

        let lead_ok = match (self.lead, shape.first) {
            (LeadClass::Any, _) => true,
            (LeadClass::Digit, Some(c)) => c.is_ascii_digit(),
            (LeadClass::Letter, Some(c)) => c.is_alphabetic(),
            (_, None) => false,
        };
        if !lead_ok {
            return false;
        }

        if let Some((lo, hi)) = self.leading_digits {
            if shape.leading_digits < lo || shape.leading_digits > hi {
                return false;
            }
        }
        if self.after_digits.is_some() && shape.after_digits != self.after_digits {
            return false;
        }

        shape.delims.contains(self.delims)
    }

    /// Normalize, scan and check `input` in one call.
    pub fn applies_to(&self, input: &str) -> bool {
        self.applies(&InputShape::scan(&normalize(input)))
    }
}

/// Char length bounds of one token; `None` upper bound means unbounded.
fn token_len(tok: &Tok) -> (usize, Option<usize>) {
    match *tok {
        Tok::Num { min, max, .. } => (usize::from(min), Some(usize::from(max))),
        Tok::Month(names) | Tok::Weekday(names) => {
            let (lo, hi) = len_range(names.iter().flat_map(|s| s.iter().copied()));
            (lo, Some(hi))
        }
        Tok::Lit(text) => (text.chars().count(), Some(text.chars().count())),
        Tok::Opt(text) => (0, Some(text.chars().count())),
        Tok::Words(words) => {
            let (lo, hi) = len_range(words.iter().copied());
            (lo, Some(hi))
        }
        Tok::OptWords(words) => (0, Some(len_range(words.iter().copied()).1)),
        Tok::Rest => (0, None),
    }
}

fn len_range<'a>(words: impl Iterator<Item = &'a str>) -> (usize, usize) {
    words.map(|w| w.chars().count()).fold(None, |acc: Option<(usize, usize)>, n| match acc {
        None => Some((n, n)),
        Some((lo, hi)) => Some((lo.min(n), hi.max(n))),
    })
    .unwrap_or((0, 0))
}

fn lead_of<'a>(mut words: impl Iterator<Item = &'a str>) -> LeadClass {
    let mut lead = None;
    let uniform = words.all(|word| {
        let class = match word.chars().next() {
            Some(c) if c.is_ascii_digit() => LeadClass::Digit,
            Some(c) if c.is_alphabetic() => LeadClass::Letter,
            _ => LeadClass::Any,
        };
        *lead.get_or_insert(class) == class
    });
    match lead {
        Some(class) if uniform => class,
        _ => LeadClass::Any,
    }
}

fn may_start_with_digit(tok: &Tok) -> bool {
    let starts = |text: &str| text.starts_with(|c: char| c.is_ascii_digit());
    match *tok {
        Tok::Num { .. } => true,
        Tok::Lit(text) | Tok::Opt(text) => starts(text),
        Tok::Words(words) | Tok::OptWords(words) => words.iter().any(|w| starts(w)),
        Tok::Month(names) | Tok::Weekday(names) => names.iter().flat_map(|s| s.iter()).any(|w| starts(w)),
        Tok::Rest => false,
    }
}

/// Whether a leading number is always followed by a non-digit (or the end of
/// input), so that its digit count equals the input's leading digit run.
fn digit_run_is_bounded(rest: &[Tok]) -> bool {
    for tok in rest {
        if may_start_with_digit(tok) {
            return false;
        }
        let optional = match *tok {
            Tok::Opt(_) | Tok::OptWords(_) | Tok::Rest => true,
            Tok::Lit(text) => text.is_empty(),
            _ => false,
        };
        if !optional {
            return true;
        }
    }
    true
}
