//! Grammar compilation.
//!
//! A grammar is a list of [`Tok`]s compiled into one anchored regular
//! expression. Numeric tokens and the month token become named capture
//! groups (`year`, `month`, `day`, `hour`, `minute`, `second`); words and
//! weekdays become case-insensitive alternations:
//!
//! ```text
//! [Num(Day,1,2), Opt("."), Month(EN), Num(Year,4,4)]
//!
//! ^(?P<day>[0-9]{1,2}) ?(?:\.)? ?(?P<month>(?i:September|...|May)) ?(?P<year>[0-9]{4})$
//! ```
//!
//! Grammars run against normalized input (see [`normalize`](super::normalize)),
//! so a single optional space between tokens covers every spacing the input
//! can have.

use crate::{Field, Fields, OutputTemplate, Tok};
use chrono::{Datelike, NaiveDateTime, Timelike};
use regex::Regex;
use std::collections::HashMap;

/// Regex source of [`Tok::Rest`]: an optional separator, then optionally a
/// space and anything at all.
const REST: &str = r"[,|:)]?(?: .*)?";

/// A compiled grammar.
#[derive(Debug, Clone)]
pub struct Grammar {
    tokens: Vec<Tok>,
    regex: Regex,
    /// Lowercased month spelling -> month number.
    month_names: HashMap<String, u32>,
}

impl Grammar {
    pub fn compile(tokens: Vec<Tok>) -> Result<Self, regex::Error> {
        let mut source = String::from("^");
        let mut month_names = HashMap::new();

        for (idx, tok) in tokens.iter().enumerate() {
            if idx > 0 && *tok != Tok::Rest {
                source.push_str(" ?");
            }
            push_token(&mut source, tok);

            if let Tok::Month(names) = tok {
                for (position, spellings) in names.iter().enumerate() {
                    for spelling in spellings.iter() {
                        month_names.insert(spelling.to_lowercase(), position as u32 + 1);
                    }
                }
            }
        }
        source.push('$');

        let regex = Regex::new(&source)?;
        Ok(Grammar { tokens, regex, month_names })
    }

    pub fn tokens(&self) -> &[Tok] {
        &self.tokens
    }

    pub fn as_regex(&self) -> &Regex {
        &self.regex
    }

    /// Run the grammar on already normalized input.
    ///
    /// Returns `None` when the grammar does not accept the whole input.
    pub fn captures(&self, input: &str) -> Option<Fields> {
        let caps = self.regex.captures(input)?;
        let mut fields = Fields::default();

        for field in Field::ALL {
            let Some(m) = caps.name(field.name()) else { continue };
            let text = m.as_str();
            let value = if field == Field::Month && !text.starts_with(|c: char| c.is_ascii_digit()) {
                *self.month_names.get(&text.to_lowercase())?
            } else {
                text.parse().ok()?
            };
            fields.set(field, value);
        }

        Some(fields)
    }

    /// Render `value` in the canonical layout of this grammar.
    ///
    /// Optional tokens are left out, names use their first spelling, and
    /// numbers are zero-padded to their widest form. Returns `None` when the
    /// value cannot be expressed (a year outside a two-digit window, or a
    /// year on a year-less grammar that differs from the reference).
    pub fn render(&self, value: NaiveDateTime, template: &OutputTemplate) -> Option<String> {
        let mut out = String::new();
        let mut prev: Option<&Tok> = None;

        for tok in &self.tokens {
            let piece = match *tok {
                Tok::Num { field, max, .. } => {
                    let number = match field {
                        Field::Year => template.year.lift(value.year())?,
                        Field::Month => value.month() as i32,
                        Field::Day => value.day() as i32,
                        Field::Hour => value.hour() as i32,
                        Field::Minute => value.minute() as i32,
                        Field::Second => value.second() as i32,
                    };
                    format!("{:0width$}", number, width = usize::from(max))
                }
                Tok::Month(names) => names.get(value.month0() as usize)?.first()?.to_string(),
                Tok::Weekday(names) => names.get(value.weekday().num_days_from_monday() as usize)?.first()?.to_string(),
                Tok::Lit(text) => text.to_string(),
                Tok::Words(words) => words.first()?.to_string(),
                Tok::Opt(_) | Tok::OptWords(_) | Tok::Rest => continue,
            };

            if prev.is_some_and(|prev| needs_space(prev, tok)) {
                out.push(' ');
            }
            out.push_str(&piece);
            prev = Some(tok);
        }

        Some(out)
    }
}

fn push_token(out: &mut String, tok: &Tok) {
    match *tok {
        Tok::Num { field, min, max } => {
            out.push_str(&format!("(?P<{}>[0-9]{{{},{}}})", field.name(), min, max));
        }
        Tok::Month(names) => {
            out.push_str("(?P<month>");
            push_alternation(out, names.iter().flat_map(|spellings| spellings.iter().copied()));
            out.push(')');
        }
        Tok::Weekday(names) => push_alternation(out, names.iter().flat_map(|spellings| spellings.iter().copied())),
        Tok::Lit(text) => out.push_str(&regex::escape(text)),
        Tok::Opt(text) => {
            out.push_str("(?:");
            out.push_str(&regex::escape(text));
            out.push_str(")?");
        }
        Tok::Words(words) => push_alternation(out, words.iter().copied()),
        Tok::OptWords(words) => {
            push_alternation(out, words.iter().copied());
            out.push('?');
        }
        Tok::Rest => out.push_str(REST),
    }
}

/// Case-insensitive alternation, longest spelling first.
fn push_alternation<'a>(out: &mut String, words: impl Iterator<Item = &'a str>) {
    let mut words: Vec<&str> = words.collect();
    words.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()).then_with(|| a.cmp(b)));
    words.dedup();

    out.push_str("(?i:");
    for (idx, word) in words.iter().enumerate() {
        if idx > 0 {
            out.push('|');
        }
        out.push_str(&regex::escape(word));
    }
    out.push(')');
}

fn needs_space(prev: &Tok, next: &Tok) -> bool {
    match (prev, next) {
        (_, Tok::Lit(_)) => false,
        (Tok::Lit(text), _) => text.ends_with(','),
        (Tok::Num { .. }, Tok::Num { field, .. }) => *field == Field::Hour,
        _ => true,
    }
}
