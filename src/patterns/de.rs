//! German patterns.

use crate::{Locale, NameTable, OutputTemplate, PatternSpec};

pub const MONTHS: NameTable = &[
    &["Januar", "Jänner", "Jan"],
    &["Februar", "Feb"],
    &["März", "Maerz", "Mär"],
    &["April", "Apr"],
    &["Mai"],
    &["Juni", "Jun"],
    &["Juli", "Jul"],
    &["August", "Aug"],
    &["September", "Sept", "Sep"],
    &["Oktober", "Okt"],
    &["November", "Nov"],
    &["Dezember", "Dez"],
];

pub const WEEKDAYS: NameTable = &[
    &["Montag", "Mo"],
    &["Dienstag", "Di"],
    &["Mittwoch", "Mi"],
    &["Donnerstag", "Do"],
    &["Freitag", "Fr"],
    &["Samstag", "Sonnabend", "Sa"],
    &["Sonntag", "So"],
];

/// 28. Juli 2015
pub fn pattern_de_base() -> PatternSpec {
    pattern! {
        key: "de_base",
        locale: Locale::De,
        grammar: [num!(Day, 1, 2), opt!("."), month!(MONTHS), num!(Year, 4, 4)],
        template: OutputTemplate::FULL_YEAR,
    }
}

/// Dienstag, 28. Juli 2015
pub fn pattern_de_weekday() -> PatternSpec {
    pattern! {
        key: "de_weekday",
        locale: Locale::De,
        grammar: [weekday!(WEEKDAYS), opt!(","), num!(Day, 1, 2), opt!("."), month!(MONTHS), num!(Year, 4, 4)],
        template: OutputTemplate::FULL_YEAR,
    }
}

pub fn get() -> Vec<PatternSpec> {
    vec![pattern_de_base(), pattern_de_weekday()]
}
