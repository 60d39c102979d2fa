//! French patterns.

use crate::{Locale, NameTable, OutputTemplate, PatternSpec};

pub const MONTHS: NameTable = &[
    &["janvier", "janv"],
    &["février", "fevrier", "févr", "fevr"],
    &["mars"],
    &["avril", "avr"],
    &["mai"],
    &["juin"],
    &["juillet", "juil"],
    &["août", "aout"],
    &["septembre", "sept"],
    &["octobre", "oct"],
    &["novembre", "nov"],
    &["décembre", "decembre", "déc", "dec"],
];

pub const WEEKDAYS: NameTable = &[
    &["lundi"],
    &["mardi"],
    &["mercredi"],
    &["jeudi"],
    &["vendredi"],
    &["samedi"],
    &["dimanche"],
];

/// 8 juillet 2015, 1er mai 2015
pub fn pattern_fr_base() -> PatternSpec {
    pattern! {
        key: "fr_base",
        locale: Locale::Fr,
        grammar: [num!(Day, 1, 2), opt_words!["er"], month!(MONTHS), num!(Year, 4, 4)],
        template: OutputTemplate::FULL_YEAR,
    }
}

/// Le 8 juillet 2015
pub fn pattern_fr_base_article() -> PatternSpec {
    pattern! {
        key: "fr_base_article",
        locale: Locale::Fr,
        grammar: [words!["le"], num!(Day, 1, 2), opt_words!["er"], month!(MONTHS), num!(Year, 4, 4)],
        template: OutputTemplate::FULL_YEAR,
    }
}

/// mercredi 8 juillet 2015
pub fn pattern_fr_weekday() -> PatternSpec {
    pattern! {
        key: "fr_weekday",
        locale: Locale::Fr,
        grammar: [weekday!(WEEKDAYS), opt!(","), num!(Day, 1, 2), opt_words!["er"], month!(MONTHS), num!(Year, 4, 4)],
        template: OutputTemplate::FULL_YEAR,
    }
}

pub fn get() -> Vec<PatternSpec> {
    vec![pattern_fr_base(), pattern_fr_base_article(), pattern_fr_weekday()]
}
