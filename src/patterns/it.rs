//! Italian patterns.

use crate::{Locale, NameTable, OutputTemplate, PatternSpec};

pub const MONTHS: NameTable = &[
    &["gennaio", "gen"],
    &["febbraio", "feb"],
    &["marzo", "mar"],
    &["aprile", "apr"],
    &["maggio", "mag"],
    &["giugno", "giu"],
    &["luglio", "lug"],
    &["agosto", "ago"],
    &["settembre", "set"],
    &["ottobre", "ott"],
    &["novembre", "nov"],
    &["dicembre", "dic"],
];

pub const WEEKDAYS: NameTable = &[
    &["lunedì", "lunedi"],
    &["martedì", "martedi"],
    &["mercoledì", "mercoledi"],
    &["giovedì", "giovedi"],
    &["venerdì", "venerdi"],
    &["sabato"],
    &["domenica"],
];

/// 12 maggio 2015
pub fn pattern_it_base() -> PatternSpec {
    pattern! {
        key: "it_base",
        locale: Locale::It,
        grammar: [num!(Day, 1, 2), month!(MONTHS), num!(Year, 4, 4)],
        template: OutputTemplate::FULL_YEAR,
    }
}

/// martedì 12 maggio 2015
pub fn pattern_it_weekday() -> PatternSpec {
    pattern! {
        key: "it_weekday",
        locale: Locale::It,
        grammar: [weekday!(WEEKDAYS), opt!(","), num!(Day, 1, 2), month!(MONTHS), num!(Year, 4, 4)],
        template: OutputTemplate::FULL_YEAR,
    }
}

/// maggio 12, 2015
pub fn pattern_it_rare_1() -> PatternSpec {
    pattern! {
        key: "it_rare_1",
        locale: Locale::It,
        grammar: [month!(MONTHS), num!(Day, 1, 2), lit!(","), num!(Year, 4, 4)],
        template: OutputTemplate::FULL_YEAR,
    }
}

pub fn get() -> Vec<PatternSpec> {
    vec![pattern_it_base(), pattern_it_weekday(), pattern_it_rare_1()]
}
