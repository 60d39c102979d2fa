//! Spanish patterns.

use crate::{Locale, NameTable, OutputTemplate, PatternSpec};

pub const MONTHS: NameTable = &[
    &["enero"],
    &["febrero"],
    &["marzo"],
    &["abril"],
    &["mayo"],
    &["junio"],
    &["julio"],
    &["agosto"],
    &["septiembre", "setiembre"],
    &["octubre"],
    &["noviembre"],
    &["diciembre"],
];

/// 17 junio 2015
pub fn pattern_es_base() -> PatternSpec {
    pattern! {
        key: "es_base",
        locale: Locale::Es,
        grammar: [num!(Day, 1, 2), month!(MONTHS), num!(Year, 4, 4)],
        template: OutputTemplate::FULL_YEAR,
    }
}

/// 17 de Junio de 2015
pub fn pattern_es_base_article() -> PatternSpec {
    pattern! {
        key: "es_base_article",
        locale: Locale::Es,
        grammar: [num!(Day, 1, 2), words!["de"], month!(MONTHS), words!["de", "del"], num!(Year, 4, 4)],
        template: OutputTemplate::FULL_YEAR,
    }
}

/// junio 9, 2015
pub fn pattern_es_rare_1() -> PatternSpec {
    pattern! {
        key: "es_rare_1",
        locale: Locale::Es,
        grammar: [month!(MONTHS), num!(Day, 1, 2), lit!(","), num!(Year, 4, 4)],
        template: OutputTemplate::FULL_YEAR,
    }
}

pub fn get() -> Vec<PatternSpec> {
    vec![pattern_es_base(), pattern_es_base_article(), pattern_es_rare_1()]
}
