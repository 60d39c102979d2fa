//! Portuguese patterns.

use crate::{Locale, NameTable, OutputTemplate, PatternSpec};

pub const MONTHS: NameTable = &[
    &["janeiro"],
    &["fevereiro"],
    &["março", "marco"],
    &["abril"],
    &["maio"],
    &["junho"],
    &["julho"],
    &["agosto"],
    &["setembro"],
    &["outubro"],
    &["novembro"],
    &["dezembro"],
];

/// 26 julho 2015
pub fn pattern_pt_base() -> PatternSpec {
    pattern! {
        key: "pt_base",
        locale: Locale::Pt,
        grammar: [num!(Day, 1, 2), month!(MONTHS), num!(Year, 4, 4)],
        template: OutputTemplate::FULL_YEAR,
    }
}

/// 26 de julho de 2015
pub fn pattern_pt_base_article() -> PatternSpec {
    pattern! {
        key: "pt_base_article",
        locale: Locale::Pt,
        grammar: [num!(Day, 1, 2), words!["de"], month!(MONTHS), words!["de"], num!(Year, 4, 4)],
        template: OutputTemplate::FULL_YEAR,
    }
}

pub fn get() -> Vec<PatternSpec> {
    vec![pattern_pt_base(), pattern_pt_base_article()]
}
