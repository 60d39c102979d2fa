//! Bulgarian patterns.
//!
//! Scraped Bulgarian pages often spell month names with Latin look-alike
//! letters (`Фeвpyapи`, with Latin `e`, `p`, `y`, `a`). Those spellings are
//! listed after the proper Cyrillic one.

use crate::{Locale, NameTable, OutputTemplate, PatternSpec};

pub const MONTHS: NameTable = &[
    &["януари", "янyapи"],
    &["февруари", "фeвpyapи"],
    &["март", "мapт"],
    &["април", "апpил", "aпpил"],
    &["май"],
    &["юни"],
    &["юли"],
    &["август", "авгycт", "aвгycт"],
    &["септември", "сeптeмвpи", "ceптeмвpи"],
    &["октомври", "октoмвpи", "oктoмвpи"],
    &["ноември", "нoeмвpи"],
    &["декември", "дeкeмвpи"],
];

/// 21 Фeвpyapи 2015, 1 нoeмвpи 2013 г.
pub fn pattern_bg_base() -> PatternSpec {
    pattern! {
        key: "bg_base",
        locale: Locale::Bg,
        grammar: [num!(Day, 1, 2), month!(MONTHS), num!(Year, 4, 4), opt_words!["година", "г.", "г"]],
        template: OutputTemplate::FULL_YEAR,
    }
}

pub fn get() -> Vec<PatternSpec> {
    vec![pattern_bg_base()]
}
