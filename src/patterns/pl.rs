//! Polish patterns. Months are listed in the genitive (`5 stycznia 2020`)
//! and the nominative.

use crate::{Locale, NameTable, OutputTemplate, PatternSpec};

pub const MONTHS: NameTable = &[
    &["stycznia", "styczeń", "styczen", "sty"],
    &["lutego", "luty", "lut"],
    &["marca", "marzec"],
    &["kwietnia", "kwiecień", "kwiecien", "kwi"],
    &["maja", "maj"],
    &["czerwca", "czerwiec", "cze"],
    &["lipca", "lipiec", "lip"],
    &["sierpnia", "sierpień", "sierpien", "sie"],
    &["września", "wrzesień", "wrzesnia", "wrzesien", "wrz"],
    &["października", "październik", "pazdziernika", "pazdziernik", "paź", "paz"],
    &["listopada", "listopad", "lis"],
    &["grudnia", "grudzień", "grudzien", "gru"],
];

/// 5 stycznia 2020, 17 Marca 2018 r.
pub fn pattern_pl_base() -> PatternSpec {
    pattern! {
        key: "pl_base",
        locale: Locale::Pl,
        grammar: [num!(Day, 1, 2), opt!("."), month!(MONTHS), num!(Year, 4, 4), opt_words!["roku", "r.", "r"]],
        template: OutputTemplate::FULL_YEAR,
    }
}

pub fn get() -> Vec<PatternSpec> {
    vec![pattern_pl_base()]
}
