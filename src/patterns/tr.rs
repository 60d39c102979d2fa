//! Turkish patterns.

use crate::{Locale, NameTable, OutputTemplate, PatternSpec};

pub const MONTHS: NameTable = &[
    &["Ocak"],
    &["Şubat"],
    &["Mart"],
    &["Nisan"],
    &["Mayıs"],
    &["Haziran"],
    &["Temmuz"],
    &["Ağustos"],
    &["Eylül"],
    &["Ekim"],
    &["Kasım"],
    &["Aralık"],
];

/// 17 Ocak 2015, 9 eylül 2022 tarihinde
pub fn pattern_tr_base() -> PatternSpec {
    pattern! {
        key: "tr_base",
        locale: Locale::Tr,
        grammar: [num!(Day, 1, 2), month!(MONTHS), num!(Year, 4, 4), opt_words!["tarihinde", "tarihli"]],
        template: OutputTemplate::FULL_YEAR,
    }
}

pub fn get() -> Vec<PatternSpec> {
    vec![pattern_tr_base()]
}
