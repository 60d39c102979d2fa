//! Dutch patterns.

use crate::{Locale, NameTable, OutputTemplate, PatternSpec};

pub const MONTHS: NameTable = &[
    &["januari", "jan"],
    &["februari", "feb"],
    &["maart", "mrt"],
    &["april", "apr"],
    &["mei"],
    &["juni", "jun"],
    &["juli", "jul"],
    &["augustus", "aug"],
    &["september", "sep"],
    &["oktober", "okt"],
    &["november", "nov"],
    &["december", "dec"],
];

pub const WEEKDAYS: NameTable = &[
    &["maandag", "ma"],
    &["dinsdag", "di"],
    &["woensdag", "wo"],
    &["donderdag", "do"],
    &["vrijdag", "vr"],
    &["zaterdag", "za"],
    &["zondag", "zo"],
];

/// 3 maart 2016, 3. mrt 2016
pub fn pattern_nl_base() -> PatternSpec {
    pattern! {
        key: "nl_base",
        locale: Locale::Nl,
        grammar: [num!(Day, 1, 2), opt!("."), month!(MONTHS), num!(Year, 4, 4)],
        template: OutputTemplate::FULL_YEAR,
    }
}

/// donderdag, 3 maart 2016
pub fn pattern_nl_weekday() -> PatternSpec {
    pattern! {
        key: "nl_weekday",
        locale: Locale::Nl,
        grammar: [weekday!(WEEKDAYS), opt!(","), num!(Day, 1, 2), opt!("."), month!(MONTHS), num!(Year, 4, 4)],
        template: OutputTemplate::FULL_YEAR,
    }
}

/// maart 3, 2016
pub fn pattern_nl_rare_1() -> PatternSpec {
    pattern! {
        key: "nl_rare_1",
        locale: Locale::Nl,
        grammar: [month!(MONTHS), num!(Day, 1, 2), lit!(","), num!(Year, 4, 4)],
        template: OutputTemplate::FULL_YEAR,
    }
}

pub fn get() -> Vec<PatternSpec> {
    vec![pattern_nl_base(), pattern_nl_weekday(), pattern_nl_rare_1()]
}
