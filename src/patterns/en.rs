//! English month-name patterns.

use crate::{Locale, NameTable, OutputTemplate, PatternSpec};

pub const MONTHS: NameTable = &[
    &["January", "Jan"],
    &["February", "Feb"],
    &["March", "Mar"],
    &["April", "Apr"],
    &["May"],
    &["June", "Jun"],
    &["July", "Jul"],
    &["August", "Aug"],
    &["September", "Sept", "Sep"],
    &["October", "Oct"],
    &["November", "Nov"],
    &["December", "Dec"],
];

pub const WEEKDAYS: NameTable = &[
    &["Monday", "Mon"],
    &["Tuesday", "Tues", "Tue"],
    &["Wednesday", "Wed"],
    &["Thursday", "Thurs", "Thur", "Thu"],
    &["Friday", "Fri"],
    &["Saturday", "Sat"],
    &["Sunday", "Sun"],
];

/// 12 March 2021, 6 Jan. 2009
pub fn pattern_date_eng1() -> PatternSpec {
    pattern! {
        key: "date_eng1",
        locale: Locale::En,
        grammar: [num!(Day, 1, 2), opt!("."), month!(MONTHS), opt!("."), num!(Year, 4, 4)],
        template: OutputTemplate::FULL_YEAR,
    }
}

/// 7 August, 2015
pub fn pattern_date_eng1x() -> PatternSpec {
    pattern! {
        key: "date_eng1x",
        locale: Locale::En,
        grammar: [num!(Day, 1, 2), month!(MONTHS), opt!("."), lit!(","), num!(Year, 4, 4)],
        template: OutputTemplate::FULL_YEAR,
    }
}

/// July 01, 2015 / Jan 8 1098
pub fn pattern_date_eng2() -> PatternSpec {
    pattern! {
        key: "date_eng2",
        locale: Locale::En,
        grammar: [month!(MONTHS), opt!("."), num!(Day, 1, 2), opt!(","), num!(Year, 4, 4)],
        template: OutputTemplate::FULL_YEAR,
    }
}

/// August 10th, 2015
pub fn pattern_date_eng2_ord() -> PatternSpec {
    pattern! {
        key: "date_eng2_ord",
        locale: Locale::En,
        grammar: [month!(MONTHS), num!(Day, 1, 2), words!["st", "nd", "rd", "th"], opt!(","), num!(Year, 4, 4)],
        template: OutputTemplate::FULL_YEAR,
    }
}

/// 12-Mar-2021
pub fn pattern_date_eng3() -> PatternSpec {
    pattern! {
        key: "date_eng3",
        locale: Locale::En,
        grammar: [num!(Day, 1, 2), lit!("-"), month!(MONTHS), lit!("-"), num!(Year, 4, 4)],
        template: OutputTemplate::FULL_YEAR,
    }
}

/// 12-Mar-21, 12 Mar 21
pub fn pattern_date_eng4_short() -> PatternSpec {
    pattern! {
        key: "date_eng4_short",
        locale: Locale::En,
        grammar: [num!(Day, 1, 2), opt!("-"), month!(MONTHS), opt!("-"), num!(Year, 2, 2)],
        template: OutputTemplate::TWO_DIGIT_YEAR,
    }
}

/// 14th April 2015
pub fn pattern_rare_4() -> PatternSpec {
    pattern! {
        key: "rare_4",
        locale: Locale::En,
        grammar: [
            num!(Day, 1, 2),
            words!["st", "nd", "rd", "th"],
            opt!("of"),
            month!(MONTHS),
            opt!(","),
            num!(Year, 4, 4),
            opt!(":"),
        ],
        template: OutputTemplate::FULL_YEAR,
    }
}

/// Thursday 4 April 2019, Fri, 3 July 2015
pub fn pattern_weekday_eng() -> PatternSpec {
    pattern! {
        key: "weekday_eng",
        locale: Locale::En,
        grammar: [weekday!(WEEKDAYS), opt!(","), num!(Day, 1, 2), month!(MONTHS), opt!(","), num!(Year, 4, 4)],
        template: OutputTemplate::FULL_YEAR,
    }
}

/// Friday, July 3, 2015
pub fn pattern_weekday_eng2() -> PatternSpec {
    pattern! {
        key: "weekday_eng2",
        locale: Locale::En,
        grammar: [weekday!(WEEKDAYS), opt!(","), month!(MONTHS), num!(Day, 1, 2), opt!(","), num!(Year, 4, 4)],
        template: OutputTemplate::FULL_YEAR,
    }
}

/// Wednesday, 22/04/2015
pub fn pattern_weekday_eng_iso() -> PatternSpec {
    pattern! {
        key: "weekday_eng_iso",
        locale: Locale::En,
        grammar: [
            weekday!(WEEKDAYS),
            opt!(","),
            num!(Day, 1, 2),
            lit!("/"),
            num!(Month, 1, 2),
            lit!("/"),
            num!(Year, 4, 4),
        ],
        template: OutputTemplate::FULL_YEAR,
    }
}

pub fn get() -> Vec<PatternSpec> {
    vec![
        pattern_date_eng1(),
        pattern_date_eng1x(),
        pattern_date_eng2(),
        pattern_date_eng2_ord(),
        pattern_date_eng3(),
        pattern_date_eng4_short(),
        pattern_rare_4(),
        pattern_weekday_eng(),
        pattern_weekday_eng2(),
        pattern_weekday_eng_iso(),
    ]
}
