//! Numeric layouts shared by every locale.

use crate::{Locale, OutputTemplate, PatternSpec};

/// d/m/yyyy
pub fn pattern_date_1() -> PatternSpec {
    pattern! {
        key: "date_1",
        locale: Locale::Universal,
        grammar: [num!(Day, 1, 2), lit!("/"), num!(Month, 1, 2), lit!("/"), num!(Year, 4, 4)],
        template: OutputTemplate::FULL_YEAR,
    }
}

/// d.m.yyyy
pub fn pattern_date_2() -> PatternSpec {
    pattern! {
        key: "date_2",
        locale: Locale::Universal,
        grammar: [num!(Day, 1, 2), lit!("."), num!(Month, 1, 2), lit!("."), num!(Year, 4, 4)],
        template: OutputTemplate::FULL_YEAR,
    }
}

/// yyyy/m/d
pub fn pattern_date_3() -> PatternSpec {
    pattern! {
        key: "date_3",
        locale: Locale::Universal,
        grammar: [num!(Year, 4, 4), lit!("/"), num!(Month, 1, 2), lit!("/"), num!(Day, 1, 2)],
        template: OutputTemplate::FULL_YEAR,
    }
}

/// d.m.yy
pub fn pattern_date_4() -> PatternSpec {
    pattern! {
        key: "date_4",
        locale: Locale::Universal,
        grammar: [num!(Day, 1, 2), lit!("."), num!(Month, 1, 2), lit!("."), num!(Year, 2, 2)],
        template: OutputTemplate::TWO_DIGIT_YEAR,
    }
}

/// d-m-yyyy
pub fn pattern_date_iso8601() -> PatternSpec {
    pattern! {
        key: "date_iso8601",
        locale: Locale::Universal,
        grammar: [num!(Day, 1, 2), lit!("-"), num!(Month, 1, 2), lit!("-"), num!(Year, 4, 4)],
        template: OutputTemplate::FULL_YEAR,
    }
}

/// d-m-yy
pub fn pattern_date_iso8601_short() -> PatternSpec {
    pattern! {
        key: "date_iso8601_short",
        locale: Locale::Universal,
        grammar: [num!(Day, 1, 2), lit!("-"), num!(Month, 1, 2), lit!("-"), num!(Year, 2, 2)],
        template: OutputTemplate::TWO_DIGIT_YEAR,
    }
}

/// d/m/yy
pub fn pattern_date_8() -> PatternSpec {
    pattern! {
        key: "date_8",
        locale: Locale::Universal,
        grammar: [num!(Day, 1, 2), lit!("/"), num!(Month, 1, 2), lit!("/"), num!(Year, 2, 2)],
        template: OutputTemplate::TWO_DIGIT_YEAR,
    }
}

/// yyyy-m-d
pub fn pattern_date_9() -> PatternSpec {
    pattern! {
        key: "date_9",
        locale: Locale::Universal,
        grammar: [num!(Year, 4, 4), lit!("-"), num!(Month, 1, 2), lit!("-"), num!(Day, 1, 2)],
        template: OutputTemplate::FULL_YEAR,
    }
}

/// yyyy.m.d
pub fn pattern_date_10() -> PatternSpec {
    pattern! {
        key: "date_10",
        locale: Locale::Universal,
        grammar: [num!(Year, 4, 4), lit!("."), num!(Month, 1, 2), lit!("."), num!(Day, 1, 2)],
        template: OutputTemplate::FULL_YEAR,
    }
}

/// m/d/yy, only reached when d/m/yy produced no valid date
pub fn pattern_date_usa_1() -> PatternSpec {
    pattern! {
        key: "date_usa_1",
        locale: Locale::Universal,
        grammar: [num!(Month, 1, 2), lit!("/"), num!(Day, 1, 2), lit!("/"), num!(Year, 2, 2)],
        template: OutputTemplate::TWO_DIGIT_YEAR,
    }
}

/// m/d/yyyy
pub fn pattern_date_usa() -> PatternSpec {
    pattern! {
        key: "date_usa",
        locale: Locale::Universal,
        grammar: [num!(Month, 1, 2), lit!("/"), num!(Day, 1, 2), lit!("/"), num!(Year, 4, 4)],
        template: OutputTemplate::FULL_YEAR,
    }
}

/// d/m‘yy
pub fn pattern_rare_1() -> PatternSpec {
    pattern! {
        key: "rare_1",
        locale: Locale::Universal,
        grammar: [num!(Day, 1, 2), lit!("/"), num!(Month, 1, 2), lit!("‘"), num!(Year, 2, 2)],
        template: OutputTemplate::TWO_DIGIT_YEAR,
    }
}

/// dd.mm, year taken from the context
pub fn pattern_noyear_1() -> PatternSpec {
    pattern! {
        key: "noyear_1",
        locale: Locale::Universal,
        grammar: [num!(Day, 2, 2), lit!("."), num!(Month, 2, 2)],
        template: OutputTemplate::NO_YEAR,
    }
}

/// d.m.yy.
pub fn pattern_date_4_point() -> PatternSpec {
    pattern! {
        key: "date_4_point",
        locale: Locale::Universal,
        grammar: [num!(Day, 1, 2), lit!("."), num!(Month, 1, 2), lit!("."), num!(Year, 2, 2), lit!(".")],
        template: OutputTemplate::TWO_DIGIT_YEAR,
    }
}

/// yyyymmdd
pub fn pattern_date_6() -> PatternSpec {
    pattern! {
        key: "date_6",
        locale: Locale::Universal,
        grammar: [num!(Year, 4, 4), num!(Month, 2, 2), num!(Day, 2, 2)],
        template: OutputTemplate::FULL_YEAR,
    }
}

/// ddmmyyyy
pub fn pattern_date_5() -> PatternSpec {
    pattern! {
        key: "date_5",
        locale: Locale::Universal,
        grammar: [num!(Day, 2, 2), num!(Month, 2, 2), num!(Year, 4, 4)],
        template: OutputTemplate::FULL_YEAR,
    }
}

/// Separator-delimited layouts, tried before any month-name pattern.
pub fn common() -> Vec<PatternSpec> {
    vec![
        pattern_date_1(),
        pattern_date_2(),
        pattern_date_3(),
        pattern_date_4(),
        pattern_date_iso8601(),
        pattern_date_iso8601_short(),
        pattern_date_8(),
        pattern_date_9(),
        pattern_date_10(),
        pattern_date_usa_1(),
        pattern_date_usa(),
        pattern_rare_1(),
    ]
}

/// Year-less, trailing-dot and unseparated layouts.
pub fn rare() -> Vec<PatternSpec> {
    vec![pattern_noyear_1(), pattern_date_4_point(), pattern_date_6(), pattern_date_5()]
}
