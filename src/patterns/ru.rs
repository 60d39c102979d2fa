//! Russian patterns. Month names accept the genitive (`3 января`), the
//! nominative (`Январь 3`) and common abbreviations.

use crate::{Locale, NameTable, OutputTemplate, PatternSpec};

pub const MONTHS: NameTable = &[
    &["января", "январь", "янв"],
    &["февраля", "февраль", "фев", "февр"],
    &["марта", "март", "мар"],
    &["апреля", "апрель", "апр"],
    &["мая", "май"],
    &["июня", "июнь", "июн"],
    &["июля", "июль", "июл"],
    &["августа", "август", "авг"],
    &["сентября", "сентябрь", "сен", "сент"],
    &["октября", "октябрь", "окт"],
    &["ноября", "ноябрь", "ноя", "нояб"],
    &["декабря", "декабрь", "дек"],
];

pub const WEEKDAYS: NameTable = &[
    &["понедельник", "пн"],
    &["вторник", "вт"],
    &["среда", "ср"],
    &["четверг", "чт"],
    &["пятница", "пт"],
    &["суббота", "сб"],
    &["воскресенье", "воскресение", "вс"],
];

/// 3 Января 2003 года, 9 июля 2015 г., 3 Июля, 2015
pub fn pattern_date_rus() -> PatternSpec {
    pattern! {
        key: "date_rus",
        locale: Locale::Ru,
        grammar: [
            num!(Day, 1, 2),
            opt!(","),
            month!(MONTHS),
            opt!(","),
            num!(Year, 4, 4),
            opt_words!["года", "г.", "г"],
        ],
        template: OutputTemplate::FULL_YEAR,
    }
}

/// 12.03.2009 г.
pub fn pattern_date_rus3() -> PatternSpec {
    pattern! {
        key: "date_rus3",
        locale: Locale::Ru,
        grammar: [
            num!(Day, 1, 2),
            lit!("."),
            num!(Month, 1, 2),
            lit!("."),
            num!(Year, 4, 4),
            words!["года", "г.", "г"],
        ],
        template: OutputTemplate::FULL_YEAR,
    }
}

/// 09.июля.2015
pub fn pattern_rus_rare_2() -> PatternSpec {
    pattern! {
        key: "rus_rare_2",
        locale: Locale::Ru,
        grammar: [num!(Day, 1, 2), lit!("."), month!(MONTHS), lit!("."), num!(Year, 4, 4)],
        template: OutputTemplate::FULL_YEAR,
    }
}

/// Вторник, 18 Август 2015
pub fn pattern_weekday_rus() -> PatternSpec {
    pattern! {
        key: "weekday_rus",
        locale: Locale::Ru,
        grammar: [
            weekday!(WEEKDAYS),
            opt!(","),
            num!(Day, 1, 2),
            month!(MONTHS),
            opt!(","),
            num!(Year, 4, 4),
            opt_words!["года", "г.", "г"],
        ],
        template: OutputTemplate::FULL_YEAR,
    }
}

/// Июль 16, 2015
pub fn pattern_rus_rare_5() -> PatternSpec {
    pattern! {
        key: "rus_rare_5",
        locale: Locale::Ru,
        grammar: [month!(MONTHS), num!(Day, 1, 2), opt!(","), num!(Year, 4, 4)],
        template: OutputTemplate::FULL_YEAR,
    }
}

/// пятница, июля 17, 2015
pub fn pattern_rus_rare_6() -> PatternSpec {
    pattern! {
        key: "rus_rare_6",
        locale: Locale::Ru,
        grammar: [weekday!(WEEKDAYS), lit!(","), month!(MONTHS), num!(Day, 1, 2), lit!(","), num!(Year, 4, 4)],
        template: OutputTemplate::FULL_YEAR,
    }
}

pub fn get() -> Vec<PatternSpec> {
    vec![
        pattern_date_rus(),
        pattern_date_rus3(),
        pattern_rus_rare_2(),
        pattern_weekday_rus(),
        pattern_rus_rare_5(),
        pattern_rus_rare_6(),
    ]
}
