use crate::patterns;
use crate::{Context, Locale, LocaleSet, Options, PatternTable, parse_with};

#[test]
fn date_examples_matching() {
    // Array of (expected_value, input_string)
    let cases: Vec<(&str, &str)> = vec![
        ("2009-12-01 00:00:00", "01.12.2009"),
        ("2013-01-12 00:00:00", "2013-01-12"),
        ("2009-12-07 00:00:00", "7/12/2009"),
        ("1991-11-29 00:00:00", "11/29/1991"),
        ("1999-05-16 00:00:00", "05/16/99"),
        ("2012-06-05 00:00:00", "05.06.12"),
        ("2009-03-01 00:00:00", "01.03.09."),
        ("2009-03-12 00:00:00", "12/03‘09"),
        ("2021-03-12 00:00:00", "20210312"),
        ("2021-03-12 00:00:00", "12032021"),
        ("2013-12-24 00:00:00", "24.12"),
        ("2009-01-06 00:00:00", "6 Jan 2009"),
        ("2009-01-06 00:00:00", "6 Jan. 2009"),
        ("1098-01-08 00:00:00", "Jan 8, 1098"),
        ("2001-01-01 00:00:00", "JAN 1, 2001"),
        ("2019-04-04 00:00:00", "Thursday 4 April 2019"),
        ("2015-07-01 00:00:00", "July 01, 2015"),
        ("2015-07-03 00:00:00", "Fri, 3 July 2015"),
        ("2015-07-03 00:00:00", "Friday, July 3, 2015"),
        ("2015-08-10 00:00:00", "August 10th, 2015"),
        ("2015-04-14 00:00:00", "14th April 2015"),
        ("2015-08-07 00:00:00", "7 August, 2015"),
        ("2021-03-12 00:00:00", "12-Mar-2021"),
        ("2021-03-12 00:00:00", "12-Mar-21"),
        ("2015-04-22 00:00:00", "Wednesday, 22/04/2015"),
        ("2003-01-03 00:00:00", "3 Января 2003 года"),
        ("2015-07-09 00:00:00", "9 июля 2015 г."),
        ("2015-07-03 00:00:00", "3 Июля, 2015"),
        ("2009-03-12 00:00:00", "12.03.2009 г."),
        ("2015-07-09 00:00:00", "09.июля.2015"),
        ("2015-07-16 00:00:00", "Июль 16, 2015"),
        ("2015-07-17 00:00:00", "пятница, июля 17, 2015"),
        ("2015-08-18 18:51:00", "Вторник, 18 Август 2015 18:51"),
        ("2015-02-21 00:00:00", "21 Фeвpyapи 2015"),
        ("2013-11-01 00:00:00", "1 нoeмвpи 2013"),
        ("2015-07-28 00:00:00", "28. Juli 2015"),
        ("2015-07-28 00:00:00", "Dienstag, 28. Juli 2015"),
        ("2015-07-08 00:00:00", "8 juillet 2015"),
        ("2015-07-08 00:00:00", "Le 8 juillet 2015"),
        ("2015-05-01 00:00:00", "1er mai 2015"),
        ("2015-06-17 00:00:00", "17 de Junio de 2015"),
        ("2015-06-09 00:00:00", "junio 9, 2015"),
        ("2015-07-26 00:00:00", "26 de julho de 2015"),
        ("2015-05-12 00:00:00", "12 maggio 2015"),
        ("2015-01-17 00:00:00", "17 Ocak 2015"),
        ("2022-09-09 00:00:00", "9 eylül 2022 tarihinde"),
        ("2020-01-05 00:00:00", "5 stycznia 2020"),
        ("2018-03-17 00:00:00", "17 Marca 2018 r."),
        ("2016-03-03 00:00:00", "3 maart 2016"),
        ("2016-03-03 00:00:00", "donderdag, 3 maart 2016"),
        ("1999-03-12 00:00:00", "12.03.1999 Hello people"),
        ("2009-05-16 14:10:00", "16 May 2009 14:10"),
        ("2009-03-01 14:53:12", "01.03.2009 14:53:12"),
        ("2015-07-23 09:00:00", "23 Jul 2015, 09:00 BST"),
        ("2015-08-12 00:00:00", "12-08-2015 - 09:00"),
        ("2021-03-12 07:30:00", "2021-03-12T07:30:00"),
        ("2021-03-12 07:30:00", "  12 March   2021 07:30 "),
    ];

    let ctx = Context::default();
    let options = Options::default();

    for (expected, input) in cases {
        match parse_with(input, &ctx, &options, None) {
            Ok(value) => assert_eq!(value.to_string(), expected, "input {input:?}"),
            Err(err) => panic!("input {input:?}: {err}"),
        }
    }
}

#[test]
fn matching_pattern_keys() {
    let cases: Vec<(&str, &str)> = vec![
        ("date_1", "15/03/2021"),
        ("date_usa", "11/29/1991"),
        ("date_eng1", "12 March 2021"),
        ("date_eng1:hm", "16 May 2009 14:10"),
        ("date_eng1:hm:tail", "23 Jul 2015, 09:00 BST"),
        ("date_iso8601:tail", "12-08-2015 - 09:00"),
        ("date_2:tail", "12.03.1999 Hello people"),
        ("date_rus3", "12.03.2009 г."),
        ("date_6", "20210312"),
        ("date_5", "12032021"),
        ("noyear_1", "24.12"),
        ("fr_base_article", "Le 8 juillet 2015"),
        ("es_base_article", "17 de Junio de 2015"),
        ("pt_base_article", "26 de julho de 2015"),
        ("bg_base", "21 Фeвpyapи 2015"),
        ("tr_base", "9 eylül 2022 tarihinde"),
    ];

    let ctx = Context::default();
    for (key, input) in cases {
        let result = crate::match_with(input, &ctx, &Options::default(), None);
        assert_eq!(result.key(), Some(key), "input {input:?}");
    }
}

#[test]
fn date_examples_not_matching() {
    let cases = [
        "totally invalid date",
        "not a date at all",
        "",
        "   ",
        "1",
        "12",
        "123",
        "32.01.2020",
        "2021-13-01",
        "31/02/2021",
        "12 Smarch 2021",
        "March",
    ];

    let ctx = Context::default();
    for input in cases {
        let result = crate::match_with(input, &ctx, &Options::default(), None);
        assert!(!result.matched, "input {input:?} matched {:?}", result.pattern_key);
        assert!(parse_with(input, &ctx, &Options::default(), None).is_err());
    }
}

#[test]
fn locale_tables_are_complete() {
    let months = [
        patterns::bg::MONTHS,
        patterns::de::MONTHS,
        patterns::en::MONTHS,
        patterns::es::MONTHS,
        patterns::fr::MONTHS,
        patterns::it::MONTHS,
        patterns::nl::MONTHS,
        patterns::pl::MONTHS,
        patterns::pt::MONTHS,
        patterns::ru::MONTHS,
        patterns::tr::MONTHS,
    ];
    for table in months {
        assert_eq!(table.len(), 12);
        assert!(table.iter().all(|spellings| !spellings.is_empty()));
    }

    let weekdays = [
        patterns::de::WEEKDAYS,
        patterns::en::WEEKDAYS,
        patterns::fr::WEEKDAYS,
        patterns::it::WEEKDAYS,
        patterns::nl::WEEKDAYS,
        patterns::ru::WEEKDAYS,
    ];
    for table in weekdays {
        assert_eq!(table.len(), 7);
    }
}

#[test]
fn every_locale_loads_on_its_own() {
    for locale in Locale::ALL {
        let table = PatternTable::load(Some(LocaleSet::from(locale)));
        assert!(table.report().skipped.is_empty());
        assert!(table.patterns().iter().all(|p| p.locale() == locale || p.locale() == Locale::Universal));
        assert!(table.get("date_1").is_some(), "{locale}");
    }
}
