use crate::engine::{MatchResult, PatternTable, Session, SessionReport};
use crate::{Error, LocaleSet};
use chrono::{Local, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;

static DEFAULT_TABLE: Lazy<PatternTable> = Lazy::new(|| PatternTable::load(None));

/// The built-in table, compiled on first use and shared read-only afterwards.
pub fn default_table() -> &'static PatternTable {
    &DEFAULT_TABLE
}

/// Matching context.
#[derive(Debug, Clone)]
pub struct Context {
    /// Supplies the year for patterns that carry none (for example `12.03`).
    pub reference_time: NaiveDateTime,
}

impl Default for Context {
    fn default() -> Self {
        if cfg!(test) {
            let reference = NaiveDate::from_ymd_opt(2013, 2, 12).and_then(|date| date.and_hms_opt(0, 0, 0));
            Self { reference_time: reference.unwrap_or_default() }
        } else {
            Self { reference_time: Local::now().naive_local() }
        }
    }
}

/// Options that affect matching.
#[derive(Debug, Clone, Copy)]
pub struct Options {
    /// Only try patterns of these locales. Numeric patterns always take part.
    pub locales: Option<LocaleSet>,
    /// Skip grammars whose prefix rule rejects the input. Turning this off
    /// never changes results, only cost.
    pub prefix_filter: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options { locales: None, prefix_filter: true }
    }
}

/// Match `text` against the built-in table with default [`Context`] and [`Options`].
///
/// # Example
/// ```
/// use dateglean::match_date;
///
/// let result = match_date("12 March 2021");
/// assert!(result.matched);
/// assert_eq!(result.fields.month, Some(3));
/// ```
pub fn match_date(text: &str) -> MatchResult {
    match_with(text, &Context::default(), &Options::default(), None)
}

/// Match `text` against the built-in table.
///
/// Pass a [`Session`] when matching many inputs from one source; it changes
/// which patterns are tried first, never what is returned.
pub fn match_with(text: &str, context: &Context, options: &Options, session: Option<&mut Session>) -> MatchResult {
    DEFAULT_TABLE.match_with(text, context, options, session)
}

/// Parse `text` into a date/time value.
///
/// # Example
/// ```
/// use dateglean::{Error, parse};
///
/// assert_eq!(parse("2021-03-12T07:30:00").unwrap().to_string(), "2021-03-12 07:30:00");
/// assert!(matches!(parse("not a date at all"), Err(Error::NotFound { .. })));
/// ```
pub fn parse(text: &str) -> Result<NaiveDateTime, Error> {
    parse_with(text, &Context::default(), &Options::default(), None)
}

/// Parse `text`, returning [`Error::NotFound`] when no pattern matches.
pub fn parse_with(
    text: &str,
    context: &Context,
    options: &Options,
    session: Option<&mut Session>,
) -> Result<NaiveDateTime, Error> {
    DEFAULT_TABLE.parse_with(text, context, options, session)
}

/// Run `f` inside a fresh session and close it afterwards.
pub fn with_session<R>(f: impl FnOnce(&mut Session) -> R) -> (R, SessionReport) {
    let mut session = Session::start();
    let out = f(&mut session);
    (out, session.end())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Fields;

    fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day).unwrap().and_hms_opt(hour, minute, second).unwrap()
    }

    #[test]
    fn english_day_month_year() {
        let result = match_date("12 March 2021");
        assert!(result.matched);
        assert_eq!(result.key(), Some("date_eng1"));
        assert_eq!(result.fields, Fields { year: Some(2021), month: Some(3), day: Some(12), ..Fields::default() });
        assert_eq!(result.normalized_value, Some(at(2021, 3, 12, 0, 0, 0)));
    }

    #[test]
    fn iso_like_date_time() {
        let result = match_date("2021-03-12T07:30:00");
        assert!(result.matched);
        assert_eq!(result.key(), Some("date_9:hms"));
        assert_eq!(result.normalized_value, Some(at(2021, 3, 12, 7, 30, 0)));
    }

    #[test]
    fn free_text_is_not_a_date() {
        let result = match_date("not a date at all");
        assert!(!result.matched);
        assert_eq!(result.pattern_key, None);
        assert_eq!(result.normalized_value, None);
        assert_eq!(parse("not a date at all"), Err(Error::NotFound { input: "not a date at all".to_string() }));
    }

    #[test]
    fn two_digit_years_pivot_at_fifty() {
        assert_eq!(parse("05.06.12").unwrap(), at(2012, 6, 5, 0, 0, 0));
        assert_eq!(parse("05.06.82").unwrap(), at(1982, 6, 5, 0, 0, 0));
        let result = match_date("05.06.82");
        assert_eq!(result.fields.year, Some(82));
    }

    #[test]
    fn year_less_pattern_uses_reference_year() {
        let ctx = Context { reference_time: at(2019, 7, 1, 12, 0, 0) };
        let value = parse_with("24.12", &ctx, &Options::default(), None).unwrap();
        assert_eq!(value, at(2019, 12, 24, 0, 0, 0));
    }

    #[test]
    fn locale_filter_restricts_words_but_not_numbers() {
        let options = Options { locales: Some(LocaleSet::RU), ..Options::default() };
        let ctx = Context::default();

        assert!(!match_with("12 March 2021", &ctx, &options, None).matched);
        assert!(match_with("12 марта 2021", &ctx, &options, None).matched);
        assert!(match_with("12/03/2021", &ctx, &options, None).matched);

        let result = match_with("12 March 2021", &ctx, &options, None);
        assert!(result.metrics.locale_skipped > 0);
    }

    #[test]
    fn prefix_filter_only_changes_cost() {
        let ctx = Context::default();
        let unfiltered = Options { prefix_filter: false, ..Options::default() };

        for input in ["12 March 2021", "15/03/2021", "2021-03-12T07:30:00", "Fri, 3 July 2015", "not a date"] {
            let fast = match_with(input, &ctx, &Options::default(), None);
            let slow = match_with(input, &ctx, &unfiltered, None);
            assert_eq!(fast.pattern_key, slow.pattern_key, "{input}");
            assert_eq!(fast.normalized_value, slow.normalized_value, "{input}");
            assert_eq!(slow.metrics.prefix_rejected, 0);
            assert!(fast.metrics.grammar_evaluations <= slow.metrics.grammar_evaluations);
        }

        // date_9 sits behind the slash and dot layouts, which never see the grammar.
        let fast = match_with("2021-03-12", &ctx, &Options::default(), None);
        assert_eq!(fast.key(), Some("date_9"));
        assert!(fast.metrics.prefix_rejected > 0);
    }

    #[test]
    fn invalid_calendar_values_fall_through() {
        // d/m/yy fails on month 16, m/d/yy takes over.
        let result = match_date("05/16/99");
        assert_eq!(result.key(), Some("date_usa_1"));
        assert_eq!(result.normalized_value, Some(at(1999, 5, 16, 0, 0, 0)));
        assert!(result.metrics.invalid_fields >= 1);

        assert!(!match_date("31/02/2021").matched);
    }

    #[test]
    fn with_session_reports_on_exit() {
        let ctx = Context::default();
        let (values, report) = with_session(|session| {
            ["15/03/2021", "16/03/2021"]
                .iter()
                .map(|text| parse_with(text, &ctx, &Options::default(), Some(&mut *session)))
                .collect::<Result<Vec<_>, _>>()
        });
        assert_eq!(values.unwrap().len(), 2);
        assert_eq!(report.matches, 2);
        assert_eq!(report.counters[0].0.as_ref(), "date_1");
    }

    #[test]
    fn default_table_is_shared() {
        assert!(std::ptr::eq(default_table(), default_table()));
        assert!(!default_table().is_empty());
    }
}
