//! Warm-session behaviour on batches that share a layout.

use chrono::{NaiveDate, NaiveDateTime};
use dateglean::{Context, Options, Session, SessionConfig, ShapeKey, match_with, with_session};

fn context() -> Context {
    Context { reference_time: at(2013, 2, 12) }
}

fn at(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day).unwrap().and_hms_opt(0, 0, 0).unwrap()
}

#[test]
fn eleventh_slash_date_costs_one_grammar_evaluation() {
    let ctx = context();
    let options = Options::default();
    let mut session = Session::start();

    for day in 13..=22 {
        let input = format!("{day}/03/2021");
        let result = match_with(&input, &ctx, &options, Some(&mut session));
        assert_eq!(result.key(), Some("date_1"), "{input}");
    }

    let result = match_with("23/03/2021", &ctx, &options, Some(&mut session));
    assert!(result.matched);
    assert_eq!(result.normalized_value, Some(at(2021, 3, 23)));
    assert_eq!(result.metrics.grammar_evaluations, 1);
    assert!(result.metrics.cache_hit);

    let report = session.end();
    assert_eq!(report.matches, 11);
    assert_eq!(report.shapes, 1);
    assert_eq!(report.counters[0].0.as_ref(), "date_1");
    assert_eq!(report.counters[0].1.successes, 11);
}

#[test]
fn warm_hit_deep_in_the_table_is_confirmed_against_earlier_patterns() {
    let ctx = context();
    let options = Options::default();

    let cold = match_with("12 maggio 2015", &ctx, &options, None);
    assert_eq!(cold.key(), Some("it_base"));
    assert!(cold.metrics.grammar_evaluations > 1);
    assert!(!cold.metrics.cache_hit);

    let mut session = Session::start();
    match_with("11 maggio 2015", &ctx, &options, Some(&mut session));

    // Every earlier pattern that passes its prefix rule still runs once.
    let warm = match_with("12 maggio 2015", &ctx, &options, Some(&mut session));
    assert_eq!(warm.pattern_key, cold.pattern_key);
    assert_eq!(warm.normalized_value, cold.normalized_value);
    assert_eq!(warm.metrics.grammar_evaluations, cold.metrics.grammar_evaluations);
    assert!(warm.metrics.cache_hit);
}

#[test]
fn month_first_history_does_not_flip_a_day_first_reading() {
    let ctx = context();
    let options = Options::default();
    let mut session = Session::start();

    let usa = match_with("05/16/2021", &ctx, &options, Some(&mut session));
    assert_eq!(usa.key(), Some("date_usa"));

    let cold = match_with("05/06/2021", &ctx, &options, None);
    let warm = match_with("05/06/2021", &ctx, &options, Some(&mut session));
    assert_eq!(cold.key(), Some("date_1"));
    assert_eq!(warm.pattern_key, cold.pattern_key);
    assert_eq!(warm.normalized_value, Some(at(2021, 6, 5)));
    assert!(!warm.metrics.cache_hit);

    let shape = ShapeKey::of("05/06/2021");
    assert_eq!(&*session.preferred_order(&shape)[0], "date_1");
}

#[test]
fn shared_month_name_keeps_the_table_order_winner() {
    let ctx = context();
    let options = Options::default();
    let mut session = Session::start();

    match_with("12 maggio 2015", &ctx, &options, Some(&mut session));

    let cold = match_with("12 marzo 2015", &ctx, &options, None);
    let warm = match_with("12 marzo 2015", &ctx, &options, Some(&mut session));
    assert_eq!(cold.key(), Some("es_base"));
    assert_eq!(warm.pattern_key, cold.pattern_key);
    assert_eq!(warm.normalized_value, Some(at(2015, 3, 12)));
    assert!(!warm.metrics.cache_hit);
}

#[test]
fn stale_preference_falls_back_to_table_order() {
    let ctx = context();
    let options = Options::default();
    let mut session = Session::start();

    // Both inputs share the "9 a 9" shape in the same length bucket.
    let it = match_with("12 maggio 2015", &ctx, &options, Some(&mut session));
    assert_eq!(it.key(), Some("it_base"));
    assert_eq!(ShapeKey::of("12 maggio 2015"), ShapeKey::of("12 August 2015"));

    let en = match_with("12 August 2015", &ctx, &options, Some(&mut session));
    assert_eq!(en.key(), Some("date_eng1"));
    assert!(!en.metrics.cache_hit);
    assert_eq!(en.normalized_value, Some(at(2015, 8, 12)));

    let shape = ShapeKey::of("12 August 2015");
    let preferred: Vec<&str> = session.preferred_order(&shape).iter().map(|key| &**key).collect();
    assert_eq!(preferred, ["date_eng1", "it_base"]);
}

#[test]
fn mixed_batch_keeps_one_history_per_shape() {
    let ctx = context();
    let inputs = ["15/03/2021", "12 March 2021", "2021-03-12T07:30:00", "16/03/2021", "13 March 2021"];

    let (results, report) = with_session(|session| {
        inputs.iter().map(|input| match_with(input, &ctx, &Options::default(), Some(&mut *session))).collect::<Vec<_>>()
    });

    assert!(results.iter().all(|result| result.matched));
    assert!(!results[0].metrics.cache_hit);
    assert!(results[3].metrics.cache_hit);
    assert!(results[4].metrics.cache_hit);
    assert_eq!(report.matches, 5);
    assert_eq!(report.shapes, 3);
}

#[test]
fn history_of_one_keeps_only_the_latest_winner() {
    let ctx = context();
    let mut session = Session::with_config(SessionConfig { history: 1 });

    match_with("12 maggio 2015", &ctx, &Options::default(), Some(&mut session));
    match_with("12 August 2015", &ctx, &Options::default(), Some(&mut session));

    let shape = ShapeKey::of("12 maggio 2015");
    assert_eq!(session.preferred_order(&shape).len(), 1);
    assert_eq!(&*session.preferred_order(&shape)[0], "date_eng1");
}

#[test]
fn misses_are_not_recorded() {
    let ctx = context();
    let mut session = Session::start();

    let result = match_with("not a date at all", &ctx, &Options::default(), Some(&mut session));
    assert!(!result.matched);
    assert!(session.preferred_order(&ShapeKey::of("not a date at all")).is_empty());
    assert_eq!(session.matches(), 0);
}
