//! Template assembly.
//!
//! Turns the raw [`Fields`] a grammar captured into a `NaiveDateTime`. This is
//! the only place that knows about year pivots and calendar validity; a
//! failure here is a [`FieldError`], which the matcher treats as "this pattern
//! did not match" and moves on.

use crate::{Field, FieldError, Fields, OutputTemplate, YearRule};
use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};

impl OutputTemplate {
    /// Assemble `fields` into a calendar value.
    ///
    /// `reference` is only consulted by [`YearRule::Reference`]. Absent time
    /// fields default to zero.
    pub fn assemble(&self, fields: &Fields, reference: NaiveDateTime) -> Result<NaiveDateTime, FieldError> {
        let year = self.year.resolve(fields.year, reference)?;
        let month = fields.month.ok_or(FieldError::Missing(Field::Month))?;
        let day = fields.day.ok_or(FieldError::Missing(Field::Day))?;

        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or(FieldError::InvalidDate { year, month, day })?;

        let (hour, minute, second) =
            (fields.hour.unwrap_or(0), fields.minute.unwrap_or(0), fields.second.unwrap_or(0));
        let time =
            NaiveTime::from_hms_opt(hour, minute, second).ok_or(FieldError::InvalidTime { hour, minute, second })?;

        Ok(NaiveDateTime::new(date, time))
    }
}

impl YearRule {
    /// Resolve the calendar year from the captured raw value.
    pub fn resolve(self, raw: Option<i32>, reference: NaiveDateTime) -> Result<i32, FieldError> {
        match (self, raw) {
            (YearRule::Reference, None) => Ok(reference.year()),
            (_, None) => Err(FieldError::Missing(Field::Year)),
            (YearRule::TwoDigit { pivot }, Some(year)) => Ok(year_from(year, pivot)),
            (YearRule::Full | YearRule::Reference, Some(year)) => Ok(year),
        }
    }

    /// The value a grammar would have to capture for `year`, or `None` when
    /// this rule cannot produce it.
    pub(crate) fn lift(self, year: i32) -> Option<i32> {
        match self {
            YearRule::Full => (0..=9999).contains(&year).then_some(year),
            YearRule::TwoDigit { pivot } => {
                let short = year.rem_euclid(100);
                (year_from(short, pivot) == year).then_some(short)
            }
            YearRule::Reference => None,
        }
    }
}

/// Normalize a two-digit year against `pivot`.
///
/// - `pivot..=99` map to the 1900s
/// - `0..pivot` map to the 2000s
///
/// Values of 100 or more are returned unchanged.
pub fn year_from(val: i32, pivot: u8) -> i32 {
    if (0..100).contains(&val) { if val >= i32::from(pivot) { 1900 + val } else { 2000 + val } } else { val }
}
