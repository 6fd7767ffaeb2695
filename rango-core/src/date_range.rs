//! Inclusive calendar date ranges.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::fmt;

use crate::error::RangeError;
use crate::period::Period;

/// ISO calendar date format written into form fields.
pub const ISO_DATE: &str = "%Y-%m-%d";

const END_OF_DAY: NaiveTime = match NaiveTime::from_hms_nano_opt(23, 59, 59, 999_999_999) {
    Some(time) => time,
    None => panic!("23:59:59.999999999 is a valid time"),
};

/// An inclusive `(start, end)` pair of calendar dates with `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

/// Computes the range of `period` that contains `now`.
///
/// Only the calendar date of `now` matters; the time of day is dropped.
/// See [`Period::range_on`] for the one way this can fail.
///
/// # Examples
///
/// ```
/// # use chrono::NaiveDate;
/// # use rango_core::{compute, Period};
/// let now = NaiveDate::from_ymd_opt(2024, 11, 5).unwrap().and_hms_opt(18, 30, 0).unwrap();
/// let quarter = compute(Period::Quarter, now).unwrap();
///
/// assert_eq!(quarter.to_string(), "2024-10-01..2024-12-31");
/// ```
pub fn compute(period: Period, now: NaiveDateTime) -> Result<DateRange, RangeError> {
    let range = period.range_on(now.date())?;
    tracing::debug!(%period, %now, %range, "computed range");
    Ok(range)
}

impl DateRange {
    /// Builds a custom range, rejecting `start > end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, RangeError> {
        if start > end {
            return Err(RangeError::Inverted { start, end });
        }
        Ok(Self { start, end })
    }

    /// A one-day range.
    pub fn single(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    /// Crate-internal constructor for bounds already known to be ordered.
    pub(crate) fn spanning(start: NaiveDate, end: NaiveDate) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Number of days covered, counting both ends.
    pub fn len_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// The datetime window a receiving endpoint filters records by:
    /// midnight of `start` up to the last instant of `end`.
    pub fn bounds(&self) -> (NaiveDateTime, NaiveDateTime) {
        (self.start.and_time(NaiveTime::MIN), self.end.and_time(END_OF_DAY))
    }

    /// `(start, end)` as ISO `YYYY-MM-DD` strings.
    pub fn to_iso(&self) -> (String, String) {
        (iso(self.start), iso(self.end))
    }
}

pub fn iso(date: NaiveDate) -> String {
    date.format(ISO_DATE).to_string()
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", iso(self.start), iso(self.end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn compute_ignores_time_of_day() {
        let late = d(2024, 3, 15).and_hms_opt(23, 59, 59).unwrap();
        let early = d(2024, 3, 15).and_hms_opt(0, 0, 0).unwrap();
        assert_eq!(compute(Period::Today, late), compute(Period::Today, early));
        assert_eq!(compute(Period::Today, late), Ok(DateRange::single(d(2024, 3, 15))));
    }

    #[test]
    fn compute_year() {
        let now = d(2024, 8, 1).and_hms_opt(9, 0, 0).unwrap();
        let r = compute(Period::Year, now).unwrap();
        assert_eq!(r, DateRange::new(d(2024, 1, 1), d(2024, 12, 31)).unwrap());
        assert_eq!(r.len_days(), 366);
    }

    #[test]
    fn new_rejects_inverted_range() {
        let err = DateRange::new(d(2024, 3, 2), d(2024, 3, 1)).unwrap_err();
        assert!(matches!(err, RangeError::Inverted { .. }));
    }

    #[test]
    fn compute_reports_weeks_outside_the_calendar() {
        let now = NaiveDate::MIN.and_hms_opt(12, 0, 0).unwrap();
        let err = compute(Period::Week, now).unwrap_err();
        assert_eq!(
            err,
            RangeError::OutOfRange {
                period: Period::Week,
                date: NaiveDate::MIN
            }
        );
    }

    #[test]
    fn len_days_counts_both_ends() {
        let r = DateRange::new(d(2025, 8, 15), d(2025, 8, 17)).unwrap();
        assert_eq!(r.len_days(), 3);
        assert_eq!(DateRange::single(d(2025, 8, 15)).len_days(), 1);
    }

    #[test]
    fn bounds_cover_whole_days() {
        let r = DateRange::single(d(2024, 2, 29));
        let (from, to) = r.bounds();
        assert_eq!(from, d(2024, 2, 29).and_hms_opt(0, 0, 0).unwrap());
        assert_eq!(to.date(), d(2024, 2, 29));
        assert_eq!((to.hour(), to.minute(), to.second()), (23, 59, 59));
        assert_eq!(to.nanosecond(), 999_999_999);
    }

    #[test]
    fn bounds_hold_on_the_last_calendar_day() {
        let (from, to) = DateRange::single(NaiveDate::MAX).bounds();
        assert_eq!(from.date(), NaiveDate::MAX);
        assert_eq!(to.date(), NaiveDate::MAX);
    }

    #[test]
    fn iso_and_display() {
        let r = DateRange::new(d(2024, 1, 5), d(2024, 10, 31)).unwrap();
        assert_eq!(r.to_iso(), ("2024-01-05".to_string(), "2024-10-31".to_string()));
        assert_eq!(r.to_string(), "2024-01-05..2024-10-31");
    }

    #[test]
    fn contains_is_inclusive() {
        let r = DateRange::new(d(2024, 1, 1), d(2024, 1, 31)).unwrap();
        assert!(r.contains(d(2024, 1, 1)));
        assert!(r.contains(d(2024, 1, 31)));
        assert!(!r.contains(d(2024, 2, 1)));
        assert!(!r.contains(d(2023, 12, 31)));
    }
}
