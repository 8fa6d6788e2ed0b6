//! Calendar date ranges.
//!
//! Trade work is planned in whole days. A range covers every day from
//! `start` to `end` inclusive; `start <= end` always holds.
//!
//! # Sub-ranges
//! Phased work is laid out as fractions of a parent range. A fraction `f`
//! maps to `start + floor(span_days * f)` days, so `at_fraction(0.0)` is
//! the start and `at_fraction(1.0)` is the end.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// An inclusive interval of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    /// First day (inclusive).
    pub start: NaiveDate,
    /// Last day (inclusive).
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a range. Returns `None` when `end` precedes `start`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Option<Self> {
        (start <= end).then_some(Self { start, end })
    }

    /// Days between start and end (0 for a single-day range).
    #[inline]
    pub fn span_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    /// Whether a date falls within this range.
    #[inline]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Whether two ranges share at least one day.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// The date at fraction `f` (clamped to 0..=1) of the range.
    pub fn at_fraction(&self, f: f64) -> NaiveDate {
        let f = f.clamp(0.0, 1.0);
        let offset = (self.span_days() as f64 * f).floor() as i64;
        self.start + Duration::days(offset)
    }

    /// The midpoint: `start + (end - start) / 2`, rounded down to a whole day.
    pub fn midpoint(&self) -> NaiveDate {
        self.start + Duration::days(self.span_days() / 2)
    }

    /// The sub-range between fractions `from` and `to`.
    pub fn slice(&self, from: f64, to: f64) -> Self {
        let (from, to) = if from <= to { (from, to) } else { (to, from) };
        Self {
            start: self.at_fraction(from),
            end: self.at_fraction(to),
        }
    }

    /// First half: start to midpoint.
    pub fn first_half(&self) -> Self {
        Self {
            start: self.start,
            end: self.midpoint(),
        }
    }

    /// Second half: midpoint to end.
    pub fn second_half(&self) -> Self {
        Self {
            start: self.midpoint(),
            end: self.end,
        }
    }

    /// Length in weeks, rounded up, at least 1.
    pub fn weeks_ceil(&self) -> u32 {
        let days = self.span_days().max(0) as u32;
        days.div_ceil(7).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_range_rejects_inverted() {
        assert!(DateRange::new(date(2025, 3, 2), date(2025, 3, 1)).is_none());
        assert!(DateRange::new(date(2025, 3, 1), date(2025, 3, 1)).is_some());
    }

    #[test]
    fn test_contains_inclusive() {
        let r = DateRange::new(date(2025, 3, 1), date(2025, 3, 10)).unwrap();
        assert!(r.contains(date(2025, 3, 1)));
        assert!(r.contains(date(2025, 3, 10))); // inclusive end
        assert!(!r.contains(date(2025, 3, 11)));
        assert_eq!(r.span_days(), 9);
    }

    #[test]
    fn test_overlap() {
        let a = DateRange::new(date(2025, 1, 1), date(2025, 1, 10)).unwrap();
        let b = DateRange::new(date(2025, 1, 10), date(2025, 1, 20)).unwrap();
        let c = DateRange::new(date(2025, 1, 11), date(2025, 1, 20)).unwrap();
        assert!(a.overlaps(&b)); // shared last day
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_midpoint_and_halves() {
        let r = DateRange::new(date(2025, 1, 1), date(2025, 1, 11)).unwrap();
        assert_eq!(r.midpoint(), date(2025, 1, 6));
        assert_eq!(r.first_half().end, r.second_half().start);

        // Odd span rounds down
        let r = DateRange::new(date(2025, 1, 1), date(2025, 1, 4)).unwrap();
        assert_eq!(r.midpoint(), date(2025, 1, 2));
    }

    #[test]
    fn test_slice_fractions() {
        // 22 weeks = 154 days
        let r = DateRange::new(date(2025, 1, 6), date(2025, 6, 9)).unwrap();
        assert_eq!(r.span_days(), 154);

        let q = r.slice(0.0, 0.25);
        assert_eq!(q.start, r.start);
        assert_eq!(q.end, date(2025, 1, 6) + Duration::days(38));

        let last = r.slice(0.625, 1.0);
        assert_eq!(last.start, date(2025, 1, 6) + Duration::days(96));
        assert_eq!(last.end, r.end);
    }

    #[test]
    fn test_weeks_ceil() {
        let r = DateRange::new(date(2025, 1, 1), date(2025, 1, 1)).unwrap();
        assert_eq!(r.weeks_ceil(), 1);
        let r = DateRange::new(date(2025, 1, 1), date(2025, 1, 15)).unwrap();
        assert_eq!(r.weeks_ceil(), 2);
        let r = DateRange::new(date(2025, 1, 1), date(2025, 1, 16)).unwrap();
        assert_eq!(r.weeks_ceil(), 3);
    }
}
