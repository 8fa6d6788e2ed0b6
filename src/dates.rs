//! Date and duration text resolution.
//!
//! Programme exports carry dates and durations as free text. Dates are
//! resolved into naive calendar dates (no timezone); anything that does
//! not match a known format resolves to `None` rather than an error.
//!
//! # Date Formats
//! Tried in order:
//! 1. `DD/MM/YY` or `DD/MM/YYYY`. Two-digit years map to `2000 + YY`.
//! 2. `YYYY-MM-DD`.
//!
//! # Duration Formats
//! `"14w"`, `"14 wks"`, `"3d"`, `"3 days"`, `"14"` (bare number = weeks).
//! Days convert at five working days per week.

use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

static DAY_MONTH_YEAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,2})/(\d{1,2})/(\d{4}|\d{2})$").expect("invalid DD/MM/YY pattern")
});

static ISO_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{4})-(\d{1,2})-(\d{1,2})$").expect("invalid YYYY-MM-DD pattern")
});

static DURATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(\d+(?:\.\d+)?)\s*(w|wk|wks|week|weeks|d|day|days)?$")
        .expect("invalid duration pattern")
});

/// Working days per week when converting day durations.
const WORKING_DAYS_PER_WEEK: f64 = 5.0;

/// Resolves date text into a calendar date.
///
/// Returns `None` when the text matches no supported format or names an
/// impossible date (e.g. `31/02/25`).
pub fn resolve(text: &str) -> Option<NaiveDate> {
    let text = text.trim();

    if let Some(caps) = DAY_MONTH_YEAR.captures(text) {
        let day: u32 = caps[1].parse().ok()?;
        let month: u32 = caps[2].parse().ok()?;
        let mut year: i32 = caps[3].parse().ok()?;
        if year < 100 {
            year += 2000;
        }
        return NaiveDate::from_ymd_opt(year, month, day);
    }

    if let Some(caps) = ISO_DATE.captures(text) {
        let year: i32 = caps[1].parse().ok()?;
        let month: u32 = caps[2].parse().ok()?;
        let day: u32 = caps[3].parse().ok()?;
        return NaiveDate::from_ymd_opt(year, month, day);
    }

    None
}

/// Parses duration text into weeks.
///
/// Returns `None` for empty or unrecognised text, and for amounts too
/// large to represent as a finite number.
pub fn parse_duration_weeks(text: &str) -> Option<f64> {
    let caps = DURATION.captures(text.trim())?;
    let amount: f64 = caps[1].parse().ok().filter(|a: &f64| a.is_finite())?;
    let is_days = caps
        .get(2)
        .map(|unit| unit.as_str().to_ascii_lowercase().starts_with('d'))
        .unwrap_or(false);

    Some(if is_days {
        amount / WORKING_DAYS_PER_WEEK
    } else {
        amount
    })
}
