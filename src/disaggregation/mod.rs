//! Trade task disaggregation.
//!
//! Expands a trade row into one or more granular, trade-specific tasks.
//! Expansion is a keyword cascade: rules are tried in order and the first
//! rule whose keywords match the row name produces the tasks. Rows no
//! rule claims become a single generic task.
//!
//! # Usage
//!
//! ```
//! use chrono::NaiveDate;
//! use u_programme::disaggregation;
//! use u_programme::models::{ScheduleRow, Trade};
//!
//! let row = ScheduleRow::new(12, "Roofing").with_dates("02/06/25", "27/06/25");
//! let start = NaiveDate::from_ymd_opt(2025, 6, 2);
//! let end = NaiveDate::from_ymd_opt(2025, 6, 27);
//!
//! let tasks = disaggregation::disaggregate(&row, start, end, 12);
//! assert_eq!(tasks.len(), 2);
//! assert!(tasks.iter().all(|t| t.trade == Trade::Roofer));
//! ```

mod context;
mod engine;
pub mod rules;

pub use context::RowContext;
pub use engine::DisaggregationEngine;

use chrono::NaiveDate;
use std::fmt::Debug;

use crate::config::AnalysisConfig;
use crate::models::{DateRange, ScheduleRow, TradeTask};

/// A disaggregation rule: claims rows by keyword and expands them.
pub trait DisaggregationRule: Send + Sync + Debug {
    /// Rule name (e.g., "roofing").
    fn name(&self) -> &'static str;

    /// Whether this rule claims the row.
    fn matches(&self, context: &RowContext<'_>) -> bool;

    /// Expands the row into trade tasks. Only called when `matches` is true.
    ///
    /// Returned tasks need not carry IDs; the engine stamps them.
    fn expand(&self, context: &RowContext<'_>) -> Vec<TradeTask>;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// Expands one trade row with the standard rule cascade and default config.
///
/// Returns no tasks when either date is missing or the end precedes the
/// start; such rows are skipped, not reported.
pub fn disaggregate(
    row: &ScheduleRow,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    week_number: u32,
) -> Vec<TradeTask> {
    let (Some(start), Some(end)) = (start_date, end_date) else {
        return Vec::new();
    };
    let Some(range) = DateRange::new(start, end) else {
        return Vec::new();
    };

    let config = AnalysisConfig::default();
    let context = RowContext::new(row, range, week_number, &config);
    DisaggregationEngine::standard().disaggregate(&context)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_dates_skip() {
        let row = ScheduleRow::new(1, "Roofing");
        let d = NaiveDate::from_ymd_opt(2025, 6, 2);
        assert!(disaggregate(&row, None, d, 1).is_empty());
        assert!(disaggregate(&row, d, None, 1).is_empty());
    }

    #[test]
    fn test_inverted_range_skip() {
        let row = ScheduleRow::new(1, "Roofing");
        let start = NaiveDate::from_ymd_opt(2025, 6, 20);
        let end = NaiveDate::from_ymd_opt(2025, 6, 2);
        assert!(disaggregate(&row, start, end, 1).is_empty());
    }
}
