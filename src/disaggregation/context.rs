//! Row context for disaggregation rule evaluation.

use crate::config::AnalysisConfig;
use crate::models::{DateRange, ScheduleRow};

/// Everything a rule needs to match and expand one trade row.
///
/// Built once per row after its dates have resolved.
#[derive(Debug, Clone)]
pub struct RowContext<'a> {
    /// The source row.
    pub row: &'a ScheduleRow,
    /// Lowercased row name (all keyword tests run against this).
    pub name: String,
    /// Resolved date range of the row.
    pub range: DateRange,
    /// 1-based position of the row in the processed sequence.
    pub week_number: u32,
    /// Estimation tunables.
    pub config: &'a AnalysisConfig,
}

impl<'a> RowContext<'a> {
    /// Creates a context for a row spanning `range`.
    pub fn new(
        row: &'a ScheduleRow,
        range: DateRange,
        week_number: u32,
        config: &'a AnalysisConfig,
    ) -> Self {
        Self {
            row,
            name: row.normalized_name(),
            range,
            week_number,
            config,
        }
    }

    /// Whether the lowercased name contains `needle`.
    pub fn has(&self, needle: &str) -> bool {
        self.name.contains(needle)
    }

    /// Whether the lowercased name contains any of `needles`.
    pub fn has_any(&self, needles: &[&str]) -> bool {
        needles.iter().any(|n| self.name.contains(n))
    }

    /// The row name as exported.
    pub fn title(&self) -> &str {
        &self.row.name
    }
}
