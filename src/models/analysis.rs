//! Analysis result model.
//!
//! The single value handed back to the caller after a programme has been
//! disaggregated. Holds every trade task and admin item plus summary
//! statistics. Callers persist or display it; nothing here is stored.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{AdminItem, AdminItemType, Trade, TradeTask};

/// Programme timeline summary, taken from the caller-supplied bounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineSummary {
    /// Programme start.
    pub start_date: NaiveDate,
    /// Programme end.
    pub end_date: NaiveDate,
    /// Programme length in weeks.
    pub duration_weeks: u32,
}

/// Summary statistics over one analysis.
///
/// Invariants:
/// - `total_tasks` equals the number of trade tasks.
/// - `total_admin_items` equals the number of admin items.
/// - The values of `trade_breakdown` sum to `total_tasks`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisSummary {
    /// Number of trade tasks emitted.
    pub total_tasks: usize,
    /// Number of admin items emitted.
    pub total_admin_items: usize,
    /// Emitted task count per trade.
    pub trade_breakdown: BTreeMap<Trade, usize>,
    /// Programme bounds.
    pub timeline: TimelineSummary,
    /// Descriptions of the first high-priority tasks, in emission order.
    /// This is a shortlist, not a dependency-graph critical path.
    pub critical_path: Vec<String>,
}

/// The output of one programme analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Name of the analyzed programme.
    pub program_name: String,
    /// When the analysis ran.
    pub analysis_date: DateTime<Utc>,
    /// Trade tasks, in row order then phase order.
    pub trade_tasks: Vec<TradeTask>,
    /// Admin items, in row order.
    pub admin_items: Vec<AdminItem>,
    /// Counts, breakdown, timeline and critical path.
    pub summary: AnalysisSummary,
}

impl AnalysisResult {
    /// Tasks assigned to a trade, in emission order.
    pub fn tasks_for_trade(&self, trade: Trade) -> Vec<&TradeTask> {
        self.trade_tasks.iter().filter(|t| t.trade == trade).collect()
    }

    /// Tasks scheduled on the given day (start and end days inclusive).
    pub fn tasks_active_on(&self, date: NaiveDate) -> Vec<&TradeTask> {
        self.trade_tasks
            .iter()
            .filter(|t| t.is_active_on(date))
            .collect()
    }

    /// Admin items of a given type.
    pub fn admin_items_of_type(&self, item_type: AdminItemType) -> Vec<&AdminItem> {
        self.admin_items
            .iter()
            .filter(|a| a.item_type == item_type)
            .collect()
    }

    /// Sum of estimated hours across all tasks (missing estimates count as 0).
    pub fn total_estimated_hours(&self) -> f64 {
        self.trade_tasks
            .iter()
            .filter_map(|t| t.estimated_hours)
            .sum()
    }

    /// Sum of estimated value across all tasks (missing estimates count as 0).
    pub fn total_estimated_value(&self) -> f64 {
        self.trade_tasks
            .iter()
            .filter_map(|t| t.estimated_value)
            .sum()
    }
}
