//! Trade task model.
//!
//! A trade task is an assignable, schedulable unit of work for a single
//! trade. One programme row may expand into several trade tasks; each
//! task is created once and never mutated afterwards.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::DateRange;

/// Construction trades a task can be assigned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Trade {
    #[serde(rename = "Electrician")]
    Electrician,
    #[serde(rename = "Plumber")]
    Plumber,
    #[serde(rename = "Structural Engineer")]
    StructuralEngineer,
    #[serde(rename = "Concrete Finisher")]
    ConcreteFinisher,
    #[serde(rename = "Scaffolder")]
    Scaffolder,
    #[serde(rename = "Dry Liner")]
    DryLiner,
    #[serde(rename = "Bricklayer")]
    Bricklayer,
    #[serde(rename = "Glazier")]
    Glazier,
    #[serde(rename = "Roofer")]
    Roofer,
    #[serde(rename = "Demolition Specialist")]
    DemolitionSpecialist,
    #[serde(rename = "Asbestos Specialist")]
    AsbestosSpecialist,
    #[serde(rename = "General Construction")]
    GeneralConstruction,
    #[serde(rename = "Landscaper")]
    Landscaper,
}

impl Trade {
    /// Human-readable trade label.
    pub fn label(&self) -> &'static str {
        match self {
            Trade::Electrician => "Electrician",
            Trade::Plumber => "Plumber",
            Trade::StructuralEngineer => "Structural Engineer",
            Trade::ConcreteFinisher => "Concrete Finisher",
            Trade::Scaffolder => "Scaffolder",
            Trade::DryLiner => "Dry Liner",
            Trade::Bricklayer => "Bricklayer",
            Trade::Glazier => "Glazier",
            Trade::Roofer => "Roofer",
            Trade::DemolitionSpecialist => "Demolition Specialist",
            Trade::AsbestosSpecialist => "Asbestos Specialist",
            Trade::GeneralConstruction => "General Construction",
            Trade::Landscaper => "Landscaper",
        }
    }
}

impl fmt::Display for Trade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Task or admin item priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// On or near the critical path.
    High,
    Medium,
    /// Can slip without affecting completion.
    Low,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::High => write!(f, "high"),
            Priority::Medium => write!(f, "medium"),
            Priority::Low => write!(f, "low"),
        }
    }
}

/// An assignable unit of trade work.
///
/// Invariant: `start_date <= end_date`. Construction goes through
/// [`DateRange`], which cannot be inverted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeTask {
    /// Stable identifier: `task-<line>-<n>`.
    pub id: String,
    /// Programme line this task was expanded from.
    pub source_line: u32,
    /// Assigned trade.
    pub trade: Trade,
    /// What the work is.
    pub description: String,
    /// First working day.
    pub start_date: NaiveDate,
    /// Last working day.
    pub end_date: NaiveDate,
    /// Sub-location (floor, core, unit) the work applies to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor_core_unit: Option<String>,
    /// Free-text predecessor labels. Advisory; not task IDs.
    #[serde(default)]
    pub dependencies: Vec<String>,
    /// Scheduling priority.
    pub priority: Priority,
    /// 1-based position in the processed row sequence, plus any phase offset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub week_number: Option<u32>,
    /// Estimated effort (hours).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_hours: Option<f64>,
    /// Estimated value (currency units).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_value: Option<f64>,
}

impl TradeTask {
    /// Creates a task for `trade` spanning `range`.
    pub fn new(
        trade: Trade,
        description: impl Into<String>,
        range: DateRange,
        priority: Priority,
    ) -> Self {
        Self {
            id: String::new(),
            source_line: 0,
            trade,
            description: description.into(),
            start_date: range.start,
            end_date: range.end,
            floor_core_unit: None,
            dependencies: Vec::new(),
            priority,
            week_number: None,
            estimated_hours: None,
            estimated_value: None,
        }
    }

    /// Sets the sub-location label.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.floor_core_unit = Some(location.into());
        self
    }

    /// Adds a predecessor label.
    pub fn with_dependency(mut self, label: impl Into<String>) -> Self {
        self.dependencies.push(label.into());
        self
    }

    /// Sets the week number.
    pub fn with_week(mut self, week: u32) -> Self {
        self.week_number = Some(week);
        self
    }

    /// Sets estimated hours and value.
    pub fn with_estimate(mut self, hours: f64, value: f64) -> Self {
        self.estimated_hours = Some(hours);
        self.estimated_value = Some(value);
        self
    }

    /// Stamps the source line and fan-out index, deriving the ID.
    pub fn with_origin(mut self, line: u32, index: usize) -> Self {
        self.source_line = line;
        self.id = format!("task-{line}-{index}");
        self
    }

    /// The task's date range.
    pub fn range(&self) -> DateRange {
        DateRange {
            start: self.start_date,
            end: self.end_date,
        }
    }

    /// Whether the task is scheduled on the given day.
    pub fn is_active_on(&self, date: NaiveDate) -> bool {
        self.range().contains(date)
    }

    /// Whether the task is high priority.
    pub fn is_high_priority(&self) -> bool {
        self.priority == Priority::High
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range() -> DateRange {
        DateRange::new(
            NaiveDate::from_ymd_opt(2025, 4, 7).unwrap(),
            NaiveDate::from_ymd_opt(2025, 4, 25).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_task_builder() {
        let task = TradeTask::new(Trade::Glazier, "Install windows", range(), Priority::Medium)
            .with_location("2nd Floor")
            .with_dependency("SFS inner skin complete")
            .with_week(12)
            .with_estimate(120.0, 5000.0)
            .with_origin(14, 1);

        assert_eq!(task.id, "task-14-1");
        assert_eq!(task.source_line, 14);
        assert_eq!(task.floor_core_unit.as_deref(), Some("2nd Floor"));
        assert_eq!(task.dependencies, vec!["SFS inner skin complete"]);
        assert_eq!(task.week_number, Some(12));
        assert_eq!(task.estimated_hours, Some(120.0));
        assert_eq!(task.estimated_value, Some(5000.0));
        assert!(task.start_date <= task.end_date);
    }

    #[test]
    fn test_task_active_on() {
        let task = TradeTask::new(Trade::Roofer, "Roof", range(), Priority::High);
        assert!(task.is_active_on(NaiveDate::from_ymd_opt(2025, 4, 25).unwrap()));
        assert!(!task.is_active_on(NaiveDate::from_ymd_opt(2025, 4, 26).unwrap()));
        assert!(task.is_high_priority());
    }

    #[test]
    fn test_trade_serializes_as_label() {
        let json = serde_json::to_string(&Trade::DryLiner).unwrap();
        assert_eq!(json, "\"Dry Liner\"");
        assert_eq!(Trade::StructuralEngineer.to_string(), "Structural Engineer");
        assert_eq!(serde_json::to_string(&Priority::High).unwrap(), "\"high\"");
    }
}
