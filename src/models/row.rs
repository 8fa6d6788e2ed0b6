//! Programme input model.
//!
//! A programme is the flat list of line items exported from a
//! construction schedule, plus the overall bounds the planner set for it.
//! Rows are read exactly as exported: dates and durations stay as text
//! until the resolver turns them into calendar dates.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One line from a construction programme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRow {
    /// Position in the source export. Used for ordering and ID derivation.
    pub line_number: u32,
    /// Free-text description.
    pub name: String,
    /// Free-text duration (e.g. "14w", "3d"). Advisory only.
    #[serde(default)]
    pub duration: String,
    /// Start date as exported (`DD/MM/YY`, `DD/MM/YYYY` or `YYYY-MM-DD`).
    pub start_date_text: String,
    /// End date as exported.
    pub end_date_text: String,
    /// Optional coarse category supplied by the exporter (e.g. "admin").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_type_hint: Option<String>,
}

impl ScheduleRow {
    /// Creates a row with the given line number and name.
    pub fn new(line_number: u32, name: impl Into<String>) -> Self {
        Self {
            line_number,
            name: name.into(),
            duration: String::new(),
            start_date_text: String::new(),
            end_date_text: String::new(),
            work_type_hint: None,
        }
    }

    /// Sets the duration text.
    pub fn with_duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = duration.into();
        self
    }

    /// Sets the start and end date text.
    pub fn with_dates(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.start_date_text = start.into();
        self.end_date_text = end.into();
        self
    }

    /// Sets the work type hint.
    pub fn with_work_type(mut self, hint: impl Into<String>) -> Self {
        self.work_type_hint = Some(hint.into());
        self
    }

    /// Lowercased name, the form every keyword test runs against.
    pub fn normalized_name(&self) -> String {
        self.name.to_lowercase()
    }
}

/// Overall programme bounds set by the planner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgrammeBounds {
    /// First day of the programme.
    pub program_start: NaiveDate,
    /// Last day of the programme.
    pub program_end: NaiveDate,
    /// Planned duration in weeks.
    pub total_duration: u32,
}

impl ProgrammeBounds {
    /// Creates programme bounds.
    pub fn new(program_start: NaiveDate, program_end: NaiveDate, total_duration: u32) -> Self {
        Self {
            program_start,
            program_end,
            total_duration,
        }
    }
}

/// A parsed programme, ready for analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedProgramme {
    /// Project the programme belongs to.
    pub project_name: String,
    /// Line items in export order.
    pub rows: Vec<ScheduleRow>,
    /// Overall programme bounds.
    pub timeline: ProgrammeBounds,
}

impl ParsedProgramme {
    /// Creates a programme with no rows.
    pub fn new(project_name: impl Into<String>, timeline: ProgrammeBounds) -> Self {
        Self {
            project_name: project_name.into(),
            rows: Vec::new(),
            timeline,
        }
    }

    /// Appends a row.
    pub fn with_row(mut self, row: ScheduleRow) -> Self {
        self.rows.push(row);
        self
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}
