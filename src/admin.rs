//! Admin item construction.
//!
//! Maps one admin-classified row to one calendar item. No expansion.

use chrono::NaiveDate;

use crate::classify::{admin_item_type, general_priority};
use crate::models::{AdminItem, ScheduleRow};

/// Builds the admin item for a row dated `date`.
///
/// Type and priority come from the row name (see [`admin_item_type`] and
/// [`general_priority`]). Non-empty duration text is kept as notes.
pub fn build(row: &ScheduleRow, date: NaiveDate, project_name: Option<&str>) -> AdminItem {
    let duration = row.duration.trim();
    AdminItem {
        id: format!("admin-{}", row.line_number),
        title: row.name.clone(),
        description: Some(format!("Programme line {}", row.line_number)),
        item_type: admin_item_type(&row.name),
        date,
        priority: general_priority(&row.name),
        project_name: project_name.map(str::to_string),
        notes: (!duration.is_empty()).then(|| format!("Duration: {duration}")),
    }
}
