//! Programme admin items.
//!
//! Admin items are calendar entries that are not trade work: approvals,
//! surveys, design stages, procurement, handovers, milestones, meetings.
//! They are tracked separately from assignable tasks.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::Priority;

/// Category of an admin item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdminItemType {
    /// Client sign-off or statutory approval.
    ClientApproval,
    /// Site or measured survey.
    Survey,
    /// Design stage or design freeze.
    Design,
    /// Ordering of long-lead items.
    Procurement,
    /// Handover or (sectional) completion.
    Handover,
    /// Programme start, end or named milestone.
    Milestone,
    /// Meetings and anything not matched above.
    Meeting,
}

impl fmt::Display for AdminItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdminItemType::ClientApproval => write!(f, "client_approval"),
            AdminItemType::Survey => write!(f, "survey"),
            AdminItemType::Design => write!(f, "design"),
            AdminItemType::Procurement => write!(f, "procurement"),
            AdminItemType::Handover => write!(f, "handover"),
            AdminItemType::Milestone => write!(f, "milestone"),
            AdminItemType::Meeting => write!(f, "meeting"),
        }
    }
}

/// A non-trade calendar entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminItem {
    /// Stable identifier: `admin-<line>`.
    pub id: String,
    /// Row name, as written in the programme.
    pub title: String,
    /// Where the item came from (`Programme line <n>`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Category, serialized as `type`.
    #[serde(rename = "type")]
    pub item_type: AdminItemType,
    /// Calendar date (the row's start date).
    pub date: NaiveDate,
    /// Priority from the general priority rule.
    pub priority: Priority,
    /// Programme the item belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    /// Free text, e.g. `Duration: 2w`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
