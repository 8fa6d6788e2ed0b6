//! Programme row classification.
//!
//! Decides whether a row is an admin item (calendar entry) or trade work
//! (assignable task), using keyword tables over the lowercased name and
//! the exporter's optional work type hint.
//!
//! # Precedence
//! The admin test runs first. A row that matches both tables is admin.
//! A row that matches neither is dropped.

use crate::models::{AdminItemType, Priority, ScheduleRow};

/// Name keywords that mark a row as admin.
pub const ADMIN_KEYWORDS: &[&str] = &[
    "client",
    "contract",
    "approval",
    "survey",
    "design",
    "procurement",
    "consultant",
    "planning",
    "discharge",
    "milestone",
    "handover",
    "mobilisation",
    "pre-commencement",
    "agreement",
];

/// Work type hints that mark a row as admin.
pub const ADMIN_WORK_TYPES: &[&str] = &["admin", "design", "survey", "procurement", "milestone"];

/// Name keywords that mark a row as trade work.
pub const TRADE_KEYWORDS: &[&str] = &[
    "construction",
    "structural",
    "electrical",
    "plumbing",
    "hvac",
    "demolition",
    "piling",
    "concrete",
    "steel",
    "cladding",
    "roofing",
    "flooring",
    "drywall",
    "painting",
    "joinery",
    "scaffold",
    "crane",
    "site work",
    "foundations",
    "framing",
    "fit-out",
    "finishes",
];

/// Work type hints that mark a row as trade work.
pub const TRADE_WORK_TYPES: &[&str] = &[
    "construction",
    "structural",
    "demolition",
    "site",
    "equipment",
];

/// Outcome of classifying a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Non-trade calendar entry.
    Admin,
    /// Assignable trade work.
    Trade,
}

/// Classifies a row. Returns `None` for rows that are neither.
pub fn classify(row: &ScheduleRow) -> Option<Classification> {
    let name = row.normalized_name();
    let hint = normalized_hint(row);
    let hint = hint.as_deref();

    if contains_any(&name, ADMIN_KEYWORDS) || hint.is_some_and(|h| is_one_of(h, ADMIN_WORK_TYPES)) {
        return Some(Classification::Admin);
    }

    if contains_any(&name, TRADE_KEYWORDS) || hint.is_some_and(|h| is_one_of(h, TRADE_WORK_TYPES)) {
        return Some(Classification::Trade);
    }

    None
}

/// Derives the admin item type from a row name.
///
/// First match wins: client/approval, survey, design, procurement,
/// handover/completion, milestone/start/end. Anything else is a meeting.
pub fn admin_item_type(name: &str) -> AdminItemType {
    let name = name.to_lowercase();
    if contains_any(&name, &["client", "approval"]) {
        AdminItemType::ClientApproval
    } else if name.contains("survey") {
        AdminItemType::Survey
    } else if name.contains("design") {
        AdminItemType::Design
    } else if name.contains("procurement") {
        AdminItemType::Procurement
    } else if contains_any(&name, &["handover", "completion"]) {
        AdminItemType::Handover
    } else if contains_any(&name, &["milestone", "start", "end"]) {
        AdminItemType::Milestone
    } else {
        AdminItemType::Meeting
    }
}

/// General priority rule, applied to admin items.
///
/// critical/milestone/approval → high; survey/design → medium; else low.
pub fn general_priority(name: &str) -> Priority {
    let name = name.to_lowercase();
    if contains_any(&name, &["critical", "milestone", "approval"]) {
        Priority::High
    } else if contains_any(&name, &["survey", "design"]) {
        Priority::Medium
    } else {
        Priority::Low
    }
}

/// Trade priority rule, applied to generic trade tasks.
///
/// Differs from [`general_priority`]: there is no low band, and
/// foundation/structural/crane work is high.
pub fn trade_priority(name: &str) -> Priority {
    let name = name.to_lowercase();
    if contains_any(
        &name,
        &["foundation", "structural", "crane", "critical", "milestone"],
    ) {
        Priority::High
    } else {
        Priority::Medium
    }
}

/// Whether `haystack` contains any of `needles`. Expects lowercased input.
pub(crate) fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

fn is_one_of(value: &str, options: &[&str]) -> bool {
    options.iter().any(|o| *o == value)
}

fn normalized_hint(row: &ScheduleRow) -> Option<String> {
    row.work_type_hint
        .as_deref()
        .map(|h| h.trim().to_lowercase())
        .filter(|h| !h.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str) -> ScheduleRow {
        ScheduleRow::new(1, name)
    }

    #[test]
    fn test_admin_by_keyword() {
        assert_eq!(classify(&row("Contract Start Date")), Some(Classification::Admin));
        assert_eq!(classify(&row("Planning Conditions")), Some(Classification::Admin));
        assert_eq!(classify(&row("Site MOBILISATION")), Some(Classification::Admin));
    }

    #[test]
    fn test_admin_by_hint() {
        let r = row("Stage 4 sign-off").with_work_type("Admin");
        assert_eq!(classify(&r), Some(Classification::Admin));
    }

    #[test]
    fn test_trade_by_keyword() {
        assert_eq!(classify(&row("Scaffold to Roof")), Some(Classification::Trade));
        assert_eq!(classify(&row("Roofing")), Some(Classification::Trade));
        assert_eq!(classify(&row("Electrical Mains")), Some(Classification::Trade));
    }

    #[test]
    fn test_trade_by_hint() {
        let r = row("Windows 2nd Floor").with_work_type("construction");
        assert_eq!(classify(&r), Some(Classification::Trade));
    }

    #[test]
    fn test_admin_wins_over_trade() {
        // "design" (admin) and "structural" (trade)
        assert_eq!(classify(&row("Structural Design")), Some(Classification::Admin));
        // admin keyword beats trade hint
        let r = row("Client Walkround").with_work_type("construction");
        assert_eq!(classify(&r), Some(Classification::Admin));
    }

    #[test]
    fn test_unclassified_rows_dropped() {
        assert_eq!(classify(&row("Windows 2nd Floor")), None);
        assert_eq!(classify(&row("Christmas Shutdown")), None);
        assert_eq!(classify(&row("Something").with_work_type("   ")), None);
    }

    #[test]
    fn test_admin_item_type() {
        assert_eq!(admin_item_type("Client Sign Off"), AdminItemType::ClientApproval);
        assert_eq!(admin_item_type("Building Control Approval"), AdminItemType::ClientApproval);
        assert_eq!(admin_item_type("Measured Survey"), AdminItemType::Survey);
        assert_eq!(admin_item_type("Stage 4 Design"), AdminItemType::Design);
        assert_eq!(admin_item_type("Procurement of Lifts"), AdminItemType::Procurement);
        assert_eq!(admin_item_type("Sectional Completion"), AdminItemType::Handover);
        assert_eq!(admin_item_type("Contract Start Date"), AdminItemType::Milestone);
        assert_eq!(admin_item_type("Pre-Commencement Meeting"), AdminItemType::Meeting);
    }

    #[test]
    fn test_general_priority() {
        assert_eq!(general_priority("Key Milestone"), Priority::High);
        assert_eq!(general_priority("Planning Approval"), Priority::High);
        assert_eq!(general_priority("Topographical Survey"), Priority::Medium);
        assert_eq!(general_priority("Contract Start Date"), Priority::Low);
    }

    #[test]
    fn test_trade_priority_differs_from_general() {
        assert_eq!(trade_priority("Crane Erection"), Priority::High);
        assert_eq!(trade_priority("Painting"), Priority::Medium);
        assert_eq!(general_priority("Painting"), Priority::Low);
        assert_eq!(general_priority("Crane Erection"), Priority::Low);
    }
}
