//! Input validation for programme analysis.
//!
//! Checks structural integrity of a parsed programme before analysis.
//! Detects:
//! - Blank project name
//! - Duplicate line numbers (task and admin IDs derive from them)
//! - Programme end before programme start
//!
//! Row contents are deliberately not validated here: malformed dates and
//! unrecognised names are expected noise and are skipped during analysis.

use crate::models::ParsedProgramme;
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Project name is empty or whitespace.
    EmptyProjectName,
    /// Two rows share the same line number.
    DuplicateLineNumber,
    /// Programme end precedes programme start.
    InvalidTimeline,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a parsed programme.
///
/// Checks:
/// 1. Project name is not blank
/// 2. No duplicate row line numbers
/// 3. Programme end is not before programme start
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_programme(programme: &ParsedProgramme) -> ValidationResult {
    let mut errors = Vec::new();

    if programme.project_name.trim().is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyProjectName,
            "Project name is empty",
        ));
    }

    let mut lines = HashSet::new();
    for row in &programme.rows {
        if !lines.insert(row.line_number) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateLineNumber,
                format!("Duplicate line number: {}", row.line_number),
            ));
        }
    }

    let timeline = &programme.timeline;
    if timeline.program_end < timeline.program_start {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidTimeline,
            format!(
                "Programme ends ({}) before it starts ({})",
                timeline.program_end, timeline.program_start
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ProgrammeBounds, ScheduleRow};
    use chrono::NaiveDate;

    fn bounds() -> ProgrammeBounds {
        ProgrammeBounds::new(
            NaiveDate::from_ymd_opt(2025, 1, 6).unwrap(),
            NaiveDate::from_ymd_opt(2025, 6, 27).unwrap(),
            25,
        )
    }

    #[test]
    fn test_valid_programme() {
        let programme = ParsedProgramme::new("Telfer House", bounds())
            .with_row(ScheduleRow::new(1, "Contract Start Date"))
            .with_row(ScheduleRow::new(2, "Scaffold"));
        assert!(validate_programme(&programme).is_ok());
    }

    #[test]
    fn test_empty_programme_is_valid() {
        let programme = ParsedProgramme::new("Empty", bounds());
        assert!(validate_programme(&programme).is_ok());
    }

    #[test]
    fn test_blank_project_name() {
        let programme = ParsedProgramme::new("   ", bounds());
        let errs = validate_programme(&programme).unwrap_err();
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].kind, ValidationErrorKind::EmptyProjectName);
    }

    #[test]
    fn test_duplicate_line_numbers() {
        let programme = ParsedProgramme::new("P", bounds())
            .with_row(ScheduleRow::new(3, "A"))
            .with_row(ScheduleRow::new(3, "B"));
        let errs = validate_programme(&programme).unwrap_err();
        assert!(errs
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateLineNumber));
    }

    #[test]
    fn test_inverted_timeline() {
        let mut b = bounds();
        std::mem::swap(&mut b.program_start, &mut b.program_end);
        let programme = ParsedProgramme::new("P", b);
        let errs = validate_programme(&programme).unwrap_err();
        assert_eq!(errs[0].kind, ValidationErrorKind::InvalidTimeline);
    }

    #[test]
    fn test_collects_all_errors() {
        let mut b = bounds();
        std::mem::swap(&mut b.program_start, &mut b.program_end);
        let programme = ParsedProgramme::new("", b)
            .with_row(ScheduleRow::new(1, "A"))
            .with_row(ScheduleRow::new(1, "B"));
        let errs = validate_programme(&programme).unwrap_err();
        assert_eq!(errs.len(), 3);
    }
}
