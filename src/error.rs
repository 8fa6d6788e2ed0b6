//! Error types.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors surfaced by a programme analysis.
///
/// Row-level noise (unparseable dates, unclassifiable names) is not an
/// error; those rows are skipped. Only structurally invalid input fails.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("invalid programme input: {}", summarize(.0))]
    InvalidInput(Vec<ValidationError>),
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
