//! Construction programme disaggregation for the U-Engine ecosystem.
//!
//! Turns a flat construction programme (line items with free-text dates)
//! into assignable trade tasks and calendar-ready admin items.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `ScheduleRow`, `TradeTask`, `AdminItem`,
//!   `AnalysisResult`, `DateRange`
//! - **`dates`**: Date and duration text resolution
//! - **`classify`**: Admin vs. trade classification, type and priority rules
//! - **`disaggregation`**: Keyword rule cascade expanding trade rows into tasks
//! - **`admin`**: Admin item construction
//! - **`analysis`**: Single-pass pipeline and summary statistics
//! - **`validation`**: Input integrity checks (line numbers, bounds)
//! - **`config`**: Analysis settings and their defaults
//! - **`error`**: `AnalysisError` and the crate `Result` alias
//! - **`fixture`**: Sample programme
//!
//! # Pipeline
//!
//! ```text
//! rows -> resolve dates -> classify -> disaggregate | build admin -> summarize
//! ```
//!
//! The pipeline is synchronous and stateless between calls. Noise rows
//! (unparseable dates, unrecognised names) are skipped, never reported
//! as errors.

pub mod admin;
pub mod analysis;
pub mod classify;
pub mod config;
pub mod dates;
pub mod disaggregation;
pub mod error;
pub mod fixture;
pub mod models;
pub mod validation;

pub use analysis::ProgrammeAnalyzer;
pub use config::AnalysisConfig;
pub use error::{AnalysisError, Result};
