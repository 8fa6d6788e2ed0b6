//! Programme analysis.
//!
//! # Algorithm
//!
//! 1. Validate the programme (project name, line numbers, bounds).
//! 2. Walk the rows once, in input order, counting rows as "weeks".
//! 3. Classify each row; drop rows that are neither admin nor trade.
//! 4. Resolve dates; drop rows whose dates do not resolve.
//! 5. Admin rows become one admin item; trade rows go through the
//!    disaggregation cascade and may become several tasks.
//! 6. Summarize: counts, per-trade breakdown, timeline, critical path.
//!
//! # Complexity
//! O(n * r) where n=rows, r=rules in the cascade.

use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use tracing::{debug, info};

use crate::admin;
use crate::classify::{classify, Classification};
use crate::config::AnalysisConfig;
use crate::dates::resolve;
use crate::disaggregation::{DisaggregationEngine, RowContext};
use crate::error::{AnalysisError, Result};
use crate::models::{
    AdminItem, AnalysisResult, AnalysisSummary, DateRange, ParsedProgramme, ProgrammeBounds,
    ScheduleRow, TimelineSummary, TradeTask,
};
use crate::validation::validate_programme;

/// Turns a parsed programme into trade tasks and admin items.
///
/// # Example
///
/// ```
/// use u_programme::analysis::ProgrammeAnalyzer;
/// use u_programme::fixture;
///
/// let result = ProgrammeAnalyzer::new().analyze(&fixture::telfer_house()).unwrap();
/// assert_eq!(result.summary.total_tasks, result.trade_tasks.len());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ProgrammeAnalyzer {
    config: AnalysisConfig,
    engine: DisaggregationEngine,
}

impl ProgrammeAnalyzer {
    /// Creates an analyzer with the standard cascade and default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the configuration.
    pub fn with_config(mut self, config: AnalysisConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the disaggregation engine.
    pub fn with_engine(mut self, engine: DisaggregationEngine) -> Self {
        self.engine = engine;
        self
    }

    /// The active configuration.
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Validates and analyzes a programme, stamped with the current time.
    pub fn analyze(&self, programme: &ParsedProgramme) -> Result<AnalysisResult> {
        self.analyze_at(programme, Utc::now())
    }

    /// Validates and analyzes a programme, stamped with `analysis_date`.
    pub fn analyze_at(
        &self,
        programme: &ParsedProgramme,
        analysis_date: DateTime<Utc>,
    ) -> Result<AnalysisResult> {
        validate_programme(programme).map_err(AnalysisError::InvalidInput)?;

        let mut result = self.aggregate(
            &programme.rows,
            &programme.project_name,
            &programme.timeline,
        );
        result.analysis_date = analysis_date;
        Ok(result)
    }

    /// Runs the pipeline over `rows` without validation.
    pub fn aggregate(
        &self,
        rows: &[ScheduleRow],
        program_name: &str,
        bounds: &ProgrammeBounds,
    ) -> AnalysisResult {
        let mut trade_tasks: Vec<TradeTask> = Vec::new();
        let mut admin_items: Vec<AdminItem> = Vec::new();
        let mut week_counter: u32 = 0;

        for row in rows {
            week_counter += 1;

            let Some(kind) = classify(row) else {
                debug!(line = row.line_number, name = %row.name, reason = "unclassified", "skipping row");
                continue;
            };

            match kind {
                Classification::Admin => {
                    let Some(date) = resolve(&row.start_date_text) else {
                        debug!(line = row.line_number, reason = "unresolved start date", "skipping row");
                        continue;
                    };
                    admin_items.push(admin::build(row, date, Some(program_name)));
                }
                Classification::Trade => {
                    let Some(range) = resolve_range(row) else {
                        continue;
                    };
                    let context = RowContext::new(row, range, week_counter, &self.config);
                    trade_tasks.extend(self.engine.disaggregate(&context));
                }
            }
        }

        let summary = summarize(&trade_tasks, &admin_items, bounds, self.config.critical_path_len);
        info!(
            programme = program_name,
            rows = rows.len(),
            tasks = summary.total_tasks,
            admin_items = summary.total_admin_items,
            "programme analyzed"
        );

        AnalysisResult {
            program_name: program_name.to_string(),
            analysis_date: Utc::now(),
            trade_tasks,
            admin_items,
            summary,
        }
    }
}

/// Runs the standard pipeline with default config. No validation.
pub fn aggregate(rows: &[ScheduleRow], program_name: &str, bounds: &ProgrammeBounds) -> AnalysisResult {
    ProgrammeAnalyzer::new().aggregate(rows, program_name, bounds)
}

fn resolve_range(row: &ScheduleRow) -> Option<DateRange> {
    let (Some(start), Some(end)) = (resolve(&row.start_date_text), resolve(&row.end_date_text))
    else {
        debug!(line = row.line_number, reason = "unresolved dates", "skipping row");
        return None;
    };
    let range = DateRange::new(start, end);
    if range.is_none() {
        debug!(line = row.line_number, reason = "end before start", "skipping row");
    }
    range
}

fn summarize(
    trade_tasks: &[TradeTask],
    admin_items: &[AdminItem],
    bounds: &ProgrammeBounds,
    critical_path_len: usize,
) -> AnalysisSummary {
    let mut trade_breakdown = BTreeMap::new();
    for task in trade_tasks {
        *trade_breakdown.entry(task.trade).or_insert(0) += 1;
    }

    let critical_path = trade_tasks
        .iter()
        .filter(|t| t.is_high_priority())
        .take(critical_path_len)
        .map(|t| t.description.clone())
        .collect();

    AnalysisSummary {
        total_tasks: trade_tasks.len(),
        total_admin_items: admin_items.len(),
        trade_breakdown,
        timeline: TimelineSummary {
            start_date: bounds.program_start,
            end_date: bounds.program_end,
            duration_weeks: bounds.total_duration,
        },
        critical_path,
    }
}
