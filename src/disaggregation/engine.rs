//! Rule cascade for trade row expansion.
//!
//! Holds an ordered list of rules plus a fallback. The first rule that
//! claims a row expands it; if none does, the fallback does.

use std::sync::Arc;

use tracing::trace;

use super::{rules, DisaggregationRule, RowContext};
use crate::models::TradeTask;

/// An ordered, first-match-wins rule cascade.
///
/// # Example
/// ```
/// use u_programme::disaggregation::{rules, DisaggregationEngine};
///
/// let engine = DisaggregationEngine::new()
///     .with_rule(rules::Roofing)
///     .with_rule(rules::Scaffold);
/// assert_eq!(engine.rule_names(), vec!["roofing", "scaffold"]);
/// ```
#[derive(Clone)]
pub struct DisaggregationEngine {
    rules: Vec<Arc<dyn DisaggregationRule>>,
    fallback: Arc<dyn DisaggregationRule>,
}

impl DisaggregationEngine {
    /// Creates an engine with no rules. Every row goes to the fallback.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            fallback: Arc::new(rules::GeneralConstruction),
        }
    }

    /// The built-in cascade, in match order.
    pub fn standard() -> Self {
        Self::new()
            .with_rule(rules::Asbestos)
            .with_rule(rules::Demolition)
            .with_rule(rules::Piling)
            .with_rule(rules::ConcreteFrame)
            .with_rule(rules::Scaffold)
            .with_rule(rules::SfsInnerSkin)
            .with_rule(rules::Masonry)
            .with_rule(rules::Windows)
            .with_rule(rules::Roofing)
            .with_rule(rules::FlatFitOut)
            .with_rule(rules::CommunalArea)
            .with_rule(rules::ExternalWorks)
            .with_rule(rules::Electrical)
            .with_rule(rules::Plumbing)
    }

    /// Appends a rule (lowest precedence so far).
    pub fn with_rule<R: DisaggregationRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Inserts a rule ahead of all existing rules.
    pub fn with_priority_rule<R: DisaggregationRule + 'static>(mut self, rule: R) -> Self {
        self.rules.insert(0, Arc::new(rule));
        self
    }

    /// Replaces the fallback rule.
    pub fn with_fallback<R: DisaggregationRule + 'static>(mut self, rule: R) -> Self {
        self.fallback = Arc::new(rule);
        self
    }

    /// The rule that will expand this row.
    pub fn select(&self, context: &RowContext<'_>) -> &dyn DisaggregationRule {
        self.rules
            .iter()
            .find(|r| r.matches(context))
            .unwrap_or(&self.fallback)
            .as_ref()
    }

    /// Expands a row and stamps each task with its origin line and index.
    pub fn disaggregate(&self, context: &RowContext<'_>) -> Vec<TradeTask> {
        let rule = self.select(context);
        trace!(
            line = context.row.line_number,
            rule = rule.name(),
            description = rule.description(),
            "disaggregating row"
        );

        let line = context.row.line_number;
        rule.expand(context)
            .into_iter()
            .enumerate()
            .map(|(i, task)| task.with_origin(line, i + 1))
            .collect()
    }

    /// Names of the cascade rules, in match order (fallback excluded).
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// `(name, description)` for each cascade rule, then the fallback.
    pub fn describe(&self) -> Vec<(&'static str, &'static str)> {
        self.rules
            .iter()
            .chain(std::iter::once(&self.fallback))
            .map(|r| (r.name(), r.description()))
            .collect()
    }
}

impl Default for DisaggregationEngine {
    fn default() -> Self {
        Self::standard()
    }
}

impl std::fmt::Debug for DisaggregationEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DisaggregationEngine")
            .field("rules", &self.rule_names())
            .field("fallback", &self.fallback.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AnalysisConfig;
    use crate::models::{DateRange, Priority, ScheduleRow, Trade};
    use chrono::NaiveDate;

    #[derive(Debug)]
    struct Crane;

    impl DisaggregationRule for Crane {
        fn name(&self) -> &'static str {
            "crane"
        }

        fn matches(&self, context: &RowContext<'_>) -> bool {
            context.has("crane")
        }

        fn expand(&self, context: &RowContext<'_>) -> Vec<TradeTask> {
            vec![TradeTask::new(
                Trade::StructuralEngineer,
                "Tower crane",
                context.range,
                Priority::High,
            )]
        }
    }

    fn range() -> DateRange {
        DateRange::new(
            NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(),
            NaiveDate::from_ymd_opt(2025, 3, 28).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_standard_order() {
        let engine = DisaggregationEngine::standard();
        let names = engine.rule_names();
        assert_eq!(names.first(), Some(&"asbestos"));
        assert_eq!(names.last(), Some(&"plumbing"));
        assert_eq!(names.len(), 14);
    }

    #[test]
    fn test_first_match_wins() {
        let config = AnalysisConfig::default();
        // "asbestos" and "demolition" both present: asbestos is earlier
        let row = ScheduleRow::new(2, "Asbestos Strip and Demolition");
        let ctx = RowContext::new(&row, range(), 2, &config);
        let engine = DisaggregationEngine::standard();
        assert_eq!(engine.select(&ctx).name(), "asbestos");
    }

    #[test]
    fn test_fallback_when_unclaimed() {
        let config = AnalysisConfig::default();
        let row = ScheduleRow::new(9, "Crane Erection");
        let ctx = RowContext::new(&row, range(), 9, &config);
        let engine = DisaggregationEngine::standard();
        assert_eq!(engine.select(&ctx).name(), "general_construction");
    }

    #[test]
    fn test_priority_rule_preempts_cascade() {
        let config = AnalysisConfig::default();
        let row = ScheduleRow::new(9, "Crane Erection");
        let ctx = RowContext::new(&row, range(), 9, &config);
        let engine = DisaggregationEngine::standard().with_priority_rule(Crane);

        let tasks = engine.disaggregate(&ctx);
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].trade, Trade::StructuralEngineer);
        assert_eq!(tasks[0].id, "task-9-1");
        assert_eq!(tasks[0].source_line, 9);
    }

    #[test]
    fn test_custom_fallback_expands_unclaimed_rows() {
        #[derive(Debug)]
        struct Labourer;

        impl DisaggregationRule for Labourer {
            fn name(&self) -> &'static str {
                "labourer"
            }

            fn matches(&self, _context: &RowContext<'_>) -> bool {
                true
            }

            fn expand(&self, context: &RowContext<'_>) -> Vec<TradeTask> {
                vec![
                    TradeTask::new(Trade::GeneralConstruction, "Labour", context.range, Priority::Low),
                    TradeTask::new(Trade::GeneralConstruction, "Clean up", context.range, Priority::Low),
                ]
            }
        }

        let config = AnalysisConfig::default();
        let engine = DisaggregationEngine::standard().with_fallback(Labourer);

        let row = ScheduleRow::new(11, "Crane Erection");
        let ctx = RowContext::new(&row, range(), 11, &config);
        assert_eq!(engine.select(&ctx).name(), "labourer");
        let tasks = engine.disaggregate(&ctx);
        let ids: Vec<&str> = tasks.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["task-11-1", "task-11-2"]);
        assert!(tasks.iter().all(|t| t.priority == Priority::Low));

        // Rows claimed by the cascade never reach the fallback
        let row = ScheduleRow::new(12, "Roofing");
        let ctx = RowContext::new(&row, range(), 12, &config);
        assert_eq!(engine.select(&ctx).name(), "roofing");
    }

    #[test]
    fn test_describe_lists_every_rule() {
        let described = DisaggregationEngine::standard().describe();
        assert_eq!(described.len(), 15);
        assert_eq!(described[0], ("asbestos", "Licensed asbestos removal"));
        assert_eq!(described.last().map(|d| d.0), Some("general_construction"));
        for (name, description) in described {
            assert!(!description.is_empty());
            assert_ne!(name, description);
        }
    }

    #[test]
    fn test_ids_follow_fan_out() {
        let config = AnalysisConfig::default();
        let row = ScheduleRow::new(21, "Electrical Installation");
        let ctx = RowContext::new(&row, range(), 21, &config);
        let tasks = DisaggregationEngine::standard().disaggregate(&ctx);
        let ids: Vec<&str> = tasks.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["task-21-1", "task-21-2"]);
    }
}
