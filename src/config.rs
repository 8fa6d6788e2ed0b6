//! Analysis configuration.

use serde::{Deserialize, Serialize};

/// Tunables for a programme analysis.
///
/// Missing fields deserialize to their defaults, so a partial config file
/// only needs to name what it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnalysisConfig {
    /// Number of high-priority task descriptions in the critical path shortlist.
    pub critical_path_len: usize,
    /// Hours per week for generic trade tasks.
    pub hours_per_week: f64,
    /// Currency value per estimated hour for generic trade tasks.
    pub hourly_rate: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            critical_path_len: 5,
            hours_per_week: 40.0,
            hourly_rate: 25.0,
        }
    }
}

impl AnalysisConfig {
    /// Sets the critical path shortlist length.
    pub fn with_critical_path_len(mut self, len: usize) -> Self {
        self.critical_path_len = len;
        self
    }

    /// Sets hours per week for generic tasks.
    pub fn with_hours_per_week(mut self, hours: f64) -> Self {
        self.hours_per_week = hours;
        self
    }

    /// Sets the hourly rate for generic tasks.
    pub fn with_hourly_rate(mut self, rate: f64) -> Self {
        self.hourly_rate = rate;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AnalysisConfig::default();
        assert_eq!(config.critical_path_len, 5);
        assert_eq!(config.hours_per_week, 40.0);
        assert_eq!(config.hourly_rate, 25.0);
    }

    #[test]
    fn test_partial_deserialize() {
        let config: AnalysisConfig = serde_json::from_str(r#"{"hourlyRate": 32.5}"#).unwrap();
        assert_eq!(config.hourly_rate, 32.5);
        assert_eq!(config.critical_path_len, 5);
    }

    #[test]
    fn test_builder() {
        let config = AnalysisConfig::default()
            .with_critical_path_len(3)
            .with_hours_per_week(37.5)
            .with_hourly_rate(30.0);
        assert_eq!(config.critical_path_len, 3);
        assert_eq!(config.hours_per_week, 37.5);
        assert_eq!(config.hourly_rate, 30.0);
    }
}
