//! Per-company monitoring figures
//!
//! These are plain readings: the service layer fills them from whatever
//! monitoring backend is wired in (the in-memory build ships static demo
//! figures). Only `percent_change` involves any computation.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::company::CompanyId;

/// Availability snapshot for one company on one day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthMetrics {
    pub company_id: CompanyId,
    pub metric_date: NaiveDate,
    pub uptime_percentage: f64,
    pub error_rate: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub recorded_at: DateTime<Utc>,
}

/// Resource consumption snapshot for one company
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetrics {
    pub active_users: u64,
    pub total_users: u64,
    pub active_spaces: u64,
    pub total_spaces: u64,
    /// Bytes
    pub storage_used: u64,
    pub api_calls: u64,
    pub last_activity_date: DateTime<Utc>,
}

/// A current/previous pair with its relative change
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthFigure {
    pub current: u64,
    pub previous: u64,
    pub percent_change: f64,
}

impl GrowthFigure {
    /// Build a figure, deriving the percent change from the pair
    pub fn new(current: u64, previous: u64) -> Self {
        Self {
            current,
            previous,
            percent_change: percent_change(current, previous),
        }
    }
}

/// Relative change of `current` against `previous`, in percent.
/// A zero baseline reads as 0.0 rather than infinity.
pub fn percent_change(current: u64, previous: u64) -> f64 {
    if previous == 0 {
        return 0.0;
    }

    (current as f64 - previous as f64) / previous as f64 * 100.0
}

/// Period-over-period growth across the tracked dimensions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthMetrics {
    pub user_growth: GrowthFigure,
    pub space_growth: GrowthFigure,
    pub storage_growth: GrowthFigure,
    pub api_usage_growth: GrowthFigure,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_change() {
        assert_eq!(percent_change(50, 40), 25.0);
        assert_eq!(percent_change(40, 50), -20.0);
        assert_eq!(percent_change(10, 10), 0.0);
    }

    #[test]
    fn test_percent_change_zero_baseline() {
        assert_eq!(percent_change(100, 0), 0.0);
    }

    #[test]
    fn test_growth_figure_derives_change() {
        let figure = GrowthFigure::new(15000, 12000);
        assert_eq!(figure.percent_change, 25.0);
    }

    #[test]
    fn test_growth_metrics_serialization() {
        let metrics = GrowthMetrics {
            user_growth: GrowthFigure::new(50, 40),
            space_growth: GrowthFigure::new(10, 8),
            storage_growth: GrowthFigure::new(500, 400),
            api_usage_growth: GrowthFigure::new(15000, 12000),
        };

        let json = serde_json::to_string(&metrics).unwrap();
        assert!(json.contains("\"userGrowth\""));
        assert!(json.contains("\"percentChange\":25.0"));
    }
}
