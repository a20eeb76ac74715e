//! Engagement metric reductions over a generated dataset.

use serde::{Deserialize, Serialize};

use crate::error::MetricsError;
use crate::format;
use crate::samples::EngagementData;

/// The three headline metrics shown under every chart. Computed on demand,
/// never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngagementMetrics {
    pub total_registrations: u64,
    pub avg_monthly_registrations: f64,
    pub churn_rate_pct: f64,
}

/// A `(label, value)` pair ready for a metric widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricEntry {
    pub label: String,
    pub value: String,
}

/// Reduces the dataset to the three scalar metrics. Pure; the only failure
/// is a zero active-user sum, which would make churn rate a division by
/// zero — that case fails explicitly instead of propagating NaN.
pub fn compute(data: &EngagementData) -> Result<EngagementMetrics, MetricsError> {
    let active_total = data.active_users.total();
    if active_total == 0 {
        return Err(MetricsError::NoActiveUsers);
    }

    let churned_total = data.churned_users.total();

    Ok(EngagementMetrics {
        total_registrations: data.registrations.total(),
        avg_monthly_registrations: round2(data.registrations.mean()),
        churn_rate_pct: round2(churned_total as f64 / active_total as f64 * 100.0),
    })
}

impl EngagementMetrics {
    /// Widget entries in display order, formatted once here so every host
    /// renders the same strings.
    pub fn entries(&self) -> Vec<MetricEntry> {
        vec![
            MetricEntry {
                label: "Total Registrations".to_string(),
                value: self.total_registrations.to_string(),
            },
            MetricEntry {
                label: "Avg Monthly Registrations".to_string(),
                value: format::format_number(self.avg_monthly_registrations, 2),
            },
            MetricEntry {
                label: "Churn Rate (%)".to_string(),
                value: format::format_number(self.churn_rate_pct, 2),
            },
        ]
    }
}

/// Rounds to two decimals with `f64::round`, i.e. half away from zero.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::samples::{GeneratorConfig, MonthlySeries};

    fn fixture() -> EngagementData {
        EngagementData::generate(&GeneratorConfig::default())
    }

    #[test]
    fn totals_and_mean_match_the_fixture_dataset() {
        let metrics = compute(&fixture()).unwrap();
        assert_eq!(metrics.total_registrations, 10_800);
        assert_eq!(metrics.avg_monthly_registrations, 1800.0);
    }

    #[test]
    fn churn_rate_is_rounded_to_two_decimals() {
        let metrics = compute(&fixture()).unwrap();
        // 2700 / 9300 * 100 = 29.032…
        assert_eq!(metrics.churn_rate_pct, 29.03);
    }

    #[test]
    fn zero_active_users_is_an_explicit_error() {
        let mut data = fixture();
        data.active_users = MonthlySeries::from_values("Active", [0; 6]);
        assert_eq!(compute(&data), Err(MetricsError::NoActiveUsers));
    }

    #[test]
    fn entries_carry_display_labels_in_order() {
        let metrics = compute(&fixture()).unwrap();
        let entries = metrics.entries();
        let labels: Vec<&str> = entries.iter().map(|entry| entry.label.as_str()).collect();
        assert_eq!(
            labels,
            [
                "Total Registrations",
                "Avg Monthly Registrations",
                "Churn Rate (%)"
            ]
        );
        assert_eq!(entries[0].value, "10800");
        assert_eq!(entries[2].value, "29.03");
    }

    #[test]
    fn rounding_is_half_away_from_zero() {
        assert_eq!(round2(0.005), 0.01);
        assert_eq!(round2(-0.005), -0.01);
        assert_eq!(round2(29.032_258_064), 29.03);
    }
}
