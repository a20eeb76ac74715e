//! Data model for monthly engagement series and segment shares.

use serde::{Deserialize, Serialize};

/// Month labels every generated series uses, in calendar order.
pub const MONTHS: [&str; 6] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyPoint {
    pub month: String,
    pub value: u32,
}

/// A named series with one value per month, Jan through Jun.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySeries {
    pub name: String,
    pub points: Vec<MonthlyPoint>,
}

impl MonthlySeries {
    /// Zips `values` with the shared month labels so every series stays
    /// aligned on the same month order.
    pub fn from_values(name: &str, values: [u32; 6]) -> Self {
        let points = MONTHS
            .iter()
            .zip(values)
            .map(|(month, value)| MonthlyPoint {
                month: (*month).to_string(),
                value,
            })
            .collect();
        Self {
            name: name.to_string(),
            points,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn months(&self) -> Vec<String> {
        self.points.iter().map(|point| point.month.clone()).collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.points
            .iter()
            .map(|point| f64::from(point.value))
            .collect()
    }

    pub fn total(&self) -> u64 {
        self.points.iter().map(|point| u64::from(point.value)).sum()
    }

    pub fn mean(&self) -> f64 {
        if self.points.is_empty() {
            0.0
        } else {
            self.total() as f64 / self.points.len() as f64
        }
    }
}

/// One slice of the segment breakdown, as a whole-number percentage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentShare {
    pub name: String,
    pub percent: u32,
}

/// Ordered segment breakdown. Order is presentation order, so this is a list
/// rather than a map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentDistribution {
    pub shares: Vec<SegmentShare>,
}

impl SegmentDistribution {
    pub fn names(&self) -> Vec<String> {
        self.shares.iter().map(|share| share.name.clone()).collect()
    }

    pub fn percents(&self) -> Vec<f64> {
        self.shares
            .iter()
            .map(|share| f64::from(share.percent))
            .collect()
    }

    pub fn total_percent(&self) -> u32 {
        self.shares.iter().map(|share| share.percent).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_aligns_values_with_month_labels() {
        let series = MonthlySeries::from_values("Registrations", [1, 2, 3, 4, 5, 6]);
        assert_eq!(series.len(), 6);
        assert_eq!(series.months(), MONTHS.map(str::to_string).to_vec());
        assert_eq!(series.points[0].month, "Jan");
        assert_eq!(series.points[5].month, "Jun");
        assert_eq!(series.points[5].value, 6);
    }

    #[test]
    fn series_reductions() {
        let series = MonthlySeries::from_values("Registrations", [10, 20, 30, 40, 50, 60]);
        assert_eq!(series.total(), 210);
        assert_eq!(series.mean(), 35.0);
    }

    #[test]
    fn empty_series_has_zero_mean() {
        let series = MonthlySeries {
            name: "empty".to_string(),
            points: Vec::new(),
        };
        assert!(series.is_empty());
        assert_eq!(series.mean(), 0.0);
    }
}
