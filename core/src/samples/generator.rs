//! Deterministic sample-data generation for a dashboard session.

use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use super::series::{MonthlySeries, SegmentDistribution, SegmentShare};

/// Seed the original dashboard pinned for reproducibility.
pub const DEFAULT_SEED: u64 = 42;

/// Per-session generator configuration. The seed is explicit so concurrent
/// sessions stay independent instead of sharing process-wide RNG state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self { seed: DEFAULT_SEED }
    }
}

impl GeneratorConfig {
    pub fn with_seed(seed: u64) -> Self {
        Self { seed }
    }

    /// The sanctioned randomness source for randomised extensions of the
    /// generator. Anything drawn here is reproducible per seed.
    pub fn rng(&self) -> StdRng {
        StdRng::seed_from_u64(self.seed)
    }
}

/// Everything one dashboard session holds: the three monthly series plus the
/// segment breakdown. Generated once at construction, immutable after.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngagementData {
    pub registrations: MonthlySeries,
    pub active_users: MonthlySeries,
    pub churned_users: MonthlySeries,
    pub segments: SegmentDistribution,
}

impl EngagementData {
    /// Produces the session dataset. Generation is total: the current values
    /// are fixed literals, so every seed yields the same months and numbers.
    /// A randomised variant must draw from [`GeneratorConfig::rng`] only.
    pub fn generate(config: &GeneratorConfig) -> Self {
        debug!("generating engagement dataset (seed {})", config.seed);

        Self {
            registrations: MonthlySeries::from_values(
                "Registrations",
                [1200, 1500, 1800, 2100, 2400, 2700],
            ),
            active_users: MonthlySeries::from_values(
                "Active",
                [800, 1100, 1400, 1700, 2000, 2300],
            ),
            churned_users: MonthlySeries::from_values("Churned", [400, 400, 400, 400, 500, 600]),
            segments: SegmentDistribution {
                shares: vec![
                    SegmentShare {
                        name: "New Users".to_string(),
                        percent: 40,
                    },
                    SegmentShare {
                        name: "Active Users".to_string(),
                        percent: 35,
                    },
                    SegmentShare {
                        name: "Inactive Users".to_string(),
                        percent: 25,
                    },
                ],
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::Rng;

    use super::*;

    #[test]
    fn generation_is_deterministic() {
        let config = GeneratorConfig::default();
        assert_eq!(
            EngagementData::generate(&config),
            EngagementData::generate(&config)
        );
    }

    #[test]
    fn all_series_share_month_order_and_length() {
        let data = EngagementData::generate(&GeneratorConfig::default());
        let months = data.registrations.months();
        assert_eq!(months, ["Jan", "Feb", "Mar", "Apr", "May", "Jun"]);
        assert_eq!(data.active_users.months(), months);
        assert_eq!(data.churned_users.months(), months);
    }

    #[test]
    fn segment_shares_cover_the_whole_population() {
        let data = EngagementData::generate(&GeneratorConfig::default());
        assert_eq!(data.segments.total_percent(), 100);
        assert_eq!(
            data.segments.names(),
            ["New Users", "Active Users", "Inactive Users"]
        );
    }

    #[test]
    fn same_seed_yields_the_same_rng_stream() {
        let a = GeneratorConfig::with_seed(7).rng().gen::<u64>();
        let b = GeneratorConfig::with_seed(7).rng().gen::<u64>();
        assert_eq!(a, b);
    }
}
