mod generator;
mod series;

pub use generator::{EngagementData, GeneratorConfig, DEFAULT_SEED};
pub use series::{MonthlyPoint, MonthlySeries, SegmentDistribution, SegmentShare, MONTHS};
