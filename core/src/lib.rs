//! Shared analytics core for Pulseboard. Data generation, metric computation,
//! and chart dispatch live here; rendering hosts stay thin shells around it.

pub mod charts;
pub mod dashboard;
pub mod error;
pub mod format;
pub mod metrics;
pub mod samples;

pub use charts::{select_chart, ChartKind, ChartSelection, ChartSeries, ChartSpec};
pub use dashboard::{Dashboard, DASHBOARD_TITLE};
pub use error::{ChartError, MetricsError};
pub use metrics::{compute, EngagementMetrics, MetricEntry};
pub use samples::{
    EngagementData, GeneratorConfig, MonthlyPoint, MonthlySeries, SegmentDistribution,
    SegmentShare, DEFAULT_SEED, MONTHS,
};
