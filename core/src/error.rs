//! Error types for the analytics core.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetricsError {
    /// Churn rate divides by the active-user sum; a dataset with no active
    /// users has no defined churn rate.
    #[error("churn rate is undefined: active-user sum is zero")]
    NoActiveUsers,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChartError {
    /// The selection key doesn't match any sidebar option.
    #[error("unknown chart selection: {0:?}")]
    InvalidSelection(String),
}
