//! Chart-selection dispatch producing renderer-agnostic chart specs.
//!
//! The host owns the sidebar control and the actual drawing; this module
//! turns a selection plus the session dataset into plain data any charting
//! backend can consume.

use std::fmt;
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::ChartError;
use crate::samples::{EngagementData, MonthlySeries};

/// The three sidebar options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartSelection {
    UserRegistrations,
    UserActivity,
    UserSegments,
}

impl ChartSelection {
    pub const ALL: [ChartSelection; 3] = [
        ChartSelection::UserRegistrations,
        ChartSelection::UserActivity,
        ChartSelection::UserSegments,
    ];

    /// Sidebar label; also the string key accepted by `FromStr`.
    pub fn label(&self) -> &'static str {
        match self {
            ChartSelection::UserRegistrations => "User Registrations",
            ChartSelection::UserActivity => "User Activity",
            ChartSelection::UserSegments => "User Segments",
        }
    }
}

impl fmt::Display for ChartSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ChartSelection {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "User Registrations" => Ok(ChartSelection::UserRegistrations),
            "User Activity" => Ok(ChartSelection::UserActivity),
            "User Segments" => Ok(ChartSelection::UserSegments),
            other => Err(ChartError::InvalidSelection(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Line,
    Pie,
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ChartKind::Bar => "bar",
            ChartKind::Line => "line",
            ChartKind::Pie => "pie",
        };
        f.write_str(label)
    }
}

/// One named value series; values align index-for-index with `ChartSpec::labels`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub name: String,
    pub values: Vec<f64>,
}

/// Renderer-agnostic chart description handed to the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_label: Option<String>,
    /// Category labels: month names for bar/line, segment names for pie.
    pub labels: Vec<String>,
    pub series: Vec<ChartSeries>,
}

/// Maps a selection to its chart over the session dataset. Total: every
/// selection has a chart, and the dataset needs no validation here.
pub fn select_chart(selection: ChartSelection, data: &EngagementData) -> ChartSpec {
    debug!("dispatching chart for {selection}");

    match selection {
        ChartSelection::UserRegistrations => ChartSpec {
            kind: ChartKind::Bar,
            title: "Monthly User Registrations".to_string(),
            x_label: Some("Month".to_string()),
            y_label: Some("Users".to_string()),
            labels: data.registrations.months(),
            series: vec![month_series("Users", &data.registrations)],
        },
        ChartSelection::UserActivity => ChartSpec {
            kind: ChartKind::Line,
            title: "User Activity Trends".to_string(),
            x_label: Some("Month".to_string()),
            y_label: None,
            labels: data.active_users.months(),
            series: vec![
                month_series("Active", &data.active_users),
                month_series("Churned", &data.churned_users),
            ],
        },
        ChartSelection::UserSegments => ChartSpec {
            kind: ChartKind::Pie,
            title: "User Segment Distribution".to_string(),
            x_label: None,
            y_label: None,
            labels: data.segments.names(),
            series: vec![ChartSeries {
                name: "Share".to_string(),
                values: data.segments.percents(),
            }],
        },
    }
}

fn month_series(name: &str, series: &MonthlySeries) -> ChartSeries {
    ChartSeries {
        name: name.to_string(),
        values: series.values(),
    }
}
