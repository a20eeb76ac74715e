//! Session controller: owns the generated dataset and serves charts and
//! metrics to the rendering host.

use crate::charts::{self, ChartSelection, ChartSpec};
use crate::error::{ChartError, MetricsError};
use crate::metrics::{self, EngagementMetrics};
use crate::samples::{EngagementData, GeneratorConfig};

/// Page title the rendering host shows above everything else.
pub const DASHBOARD_TITLE: &str = "User Engagement Dashboard";

/// One dashboard session. The dataset is generated once at construction and
/// never mutated; a concurrent host creates one `Dashboard` per session.
#[derive(Debug, Clone)]
pub struct Dashboard {
    data: EngagementData,
}

impl Dashboard {
    pub fn new() -> Self {
        Self::with_config(&GeneratorConfig::default())
    }

    pub fn with_config(config: &GeneratorConfig) -> Self {
        Self {
            data: EngagementData::generate(config),
        }
    }

    pub fn data(&self) -> &EngagementData {
        &self.data
    }

    /// Recomputed on every call; the dataset is immutable so results never
    /// drift within a session.
    pub fn metrics(&self) -> Result<EngagementMetrics, MetricsError> {
        metrics::compute(&self.data)
    }

    /// Typed dispatch, total.
    pub fn select(&self, selection: ChartSelection) -> ChartSpec {
        charts::select_chart(selection, &self.data)
    }

    /// String-keyed dispatch for hosts that read a selection control. An
    /// unrecognised key is an error rather than a silent no-op.
    pub fn chart(&self, key: &str) -> Result<ChartSpec, ChartError> {
        let selection = key.parse::<ChartSelection>()?;
        Ok(self.select(selection))
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}
