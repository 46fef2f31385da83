//! Report configuration types

use crate::measurements::DatasetOrder;
use crate::report::Metric;
use serde::{Deserialize, Serialize};

/// What to do when a plotted value is not numeric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Stop the run at the first bad chart
    #[default]
    Abort,
    /// Log the bad chart and continue with the next one
    Skip,
}

/// Report configuration
///
/// Controls which charts are built from a measurement table and in which
/// order they are presented.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Metrics charted per dataset, in presentation order
    pub metrics: Vec<Metric>,

    /// Dataset enumeration order
    pub order: DatasetOrder,

    /// Handling of non-numeric plotted values
    pub failure_policy: FailurePolicy,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            metrics: vec![Metric::TimeMs],
            order: DatasetOrder::FirstSeen,
            failure_policy: FailurePolicy::Abort,
        }
    }
}

impl ReportConfig {
    /// Set the charted metrics
    pub fn with_metrics(mut self, metrics: Vec<Metric>) -> Self {
        self.metrics = metrics;
        self
    }

    /// Set the dataset order
    pub fn with_order(mut self, order: DatasetOrder) -> Self {
        self.order = order;
        self
    }

    /// Set the failure policy
    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }
}
