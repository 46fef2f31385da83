//! Report generation
//!
//! Load a measurement table, split it by dataset and present one chart per
//! dataset (and per requested metric) through a [`ChartSink`]. Charts are
//! presented strictly in sequence; an error stops the run before any later
//! dataset is reached.

mod chart;
#[cfg(test)]
mod tests;

pub use chart::{Metric, RuntimeChart, SeriesPoint};

use crate::config::{FailurePolicy, ReportConfig};
use crate::error::{Error, Result};
use crate::measurements::MeasurementTable;
use crate::visualization::ChartSink;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A chart left out under [`FailurePolicy::Skip`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedChart {
    pub dataset: String,
    pub metric: Metric,
    pub reason: String,
}

/// Outcome of a report run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Datasets found in the table
    pub datasets: usize,
    /// Charts handed to the sink
    pub charts_presented: usize,
    /// Charts left out because of bad values
    pub skipped: Vec<SkippedChart>,
}

/// Builds and presents per-dataset charts
pub struct ReportGenerator {
    config: ReportConfig,
}

impl ReportGenerator {
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Build every chart without presenting anything
    ///
    /// Useful for inspecting the series of a table. Any bad value fails the
    /// whole call regardless of the failure policy.
    pub fn charts(&self, table: &MeasurementTable) -> Result<Vec<RuntimeChart>> {
        let mut charts = Vec::new();
        for partition in table.partitions(self.config.order) {
            for &metric in &self.config.metrics {
                charts.push(RuntimeChart::from_partition(&partition, metric)?);
            }
        }
        Ok(charts)
    }

    /// Present one chart per dataset and metric
    pub fn generate<S: ChartSink + ?Sized>(
        &self,
        table: &MeasurementTable,
        sink: &mut S,
    ) -> Result<ReportSummary> {
        let partitions = table.partitions(self.config.order);
        let mut summary = ReportSummary {
            datasets: partitions.len(),
            ..Default::default()
        };

        if partitions.is_empty() {
            tracing::warn!("No measurement rows; nothing to chart");
        }

        for partition in &partitions {
            for &metric in &self.config.metrics {
                let chart = match RuntimeChart::from_partition(partition, metric) {
                    Ok(chart) => chart,
                    Err(err @ Error::Render { .. })
                        if self.config.failure_policy == FailurePolicy::Skip =>
                    {
                        tracing::warn!("Skipping chart: {}", err);
                        summary.skipped.push(SkippedChart {
                            dataset: partition.dataset().to_string(),
                            metric,
                            reason: err.to_string(),
                        });
                        continue;
                    }
                    Err(err) => return Err(err),
                };

                tracing::debug!(
                    "Presenting \"{}\" with {} points",
                    chart.title,
                    chart.points.len()
                );
                sink.present(&chart)?;
                summary.charts_presented += 1;
            }
        }

        sink.finish()?;

        tracing::info!(
            "Presented {} charts for {} datasets ({} skipped)",
            summary.charts_presented,
            summary.datasets,
            summary.skipped.len()
        );
        Ok(summary)
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new(ReportConfig::default())
    }
}

/// Load `source` and present one runtime chart per dataset
pub fn generate_reports<S: ChartSink + ?Sized>(
    source: impl AsRef<Path>,
    sink: &mut S,
) -> Result<ReportSummary> {
    let table = MeasurementTable::from_path(source)?;
    ReportGenerator::default().generate(&table, sink)
}
