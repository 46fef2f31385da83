//! Backend-independent chart descriptions

use crate::error::{Error, Result};
use crate::measurements::{parse_finite, DatasetPartition, MeasurementRecord};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Numeric column plotted on the y axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    #[default]
    TimeMs,
    MemMb,
    BytesUsed,
}

impl Metric {
    /// Source column name
    pub fn column(self) -> &'static str {
        match self {
            Metric::TimeMs => "time_ms",
            Metric::MemMb => "mem_mb",
            Metric::BytesUsed => "bytes_used",
        }
    }

    pub fn title(self, dataset: &str) -> String {
        match self {
            Metric::TimeMs => format!("Runtime Comparison ({})", dataset),
            Metric::MemMb => format!("Memory Comparison ({})", dataset),
            Metric::BytesUsed => format!("Data Volume Comparison ({})", dataset),
        }
    }

    pub fn y_label(self) -> &'static str {
        match self {
            Metric::TimeMs => "Time (ms)",
            Metric::MemMb => "Memory (MB)",
            Metric::BytesUsed => "Bytes Used",
        }
    }

    fn raw(self, record: &MeasurementRecord) -> &str {
        match self {
            Metric::TimeMs => &record.time_ms,
            Metric::MemMb => &record.mem_mb,
            Metric::BytesUsed => &record.bytes_used,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

/// One plotted point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub algorithm: String,
    pub value: f64,
}

/// A line chart of one metric for one dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuntimeChart {
    pub dataset: String,
    pub metric: Metric,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub grid: bool,
    pub points: Vec<SeriesPoint>,
}

impl RuntimeChart {
    /// Build the chart for a partition
    ///
    /// Points follow row order; algorithms are neither sorted nor
    /// deduplicated. Fails on the first value that is not a finite number.
    pub fn from_partition(partition: &DatasetPartition<'_>, metric: Metric) -> Result<Self> {
        let dataset = partition.dataset();
        let points = partition
            .rows()
            .iter()
            .map(|record| -> Result<SeriesPoint> {
                let raw = metric.raw(record);
                let value = parse_finite(raw).ok_or_else(|| Error::Render {
                    dataset: dataset.to_string(),
                    column: metric.column(),
                    value: raw.to_string(),
                    line: record.line,
                })?;
                Ok(SeriesPoint {
                    algorithm: record.algorithm.clone(),
                    value,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            dataset: dataset.to_string(),
            metric,
            title: metric.title(dataset),
            x_label: "Algorithm".to_string(),
            y_label: metric.y_label().to_string(),
            grid: true,
            points,
        })
    }

    pub fn labels(&self) -> Vec<&str> {
        self.points.iter().map(|p| p.algorithm.as_str()).collect()
    }

    /// Y axis range with headroom, always including zero
    ///
    /// Bounds are clamped to `±f64::MAX / 2` so the width of the range stays
    /// finite for any finite input.
    pub fn value_range(&self) -> (f64, f64) {
        const LIMIT: f64 = f64::MAX / 2.0;

        let min = self
            .points
            .iter()
            .map(|p| p.value)
            .fold(0f64, f64::min)
            .max(-LIMIT);
        let max = self
            .points
            .iter()
            .map(|p| p.value)
            .fold(0f64, f64::max)
            .min(LIMIT);

        if (max - min).abs() < f64::EPSILON {
            return (min, min + 1.0);
        }
        let pad = (max - min) * 0.1;
        let low = if min < 0.0 { (min - pad).max(-LIMIT) } else { min };
        (low, (max + pad).min(LIMIT))
    }
}
