//! JSON export of chart series

use crate::error::{Error, Result};
use crate::report::RuntimeChart;
use crate::visualization::ChartSink;
use serde_json::json;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// File name written by [`JsonSink`]
pub const JSON_FILE_NAME: &str = "charts.json";

/// Collects every chart and writes them as one JSON document on finish
pub struct JsonSink {
    output_dir: PathBuf,
    charts: Vec<RuntimeChart>,
}

impl JsonSink {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            charts: Vec::new(),
        }
    }

    /// Path of the JSON document
    pub fn path(&self) -> PathBuf {
        self.output_dir.join(JSON_FILE_NAME)
    }

    /// Export charts to a JSON file
    pub fn export(charts: &[RuntimeChart], path: &Path) -> Result<()> {
        let output = json!({
            "chart_count": charts.len(),
            "charts": charts,
        });

        let file = File::create(path)?;
        serde_json::to_writer_pretty(file, &output).map_err(Error::sink)?;
        Ok(())
    }
}

impl ChartSink for JsonSink {
    fn present(&mut self, chart: &RuntimeChart) -> Result<()> {
        self.charts.push(chart.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        fs::create_dir_all(&self.output_dir)?;
        let path = self.path();
        Self::export(&self.charts, &path)?;
        tracing::debug!("Wrote {} charts to {}", self.charts.len(), path.display());
        Ok(())
    }
}
