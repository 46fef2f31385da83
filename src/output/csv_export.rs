//! CSV export of chart series

use crate::error::{Error, Result};
use crate::report::RuntimeChart;
use crate::visualization::{chart_file_name, ChartSink};
use csv::Writer;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// Writes the series of each chart to its own CSV file
pub struct CsvSink {
    output_dir: PathBuf,
    written: Vec<PathBuf>,
}

impl CsvSink {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            written: Vec::new(),
        }
    }

    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    /// Export one chart to `path`
    pub fn export(chart: &RuntimeChart, path: &Path) -> Result<()> {
        let file = File::create(path)?;
        let mut wtr = Writer::from_writer(file);

        // Write headers
        wtr.write_record(["point", "algorithm", chart.metric.column()])
            .map_err(Error::sink)?;

        // Write data rows
        for (idx, point) in chart.points.iter().enumerate() {
            wtr.write_record(&[
                (idx + 1).to_string(),
                point.algorithm.clone(),
                point.value.to_string(),
            ])
            .map_err(Error::sink)?;
        }

        wtr.flush()?;
        Ok(())
    }
}

impl ChartSink for CsvSink {
    fn present(&mut self, chart: &RuntimeChart) -> Result<()> {
        fs::create_dir_all(&self.output_dir)?;
        let path = self
            .output_dir
            .join(chart_file_name(self.written.len() + 1, chart, "csv"));

        Self::export(chart, &path)?;
        tracing::debug!("Wrote {}", path.display());
        self.written.push(path);
        Ok(())
    }
}
