//! Runtime comparison line charts

use super::{chart_file_name, ChartSink};
use crate::error::{Error, Result};
use crate::report::RuntimeChart;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

/// Default chart size in pixels
pub const DEFAULT_SIZE: (u32, u32) = (1200, 800);

pub struct RuntimePlotter;

impl RuntimePlotter {
    /// Draw a chart onto any plotters drawing area
    ///
    /// The x axis is categorical with one segment per point, labelled with
    /// the algorithm name of that point.
    pub fn draw<DB: DrawingBackend>(
        chart: &RuntimeChart,
        root: &DrawingArea<DB, Shift>,
    ) -> Result<()> {
        root.fill(&WHITE).map_err(Error::sink)?;

        if chart.points.is_empty() {
            root.present().map_err(Error::sink)?;
            return Ok(());
        }

        let labels = chart.labels();
        let (y_min, y_max) = chart.value_range();

        let mut ctx = ChartBuilder::on(root)
            .caption(&chart.title, ("sans-serif", 40))
            .margin(15)
            .x_label_area_size(50)
            .y_label_area_size(70)
            .build_cartesian_2d((0..labels.len()).into_segmented(), y_min..y_max)
            .map_err(Error::sink)?;

        let x_formatter = |x: &SegmentValue<usize>| match x {
            SegmentValue::CenterOf(i) | SegmentValue::Exact(i) => {
                labels.get(*i).map(|l| l.to_string()).unwrap_or_default()
            }
            SegmentValue::Last => String::new(),
        };
        let y_formatter = |y: &f64| format!("{:.1}", y);

        let mut mesh = ctx.configure_mesh();
        mesh.x_desc(chart.x_label.as_str())
            .y_desc(chart.y_label.as_str())
            .x_labels(labels.len())
            .x_label_formatter(&x_formatter)
            .y_label_formatter(&y_formatter);
        if !chart.grid {
            mesh.disable_mesh();
        }
        mesh.draw().map_err(Error::sink)?;

        let series: Vec<(SegmentValue<usize>, f64)> = chart
            .points
            .iter()
            .enumerate()
            .map(|(i, p)| (SegmentValue::CenterOf(i), p.value))
            .collect();

        ctx.draw_series(LineSeries::new(series.clone(), &BLUE))
            .map_err(Error::sink)?;

        // Markers keep single-point series visible
        ctx.draw_series(
            series
                .into_iter()
                .map(|point| Circle::new(point, 4, BLUE.filled())),
        )
        .map_err(Error::sink)?;

        root.present().map_err(Error::sink)?;
        Ok(())
    }
}

/// Writes one PNG per chart
pub struct BitmapSink {
    output_dir: PathBuf,
    size: (u32, u32),
    written: Vec<PathBuf>,
}

impl BitmapSink {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            size: DEFAULT_SIZE,
            written: Vec::new(),
        }
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.size = (width, height);
        self
    }

    /// Files written so far, in presentation order
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl ChartSink for BitmapSink {
    fn present(&mut self, chart: &RuntimeChart) -> Result<()> {
        let path = next_path(&self.output_dir, self.written.len() + 1, chart, "png")?;
        {
            let root = BitMapBackend::new(&path, self.size).into_drawing_area();
            RuntimePlotter::draw(chart, &root)?;
        }
        tracing::debug!("Wrote {}", path.display());
        self.written.push(path);
        Ok(())
    }
}

/// Writes one SVG per chart
pub struct SvgSink {
    output_dir: PathBuf,
    size: (u32, u32),
    written: Vec<PathBuf>,
}

impl SvgSink {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            size: DEFAULT_SIZE,
            written: Vec::new(),
        }
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.size = (width, height);
        self
    }

    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl ChartSink for SvgSink {
    fn present(&mut self, chart: &RuntimeChart) -> Result<()> {
        let path = next_path(&self.output_dir, self.written.len() + 1, chart, "svg")?;
        {
            let root = SVGBackend::new(&path, self.size).into_drawing_area();
            RuntimePlotter::draw(chart, &root)?;
        }
        tracing::debug!("Wrote {}", path.display());
        self.written.push(path);
        Ok(())
    }
}

fn next_path(dir: &Path, index: usize, chart: &RuntimeChart, extension: &str) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    Ok(dir.join(chart_file_name(index, chart, extension)))
}
