//! Chart presentation

pub mod runtime;

pub use runtime::{BitmapSink, RuntimePlotter, SvgSink};

use crate::error::Result;
use crate::report::RuntimeChart;

/// Destination for rendered charts
///
/// `present` is called once per chart, in report order. `finish` is called
/// once after the last chart of a successful run.
pub trait ChartSink {
    /// Present a single chart
    fn present(&mut self, chart: &RuntimeChart) -> Result<()>;

    /// Flush anything buffered across charts
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

impl<S: ChartSink + ?Sized> ChartSink for Box<S> {
    fn present(&mut self, chart: &RuntimeChart) -> Result<()> {
        (**self).present(chart)
    }

    fn finish(&mut self) -> Result<()> {
        (**self).finish()
    }
}

/// Keeps presented charts in memory
#[derive(Debug, Default)]
pub struct RecordingSink {
    charts: Vec<RuntimeChart>,
    finished: bool,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn charts(&self) -> &[RuntimeChart] {
        &self.charts
    }

    pub fn into_charts(self) -> Vec<RuntimeChart> {
        self.charts
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl ChartSink for RecordingSink {
    fn present(&mut self, chart: &RuntimeChart) -> Result<()> {
        self.charts.push(chart.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.finished = true;
        Ok(())
    }
}

/// File name for a chart: `<NN>_<dataset>_<metric>.<ext>`
///
/// `index` is the 1-based presentation position, which keeps names unique
/// even when two dataset labels reduce to the same slug.
pub fn chart_file_name(index: usize, chart: &RuntimeChart, extension: &str) -> String {
    format!(
        "{:02}_{}_{}.{}",
        index,
        slug(&chart.dataset),
        chart.metric.column(),
        extension
    )
}

fn slug(label: &str) -> String {
    let slug: String = label
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' })
        .collect();
    if slug.is_empty() {
        "dataset".to_string()
    } else {
        slug
    }
}
