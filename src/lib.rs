//! sort-report - runtime comparison charts for sorting benchmarks
//!
//! Reads the headerless measurement file written by a sorting benchmark
//! harness and presents one line chart of algorithm runtime per dataset.
//!
//! # Architecture
//!
//! - **Measurements**: fixed 7-column record type, loader and dataset partitions
//! - **Report**: chart construction and the sequential report loop
//! - **Visualization**: the `ChartSink` abstraction and plotters image sinks
//! - **Output**: CSV, JSON and Excel exports of chart series
//! - **UI**: interactive terminal chart viewer
//!
//! # Example
//!
//! ```rust,no_run
//! use sort_report::{generate_reports, RecordingSink};
//!
//! fn main() -> sort_report::Result<()> {
//!     let mut sink = RecordingSink::new();
//!     let summary = generate_reports("sort_results.csv", &mut sink)?;
//!
//!     for chart in sink.charts() {
//!         println!("{}: {} points", chart.title, chart.points.len());
//!     }
//!     println!("{} charts", summary.charts_presented);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod measurements;
pub mod output;
pub mod report;
pub mod ui;
pub mod visualization;

// Re-export commonly used types
pub use config::{FailurePolicy, ReportConfig};
pub use error::{Error, Result};
pub use measurements::{DatasetOrder, DatasetPartition, MeasurementRecord, MeasurementTable};
pub use output::{CsvSink, ExcelSink, JsonSink};
pub use report::{
    generate_reports, Metric, ReportGenerator, ReportSummary, RuntimeChart, SeriesPoint,
};
pub use ui::TerminalSink;
pub use visualization::{BitmapSink, ChartSink, RecordingSink, SvgSink};
