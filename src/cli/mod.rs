//! CLI argument parsing and command handling

use crate::config::{FailurePolicy, ReportConfig};
use crate::measurements::{DatasetOrder, MeasurementTable};
use crate::output::{CsvSink, ExcelSink, JsonSink};
use crate::report::{Metric, ReportGenerator, ReportSummary};
use crate::ui::TerminalSink;
use crate::visualization::{BitmapSink, ChartSink, SvgSink};
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::io::IsTerminal;
use std::path::PathBuf;

/// Where charts are presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputKind {
    /// Terminal viewer when stdout is a TTY, PNG files otherwise
    Auto,
    /// Interactive terminal viewer
    Terminal,
    /// One PNG image per chart
    Png,
    /// One SVG image per chart
    Svg,
    /// One CSV series file per chart
    Csv,
    /// All charts in a single JSON document
    Json,
    /// One worksheet with a native line chart per chart
    Excel,
}

impl OutputKind {
    /// Replace `Auto` with a concrete sink kind
    pub fn resolve(self, stdout_is_terminal: bool) -> Self {
        match self {
            OutputKind::Auto if stdout_is_terminal => OutputKind::Terminal,
            OutputKind::Auto => OutputKind::Png,
            other => other,
        }
    }
}

/// Plotted column
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MetricArg {
    /// time_ms
    Time,
    /// mem_mb
    Mem,
    /// bytes_used
    Bytes,
}

impl From<MetricArg> for Metric {
    fn from(arg: MetricArg) -> Self {
        match arg {
            MetricArg::Time => Metric::TimeMs,
            MetricArg::Mem => Metric::MemMb,
            MetricArg::Bytes => Metric::BytesUsed,
        }
    }
}

/// Dataset enumeration order
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OrderArg {
    FirstSeen,
    Sorted,
}

impl From<OrderArg> for DatasetOrder {
    fn from(arg: OrderArg) -> Self {
        match arg {
            OrderArg::FirstSeen => DatasetOrder::FirstSeen,
            OrderArg::Sorted => DatasetOrder::Sorted,
        }
    }
}

/// sort-report - runtime comparison charts for sorting benchmarks
#[derive(Parser, Debug)]
#[command(name = "sort-report")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Headerless 7-column measurement file
    /// (timestamp,algorithm,dataset,size,time_ms,mem_mb,bytes_used)
    #[arg(default_value = "sort_results.csv")]
    pub source: PathBuf,

    /// Where to present charts
    #[arg(short, long, value_enum, default_value = "auto")]
    pub output: OutputKind,

    /// Directory for file outputs
    #[arg(long, env = "SORT_REPORT_OUTPUT_DIR", default_value = "charts")]
    pub output_dir: PathBuf,

    /// Metric to chart per dataset (repeatable)
    #[arg(short, long = "metric", value_enum, default_values_t = [MetricArg::Time])]
    pub metrics: Vec<MetricArg>,

    /// Order in which datasets are charted
    #[arg(long, value_enum, default_value = "first-seen")]
    pub order: OrderArg,

    /// Skip charts with non-numeric values instead of stopping
    #[arg(long)]
    pub skip_invalid: bool,

    /// Image width in pixels (png/svg)
    #[arg(long, default_value = "1200")]
    pub width: u32,

    /// Image height in pixels (png/svg)
    #[arg(long, default_value = "800")]
    pub height: u32,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Load the measurement file and present its charts
    pub fn run(&self) -> Result<()> {
        let output = self.output.resolve(std::io::stdout().is_terminal());
        let config = self.report_config();

        tracing::info!("Starting sort-report");
        tracing::info!("Source: {}", self.source.display());
        tracing::info!("Output: {:?}", output);

        let table = MeasurementTable::from_path(&self.source).with_context(|| {
            format!("Failed to load measurements from: {}", self.source.display())
        })?;

        let mut sink = self.build_sink(output);
        let summary = ReportGenerator::new(config)
            .generate(&table, sink.as_mut())
            .context("Failed to generate charts")?;

        self.print_summary(output, &summary);
        Ok(())
    }

    /// Report configuration from the CLI flags
    pub fn report_config(&self) -> ReportConfig {
        let policy = if self.skip_invalid {
            FailurePolicy::Skip
        } else {
            FailurePolicy::Abort
        };

        ReportConfig::default()
            .with_metrics(self.metrics.iter().map(|&m| m.into()).collect())
            .with_order(self.order.into())
            .with_failure_policy(policy)
    }

    fn build_sink(&self, output: OutputKind) -> Box<dyn ChartSink> {
        let dir = self.output_dir.clone();
        match output {
            OutputKind::Auto | OutputKind::Terminal => Box::new(TerminalSink::new()),
            OutputKind::Png => Box::new(BitmapSink::new(dir).with_size(self.width, self.height)),
            OutputKind::Svg => Box::new(SvgSink::new(dir).with_size(self.width, self.height)),
            OutputKind::Csv => Box::new(CsvSink::new(dir)),
            OutputKind::Json => Box::new(JsonSink::new(dir)),
            OutputKind::Excel => Box::new(ExcelSink::new(dir)),
        }
    }

    fn print_summary(&self, output: OutputKind, summary: &ReportSummary) {
        println!("\n{}", "=".repeat(70));
        println!("   Runtime Comparison Report");
        println!("{}", "=".repeat(70));
        println!("  Source:       {}", self.source.display());
        println!("  Datasets:     {}", summary.datasets);
        println!("  Charts:       {}", summary.charts_presented);

        if output != OutputKind::Terminal && summary.charts_presented > 0 {
            println!("✓ Output written to: {}", self.output_dir.display());
        }

        for skipped in &summary.skipped {
            println!("✗ Skipped {} ({}): {}", skipped.dataset, skipped.metric, skipped.reason);
        }

        println!("{}", "=".repeat(70));
    }
}
