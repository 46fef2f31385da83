//! Tests for the report generator

use super::*;
use crate::measurements::DatasetOrder;
use crate::visualization::RecordingSink;
use std::io::Write;
use tempfile::NamedTempFile;

// ============================================================================
// Helpers
// ============================================================================

const SCENARIO: &str = "\
t1,quick,setA,100,5.0,1.0,100
t2,merge,setA,100,6.0,1.2,100
t3,quick,setB,200,9.0,2.0,200
";

fn table(data: &str) -> MeasurementTable {
    MeasurementTable::from_reader(data.as_bytes()).unwrap()
}

fn points(chart: &RuntimeChart) -> Vec<(&str, f64)> {
    chart
        .points
        .iter()
        .map(|p| (p.algorithm.as_str(), p.value))
        .collect()
}

/// Sink that fails on the n-th chart
struct FailingSink {
    fail_at: usize,
    presented: usize,
}

impl ChartSink for FailingSink {
    fn present(&mut self, _chart: &RuntimeChart) -> Result<()> {
        self.presented += 1;
        if self.presented == self.fail_at {
            return Err(Error::Sink("display closed".to_string()));
        }
        Ok(())
    }
}

// ============================================================================
// Generation
// ============================================================================

#[test]
fn test_scenario_two_datasets() {
    let mut sink = RecordingSink::new();
    let summary = ReportGenerator::default()
        .generate(&table(SCENARIO), &mut sink)
        .unwrap();

    assert_eq!(summary.datasets, 2);
    assert_eq!(summary.charts_presented, 2);
    assert!(summary.skipped.is_empty());
    assert!(sink.is_finished());

    let charts = sink.charts();
    assert_eq!(charts.len(), 2);

    assert_eq!(charts[0].title, "Runtime Comparison (setA)");
    assert_eq!(points(&charts[0]), vec![("quick", 5.0), ("merge", 6.0)]);

    assert_eq!(charts[1].title, "Runtime Comparison (setB)");
    assert_eq!(points(&charts[1]), vec![("quick", 9.0)]);

    for chart in charts {
        assert_eq!(chart.x_label, "Algorithm");
        assert_eq!(chart.y_label, "Time (ms)");
        assert!(chart.grid);
    }
}

#[test]
fn test_chart_count_matches_distinct_datasets() {
    let data = "\
t,a,d1,1,1,1,1
t,b,d2,1,2,1,1
t,c,d1,1,3,1,1
t,d,d3,1,4,1,1
t,e,d2,1,5,1,1
";
    let mut sink = RecordingSink::new();
    ReportGenerator::default()
        .generate(&table(data), &mut sink)
        .unwrap();

    let datasets: Vec<&str> = sink.charts().iter().map(|c| c.dataset.as_str()).collect();
    assert_eq!(datasets, vec!["d1", "d2", "d3"]);

    let total_points: usize = sink.charts().iter().map(|c| c.points.len()).sum();
    assert_eq!(total_points, 5);
    assert_eq!(points(&sink.charts()[0]), vec![("a", 1.0), ("c", 3.0)]);
}

#[test]
fn test_repeated_algorithms_are_not_deduplicated() {
    let data = "t1,quick,a,1,3.0,1,1\nt2,quick,a,1,2.0,1,1\nt3,heap,a,1,1.0,1,1\n";
    let mut sink = RecordingSink::new();
    ReportGenerator::default()
        .generate(&table(data), &mut sink)
        .unwrap();

    assert_eq!(
        points(&sink.charts()[0]),
        vec![("quick", 3.0), ("quick", 2.0), ("heap", 1.0)]
    );
}

#[test]
fn test_single_row_single_chart() {
    let mut sink = RecordingSink::new();
    let summary = ReportGenerator::default()
        .generate(&table("t1,radix,only,10,1.5,1,1\n"), &mut sink)
        .unwrap();

    assert_eq!(summary.charts_presented, 1);
    assert_eq!(sink.charts()[0].points.len(), 1);
}

#[test]
fn test_empty_table_produces_no_charts() {
    let mut sink = RecordingSink::new();
    let summary = ReportGenerator::default()
        .generate(&MeasurementTable::default(), &mut sink)
        .unwrap();

    assert_eq!(summary, ReportSummary::default());
    assert!(sink.charts().is_empty());
    assert!(sink.is_finished());
}

#[test]
fn test_header_only_source_produces_no_charts() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"timestamp,algorithm,dataset,size,time_ms,mem_mb,bytes_used\n")
        .unwrap();

    let mut sink = RecordingSink::new();
    let summary = generate_reports(file.path(), &mut sink).unwrap();
    assert_eq!(summary, ReportSummary::default());
    assert!(sink.charts().is_empty());
}

#[test]
fn test_generation_is_idempotent() {
    let table = table(SCENARIO);
    let generator = ReportGenerator::default();

    let mut first = RecordingSink::new();
    let mut second = RecordingSink::new();
    generator.generate(&table, &mut first).unwrap();
    generator.generate(&table, &mut second).unwrap();

    assert_eq!(first.charts(), second.charts());
}

#[test]
fn test_sorted_order() {
    let data = "t,a,zeta,1,1,1,1\nt,b,alpha,1,2,1,1\n";
    let generator = ReportGenerator::new(ReportConfig::default().with_order(DatasetOrder::Sorted));

    let mut sink = RecordingSink::new();
    generator.generate(&table(data), &mut sink).unwrap();

    let datasets: Vec<&str> = sink.charts().iter().map(|c| c.dataset.as_str()).collect();
    assert_eq!(datasets, vec!["alpha", "zeta"]);
}

#[test]
fn test_multiple_metrics_per_dataset() {
    let generator = ReportGenerator::new(
        ReportConfig::default().with_metrics(vec![Metric::TimeMs, Metric::MemMb]),
    );

    let mut sink = RecordingSink::new();
    let summary = generator.generate(&table(SCENARIO), &mut sink).unwrap();
    assert_eq!(summary.charts_presented, 4);

    let titles: Vec<&str> = sink.charts().iter().map(|c| c.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Runtime Comparison (setA)",
            "Memory Comparison (setA)",
            "Runtime Comparison (setB)",
            "Memory Comparison (setB)",
        ]
    );
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_render_error_after_earlier_datasets_presented() {
    let data = "\
t1,quick,setA,100,5.0,1.0,100
t2,quick,setB,100,N/A,1.0,100
t3,quick,setC,100,7.0,1.0,100
";
    let mut sink = RecordingSink::new();
    let err = ReportGenerator::default()
        .generate(&table(data), &mut sink)
        .unwrap_err();

    assert!(matches!(err, Error::Render { ref dataset, .. } if dataset == "setB"));
    assert_eq!(sink.charts().len(), 1);
    assert_eq!(sink.charts()[0].dataset, "setA");
    assert!(!sink.is_finished());
}

#[test]
fn test_skip_policy_continues() {
    let data = "\
t1,quick,setA,100,5.0,1.0,100
t2,quick,setB,100,N/A,1.0,100
t3,quick,setC,100,7.0,1.0,100
";
    let generator =
        ReportGenerator::new(ReportConfig::default().with_failure_policy(FailurePolicy::Skip));

    let mut sink = RecordingSink::new();
    let summary = generator.generate(&table(data), &mut sink).unwrap();

    assert_eq!(summary.charts_presented, 2);
    assert_eq!(summary.skipped.len(), 1);
    assert_eq!(summary.skipped[0].dataset, "setB");
    assert_eq!(summary.skipped[0].metric, Metric::TimeMs);
    assert!(summary.skipped[0].reason.contains("N/A"));

    let datasets: Vec<&str> = sink.charts().iter().map(|c| c.dataset.as_str()).collect();
    assert_eq!(datasets, vec!["setA", "setC"]);
}

#[test]
fn test_sink_error_is_fatal() {
    let mut sink = FailingSink {
        fail_at: 2,
        presented: 0,
    };
    let err = ReportGenerator::new(ReportConfig::default().with_failure_policy(FailurePolicy::Skip))
        .generate(&table(SCENARIO), &mut sink)
        .unwrap_err();

    assert!(matches!(err, Error::Sink(_)));
    assert_eq!(sink.presented, 2);
}

#[test]
fn test_charts_fails_on_bad_value() {
    let data = "t1,quick,setA,100,fast,1.0,100\n";
    let generator =
        ReportGenerator::new(ReportConfig::default().with_failure_policy(FailurePolicy::Skip));
    assert!(generator.charts(&table(data)).is_err());
}

// ============================================================================
// generate_reports
// ============================================================================

#[test]
fn test_generate_reports_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(SCENARIO.as_bytes()).unwrap();

    let mut sink = RecordingSink::new();
    let summary = generate_reports(file.path(), &mut sink).unwrap();
    assert_eq!(summary.charts_presented, 2);
}

#[test]
fn test_generate_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut sink = RecordingSink::new();

    let err = generate_reports(dir.path().join("sort_results.csv"), &mut sink).unwrap_err();
    assert!(matches!(err, Error::FileAccess { .. }));
    assert!(sink.charts().is_empty());
}

#[test]
fn test_generate_reports_schema_error_produces_nothing() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"t1,quick,setA,100,5.0,1.0,100\nt2,merge,setA\n").unwrap();

    let mut sink = RecordingSink::new();
    let err = generate_reports(file.path(), &mut sink).unwrap_err();
    assert!(matches!(err, Error::Schema { line: 2, .. }));
    assert!(sink.charts().is_empty());
}
