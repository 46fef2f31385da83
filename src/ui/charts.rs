//! Chart widgets for the TUI

use crate::report::RuntimeChart;
use ratatui::{
    style::{Color, Modifier, Style},
    symbols,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
};

/// Series of a chart in terminal coordinates: x is the point index
pub fn series_data(chart: &RuntimeChart) -> Vec<(f64, f64)> {
    chart
        .points
        .iter()
        .enumerate()
        .map(|(idx, p)| (idx as f64, p.value))
        .collect()
}

/// Create a line chart widget with one x label per point
pub fn create_line_chart<'a>(chart: &'a RuntimeChart, data: &'a [(f64, f64)]) -> Chart<'a> {
    let mut x_labels: Vec<Span> = chart
        .points
        .iter()
        .map(|p| Span::raw(p.algorithm.as_str()))
        .collect();
    // Axis labels are spread evenly across the bounds and need at least two
    let x_max = if x_labels.len() > 1 {
        (x_labels.len() - 1) as f64
    } else {
        x_labels.push(Span::raw(""));
        1.0
    };

    let (y_min, y_max) = chart.value_range();
    let y_labels: Vec<Span> = [y_min, (y_min + y_max) / 2.0, y_max]
        .iter()
        .map(|v| Span::styled(format!("{:.1}", v), Style::default().fg(Color::Gray)))
        .collect();

    let dataset = Dataset::default()
        .name(chart.dataset.as_str())
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Cyan))
        .data(data);

    let axis_style = Style::default().fg(Color::Gray);

    Chart::new(vec![dataset])
        .block(
            Block::default()
                .title(Span::styled(
                    chart.title.as_str(),
                    Style::default().add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Blue)),
        )
        .x_axis(
            Axis::default()
                .title(chart.x_label.as_str())
                .style(axis_style)
                .bounds([0.0, x_max])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title(chart.y_label.as_str())
                .style(axis_style)
                .bounds([y_min, y_max])
                .labels(y_labels),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::visualization::tests::sample_chart;

    #[test]
    fn test_series_data_uses_point_index() {
        let chart = sample_chart("setA");
        assert_eq!(series_data(&chart), vec![(0.0, 5.0), (1.0, 6.0)]);
    }
}
