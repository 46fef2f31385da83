//! Excel export functionality

use crate::error::{Error, Result};
use crate::report::RuntimeChart;
use crate::visualization::ChartSink;
use rust_xlsxwriter::*;
use std::fs;
use std::path::PathBuf;

/// File name written by [`ExcelSink`]
pub const WORKBOOK_FILE_NAME: &str = "charts.xlsx";

const MAX_SHEET_NAME: usize = 31;

/// One worksheet per chart, each holding its series and a native line chart
pub struct ExcelSink {
    output_dir: PathBuf,
    workbook: Workbook,
    sheets: Vec<String>,
}

impl ExcelSink {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            workbook: Workbook::new(),
            sheets: Vec::new(),
        }
    }

    /// Path of the workbook
    pub fn path(&self) -> PathBuf {
        self.output_dir.join(WORKBOOK_FILE_NAME)
    }

    /// Worksheet names added so far
    pub fn sheets(&self) -> &[String] {
        &self.sheets
    }

    fn write_chart(
        sheet: &mut Worksheet,
        name: &str,
        chart: &RuntimeChart,
    ) -> std::result::Result<(), XlsxError> {
        let bold = Format::new().set_bold();
        let number_format = Format::new().set_num_format("0.00");

        // Headers
        sheet.write_with_format(0, 0, chart.x_label.as_str(), &bold)?;
        sheet.write_with_format(0, 1, chart.y_label.as_str(), &bold)?;

        // Data rows
        for (idx, point) in chart.points.iter().enumerate() {
            let row = (idx + 1) as u32;
            sheet.write(row, 0, point.algorithm.as_str())?;
            sheet.write_with_format(row, 1, point.value, &number_format)?;
        }

        sheet.set_column_width(0, 20)?;
        sheet.set_column_width(1, 15)?;

        let last_row = chart.points.len() as u32;
        let mut line = Chart::new(ChartType::Line);
        line.add_series()
            .set_categories((name, 1, 0, last_row, 0))
            .set_values((name, 1, 1, last_row, 1))
            .set_name(chart.dataset.as_str());
        line.title().set_name(chart.title.as_str());
        line.x_axis().set_name(chart.x_label.as_str());
        line.y_axis()
            .set_name(chart.y_label.as_str())
            .set_major_gridlines(chart.grid);
        line.legend().set_hidden();

        sheet.insert_chart(1, 3, &line)?;
        Ok(())
    }
}

impl ChartSink for ExcelSink {
    fn present(&mut self, chart: &RuntimeChart) -> Result<()> {
        let name = sheet_name(self.sheets.len() + 1, &chart.dataset);

        let sheet = self.workbook.add_worksheet();
        sheet.set_name(name.as_str()).map_err(Error::sink)?;
        Self::write_chart(sheet, &name, chart).map_err(Error::sink)?;

        self.sheets.push(name);
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.sheets.is_empty() {
            tracing::debug!("No charts; workbook not written");
            return Ok(());
        }

        fs::create_dir_all(&self.output_dir)?;
        let path = self.path();
        self.workbook.save(&path).map_err(Error::sink)?;
        tracing::debug!("Wrote {} worksheets to {}", self.sheets.len(), path.display());
        Ok(())
    }
}

/// Worksheet name: `<NN>_<dataset>`, Excel-safe and at most 31 characters
fn sheet_name(index: usize, dataset: &str) -> String {
    let cleaned: String = dataset
        .chars()
        .map(|c| match c {
            '[' | ']' | ':' | '*' | '?' | '/' | '\\' | '\'' => '_',
            c if c.is_whitespace() => '_',
            c => c,
        })
        .collect();
    format!("{:02}_{}", index, cleaned)
        .chars()
        .take(MAX_SHEET_NAME)
        .collect()
}
