//! Data exports of chart series

pub mod csv_export;
pub mod excel;
pub mod json_export;

pub use csv_export::CsvSink;
pub use excel::ExcelSink;
pub use json_export::JsonSink;
