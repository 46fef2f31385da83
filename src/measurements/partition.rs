//! Grouping rows by dataset

use super::{MeasurementRecord, MeasurementTable};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Order in which distinct dataset values are enumerated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DatasetOrder {
    /// Order of first appearance in the file
    #[default]
    FirstSeen,
    /// Lexicographic
    Sorted,
}

/// Rows sharing one dataset value, in file order
#[derive(Debug, Clone)]
pub struct DatasetPartition<'a> {
    dataset: &'a str,
    rows: Vec<&'a MeasurementRecord>,
}

impl<'a> DatasetPartition<'a> {
    pub fn dataset(&self) -> &'a str {
        self.dataset
    }

    pub fn rows(&self) -> &[&'a MeasurementRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl MeasurementTable {
    /// Distinct dataset values
    pub fn datasets(&self, order: DatasetOrder) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut datasets: Vec<&str> = self
            .iter()
            .map(|r| r.dataset.as_str())
            .filter(|d| seen.insert(*d))
            .collect();

        if order == DatasetOrder::Sorted {
            datasets.sort_unstable();
        }
        datasets
    }

    /// Rows whose dataset equals `dataset`
    pub fn partition<'a>(&'a self, dataset: &'a str) -> DatasetPartition<'a> {
        DatasetPartition {
            dataset,
            rows: self.iter().filter(|r| r.dataset == dataset).collect(),
        }
    }

    /// One partition per distinct dataset value
    pub fn partitions(&self, order: DatasetOrder) -> Vec<DatasetPartition<'_>> {
        self.datasets(order)
            .into_iter()
            .map(|d| self.partition(d))
            .collect()
    }
}
