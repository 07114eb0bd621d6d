//! DataProvider Trait
//!
//! Abstraction over row sources so the table can page any ordered list.

use std::sync::Arc;

use crate::domain::{Dataset, EquipmentRecord};

/// Trait for providing rows to the DataTable
pub trait DataProvider: Send + Sync + 'static {
    type Row: Clone + Send + Sync + 'static;

    /// Get the total number of rows
    fn len(&self) -> usize;

    /// Check if empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get a row by index
    fn row(&self, index: usize) -> Option<Self::Row>;

    /// Get multiple rows in a range, clipped to the available rows
    fn rows(&self, range: std::ops::Range<usize>) -> Vec<Self::Row> {
        range.filter_map(|i| self.row(i)).collect()
    }
}

/// Rows of a shared dataset snapshot, without copying the record list
#[derive(Debug, Clone, Default)]
pub struct DatasetRecords {
    dataset: Option<Arc<Dataset>>,
}

impl DatasetRecords {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self {
            dataset: Some(dataset),
        }
    }

    /// A provider with no rows
    pub fn empty() -> Self {
        Self::default()
    }

    fn records(&self) -> &[EquipmentRecord] {
        self.dataset.as_deref().map(Dataset::records).unwrap_or(&[])
    }
}

impl DataProvider for DatasetRecords {
    type Row = EquipmentRecord;

    fn len(&self) -> usize {
        self.records().len()
    }

    fn row(&self, index: usize) -> Option<Self::Row> {
        self.records().get(index).cloned()
    }

    fn rows(&self, range: std::ops::Range<usize>) -> Vec<Self::Row> {
        let records = self.records();
        let end = range.end.min(records.len());
        let start = range.start.min(end);
        records[start..end].to_vec()
    }
}
