//! Table - Paged view over the raw equipment records
//!
//! `DataTable` pairs a row source with a `PageState`. Navigation returns a new
//! table sharing the same rows.

mod data_provider;
mod pagination;

pub use data_provider::*;
pub use pagination::*;

/// Paged rows of a provider
#[derive(Debug, Clone, Default)]
pub struct DataTable<P> {
    provider: P,
    page: PageState,
}

impl<P: DataProvider> DataTable<P> {
    /// Create a table on page 1
    pub fn new(provider: P) -> Self {
        let page = PageState::new(provider.len());
        Self { provider, page }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn page(&self) -> PageState {
        self.page
    }

    pub fn total_pages(&self) -> usize {
        self.page.total_pages()
    }

    /// Navigate to a page, clamped into range
    pub fn go_to_page(self, page: i64) -> Self {
        Self {
            page: self.page.go_to_page(page),
            ..self
        }
    }

    pub fn next_page(self) -> Self {
        Self {
            page: self.page.next(),
            ..self
        }
    }

    pub fn previous_page(self) -> Self {
        Self {
            page: self.page.previous(),
            ..self
        }
    }

    /// Rows on the current page
    pub fn visible_slice(&self) -> Vec<P::Row> {
        self.provider.rows(self.page.visible_range())
    }

    /// 1-based bounds of the visible rows, `None` when there are none
    pub fn showing(&self) -> Option<(usize, usize, usize)> {
        let range = self.page.visible_range();
        (!range.is_empty()).then(|| (range.start + 1, range.end, self.page.total_items()))
    }

    /// Swap in a new row source, always back on page 1
    pub fn replace(self, provider: P) -> Self {
        let page = self.page.reset(provider.len());
        Self { provider, page }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Dataset;
    use std::sync::Arc;
    use crate::charts::fixtures::mixed_records;

    fn table_of_25() -> DataTable<DatasetRecords> {
        DataTable::new(DatasetRecords::new(Arc::new(Dataset::from_records(mixed_records()))))
    }

    #[test]
    fn pages_through_twenty_five_records() {
        let table = table_of_25();
        assert_eq!(table.total_pages(), 3);

        let first = table.visible_slice();
        assert_eq!(first.len(), 10);
        assert_eq!(first[0].id, Some(1));
        assert_eq!(first[9].id, Some(10));
        assert_eq!(table.showing(), Some((1, 10, 25)));

        let last = table.go_to_page(3);
        let rows = last.visible_slice();
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0].id, Some(21));
        assert_eq!(rows[4].id, Some(25));
        assert_eq!(last.showing(), Some((21, 25, 25)));
    }

    #[test]
    fn next_at_boundary_stays_put() {
        let table = table_of_25().go_to_page(3).next_page().next_page();
        assert_eq!(table.page().current_page(), 3);
        let table = table.previous_page();
        assert_eq!(table.page().current_page(), 2);
    }

    #[test]
    fn replacing_rows_resets_page() {
        let table = table_of_25().go_to_page(3);
        let shorter = Dataset::from_records(mixed_records()[..4].to_vec());
        let table = table.replace(DatasetRecords::new(Arc::new(shorter)));

        assert_eq!(table.page().current_page(), 1);
        assert_eq!(table.visible_slice().len(), 4);
        assert_eq!(table.page().page_numbers(), None);
    }

    #[test]
    fn empty_table_shows_nothing() {
        let table = DataTable::new(DatasetRecords::empty());
        assert_eq!(table.total_pages(), 0);
        assert!(table.visible_slice().is_empty());
        assert_eq!(table.showing(), None);
    }
}
