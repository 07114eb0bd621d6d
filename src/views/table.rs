//! Table - Current page of equipment records

use std::fmt::Write;

use crate::table::{DataProvider, DataTable, DatasetRecords, PageState};
use crate::utils::format::{format_measurement, truncate};

pub const NO_TABLE_DATA: &str = "No equipment data available";

const COLUMNS: [&str; 5] = [
    "Equipment Name",
    "Type",
    "Flowrate (L/min)",
    "Pressure (bar)",
    "Temperature (°C)",
];

const NAME_WIDTH: usize = 24;
const TYPE_WIDTH: usize = 16;
const VALUE_WIDTH: usize = 18;

/// Render the visible page with its range line and page controls
pub fn render_table(table: &DataTable<DatasetRecords>) -> String {
    if table.provider().is_empty() {
        return format!("{NO_TABLE_DATA}\n");
    }

    let mut out = String::new();
    if let Some((start, end, total)) = table.showing() {
        let _ = writeln!(out, "Showing {start}-{end} of {total} items");
    }
    let _ = writeln!(
        out,
        "{:<NAME_WIDTH$} {:<TYPE_WIDTH$} {:>VALUE_WIDTH$} {:>VALUE_WIDTH$} {:>VALUE_WIDTH$}",
        COLUMNS[0], COLUMNS[1], COLUMNS[2], COLUMNS[3], COLUMNS[4]
    );
    for record in table.visible_slice() {
        let _ = writeln!(
            out,
            "{:<NAME_WIDTH$} {:<TYPE_WIDTH$} {:>VALUE_WIDTH$} {:>VALUE_WIDTH$} {:>VALUE_WIDTH$}",
            truncate(&record.equipment_name, NAME_WIDTH),
            truncate(&record.equipment_type, TYPE_WIDTH),
            format_measurement(record.flowrate),
            format_measurement(record.pressure),
            format_measurement(record.temperature),
        );
    }

    if let Some(pages) = table.page().page_numbers() {
        out.push_str(&render_page_controls(table.page(), &pages));
    }
    out
}

/// `< Previous  1 [2] 3  Next >` with disabled ends omitted
fn render_page_controls(page: PageState, pages: &[usize]) -> String {
    let current = page.current_page();
    let numbers: Vec<String> = pages
        .iter()
        .map(|&p| {
            if p == current {
                format!("[{p}]")
            } else {
                p.to_string()
            }
        })
        .collect();

    let previous = if page.has_previous() { "< Previous" } else { "" };
    let next = if page.has_next() { "Next >" } else { "" };
    let line = [previous, numbers.join(" ").as_str(), next]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("  ");
    format!("{line}\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::fixtures::mixed_records;
    use crate::domain::Dataset;
    use std::sync::Arc;

    fn table(count: usize) -> DataTable<DatasetRecords> {
        let records = mixed_records().into_iter().take(count).collect();
        DataTable::new(DatasetRecords::new(Arc::new(Dataset::from_records(records))))
    }

    #[test]
    fn placeholder_for_empty_table() {
        let text = render_table(&DataTable::new(DatasetRecords::empty()));
        assert_eq!(text.trim_end(), NO_TABLE_DATA);
    }

    #[test]
    fn first_page_of_twenty_five() {
        let text = render_table(&table(25));
        assert!(text.starts_with("Showing 1-10 of 25 items\nEquipment Name"));
        assert!(text.contains("[1] 2 3  Next >"));
        assert!(!text.contains("Previous"));
        // Range, header, ten rows, controls
        assert_eq!(text.lines().count(), 13);
    }

    #[test]
    fn last_page_shows_remainder() {
        let text = render_table(&table(25).go_to_page(99));
        assert!(text.contains("Showing 21-25 of 25 items"));
        assert!(text.contains("< Previous  1 2 [3]"));
        assert!(!text.contains("Next"));
        assert!(text.contains("Pump-21"));
    }

    #[test]
    fn single_page_hides_controls() {
        let text = render_table(&table(7));
        assert!(text.contains("Showing 1-7 of 7 items"));
        assert!(!text.contains("[1]"));
    }

    #[test]
    fn measurements_use_one_decimal() {
        let text = render_table(&table(1));
        assert!(text.contains("100.0"));
        assert!(text.contains("10.0"));
        assert!(text.contains("120.0"));
    }
}
