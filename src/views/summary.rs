//! Summary - Headline statistics of the current dataset

use std::fmt::Write;

use crate::domain::{Dataset, Parameter};
use crate::utils::format::{format_datetime, format_stat};

pub const NO_SUMMARY: &str = "No data available. Upload a CSV file to see statistics.";

/// Render the summary cards
///
/// Backend-computed stats are preferred; without them the count falls back to
/// the record list and averages show "N/A".
pub fn render_summary(dataset: Option<&Dataset>) -> String {
    let Some(dataset) = dataset.filter(|d| !d.is_empty() || d.summary_stats.is_some()) else {
        return format!("{NO_SUMMARY}\n");
    };

    let stats = dataset.summary_stats.clone().unwrap_or_default();
    let total = if dataset.summary_stats.is_some() {
        stats.total_count
    } else {
        dataset.records().len() as u64
    };

    let mut out = String::new();
    let _ = writeln!(out, "Dataset: {}", dataset.display_name());
    if let Some(date) = &dataset.upload_date {
        let _ = writeln!(out, "Uploaded: {}", format_datetime(date));
    }
    let _ = writeln!(out, "Total Equipment: {total}");
    for parameter in Parameter::ALL {
        let _ = writeln!(
            out,
            "Avg {} ({}): {}",
            parameter.label(),
            parameter.unit(),
            format_stat(stats.average(parameter))
        );
    }
    if !stats.equipment_types.is_empty() {
        let types: Vec<String> = stats
            .equipment_types
            .iter()
            .map(|(kind, count)| format!("{kind}: {count}"))
            .collect();
        let _ = writeln!(out, "Types: {}", types.join(", "));
    }
    out
}
