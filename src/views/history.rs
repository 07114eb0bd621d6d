//! History - Recent uploads list

use std::fmt::Write;

use crate::state::{HistoryState, LoadState};
use crate::utils::format::{format_datetime, truncate};

pub const NO_HISTORY: &str = "No upload history available";

const FILENAME_WIDTH: usize = 32;

pub fn render_history(history: &HistoryState) -> String {
    match history.load_state() {
        LoadState::Loading if history.is_empty() => return "Loading history...\n".to_string(),
        LoadState::Error(message) if history.is_empty() => {
            return format!("Failed to load history: {message}\n");
        }
        _ => {}
    }
    if history.is_empty() {
        return format!("{NO_HISTORY}\n");
    }

    let mut out = String::from("Upload History (Last 5)\n");
    let _ = writeln!(
        out,
        "{:>5}  {:<FILENAME_WIDTH$}  {:<19}  {}",
        "ID", "Filename", "Uploaded", "Records"
    );
    for entry in history.entries() {
        let _ = writeln!(
            out,
            "{:>5}  {:<FILENAME_WIDTH$}  {:<19}  {} records",
            entry.id,
            truncate(&entry.filename, FILENAME_WIDTH),
            format_datetime(&entry.upload_date),
            entry.row_count,
        );
    }
    if let LoadState::Error(message) = history.load_state() {
        let _ = writeln!(out, "Refresh failed: {message}");
    }
    out
}
