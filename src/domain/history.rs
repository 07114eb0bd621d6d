//! History - Metadata of past uploads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::HISTORY_LIMIT;
use crate::domain::dataset::{DatasetId, SummaryStats};
use crate::domain::timestamp;

/// A previously uploaded dataset, without its records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: DatasetId,
    pub filename: String,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub upload_date: DateTime<Utc>,
    pub row_count: u64,
    #[serde(default)]
    pub summary_stats: Option<SummaryStats>,
}

/// Keep the most recent entries, newest first as delivered by the backend
pub fn bounded_history(mut entries: Vec<HistoryEntry>) -> Vec<HistoryEntry> {
    if entries.len() > HISTORY_LIMIT {
        tracing::warn!(
            received = entries.len(),
            limit = HISTORY_LIMIT,
            "Backend returned more history entries than expected, truncating"
        );
        entries.truncate(HISTORY_LIMIT);
    }
    entries
}
