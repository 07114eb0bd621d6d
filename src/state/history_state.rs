//! HistoryState - Snapshot of past uploads

use std::sync::Arc;

use crate::domain::HistoryEntry;

/// Loading status of the history list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    /// Not loading
    #[default]
    Idle,
    /// Currently loading
    Loading,
    /// Successfully loaded
    Loaded,
    /// Failed to load
    Error(Arc<str>),
}

impl LoadState {
    /// Check if currently loading
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Read-only history snapshot, replaced on each fetch
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoryState {
    entries: Vec<HistoryEntry>,
    load_state: LoadState,
}

impl HistoryState {
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn loading(self) -> Self {
        Self {
            load_state: LoadState::Loading,
            ..self
        }
    }

    pub(crate) fn loaded(entries: Vec<HistoryEntry>) -> Self {
        Self {
            entries,
            load_state: LoadState::Loaded,
        }
    }

    /// Keep the previous snapshot, remember the failure
    pub(crate) fn failed(self, message: Arc<str>) -> Self {
        Self {
            load_state: LoadState::Error(message),
            ..self
        }
    }
}
