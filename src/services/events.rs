//! Service Events
//!
//! Results of backend calls, delivered to the state layer. Every event carries
//! the `RequestId` it answers so stale responses can be recognized.

use std::path::PathBuf;
use std::sync::Arc;

use crate::domain::{Dataset, DatasetId, HistoryEntry};
use crate::error::ErrorKind;

/// Monotonically increasing token issued per backend call
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct RequestId(pub u64);

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Which backend operation a request performs
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RequestKind {
    /// `GET /summary/`
    LatestSummary,
    /// `POST /upload/`
    Upload,
    /// `GET /history/`
    History,
    /// `GET /dataset/{id}/`
    Dataset(DatasetId),
    /// `GET /report/{id}/`
    Report(DatasetId),
}

/// Requests on the same channel supersede each other
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RequestChannel {
    /// Anything that replaces the current dataset
    Dataset,
    History,
    Report,
}

impl RequestKind {
    pub fn channel(&self) -> RequestChannel {
        match self {
            RequestKind::LatestSummary | RequestKind::Upload | RequestKind::Dataset(_) => {
                RequestChannel::Dataset
            }
            RequestKind::History => RequestChannel::History,
            RequestKind::Report(_) => RequestChannel::Report,
        }
    }

    /// Task name used in runtime logs
    pub fn task_name(&self) -> &'static str {
        match self {
            RequestKind::LatestSummary => "fetch-summary",
            RequestKind::Upload => "upload",
            RequestKind::History => "fetch-history",
            RequestKind::Dataset(_) => "fetch-dataset",
            RequestKind::Report(_) => "fetch-report",
        }
    }

    /// Short description for user-facing messages
    pub fn describe(&self) -> String {
        match self {
            RequestKind::LatestSummary => "Loading latest dataset".to_string(),
            RequestKind::Upload => "Upload".to_string(),
            RequestKind::History => "Loading history".to_string(),
            RequestKind::Dataset(id) => format!("Loading dataset {id}"),
            RequestKind::Report(id) => format!("Downloading report {id}"),
        }
    }
}

/// Events emitted by the service layer
#[derive(Clone, Debug)]
pub enum ServiceEvent {
    /// A dataset arrived; `None` means the backend has nothing yet
    DatasetLoaded {
        request: RequestId,
        kind: RequestKind,
        dataset: Option<Arc<Dataset>>,
    },

    /// History snapshot, newest first
    HistoryLoaded {
        request: RequestId,
        entries: Vec<HistoryEntry>,
    },

    /// PDF report written to disk
    ReportSaved {
        request: RequestId,
        dataset: DatasetId,
        path: PathBuf,
    },

    /// Terminal failure of a request
    RequestFailed {
        request: RequestId,
        kind: RequestKind,
        error_kind: ErrorKind,
        message: Arc<str>,
    },
}

impl ServiceEvent {
    pub fn request(&self) -> RequestId {
        match self {
            ServiceEvent::DatasetLoaded { request, .. }
            | ServiceEvent::HistoryLoaded { request, .. }
            | ServiceEvent::ReportSaved { request, .. }
            | ServiceEvent::RequestFailed { request, .. } => *request,
        }
    }
}
