//! Service Hub
//!
//! Central entry point for backend calls. Each call is tagged with a fresh
//! `RequestId`, runs on the shared tokio runtime, and reports its outcome as
//! a `ServiceEvent` on a single channel.

use std::future::Future;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crossbeam_channel::{Receiver, Sender};
use tracing::{info, warn};

use crate::domain::{Dataset, DatasetId, HistoryEntry, UploadCandidate, UploadFile};
use crate::error::Result;
use crate::services::api::{ApiClient, Backend};
use crate::services::events::{RequestId, RequestKind, ServiceEvent};
use crate::services::report::save_report;
use crate::services::runtime::spawn_named_in_tokio;

enum Outcome {
    Dataset(Option<Dataset>),
    History(Vec<HistoryEntry>),
    Report { dataset: DatasetId, path: PathBuf },
}

impl Outcome {
    fn into_event(self, request: RequestId, kind: RequestKind) -> ServiceEvent {
        match self {
            Outcome::Dataset(dataset) => ServiceEvent::DatasetLoaded {
                request,
                kind,
                dataset: dataset.map(Arc::new),
            },
            Outcome::History(entries) => ServiceEvent::HistoryLoaded { request, entries },
            Outcome::Report { dataset, path } => ServiceEvent::ReportSaved {
                request,
                dataset,
                path,
            },
        }
    }
}

/// Re-check a dataset at the boundary, whatever backend produced it
fn checked(dataset: Option<Dataset>) -> Result<Outcome> {
    if let Some(dataset) = &dataset {
        dataset.validate()?;
    }
    Ok(Outcome::Dataset(dataset))
}

/// Central hub for backend requests
pub struct ServiceHub<B = ApiClient> {
    backend: Arc<B>,
    /// Where downloaded reports are written
    report_dir: PathBuf,
    /// Last issued request number
    last_request: Arc<AtomicU64>,
    /// Event sender (for spawned tasks)
    tx: Sender<ServiceEvent>,
    /// Event receiver (for the state layer)
    rx: Receiver<ServiceEvent>,
}

impl<B: Backend> ServiceHub<B> {
    /// Create a hub over a backend
    pub fn new(backend: B, report_dir: impl Into<PathBuf>) -> Self {
        let (tx, rx) = crossbeam_channel::unbounded();
        Self {
            backend: Arc::new(backend),
            report_dir: report_dir.into(),
            last_request: Arc::new(AtomicU64::new(0)),
            tx,
            rx,
        }
    }

    /// Get the event receiver for the state layer
    pub fn events(&self) -> Receiver<ServiceEvent> {
        self.rx.clone()
    }

    pub fn report_dir(&self) -> &Path {
        &self.report_dir
    }

    fn issue(&self) -> RequestId {
        RequestId(self.last_request.fetch_add(1, Ordering::SeqCst) + 1)
    }

    fn dispatch<F, Fut>(&self, kind: RequestKind, work: F) -> RequestId
    where
        F: FnOnce(Arc<B>) -> Fut + Send + 'static,
        Fut: Future<Output = Result<Outcome>> + Send + 'static,
    {
        let request = self.issue();
        let backend = self.backend.clone();
        let tx = self.tx.clone();
        info!(%request, ?kind, "Dispatching backend request");

        spawn_named_in_tokio(kind.task_name(), async move {
            let event = match work(backend).await {
                Ok(outcome) => outcome.into_event(request, kind),
                Err(e) => {
                    warn!(%request, ?kind, error = %e, "Backend request failed");
                    ServiceEvent::RequestFailed {
                        request,
                        kind,
                        error_kind: e.kind(),
                        message: e.to_string().into(),
                    }
                }
            };
            let _ = tx.send(event);
        });

        request
    }

    // ==================== Dataset Operations ====================

    /// Fetch the most recent dataset
    pub fn load_latest(&self) -> RequestId {
        self.dispatch(RequestKind::LatestSummary, |backend| async move {
            checked(backend.fetch_summary().await?)
        })
    }

    /// Validate a local file and upload it
    ///
    /// Rejected files return `Error::UploadRejected` immediately and no
    /// request is issued.
    pub fn upload(&self, path: impl AsRef<Path>) -> Result<RequestId> {
        let file = UploadCandidate::from_path(path)?.read()?;
        Ok(self.upload_file(file))
    }

    /// Upload an already validated file
    pub fn upload_file(&self, file: UploadFile) -> RequestId {
        self.dispatch(RequestKind::Upload, |backend| async move {
            checked(Some(backend.upload(file).await?))
        })
    }

    /// Fetch a past dataset by id
    pub fn open_dataset(&self, id: DatasetId) -> RequestId {
        self.dispatch(RequestKind::Dataset(id), move |backend| async move {
            checked(Some(backend.fetch_dataset(id).await?))
        })
    }

    // ==================== History & Reports ====================

    pub fn load_history(&self) -> RequestId {
        self.dispatch(RequestKind::History, |backend| async move {
            Ok(Outcome::History(backend.fetch_history().await?))
        })
    }

    /// Fetch a PDF report and save it into the report directory
    pub fn download_report(&self, id: DatasetId) -> RequestId {
        let dir = self.report_dir.clone();
        self.dispatch(RequestKind::Report(id), move |backend| async move {
            let bytes = backend.fetch_report(id).await?;
            let path = save_report(&dir, id, &bytes)?;
            Ok(Outcome::Report { dataset: id, path })
        })
    }
}

impl<B> Clone for ServiceHub<B> {
    fn clone(&self) -> Self {
        Self {
            backend: self.backend.clone(),
            report_dir: self.report_dir.clone(),
            last_request: self.last_request.clone(),
            tx: self.tx.clone(),
            rx: self.rx.clone(),
        }
    }
}

impl<B> std::fmt::Debug for ServiceHub<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceHub")
            .field("report_dir", &self.report_dir)
            .field("last_request", &self.last_request.load(Ordering::SeqCst))
            .finish()
    }
}
