//! DashboardState - Top-level application state
//!
//! A snapshot value. `reduce` consumes the current snapshot and an `Action`
//! and returns the next snapshot; nothing is shared mutably between them.

use std::sync::Arc;

use tracing::{debug, info};

use crate::charts::{ChartData, ChartSet};
use crate::domain::{Dataset, UploadRejection};
use crate::services::{RequestChannel, RequestId, RequestKind, ServiceEvent};
use crate::state::history_state::HistoryState;
use crate::state::notice_state::{NoticeLevel, NoticeLog};
use crate::table::{DataTable, DatasetRecords};

/// Top-level views
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum View {
    /// Summary, charts and table of the current dataset
    #[default]
    Overview,
    /// File picker
    Upload,
    /// Past uploads
    History,
}

impl View {
    pub fn title(&self) -> &'static str {
        match self {
            View::Overview => "Overview",
            View::Upload => "Upload CSV",
            View::History => "Upload History",
        }
    }
}

/// Every state transition
#[derive(Debug, Clone)]
pub enum Action {
    /// Switch the active view
    ShowView(View),
    /// A backend request was issued
    Requested { request: RequestId, kind: RequestKind },
    /// A backend request finished
    Service(ServiceEvent),
    /// A file failed client-side validation
    UploadRejected(UploadRejection),
    GoToPage(i64),
    NextPage,
    PreviousPage,
}

impl From<ServiceEvent> for Action {
    fn from(event: ServiceEvent) -> Self {
        Action::Service(event)
    }
}

/// Snapshot of everything the dashboard displays
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    view: View,
    dataset: Option<Arc<Dataset>>,
    table: DataTable<DatasetRecords>,
    history: HistoryState,
    /// Latest request that will replace the dataset
    pending_dataset: Option<(RequestId, RequestKind)>,
    /// Latest history request
    pending_history: Option<RequestId>,
    /// Report downloads in flight (they never supersede each other)
    pending_reports: Vec<RequestId>,
    notices: NoticeLog,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Getters ====================

    pub fn view(&self) -> View {
        self.view
    }

    pub fn dataset(&self) -> Option<&Arc<Dataset>> {
        self.dataset.as_ref()
    }

    pub fn table(&self) -> &DataTable<DatasetRecords> {
        &self.table
    }

    pub fn history(&self) -> &HistoryState {
        &self.history
    }

    pub fn notices(&self) -> &NoticeLog {
        &self.notices
    }

    /// A dataset-replacing request is in flight
    pub fn is_loading(&self) -> bool {
        self.pending_dataset.is_some()
    }

    /// Whether a request is still awaited
    pub fn is_pending(&self, request: RequestId) -> bool {
        self.pending_dataset.map(|(id, _)| id) == Some(request)
            || self.pending_history == Some(request)
            || self.pending_reports.contains(&request)
    }

    /// Chart inputs derived on demand from the current dataset
    pub fn charts(&self) -> ChartData<ChartSet> {
        ChartSet::from_dataset(self.dataset.as_deref())
    }

    // ==================== Reducer ====================

    /// Apply one action, producing the next state
    pub fn reduce(self, action: Action) -> Self {
        match action {
            Action::ShowView(view) => Self { view, ..self },
            Action::Requested { request, kind } => self.on_requested(request, kind),
            Action::Service(event) => self.on_service_event(event),
            Action::UploadRejected(rejection) => {
                let mut next = self;
                next.notices.push(NoticeLevel::Error, rejection.to_string());
                next
            }
            Action::GoToPage(page) => Self {
                table: self.table.clone().go_to_page(page),
                ..self
            },
            Action::NextPage => Self {
                table: self.table.clone().next_page(),
                ..self
            },
            Action::PreviousPage => Self {
                table: self.table.clone().previous_page(),
                ..self
            },
        }
    }

    fn on_requested(self, request: RequestId, kind: RequestKind) -> Self {
        let mut next = self;
        match kind.channel() {
            RequestChannel::Dataset => {
                if let Some((superseded, _)) = next.pending_dataset {
                    debug!(%superseded, %request, "Dataset request superseded");
                }
                next.pending_dataset = Some((request, kind));
            }
            RequestChannel::History => {
                next.pending_history = Some(request);
                next.history = next.history.loading();
            }
            RequestChannel::Report => next.pending_reports.push(request),
        }
        next
    }

    fn on_service_event(self, event: ServiceEvent) -> Self {
        let mut next = self;
        match event {
            ServiceEvent::DatasetLoaded {
                request,
                kind,
                dataset,
            } => {
                if !next.take_pending_dataset(request) {
                    return next;
                }
                if dataset.is_none() {
                    next.notices
                        .push(NoticeLevel::Info, "No datasets uploaded yet");
                }
                next.replace_dataset(dataset);
                match kind {
                    RequestKind::Upload => {
                        next.notices
                            .push(NoticeLevel::Success, "File uploaded successfully!");
                        next.view = View::Overview;
                    }
                    RequestKind::Dataset(_) => next.view = View::Overview,
                    _ => {}
                }
            }
            ServiceEvent::HistoryLoaded { request, entries } => {
                if next.pending_history != Some(request) {
                    debug!(%request, "Discarding stale history response");
                    return next;
                }
                next.pending_history = None;
                next.history = HistoryState::loaded(entries);
            }
            ServiceEvent::ReportSaved {
                request,
                dataset,
                path,
            } => {
                next.pending_reports.retain(|r| *r != request);
                next.notices.push(
                    NoticeLevel::Success,
                    format!("Report for dataset {dataset} saved to {}", path.display()),
                );
            }
            ServiceEvent::RequestFailed {
                request,
                kind,
                message,
                ..
            } => match kind.channel() {
                RequestChannel::Dataset => {
                    if !next.take_pending_dataset(request) {
                        return next;
                    }
                    // The previous dataset stays on screen
                    next.notices.push(
                        NoticeLevel::Error,
                        format!("{} failed: {message}", kind.describe()),
                    );
                }
                RequestChannel::History => {
                    if next.pending_history != Some(request) {
                        debug!(%request, "Discarding stale history failure");
                        return next;
                    }
                    next.pending_history = None;
                    next.history = next.history.failed(message.clone());
                    next.notices.push(
                        NoticeLevel::Error,
                        format!("{} failed: {message}", kind.describe()),
                    );
                }
                RequestChannel::Report => {
                    next.pending_reports.retain(|r| *r != request);
                    next.notices.push(
                        NoticeLevel::Error,
                        format!("Failed to download report: {message}"),
                    );
                }
            },
        }
        next
    }

    /// Clear the pending dataset request if `request` is it
    fn take_pending_dataset(&mut self, request: RequestId) -> bool {
        match self.pending_dataset {
            Some((latest, _)) if latest == request => {
                self.pending_dataset = None;
                true
            }
            _ => {
                debug!(%request, "Discarding stale dataset response");
                false
            }
        }
    }

    /// Swap in a new dataset; the table always restarts at page 1
    fn replace_dataset(&mut self, dataset: Option<Arc<Dataset>>) {
        match &dataset {
            Some(d) => {
                info!(dataset = %d.display_name(), records = d.records().len(), "Dataset replaced");
            }
            None => info!("No dataset available"),
        }
        let records = dataset.clone().map(DatasetRecords::new).unwrap_or_else(DatasetRecords::empty);
        self.table = std::mem::take(&mut self.table).replace(records);
        self.dataset = dataset;
    }
}
