//! Application - Session loop and command dispatch
//!
//! A `Session` owns the service hub and the current `DashboardState`. Each
//! command issues backend requests, then drains service events through the
//! reducer until the awaited response arrives.

use std::path::Path;

use crossbeam_channel::Receiver;
use tracing::{debug, info};

use crate::app::cli::{Cli, Command};
use crate::connection::DashboardConfig;
use crate::domain::DatasetId;
use crate::error::{Error, Result};
use crate::services::{ApiClient, Backend, RequestId, RequestKind, ServiceEvent, ServiceHub};
use crate::state::{Action, DashboardState, View};
use crate::views;

/// One interactive session against a backend
pub struct Session<B: Backend = ApiClient> {
    hub: ServiceHub<B>,
    events: Receiver<ServiceEvent>,
    state: DashboardState,
    /// Last notice id already shown
    shown_notice: u64,
}

impl<B: Backend> Session<B> {
    pub fn new(hub: ServiceHub<B>) -> Self {
        let events = hub.events();
        Self {
            hub,
            events,
            state: DashboardState::new(),
            shown_notice: 0,
        }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn hub(&self) -> &ServiceHub<B> {
        &self.hub
    }

    /// Run an action through the reducer
    pub fn apply(&mut self, action: Action) {
        self.state = std::mem::take(&mut self.state).reduce(action);
    }

    fn track(&mut self, kind: RequestKind, request: RequestId) -> RequestId {
        self.apply(Action::Requested { request, kind });
        request
    }

    /// Reduce incoming events until `request` is answered
    pub fn wait_for(&mut self, request: RequestId) -> Result<ServiceEvent> {
        loop {
            let event = self.events.recv().map_err(|_| Error::ChannelClosed)?;
            let answered = event.request() == request;
            debug!(event = %event.request(), awaited = %request, "Service event received");
            self.apply(event.clone().into());
            if answered {
                return Ok(event);
            }
        }
    }

    /// Wait for `request` and turn a failure event into an error
    fn finish(&mut self, request: RequestId) -> Result<ServiceEvent> {
        match self.wait_for(request)? {
            ServiceEvent::RequestFailed {
                kind,
                error_kind,
                message,
                ..
            } => Err(Error::Request {
                kind: error_kind,
                message: format!("{} failed: {message}", kind.describe()),
            }),
            event => Ok(event),
        }
    }

    fn paginate(&mut self, page: Option<i64>) {
        if let Some(page) = page {
            self.apply(Action::GoToPage(page));
        }
    }

    // ==================== Commands ====================

    pub fn load_latest(&mut self, page: Option<i64>) -> Result<String> {
        let request = self.hub.load_latest();
        self.track(RequestKind::LatestSummary, request);
        self.finish(request)?;
        self.paginate(page);
        Ok(views::render(&self.state))
    }

    /// Validate and upload a file; rejections never reach the backend
    pub fn upload(&mut self, path: &Path) -> Result<String> {
        self.apply(Action::ShowView(View::Upload));
        let request = match self.hub.upload(path) {
            Ok(request) => request,
            Err(Error::UploadRejected { source }) => {
                info!(path = %path.display(), reason = %source, "Upload rejected");
                self.apply(Action::UploadRejected(source.clone()));
                return Err(Error::UploadRejected { source });
            }
            Err(e) => return Err(e),
        };
        self.track(RequestKind::Upload, request);
        self.finish(request)?;
        Ok(views::render(&self.state))
    }

    pub fn history(&mut self) -> Result<String> {
        let request = self.hub.load_history();
        self.track(RequestKind::History, request);
        self.apply(Action::ShowView(View::History));
        self.finish(request)?;
        Ok(views::render(&self.state))
    }

    pub fn open_dataset(&mut self, id: DatasetId, page: Option<i64>) -> Result<String> {
        let request = self.hub.open_dataset(id);
        self.track(RequestKind::Dataset(id), request);
        self.finish(request)?;
        self.paginate(page);
        Ok(views::render(&self.state))
    }

    pub fn download_report(&mut self, id: DatasetId) -> Result<String> {
        let request = self.hub.download_report(id);
        self.track(RequestKind::Report(id), request);
        match self.finish(request)? {
            ServiceEvent::ReportSaved { path, .. } => Ok(format!("{}\n", path.display())),
            _ => Ok(String::new()),
        }
    }

    pub fn execute(&mut self, command: &Command) -> Result<String> {
        match command {
            Command::Overview { page } => self.load_latest(*page),
            Command::Upload { path } => self.upload(path),
            Command::History => self.history(),
            Command::Dataset { id, page } => self.open_dataset(DatasetId(*id), *page),
            Command::Report { id, .. } => self.download_report(DatasetId(*id)),
        }
    }

    /// Notices not yet shown
    pub fn take_notices(&mut self) -> String {
        let text = views::render_notices(self.state.notices(), self.shown_notice);
        if let Some(latest) = self.state.notices().latest() {
            self.shown_notice = latest.id;
        }
        text
    }
}

/// Run one CLI command against the configured backend
pub fn run_app(cli: Cli, config: DashboardConfig) -> anyhow::Result<()> {
    let command = cli.command();
    let report_dir = match &command {
        Command::Report { out: Some(dir), .. } => dir.clone(),
        _ => config.reports.resolve_dir()?,
    };

    let client = ApiClient::new(&config.backend)?;
    info!(base_url = %client.base_url(), ?command, "Starting equipment dashboard");
    let mut session = Session::new(ServiceHub::new(client, report_dir));

    let result = session.execute(&command);
    eprint!("{}", session.take_notices());
    let output = result?;
    print!("{output}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::fixtures::mixed_records;
    use crate::domain::{Dataset, EquipmentRecord, HistoryEntry, UploadFile};
    use crate::error::ErrorKind;
    use crate::state::NoticeLevel;
    use chrono::Utc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tempfile::TempDir;

    #[derive(Default)]
    struct StubBackend {
        uploads: AtomicUsize,
        empty: bool,
    }

    fn dataset(id: u64) -> Dataset {
        Dataset {
            id: Some(DatasetId(id)),
            filename: Some(format!("plant_{id}.csv")),
            ..Dataset::from_records(mixed_records())
        }
    }

    impl Backend for StubBackend {
        async fn fetch_summary(&self) -> Result<Option<Dataset>> {
            Ok((!self.empty).then(|| dataset(1)))
        }

        async fn upload(&self, file: UploadFile) -> Result<Dataset> {
            self.uploads.fetch_add(1, Ordering::SeqCst);
            if file.bytes.is_empty() {
                return Err(Error::Status {
                    status: 400,
                    message: "Missing columns: ['Type']".to_string(),
                });
            }
            Ok(Dataset {
                filename: Some(file.filename),
                ..dataset(2)
            })
        }

        async fn fetch_history(&self) -> Result<Vec<HistoryEntry>> {
            Ok(vec![HistoryEntry {
                id: DatasetId(2),
                filename: "plant_2.csv".to_string(),
                upload_date: Utc::now(),
                row_count: 25,
                summary_stats: None,
            }])
        }

        async fn fetch_dataset(&self, id: DatasetId) -> Result<Dataset> {
            if id.get() == 404 {
                return Err(Error::Status {
                    status: 404,
                    message: "Dataset not found".to_string(),
                });
            }
            Ok(Dataset::from_records(vec![EquipmentRecord::new(
                "Pump-1", "Pump", 1.0, 2.0, 3.0,
            )]))
        }

        async fn fetch_report(&self, _id: DatasetId) -> Result<Vec<u8>> {
            Ok(b"%PDF-1.4".to_vec())
        }
    }

    fn session(backend: StubBackend, dir: &TempDir) -> Session<StubBackend> {
        Session::new(ServiceHub::new(backend, dir.path()))
    }

    #[test]
    fn overview_renders_requested_page() {
        let dir = TempDir::new().expect("tempdir");
        let mut session = session(StubBackend::default(), &dir);

        let text = session.load_latest(Some(3)).expect("overview");
        assert!(text.contains("Total Equipment: 25"));
        assert!(text.contains("Showing 21-25 of 25 items"));
        assert_eq!(session.state().table().page().current_page(), 3);
    }

    #[test]
    fn overview_without_uploads() {
        let dir = TempDir::new().expect("tempdir");
        let backend = StubBackend {
            empty: true,
            ..Default::default()
        };
        let mut session = session(backend, &dir);

        let text = session.load_latest(None).expect("overview");
        assert!(text.contains(views::NO_SUMMARY));
        assert!(text.contains(views::NO_CHART_DATA));
        assert!(text.contains(views::NO_TABLE_DATA));
    }

    #[test]
    fn rejected_upload_never_reaches_backend() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("readings.xlsx");
        std::fs::write(&path, b"Equipment Name,Type\n").expect("write");
        let mut session = session(StubBackend::default(), &dir);

        let err = session.upload(&path).expect_err("rejected");
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(session.hub().events().len(), 0);
        assert!(!session.state().is_loading());
        assert!(session.take_notices().contains("Please upload a CSV file"));
    }

    #[test]
    fn upload_replaces_dataset() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("plant.csv");
        std::fs::write(&path, b"Equipment Name,Type,Flowrate,Pressure,Temperature\n")
            .expect("write");
        let mut session = session(StubBackend::default(), &dir);

        let text = session.upload(&path).expect("uploaded");
        assert_eq!(session.state().view(), View::Overview);
        assert!(text.contains("plant.csv (#2)"));
        let notices = session.take_notices();
        assert!(notices.contains("File uploaded successfully!"));
        assert!(session.take_notices().is_empty());
    }

    #[test]
    fn backend_rejection_keeps_previous_dataset() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("empty.csv");
        std::fs::write(&path, b"").expect("write");
        let mut session = session(StubBackend::default(), &dir);
        session.load_latest(None).expect("overview");

        let err = session.upload(&path).expect_err("backend error");
        assert_eq!(err.kind(), ErrorKind::Transport);
        assert!(err.to_string().contains("Missing columns"));
        assert_eq!(
            session.state().dataset().and_then(|d| d.id),
            Some(DatasetId(1))
        );
        let latest = session.state().notices().latest().expect("notice");
        assert_eq!(latest.level, NoticeLevel::Error);
    }

    #[test]
    fn dataset_not_found_is_an_error() {
        let dir = TempDir::new().expect("tempdir");
        let mut session = session(StubBackend::default(), &dir);

        let err = session
            .execute(&Command::Dataset { id: 404, page: None })
            .expect_err("not found");
        assert!(err.to_string().contains("Dataset not found"));
    }

    #[test]
    fn history_lists_entries() {
        let dir = TempDir::new().expect("tempdir");
        let mut session = session(StubBackend::default(), &dir);

        let text = session.execute(&Command::History).expect("history");
        assert_eq!(session.state().view(), View::History);
        assert!(text.contains("plant_2.csv"));
    }

    #[test]
    fn report_is_saved_under_report_dir() {
        let dir = TempDir::new().expect("tempdir");
        let mut session = session(StubBackend::default(), &dir);

        let text = session
            .execute(&Command::Report { id: 2, out: None })
            .expect("report");
        let saved = dir.path().join("equipment_report_2.pdf");
        assert_eq!(text.trim_end(), saved.display().to_string());
        assert!(saved.exists());
    }
}
