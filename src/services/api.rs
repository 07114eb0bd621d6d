//! Backend API
//!
//! The `Backend` trait is the transport seam: five remote operations returning
//! domain types. `ApiClient` implements it over HTTP with reqwest.
//!
//! | Operation      | Route              | Result                 |
//! |----------------|--------------------|------------------------|
//! | fetch_summary  | `GET /summary/`    | `Option<Dataset>`      |
//! | upload         | `POST /upload/`    | `Dataset`              |
//! | fetch_history  | `GET /history/`    | `Vec<HistoryEntry>`    |
//! | fetch_dataset  | `GET /dataset/{id}/` | `Dataset`            |
//! | fetch_report   | `GET /report/{id}/`  | PDF bytes            |

use std::future::Future;
use std::time::Duration;

use reqwest::StatusCode;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use tracing::{debug, info};

use crate::connection::BackendConfig;
use crate::domain::{Dataset, DatasetId, HistoryEntry, UploadFile, bounded_history};
use crate::error::{Error, Result};

/// Remote operations the dashboard consumes
pub trait Backend: Send + Sync + 'static {
    /// Most recent dataset, `None` when nothing has been uploaded yet
    fn fetch_summary(&self) -> impl Future<Output = Result<Option<Dataset>>> + Send;

    /// Upload a CSV and receive the dataset created from it
    fn upload(&self, file: UploadFile) -> impl Future<Output = Result<Dataset>> + Send;

    /// Up to five past uploads, newest first
    fn fetch_history(&self) -> impl Future<Output = Result<Vec<HistoryEntry>>> + Send;

    fn fetch_dataset(&self, id: DatasetId) -> impl Future<Output = Result<Dataset>> + Send;

    /// PDF report bytes
    fn fetch_report(&self, id: DatasetId) -> impl Future<Output = Result<Vec<u8>>> + Send;
}

/// HTTP client for the equipment backend
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the configured backend
    pub fn new(config: &BackendConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL of a backend route
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn get(&self, path: &str) -> Result<reqwest::Response> {
        let url = self.endpoint(path);
        debug!(%url, "GET");
        let response = self.http.get(&url).send().await?;
        ensure_success(response).await
    }
}

impl Backend for ApiClient {
    async fn fetch_summary(&self) -> Result<Option<Dataset>> {
        let url = self.endpoint("summary/");
        debug!(%url, "GET");
        let response = self.http.get(&url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            info!("Backend has no datasets yet");
            return Ok(None);
        }
        let body = ensure_success(response).await?.bytes().await?;
        decode_dataset(&body).map(Some)
    }

    async fn upload(&self, file: UploadFile) -> Result<Dataset> {
        let url = self.endpoint("upload/");
        info!(%url, filename = %file.filename, size = file.size(), "Uploading CSV");

        let part = Part::bytes(file.bytes)
            .file_name(file.filename)
            .mime_str("text/csv")?;
        let form = Form::new().part("file", part);

        let response = self.http.post(&url).multipart(form).send().await?;
        let body = ensure_success(response).await?.bytes().await?;
        decode_dataset(&body)
    }

    async fn fetch_history(&self) -> Result<Vec<HistoryEntry>> {
        let body = self.get("history/").await?.bytes().await?;
        decode_history(&body)
    }

    async fn fetch_dataset(&self, id: DatasetId) -> Result<Dataset> {
        let body = self.get(&format!("dataset/{id}/")).await?.bytes().await?;
        decode_dataset(&body)
    }

    async fn fetch_report(&self, id: DatasetId) -> Result<Vec<u8>> {
        let body = self.get(&format!("report/{id}/")).await?.bytes().await?;
        Ok(body.to_vec())
    }
}

/// Turn a non-2xx response into `Error::Status`
async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.bytes().await.unwrap_or_default();
    Err(Error::Status {
        status: status.as_u16(),
        message: error_message(status, &body),
    })
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
    message: Option<String>,
}

/// Prefer the backend's own `error`/`message` field over the status text
pub fn error_message(status: StatusCode, body: &[u8]) -> String {
    serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error.or(b.message))
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Request failed")
                .to_string()
        })
}

/// Decode and check a dataset payload
pub fn decode_dataset(body: &[u8]) -> Result<Dataset> {
    let dataset: Dataset = serde_json::from_slice(body).map_err(|e| Error::Malformed {
        message: format!("dataset: {e}"),
    })?;
    dataset.validate()?;
    Ok(dataset)
}

/// Decode a history payload, bounded to the backend's contract
pub fn decode_history(body: &[u8]) -> Result<Vec<HistoryEntry>> {
    let entries: Vec<HistoryEntry> = serde_json::from_slice(body).map_err(|e| Error::Malformed {
        message: format!("history: {e}"),
    })?;
    Ok(bounded_history(entries))
}
