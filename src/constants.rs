//! Constants
//!
//! Centralized limits shared by the views, the aggregation engine and the transport layer.

/// Rows shown per table page
pub const ITEMS_PER_PAGE: usize = 10;

/// Records projected into the trend series
pub const TREND_LIMIT: usize = 20;

/// Largest CSV accepted for upload (5 MiB)
pub const MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;

/// Required upload file extension
pub const UPLOAD_EXTENSION: &str = ".csv";

/// Backend keeps at most this many datasets in its history
pub const HISTORY_LIMIT: usize = 5;

/// Default backend base address
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000/api";

/// Environment variable overriding the backend base address
pub const API_URL_ENV: &str = "EQUIPMENT_DASHBOARD_API_URL";

/// Notices kept for display
pub const NOTICE_CAPACITY: usize = 50;
