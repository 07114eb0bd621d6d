//! Error types for the equipment dashboard
//!
//! Centralized error handling using snafu for ergonomic error definitions.

use snafu::Snafu;

use crate::domain::UploadRejection;

/// Main error type for the application
#[derive(Debug, Snafu)]
pub enum Error {
    /// Invalid input or configuration
    #[snafu(display("Invalid: {message}"))]
    Invalid { message: String },

    /// File rejected before any network call
    #[snafu(display("Upload rejected: {source}"))]
    UploadRejected { source: UploadRejection },

    /// Network error talking to the backend
    #[snafu(display("HTTP error: {source}"))]
    Http { source: reqwest::Error },

    /// Backend answered with a non-success status
    #[snafu(display("Backend returned {status}: {message}"))]
    Status { status: u16, message: String },

    /// Backend payload did not match the expected schema
    #[snafu(display("Malformed backend response: {message}"))]
    Malformed { message: String },

    /// A dispatched request finished with a failure event
    #[snafu(display("{message}"))]
    Request { kind: ErrorKind, message: String },

    /// The service event channel closed while a response was awaited
    #[snafu(display("Service channel closed"))]
    ChannelClosed,

    /// IO error (file operations)
    #[snafu(display("IO error: {source}"))]
    Io { source: std::io::Error },

    /// JSON serialization/deserialization error
    #[snafu(display("JSON error: {source}"))]
    Json { source: serde_json::Error },

    /// TOML deserialization error
    #[snafu(display("TOML parse error: {source}"))]
    TomlDe { source: toml::de::Error },

    /// TOML serialization error
    #[snafu(display("TOML serialize error: {source}"))]
    TomlSe { source: toml::ser::Error },
}

/// Coarse classification used for user-facing messaging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Caught before any network call, recoverable by picking another file
    Validation,
    /// Network failure or non-2xx response
    Transport,
    /// Backend payload failed schema checks
    MalformedResponse,
    /// Local filesystem or configuration problem
    Local,
}

impl Error {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::UploadRejected { .. } => ErrorKind::Validation,
            Error::Http { .. } | Error::Status { .. } => ErrorKind::Transport,
            Error::Malformed { .. } => ErrorKind::MalformedResponse,
            Error::Request { kind, .. } => *kind,
            Error::Invalid { .. }
            | Error::ChannelClosed
            | Error::Io { .. }
            | Error::Json { .. }
            | Error::TomlDe { .. }
            | Error::TomlSe { .. } => ErrorKind::Local,
        }
    }
}

impl From<UploadRejection> for Error {
    fn from(source: UploadRejection) -> Self {
        Error::UploadRejected { source }
    }
}

impl From<reqwest::Error> for Error {
    fn from(source: reqwest::Error) -> Self {
        Error::Http { source }
    }
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io { source }
    }
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Error::Json { source }
    }
}

impl From<toml::de::Error> for Error {
    fn from(source: toml::de::Error) -> Self {
        Error::TomlDe { source }
    }
}

impl From<toml::ser::Error> for Error {
    fn from(source: toml::ser::Error) -> Self {
        Error::TomlSe { source }
    }
}

/// Result type alias for convenience
pub type Result<T, E = Error> = std::result::Result<T, E>;
