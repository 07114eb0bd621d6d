//! Upload - Client-side checks on a CSV before it is sent

use std::path::{Path, PathBuf};

use snafu::Snafu;

use crate::constants::{MAX_UPLOAD_BYTES, UPLOAD_EXTENSION};
use crate::error::{Error, Result};

/// Why a file was refused before submission
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
pub enum UploadRejection {
    #[snafu(display("Please upload a CSV file"))]
    NotCsv { filename: String },

    #[snafu(display("File size must be less than 5MB"))]
    TooLarge { size: u64, limit: u64 },
}

/// Check name and size against the upload contract
pub fn validate_upload(filename: &str, size: u64) -> Result<(), UploadRejection> {
    if !filename.ends_with(UPLOAD_EXTENSION) {
        return Err(UploadRejection::NotCsv {
            filename: filename.to_string(),
        });
    }
    if size > MAX_UPLOAD_BYTES {
        return Err(UploadRejection::TooLarge {
            size,
            limit: MAX_UPLOAD_BYTES,
        });
    }
    Ok(())
}

/// A file picked for upload, known by metadata only
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadCandidate {
    pub path: PathBuf,
    pub filename: String,
    pub size: u64,
}

impl UploadCandidate {
    /// Stat a local file without reading its contents
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .ok_or_else(|| Error::Invalid {
                message: format!("Not a file path: {}", path.display()),
            })?;
        let metadata = std::fs::metadata(path)?;
        if !metadata.is_file() {
            return Err(Error::Invalid {
                message: format!("Not a regular file: {}", path.display()),
            });
        }

        Ok(Self {
            path: path.to_path_buf(),
            filename,
            size: metadata.len(),
        })
    }

    pub fn validate(&self) -> Result<(), UploadRejection> {
        validate_upload(&self.filename, self.size)
    }

    /// Validate, then load the bytes
    pub fn read(self) -> Result<UploadFile> {
        self.validate()?;
        let bytes = std::fs::read(&self.path)?;
        // The file may have grown between stat and read
        validate_upload(&self.filename, bytes.len() as u64)?;
        Ok(UploadFile {
            filename: self.filename,
            bytes,
        })
    }
}

/// A validated CSV ready to be posted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}
