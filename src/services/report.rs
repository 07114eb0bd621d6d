//! Report Download
//!
//! Persists PDF reports fetched from the backend.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::domain::DatasetId;
use crate::error::Result;

const PDF_MAGIC: &[u8] = b"%PDF";

/// File name used for a dataset's report
pub fn report_filename(id: DatasetId) -> String {
    format!("equipment_report_{id}.pdf")
}

/// Write report bytes into `dir`, replacing an older copy
///
/// The bytes are written to a sibling temp file first and renamed into
/// place, so a failed write never leaves a truncated PDF behind.
pub fn save_report(dir: &Path, id: DatasetId, bytes: &[u8]) -> Result<PathBuf> {
    if !bytes.starts_with(PDF_MAGIC) {
        warn!(dataset = %id, len = bytes.len(), "Report payload does not look like a PDF");
    }

    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }

    let path = dir.join(report_filename(id));
    let partial = path.with_extension("pdf.part");
    let written = fs::write(&partial, bytes).and_then(|()| fs::rename(&partial, &path));
    if let Err(e) = written {
        warn!(path = %partial.display(), error = %e, "Report write failed, removing partial file");
        let _ = fs::remove_file(&partial);
        return Err(e.into());
    }

    info!(dataset = %id, path = %path.display(), "Report saved");
    Ok(path)
}
