//! Report export collaborator.
//!
//! Writes the rendered report artifact to a dated file in the export
//! directory. Failures come back as errors for the caller to surface; the
//! report value itself is never touched from here.

use crate::errors::{Error, Result};
use crate::model::DailyReport;
use std::path::{Path, PathBuf};
use tracing::info;

/// File name for a report exported on the given date, e.g.
/// `closing-report-2026-08-27.txt`. Falls back to a fixed name if the date
/// field is blank.
#[must_use]
pub fn export_file_name(report: &DailyReport) -> String {
    if report.date.is_empty() {
        "closing-report.txt".to_string()
    } else {
        format!("closing-report-{}.txt", report.date)
    }
}

/// Writes the rendered artifact into `dir`, creating the directory if
/// needed. Returns the path of the written file.
///
/// # Errors
/// Returns [`Error::Export`] if the directory cannot be created or the file
/// cannot be written.
pub async fn export_report(dir: &Path, report: &DailyReport, rendered: &str) -> Result<PathBuf> {
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|e| Error::Export(format!("Failed to create export directory {dir:?}: {e}")))?;

    let path = dir.join(export_file_name(report));
    tokio::fs::write(&path, rendered)
        .await
        .map_err(|e| Error::Export(format!("Failed to write {path:?}: {e}")))?;

    info!("Exported closing report to {:?}.", path);
    Ok(path)
}
