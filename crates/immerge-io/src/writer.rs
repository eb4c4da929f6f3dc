//! CSV writers for the merged dataset and the decision log

use std::path::Path;

use immerge_core::{DecisionEntry, MergedRow};

use crate::reader::{IoError, IoResult};

/// Write the merged dataset with columns `Title,Abstract,DOI,DB`
pub fn write_merged(path: &Path, rows: &[MergedRow]) -> IoResult<()> {
    let mut writer =
        csv::Writer::from_path(path).map_err(|e| IoError::OpenFailed(e.to_string()))?;

    writer
        .write_record(["Title", "Abstract", "DOI", "DB"])
        .map_err(|e| IoError::WriteFailed(e.to_string()))?;

    for row in rows {
        writer
            .write_record([
                row.title.as_deref().unwrap_or(""),
                row.abstract_text.as_deref().unwrap_or(""),
                row.doi.as_deref().unwrap_or(""),
                &row.source_label,
            ])
            .map_err(|e| IoError::WriteFailed(e.to_string()))?;
    }

    writer
        .flush()
        .map_err(|e| IoError::WriteFailed(e.to_string()))
}

/// Write the per-row decision log with columns
/// `Source_File,Row_Index,Title,Abstract,DOI,Selected,Reason`.
///
/// `Selected` is rendered `YES`/`NO` and `Reason` through the reason
/// code's display form, so the log is readable without the tool.
pub fn write_log(path: &Path, entries: &[DecisionEntry]) -> IoResult<()> {
    let mut writer =
        csv::Writer::from_path(path).map_err(|e| IoError::OpenFailed(e.to_string()))?;

    writer
        .write_record([
            "Source_File",
            "Row_Index",
            "Title",
            "Abstract",
            "DOI",
            "Selected",
            "Reason",
        ])
        .map_err(|e| IoError::WriteFailed(e.to_string()))?;

    for entry in entries {
        writer
            .write_record([
                entry.source_label.as_str(),
                &entry.row_index.to_string(),
                entry.title.as_deref().unwrap_or(""),
                entry.abstract_text.as_deref().unwrap_or(""),
                entry.doi.as_deref().unwrap_or(""),
                if entry.selected { "YES" } else { "NO" },
                &entry.reason.to_string(),
            ])
            .map_err(|e| IoError::WriteFailed(e.to_string()))?;
    }

    writer
        .flush()
        .map_err(|e| IoError::WriteFailed(e.to_string()))
}
