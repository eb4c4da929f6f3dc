//! CSV source reader with configurable column names

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use immerge_core::SourceRow;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// Errors that can occur during I/O operations
#[derive(Debug, Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Failed to open file: {0}")]
    OpenFailed(String),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Failed to write file: {0}")]
    WriteFailed(String),
}

/// Result type for I/O operations
pub type IoResult<T> = Result<T, IoError>;

/// Column names for the three logical fields the merger reads
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnNames {
    pub title_col: String,
    pub abstract_col: String,
    pub doi_col: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            title_col: "Title".to_string(),
            abstract_col: "Abstract".to_string(),
            doi_col: "DOI".to_string(),
        }
    }
}

/// Read one source export into rows, in file order.
///
/// Columns are located by header name. A column absent from the file
/// yields `None` for that field on every row (with a warning), so the
/// source still flows through the normal merge path. Cells that are
/// present but empty survive as empty strings.
pub fn read_source(path: &Path, columns: &ColumnNames) -> IoResult<Vec<SourceRow>> {
    if !path.exists() {
        return Err(IoError::FileNotFound(path.display().to_string()));
    }

    let file = File::open(path).map_err(|e| IoError::OpenFailed(e.to_string()))?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(BufReader::new(file));

    let headers = reader
        .headers()
        .map_err(|e| IoError::InvalidFormat(e.to_string()))?
        .clone();

    let title_idx = column_index(&headers, &columns.title_col, path);
    let abstract_idx = column_index(&headers, &columns.abstract_col, path);
    let doi_idx = column_index(&headers, &columns.doi_col, path);

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| IoError::InvalidFormat(e.to_string()))?;
        rows.push(SourceRow {
            title: field(&record, title_idx),
            abstract_text: field(&record, abstract_idx),
            doi: field(&record, doi_idx),
        });
    }

    Ok(rows)
}

/// Locate a column by header name, warning when it is missing
fn column_index(headers: &csv::StringRecord, name: &str, path: &Path) -> Option<usize> {
    let idx = headers.iter().position(|h| h == name);
    if idx.is_none() {
        warn!(
            file = %path.display(),
            column = name,
            "column missing, treating field as absent"
        );
    }
    idx
}

fn field(record: &csv::StringRecord, idx: Option<usize>) -> Option<String> {
    idx.and_then(|i| record.get(i)).map(|s| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_read_source_default_columns() {
        let file = write_csv("Title,Abstract,DOI\nPaper A,About A,10.1/a\nPaper B,,\n");
        let rows = read_source(file.path(), &ColumnNames::default()).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].title.as_deref(), Some("Paper A"));
        assert_eq!(rows[0].doi.as_deref(), Some("10.1/a"));
        assert_eq!(rows[1].doi.as_deref(), Some(""));
    }

    #[test]
    fn test_read_source_custom_columns() {
        let file = write_csv("Paper_Title,Summary,doi\nPaper A,About A,10.1/a\n");
        let columns = ColumnNames {
            title_col: "Paper_Title".to_string(),
            abstract_col: "Summary".to_string(),
            doi_col: "doi".to_string(),
        };
        let rows = read_source(file.path(), &columns).unwrap();

        assert_eq!(rows[0].title.as_deref(), Some("Paper A"));
        assert_eq!(rows[0].abstract_text.as_deref(), Some("About A"));
        assert_eq!(rows[0].doi.as_deref(), Some("10.1/a"));
    }

    #[test]
    fn test_missing_column_becomes_absent_field() {
        let file = write_csv("Title,Abstract\nPaper A,About A\n");
        let rows = read_source(file.path(), &ColumnNames::default()).unwrap();

        assert_eq!(rows[0].title.as_deref(), Some("Paper A"));
        assert_eq!(rows[0].doi, None);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = read_source(Path::new("/no/such/file.csv"), &ColumnNames::default());
        assert!(matches!(result, Err(IoError::FileNotFound(_))));
    }

    #[test]
    fn test_header_only_file_yields_no_rows() {
        let file = write_csv("Title,Abstract,DOI\n");
        let rows = read_source(file.path(), &ColumnNames::default()).unwrap();
        assert!(rows.is_empty());
    }
}
