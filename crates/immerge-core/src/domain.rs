//! Domain types for the merge pipeline
//!
//! Inputs ([`SourceRow`], [`SourceBatch`]) are immutable once parsed.
//! Outputs ([`MergedRow`], [`DecisionEntry`], [`SourceStats`]) preserve
//! processing order.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Shown length for a duplicate title inside an audit reason string
const REASON_TITLE_LIMIT: usize = 50;

/// One row as parsed from a source export
///
/// A field is `None` when the source column was missing entirely; empty
/// cells survive as empty strings and degrade during identity resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRow {
    pub title: Option<String>,
    pub abstract_text: Option<String>,
    pub doi: Option<String>,
}

/// An ordered batch of rows from one labeled source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceBatch {
    /// Source label, e.g. the database name ("Scopus", "PubMed")
    pub label: String,
    /// Rows in original file order
    pub rows: Vec<SourceRow>,
}

impl SourceBatch {
    pub fn new(label: impl Into<String>, rows: Vec<SourceRow>) -> Self {
        Self {
            label: label.into(),
            rows,
        }
    }
}

/// Why a row was kept or dropped
///
/// Duplicate variants carry the offending normalized value as data; the
/// human-readable audit string is rendered only at the output boundary
/// via `Display`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReasonCode {
    /// First occurrence of this DOI
    UniqueDoi,
    /// No DOI, first occurrence of this title
    UniqueTitleNoDoi,
    /// DOI already seen earlier in the run
    DuplicateDoi(String),
    /// Title already seen earlier in the run
    DuplicateTitle(String),
    /// Neither DOI nor title usable
    EmptyBoth,
}

impl ReasonCode {
    /// Whether this reason means the row was kept
    pub fn is_accept(&self) -> bool {
        matches!(self, ReasonCode::UniqueDoi | ReasonCode::UniqueTitleNoDoi)
    }
}

impl fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReasonCode::UniqueDoi => write!(f, "Unique DOI"),
            ReasonCode::UniqueTitleNoDoi => write!(f, "Unique Title (no DOI)"),
            ReasonCode::DuplicateDoi(doi) => {
                write!(f, "Duplicate DOI (already seen: {})", doi)
            }
            ReasonCode::DuplicateTitle(title) => {
                write!(
                    f,
                    "Duplicate Title (already seen: {})",
                    truncate(title, REASON_TITLE_LIMIT)
                )
            }
            ReasonCode::EmptyBoth => write!(f, "Empty/missing Title and DOI"),
        }
    }
}

/// Truncate to `max` characters, appending an ellipsis when shortened
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max).collect();
    out.push_str("...");
    out
}

/// Audit record for one input row
///
/// Field values are kept as originally provided (unnormalized) so the log
/// can be matched back against the source files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionEntry {
    pub source_label: String,
    /// 1-based position within the source batch
    pub row_index: u32,
    pub title: Option<String>,
    pub abstract_text: Option<String>,
    pub doi: Option<String>,
    pub selected: bool,
    pub reason: ReasonCode,
}

/// A kept row in the merged dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergedRow {
    pub title: Option<String>,
    pub abstract_text: Option<String>,
    pub doi: Option<String>,
    /// Label of the source this occurrence came from
    pub source_label: String,
}

/// Per-source counters, accumulated as rows are decided
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceStats {
    pub label: String,
    /// Every row seen from this source, accepted or not
    pub total_rows: usize,
    /// Rows accepted on their DOI
    pub doi_based: usize,
    /// Rows accepted on their title (no DOI)
    pub title_only: usize,
    /// Rows accepted overall
    pub total_added: usize,
}

impl SourceStats {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Default::default()
        }
    }
}

/// Run-level totals derived from the per-source statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunTotals {
    pub total_rows: usize,
    pub total_added: usize,
    pub duplicates_removed: usize,
    /// Fraction of rows removed as duplicates; 0.0 for an empty run
    pub dedup_rate: f64,
}

/// Everything a merge run produces
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergeOutcome {
    /// Accepted rows, in processing order
    pub merged: Vec<MergedRow>,
    /// One entry per input row, in processing order
    pub log: Vec<DecisionEntry>,
    /// One entry per batch, in source order
    pub stats: Vec<SourceStats>,
}

impl MergeOutcome {
    /// Derive run totals from the per-source statistics
    pub fn totals(&self) -> RunTotals {
        let total_rows: usize = self.stats.iter().map(|s| s.total_rows).sum();
        let total_added: usize = self.stats.iter().map(|s| s.total_added).sum();
        let duplicates_removed = total_rows - total_added;
        let dedup_rate = if total_rows == 0 {
            0.0
        } else {
            duplicates_removed as f64 / total_rows as f64
        };

        RunTotals {
            total_rows,
            total_added,
            duplicates_removed,
            dedup_rate,
        }
    }

    /// Look up the statistics for a source label
    pub fn stats_for(&self, label: &str) -> Option<&SourceStats> {
        self.stats.iter().find(|s| s.label == label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reason_display_unique() {
        assert_eq!(ReasonCode::UniqueDoi.to_string(), "Unique DOI");
        assert_eq!(
            ReasonCode::UniqueTitleNoDoi.to_string(),
            "Unique Title (no DOI)"
        );
    }

    #[test]
    fn test_reason_display_duplicate_doi() {
        let reason = ReasonCode::DuplicateDoi("10.1/a".to_string());
        assert_eq!(reason.to_string(), "Duplicate DOI (already seen: 10.1/a)");
    }

    #[test]
    fn test_reason_display_truncates_long_title() {
        let long = "x".repeat(80);
        let reason = ReasonCode::DuplicateTitle(long);
        let rendered = reason.to_string();
        assert!(rendered.ends_with("..."));
        assert!(rendered.contains(&"x".repeat(50)));
        assert!(!rendered.contains(&"x".repeat(51)));
    }

    #[test]
    fn test_reason_display_short_title_untouched() {
        let reason = ReasonCode::DuplicateTitle("short".to_string());
        assert_eq!(reason.to_string(), "Duplicate Title (already seen: short)");
    }

    #[test]
    fn test_totals_empty_run() {
        let outcome = MergeOutcome {
            merged: vec![],
            log: vec![],
            stats: vec![],
        };
        let totals = outcome.totals();
        assert_eq!(totals.total_rows, 0);
        assert_eq!(totals.duplicates_removed, 0);
        assert_eq!(totals.dedup_rate, 0.0);
    }

    #[test]
    fn test_totals_sums_sources() {
        let outcome = MergeOutcome {
            merged: vec![],
            log: vec![],
            stats: vec![
                SourceStats {
                    label: "A".to_string(),
                    total_rows: 4,
                    doi_based: 2,
                    title_only: 1,
                    total_added: 3,
                },
                SourceStats {
                    label: "B".to_string(),
                    total_rows: 6,
                    doi_based: 2,
                    title_only: 0,
                    total_added: 2,
                },
            ],
        };
        let totals = outcome.totals();
        assert_eq!(totals.total_rows, 10);
        assert_eq!(totals.total_added, 5);
        assert_eq!(totals.duplicates_removed, 5);
        assert!((totals.dedup_rate - 0.5).abs() < 1e-12);
    }
}
