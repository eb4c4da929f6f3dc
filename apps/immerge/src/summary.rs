//! End-of-run summary report

use std::path::Path;

use immerge_core::MergeOutcome;

/// Render the summary statistics block printed after a run
pub fn render(outcome: &MergeOutcome, output_file: &Path, log_file: &Path) -> String {
    let mut out = String::new();

    out.push_str("\n=== SUMMARY STATISTICS ===\n");
    out.push_str(&format!(
        "{:<10} {:<12} {:<12} {:<12} {:<12}\n",
        "Database", "Total Rows", "DOI-based", "Title-only", "Total Added"
    ));
    out.push_str(&format!("{}\n", "-".repeat(60)));

    for stats in &outcome.stats {
        out.push_str(&format!(
            "{:<10} {:<12} {:<12} {:<12} {:<12}\n",
            stats.label, stats.total_rows, stats.doi_based, stats.title_only, stats.total_added
        ));
    }

    let totals = outcome.totals();
    out.push_str(&format!("{}\n", "-".repeat(60)));
    out.push_str(&format!(
        "{:<10} {:<12} {:<12} {:<12} {:<12}\n",
        "TOTAL", totals.total_rows, "", "", totals.total_added
    ));

    out.push_str("\nDeduplication Results:\n");
    out.push_str(&format!("  - Original total rows: {}\n", totals.total_rows));
    out.push_str(&format!("  - Final unique papers: {}\n", totals.total_added));
    out.push_str(&format!(
        "  - Duplicates removed: {}\n",
        totals.duplicates_removed
    ));
    if totals.total_rows > 0 {
        out.push_str(&format!(
            "  - Deduplication rate: {:.1}%\n",
            totals.dedup_rate * 100.0
        ));
    }

    out.push_str("\nFiles created:\n");
    out.push_str(&format!(
        "  - {}: Final merged dataset ({} unique papers)\n",
        output_file.display(),
        outcome.merged.len()
    ));
    out.push_str(&format!(
        "  - {}: Detailed log of every row processed ({} total rows)\n",
        log_file.display(),
        outcome.log.len()
    ));

    if !outcome.log.is_empty() {
        let selected = outcome.log.iter().filter(|e| e.selected).count();
        let rejected = outcome.log.len() - selected;
        out.push_str("\nLog Summary:\n");
        out.push_str(&format!(
            "  - Total rows processed: {}\n",
            outcome.log.len()
        ));
        out.push_str(&format!("  - Rows selected: {}\n", selected));
        out.push_str(&format!("  - Rows rejected: {}\n", rejected));
        out.push_str(&format!(
            "  - Selection rate: {:.1}%\n",
            selected as f64 / outcome.log.len() as f64 * 100.0
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use immerge_core::{merge, SourceBatch, SourceRow};

    fn doi_row(doi: &str) -> SourceRow {
        SourceRow {
            title: Some("T".to_string()),
            abstract_text: None,
            doi: Some(doi.to_string()),
        }
    }

    #[test]
    fn test_render_includes_per_source_and_totals() {
        let batches = vec![
            SourceBatch::new("Scopus", vec![doi_row("10.1/a"), doi_row("10.1/b")]),
            SourceBatch::new("IEEE", vec![doi_row("10.1/a")]),
        ];
        let outcome = merge(&batches);
        let report = render(&outcome, Path::new("all.csv"), Path::new("log.csv"));

        assert!(report.contains("Scopus"));
        assert!(report.contains("IEEE"));
        assert!(report.contains("Original total rows: 3"));
        assert!(report.contains("Final unique papers: 2"));
        assert!(report.contains("Duplicates removed: 1"));
        assert!(report.contains("Deduplication rate: 33.3%"));
        assert!(report.contains("Selection rate: 66.7%"));
    }

    #[test]
    fn test_render_empty_run_omits_rates() {
        let outcome = merge(&[]);
        let report = render(&outcome, Path::new("all.csv"), Path::new("log.csv"));

        assert!(report.contains("Original total rows: 0"));
        assert!(!report.contains("Deduplication rate"));
        assert!(!report.contains("Log Summary"));
    }
}
