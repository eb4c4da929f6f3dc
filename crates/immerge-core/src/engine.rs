//! Deduplicating merge engine
//!
//! Consumes labeled row batches in caller order, resolves an identity key
//! for every row, and keeps the first occurrence of each DOI or title.
//! Emits the kept rows, a per-row decision log, and per-source statistics.
//!
//! The DOI set and the title set are checked independently and never
//! against each other: a row accepted by title is not invalidated when a
//! later row carries the same title plus a DOI, and a title is never
//! compared to a DOI value. Cross-identity duplicates go undetected by
//! design.

use std::collections::HashSet;

use crate::domain::{
    DecisionEntry, MergeOutcome, MergedRow, ReasonCode, SourceBatch, SourceRow, SourceStats,
};
use crate::identity::{resolve, IdentityKey};

/// Stateful merge over an ordered sequence of source batches.
///
/// Seen-sets and counters live inside the engine instance and are
/// discarded with it, so independent merge runs never share state. The
/// engine has no failure modes: any well-typed input yields a total
/// result.
#[derive(Debug, Default)]
pub struct MergeEngine {
    seen_dois: HashSet<String>,
    seen_titles: HashSet<String>,
    merged: Vec<MergedRow>,
    log: Vec<DecisionEntry>,
    stats: Vec<SourceStats>,
}

impl MergeEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process one labeled batch.
    ///
    /// Batches must be fed in the order sources should be considered;
    /// rows are taken in their original file order. First seen wins. An
    /// empty batch still produces an all-zero statistics entry.
    pub fn process_batch(&mut self, label: &str, rows: &[SourceRow]) {
        let mut stats = SourceStats::new(label);

        for (i, row) in rows.iter().enumerate() {
            stats.total_rows += 1;

            let reason = match resolve(row.doi.as_deref(), row.title.as_deref()) {
                IdentityKey::Doi(doi) => {
                    if self.seen_dois.contains(&doi) {
                        ReasonCode::DuplicateDoi(doi)
                    } else {
                        self.seen_dois.insert(doi);
                        stats.doi_based += 1;
                        ReasonCode::UniqueDoi
                    }
                }
                IdentityKey::Title(title) => {
                    if self.seen_titles.contains(&title) {
                        ReasonCode::DuplicateTitle(title)
                    } else {
                        self.seen_titles.insert(title);
                        stats.title_only += 1;
                        ReasonCode::UniqueTitleNoDoi
                    }
                }
                IdentityKey::None => ReasonCode::EmptyBoth,
            };

            let selected = reason.is_accept();
            if selected {
                stats.total_added += 1;
                self.merged.push(MergedRow {
                    title: row.title.clone(),
                    abstract_text: row.abstract_text.clone(),
                    doi: row.doi.clone(),
                    source_label: label.to_string(),
                });
            }

            self.log.push(DecisionEntry {
                source_label: label.to_string(),
                row_index: (i + 1) as u32,
                title: row.title.clone(),
                abstract_text: row.abstract_text.clone(),
                doi: row.doi.clone(),
                selected,
                reason,
            });
        }

        self.stats.push(stats);
    }

    /// Finish the run and hand over everything it produced
    pub fn finish(self) -> MergeOutcome {
        MergeOutcome {
            merged: self.merged,
            log: self.log,
            stats: self.stats,
        }
    }
}

/// One-shot merge over an ordered batch sequence.
///
/// Equivalent to feeding the batches to a fresh [`MergeEngine`] one at a
/// time and calling [`MergeEngine::finish`].
pub fn merge(batches: &[SourceBatch]) -> MergeOutcome {
    let mut engine = MergeEngine::new();
    for batch in batches {
        engine.process_batch(&batch.label, &batch.rows);
    }
    engine.finish()
}
