//! immerge-core - deduplicating merge for bibliographic exports
//!
//! Merges row batches from multiple labeled sources (Scopus, IEEE,
//! PubMed, ...) into one deduplicated dataset. Every row gets exactly one
//! entry in an audit log explaining why it was kept or dropped, and every
//! source gets a statistics record.
//!
//! Data flows one way:
//!
//! ```text
//! batches -> identity resolution -> merge engine -> { merged rows,
//!                                                     decision log,
//!                                                     source stats }
//! ```
//!
//! The crate does no I/O. Callers (see `immerge-io`) parse the source
//! files, hand over [`SourceBatch`] values in the order they want sources
//! considered, and persist the outputs. First seen wins: processing order
//! decides which occurrence of a duplicate survives.

pub mod domain;
pub mod engine;
pub mod identity;

pub use domain::{
    DecisionEntry, MergeOutcome, MergedRow, ReasonCode, RunTotals, SourceBatch, SourceRow,
    SourceStats,
};
pub use engine::{merge, MergeEngine};
pub use identity::{resolve, IdentityKey};
