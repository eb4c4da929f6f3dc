//! immerge-io - CSV ingestion and output writers for immerge
//!
//! The thin I/O layer around `immerge-core`:
//!
//! - **Reading**: load one CSV export per source, resolving the three
//!   logical fields (title, abstract, DOI) through caller-configured
//!   column names. A missing column degrades to an all-absent field.
//! - **Writing**: persist the merged dataset and the per-row decision log
//!   as CSV.
//!
//! All fault conditions live here; the core itself has none.

pub mod reader;
pub mod writer;

pub use reader::{read_source, ColumnNames, IoError, IoResult};
pub use writer::{write_log, write_merged};
