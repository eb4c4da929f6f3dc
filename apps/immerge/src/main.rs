//! immerge - merge research-paper CSV exports with deduplication
//!
//! Reads one CSV export per configured source, merges them through
//! `immerge-core` (first seen wins, DOI before title), and writes the
//! merged dataset plus a per-row decision log.

mod config;
mod summary;

use std::path::PathBuf;

use clap::Parser;
use immerge_core::{merge, SourceBatch};
use immerge_io::{read_source, write_log, write_merged, ColumnNames};
use tracing::{info, warn};

use crate::config::SourceSpec;

/// Merge research-paper CSV exports with deduplication
#[derive(Debug, Parser)]
#[command(name = "immerge", version, about)]
struct Cli {
    /// Source exports as PATH=LABEL pairs, in merge-priority order
    #[arg(long = "source", value_name = "PATH=LABEL")]
    sources: Vec<String>,

    /// TOML config file describing sources and column overrides
    #[arg(long, value_name = "FILE", conflicts_with = "sources")]
    config: Option<PathBuf>,

    /// Merged dataset output file
    #[arg(long, default_value = "all.csv")]
    output: PathBuf,

    /// Decision log output file
    #[arg(long, default_value = "processing_log.csv")]
    log: PathBuf,

    /// Default title column name
    #[arg(long, default_value = "Title")]
    title_col: String,

    /// Default abstract column name
    #[arg(long, default_value = "Abstract")]
    abstract_col: String,

    /// Default DOI column name
    #[arg(long, default_value = "DOI")]
    doi_col: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let defaults = ColumnNames {
        title_col: cli.title_col.clone(),
        abstract_col: cli.abstract_col.clone(),
        doi_col: cli.doi_col.clone(),
    };

    let specs: Vec<SourceSpec> = if let Some(path) = &cli.config {
        config::load(path)?
    } else if !cli.sources.is_empty() {
        cli.sources
            .iter()
            .map(|arg| SourceSpec::parse_arg(arg))
            .collect::<Result<_, _>>()?
    } else {
        config::default_sources()
    };

    // Load every source in order; a source that cannot be read becomes an
    // empty batch so the run still completes with full statistics.
    let mut batches = Vec::with_capacity(specs.len());
    for spec in &specs {
        let columns = spec.columns(&defaults);
        let rows = match read_source(&spec.file, &columns) {
            Ok(rows) => {
                info!(
                    source = %spec.label,
                    file = %spec.file.display(),
                    rows = rows.len(),
                    "loaded source"
                );
                rows
            }
            Err(e) => {
                warn!(
                    source = %spec.label,
                    file = %spec.file.display(),
                    error = %e,
                    "skipping unreadable source"
                );
                Vec::new()
            }
        };
        batches.push(SourceBatch::new(spec.label.clone(), rows));
    }

    let outcome = merge(&batches);

    write_merged(&cli.output, &outcome.merged)?;
    write_log(&cli.log, &outcome.log)?;
    info!(
        merged = outcome.merged.len(),
        logged = outcome.log.len(),
        "outputs written"
    );

    print!("{}", summary::render(&outcome, &cli.output, &cli.log));

    Ok(())
}
