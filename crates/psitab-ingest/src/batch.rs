//! Batch conversion driver
//!
//! Processes input files strictly one at a time, fully draining each
//! document before starting the next. One parser instance serves the
//! whole batch so transient identifiers stay unique across all files
//! written into the same tables. The writer is opened before the first
//! event and flushed/closed when the batch ends, whether or not a
//! document failed along the way.

use crate::parser::PsiParser;
use crate::writer::TabWriter;
use psitab_common::{PsitabError, Result};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Batch-level policy knobs
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Remove previously written relation files before starting
    pub reset: bool,
    /// Skip malformed documents instead of aborting the batch
    pub keep_going: bool,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            reset: true,
            keep_going: false,
        }
    }
}

/// Outcome of a completed batch
#[derive(Debug, Default)]
pub struct BatchSummary {
    pub files_processed: usize,
    pub files_skipped: usize,
    pub rows_written: u64,
}

/// Convert a batch of PSI MI XML files into relation tables under
/// `directory`, each row prefixed with `source`.
pub fn run_batch(
    directory: &Path,
    source: &str,
    files: &[PathBuf],
    options: &BatchOptions,
) -> Result<BatchSummary> {
    if options.reset {
        TabWriter::reset_dir(directory)?;
    }

    let mut writer = TabWriter::open(directory, source)?;
    let mut parser = PsiParser::new();
    let mut summary = BatchSummary::default();
    let mut failure = None;

    for file in files {
        let label = file.display().to_string();
        writer.begin_file(&label);
        info!(file = %label, "Converting PSI MI XML file");

        match parser.parse_file(file, &mut writer) {
            Ok(()) => summary.files_processed += 1,
            // Document-level problems may be skipped; sink failures and
            // unreadable inputs abort the batch either way
            Err(e @ (PsitabError::Xml(_) | PsitabError::NotOpen(_))) if options.keep_going => {
                warn!(file = %label, error = %e, "Skipping malformed document");
                summary.files_skipped += 1;
            },
            Err(e) => {
                failure = Some(e);
                break;
            },
        }
    }

    summary.rows_written = writer.rows_written();
    writer.close()?;

    match failure {
        Some(e) => Err(e),
        None => Ok(summary),
    }
}
