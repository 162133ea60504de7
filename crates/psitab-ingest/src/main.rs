//! psitab - PSI MI XML to tabular data converter

use anyhow::Result;
use clap::Parser;
use psitab_common::logging::{init_logging, LogConfig, LogLevel};
use psitab_ingest::batch::{run_batch, BatchOptions};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "psitab")]
#[command(
    author,
    version,
    about = "Convert PSI MI XML files into tab-separated relation tables"
)]
struct Cli {
    /// Directory receiving the relation tables
    data_directory: PathBuf,

    /// Source label prefixed to every output row
    source: String,

    /// PSI MI XML files to convert, processed in order
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Keep previously written rows instead of clearing the tables first
    #[arg(long)]
    no_reset: bool,

    /// Continue with remaining files when a document is malformed
    #[arg(long)]
    keep_going: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Environment variables refine the CLI-selected level
    let mut log_config = LogConfig::from_env()?;
    if cli.verbose {
        log_config.level = LogLevel::Debug;
    }
    init_logging(&log_config)?;

    let options = BatchOptions {
        reset: !cli.no_reset,
        keep_going: cli.keep_going,
    };

    info!(
        source = %cli.source,
        files = cli.files.len(),
        "Converting PSI MI XML files"
    );

    let summary = run_batch(&cli.data_directory, &cli.source, &cli.files, &options)?;

    info!(
        files = summary.files_processed,
        skipped = summary.files_skipped,
        rows = summary.rows_written,
        "Conversion complete"
    );
    Ok(())
}
