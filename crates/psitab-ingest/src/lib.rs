//! psitab Ingest Library
//!
//! Converts PSI MI XML molecular-interaction files into flat,
//! tab-separated relation tables suitable for bulk loading.
//!
//! # Output Relations
//!
//! - **experiment**: experiment-to-interaction mappings
//! - **interactor**: interactor-to-participant-to-interaction mappings
//! - **names**: shortLabel / fullName / alias properties per scope
//! - **xref**: primaryRef / secondaryRef properties per scope
//! - **organisms**: taxonomy identifiers per interactor
//!
//! # Example
//!
//! ```no_run
//! use psitab_ingest::batch::{run_batch, BatchOptions};
//! use std::path::{Path, PathBuf};
//!
//! fn main() -> anyhow::Result<()> {
//!     let files = vec![PathBuf::from("innatedb.xml")];
//!     let summary = run_batch(
//!         Path::new("./data"),
//!         "InnateDB",
//!         &files,
//!         &BatchOptions::default(),
//!     )?;
//!     println!("{} rows written", summary.rows_written);
//!     Ok(())
//! }
//! ```

pub mod batch;
pub mod parser;
pub mod writer;

pub use parser::{PsiParser, Record, Relation};
pub use writer::{RecordSink, TabWriter};
