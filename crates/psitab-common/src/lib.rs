//! psitab Common Library
//!
//! Shared error handling and logging setup for the psitab workspace.
//!
//! # Overview
//!
//! This crate provides common functionality used across all psitab
//! workspace members:
//!
//! - **Error Handling**: Custom error type and result alias
//! - **Logging**: Centralized tracing configuration
//!
//! # Example
//!
//! ```no_run
//! use psitab_common::{Result, PsitabError};
//!
//! fn open_output(path: &str) -> Result<std::fs::File> {
//!     let file = std::fs::File::create(path)?;
//!     Ok(file)
//! }
//! ```

pub mod error;
pub mod logging;

// Re-export commonly used types
pub use error::{PsitabError, Result};
