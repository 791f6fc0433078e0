//! Error types for the corpora library.
//!
//! All errors are represented by the [`CorporaError`] enum. Errors are never
//! recovered from inside the library: a failed open, a malformed row or a bad
//! pattern aborts the current run and is handed back to the caller.
//!
//! # Examples
//!
//! ```
//! use corpora::error::{CorporaError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(CorporaError::config("unknown stopword language"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for corpora operations.
#[derive(Error, Debug)]
pub enum CorporaError {
    /// I/O errors (missing corpus, permission denied, read failures)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (patterns, tokenization, stopword layers)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Malformed input rows or values
    #[error("Parse error: {0}")]
    Parse(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Tab-separated reader errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type alias for operations that may fail with CorporaError.
pub type Result<T> = std::result::Result<T, CorporaError>;

impl CorporaError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        CorporaError::Analysis(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        CorporaError::Config(msg.into())
    }

    /// Create a new parse error.
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        CorporaError::Parse(msg.into())
    }

    /// Whether this error came from the filesystem.
    pub fn is_io(&self) -> bool {
        matches!(self, CorporaError::Io(_))
    }
}
