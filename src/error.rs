//! Error types for the Trispell library.
//!
//! Query-time operations on a built engine are total and never fail; errors
//! only surface while building an engine (invalid configuration or accent
//! table) and in the loader/CLI layer that reads word lists from disk.
//!
//! # Examples
//!
//! ```
//! use trispell::error::{TrispellError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(TrispellError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Trispell operations.
#[derive(Error, Debug)]
pub enum TrispellError {
    /// I/O errors (reading word lists, config files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (normalization table construction)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// A caller broke a construction-time contract
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration values out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with TrispellError.
pub type Result<T> = std::result::Result<T, TrispellError>;

impl TrispellError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        TrispellError::Analysis(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        TrispellError::InvalidArgument(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        TrispellError::InvalidConfig(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        TrispellError::Other(msg.into())
    }
}
