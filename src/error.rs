//! Error types for the Stemma library.
//!
//! All fallible operations in Stemma return [`Result`], whose error type is
//! the [`StemmaError`] enum. Stemming itself is infallible; errors come from
//! the surrounding surfaces (token filtering, fixture loading, serialization).
//!
//! # Examples
//!
//! ```
//! use stemma::error::{Result, StemmaError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(StemmaError::analysis("Invalid token stream"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Stemma operations.
#[derive(Error, Debug)]
pub enum StemmaError {
    /// I/O errors (reading word lists, fixture files, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (token filtering, pipeline configuration)
    #[error("Analysis error: {0}")]
    Analysis(String),

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

/// Result type alias for operations that may fail with StemmaError.
pub type Result<T> = std::result::Result<T, StemmaError>;

impl StemmaError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        StemmaError::Analysis(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        StemmaError::Other(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        StemmaError::Other(format!("Invalid argument: {}", msg.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = StemmaError::analysis("Test analysis error");
        assert_eq!(error.to_string(), "Analysis error: Test analysis error");

        let error = StemmaError::invalid_argument("bad word list");
        assert_eq!(error.to_string(), "Error: Invalid argument: bad word list");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let stemma_error = StemmaError::from(io_error);

        match stemma_error {
            StemmaError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
