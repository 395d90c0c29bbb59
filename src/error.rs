//! Error types for the Garble library.
//!
//! All fallible operations in Garble return [`Result`], whose error type is
//! the [`GarbleError`] enum. Note the distinction between the two failure
//! kinds at the lemma boundary: [`GarbleError::LemmaService`] means the
//! collaborator itself could not be reached or failed outright, while a token
//! the collaborator simply cannot resolve is *not* an error — the mixer
//! leaves such tokens unmodified and keeps going.
//!
//! # Examples
//!
//! ```
//! use garble::error::{GarbleError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(GarbleError::analysis("invalid tokenizer pattern"))
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

/// The main error type for Garble operations.
#[derive(Error, Debug)]
pub enum GarbleError {
    /// I/O errors (reading input files, console I/O, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (tokenization, invalid patterns, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// The requested digest algorithm is not available.
    ///
    /// This is fatal at construction time: without the digest the whole
    /// pipeline cannot run.
    #[error("Unsupported digest algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// The lemma resolution service is unavailable or failed outright.
    #[error("Lemma service error: {0}")]
    LemmaService(String),

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

/// Result type alias for operations that may fail with GarbleError.
pub type Result<T> = std::result::Result<T, GarbleError>;

impl GarbleError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        GarbleError::Analysis(msg.into())
    }

    /// Create a new lemma-service error.
    pub fn lemma_service<S: Into<String>>(msg: S) -> Self {
        GarbleError::LemmaService(msg.into())
    }

    /// Create a new unsupported-algorithm error.
    pub fn unsupported_algorithm<S: Into<String>>(msg: S) -> Self {
        GarbleError::UnsupportedAlgorithm(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        GarbleError::Other(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        GarbleError::Other(format!("Invalid argument: {}", msg.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = GarbleError::analysis("Test analysis error");
        assert_eq!(error.to_string(), "Analysis error: Test analysis error");

        let error = GarbleError::lemma_service("annotation backend down");
        assert_eq!(
            error.to_string(),
            "Lemma service error: annotation backend down"
        );

        let error = GarbleError::unsupported_algorithm("MD-7");
        assert_eq!(error.to_string(), "Unsupported digest algorithm: MD-7");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let garble_error = GarbleError::from(io_error);

        match garble_error {
            GarbleError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
