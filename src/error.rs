//! Error types for the Sapu library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`SapuError`] enum. The taxonomy mirrors how failures are handled:
//! resource problems degrade (empty dictionary, default stopwords) and
//! computation problems are caught at the stats boundary and yield safe
//! defaults. Missing document text is represented structurally
//! (`Option<String>`) and produces empty artifacts without an error value.
//! Nothing in this crate is fatal to the process.
//!
//! # Examples
//!
//! ```
//! use sapu::error::{Result, SapuError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(SapuError::resource("dictionary file not found"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {e}"),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Sapu operations.
#[derive(Error, Debug)]
pub enum SapuError {
    /// I/O errors (file operations, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Missing or malformed external resources (dictionaries, stopword lists)
    #[error("Resource error: {0}")]
    Resource(String),

    /// Frequency/statistics computation errors
    #[error("Computation error: {0}")]
    Computation(String),

    /// CSV parsing or serialization errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with SapuError.
pub type Result<T> = std::result::Result<T, SapuError>;

impl SapuError {
    /// Create a new resource error.
    pub fn resource<S: Into<String>>(msg: S) -> Self {
        SapuError::Resource(msg.into())
    }

    /// Create a new computation error.
    pub fn computation<S: Into<String>>(msg: S) -> Self {
        SapuError::Computation(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        SapuError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = SapuError::resource("kamus file missing");
        assert_eq!(error.to_string(), "Resource error: kamus file missing");

        let error = SapuError::computation("empty series");
        assert_eq!(error.to_string(), "Computation error: empty series");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let sapu_error = SapuError::from(io_error);

        match sapu_error {
            SapuError::Io(_) => {}
            _ => panic!("Expected IO error variant"),
        }
    }
}
