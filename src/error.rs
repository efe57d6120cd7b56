//! Unified error types for Loquat.
//!
//! "No match found" is never an error: detection returns `Ok(None)` for
//! unrecognized content. Errors are reserved for I/O failures and invalid
//! registrations.

use thiserror::Error;

/// Main error type for Loquat operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error while reading the signature prefix from a path or stream
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A matcher passed to `register_type` does not satisfy the matcher contract
    #[error("Invalid matcher registration: {0}")]
    InvalidMatcher(String),
}

/// Result type for Loquat operations.
pub type Result<T> = std::result::Result<T, Error>;
