//! Error types for the user digest
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Digest Error Enum ==
/// Unified error type for fetching and summarizing users.
#[derive(Error, Debug)]
pub enum DigestError {
    /// Network or HTTP failure while retrieving users
    #[error("Failed to fetch users: {0}")]
    FetchFailure(String),

    /// A user record is missing fields the aggregation reads
    #[error("Malformed user record: {0}")]
    MalformedRecord(String),
}

impl From<reqwest::Error> for DigestError {
    fn from(error: reqwest::Error) -> Self {
        DigestError::FetchFailure(error.to_string())
    }
}

impl From<serde_json::Error> for DigestError {
    fn from(error: serde_json::Error) -> Self {
        DigestError::MalformedRecord(error.to_string())
    }
}

// == Result Type Alias ==
/// Convenience Result type for the user digest.
pub type Result<T> = std::result::Result<T, DigestError>;
