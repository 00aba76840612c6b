//! # Resolution Errors

use sns_01_derivation::DerivationError;
use sns_02_records::RecordError;
use thiserror::Error;

/// Errors raised by an `AccountFetcher`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Request rejected: {0}")]
    Rejected(String),
}

/// Errors that can occur while resolving names.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ResolutionError {
    /// The account does not exist, has no header or carries no payload.
    #[error("Account has no data")]
    NoAccountData,

    /// The reverse-lookup payload is malformed.
    #[error("Invalid reverse lookup payload: {0}")]
    InvalidReverse(String),

    /// The fetcher returned a different number of accounts than requested.
    #[error("Fetcher returned {actual} accounts for {expected} addresses")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Fetch failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("Derivation failed: {0}")]
    Derivation(#[from] DerivationError),

    #[error("Record error: {0}")]
    Record(#[from] RecordError),
}
