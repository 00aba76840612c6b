//! # Error Types
//!
//! Errors for the shared entities and the naming configuration.

use thiserror::Error;

/// Errors when building a `Pubkey`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PubkeyError {
    /// The string is not valid base58.
    #[error("Invalid base58: {0}")]
    InvalidBase58(String),

    /// The decoded value is not 32 bytes.
    #[error("Invalid pubkey length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
}

/// Errors when parsing name registry accounts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Account is shorter than the 96-byte header.
    #[error("Registry header too short: {len} bytes")]
    HeaderTooShort { len: usize },

    #[error("Invalid registry key: {0}")]
    InvalidKey(#[from] PubkeyError),
}

/// Errors when loading or validating `NamingConfig`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Unknown cluster name.
    #[error("Unknown cluster: {0}")]
    UnknownCluster(String),

    /// A field failed validation.
    #[error("Invalid config value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}
