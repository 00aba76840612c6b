//! # Record Errors

use thiserror::Error;

/// Errors that can occur while decoding or encoding records.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RecordError {
    /// The payload is empty or all zeros.
    #[error("Record has no data")]
    NoData,

    /// The payload does not match the record type.
    #[error("Invalid record data")]
    InvalidRecordData,

    /// The SOL record signature does not verify.
    #[error("Invalid SOL record signature")]
    InvalidSignature,

    /// The signature passed to the signed-record encoder does not verify.
    #[error("Invalid signed record")]
    InvalidSignedRecord,

    /// SOL records must go through the signed-record encoder.
    #[error("SOL records must be encoded with encode_signed")]
    UnsupportedSignedRecord,

    #[error("Invalid EVM address: {0}")]
    InvalidEvmAddress(String),

    #[error("Invalid Injective address: {0}")]
    InvalidInjectiveAddress(String),

    #[error("Invalid A record: {0}")]
    InvalidARecord(String),

    #[error("Invalid AAAA record: {0}")]
    InvalidAAAARecord(String),

    #[error("Invalid pubkey: {0}")]
    InvalidPubkey(String),

    /// CNAME/TXT content could not be converted to ASCII.
    #[error("Invalid hostname: {0}")]
    InvalidHostname(String),

    #[error("Unknown record type: {0}")]
    UnknownRecordType(String),
}
