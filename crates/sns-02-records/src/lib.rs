//! # Record Codec Subsystem (SNS-02)
//!
//! Converts record account payloads to and from their display strings.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): pure codec logic, no I/O
//!   - `record_type`: the closed set of record identifiers and their lengths
//!   - `codec`: generic decode/encode with per-type validation
//!   - `signed`: the signed SOL record encoder
//!   - `batch`: parallel decoding of many payloads
//!
//! ## On-chain Format
//!
//! Variable-length records are null-padded UTF-8. Fixed-length records
//! are raw binary of the declared length. Older fixed-length records
//! were stored as UTF-8 strings and are still accepted when the string
//! passes the type's validation.

pub mod domain;

// Re-export public API
pub use domain::batch::{decode_batch, DecodeRequest};
pub use domain::codec::{decode, encode};
pub use domain::errors::RecordError;
pub use domain::record_type::{RecordLength, RecordType};
pub use domain::signed::{encode_signed, signing_message};
