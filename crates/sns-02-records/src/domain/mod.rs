//! # Domain Layer
//!
//! Pure codec logic with no I/O dependencies.

pub mod batch;
pub mod codec;
pub mod errors;
pub mod record_type;
pub mod signed;
