//! # Domain Layer
//!
//! Pure derivation logic with no I/O dependencies.

pub mod errors;
pub mod pda;
pub mod resolver;
pub mod seeds;
