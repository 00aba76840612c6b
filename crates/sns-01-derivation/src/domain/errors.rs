//! # Derivation Errors

use thiserror::Error;

/// Errors that can occur while deriving addresses.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DerivationError {
    /// Every bump from 255 down to 1 produced an on-curve point.
    ///
    /// Fatal for the call that hit it.
    #[error("No viable bump seed found")]
    NoViableBump,

    /// The candidate address lies on the Ed25519 curve.
    #[error("Derived address is on the curve")]
    OnCurve,

    /// A seed is longer than 32 bytes.
    #[error("Seed {index} is {len} bytes, max is {max}")]
    MaxSeedLengthExceeded { index: usize, len: usize, max: usize },

    /// More seeds than the runtime accepts.
    #[error("Too many seeds: {count}, max is {max}")]
    TooManySeeds { count: usize, max: usize },
}
