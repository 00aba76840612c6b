//! # Shared Crypto
//!
//! ## Components
//!
//! | Module | Algorithm | Use Case |
//! |--------|-----------|----------|
//! | `hashing` | SHA-256 | Prefixed name hashing, address derivation |
//! | `curve` | Edwards25519 | Rejecting on-curve derived addresses |
//! | `signatures` | Ed25519 | Signed record verification |
//!
//! ## Security Properties
//!
//! - **Ed25519**: strict verification (no small-order keys, canonical S)
//! - **Derived addresses**: never valid curve points, so no private key exists

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod curve;
pub mod errors;
pub mod hashing;
pub mod signatures;

// Re-exports
pub use curve::is_on_curve;
pub use errors::CryptoError;
pub use hashing::{hash_name, sha256, sha256_many, Hash, NameHasher, DEFAULT_HASH_PREFIX};
pub use signatures::{verify_ed25519, Ed25519KeyPair, Ed25519PublicKey, Ed25519Signature};
