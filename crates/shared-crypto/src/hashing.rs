//! # Name Hashing
//!
//! SHA-256 with a domain-separation prefix. Every name account is keyed by
//! `sha256(prefix || name)`, with the prefix fixed to `"SPL Name Service"`
//! on every cluster.

use sha2::{Digest, Sha256};

/// SHA-256 output (256-bit).
pub type Hash = [u8; 32];

/// Default name hashing prefix.
pub const DEFAULT_HASH_PREFIX: &str = "SPL Name Service";

/// Hash data with SHA-256 (one-shot).
pub fn sha256(data: &[u8]) -> Hash {
    Sha256::digest(data).into()
}

/// Hash multiple inputs as one concatenated message.
pub fn sha256_many(inputs: &[&[u8]]) -> Hash {
    let mut hasher = Sha256::new();
    for input in inputs {
        hasher.update(input);
    }
    hasher.finalize().into()
}

/// Prefixed name hasher.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NameHasher {
    prefix: String,
}

impl NameHasher {
    /// Create a hasher with a custom prefix.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// The configured prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// `sha256(prefix || name)`. Total over any string, including the empty one.
    pub fn hash(&self, name: &str) -> Hash {
        sha256_many(&[self.prefix.as_bytes(), name.as_bytes()])
    }
}

impl Default for NameHasher {
    fn default() -> Self {
        Self::new(DEFAULT_HASH_PREFIX)
    }
}

/// Hash a name with the default prefix.
pub fn hash_name(name: &str) -> Hash {
    NameHasher::default().hash(name)
}
