//! # Core Domain Entities
//!
//! - `Pubkey`: 32-byte account address, displayed as base58
//! - `HashedName`: prefixed SHA-256 digest of a name
//! - `RegistryState`: the name registry account layout (96-byte header + data)

use crate::errors::{PubkeyError, RegistryError};
use serde::{Deserialize, Serialize};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::fmt;
use std::str::FromStr;

/// A 32-byte SHA-256 digest of `hash_prefix || name`.
pub type HashedName = [u8; 32];

/// Length of the name registry header (parent, owner, class).
pub const REGISTRY_HEADER_LEN: usize = 96;

// =============================================================================
// PUBKEY
// =============================================================================

/// A 32-byte account address.
///
/// Serialized (serde, `Display`) as base58, the form the protocol hashes
/// when deriving reverse-lookup accounts.
#[derive(
    Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, SerializeDisplay, DeserializeFromStr,
)]
pub struct Pubkey([u8; 32]);

impl Pubkey {
    /// Address length in bytes.
    pub const LEN: usize = 32;

    /// Create from a byte array.
    pub const fn new_from_array(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Create from a slice, which must be exactly 32 bytes.
    pub fn try_from_slice(bytes: &[u8]) -> Result<Self, PubkeyError> {
        let array: [u8; 32] = bytes.try_into().map_err(|_| PubkeyError::InvalidLength {
            expected: Self::LEN,
            actual: bytes.len(),
        })?;
        Ok(Self(array))
    }

    /// Get raw bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Copy out raw bytes.
    pub const fn to_bytes(&self) -> [u8; 32] {
        self.0
    }

    /// Base58 representation.
    pub fn to_base58(&self) -> String {
        bs58::encode(self.0).into_string()
    }
}

impl AsRef<[u8]> for Pubkey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 32]> for Pubkey {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for Pubkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_base58())
    }
}

impl fmt::Debug for Pubkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pubkey({})", self.to_base58())
    }
}

impl FromStr for Pubkey {
    type Err = PubkeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = bs58::decode(s)
            .into_vec()
            .map_err(|e| PubkeyError::InvalidBase58(e.to_string()))?;
        Self::try_from_slice(&bytes)
    }
}

// =============================================================================
// NAME REGISTRY
// =============================================================================

/// Content of a name registry account.
///
/// Layout: `parent_name (32) || owner (32) || class (32) || data (..)`.
/// `data` is `None` when nothing follows the header; an empty payload is
/// never reported as `Some(vec![])`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryState {
    /// Parent name account (the root domain for top-level names).
    pub parent_name: Pubkey,
    /// Owner of the name.
    pub owner: Pubkey,
    /// Class of the name (reverse-lookup class, records class, or zeros).
    pub class: Pubkey,
    /// Everything past the 96-byte header.
    pub data: Option<Vec<u8>>,
}

impl RegistryState {
    /// Parse raw account bytes.
    pub fn deserialize(raw: &[u8]) -> Result<Self, RegistryError> {
        if raw.len() < REGISTRY_HEADER_LEN {
            return Err(RegistryError::HeaderTooShort { len: raw.len() });
        }

        let data = &raw[REGISTRY_HEADER_LEN..];

        Ok(Self {
            parent_name: Pubkey::try_from_slice(&raw[0..32])?,
            owner: Pubkey::try_from_slice(&raw[32..64])?,
            class: Pubkey::try_from_slice(&raw[64..96])?,
            data: (!data.is_empty()).then(|| data.to_vec()),
        })
    }

    /// Serialize back into the account layout.
    pub fn serialize(&self) -> Vec<u8> {
        let payload = self.data.as_deref().unwrap_or_default();
        let mut out = Vec::with_capacity(REGISTRY_HEADER_LEN + payload.len());
        out.extend_from_slice(self.parent_name.as_bytes());
        out.extend_from_slice(self.owner.as_bytes());
        out.extend_from_slice(self.class.as_bytes());
        out.extend_from_slice(payload);
        out
    }

    /// Payload past the header, if any.
    pub fn data(&self) -> Option<&[u8]> {
        self.data.as_deref()
    }
}
