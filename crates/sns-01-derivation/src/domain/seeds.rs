//! # Name Account Seeds
//!
//! Name accounts are always derived from exactly three 32-byte seeds in
//! fixed order: hashed name, class, parent. An absent class or parent is
//! 32 zero bytes, never omitted.

use shared_types::{HashedName, Pubkey};

/// The three seeds of a name account.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DerivationSeeds {
    hashed_name: HashedName,
    class: [u8; 32],
    parent: [u8; 32],
}

impl DerivationSeeds {
    /// Build seeds, zero-filling an absent class or parent.
    pub fn new(hashed_name: HashedName, class: Option<&Pubkey>, parent: Option<&Pubkey>) -> Self {
        Self {
            hashed_name,
            class: class.map(Pubkey::to_bytes).unwrap_or_default(),
            parent: parent.map(Pubkey::to_bytes).unwrap_or_default(),
        }
    }

    pub fn hashed_name(&self) -> &HashedName {
        &self.hashed_name
    }

    /// Seeds in derivation order.
    pub fn as_slices(&self) -> [&[u8]; 3] {
        [&self.hashed_name, &self.class, &self.parent]
    }
}
