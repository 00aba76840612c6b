//! # Address Derivation Subsystem (SNS-01)
//!
//! Maps human-readable names onto name service account addresses.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): pure derivation logic, no I/O
//!   - `pda`: program-derived address search
//!   - `seeds`: the fixed three-seed layout of name accounts
//!   - `resolver`: domain, subdomain, record, reverse and mint keys
//!
//! ## Derivation Rules
//!
//! | Input | Hashed label | Parent | Class |
//! |-------|--------------|--------|-------|
//! | `name` | `name` | root | none |
//! | `sub.name` | `\0sub` | `name` | none |
//! | `rec.name` (V1) | `\x01rec` | `name` | none |
//! | `rec.name` (V2) | `\x02rec` | `name` | records V2 |
//! | `rec.sub.name` | `\x01rec` | `\0sub` | none |
//!
//! Everything here is synchronous and side-effect free.

pub mod domain;

// Re-export public API
pub use domain::errors::DerivationError;
pub use domain::pda::{
    create_program_address, derive, find_program_address, MAX_SEEDS, MAX_SEED_LEN, PDA_MARKER,
};
pub use domain::resolver::{DomainKey, DomainKeyResolver, RecordVersion, MINT_PREFIX};
pub use domain::seeds::DerivationSeeds;
