//! # Program-Derived Addresses
//!
//! `address = sha256(seed_1 || ... || seed_n || program_id || "ProgramDerivedAddress")`
//!
//! A valid derived address must NOT be a point on the Ed25519 curve, so no
//! private key can exist for it. The search appends a one-byte bump seed,
//! starting at 255 and descending, and keeps the first off-curve result.

use crate::domain::errors::DerivationError;
use crate::domain::seeds::DerivationSeeds;
use shared_crypto::{is_on_curve, sha256_many};
use shared_types::Pubkey;

/// Maximum number of seeds, bump included.
pub const MAX_SEEDS: usize = 16;

/// Maximum length of a single seed.
pub const MAX_SEED_LEN: usize = 32;

/// Domain separator appended after the program id.
pub const PDA_MARKER: &[u8] = b"ProgramDerivedAddress";

fn check_seeds(seeds: &[&[u8]], max_count: usize) -> Result<(), DerivationError> {
    if seeds.len() > max_count {
        return Err(DerivationError::TooManySeeds {
            count: seeds.len(),
            max: max_count,
        });
    }

    if let Some((index, seed)) = seeds
        .iter()
        .enumerate()
        .find(|(_, seed)| seed.len() > MAX_SEED_LEN)
    {
        return Err(DerivationError::MaxSeedLengthExceeded {
            index,
            len: seed.len(),
            max: MAX_SEED_LEN,
        });
    }

    Ok(())
}

/// Hash `seeds` (bump already included) into a candidate address.
///
/// # Errors
/// - `TooManySeeds` / `MaxSeedLengthExceeded` on oversized input
/// - `OnCurve` if the candidate is a valid curve point
pub fn create_program_address(
    seeds: &[&[u8]],
    program_id: &Pubkey,
) -> Result<Pubkey, DerivationError> {
    check_seeds(seeds, MAX_SEEDS)?;

    let mut parts: Vec<&[u8]> = Vec::with_capacity(seeds.len() + 2);
    parts.extend_from_slice(seeds);
    parts.push(program_id.as_ref());
    parts.push(PDA_MARKER);

    let candidate = sha256_many(&parts);
    if is_on_curve(&candidate) {
        return Err(DerivationError::OnCurve);
    }

    Ok(Pubkey::new_from_array(candidate))
}

/// Find the first off-curve address, descending bump from 255 to 1.
///
/// Returns the address together with the bump that produced it.
pub fn find_program_address(
    seeds: &[&[u8]],
    program_id: &Pubkey,
) -> Result<(Pubkey, u8), DerivationError> {
    // One slot is reserved for the bump.
    check_seeds(seeds, MAX_SEEDS - 1)?;

    for bump in (1..=u8::MAX).rev() {
        let bump_seed = [bump];
        let with_bump: Vec<&[u8]> = seeds
            .iter()
            .copied()
            .chain(std::iter::once(&bump_seed[..]))
            .collect();

        match create_program_address(&with_bump, program_id) {
            Ok(address) => return Ok((address, bump)),
            Err(DerivationError::OnCurve) => continue,
            Err(e) => return Err(e),
        }
    }

    Err(DerivationError::NoViableBump)
}

/// Derive a name account address from its three seeds.
pub fn derive(
    seeds: &DerivationSeeds,
    program_id: &Pubkey,
) -> Result<(Pubkey, u8), DerivationError> {
    find_program_address(&seeds.as_slices(), program_id)
}
