//! # Signed SOL Records
//!
//! A SOL record is `pubkey (32) || signature (64)`. The signature covers
//! the ASCII lowercase hex of `pubkey || record_address`, which binds the
//! content to the record account it is stored in.

use crate::domain::errors::RecordError;
use shared_crypto::verify_ed25519;
use shared_types::Pubkey;
use tracing::warn;

/// Message a SOL record signature must cover.
pub fn signing_message(content: &[u8], record_address: &Pubkey) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(content.len() + Pubkey::LEN);
    bytes.extend_from_slice(content);
    bytes.extend_from_slice(record_address.as_ref());
    hex::encode(bytes).into_bytes()
}

/// Verify a SOL record where the content key is also the signer.
pub(crate) fn verify_sol_record(key: &[u8], record_address: &Pubkey, signature: &[u8]) -> bool {
    verify_ed25519(key, &signing_message(key, record_address), signature).is_ok()
}

/// Build a SOL record payload, checking `signature` by `signer` first.
///
/// Returns `content || signature` (96 bytes).
pub fn encode_signed(
    content: &Pubkey,
    record_address: &Pubkey,
    signer: &Pubkey,
    signature: &[u8; 64],
) -> Result<Vec<u8>, RecordError> {
    let message = signing_message(content.as_ref(), record_address);

    if let Err(e) = verify_ed25519(signer.as_ref(), &message, signature) {
        warn!(signer = %signer, error = %e, "[sns-02] Rejected signed record");
        return Err(RecordError::InvalidSignedRecord);
    }

    let mut payload = Vec::with_capacity(Pubkey::LEN + signature.len());
    payload.extend_from_slice(content.as_ref());
    payload.extend_from_slice(signature);
    Ok(payload)
}
