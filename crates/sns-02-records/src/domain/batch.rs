//! # Batch Decoding
//!
//! Decodes many record payloads in parallel. Results line up with the
//! requests; one failure does not affect the others.

use crate::domain::codec::decode;
use crate::domain::errors::RecordError;
use crate::domain::record_type::RecordType;
use rayon::prelude::*;
use shared_types::Pubkey;

/// One payload to decode.
#[derive(Clone, Copy, Debug)]
pub struct DecodeRequest<'a> {
    pub data: &'a [u8],
    pub record_type: RecordType,
    pub record_address: Pubkey,
}

/// Decode every request, preserving input order.
pub fn decode_batch(requests: &[DecodeRequest<'_>]) -> Vec<Result<String, RecordError>> {
    requests
        .par_iter()
        .map(|req| decode(req.data, req.record_type, &req.record_address))
        .collect()
}
