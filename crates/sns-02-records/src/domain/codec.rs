//! # Record Codec
//!
//! `decode` turns a record payload into its display string, `encode` does
//! the reverse for every type except SOL (see `signed`).
//!
//! Fixed-length payloads exactly at their declared length are binary.
//! Anything shorter once trailing zeros are trimmed is treated as a
//! legacy UTF-8 string and must pass the type's validation.

use crate::domain::errors::RecordError;
use crate::domain::record_type::{RecordLength, RecordType};
use crate::domain::signed::verify_sol_record;
use bech32::{FromBase32, ToBase32, Variant};
use shared_types::Pubkey;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use tracing::{debug, warn};

/// Human-readable part of Injective addresses.
pub const INJECTIVE_HRP: &str = "inj";

const EVM_ADDRESS_LEN: usize = 20;

// =============================================================================
// DECODE
// =============================================================================

/// Decode a record payload into its display string.
///
/// `record_address` is only used by SOL records, whose signature covers it.
///
/// # Errors
/// - `NoData` for an empty or all-zero payload
/// - `InvalidRecordData` when the payload does not fit the type
/// - `InvalidSignature` for a SOL record whose signature does not verify
pub fn decode(
    data: &[u8],
    record_type: RecordType,
    record_address: &Pubkey,
) -> Result<String, RecordError> {
    let idx = match data.iter().rposition(|&b| b != 0) {
        Some(pos) => pos + 1,
        None => return Err(RecordError::NoData),
    };
    let content = &data[..idx];

    let len = match record_type.length() {
        RecordLength::Variable => return utf8(content),
        RecordLength::Fixed(len) => len,
    };

    if idx != len {
        debug!(
            record = %record_type,
            declared = len,
            actual = idx,
            "[sns-02] Fixed-length record not at declared length, reading as string"
        );
        return decode_legacy_string(content, record_type);
    }

    match record_type {
        RecordType::Sol => {
            let (key, signature) = content.split_at(32);
            if !verify_sol_record(key, record_address, signature) {
                warn!(record_address = %record_address, "[sns-02] SOL record signature does not verify");
                return Err(RecordError::InvalidSignature);
            }
            Ok(bs58::encode(key).into_string())
        }
        RecordType::Eth | RecordType::Bsc => Ok(format!("0x{}", hex::encode(content))),
        RecordType::Injective => Ok(bech32::encode(
            INJECTIVE_HRP,
            content.to_base32(),
            Variant::Bech32,
        )
        .map_err(|_| RecordError::InvalidRecordData)?),
        RecordType::A => {
            let octets: [u8; 4] = content
                .try_into()
                .map_err(|_| RecordError::InvalidRecordData)?;
            Ok(Ipv4Addr::from(octets).to_string())
        }
        RecordType::AAAA => {
            let octets: [u8; 16] = content
                .try_into()
                .map_err(|_| RecordError::InvalidRecordData)?;
            Ok(Ipv6Addr::from(octets).to_string())
        }
        RecordType::Background => Ok(bs58::encode(content).into_string()),
        _ => Err(RecordError::InvalidRecordData),
    }
}

fn utf8(bytes: &[u8]) -> Result<String, RecordError> {
    String::from_utf8(bytes.to_vec()).map_err(|_| RecordError::InvalidRecordData)
}

fn decode_legacy_string(content: &[u8], record_type: RecordType) -> Result<String, RecordError> {
    let value = utf8(content)?;

    let valid = match record_type {
        RecordType::Injective => parse_injective(&value).is_some(),
        RecordType::Eth | RecordType::Bsc => parse_evm(&value).is_some(),
        RecordType::A | RecordType::AAAA => value.parse::<IpAddr>().is_ok(),
        RecordType::Background => value.parse::<Pubkey>().is_ok(),
        _ => false,
    };

    if valid {
        Ok(value)
    } else {
        warn!(record = %record_type, "[sns-02] Legacy record string failed validation");
        Err(RecordError::InvalidRecordData)
    }
}

/// `0x` followed by exactly 40 hex characters.
fn parse_evm(value: &str) -> Option<Vec<u8>> {
    let digits = value.strip_prefix("0x")?;
    if digits.len() != EVM_ADDRESS_LEN * 2 {
        return None;
    }
    hex::decode(digits).ok()
}

/// bech32 with hrp `inj` and a 20-byte payload.
fn parse_injective(value: &str) -> Option<Vec<u8>> {
    let (hrp, data, _variant) = bech32::decode(value).ok()?;
    if hrp != INJECTIVE_HRP {
        return None;
    }
    let payload = Vec::<u8>::from_base32(&data).ok()?;
    (payload.len() == EVM_ADDRESS_LEN).then_some(payload)
}

// =============================================================================
// ENCODE
// =============================================================================

/// Encode a display string into a record payload.
///
/// Variable-length values are stored as UTF-8, except CNAME and TXT
/// whose non-ASCII content is converted to its IDNA ASCII form.
pub fn encode(value: &str, record_type: RecordType) -> Result<Vec<u8>, RecordError> {
    match record_type {
        RecordType::Cname | RecordType::Txt => encode_hostname(value),
        RecordType::Sol => Err(RecordError::UnsupportedSignedRecord),
        RecordType::Eth | RecordType::Bsc => {
            parse_evm(value).ok_or_else(|| RecordError::InvalidEvmAddress(value.to_string()))
        }
        RecordType::Injective => parse_injective(value)
            .ok_or_else(|| RecordError::InvalidInjectiveAddress(value.to_string())),
        RecordType::A => value
            .parse::<Ipv4Addr>()
            .map(|ip| ip.octets().to_vec())
            .map_err(|_| RecordError::InvalidARecord(value.to_string())),
        RecordType::AAAA => value
            .parse::<Ipv6Addr>()
            .map(|ip| ip.octets().to_vec())
            .map_err(|_| RecordError::InvalidAAAARecord(value.to_string())),
        RecordType::Background => value
            .parse::<Pubkey>()
            .map(|key| key.to_bytes().to_vec())
            .map_err(|e| RecordError::InvalidPubkey(e.to_string())),
        other => match other.length() {
            RecordLength::Variable => Ok(value.as_bytes().to_vec()),
            RecordLength::Fixed(_) => Err(RecordError::InvalidRecordData),
        },
    }
}

/// Punycode each non-ASCII label, leaving ASCII labels and case untouched.
fn encode_hostname(value: &str) -> Result<Vec<u8>, RecordError> {
    if value.is_ascii() {
        return Ok(value.as_bytes().to_vec());
    }

    let labels = value
        .split('.')
        .map(|label| {
            if label.is_ascii() {
                Ok(label.to_string())
            } else {
                idna::punycode::encode_str(label)
                    .map(|encoded| format!("xn--{encoded}"))
                    .ok_or_else(|| RecordError::InvalidHostname(value.to_string()))
            }
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(labels.join(".").into_bytes())
}
