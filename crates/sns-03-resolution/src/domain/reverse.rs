//! # Reverse Lookup Payload
//!
//! Layout: `name_len (u32 LE) || name (UTF-8)`. Bytes past the name are
//! account padding and ignored. Subdomain payloads start with `\0`.

use crate::domain::errors::ResolutionError;

const LEN_PREFIX: usize = 4;

/// Parse a reverse-lookup payload into a name.
///
/// # Errors
/// - `NoAccountData` for an empty payload or a zero name length
/// - `InvalidReverse` for a truncated payload or invalid UTF-8
pub fn deserialize_reverse(data: &[u8], trim_leading_null: bool) -> Result<String, ResolutionError> {
    if data.is_empty() {
        return Err(ResolutionError::NoAccountData);
    }

    let prefix: [u8; LEN_PREFIX] = data
        .get(..LEN_PREFIX)
        .and_then(|bytes| bytes.try_into().ok())
        .ok_or_else(|| {
            ResolutionError::InvalidReverse(format!("{} bytes, no length prefix", data.len()))
        })?;

    let name_len = u32::from_le_bytes(prefix) as usize;
    if name_len == 0 {
        return Err(ResolutionError::NoAccountData);
    }

    let name_bytes = data
        .get(LEN_PREFIX..LEN_PREFIX.saturating_add(name_len))
        .ok_or_else(|| {
            ResolutionError::InvalidReverse(format!(
                "name length {name_len} exceeds {} payload bytes",
                data.len() - LEN_PREFIX
            ))
        })?;

    let name = std::str::from_utf8(name_bytes)
        .map_err(|e| ResolutionError::InvalidReverse(e.to_string()))?;

    let name = match name.strip_prefix('\0') {
        Some(rest) if trim_leading_null => rest,
        _ => name,
    };

    Ok(name.to_string())
}

/// Build a reverse-lookup payload for `name`.
pub fn serialize_reverse(name: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(LEN_PREFIX + name.len());
    out.extend_from_slice(&(name.len() as u32).to_le_bytes());
    out.extend_from_slice(name.as_bytes());
    out
}
