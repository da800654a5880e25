//! Hex transport for fingerprints crossing a text-only boundary.
//!
//! Fingerprints travel as 16 uppercase hex digits, zero-padded, most
//! significant nibble first. Nothing in the core depends on this module.

use crate::error::{Error, Result};
use crate::fingerprint::{Fingerprint, generate_fingerprint};
use crate::hamming::hamming_distance;

pub const HEX_LEN: usize = 16;

pub fn encode_hex(fingerprint: Fingerprint) -> String {
    format!("{fingerprint:016X}")
}

/// Exact inverse of [`encode_hex`]. Lowercase digits are accepted; anything
/// that is not exactly 16 hex digits is an error, never a silent zero.
pub fn decode_hex(input: &str) -> Result<Fingerprint> {
    if input.len() != HEX_LEN {
        return Err(Error::Decode {
            input: input.to_owned(),
            reason: "expected 16 hex digits",
        });
    }
    if !input.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(Error::Decode {
            input: input.to_owned(),
            reason: "non-hex character",
        });
    }
    u64::from_str_radix(input, 16).map_err(|_| Error::Decode {
        input: input.to_owned(),
        reason: "not a 64-bit value",
    })
}

/// Fingerprint `text` straight to its hex form.
pub fn fingerprint_hex(text: impl AsRef<[u8]>) -> String {
    encode_hex(generate_fingerprint(text))
}

/// Distance between two hex-encoded fingerprints.
pub fn distance_hex(a: &str, b: &str) -> Result<u32> {
    Ok(hamming_distance(decode_hex(a)?, decode_hex(b)?))
}
