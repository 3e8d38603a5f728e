//! Base64 encoding and decoding of Unicode text
//!
//! Encoding always goes through the UTF-8 byte representation so non-ASCII
//! text round-trips correctly. Decoding is total: any malformed input — bad
//! alphabet, bad padding, or a payload that is not valid UTF-8 — collapses to
//! a fixed, user-visible sentinel string instead of an error.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// Sentinel returned for any undecodable input
pub const INVALID_BASE64: &str = "Error: Invalid Base64 string";

/// Encode a string as standard-alphabet Base64 of its UTF-8 bytes
pub fn to_base64(input: &str) -> String {
    STANDARD.encode(input.as_bytes())
}

/// Decode standard-alphabet Base64 back into a string.
///
/// Malformed input yields [`INVALID_BASE64`] rather than an error value —
/// the callers of this function display results directly.
pub fn from_base64(input: &str) -> String {
    match STANDARD.decode(input.trim()) {
        Ok(bytes) => match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(_) => INVALID_BASE64.to_string(),
        },
        Err(_) => INVALID_BASE64.to_string(),
    }
}
