//! Utility functions for encoding datatypes in a consistent way across the `passkey` libraries
//! with a mind on global webauthn ecosystem support.

use data_encoding::{BASE64URL_NOPAD, BASE64_NOPAD};

const PADDING: char = '=';

/// Convert bytes to base64 without padding
pub fn base64(data: &[u8]) -> String {
    BASE64_NOPAD.encode(data)
}

/// Convert bytes to base64url without padding
pub fn base64url(data: &[u8]) -> String {
    BASE64URL_NOPAD.encode(data)
}

/// Try parsing from base64 with or without padding
pub(crate) fn try_from_base64(input: &str) -> Option<Vec<u8>> {
    BASE64_NOPAD
        .decode(input.trim_end_matches(PADDING).as_bytes())
        .ok()
}

/// Try parsing from base64url with or without padding.
///
/// This is what the `challenge` member of the client data is encoded with.
pub fn try_from_base64url(input: &str) -> Option<Vec<u8>> {
    BASE64URL_NOPAD
        .decode(input.trim_end_matches(PADDING).as_bytes())
        .ok()
}
