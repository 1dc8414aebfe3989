//! Blind transport encoding for names and file content.
//!
//! Every raw byte maps to `%` plus two lowercase hex digits, so the encoded
//! form is always exactly three times the raw length and stays inside
//! `[a-f0-9%]`. Only the remote side ever decodes; names coming back in
//! listing responses arrive as plain display strings.

use crate::error::Error;

/// Upper bound on a raw entry name accepted for transport.
pub const MAX_NAME_LEN: usize = 255;

const HEX: &[u8; 16] = b"0123456789abcdef";

pub fn encode(raw: &[u8]) -> String {
    let mut out = String::with_capacity(raw.len() * 3);

    for byte in raw {
        out.push('%');
        out.push(HEX[usize::from(byte >> 4)] as char);
        out.push(HEX[usize::from(byte & 0xf)] as char);
    }

    out
}

/// Parses a decimal identifier or length from a response body, tolerating
/// surrounding ASCII whitespace.
pub fn decimal(bytes: &[u8]) -> Result<u64, Error> {
    let text = std::str::from_utf8(bytes)
        .map_err(|_| Error::Protocol("non-ASCII decimal field".to_owned()))?
        .trim();

    text.parse::<u64>()
        .map_err(|_| Error::Protocol(format!("non-numeric identifier {text:?}")))
}
