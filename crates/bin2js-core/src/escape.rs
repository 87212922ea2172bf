//! Hex-escape codec
//!
//! Every byte is written as `\xNN` with two lowercase hex digits, in input
//! order and without separators. A JS string literal built this way decodes
//! to exactly one UTF-16 code unit per byte, all below U+0100.

use crate::{Bin2JsError, Result};

const PREFIX: &[u8; 2] = b"\\x";
const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Width of one escape sequence in the encoded text
pub const ESCAPE_WIDTH: usize = 4;

/// Encode bytes as a run of `\xNN` escapes
pub fn escape_bytes(data: &[u8]) -> String {
    let mut out = String::with_capacity(data.len() * ESCAPE_WIDTH);
    for &b in data {
        out.push('\\');
        out.push('x');
        out.push(HEX_DIGITS[(b >> 4) as usize] as char);
        out.push(HEX_DIGITS[(b & 0x0f) as usize] as char);
    }
    out
}

/// Decode a run of `\xNN` escapes back into bytes.
///
/// Only the exact form produced by [`escape_bytes`] is accepted: uppercase
/// digits, other escapes and raw characters are rejected with the byte offset
/// of the offending sequence.
pub fn unescape(text: &str) -> Result<Vec<u8>> {
    let raw = text.as_bytes();
    if raw.len() % ESCAPE_WIDTH != 0 {
        let offset = raw.len() - raw.len() % ESCAPE_WIDTH;
        return Err(Bin2JsError::MalformedEscape { offset });
    }

    let mut out = Vec::with_capacity(raw.len() / ESCAPE_WIDTH);
    for (i, chunk) in raw.chunks_exact(ESCAPE_WIDTH).enumerate() {
        let offset = i * ESCAPE_WIDTH;
        if !chunk.starts_with(PREFIX) {
            return Err(Bin2JsError::MalformedEscape { offset });
        }
        let hi = hex_value(chunk[2]).ok_or(Bin2JsError::MalformedEscape { offset })?;
        let lo = hex_value(chunk[3]).ok_or(Bin2JsError::MalformedEscape { offset })?;
        out.push((hi << 4) | lo);
    }
    Ok(out)
}

fn hex_value(digit: u8) -> Option<u8> {
    match digit {
        b'0'..=b'9' => Some(digit - b'0'),
        b'a'..=b'f' => Some(digit - b'a' + 10),
        _ => None,
    }
}
