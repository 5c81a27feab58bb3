use std::borrow::Cow;

use super::recode::EncodingError;

/// Decodes a reaction token that has already been through [`super::recode`]
/// once, replacing invalid sequences with U+FFFD.
///
/// The exporter corrupts reactions twice, so the once-recovered token still
/// holds one code unit per emoji byte. This pass works on the UTF-16LE byte
/// image of the token and keeps the first byte of every pair.
///
/// # Examples
///
/// ```
/// use messenger_history_parser::encoding::decode_reaction;
///
/// // "❤" is E2 9D A4 in UTF-8
/// assert_eq!(decode_reaction("\u{00e2}\u{009d}\u{00a4}"), "❤");
/// ```
pub fn decode_reaction(raw: &str) -> Cow<'_, str> {
    if raw.is_ascii() {
        return Cow::Borrowed(raw);
    }
    Cow::Owned(String::from_utf8_lossy(&compact_le_pairs(raw)).into_owned())
}

/// Strict variant of [`decode_reaction`].
pub fn try_decode_reaction(raw: &str) -> Result<Cow<'_, str>, EncodingError> {
    if raw.is_ascii() {
        return Ok(Cow::Borrowed(raw));
    }
    String::from_utf8(compact_le_pairs(raw))
        .map(Cow::Owned)
        .map_err(|e| EncodingError::from(e.utf8_error()))
}

/// Shifts byte `2i` of the UTF-16LE image down to slot `i` and drops the upper
/// half, leaving one byte per code unit.
fn compact_le_pairs(raw: &str) -> Vec<u8> {
    let mut bytes: Vec<u8> = raw.encode_utf16().flat_map(u16::to_le_bytes).collect();
    let half = bytes.len() / 2;
    for i in 1..half {
        bytes[i] = bytes[i * 2];
    }
    bytes.truncate(half);
    bytes
}
