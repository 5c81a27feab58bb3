use std::borrow::Cow;

use thiserror::Error;

/// The bytes recovered from a string were not valid UTF-8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("recovered bytes are not valid UTF-8 (first invalid byte at offset {offset})")]
pub struct EncodingError {
    /// Offset of the first invalid byte in the recovered byte sequence
    pub offset: usize,
}

impl From<std::str::Utf8Error> for EncodingError {
    fn from(err: std::str::Utf8Error) -> Self {
        Self { offset: err.valid_up_to() }
    }
}

/// Reverses the export's byte-per-code-unit corruption, substituting U+FFFD for
/// byte sequences that are not valid UTF-8.
///
/// Total: never fails and never panics. ASCII input (including the empty
/// string) is returned borrowed.
///
/// # Examples
///
/// ```
/// use messenger_history_parser::encoding::recode;
///
/// assert_eq!(recode("Caf\u{00c3}\u{00a9}"), "Café");
/// assert_eq!(recode(""), "");
/// ```
pub fn recode(input: &str) -> Cow<'_, str> {
    if input.is_ascii() {
        return Cow::Borrowed(input);
    }
    Cow::Owned(String::from_utf8_lossy(&low_bytes(input)).into_owned())
}

/// Strict variant of [`recode`]: fails instead of substituting when the
/// recovered bytes are not valid UTF-8.
///
/// This is what the chunk loader applies to every string leaf.
pub fn try_recode(input: &str) -> Result<Cow<'_, str>, EncodingError> {
    if input.is_ascii() {
        return Ok(Cow::Borrowed(input));
    }
    String::from_utf8(low_bytes(input))
        .map(Cow::Owned)
        .map_err(|e| EncodingError::from(e.utf8_error()))
}

/// Low 8 bits of every UTF-16 code unit, in order.
fn low_bytes(input: &str) -> Vec<u8> {
    input.encode_utf16().map(|unit| unit as u8).collect()
}
