//! Input normalization: text-or-bytes acceptance and whitespace handling.

use alloc::string::String;
use alloc::vec::Vec;

use crate::error::Error;

/// Codec input given either as text or as raw bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input<'a> {
    /// Text, converted to bytes under strict ASCII.
    Text(&'a str),
    /// Bytes, used as-is.
    Bytes(&'a [u8]),
}

impl<'a> From<&'a str> for Input<'a> {
    fn from(text: &'a str) -> Self {
        Input::Text(text)
    }
}

impl<'a> From<&'a String> for Input<'a> {
    fn from(text: &'a String) -> Self {
        Input::Text(text.as_str())
    }
}

impl<'a> From<&'a [u8]> for Input<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Input::Bytes(bytes)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Input<'a> {
    fn from(bytes: &'a [u8; N]) -> Self {
        Input::Bytes(bytes.as_slice())
    }
}

impl<'a> From<&'a Vec<u8>> for Input<'a> {
    fn from(bytes: &'a Vec<u8>) -> Self {
        Input::Bytes(bytes.as_slice())
    }
}

/// Convert input to bytes, rejecting non-ASCII text.
pub fn scrub(input: Input<'_>) -> Result<&[u8], Error> {
    match input {
        Input::Text(text) => ascii_bytes(text),
        Input::Bytes(bytes) => Ok(bytes),
    }
}

/// Strip trailing whitespace, then convert to bytes.
///
/// Decoders accept values read back from storage with a trailing newline.
pub(crate) fn normalize(input: Input<'_>) -> Result<&[u8], Error> {
    match input {
        Input::Text(text) => ascii_bytes(text.trim_end()),
        Input::Bytes(bytes) => Ok(trim_trailing_whitespace(bytes)),
    }
}

fn ascii_bytes(text: &str) -> Result<&[u8], Error> {
    let bytes = text.as_bytes();
    match bytes.iter().position(|b| !b.is_ascii()) {
        Some(position) => Err(Error::Encoding { byte: bytes[position], position }),
        None => Ok(bytes),
    }
}

/// Space, tab, line feed, carriage return, vertical tab and form feed.
#[inline]
fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

fn trim_trailing_whitespace(bytes: &[u8]) -> &[u8] {
    let end = bytes
        .iter()
        .rposition(|&b| !is_whitespace(b))
        .map_or(0, |last| last + 1);
    &bytes[..end]
}
