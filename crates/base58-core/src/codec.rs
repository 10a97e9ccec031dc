//! Payload-level base58 encoding and decoding.

use alloc::string::String;
use alloc::vec::Vec;

use crate::alphabet::Alphabet;
use crate::convert::{accumulate, bytes_to_int, encode_int, int_to_bytes};
use crate::error::Error;
use crate::input::{normalize, scrub, Input};

/// Encode a payload as base58 text.
///
/// Each leading zero byte becomes one leading zero-symbol; the remaining
/// bytes are read as a big-endian number.
pub fn encode(payload: &[u8], alphabet: &Alphabet) -> String {
    let leading_zeros = payload.iter().take_while(|&&b| b == 0).count();
    let digits = encode_int(&bytes_to_int(&payload[leading_zeros..]), alphabet, false);

    let mut result = String::with_capacity(leading_zeros + digits.len());
    result.extend(core::iter::repeat(alphabet.zero() as char).take(leading_zeros));
    result.push_str(&digits);
    result
}

/// Encode text or bytes; text must be ASCII.
pub fn encode_input<'a>(
    input: impl Into<Input<'a>>,
    alphabet: &Alphabet,
) -> Result<String, Error> {
    let payload = scrub(input.into())?;
    Ok(encode(payload, alphabet))
}

/// Decode base58 text (trailing whitespace ignored) into its payload.
pub fn decode<'a>(input: impl Into<Input<'a>>, alphabet: &Alphabet) -> Result<Vec<u8>, Error> {
    let symbols = normalize(input.into())?;
    let zero = alphabet.zero();
    let leading_zeros = symbols.iter().take_while(|&&s| s == zero).count();

    let n = accumulate(&symbols[leading_zeros..], leading_zeros, alphabet)?;
    let body = int_to_bytes(&n);

    let mut payload = Vec::with_capacity(leading_zeros + body.len());
    payload.resize(leading_zeros, 0u8);
    payload.extend_from_slice(&body);
    Ok(payload)
}
