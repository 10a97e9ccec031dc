//! Conversion between unbounded integers, base58 digits and base-256 bytes.

use alloc::string::String;
use alloc::vec::Vec;

use crate::alphabet::Alphabet;
use crate::bigint::BigUint;
use crate::error::Error;
use crate::input::{normalize, Input};

/// 58^5, the largest power of 58 that fits in a limb.
const BASE58_POW5: u32 = 58 * 58 * 58 * 58 * 58;

/// Encode an integer as base58 digits, most significant first.
///
/// Zero becomes a single zero-symbol when `emit_zero_for_zero` is set and
/// the empty string otherwise. Payload-level encoding passes `false`, since
/// leading zero bytes are carried separately as leading zero-symbols.
pub fn encode_int(n: &BigUint, alphabet: &Alphabet, emit_zero_for_zero: bool) -> String {
    let mut n = n.clone();
    let mut digits: Vec<u8> = Vec::new();

    // Five base58 digits per division, least significant first
    while !n.is_zero() {
        let mut rem = n.div_rem_small(BASE58_POW5);
        for _ in 0..5 {
            digits.push((rem % 58) as u8);
            rem /= 58;
        }
    }
    while digits.last() == Some(&0) {
        digits.pop();
    }

    if digits.is_empty() {
        return if emit_zero_for_zero {
            String::from(alphabet.zero() as char)
        } else {
            String::new()
        };
    }

    digits
        .iter()
        .rev()
        .map(|&digit| alphabet.symbol(digit) as char)
        .collect()
}

/// Decode base58 text (trailing whitespace ignored) into an integer.
///
/// Leading zero-symbols contribute nothing to the value.
pub fn decode_int<'a>(input: impl Into<Input<'a>>, alphabet: &Alphabet) -> Result<BigUint, Error> {
    let symbols = normalize(input.into())?;
    accumulate(symbols, 0, alphabet)
}

/// `acc = acc * 58 + digit` over `symbols`, reporting positions from `offset`.
pub(crate) fn accumulate(
    symbols: &[u8],
    offset: usize,
    alphabet: &Alphabet,
) -> Result<BigUint, Error> {
    let mut n = BigUint::zero();
    for (i, &symbol) in symbols.iter().enumerate() {
        let digit = alphabet.digit(symbol, offset + i)?;
        n.mul_add_small(58, u32::from(digit));
    }
    Ok(n)
}

/// Big-endian bytes to integer.
#[inline]
pub fn bytes_to_int(bytes: &[u8]) -> BigUint {
    BigUint::from_be_bytes(bytes)
}

/// Integer to minimal big-endian bytes; zero yields no bytes.
#[inline]
pub fn int_to_bytes(n: &BigUint) -> Vec<u8> {
    n.to_be_bytes()
}
