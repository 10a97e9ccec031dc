//! Base58Check: base58 with a truncated double-hash checksum suffix.

use alloc::string::String;
use alloc::vec::Vec;

use crate::alphabet::Alphabet;
use crate::codec::{decode, encode};
use crate::error::Error;
use crate::hash::{double_hash, sha256};
use crate::input::{scrub, Input};

/// Length of the checksum suffix in bytes.
pub const CHECKSUM_LEN: usize = 4;

/// First 4 bytes of SHA256(SHA256(payload)).
#[inline]
pub fn checksum(payload: &[u8]) -> [u8; CHECKSUM_LEN] {
    checksum_with(payload, sha256)
}

fn checksum_with<H>(payload: &[u8], hash: H) -> [u8; CHECKSUM_LEN]
where
    H: Fn(&[u8]) -> [u8; 32],
{
    let digest = double_hash(payload, hash);
    let mut check = [0u8; CHECKSUM_LEN];
    check.copy_from_slice(&digest[..CHECKSUM_LEN]);
    check
}

/// Encode `payload` followed by its double-SHA256 checksum.
pub fn encode_check(payload: &[u8], alphabet: &Alphabet) -> String {
    encode_check_with(payload, alphabet, sha256)
}

/// Encode text or bytes with a checksum; text must be ASCII.
pub fn encode_check_input<'a>(
    input: impl Into<Input<'a>>,
    alphabet: &Alphabet,
) -> Result<String, Error> {
    let payload = scrub(input.into())?;
    Ok(encode_check(payload, alphabet))
}

/// Decode Base58Check text, verify the double-SHA256 checksum and return the payload.
pub fn decode_check<'a>(
    input: impl Into<Input<'a>>,
    alphabet: &Alphabet,
) -> Result<Vec<u8>, Error> {
    decode_check_with(input, alphabet, sha256)
}

/// [`encode_check`] with a caller-supplied 256-bit digest, applied twice.
pub fn encode_check_with<H>(payload: &[u8], alphabet: &Alphabet, hash: H) -> String
where
    H: Fn(&[u8]) -> [u8; 32],
{
    let mut full = Vec::with_capacity(payload.len() + CHECKSUM_LEN);
    full.extend_from_slice(payload);
    full.extend_from_slice(&checksum_with(payload, hash));
    encode(&full, alphabet)
}

/// [`decode_check`] with a caller-supplied 256-bit digest, applied twice.
///
/// # Errors
/// - `InvalidSymbol` / `Encoding`: the text is not valid base58.
/// - `MalformedInput`: fewer than 4 bytes decoded.
/// - `ChecksumMismatch`: the trailing 4 bytes do not match the digest.
pub fn decode_check_with<'a, H>(
    input: impl Into<Input<'a>>,
    alphabet: &Alphabet,
    hash: H,
) -> Result<Vec<u8>, Error>
where
    H: Fn(&[u8]) -> [u8; 32],
{
    let mut full = decode(input, alphabet)?;
    if full.len() < CHECKSUM_LEN {
        return Err(Error::MalformedInput { len: full.len() });
    }

    let body_len = full.len() - CHECKSUM_LEN;
    let mut found = [0u8; CHECKSUM_LEN];
    found.copy_from_slice(&full[body_len..]);

    let expected = checksum_with(&full[..body_len], hash);
    if found != expected {
        return Err(Error::ChecksumMismatch { expected, found });
    }

    full.truncate(body_len);
    Ok(full)
}
