//! SHA256 digests backing the Base58Check checksum.

use sha2::{Digest, Sha256};

/// Single SHA256 hash.
#[inline]
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let hash = Sha256::digest(data);
    let mut result = [0u8; 32];
    result.copy_from_slice(&hash);
    result
}

/// Double SHA256: SHA256(SHA256(data)).
#[inline]
pub fn double_sha256(data: &[u8]) -> [u8; 32] {
    double_hash(data, sha256)
}

/// Apply a 256-bit digest function twice.
#[inline]
pub fn double_hash<H>(data: &[u8], hash: H) -> [u8; 32]
where
    H: Fn(&[u8]) -> [u8; 32],
{
    hash(&hash(data))
}
