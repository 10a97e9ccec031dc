//! Base58 binary-to-text codec.
//!
//! This crate provides pure Rust implementations of:
//! - Base58 alphabets (Bitcoin and Ripple orderings, plus custom ones)
//! - Arbitrary-precision base conversion between bytes and base58 text
//! - Leading-zero preservation as leading zero-symbols
//! - Base58Check encoding with a double-SHA256 checksum
//!
//! Every operation takes the alphabet explicitly:
//!
//! ```
//! use base58_core::{decode, encode, Alphabet};
//!
//! let text = encode(b"\x00\x00hello", &Alphabet::BITCOIN);
//! assert_eq!(text, "11Cn8eVZg");
//! assert_eq!(decode(text.as_str(), &Alphabet::BITCOIN).unwrap(), b"\x00\x00hello");
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod alphabet;
pub mod bigint;
pub mod check;
pub mod codec;
pub mod convert;
pub mod error;
pub mod hash;
pub mod input;

pub use alphabet::Alphabet;
pub use bigint::BigUint;
pub use check::{
    checksum, decode_check, decode_check_with, encode_check, encode_check_input,
    encode_check_with, CHECKSUM_LEN,
};
pub use codec::{decode, encode, encode_input};
pub use convert::{bytes_to_int, decode_int, encode_int, int_to_bytes};
pub use error::{AlphabetError, Error};
pub use hash::{double_sha256, sha256};
pub use input::{scrub, Input};
