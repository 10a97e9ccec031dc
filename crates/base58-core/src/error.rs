//! Error types for decoding and alphabet construction.

use thiserror::Error;

/// Errors reported by the decoding direction of the codec.
///
/// Encoding a byte payload never fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A symbol in the input is not a member of the selected alphabet.
    #[error("invalid base58 symbol '{}' at position {position}", .symbol.escape_ascii())]
    InvalidSymbol { symbol: u8, position: usize },

    /// Text input contains a byte outside strict ASCII.
    #[error("non-ASCII byte 0x{byte:02x} at position {position}")]
    Encoding { byte: u8, position: usize },

    /// The trailing checksum does not match the recomputed digest.
    #[error("checksum mismatch: expected {expected:02x?}, found {found:02x?}")]
    ChecksumMismatch { expected: [u8; 4], found: [u8; 4] },

    /// A checksummed payload decoded to fewer bytes than the checksum itself.
    #[error("checksummed payload too short: {len} bytes, need at least 4")]
    MalformedInput { len: usize },

    /// A decimal integer literal contains a non-digit.
    #[error("invalid decimal digit {symbol:?} at position {position}")]
    InvalidDigit { symbol: char, position: usize },
}

/// Errors raised while building a custom [`Alphabet`](crate::Alphabet).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AlphabetError {
    /// The same symbol appears twice.
    #[error("duplicate symbol {symbol:?} at positions {first} and {second}")]
    Duplicate { symbol: char, first: usize, second: usize },

    /// Symbols must be ASCII.
    #[error("non-ASCII symbol 0x{byte:02x} at position {position}")]
    NonAscii { byte: u8, position: usize },
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_display_messages() {
        let err = Error::InvalidSymbol { symbol: b'0', position: 3 };
        assert_eq!(err.to_string(), "invalid base58 symbol '0' at position 3");

        // Non-ASCII bytes keep their value in the message
        let err = Error::InvalidSymbol { symbol: 0xFF, position: 2 };
        assert_eq!(err.to_string(), "invalid base58 symbol '\\xff' at position 2");

        let err = Error::ChecksumMismatch {
            expected: [0xde, 0xad, 0xbe, 0xef],
            found: [0x00, 0x01, 0x02, 0x03],
        };
        assert_eq!(
            err.to_string(),
            "checksum mismatch: expected [de, ad, be, ef], found [00, 01, 02, 03]"
        );

        let err = Error::MalformedInput { len: 2 };
        assert_eq!(err.to_string(), "checksummed payload too short: 2 bytes, need at least 4");
    }
}
