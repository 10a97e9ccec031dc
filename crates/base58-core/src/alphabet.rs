//! Base58 symbol alphabets.
//!
//! Supports:
//! - Bitcoin ordering (`123456789ABC...xyz`), also used by most other chains
//! - Ripple ordering (`rpshnaf39wBU...xyz`), used by XRP Ledger addresses
//! - Custom 58-symbol ASCII orderings via [`Alphabet::new`]

use core::fmt;

use crate::error::{AlphabetError, Error};

/// Number of symbols in every base58 alphabet.
pub const ALPHABET_LEN: usize = 58;

const BITCOIN_SYMBOLS: &[u8; ALPHABET_LEN] =
    b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";
const RIPPLE_SYMBOLS: &[u8; ALPHABET_LEN] =
    b"rpshnaf39wBUDNEGHJKLM4PQRST7VWXYZ2bcdeCg65jkm8oFqi1tuvAxyz";

/// Marks an ASCII byte that is not part of the alphabet.
const NOT_A_SYMBOL: u8 = 0xFF;

/// An ordered set of 58 distinct ASCII symbols.
///
/// The symbol at index 0 is the zero-symbol: it stands for a leading zero
/// byte of the payload. Alphabets are plain values and are passed explicitly
/// to every codec operation.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Alphabet {
    symbols: [u8; ALPHABET_LEN],
    indices: [u8; 128],
}

impl Alphabet {
    /// Bitcoin alphabet (no `0`, `O`, `I` or `l`).
    pub const BITCOIN: Alphabet = match Alphabet::new(BITCOIN_SYMBOLS) {
        Ok(alphabet) => alphabet,
        Err(_) => panic!("bitcoin alphabet is invalid"),
    };

    /// Ripple alphabet.
    pub const RIPPLE: Alphabet = match Alphabet::new(RIPPLE_SYMBOLS) {
        Ok(alphabet) => alphabet,
        Err(_) => panic!("ripple alphabet is invalid"),
    };

    /// Build an alphabet from 58 symbols, rejecting duplicates and non-ASCII.
    pub const fn new(symbols: &[u8; ALPHABET_LEN]) -> Result<Alphabet, AlphabetError> {
        let mut indices = [NOT_A_SYMBOL; 128];
        let mut i = 0;
        while i < ALPHABET_LEN {
            let byte = symbols[i];
            if byte >= 128 {
                return Err(AlphabetError::NonAscii { byte, position: i });
            }
            if indices[byte as usize] != NOT_A_SYMBOL {
                return Err(AlphabetError::Duplicate {
                    symbol: byte as char,
                    first: indices[byte as usize] as usize,
                    second: i,
                });
            }
            indices[byte as usize] = i as u8;
            i += 1;
        }
        Ok(Alphabet { symbols: *symbols, indices })
    }

    /// Look up a standard alphabet by name.
    pub fn from_name(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case("bitcoin") || name.eq_ignore_ascii_case("btc") {
            Some(Alphabet::BITCOIN)
        } else if name.eq_ignore_ascii_case("ripple") || name.eq_ignore_ascii_case("xrp") {
            Some(Alphabet::RIPPLE)
        } else {
            None
        }
    }

    /// Get the display name for this alphabet.
    pub fn name(&self) -> &'static str {
        if self.symbols == *BITCOIN_SYMBOLS {
            "bitcoin"
        } else if self.symbols == *RIPPLE_SYMBOLS {
            "ripple"
        } else {
            "custom"
        }
    }

    /// Symbol at `index`.
    ///
    /// # Panics
    /// If `index >= 58`.
    #[inline]
    pub fn symbol(&self, index: u8) -> u8 {
        self.symbols[index as usize]
    }

    /// The zero-symbol (index 0).
    #[inline]
    pub fn zero(&self) -> u8 {
        self.symbols[0]
    }

    /// Index of `symbol`, or `None` if it is not a member.
    #[inline]
    pub fn index_of(&self, symbol: u8) -> Option<u8> {
        match self.indices.get(symbol as usize) {
            Some(&index) if index != NOT_A_SYMBOL => Some(index),
            _ => None,
        }
    }

    /// Digit value of the symbol found at `position` of some input.
    ///
    /// Fails with [`Error::InvalidSymbol`] when the symbol is not a member.
    #[inline]
    pub fn digit(&self, symbol: u8, position: usize) -> Result<u8, Error> {
        self.index_of(symbol).ok_or(Error::InvalidSymbol { symbol, position })
    }

    /// All 58 symbols in order.
    pub fn symbols(&self) -> &[u8; ALPHABET_LEN] {
        &self.symbols
    }

    /// The symbols as a string slice.
    pub fn as_str(&self) -> &str {
        // Construction only admits ASCII.
        core::str::from_utf8(&self.symbols).unwrap_or_default()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Alphabet::BITCOIN
    }
}

impl fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Alphabet").field(&self.as_str()).finish()
    }
}
