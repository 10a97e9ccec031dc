//! Minimal unsigned big integer used as the intermediate form of base conversion.
//!
//! Only the operations the codec needs are provided: multiply-by-small and
//! add, divide-by-small with remainder, and big-endian byte conversion.

use alloc::string::String;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;

use crate::error::Error;

/// Largest power of ten that fits in a limb, used for decimal rendering.
const DECIMAL_CHUNK: u32 = 1_000_000_000;
const DECIMAL_CHUNK_DIGITS: usize = 9;

/// Arbitrary-precision non-negative integer.
///
/// Limbs are 32-bit, least significant first, with no high zero limbs, so
/// zero is the empty limb vector.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BigUint {
    limbs: Vec<u32>,
}

impl BigUint {
    /// The value zero.
    pub const fn zero() -> Self {
        BigUint { limbs: Vec::new() }
    }

    /// Whether this value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.limbs.is_empty()
    }

    /// Interpret `bytes` as a big-endian number (byte 0 most significant).
    pub fn from_be_bytes(bytes: &[u8]) -> Self {
        let mut limbs = Vec::with_capacity((bytes.len() + 3) / 4);
        for chunk in bytes.rchunks(4) {
            let mut limb = 0u32;
            for &byte in chunk {
                limb = (limb << 8) | u32::from(byte);
            }
            limbs.push(limb);
        }
        let mut n = BigUint { limbs };
        n.normalize();
        n
    }

    /// Minimal big-endian byte representation; zero yields an empty vector.
    pub fn to_be_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.limbs.len() * 4);
        for limb in self.limbs.iter().rev() {
            bytes.extend_from_slice(&limb.to_be_bytes());
        }
        let leading = bytes.iter().take_while(|&&b| b == 0).count();
        bytes.drain(..leading);
        bytes
    }

    /// `self = self * mul + add`.
    pub fn mul_add_small(&mut self, mul: u32, add: u32) {
        let mut carry = u64::from(add);
        for limb in self.limbs.iter_mut() {
            let wide = u64::from(*limb) * u64::from(mul) + carry;
            *limb = wide as u32;
            carry = wide >> 32;
        }
        if carry != 0 {
            self.limbs.push(carry as u32);
        }
        self.normalize();
    }

    /// `self = self / divisor`, returning the remainder.
    ///
    /// # Panics
    /// If `divisor` is zero.
    pub fn div_rem_small(&mut self, divisor: u32) -> u32 {
        assert!(divisor != 0, "division by zero");
        let divisor = u64::from(divisor);
        let mut rem = 0u64;
        for limb in self.limbs.iter_mut().rev() {
            let wide = (rem << 32) | u64::from(*limb);
            *limb = (wide / divisor) as u32;
            rem = wide % divisor;
        }
        self.normalize();
        rem as u32
    }

    /// Number of significant bits.
    pub fn bits(&self) -> u64 {
        match self.limbs.last() {
            Some(&top) => self.limbs.len() as u64 * 32 - u64::from(top.leading_zeros()),
            None => 0,
        }
    }

    /// The value as a `u128`, if it fits.
    pub fn to_u128(&self) -> Option<u128> {
        if self.limbs.len() > 4 {
            return None;
        }
        Some(
            self.limbs
                .iter()
                .rev()
                .fold(0u128, |acc, &limb| (acc << 32) | u128::from(limb)),
        )
    }

    fn normalize(&mut self) {
        while self.limbs.last() == Some(&0) {
            self.limbs.pop();
        }
    }
}

impl From<u32> for BigUint {
    fn from(n: u32) -> Self {
        BigUint::from(u128::from(n))
    }
}

impl From<u64> for BigUint {
    fn from(n: u64) -> Self {
        BigUint::from(u128::from(n))
    }
}

impl From<u128> for BigUint {
    fn from(mut n: u128) -> Self {
        let mut limbs = Vec::with_capacity(4);
        while n != 0 {
            limbs.push(n as u32);
            n >>= 32;
        }
        BigUint { limbs }
    }
}

impl Ord for BigUint {
    fn cmp(&self, other: &Self) -> Ordering {
        self.limbs
            .len()
            .cmp(&other.limbs.len())
            .then_with(|| self.limbs.iter().rev().cmp(other.limbs.iter().rev()))
    }
}

impl PartialOrd for BigUint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for BigUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.pad_integral(true, "", "0");
        }

        // Peel off base-10^9 chunks, least significant first
        let mut n = self.clone();
        let mut chunks = Vec::new();
        while !n.is_zero() {
            chunks.push(n.div_rem_small(DECIMAL_CHUNK));
        }

        let mut digits = String::with_capacity(chunks.len() * DECIMAL_CHUNK_DIGITS);
        let mut iter = chunks.iter().rev();
        if let Some(first) = iter.next() {
            fmt::write(&mut digits, format_args!("{}", first))?;
        }
        for chunk in iter {
            fmt::write(&mut digits, format_args!("{:09}", chunk))?;
        }
        f.pad_integral(true, "", &digits)
    }
}

impl fmt::LowerHex for BigUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut digits = String::with_capacity(self.limbs.len() * 8);
        let mut iter = self.limbs.iter().rev();
        match iter.next() {
            Some(top) => fmt::write(&mut digits, format_args!("{:x}", top))?,
            None => digits.push('0'),
        }
        for limb in iter {
            fmt::write(&mut digits, format_args!("{:08x}", limb))?;
        }
        f.pad_integral(true, "0x", &digits)
    }
}

impl FromStr for BigUint {
    type Err = Error;

    /// Parse a non-empty decimal literal.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(Error::InvalidDigit { symbol: '\0', position: 0 });
        }
        let mut n = BigUint::zero();
        for (position, symbol) in s.char_indices() {
            let digit = symbol
                .to_digit(10)
                .ok_or(Error::InvalidDigit { symbol, position })?;
            n.mul_add_small(10, digit);
        }
        Ok(n)
    }
}
