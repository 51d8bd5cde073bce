// SPDX-License-Identifier: Apache-2.0

use core::str::FromStr;

#[cfg(feature = "strict")]
use strict_encoding::{StrictDecode, StrictDumb, StrictEncode, StrictType};

use crate::codec::{self, Codec64, Endianness};
use crate::hex::{bit_pattern_to_hex, LetterCase};
use crate::{parse, DivideByZeroError, Int64, LengthError, ParseError};
#[cfg(feature = "strict")]
use crate::LIB_NAME_WIDE64;

/// Exponentiation by squaring modulo 2^64. Works for both signed and unsigned bit patterns.
pub(crate) const fn wrapping_pow(mut base: u64, mut exponent: u64) -> u64 {
    let mut acc = 1u64;
    while exponent > 0 {
        if exponent & 1 == 1 {
            acc = acc.wrapping_mul(base);
        }
        base = base.wrapping_mul(base);
        exponent >>= 1;
    }
    acc
}

/// Unsigned 64-bit integer with wraparound arithmetic modulo 2^64.
#[derive(Wrapper, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, From)]
#[wrapper(Deref, Display, Octal, LowerHex, UpperHex)]
#[cfg_attr(
    feature = "strict",
    derive(StrictType, StrictDumb, StrictEncode, StrictDecode),
    strict_type(lib = LIB_NAME_WIDE64)
)]
pub struct UInt64(u64);

impl UInt64 {
    pub const MIN: Self = Self(u64::MIN);
    pub const MAX: Self = Self(u64::MAX);
    pub const ZERO: Self = Self(0);
    pub const ONE: Self = Self(1);

    pub const fn new(value: u64) -> Self { Self(value) }

    pub const fn min_value() -> Self { Self::MIN }

    pub const fn max_value() -> Self { Self::MAX }

    /// Assembles the value from its lower and upper 32-bit halves.
    pub const fn from_parts(low: u32, high: u32) -> Self {
        Self(((high as u64) << 32) | low as u64)
    }

    /// Parses a hexadecimal bit pattern of up to 16 digits, with an optional `0x` prefix.
    pub fn from_hex(s: &str) -> Result<Self, ParseError> { parse::bit_pattern(s).map(Self) }

    pub fn decode(buf: &[u8], endianness: Endianness) -> Result<Self, LengthError> {
        codec::unpack(buf, endianness)
    }

    pub const fn to_u64(self) -> u64 { self.0 }

    /// Reinterprets the same bit pattern as a signed integer.
    pub const fn to_signed(self) -> Int64 { Int64::new(self.0 as i64) }

    pub const fn higher(self) -> u32 { (self.0 >> 32) as u32 }

    pub const fn lower(self) -> u32 { self.0 as u32 }

    pub fn to_hex(self, digits: u8, case: LetterCase) -> String {
        bit_pattern_to_hex(self.0, digits, case)
    }

    pub fn encode(self, endianness: Endianness) -> [u8; 8] { self.to_bytes(endianness) }

    #[allow(clippy::should_implement_trait)]
    pub const fn add(self, rhs: Self) -> Self { Self(self.0.wrapping_add(rhs.0)) }

    #[allow(clippy::should_implement_trait)]
    pub const fn sub(self, rhs: Self) -> Self { Self(self.0.wrapping_sub(rhs.0)) }

    #[allow(clippy::should_implement_trait)]
    pub const fn mul(self, rhs: Self) -> Self { Self(self.0.wrapping_mul(rhs.0)) }

    pub const fn div(self, rhs: Self) -> Result<Self, DivideByZeroError> {
        if rhs.0 == 0 {
            return Err(DivideByZeroError);
        }
        Ok(Self(self.0 / rhs.0))
    }

    pub const fn rem(self, rhs: Self) -> Result<Self, DivideByZeroError> {
        if rhs.0 == 0 {
            return Err(DivideByZeroError);
        }
        Ok(Self(self.0 % rhs.0))
    }

    pub const fn pow(self, exponent: Self) -> Self { Self(wrapping_pow(self.0, exponent.0)) }

    pub const fn band(self, rhs: Self) -> Self { Self(self.0 & rhs.0) }

    pub const fn bor(self, rhs: Self) -> Self { Self(self.0 | rhs.0) }

    pub const fn bxor(self, rhs: Self) -> Self { Self(self.0 ^ rhs.0) }

    pub const fn bnot(self) -> Self { Self(!self.0) }

    #[allow(clippy::should_implement_trait)]
    pub const fn shl(self, n: u32) -> Self { Self(self.0.wrapping_shl(n)) }

    /// Logical shift right by `n` modulo 64, filling with zeros.
    #[allow(clippy::should_implement_trait)]
    pub const fn shr(self, n: u32) -> Self { Self(self.0.wrapping_shr(n)) }

    /// Arithmetic shift right by `n` modulo 64, replicating bit 63.
    pub const fn arithmetic_shr(self, n: u32) -> Self {
        Self((self.0 as i64).wrapping_shr(n) as u64)
    }
}

impl_wrapping_ops!(UInt64);

impl FromStr for UInt64 {
    type Err = ParseError;

    /// Parses a decimal or `0x`-prefixed hexadecimal number. A `+` sign is allowed, `-` is not.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let literal = parse::literal(s)?;
        if literal.negative {
            return Err(ParseError::NegativeUnsigned);
        }
        Ok(Self(literal.magnitude))
    }
}

impl PartialEq<Int64> for UInt64 {
    fn eq(&self, other: &Int64) -> bool { other == self }
}
