// SPDX-License-Identifier: Apache-2.0

use core::str::FromStr;

#[cfg(feature = "strict")]
use strict_encoding::{StrictDecode, StrictDumb, StrictEncode, StrictType};

use crate::codec::{self, Codec64, Endianness};
use crate::hex::{bit_pattern_to_hex, LetterCase};
use crate::uint64::wrapping_pow;
use crate::{parse, DivideByZeroError, LengthError, ParseError, UInt64};
#[cfg(feature = "strict")]
use crate::LIB_NAME_WIDE64;

/// Signed 64-bit integer with two's-complement wraparound arithmetic.
///
/// All operations produce a new value. Overflow is not an error: results are reduced modulo
/// 2^64 exactly as the fixed-width machine integer does.
#[derive(Wrapper, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, From)]
#[wrapper(Deref, Display, Octal, LowerHex, UpperHex)]
#[cfg_attr(
    feature = "strict",
    derive(StrictType, StrictDumb, StrictEncode, StrictDecode),
    strict_type(lib = LIB_NAME_WIDE64)
)]
pub struct Int64(i64);

impl Int64 {
    pub const MIN: Self = Self(i64::MIN);
    pub const MAX: Self = Self(i64::MAX);
    pub const ZERO: Self = Self(0);
    pub const ONE: Self = Self(1);

    pub const fn new(value: i64) -> Self { Self(value) }

    pub const fn min_value() -> Self { Self::MIN }

    pub const fn max_value() -> Self { Self::MAX }

    /// Assembles the value from its lower and upper 32-bit halves.
    pub const fn from_parts(low: u32, high: u32) -> Self {
        Self((((high as u64) << 32) | low as u64) as i64)
    }

    /// Parses a hexadecimal bit pattern of up to 16 digits, with an optional `0x` prefix.
    ///
    /// Unlike [`FromStr`], there is no sign and no range check: `"ffffffffffffffff"` is `-1`.
    pub fn from_hex(s: &str) -> Result<Self, ParseError> {
        parse::bit_pattern(s).map(|bits| Self(bits as i64))
    }

    pub fn decode(buf: &[u8], endianness: Endianness) -> Result<Self, LengthError> {
        codec::unpack(buf, endianness)
    }

    pub const fn to_i64(self) -> i64 { self.0 }

    /// Reinterprets the same bit pattern as an unsigned integer.
    pub const fn to_unsigned(self) -> UInt64 { UInt64::new(self.0 as u64) }

    /// Upper 32 bits, sign included.
    pub const fn higher(self) -> i32 { (self.0 >> 32) as i32 }

    /// Lower 32 bits.
    pub const fn lower(self) -> u32 { self.0 as u32 }

    /// Formats the lowest `digits` nibbles of the two's-complement bit pattern.
    pub fn to_hex(self, digits: u8, case: LetterCase) -> String {
        bit_pattern_to_hex(self.0 as u64, digits, case)
    }

    pub fn encode(self, endianness: Endianness) -> [u8; 8] { self.to_bytes(endianness) }

    pub const fn is_negative(self) -> bool { self.0 < 0 }

    #[allow(clippy::should_implement_trait)]
    pub const fn add(self, rhs: Self) -> Self { Self(self.0.wrapping_add(rhs.0)) }

    #[allow(clippy::should_implement_trait)]
    pub const fn sub(self, rhs: Self) -> Self { Self(self.0.wrapping_sub(rhs.0)) }

    #[allow(clippy::should_implement_trait)]
    pub const fn mul(self, rhs: Self) -> Self { Self(self.0.wrapping_mul(rhs.0)) }

    /// Divides, truncating toward zero. `MIN / -1` wraps back to `MIN`.
    pub const fn div(self, rhs: Self) -> Result<Self, DivideByZeroError> {
        if rhs.0 == 0 {
            return Err(DivideByZeroError);
        }
        Ok(Self(self.0.wrapping_div(rhs.0)))
    }

    /// Remainder of the truncating division; its sign follows the dividend.
    pub const fn rem(self, rhs: Self) -> Result<Self, DivideByZeroError> {
        if rhs.0 == 0 {
            return Err(DivideByZeroError);
        }
        Ok(Self(self.0.wrapping_rem(rhs.0)))
    }

    #[allow(clippy::should_implement_trait)]
    pub const fn neg(self) -> Self { Self(self.0.wrapping_neg()) }

    pub const fn abs(self) -> Self { Self(self.0.wrapping_abs()) }

    /// Raises to the power of `exponent`, wrapping on overflow.
    ///
    /// A negative exponent yields the reciprocal truncated toward zero, which is non-zero only
    /// for bases `1` and `-1`. Zero raised to a negative power fails.
    pub fn pow(self, exponent: Self) -> Result<Self, DivideByZeroError> {
        if exponent.0 >= 0 {
            return Ok(Self(wrapping_pow(self.0 as u64, exponent.0 as u64) as i64));
        }
        match self.0 {
            0 => Err(DivideByZeroError),
            1 => Ok(Self::ONE),
            -1 if exponent.0 % 2 == 0 => Ok(Self::ONE),
            -1 => Ok(Self(-1)),
            _ => Ok(Self::ZERO),
        }
    }

    pub const fn band(self, rhs: Self) -> Self { Self(self.0 & rhs.0) }

    pub const fn bor(self, rhs: Self) -> Self { Self(self.0 | rhs.0) }

    pub const fn bxor(self, rhs: Self) -> Self { Self(self.0 ^ rhs.0) }

    pub const fn bnot(self) -> Self { Self(!self.0) }

    /// Shifts left by `n` modulo 64.
    #[allow(clippy::should_implement_trait)]
    pub const fn shl(self, n: u32) -> Self { Self(self.0.wrapping_shl(n)) }

    /// Arithmetic shift right by `n` modulo 64, replicating the sign bit.
    #[allow(clippy::should_implement_trait)]
    pub const fn shr(self, n: u32) -> Self { Self(self.0.wrapping_shr(n)) }

    /// Logical shift right by `n` modulo 64, filling with zeros.
    pub const fn logical_shr(self, n: u32) -> Self {
        Self((self.0 as u64).wrapping_shr(n) as i64)
    }
}

impl_wrapping_ops!(Int64);

impl ::core::ops::Neg for Int64 {
    type Output = Self;
    fn neg(self) -> Self { Int64::neg(self) }
}

impl FromStr for Int64 {
    type Err = ParseError;

    /// Parses a decimal or `0x`-prefixed hexadecimal number with an optional sign.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let literal = parse::literal(s)?;
        match (literal.negative, literal.magnitude) {
            (false, magnitude) if magnitude <= i64::MAX as u64 => Ok(Self(magnitude as i64)),
            (true, magnitude) if magnitude <= i64::MIN.unsigned_abs() => {
                Ok(Self((magnitude as i64).wrapping_neg()))
            }
            _ => Err(ParseError::Overflow { bits: 64 }),
        }
    }
}

impl PartialEq<UInt64> for Int64 {
    /// Compares mathematical values, so a negative number is never equal to an unsigned one.
    fn eq(&self, other: &UInt64) -> bool { self.0 >= 0 && self.0 as u64 == other.to_u64() }
}
