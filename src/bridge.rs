// SPDX-License-Identifier: Apache-2.0

//! Conversions between 64-bit integers and the double-precision number of the scripting host.
//!
//! A double holds integers exactly only up to 2^53 in magnitude. Conversions in both directions
//! are lossless inside that range; outside it they follow the rules documented on
//! [`HostNumber`] and never fail. This module is the only place in the crate touching `f64`.

use crate::{Int64, UInt64};

/// Largest integer which is exactly representable by a double, together with all its
/// predecessors.
pub const MAX_SAFE_INTEGER: i64 = (1 << 53) - 1;

/// Negation of [`MAX_SAFE_INTEGER`].
pub const MIN_SAFE_INTEGER: i64 = -MAX_SAFE_INTEGER;

const TWO_POW_64: f64 = 18_446_744_073_709_551_616.0;

/// 64-bit integer types convertible to and from the host native number.
pub trait HostNumber: Copy {
    /// Converts a native number, truncating its fractional part toward zero.
    ///
    /// When the truncated value lies outside the 64-bit range it is reduced modulo 2^64 and the
    /// resulting bit pattern is reinterpreted in the target type; it is never clamped. NaN and
    /// infinities produce zero. Note that above 2^53 the number itself is already an
    /// approximation of whatever integer the script meant.
    fn from_number(number: f64) -> Self;

    /// Converts a native number pair, as passed by a host which can't express 64-bit literals:
    /// `low` gives the lower 32 bits and `high` the upper 32 bits. Both are converted as in
    /// [`HostNumber::from_number`] and then truncated to 32 bits.
    fn from_number_parts(low: f64, high: f64) -> Self;

    /// Returns the double nearest to the integer value. Lossy for magnitudes above 2^53.
    fn to_number(self) -> f64;

    /// Returns the double only if it represents the integer value exactly.
    fn to_number_exact(self) -> Option<f64>;

    /// Checks whether the value lies within [`MIN_SAFE_INTEGER`]..=[`MAX_SAFE_INTEGER`], where
    /// all integers round-trip through a double.
    fn is_safe_integer(self) -> bool;
}

/// Truncates toward zero and wraps modulo 2^64, returning the bit pattern.
pub(crate) fn wrap_number(number: f64) -> u64 {
    if !number.is_finite() {
        log::trace!("non-finite number {number} converted to zero");
        return 0;
    }
    let truncated = number.trunc();
    // Remainder of two doubles is exact, so nothing is lost here
    let rem = truncated % TWO_POW_64;
    if rem != truncated {
        log::trace!("number {number} is outside of 64-bit range and wraps around");
    }
    if rem >= 0.0 { rem as u64 } else { (-rem as u64).wrapping_neg() }
}

fn exact(value: i128, number: f64) -> Option<f64> {
    if number as i128 == value {
        Some(number)
    } else {
        log::trace!("integer {value} is not exactly representable as a number");
        None
    }
}

impl HostNumber for Int64 {
    fn from_number(number: f64) -> Self { Int64::new(wrap_number(number) as i64) }

    fn from_number_parts(low: f64, high: f64) -> Self {
        Int64::from_parts(wrap_number(low) as u32, wrap_number(high) as u32)
    }

    fn to_number(self) -> f64 { self.to_i64() as f64 }

    fn to_number_exact(self) -> Option<f64> { exact(self.to_i64() as i128, self.to_number()) }

    fn is_safe_integer(self) -> bool {
        (MIN_SAFE_INTEGER..=MAX_SAFE_INTEGER).contains(&self.to_i64())
    }
}

impl HostNumber for UInt64 {
    fn from_number(number: f64) -> Self { UInt64::new(wrap_number(number)) }

    fn from_number_parts(low: f64, high: f64) -> Self {
        UInt64::from_parts(wrap_number(low) as u32, wrap_number(high) as u32)
    }

    fn to_number(self) -> f64 { self.to_u64() as f64 }

    fn to_number_exact(self) -> Option<f64> { exact(self.to_u64() as i128, self.to_number()) }

    fn is_safe_integer(self) -> bool { self.to_u64() <= MAX_SAFE_INTEGER as u64 }
}

#[cfg(test)]
mod test {
    #[cfg(target_arch = "wasm32")]
    use wasm_bindgen_test::wasm_bindgen_test;

    use super::*;

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
    fn truncation() {
        assert_eq!(Int64::from_number(3.99), Int64::new(3));
        assert_eq!(Int64::from_number(-3.99), Int64::new(-3));
        assert_eq!(Int64::from_number(-0.5), Int64::ZERO);
        assert_eq!(Int64::from_number(-0.0), Int64::ZERO);
        assert_eq!(UInt64::from_number(0.999), UInt64::ZERO);
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
    fn wraparound() {
        assert_eq!(UInt64::from_number(-1.0), UInt64::MAX);
        assert_eq!(Int64::from_number(9_223_372_036_854_775_808.0), Int64::MIN);
        assert_eq!(Int64::from_number(-9_223_372_036_854_775_808.0), Int64::MIN);
        assert_eq!(UInt64::from_number(TWO_POW_64), UInt64::ZERO);
        assert_eq!(UInt64::from_number(TWO_POW_64 + 4096.0 * 2.0), UInt64::new(8192));
        assert_eq!(Int64::from_number(-TWO_POW_64 - 8192.0), Int64::new(-8192));
        assert_eq!(Int64::from_number(1e300), Int64::ZERO);
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
    fn non_finite() {
        assert_eq!(Int64::from_number(f64::NAN), Int64::ZERO);
        assert_eq!(Int64::from_number(f64::INFINITY), Int64::ZERO);
        assert_eq!(UInt64::from_number(f64::NEG_INFINITY), UInt64::ZERO);
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
    fn parts() {
        assert_eq!(Int64::from_number_parts(1.0, 2.0), Int64::new(0x0000_0002_0000_0001));
        assert_eq!(Int64::from_number_parts(0.0, -1.0), Int64::new(-1i64 << 32));
        assert_eq!(
            UInt64::from_number_parts(4_294_967_295.0, 4_294_967_295.0),
            UInt64::MAX
        );
        assert_eq!(UInt64::from_number_parts(4_294_967_296.0, 0.0), UInt64::ZERO);
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
    fn precision() {
        assert_eq!(Int64::new(MAX_SAFE_INTEGER).to_number(), 9_007_199_254_740_991.0);
        assert_eq!(Int64::new(MIN_SAFE_INTEGER).to_number(), -9_007_199_254_740_991.0);
        assert!(Int64::new(MAX_SAFE_INTEGER).is_safe_integer());
        assert!(!Int64::new(MAX_SAFE_INTEGER + 1).is_safe_integer());
        assert!(!Int64::new(MIN_SAFE_INTEGER - 1).is_safe_integer());
        assert!(!UInt64::MAX.is_safe_integer());

        // 2^53 + 1 rounds to 2^53
        let odd = Int64::new(MAX_SAFE_INTEGER + 2);
        assert_eq!(odd.to_number(), 9_007_199_254_740_992.0);
        assert_eq!(odd.to_number_exact(), None);
        // ...while 2^53 itself is exact
        assert_eq!(
            Int64::new(MAX_SAFE_INTEGER + 1).to_number_exact(),
            Some(9_007_199_254_740_992.0)
        );

        assert_eq!(Int64::MAX.to_number(), 9_223_372_036_854_775_808.0);
        assert_eq!(Int64::MAX.to_number_exact(), None);
        assert_eq!(Int64::MIN.to_number_exact(), Some(-9_223_372_036_854_775_808.0));
        assert_eq!(UInt64::MAX.to_number(), TWO_POW_64);
        assert_eq!(UInt64::MAX.to_number_exact(), None);
    }
}
