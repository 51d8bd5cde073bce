// SPDX-License-Identifier: Apache-2.0

//! Wraparound, division and shift semantics exercised through the public API.

use rstest::rstest;
use wide64::{DivideByZeroError, Error, HostNumber, Int64, ParseError, UInt64};

#[test]
fn signed_overflow_wraps() {
    assert_eq!(Int64::MAX + Int64::new(1), Int64::MIN);
    assert_eq!(Int64::MIN + Int64::new(-1), Int64::MAX);
    assert_eq!(Int64::MIN * Int64::new(-1), Int64::MIN);
}

#[test]
fn unsigned_overflow_wraps() {
    assert_eq!(UInt64::MAX + UInt64::new(1), UInt64::new(0));
    assert_eq!(UInt64::new(0) - UInt64::new(1), UInt64::MAX);
}

#[test]
fn divide_by_zero() {
    assert_eq!(Int64::new(10).div(Int64::new(0)), Err(DivideByZeroError));
    assert_eq!(UInt64::new(10).div(UInt64::new(0)), Err(DivideByZeroError));
    assert_eq!(Int64::new(10).rem(Int64::new(0)), Err(DivideByZeroError));
    assert_eq!(UInt64::new(10).rem(UInt64::new(0)), Err(DivideByZeroError));
}

#[rstest]
#[case(7, 3, 2, 1)]
#[case(-7, 3, -2, -1)]
#[case(7, -3, -2, 1)]
#[case(-7, -3, 2, -1)]
#[case(i64::MIN, -1, i64::MIN, 0)]
#[case(i64::MIN, i64::MAX, -1, -1)]
fn truncating_division(
    #[case] dividend: i64,
    #[case] divisor: i64,
    #[case] quotient: i64,
    #[case] remainder: i64,
) {
    let (a, b) = (Int64::new(dividend), Int64::new(divisor));
    assert_eq!(a.div(b), Ok(Int64::new(quotient)));
    assert_eq!(a.rem(b), Ok(Int64::new(remainder)));
}

#[test]
fn shift_right_semantics() {
    let negative = Int64::new(-8);
    assert_eq!(negative >> 1, Int64::new(-4));
    assert_eq!(negative >> 63, Int64::new(-1));

    let high_bit = UInt64::new(1 << 63);
    assert_eq!(high_bit >> 1, UInt64::new(1 << 62));
    assert_eq!(high_bit >> 63, UInt64::new(1));
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(63)]
#[case(64)]
#[case(100)]
#[case(u32::MAX)]
fn shift_amount_is_taken_modulo_64(#[case] n: u32) {
    let value = UInt64::new(0xDEAD_BEEF_CAFE_BABE);
    assert_eq!(value << n, value << (n % 64));
    assert_eq!(value >> n, value >> (n % 64));
    assert_eq!(value.to_signed() >> n, value.to_signed() >> (n % 64));
}

#[rstest]
#[case("0", 0)]
#[case("-0", 0)]
#[case("+123", 123)]
#[case("-9007199254740993", -9_007_199_254_740_993)]
#[case("0x7FFFFFFFFFFFFFFF", i64::MAX)]
#[case("-0x1", -1)]
fn signed_literals(#[case] literal: &str, #[case] expected: i64) {
    let value = literal.parse::<Int64>().unwrap();
    assert_eq!(value, Int64::new(expected));
    assert_eq!(value.to_string(), expected.to_string());
}

#[rstest]
#[case("abc")]
#[case("1 2")]
#[case("0x")]
#[case("--1")]
#[case("1e10")]
#[case("9223372036854775808")]
fn malformed_signed_literals(#[case] literal: &str) {
    let err = literal.parse::<Int64>().unwrap_err();
    assert!(matches!(
        Error::from(err),
        Error::Parse(
            ParseError::InvalidDigit { .. } | ParseError::Empty | ParseError::Overflow { .. }
        )
    ));
}

#[test]
fn host_numbers_round_trip_below_two_pow_53() {
    for value in [0i64, 1, -1, 42, -1_000_000_007, (1 << 53) - 1, -(1 << 53) + 1] {
        let number = Int64::new(value).to_number();
        assert_eq!(number, value as f64);
        assert_eq!(Int64::from_number(number), Int64::new(value));
        assert_eq!(Int64::new(value).to_number_exact(), Some(value as f64));
    }
}

#[test]
fn canonical_decimal() {
    assert_eq!(Int64::from_number(-0.0).to_string(), "0");
    assert_eq!("0x000010".parse::<UInt64>().unwrap().to_string(), "16");
    assert_eq!("-00042".parse::<Int64>().unwrap().to_string(), "-42");
}

#[test]
fn errors_propagate_through_umbrella() {
    fn average(values: &[&str]) -> Result<Int64, Error> {
        let mut sum = Int64::ZERO;
        for value in values {
            sum = sum + value.parse::<Int64>()?;
        }
        Ok(sum.div(Int64::new(values.len() as i64))?)
    }

    assert_eq!(average(&["1", "2", "6"]), Ok(Int64::new(3)));
    assert_eq!(average(&[]), Err(Error::DivideByZero(DivideByZeroError)));
    assert!(matches!(average(&["1", "x"]), Err(Error::Parse(_))));
}
