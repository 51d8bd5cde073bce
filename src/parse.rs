// SPDX-License-Identifier: Apache-2.0

use crate::ParseError;

/// Sign and magnitude of an integer literal, before range checks of the target type.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub(crate) struct Literal {
    pub negative: bool,
    pub magnitude: u64,
}

/// Parses `[+|-][0x|0X]digits`, detecting overflow of the 64-bit magnitude.
pub(crate) fn literal(s: &str) -> Result<Literal, ParseError> {
    let (negative, unsigned) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let (radix, digits) = match unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))
    {
        Some(hex) => (16, hex),
        None => (10, unsigned),
    };
    let magnitude = magnitude(digits, radix, s.len() - digits.len())?;
    Ok(Literal { negative, magnitude })
}

/// Parses unsigned digits of the given radix. `offset` is the position of the first digit in the
/// original string and is used only for error reporting.
pub(crate) fn magnitude(digits: &str, radix: u32, offset: usize) -> Result<u64, ParseError> {
    if digits.is_empty() {
        return Err(ParseError::Empty);
    }
    let radix_name = if radix == 16 { "hexadecimal" } else { "decimal" };
    digits
        .char_indices()
        .try_fold(0u64, |acc, (pos, ch)| {
            let digit = ch.to_digit(radix).ok_or(ParseError::InvalidDigit {
                ch,
                pos: offset + pos,
                radix_name,
            })?;
            acc.checked_mul(radix as u64)
                .and_then(|acc| acc.checked_add(digit as u64))
                .ok_or(ParseError::Overflow { bits: 64 })
        })
        .inspect_err(|err| log::debug!("rejected integer literal '{digits}': {err}"))
}

/// Parses a raw hexadecimal bit pattern: optional `0x` prefix followed by up to 16 digits.
pub(crate) fn bit_pattern(s: &str) -> Result<u64, ParseError> {
    let digits = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")).unwrap_or(s);
    magnitude(digits, 16, s.len() - digits.len())
}
