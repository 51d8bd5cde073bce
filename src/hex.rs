// SPDX-License-Identifier: Apache-2.0

//! Conversion of byte strings to and from hexadecimal text with configurable letter case and
//! byte separator.

use core::fmt::Write;

use amplify::hex::{self, FromHex, ToHex};

use crate::FormatError;

/// Letter case of the hexadecimal digits `a`-`f`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default, Display)]
#[display(lowercase)]
pub enum LetterCase {
    #[default]
    Lower,
    Upper,
}

impl LetterCase {
    pub fn with_lowercase(lowercase: bool) -> Self {
        if lowercase { LetterCase::Lower } else { LetterCase::Upper }
    }
}

/// Formatting policy for hexadecimal text. Use the same policy for encoding and decoding to get
/// the original bytes back.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct HexFormat {
    pub case: LetterCase,
    /// Inserted between two consecutive bytes; never before the first or after the last one.
    pub separator: String,
}

impl HexFormat {
    pub fn new(case: LetterCase, separator: impl ToString) -> Self {
        Self { case, separator: separator.to_string() }
    }

    pub fn lowercase() -> Self { Self::default() }

    pub fn uppercase() -> Self { Self { case: LetterCase::Upper, separator: none!() } }

    pub fn with_separator(mut self, separator: impl ToString) -> Self {
        self.separator = separator.to_string();
        self
    }

    pub fn encode(&self, data: &[u8]) -> String {
        if self.case == LetterCase::Lower && self.separator.is_empty() {
            return data.to_hex();
        }
        let len = data.len() * 2 + data.len().saturating_sub(1) * self.separator.len();
        let mut s = String::with_capacity(len);
        for (no, byte) in data.iter().enumerate() {
            if no > 0 {
                s.push_str(&self.separator);
            }
            // Writing into a string never fails
            let _ = match self.case {
                LetterCase::Lower => write!(s, "{byte:02x}"),
                LetterCase::Upper => write!(s, "{byte:02X}"),
            };
        }
        s
    }

    /// Decodes hexadecimal text, accepting digits in any letter case.
    ///
    /// With a non-empty separator the text must consist of two-digit groups with exactly one
    /// separator between each pair of them.
    pub fn decode(&self, text: &str) -> Result<Vec<u8>, FormatError> {
        if self.separator.is_empty() {
            return decode_plain(text);
        }

        let mut data = Vec::with_capacity(text.len() / (2 + self.separator.len()) + 1);
        let mut rest = text;
        while !rest.is_empty() {
            let pos = text.len() - rest.len();
            if pos > 0 {
                rest = rest.strip_prefix(self.separator.as_str()).ok_or_else(|| {
                    FormatError::SeparatorMismatch { separator: self.separator.clone(), pos }
                })?;
            }
            let pos = text.len() - rest.len();
            let mut chars = rest.char_indices();
            let hi = chars.next();
            let lo = chars.next();
            let (hi, lo) = match (hi, lo) {
                (Some((_, hi)), Some((_, lo))) => (hi, lo),
                // a trailing separator or a lone digit
                _ => return Err(FormatError::OddLength { len: text.len() }),
            };
            data.push((nibble(hi, pos)? << 4) | nibble(lo, pos + hi.len_utf8())?);
            rest = &rest[hi.len_utf8() + lo.len_utf8()..];
        }
        Ok(data)
    }
}

fn nibble(ch: char, pos: usize) -> Result<u8, FormatError> {
    ch.to_digit(16)
        .map(|digit| digit as u8)
        .ok_or(FormatError::InvalidDigit { ch, pos })
}

fn decode_plain(text: &str) -> Result<Vec<u8>, FormatError> {
    Vec::<u8>::from_hex(text)
        .map_err(|err| match err {
            hex::Error::OddLengthString(len) => FormatError::OddLength { len },
            hex::Error::InvalidChar(byte) => {
                let (pos, ch) = text
                    .char_indices()
                    .find(|(_, ch)| !ch.is_ascii_hexdigit())
                    .unwrap_or((0, byte as char));
                FormatError::InvalidDigit { ch, pos }
            }
            _ => FormatError::OddLength { len: text.len() },
        })
        .inspect_err(|err| log::debug!("rejected hex string: {err}"))
}

/// Converts bytes into hexadecimal text, placing `separator` between every two bytes.
pub fn bin2hex(data: &[u8], lowercase: bool, separator: &str) -> String {
    HexFormat::new(LetterCase::with_lowercase(lowercase), separator).encode(data)
}

/// Converts hexadecimal text with optional `separator` between bytes into raw bytes.
pub fn hex2bin(text: &str, separator: &str) -> Result<Vec<u8>, FormatError> {
    HexFormat::new(LetterCase::Lower, separator).decode(text)
}

/// Formats the lowest `digits` nibbles of a 64-bit pattern, zero-padded. `digits` is clamped to
/// `1..=16`.
pub(crate) fn bit_pattern_to_hex(bits: u64, digits: u8, case: LetterCase) -> String {
    let width = digits.clamp(1, 16) as usize;
    let masked = if width == 16 { bits } else { bits & ((1u64 << (width * 4)) - 1) };
    match case {
        LetterCase::Lower => format!("{masked:0width$x}"),
        LetterCase::Upper => format!("{masked:0width$X}"),
    }
}
