// SPDX-License-Identifier: Apache-2.0

/// Errors parsing a 64-bit integer from its textual representation.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Display, Error)]
#[display(doc_comments)]
pub enum ParseError {
    /// empty string can't be parsed as a 64-bit integer.
    Empty,

    /// character '{ch}' at position {pos} is not a valid {radix_name} digit.
    InvalidDigit {
        ch: char,
        pos: usize,
        radix_name: &'static str,
    },

    /// negative values can't be represented by an unsigned 64-bit integer.
    NegativeUnsigned,

    /// number does not fit into {bits}-bit integer range.
    Overflow { bits: u8 },
}

/// Attempt to divide a 64-bit integer by zero.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default, Display, Error)]
#[display("division by zero")]
pub struct DivideByZeroError;

/// Buffer provided for 64-bit integer decoding has invalid length.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Display, Error)]
#[display("invalid buffer length: {expected} bytes expected, while {actual} bytes were provided")]
pub struct LengthError {
    pub expected: usize,
    pub actual: usize,
}

/// Errors in the structure of a hexadecimal string.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Display, Error)]
#[display(doc_comments)]
pub enum FormatError {
    /// hex string has odd length {len}, while each byte must be encoded with two digits.
    OddLength { len: usize },

    /// character '{ch}' at position {pos} is not a hexadecimal digit.
    InvalidDigit { ch: char, pos: usize },

    /// separator '{separator}' was expected at position {pos}.
    SeparatorMismatch { separator: String, pos: usize },
}

/// Any error produced by the library.
#[derive(Clone, PartialEq, Eq, Debug, Display, Error, From)]
#[display(inner)]
pub enum Error {
    #[from]
    Parse(ParseError),

    #[from]
    DivideByZero(DivideByZeroError),

    #[from]
    Length(LengthError),

    #[from]
    Format(FormatError),
}
