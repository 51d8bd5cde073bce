// SPDX-License-Identifier: Apache-2.0

use crate::{Int64, LengthError, UInt64};

/// Size of a packed 64-bit integer, in bytes.
pub const PACKED_LEN: usize = 8;

/// Byte order of a packed 64-bit integer. It is always given explicitly and never taken from the
/// platform running the code.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default, Display)]
pub enum Endianness {
    /// Least significant byte first.
    #[default]
    #[display("little-endian")]
    Little,

    /// Most significant byte first.
    #[display("big-endian")]
    Big,
}

impl Endianness {
    /// Constructs endianness from the `little_endian` flag used by the host bindings.
    pub fn with_little_endian(little_endian: bool) -> Self {
        if little_endian { Endianness::Little } else { Endianness::Big }
    }

    pub fn is_little(self) -> bool { self == Endianness::Little }
}

/// 64-bit values which can be packed into an 8-byte buffer.
pub trait Codec64: Copy {
    fn to_bytes(self, endianness: Endianness) -> [u8; PACKED_LEN];
    fn from_bytes(bytes: [u8; PACKED_LEN], endianness: Endianness) -> Self;
}

impl Codec64 for Int64 {
    fn to_bytes(self, endianness: Endianness) -> [u8; PACKED_LEN] {
        match endianness {
            Endianness::Little => self.to_i64().to_le_bytes(),
            Endianness::Big => self.to_i64().to_be_bytes(),
        }
    }

    fn from_bytes(bytes: [u8; PACKED_LEN], endianness: Endianness) -> Self {
        Int64::new(match endianness {
            Endianness::Little => i64::from_le_bytes(bytes),
            Endianness::Big => i64::from_be_bytes(bytes),
        })
    }
}

impl Codec64 for UInt64 {
    fn to_bytes(self, endianness: Endianness) -> [u8; PACKED_LEN] {
        match endianness {
            Endianness::Little => self.to_u64().to_le_bytes(),
            Endianness::Big => self.to_u64().to_be_bytes(),
        }
    }

    fn from_bytes(bytes: [u8; PACKED_LEN], endianness: Endianness) -> Self {
        UInt64::new(match endianness {
            Endianness::Little => u64::from_le_bytes(bytes),
            Endianness::Big => u64::from_be_bytes(bytes),
        })
    }
}

/// Packs the 64-bit pattern of the value in the requested byte order.
pub fn pack<T: Codec64>(value: T, endianness: Endianness) -> [u8; PACKED_LEN] {
    value.to_bytes(endianness)
}

/// Appends the packed value to the end of a buffer.
pub fn pack_into<T: Codec64>(value: T, endianness: Endianness, buf: &mut Vec<u8>) {
    buf.extend_from_slice(&value.to_bytes(endianness));
}

/// Unpacks a value from a buffer, which must be exactly [`PACKED_LEN`] bytes long.
pub fn unpack<T: Codec64>(buf: &[u8], endianness: Endianness) -> Result<T, LengthError> {
    let bytes = <[u8; PACKED_LEN]>::try_from(buf)
        .map_err(|_| LengthError { expected: PACKED_LEN, actual: buf.len() })?;
    Ok(T::from_bytes(bytes, endianness))
}

/// Unpacks a value from the first [`PACKED_LEN`] bytes of a buffer, returning the rest of it.
pub fn unpack_prefix<T: Codec64>(
    buf: &[u8],
    endianness: Endianness,
) -> Result<(T, &[u8]), LengthError> {
    if buf.len() < PACKED_LEN {
        return Err(LengthError { expected: PACKED_LEN, actual: buf.len() });
    }
    let (head, rest) = buf.split_at(PACKED_LEN);
    let value = unpack(head, endianness)?;
    Ok((value, rest))
}
