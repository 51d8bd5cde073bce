// SPDX-License-Identifier: Apache-2.0

//! Wide64: 64-bit integers for scripting hosts whose only native number is a double.
//!
//! The crate provides [`Int64`] and [`UInt64`] value types with exact fixed-width wraparound
//! arithmetic, conversions to and from the host number ([`HostNumber`]) with a well-defined
//! precision-loss policy, packing into 8-byte buffers of explicit [`Endianness`], and
//! hexadecimal conversion of byte strings ([`bin2hex`], [`hex2bin`]).
//!
//! ```
//! use wide64::{pack, unpack, Endianness, HostNumber, Int64};
//!
//! let value = Int64::MAX + Int64::ONE;
//! assert_eq!(value, Int64::MIN);
//!
//! let buf = pack(value, Endianness::Big);
//! assert_eq!(unpack::<Int64>(&buf, Endianness::Big), Ok(value));
//! assert_eq!(Int64::from_number(-7.9).to_number(), -7.0);
//! ```

#[macro_use]
extern crate amplify;

#[macro_use]
mod macros;
mod bridge;
mod codec;
mod error;
mod hex;
mod int64;
mod parse;
mod uint64;

pub use bridge::{HostNumber, MAX_SAFE_INTEGER, MIN_SAFE_INTEGER};
pub use codec::{pack, pack_into, unpack, unpack_prefix, Codec64, Endianness, PACKED_LEN};
pub use error::{DivideByZeroError, Error, FormatError, LengthError, ParseError};
pub use hex::{bin2hex, hex2bin, HexFormat, LetterCase};
pub use int64::Int64;
pub use uint64::UInt64;

/// Strict type library name for the types of this crate.
#[cfg(feature = "strict")]
pub const LIB_NAME_WIDE64: &str = "Wide64";
