// SPDX-License-Identifier: Apache-2.0

/// Implements `core::ops` operators by forwarding to the inherent wrapping methods of a 64-bit
/// value type. Division and remainder are fallible and are not exposed as operators.
macro_rules! impl_wrapping_ops {
    ($ty:ident) => {
        impl ::core::ops::Add for $ty {
            type Output = Self;
            fn add(self, rhs: Self) -> Self { $ty::add(self, rhs) }
        }

        impl ::core::ops::Sub for $ty {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self { $ty::sub(self, rhs) }
        }

        impl ::core::ops::Mul for $ty {
            type Output = Self;
            fn mul(self, rhs: Self) -> Self { $ty::mul(self, rhs) }
        }

        impl ::core::ops::BitAnd for $ty {
            type Output = Self;
            fn bitand(self, rhs: Self) -> Self { self.band(rhs) }
        }

        impl ::core::ops::BitOr for $ty {
            type Output = Self;
            fn bitor(self, rhs: Self) -> Self { self.bor(rhs) }
        }

        impl ::core::ops::BitXor for $ty {
            type Output = Self;
            fn bitxor(self, rhs: Self) -> Self { self.bxor(rhs) }
        }

        impl ::core::ops::Not for $ty {
            type Output = Self;
            fn not(self) -> Self { self.bnot() }
        }

        impl ::core::ops::Shl<u32> for $ty {
            type Output = Self;
            fn shl(self, rhs: u32) -> Self { $ty::shl(self, rhs) }
        }

        impl ::core::ops::Shr<u32> for $ty {
            type Output = Self;
            fn shr(self, rhs: u32) -> Self { $ty::shr(self, rhs) }
        }

        impl ::core::iter::Sum for $ty {
            fn sum<I: Iterator<Item = Self>>(iter: I) -> Self { iter.fold($ty::ZERO, $ty::add) }
        }
    };
}
