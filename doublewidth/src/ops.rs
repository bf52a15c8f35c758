//! Operator overloads.
//!
//! Arithmetic operators trap on overflow in every build profile, like
//! native integers with overflow checks on. Shift operators never trap:
//! an amount past the width saturates and a negative amount reverses the
//! direction, as `signed_shl`/`signed_shr` do.

use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Mul, MulAssign, Not, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub,
    SubAssign,
};

use crate::dword::DoubleWidth;
use crate::int::BaseInt;

macro_rules! impl_arith_op {
    ($($trait:ident :: $method:ident, $assign:ident :: $assign_method:ident => $strict:ident;)*) => {$(
        impl<B: BaseInt> $trait for DoubleWidth<B> {
            type Output = Self;

            #[inline]
            #[track_caller]
            fn $method(self, rhs: Self) -> Self {
                self.$strict(rhs)
            }
        }

        impl<B: BaseInt> $assign for DoubleWidth<B> {
            #[inline]
            #[track_caller]
            fn $assign_method(&mut self, rhs: Self) {
                *self = self.$strict(rhs);
            }
        }
    )*};
}

impl_arith_op! {
    Add::add, AddAssign::add_assign => strict_add;
    Sub::sub, SubAssign::sub_assign => strict_sub;
    Mul::mul, MulAssign::mul_assign => strict_mul;
    Div::div, DivAssign::div_assign => div_strict;
    Rem::rem, RemAssign::rem_assign => rem_strict;
}

impl<B: BaseInt> Not for DoubleWidth<B> {
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        Self::new(!self.high, !self.low)
    }
}

macro_rules! impl_bit_op {
    ($($trait:ident :: $method:ident, $assign:ident :: $assign_method:ident => $op:tt;)*) => {$(
        impl<B: BaseInt> $trait for DoubleWidth<B> {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: Self) -> Self {
                Self::new(self.high $op rhs.high, self.low $op rhs.low)
            }
        }

        impl<B: BaseInt> $assign for DoubleWidth<B> {
            #[inline]
            fn $assign_method(&mut self, rhs: Self) {
                *self = *self $op rhs;
            }
        }
    )*};
}

impl_bit_op! {
    BitAnd::bitand, BitAndAssign::bitand_assign => &;
    BitOr::bitor, BitOrAssign::bitor_assign => |;
    BitXor::bitxor, BitXorAssign::bitxor_assign => ^;
}

macro_rules! impl_signed_shift {
    ($($t:ty),*) => {$(
        impl<B: BaseInt> Shl<$t> for DoubleWidth<B> {
            type Output = Self;

            #[inline]
            fn shl(self, rhs: $t) -> Self {
                self.signed_shl(i64::from(rhs))
            }
        }

        impl<B: BaseInt> Shr<$t> for DoubleWidth<B> {
            type Output = Self;

            #[inline]
            fn shr(self, rhs: $t) -> Self {
                self.signed_shr(i64::from(rhs))
            }
        }
    )*};
}

macro_rules! impl_unsigned_shift {
    ($($t:ty),*) => {$(
        impl<B: BaseInt> Shl<$t> for DoubleWidth<B> {
            type Output = Self;

            #[inline]
            fn shl(self, rhs: $t) -> Self {
                self.unbounded_shl(u32::try_from(rhs).unwrap_or(u32::MAX))
            }
        }

        impl<B: BaseInt> Shr<$t> for DoubleWidth<B> {
            type Output = Self;

            #[inline]
            fn shr(self, rhs: $t) -> Self {
                self.unbounded_shr(u32::try_from(rhs).unwrap_or(u32::MAX))
            }
        }
    )*};
}

impl_signed_shift!(i32, i64);
impl_unsigned_shift!(u32, u64, usize);

macro_rules! impl_shift_assign {
    ($($t:ty),*) => {$(
        impl<B: BaseInt> ShlAssign<$t> for DoubleWidth<B> {
            #[inline]
            fn shl_assign(&mut self, rhs: $t) {
                *self = *self << rhs;
            }
        }

        impl<B: BaseInt> ShrAssign<$t> for DoubleWidth<B> {
            #[inline]
            fn shr_assign(&mut self, rhs: $t) {
                *self = *self >> rhs;
            }
        }
    )*};
}

impl_shift_assign!(i32, i64, u32, u64, usize);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dword::{U1024, U256};

    type U16 = DoubleWidth<u8>;
    type I16 = DoubleWidth<i8>;

    fn i16_pair(x: i16) -> I16 {
        DoubleWidth::new((x >> 8) as i8, x as u8)
    }

    fn u16_pair(x: u16) -> U16 {
        DoubleWidth::new((x >> 8) as u8, x as u8)
    }

    #[test]
    fn test_assign_operators() {
        let mut x = u16_pair(1000);
        x += u16_pair(1);
        assert_eq!(x, u16_pair(1001));
        x -= u16_pair(2);
        assert_eq!(x, u16_pair(999));
        x *= u16_pair(7);
        assert_eq!(x, u16_pair(6993));
        x /= u16_pair(3);
        assert_eq!(x, u16_pair(2331));
        x %= u16_pair(1000);
        assert_eq!(x, u16_pair(331));
    }

    #[test]
    fn test_bitwise_operators() {
        let a = u16_pair(0xf0f0);
        let b = u16_pair(0x3c3c);
        assert_eq!(a & b, u16_pair(0x3030));
        assert_eq!(a | b, u16_pair(0xfcfc));
        assert_eq!(a ^ b, u16_pair(0xcccc));
        assert_eq!(!a, u16_pair(0x0f0f));
        let mut c = a;
        c &= b;
        c |= u16_pair(1);
        c ^= u16_pair(0x3000);
        assert_eq!(c, u16_pair(0x0031));
        assert_eq!(!I16::ZERO, i16_pair(-1));
    }

    #[test]
    fn test_shift_operators_never_trap() {
        for amount in -20i32..=20 {
            let expected = if amount >= 0 {
                (-1111i16).checked_shl(amount as u32).unwrap_or(0)
            } else {
                (-1111i16).checked_shr(amount.unsigned_abs()).unwrap_or(-1)
            };
            assert_eq!(i16_pair(-1111) << amount, i16_pair(expected), "<< {amount}");
        }
        assert_eq!(U256::ONE << 255u32, U256::MAX ^ (U256::MAX >> 1u32));
        assert_eq!(U256::MAX >> 256usize, U256::ZERO);
        assert_eq!(U1024::ONE << u64::MAX, U1024::ZERO);
        assert_eq!(i16_pair(-8) >> 2i64, i16_pair(-2));
        assert_eq!(i16_pair(-8) >> -2i64, i16_pair(-32));
        let mut x = u16_pair(1);
        x <<= 15usize;
        x >>= 3u32;
        x <<= -1i32;
        assert_eq!(x, u16_pair(0x0800));
    }
}
