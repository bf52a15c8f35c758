//! The integer interface a `DoubleWidth` consumes and provides.
//!
//! `BaseInt` is the full fixed-width contract. The primitive integers
//! implement it directly, and every `DoubleWidth<B>` implements it in terms
//! of `B`, which is what lets a composite be the base of a wider one.

use std::fmt;
use std::hash::Hash;
use std::ops::{BitAnd, BitOr, BitXor, Not};

use crate::error::{trap, DoubleWidthError};

/// Bits in one word of the word view (see [`BaseInt::word`]).
pub const WORD_BITS: u32 = u64::BITS;

/// A fixed-width two's-complement integer.
pub trait BaseInt:
    Copy
    + Default
    + Eq
    + Ord
    + Hash
    + fmt::Debug
    + Not<Output = Self>
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + 'static
{
    /// The unsigned type of the same width.
    type Magnitude: UnsignedInt;

    const BITS: u32;
    const SIGNED: bool;
    const ZERO: Self;
    const ONE: Self;
    const MIN: Self;
    const MAX: Self;

    fn overflowing_add(self, rhs: Self) -> (Self, bool);
    fn overflowing_sub(self, rhs: Self) -> (Self, bool);
    fn overflowing_mul(self, rhs: Self) -> (Self, bool);

    /// Truncating division. A zero divisor or `MIN / -1` returns
    /// `(self, true)`.
    fn overflowing_div(self, rhs: Self) -> (Self, bool);

    /// Remainder with the dividend's sign. A zero divisor or `MIN % -1`
    /// returns `(self, true)`.
    fn overflowing_rem(self, rhs: Self) -> (Self, bool);

    /// Shift left by `rhs` reduced modulo `BITS`.
    fn wrapping_shl(self, rhs: u32) -> Self;
    /// Shift right by `rhs` reduced modulo `BITS`; arithmetic when signed.
    fn wrapping_shr(self, rhs: u32) -> Self;
    /// Shift left; amounts of `BITS` or more give zero.
    fn unbounded_shl(self, rhs: u32) -> Self;
    /// Shift right; amounts of `BITS` or more give the sign fill.
    fn unbounded_shr(self, rhs: u32) -> Self;

    fn leading_zeros(self) -> u32;
    fn trailing_zeros(self) -> u32;
    fn count_ones(self) -> u32;
    fn swap_bytes(self) -> Self;

    fn is_negative(self) -> bool;
    /// Reinterpret the bit pattern as the magnitude type.
    fn to_magnitude_bits(self) -> Self::Magnitude;
    /// Reinterpret a magnitude bit pattern as `Self`.
    fn from_magnitude_bits(bits: Self::Magnitude) -> Self;
    /// Absolute value, always representable in the magnitude type.
    fn magnitude(self) -> Self::Magnitude;

    /// Keep the low `BITS` bits of `bits`.
    fn truncating_from_u64(bits: u64) -> Self;

    /// The `index`-th 64-bit word of the sign-extended bit pattern, least
    /// significant first. Indexes past the width give the sign fill.
    fn word(self, index: usize) -> u64;

    fn truncating_from<T: BaseInt>(source: T) -> Self;
    fn exactly_from<T: BaseInt>(source: T) -> Option<Self>;

    fn to_f64(self) -> f64;
    /// Truncates toward zero; `None` for NaN, infinities and out of range.
    fn checked_from_f64(value: f64) -> Option<Self>;

    #[inline]
    fn checked_add(self, rhs: Self) -> Option<Self> {
        reported(self.overflowing_add(rhs))
    }

    #[inline]
    fn checked_sub(self, rhs: Self) -> Option<Self> {
        reported(self.overflowing_sub(rhs))
    }

    #[inline]
    fn checked_mul(self, rhs: Self) -> Option<Self> {
        reported(self.overflowing_mul(rhs))
    }

    #[inline]
    fn checked_div(self, rhs: Self) -> Option<Self> {
        reported(self.overflowing_div(rhs))
    }

    #[inline]
    fn checked_rem(self, rhs: Self) -> Option<Self> {
        reported(self.overflowing_rem(rhs))
    }

    #[inline]
    fn wrapping_add(self, rhs: Self) -> Self {
        self.overflowing_add(rhs).0
    }

    #[inline]
    fn wrapping_sub(self, rhs: Self) -> Self {
        self.overflowing_sub(rhs).0
    }

    #[inline]
    fn wrapping_mul(self, rhs: Self) -> Self {
        self.overflowing_mul(rhs).0
    }
}

/// An unsigned `BaseInt`, with the full-width operations the composite
/// multiply and divide engines are built from.
pub trait UnsignedInt: BaseInt<Magnitude = Self> {
    /// Full product as `(high, low)`.
    fn full_mul(self, rhs: Self) -> (Self, Self);

    /// Divides the two-word value `high:low` by `divisor`, returning
    /// `(quotient, remainder)`.
    ///
    /// # Panics
    ///
    /// If `divisor` is zero or `high >= divisor` (the quotient would not
    /// fit in one word).
    fn full_div_rem(high: Self, low: Self, divisor: Self) -> (Self, Self);

    /// `(self / rhs, self % rhs)`; panics on a zero divisor.
    fn div_rem(self, rhs: Self) -> (Self, Self);
}

/// A signed `BaseInt`. Composites get negation only through this trait.
pub trait SignedInt: BaseInt {
    fn overflowing_neg(self) -> (Self, bool);
}

#[inline]
fn reported<T>((value, overflow): (T, bool)) -> Option<T> {
    if overflow {
        None
    } else {
        Some(value)
    }
}

/// `ONE` when `flag` is set, else `ZERO`.
#[inline]
pub(crate) fn bit<T: BaseInt>(flag: bool) -> T {
    if flag {
        T::ONE
    } else {
        T::ZERO
    }
}

// ============================================================================
// Primitive implementations
// ============================================================================

macro_rules! impl_base_common {
    ($t:ty) => {
        const BITS: u32 = <$t>::BITS;
        const ZERO: Self = 0;
        const ONE: Self = 1;
        const MIN: Self = <$t>::MIN;
        const MAX: Self = <$t>::MAX;

        #[inline]
        fn overflowing_add(self, rhs: Self) -> (Self, bool) {
            <$t>::overflowing_add(self, rhs)
        }

        #[inline]
        fn overflowing_sub(self, rhs: Self) -> (Self, bool) {
            <$t>::overflowing_sub(self, rhs)
        }

        #[inline]
        fn overflowing_mul(self, rhs: Self) -> (Self, bool) {
            <$t>::overflowing_mul(self, rhs)
        }

        #[inline]
        fn overflowing_div(self, rhs: Self) -> (Self, bool) {
            if rhs == 0 {
                return (self, true);
            }
            <$t>::overflowing_div(self, rhs)
        }

        #[inline]
        fn overflowing_rem(self, rhs: Self) -> (Self, bool) {
            if rhs == 0 {
                return (self, true);
            }
            match <$t>::overflowing_rem(self, rhs) {
                (_, true) => (self, true),
                remainder => remainder,
            }
        }

        #[inline]
        fn wrapping_shl(self, rhs: u32) -> Self {
            <$t>::wrapping_shl(self, rhs)
        }

        #[inline]
        fn wrapping_shr(self, rhs: u32) -> Self {
            <$t>::wrapping_shr(self, rhs)
        }

        #[inline]
        fn unbounded_shl(self, rhs: u32) -> Self {
            <$t>::checked_shl(self, rhs).unwrap_or(0)
        }

        #[inline]
        fn unbounded_shr(self, rhs: u32) -> Self {
            match <$t>::checked_shr(self, rhs) {
                Some(shifted) => shifted,
                None if BaseInt::is_negative(self) => !0,
                None => 0,
            }
        }

        #[inline]
        fn leading_zeros(self) -> u32 {
            <$t>::leading_zeros(self)
        }

        #[inline]
        fn trailing_zeros(self) -> u32 {
            <$t>::trailing_zeros(self)
        }

        #[inline]
        fn count_ones(self) -> u32 {
            <$t>::count_ones(self)
        }

        #[inline]
        fn swap_bytes(self) -> Self {
            <$t>::swap_bytes(self)
        }

        #[inline]
        fn truncating_from_u64(bits: u64) -> Self {
            bits as $t
        }

        #[inline]
        fn truncating_from<T: BaseInt>(source: T) -> Self {
            let bits = (source.word(0) as u128) | ((source.word(1) as u128) << 64);
            bits as $t
        }

        fn exactly_from<T: BaseInt>(source: T) -> Option<Self> {
            let value = <Self as BaseInt>::truncating_from(source);
            let round_trip = T::truncating_from(value) == source;
            if round_trip && BaseInt::is_negative(value) == source.is_negative() {
                Some(value)
            } else {
                None
            }
        }

        #[inline]
        fn to_f64(self) -> f64 {
            self as f64
        }
    };
}

macro_rules! impl_unsigned {
    ($($t:ty => $wide:ty),* $(,)?) => {$(
        impl BaseInt for $t {
            type Magnitude = $t;
            const SIGNED: bool = false;

            impl_base_common!($t);

            #[inline]
            fn is_negative(self) -> bool {
                false
            }

            #[inline]
            fn to_magnitude_bits(self) -> $t {
                self
            }

            #[inline]
            fn from_magnitude_bits(bits: $t) -> Self {
                bits
            }

            #[inline]
            fn magnitude(self) -> $t {
                self
            }

            #[inline]
            fn word(self, index: usize) -> u64 {
                if index >= 2 {
                    return 0;
                }
                ((self as u128) >> (64 * index as u32)) as u64
            }

            fn checked_from_f64(value: f64) -> Option<Self> {
                let truncated = value.trunc();
                if !truncated.is_finite() || truncated < 0.0 {
                    return None;
                }
                if truncated >= 2f64.powi(<$t>::BITS as i32) {
                    return None;
                }
                Some(truncated as $t)
            }
        }

        impl UnsignedInt for $t {
            #[inline]
            fn full_mul(self, rhs: Self) -> (Self, Self) {
                let product = (self as $wide) * (rhs as $wide);
                ((product >> <$t>::BITS) as $t, product as $t)
            }

            fn full_div_rem(high: Self, low: Self, divisor: Self) -> (Self, Self) {
                if divisor == 0 {
                    trap(DoubleWidthError::DivisionByZero);
                }
                if high >= divisor {
                    trap(DoubleWidthError::DIV);
                }
                let dividend = ((high as $wide) << <$t>::BITS) | low as $wide;
                let divisor = divisor as $wide;
                ((dividend / divisor) as $t, (dividend % divisor) as $t)
            }

            #[inline]
            fn div_rem(self, rhs: Self) -> (Self, Self) {
                if rhs == 0 {
                    trap(DoubleWidthError::DivisionByZero);
                }
                (self / rhs, self % rhs)
            }
        }
    )*};
}

macro_rules! impl_signed {
    ($($t:ty => $mag:ty),* $(,)?) => {$(
        impl BaseInt for $t {
            type Magnitude = $mag;
            const SIGNED: bool = true;

            impl_base_common!($t);

            #[inline]
            fn is_negative(self) -> bool {
                self < 0
            }

            #[inline]
            fn to_magnitude_bits(self) -> $mag {
                self as $mag
            }

            #[inline]
            fn from_magnitude_bits(bits: $mag) -> Self {
                bits as $t
            }

            #[inline]
            fn magnitude(self) -> $mag {
                <$t>::unsigned_abs(self)
            }

            #[inline]
            fn word(self, index: usize) -> u64 {
                if index >= 2 {
                    return if self < 0 { u64::MAX } else { 0 };
                }
                ((self as i128) >> (64 * index as u32)) as u64
            }

            fn checked_from_f64(value: f64) -> Option<Self> {
                let truncated = value.trunc();
                if !truncated.is_finite() {
                    return None;
                }
                let bound = 2f64.powi(<$t>::BITS as i32 - 1);
                if truncated < -bound || truncated >= bound {
                    return None;
                }
                Some(truncated as $t)
            }
        }

        impl SignedInt for $t {
            #[inline]
            fn overflowing_neg(self) -> (Self, bool) {
                <$t>::overflowing_neg(self)
            }
        }
    )*};
}

impl_unsigned!(u8 => u16, u16 => u32, u32 => u64, u64 => u128);
impl_signed!(i8 => u8, i16 => u16, i32 => u32, i64 => u64);
