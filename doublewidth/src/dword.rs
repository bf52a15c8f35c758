//! The `(high, low)` pair and its construction.
//!
//! A `DoubleWidth<B>` has value `high * 2^W + low`, where `W` is the width
//! of `B`. `high` keeps `B`'s signedness and carries the sign; `low` is the
//! unsigned magnitude type of `B`. The pair is itself a `BaseInt`, so
//! `DoubleWidth<DoubleWidth<u64>>` is a 256-bit integer with no extra
//! machinery.

use std::fmt;

use crate::int::{BaseInt, SignedInt, UnsignedInt};

/// The type of a composite's low half: the magnitude type of its base.
pub type Low<B> = <B as BaseInt>::Magnitude;

/// A fixed-width integer of twice the width of `B`.
///
/// ```
/// use doublewidth::{DoubleWidth, U256};
///
/// let x = DoubleWidth::<u8>::new(0x03, 0xe8);
/// assert_eq!(x.to_string(), "1000");
/// assert_eq!(U256::MAX.count_ones(), 256);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(
        serialize = "B: serde::Serialize, Low<B>: serde::Serialize",
        deserialize = "B: serde::Deserialize<'de>, Low<B>: serde::Deserialize<'de>"
    ))
)]
pub struct DoubleWidth<B: BaseInt> {
    pub(crate) high: B,
    pub(crate) low: Low<B>,
}

pub type U128 = DoubleWidth<u64>;
pub type I128 = DoubleWidth<i64>;
pub type U256 = DoubleWidth<U128>;
pub type I256 = DoubleWidth<I128>;
pub type U512 = DoubleWidth<U256>;
pub type I512 = DoubleWidth<I256>;
pub type U1024 = DoubleWidth<U512>;
pub type I1024 = DoubleWidth<I512>;

impl<B: BaseInt> DoubleWidth<B> {
    pub const BITS: u32 = 2 * B::BITS;
    pub const SIGNED: bool = B::SIGNED;
    pub const ZERO: Self = DoubleWidth {
        high: B::ZERO,
        low: <Low<B> as BaseInt>::ZERO,
    };
    pub const ONE: Self = DoubleWidth {
        high: B::ZERO,
        low: <Low<B> as BaseInt>::ONE,
    };
    pub const MIN: Self = DoubleWidth {
        high: B::MIN,
        low: <Low<B> as BaseInt>::ZERO,
    };
    pub const MAX: Self = DoubleWidth {
        high: B::MAX,
        low: <Low<B> as BaseInt>::MAX,
    };

    /// Width of one half.
    pub(crate) const HALF_BITS: u32 = <Low<B> as BaseInt>::BITS;

    #[inline]
    pub const fn new(high: B, low: Low<B>) -> Self {
        DoubleWidth { high, low }
    }

    /// Same as [`new`](Self::new), pairing with [`into_parts`](Self::into_parts).
    #[inline]
    pub fn from_parts((high, low): (B, Low<B>)) -> Self {
        DoubleWidth { high, low }
    }

    #[inline]
    pub fn into_parts(self) -> (B, Low<B>) {
        (self.high, self.low)
    }

    #[inline]
    pub fn high(self) -> B {
        self.high
    }

    #[inline]
    pub fn low(self) -> Low<B> {
        self.low
    }

    /// Sign- or zero-extends a single base value.
    #[inline]
    pub fn from_base(value: B) -> Self {
        Self::new(Self::fill(value.is_negative()).high, value.to_magnitude_bits())
    }

    /// Builds a value from raw bits: the low `W` bits go to `low`, the next
    /// `W` bits to `high`, and anything above is dropped.
    pub fn truncating_from_u64(bits: u64) -> Self {
        let rest = if Self::HALF_BITS >= u64::BITS {
            0
        } else {
            bits >> Self::HALF_BITS
        };
        Self::new(
            B::truncating_from_u64(rest),
            <Low<B> as BaseInt>::truncating_from_u64(bits),
        )
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self == Self::ZERO
    }

    #[inline]
    pub fn is_negative(self) -> bool {
        self.high.is_negative()
    }

    /// All ones for `negative`, else zero: the bits a sign extension adds.
    #[inline]
    pub(crate) fn fill(negative: bool) -> Self {
        if negative {
            !Self::ZERO
        } else {
            Self::ZERO
        }
    }

    /// The same bit pattern viewed as the unsigned composite.
    #[inline]
    pub fn to_magnitude_bits(self) -> DoubleWidth<Low<B>> {
        DoubleWidth::new(self.high.to_magnitude_bits(), self.low)
    }

    #[inline]
    pub fn from_magnitude_bits(bits: DoubleWidth<Low<B>>) -> Self {
        Self::new(B::from_magnitude_bits(bits.high), bits.low)
    }

    /// Absolute value as the unsigned composite. Total, including `MIN`.
    #[inline]
    pub fn magnitude(self) -> DoubleWidth<Low<B>> {
        let bits = self.to_magnitude_bits();
        if self.is_negative() {
            bits.wrapping_neg()
        } else {
            bits
        }
    }

    /// Applies a sign to a magnitude, or `None` if the result would not fit.
    pub(crate) fn with_sign(magnitude: DoubleWidth<Low<B>>, negative: bool) -> Option<Self> {
        let bits = Self::from_magnitude_bits(magnitude);
        if negative {
            let value = bits.wrapping_neg();
            (magnitude.is_zero() || value.is_negative()).then_some(value)
        } else {
            (!bits.is_negative()).then_some(bits)
        }
    }
}

impl<B: BaseInt> Default for DoubleWidth<B> {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl<B: BaseInt> From<B> for DoubleWidth<B> {
    #[inline]
    fn from(value: B) -> Self {
        Self::from_base(value)
    }
}

impl<B: BaseInt> fmt::Debug for DoubleWidth<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

// ============================================================================
// Self-composition: the pair is a base for the next width up
// ============================================================================

impl<B: BaseInt> BaseInt for DoubleWidth<B> {
    type Magnitude = DoubleWidth<Low<B>>;

    const BITS: u32 = 2 * B::BITS;
    const SIGNED: bool = B::SIGNED;
    const ZERO: Self = DoubleWidth {
        high: B::ZERO,
        low: <Low<B> as BaseInt>::ZERO,
    };
    const ONE: Self = DoubleWidth {
        high: B::ZERO,
        low: <Low<B> as BaseInt>::ONE,
    };
    const MIN: Self = DoubleWidth {
        high: B::MIN,
        low: <Low<B> as BaseInt>::ZERO,
    };
    const MAX: Self = DoubleWidth {
        high: B::MAX,
        low: <Low<B> as BaseInt>::MAX,
    };

    fn overflowing_add(self, rhs: Self) -> (Self, bool) {
        DoubleWidth::overflowing_add(self, rhs)
    }

    fn overflowing_sub(self, rhs: Self) -> (Self, bool) {
        DoubleWidth::overflowing_sub(self, rhs)
    }

    fn overflowing_mul(self, rhs: Self) -> (Self, bool) {
        DoubleWidth::overflowing_mul(self, rhs)
    }

    fn overflowing_div(self, rhs: Self) -> (Self, bool) {
        DoubleWidth::overflowing_div(self, rhs)
    }

    fn overflowing_rem(self, rhs: Self) -> (Self, bool) {
        DoubleWidth::overflowing_rem(self, rhs)
    }

    fn wrapping_shl(self, rhs: u32) -> Self {
        DoubleWidth::wrapping_shl(self, rhs)
    }

    fn wrapping_shr(self, rhs: u32) -> Self {
        DoubleWidth::wrapping_shr(self, rhs)
    }

    fn unbounded_shl(self, rhs: u32) -> Self {
        DoubleWidth::unbounded_shl(self, rhs)
    }

    fn unbounded_shr(self, rhs: u32) -> Self {
        DoubleWidth::unbounded_shr(self, rhs)
    }

    fn leading_zeros(self) -> u32 {
        DoubleWidth::leading_zeros(self)
    }

    fn trailing_zeros(self) -> u32 {
        DoubleWidth::trailing_zeros(self)
    }

    fn count_ones(self) -> u32 {
        DoubleWidth::count_ones(self)
    }

    fn swap_bytes(self) -> Self {
        DoubleWidth::swap_bytes(self)
    }

    fn is_negative(self) -> bool {
        DoubleWidth::is_negative(self)
    }

    fn to_magnitude_bits(self) -> Self::Magnitude {
        DoubleWidth::to_magnitude_bits(self)
    }

    fn from_magnitude_bits(bits: Self::Magnitude) -> Self {
        DoubleWidth::from_magnitude_bits(bits)
    }

    fn magnitude(self) -> Self::Magnitude {
        DoubleWidth::magnitude(self)
    }

    fn truncating_from_u64(bits: u64) -> Self {
        DoubleWidth::truncating_from_u64(bits)
    }

    fn word(self, index: usize) -> u64 {
        DoubleWidth::word(self, index)
    }

    fn truncating_from<T: BaseInt>(source: T) -> Self {
        DoubleWidth::truncating_from_int(source)
    }

    fn exactly_from<T: BaseInt>(source: T) -> Option<Self> {
        DoubleWidth::checked_from_int(source)
    }

    fn to_f64(self) -> f64 {
        DoubleWidth::to_f64(self)
    }

    fn checked_from_f64(value: f64) -> Option<Self> {
        DoubleWidth::checked_from_f64(value)
    }
}

impl<U: UnsignedInt> UnsignedInt for DoubleWidth<U> {
    fn full_mul(self, rhs: Self) -> (Self, Self) {
        self.full_mul_magnitude(rhs)
    }

    fn full_div_rem(high: Self, low: Self, divisor: Self) -> (Self, Self) {
        Self::div_rem_wide_magnitude(high, low, divisor)
    }

    fn div_rem(self, rhs: Self) -> (Self, Self) {
        self.div_rem_magnitude(rhs)
    }
}

impl<B: SignedInt> SignedInt for DoubleWidth<B> {
    fn overflowing_neg(self) -> (Self, bool) {
        DoubleWidth::overflowing_neg(self)
    }
}
