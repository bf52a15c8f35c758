//! Full-width multiplication from four half-width partial products.

use crate::dword::{DoubleWidth, Low};
use crate::error::{trap, DoubleWidthError};
use crate::int::{bit, BaseInt, UnsignedInt};

/// Sums a column of words, returning `(carry, sum)`.
#[inline]
fn column_sum<U: UnsignedInt, const N: usize>(terms: [U; N]) -> (U, U) {
    terms
        .into_iter()
        .fold((U::ZERO, U::ZERO), |(carry, sum), term| {
            let (sum, overflow) = sum.overflowing_add(term);
            (carry.wrapping_add(bit(overflow)), sum)
        })
}

/// Two's-complement negation of the four-word value `high:low`.
#[inline]
pub(crate) fn negate_wide<U: UnsignedInt>(
    high: DoubleWidth<U>,
    low: DoubleWidth<U>,
) -> (DoubleWidth<U>, DoubleWidth<U>) {
    let (low, carry) = (!low).overflowing_add(DoubleWidth::ONE);
    ((!high).wrapping_add(bit(carry)), low)
}

impl<U: UnsignedInt> DoubleWidth<U> {
    /// Product of two magnitudes as `(high, low)`.
    ///
    /// With `a = (a1, a0)` and `b = (b1, b0)` the four half products are
    /// laid out as
    ///
    /// ```text
    ///                 a0*b0.hi  a0*b0.lo
    ///       a0*b1.hi  a0*b1.lo
    ///       a1*b0.hi  a1*b0.lo
    /// a1*b1.hi  a1*b1.lo
    /// ```
    ///
    /// and summed column by column.
    pub(crate) fn full_mul_magnitude(self, rhs: Self) -> (Self, Self) {
        let ll = self.low.full_mul(rhs.low);
        let lh = self.low.full_mul(rhs.high);
        let hl = self.high.full_mul(rhs.low);
        let hh = self.high.full_mul(rhs.high);

        let (mid1_carry, mid1) = column_sum([ll.0, lh.1, hl.1]);
        let (mid2_carry, mid2) = column_sum([lh.0, hl.0, hh.1, mid1_carry]);

        // The full product fits in four words, so the top column cannot carry.
        let high = Self::new(hh.0.wrapping_add(mid2_carry), mid2);
        let low = Self::new(mid1, ll.1);
        (high, low)
    }
}

impl<B: BaseInt> DoubleWidth<B> {
    /// The exact product as a `(high, low)` pair of twice this width.
    ///
    /// ```
    /// use doublewidth::U128;
    ///
    /// let (high, low) = U128::MAX.full_mul(U128::MAX);
    /// assert_eq!(high, U128::MAX - U128::ONE);
    /// assert_eq!(low, U128::ONE);
    /// ```
    pub fn full_mul(self, rhs: Self) -> (Self, DoubleWidth<Low<B>>) {
        let negative = self.is_negative() != rhs.is_negative();
        let (high, low) = self.magnitude().full_mul_magnitude(rhs.magnitude());
        let (high, low) = if negative {
            negate_wide(high, low)
        } else {
            (high, low)
        };
        (Self::from_magnitude_bits(high), low)
    }

    /// Truncates the full product. Overflow when the discarded high half is
    /// not the sign extension of the kept half.
    pub fn overflowing_mul(self, rhs: Self) -> (Self, bool) {
        let (high, low) = self.full_mul(rhs);
        let kept_negative = Self::SIGNED && low.leading_zeros() == 0;
        (Self::from_magnitude_bits(low), high != Self::fill(kept_negative))
    }

    #[inline]
    pub fn checked_mul(self, rhs: Self) -> Option<Self> {
        match self.overflowing_mul(rhs) {
            (product, false) => Some(product),
            _ => None,
        }
    }

    #[inline]
    pub fn wrapping_mul(self, rhs: Self) -> Self {
        self.overflowing_mul(rhs).0
    }

    pub fn try_mul(self, rhs: Self) -> Result<Self, DoubleWidthError> {
        self.checked_mul(rhs).ok_or(DoubleWidthError::MUL)
    }

    #[track_caller]
    pub(crate) fn strict_mul(self, rhs: Self) -> Self {
        self.try_mul(rhs).unwrap_or_else(|err| trap(err))
    }
}
