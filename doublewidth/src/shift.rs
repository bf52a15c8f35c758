//! Shifts across the half boundary, bit counts and byte swapping.

use crate::dword::{DoubleWidth, Low};
use crate::int::BaseInt;

impl<B: BaseInt> DoubleWidth<B> {
    /// Shift left by `rhs` reduced modulo `BITS`.
    pub fn wrapping_shl(self, rhs: u32) -> Self {
        let shift = rhs & (Self::BITS - 1);
        if shift == 0 {
            return self;
        }
        if shift >= Self::HALF_BITS {
            return Self::new(
                B::from_magnitude_bits(self.low.wrapping_shl(shift - Self::HALF_BITS)),
                <Low<B> as BaseInt>::ZERO,
            );
        }
        let carried = B::from_magnitude_bits(self.low.wrapping_shr(Self::HALF_BITS - shift));
        Self::new(
            self.high.wrapping_shl(shift) | carried,
            self.low.wrapping_shl(shift),
        )
    }

    /// Shift right by `rhs` reduced modulo `BITS`; arithmetic when signed.
    pub fn wrapping_shr(self, rhs: u32) -> Self {
        let shift = rhs & (Self::BITS - 1);
        if shift == 0 {
            return self;
        }
        if shift >= Self::HALF_BITS {
            return Self::new(
                Self::fill(self.is_negative()).high,
                self.high
                    .wrapping_shr(shift - Self::HALF_BITS)
                    .to_magnitude_bits(),
            );
        }
        let carried = self
            .high
            .to_magnitude_bits()
            .wrapping_shl(Self::HALF_BITS - shift);
        Self::new(
            self.high.wrapping_shr(shift),
            self.low.wrapping_shr(shift) | carried,
        )
    }

    /// Shift left; `rhs >= BITS` gives zero.
    pub fn unbounded_shl(self, rhs: u32) -> Self {
        if rhs >= Self::BITS {
            Self::ZERO
        } else {
            self.wrapping_shl(rhs)
        }
    }

    /// Shift right; `rhs >= BITS` gives zero, or all ones for a negative
    /// value.
    pub fn unbounded_shr(self, rhs: u32) -> Self {
        if rhs >= Self::BITS {
            Self::fill(self.is_negative())
        } else {
            self.wrapping_shr(rhs)
        }
    }

    /// Shift left by a signed amount. A negative amount shifts right, and
    /// amounts past the width saturate to zero or the sign fill.
    ///
    /// ```
    /// use doublewidth::I128;
    ///
    /// let x = I128::from(-4i64);
    /// assert_eq!(x.signed_shl(-1), I128::from(-2i64));
    /// assert_eq!(x.signed_shl(300), I128::ZERO);
    /// ```
    pub fn signed_shl(self, rhs: i64) -> Self {
        let amount = u32::try_from(rhs.unsigned_abs()).unwrap_or(u32::MAX);
        if rhs < 0 {
            self.unbounded_shr(amount)
        } else {
            self.unbounded_shl(amount)
        }
    }

    /// Shift right by a signed amount; the mirror of [`signed_shl`](Self::signed_shl).
    pub fn signed_shr(self, rhs: i64) -> Self {
        let amount = u32::try_from(rhs.unsigned_abs()).unwrap_or(u32::MAX);
        if rhs < 0 {
            self.unbounded_shl(amount)
        } else {
            self.unbounded_shr(amount)
        }
    }

    pub fn leading_zeros(self) -> u32 {
        if self.high == B::ZERO {
            Self::HALF_BITS + self.low.leading_zeros()
        } else {
            self.high.leading_zeros()
        }
    }

    pub fn trailing_zeros(self) -> u32 {
        if self.low == <Low<B> as BaseInt>::ZERO {
            Self::HALF_BITS + self.high.trailing_zeros()
        } else {
            self.low.trailing_zeros()
        }
    }

    #[inline]
    pub fn count_ones(self) -> u32 {
        self.high.count_ones() + self.low.count_ones()
    }

    #[inline]
    pub fn count_zeros(self) -> u32 {
        Self::BITS - self.count_ones()
    }

    /// Reverses the byte order. Each half swaps internally and the halves
    /// trade places.
    pub fn swap_bytes(self) -> Self {
        Self::new(
            B::from_magnitude_bits(self.low.swap_bytes()),
            self.high.to_magnitude_bits().swap_bytes(),
        )
    }
}
