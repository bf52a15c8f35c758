//! Carry-propagating addition and subtraction.

use crate::dword::DoubleWidth;
use crate::error::{trap, DoubleWidthError};
use crate::int::{bit, BaseInt};

impl<B: BaseInt> DoubleWidth<B> {
    /// Adds the low halves, then folds their carry into the sum of the high
    /// halves. The result overflowed when exactly one of the two high-half
    /// additions did.
    ///
    /// ```
    /// use doublewidth::U128;
    ///
    /// assert_eq!(U128::MAX.overflowing_add(U128::ONE), (U128::ZERO, true));
    /// ```
    pub fn overflowing_add(self, rhs: Self) -> (Self, bool) {
        let (low, carry) = self.low.overflowing_add(rhs.low);
        let (high, overflow) = self.high.overflowing_add(rhs.high);
        let (high, carry_overflow) = high.overflowing_add(bit(carry));
        (Self::new(high, low), overflow != carry_overflow)
    }

    pub fn overflowing_sub(self, rhs: Self) -> (Self, bool) {
        let (low, borrow) = self.low.overflowing_sub(rhs.low);
        let (high, overflow) = self.high.overflowing_sub(rhs.high);
        let (high, borrow_overflow) = high.overflowing_sub(bit(borrow));
        (Self::new(high, low), overflow != borrow_overflow)
    }

    #[inline]
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        match self.overflowing_add(rhs) {
            (sum, false) => Some(sum),
            _ => None,
        }
    }

    #[inline]
    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        match self.overflowing_sub(rhs) {
            (difference, false) => Some(difference),
            _ => None,
        }
    }

    #[inline]
    pub fn wrapping_add(self, rhs: Self) -> Self {
        self.overflowing_add(rhs).0
    }

    #[inline]
    pub fn wrapping_sub(self, rhs: Self) -> Self {
        self.overflowing_sub(rhs).0
    }

    /// Two's-complement negation, for signed and unsigned composites alike.
    #[inline]
    pub fn wrapping_neg(self) -> Self {
        Self::ZERO.wrapping_sub(self)
    }

    pub fn saturating_add(self, rhs: Self) -> Self {
        match self.overflowing_add(rhs) {
            (sum, false) => sum,
            _ if rhs.is_negative() => Self::MIN,
            _ => Self::MAX,
        }
    }

    pub fn saturating_sub(self, rhs: Self) -> Self {
        match self.overflowing_sub(rhs) {
            (difference, false) => difference,
            _ if rhs.is_negative() => Self::MAX,
            _ => Self::MIN,
        }
    }

    pub fn try_add(self, rhs: Self) -> Result<Self, DoubleWidthError> {
        self.checked_add(rhs).ok_or(DoubleWidthError::ADD)
    }

    pub fn try_sub(self, rhs: Self) -> Result<Self, DoubleWidthError> {
        self.checked_sub(rhs).ok_or(DoubleWidthError::SUB)
    }

    /// Trapping addition behind the `+` operator.
    #[track_caller]
    pub(crate) fn strict_add(self, rhs: Self) -> Self {
        self.try_add(rhs).unwrap_or_else(|err| trap(err))
    }

    #[track_caller]
    pub(crate) fn strict_sub(self, rhs: Self) -> Self {
        self.try_sub(rhs).unwrap_or_else(|err| trap(err))
    }
}
