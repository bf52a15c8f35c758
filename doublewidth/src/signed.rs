//! Operations that exist only when the base is signed.

use std::ops::Neg;

use crate::dword::{DoubleWidth, Low};
use crate::error::{trap, DoubleWidthError};
use crate::int::SignedInt;

impl<B: SignedInt> DoubleWidth<B> {
    /// Negation; only `MIN` overflows, and it negates to itself.
    pub fn overflowing_neg(self) -> (Self, bool) {
        Self::ZERO.overflowing_sub(self)
    }

    #[inline]
    pub fn checked_neg(self) -> Option<Self> {
        match self.overflowing_neg() {
            (negated, false) => Some(negated),
            _ => None,
        }
    }

    /// # Panics
    ///
    /// On `MIN`, whose absolute value does not fit.
    #[track_caller]
    pub fn abs(self) -> Self {
        self.checked_abs().unwrap_or_else(|| trap(DoubleWidthError::NEG))
    }

    pub fn checked_abs(self) -> Option<Self> {
        if self.is_negative() {
            self.checked_neg()
        } else {
            Some(self)
        }
    }

    /// Absolute value in the unsigned composite; total.
    #[inline]
    pub fn unsigned_abs(self) -> DoubleWidth<Low<B>> {
        self.magnitude()
    }

    /// `-1`, `0` or `1`.
    pub fn signum(self) -> Self {
        if self.is_negative() {
            !Self::ZERO
        } else if self.is_zero() {
            Self::ZERO
        } else {
            Self::ONE
        }
    }

    #[inline]
    pub fn is_positive(self) -> bool {
        !self.is_negative() && !self.is_zero()
    }
}

impl<B: SignedInt> Neg for DoubleWidth<B> {
    type Output = Self;

    #[track_caller]
    fn neg(self) -> Self {
        self.checked_neg().unwrap_or_else(|| trap(DoubleWidthError::NEG))
    }
}
