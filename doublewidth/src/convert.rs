//! Conversions to and from other integers and `f64`, and the word view.

use std::iter::FusedIterator;

use crate::dword::{DoubleWidth, Low};
use crate::error::{trap, DoubleWidthError};
use crate::int::{BaseInt, WORD_BITS};

impl<B: BaseInt> DoubleWidth<B> {
    /// Converts any integer if the value fits.
    ///
    /// A source that fits in the low half is sign- or zero-extended.
    /// Otherwise it is split: the low `W` bits become `low`, and the rest,
    /// shifted down, must fit in `high`.
    ///
    /// ```
    /// use doublewidth::{DoubleWidth, U256};
    ///
    /// assert_eq!(DoubleWidth::<i8>::checked_from_int(-129i32).map(|x| x.to_string()), Some("-129".into()));
    /// assert_eq!(DoubleWidth::<u8>::checked_from_int(65536u32), None);
    /// assert_eq!(U256::checked_from_int(-1i8), None);
    /// ```
    pub fn checked_from_int<T: BaseInt>(source: T) -> Option<Self> {
        if source.is_negative() {
            if !Self::SIGNED {
                return None;
            }
            let high = B::exactly_from(source.unbounded_shr(Self::HALF_BITS))?;
            return Some(Self::new(high, <Low<B> as BaseInt>::truncating_from(source)));
        }
        if let Some(low) = <Low<B> as BaseInt>::exactly_from(source) {
            return Some(Self::new(B::ZERO, low));
        }
        let high = B::exactly_from(source.unbounded_shr(Self::HALF_BITS))?;
        Some(Self::new(high, <Low<B> as BaseInt>::truncating_from(source)))
    }

    /// Keeps the low `BITS` bits of the source's two's-complement pattern.
    pub fn truncating_from_int<T: BaseInt>(source: T) -> Self {
        Self::new(
            B::truncating_from(source.unbounded_shr(Self::HALF_BITS)),
            <Low<B> as BaseInt>::truncating_from(source),
        )
    }

    pub fn try_from_int<T: BaseInt>(source: T) -> Result<Self, DoubleWidthError> {
        Self::checked_from_int(source).ok_or(DoubleWidthError::NotRepresentable { bits: Self::BITS })
    }

    /// # Panics
    ///
    /// If `source` is out of range.
    #[track_caller]
    pub fn from_int<T: BaseInt>(source: T) -> Self {
        Self::try_from_int(source).unwrap_or_else(|err| trap(err))
    }

    /// Converts into another integer type if the value fits.
    #[inline]
    pub fn checked_cast<T: BaseInt>(self) -> Option<T> {
        T::exactly_from(self)
    }

    #[inline]
    pub fn truncating_cast<T: BaseInt>(self) -> T {
        T::truncating_from(self)
    }

    /// Nearest `f64`, ties to even, with a single rounding step.
    ///
    /// The top 64 significant bits of the magnitude are converted at once.
    /// Any nonzero bits below them are folded into bit 0, which lies under
    /// the rounding point and so only decides otherwise exact ties.
    pub fn to_f64(self) -> f64 {
        let magnitude = self.magnitude();
        let significant = Self::BITS - magnitude.leading_zeros();
        let value = if significant <= WORD_BITS {
            magnitude.word(0) as f64
        } else {
            let shift = significant - WORD_BITS;
            let top = magnitude.unbounded_shr(shift).word(0);
            let sticky = u64::from(magnitude.trailing_zeros() < shift);
            (top | sticky) as f64 * 2f64.powi(shift as i32)
        };
        if self.is_negative() {
            -value
        } else {
            value
        }
    }

    /// Truncates toward zero. `None` for NaN, infinities, negative values
    /// of an unsigned type, and anything out of range.
    pub fn checked_from_f64(value: f64) -> Option<Self> {
        let truncated = value.trunc();
        if !truncated.is_finite() {
            return None;
        }
        let negative = truncated < 0.0;
        if negative && !Self::SIGNED {
            return None;
        }
        let magnitude = truncated.abs();
        let half = 2f64.powi(Self::HALF_BITS as i32);
        let high = (magnitude / half).floor();
        let low = magnitude - high * half;
        let magnitude = DoubleWidth::new(
            <Low<B> as BaseInt>::checked_from_f64(high)?,
            <Low<B> as BaseInt>::checked_from_f64(low)?,
        );
        Self::with_sign(magnitude, negative)
    }

    pub fn try_from_f64(value: f64) -> Result<Self, DoubleWidthError> {
        if !value.is_finite() {
            return Err(DoubleWidthError::NonFinite);
        }
        Self::checked_from_f64(value).ok_or(DoubleWidthError::NotRepresentable { bits: Self::BITS })
    }

    /// # Panics
    ///
    /// If `value` is not finite or out of range.
    #[track_caller]
    pub fn from_f64(value: f64) -> Self {
        Self::try_from_f64(value).unwrap_or_else(|err| trap(err))
    }

    /// The `index`-th 64-bit word of the sign-extended bit pattern, least
    /// significant first.
    pub fn word(self, index: usize) -> u64 {
        if Self::HALF_BITS >= WORD_BITS {
            let low_words = (Self::HALF_BITS / WORD_BITS) as usize;
            if index < low_words {
                self.low.word(index)
            } else {
                self.high.word(index - low_words)
            }
        } else if index == 0 {
            let mask = (1u64 << Self::HALF_BITS) - 1;
            (self.low.word(0) & mask) | (self.high.word(0) << Self::HALF_BITS)
        } else {
            self.high.word(index)
        }
    }

    /// The bit pattern as 64-bit words, least significant first. Values
    /// narrower than a word yield one sign-extended word.
    ///
    /// # Panics
    ///
    /// If the base width neither divides 64 nor is a multiple of it.
    ///
    /// ```
    /// use doublewidth::U1024;
    ///
    /// assert_eq!(U1024::MAX.words().len(), 16);
    /// assert!(U1024::MAX.words().all(|w| w == u64::MAX));
    /// ```
    #[track_caller]
    pub fn words(self) -> Words<B> {
        let half = Self::HALF_BITS;
        if half % WORD_BITS != 0 && WORD_BITS % half != 0 {
            trap(DoubleWidthError::UnsupportedWordView { half_bits: half });
        }
        Words {
            value: self,
            front: 0,
            back: (Self::BITS / WORD_BITS).max(1) as usize,
        }
    }
}

/// Iterator over the 64-bit words of a [`DoubleWidth`], returned by
/// [`DoubleWidth::words`].
#[derive(Clone, Debug)]
pub struct Words<B: BaseInt> {
    value: DoubleWidth<B>,
    front: usize,
    back: usize,
}

impl<B: BaseInt> Iterator for Words<B> {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.front == self.back {
            return None;
        }
        let word = self.value.word(self.front);
        self.front += 1;
        Some(word)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }
}

impl<B: BaseInt> DoubleEndedIterator for Words<B> {
    fn next_back(&mut self) -> Option<u64> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(self.value.word(self.back))
    }
}

impl<B: BaseInt> ExactSizeIterator for Words<B> {}

impl<B: BaseInt> FusedIterator for Words<B> {}
