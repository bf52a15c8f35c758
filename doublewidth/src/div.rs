//! Long division over two-, three- and four-word magnitudes.
//!
//! Everything below `div_rem_unchecked` works on unsigned magnitudes and
//! traps on a zero divisor. Signs are applied afterwards: the quotient is
//! negative when the operand signs differ, the remainder takes the sign of
//! the dividend.

use crate::dword::{DoubleWidth, Low};
use crate::error::{trap, DoubleWidthError};
use crate::int::{bit, BaseInt, UnsignedInt};
use crate::mul::negate_wide;

/// A three-word magnitude, most significant word first.
type Triple<U> = (U, U, U);

fn add_triple<U: UnsignedInt>(a: Triple<U>, b: Triple<U>) -> Triple<U> {
    let (low, carry) = a.2.overflowing_add(b.2);
    let (mid, mid_carry) = a.1.overflowing_add(b.1);
    let (mid, carry_carry) = mid.overflowing_add(bit(carry));
    let high = a.0.wrapping_add(b.0).wrapping_add(bit(mid_carry || carry_carry));
    (high, mid, low)
}

fn sub_triple<U: UnsignedInt>(a: Triple<U>, b: Triple<U>) -> Triple<U> {
    let (low, borrow) = a.2.overflowing_sub(b.2);
    let (mid, mid_borrow) = a.1.overflowing_sub(b.1);
    let (mid, borrow_borrow) = mid.overflowing_sub(bit(borrow));
    let high = a.0.wrapping_sub(b.0).wrapping_sub(bit(mid_borrow || borrow_borrow));
    (high, mid, low)
}

/// Shifts a two-word value left by `shift < W`, keeping the bits that
/// spill into a third word.
fn widening_shl<U: UnsignedInt>(value: DoubleWidth<U>, shift: u32) -> Triple<U> {
    let back = U::BITS - shift;
    (
        value.high.unbounded_shr(back),
        value.high.wrapping_shl(shift) | value.low.unbounded_shr(back),
        value.low.wrapping_shl(shift),
    )
}

/// Divides a three-word magnitude by a normalized two-word divisor.
///
/// Requires the divisor's top bit set and the top two dividend words below
/// the divisor, so the quotient fits one word. The estimate from the top
/// words is at most two too large.
fn div_rem_triple<U: UnsignedInt>(
    dividend: Triple<U>,
    divisor: DoubleWidth<U>,
) -> (U, DoubleWidth<U>) {
    debug_assert_eq!(divisor.leading_zeros(), 0);
    debug_assert!(DoubleWidth::new(dividend.0, dividend.1) < divisor);

    let mut quotient = if dividend.0 == divisor.high {
        U::MAX
    } else {
        U::full_div_rem(dividend.0, dividend.1, divisor.high).0
    };

    let (by_low_high, by_low_low) = quotient.full_mul(divisor.low);
    let (by_high_high, by_high_low) = quotient.full_mul(divisor.high);
    let (mid, carry) = by_low_high.overflowing_add(by_high_low);
    let product = (by_high_high.wrapping_add(bit(carry)), mid, by_low_low);

    let mut remainder = dividend;
    while remainder < product {
        quotient = quotient.wrapping_sub(U::ONE);
        remainder = add_triple(remainder, (U::ZERO, divisor.high, divisor.low));
    }
    let (top, high, low) = sub_triple(remainder, product);
    debug_assert!(top == U::ZERO);
    (quotient, DoubleWidth::new(high, low))
}

impl<U: UnsignedInt> DoubleWidth<U> {
    /// Two-word by two-word division of magnitudes.
    pub(crate) fn div_rem_magnitude(self, rhs: Self) -> (Self, Self) {
        if rhs.is_zero() {
            trap(DoubleWidthError::DivisionByZero);
        }
        if rhs >= self {
            return if rhs == self {
                (Self::ONE, Self::ZERO)
            } else {
                (Self::ZERO, self)
            };
        }

        if self.high == U::ZERO {
            let (quotient, remainder) = self.low.div_rem(rhs.low);
            return (Self::new(U::ZERO, quotient), Self::new(U::ZERO, remainder));
        }

        if rhs.high == U::ZERO {
            let (high, remainder) = self.high.div_rem(rhs.low);
            let (low, remainder) = U::full_div_rem(remainder, self.low, rhs.low);
            return (Self::new(high, low), Self::new(U::ZERO, remainder));
        }

        let shift = rhs.leading_zeros();
        let divisor = rhs.wrapping_shl(shift);
        let (quotient, remainder) = div_rem_triple(widening_shl(self, shift), divisor);
        (Self::new(U::ZERO, quotient), remainder.wrapping_shr(shift))
    }

    /// Divides the four-word magnitude `high:low` by a two-word divisor.
    ///
    /// # Panics
    ///
    /// If `divisor` is zero, or `high >= divisor` so the quotient would need
    /// more than two words.
    pub(crate) fn div_rem_wide_magnitude(high: Self, low: Self, divisor: Self) -> (Self, Self) {
        if divisor.is_zero() {
            trap(DoubleWidthError::DivisionByZero);
        }
        if high >= divisor {
            trap(DoubleWidthError::DIV);
        }

        if divisor.high == U::ZERO {
            let mut quotient = [U::ZERO; 4];
            let mut remainder = U::ZERO;
            for (digit, word) in quotient
                .iter_mut()
                .zip([high.high, high.low, low.high, low.low])
            {
                let (q, r) = U::full_div_rem(remainder, word, divisor.low);
                *digit = q;
                remainder = r;
            }
            debug_assert!(quotient[0] == U::ZERO && quotient[1] == U::ZERO);
            return (
                Self::new(quotient[2], quotient[3]),
                Self::new(U::ZERO, remainder),
            );
        }

        // `high < divisor`, so shifting by the divisor's leading zeros keeps
        // the dividend within four words.
        let shift = divisor.leading_zeros();
        let divisor = divisor.wrapping_shl(shift);
        let high = high.wrapping_shl(shift) | low.unbounded_shr(Self::BITS - shift);
        let low = low.wrapping_shl(shift);

        let top = Self::new(high.low, low.high);
        let (quotient_high, remainder) = if high.high == U::ZERO && top < divisor {
            (U::ZERO, top)
        } else {
            div_rem_triple((high.high, high.low, low.high), divisor)
        };
        let (quotient_low, remainder) =
            div_rem_triple((remainder.high, remainder.low, low.low), divisor);

        (
            Self::new(quotient_high, quotient_low),
            remainder.wrapping_shr(shift),
        )
    }
}

impl<B: BaseInt> DoubleWidth<B> {
    /// `MIN / -1`, the one quotient that does not fit.
    #[inline]
    fn is_min_over_negative_one(self, rhs: Self) -> bool {
        Self::SIGNED && self == Self::MIN && rhs == !Self::ZERO
    }

    /// Truncating division on magnitudes with the signs restored. The caller
    /// rules out a zero divisor and `MIN / -1`.
    fn div_rem_unchecked(self, rhs: Self) -> (Self, Self) {
        let (quotient, remainder) = self.magnitude().div_rem_magnitude(rhs.magnitude());
        let quotient = Self::from_magnitude_bits(quotient);
        let remainder = Self::from_magnitude_bits(remainder);
        let quotient = if self.is_negative() != rhs.is_negative() {
            quotient.wrapping_neg()
        } else {
            quotient
        };
        let remainder = if self.is_negative() {
            remainder.wrapping_neg()
        } else {
            remainder
        };
        (quotient, remainder)
    }

    /// Quotient and remainder, truncating toward zero.
    ///
    /// # Panics
    ///
    /// On a zero divisor or `MIN / -1`.
    #[track_caller]
    pub fn div_rem(self, rhs: Self) -> (Self, Self) {
        if rhs.is_zero() {
            trap(DoubleWidthError::DivisionByZero);
        }
        if self.is_min_over_negative_one(rhs) {
            trap(DoubleWidthError::DIV);
        }
        self.div_rem_unchecked(rhs)
    }

    /// Returns `(self, true)` for a zero divisor and for `MIN / -1`.
    pub fn overflowing_div(self, rhs: Self) -> (Self, bool) {
        if rhs.is_zero() || self.is_min_over_negative_one(rhs) {
            return (self, true);
        }
        (self.div_rem_unchecked(rhs).0, false)
    }

    /// Returns `(self, true)` for a zero divisor and for `MIN % -1`.
    pub fn overflowing_rem(self, rhs: Self) -> (Self, bool) {
        if rhs.is_zero() || self.is_min_over_negative_one(rhs) {
            return (self, true);
        }
        (self.div_rem_unchecked(rhs).1, false)
    }

    #[inline]
    pub fn checked_div(self, rhs: Self) -> Option<Self> {
        match self.overflowing_div(rhs) {
            (quotient, false) => Some(quotient),
            _ => None,
        }
    }

    #[inline]
    pub fn checked_rem(self, rhs: Self) -> Option<Self> {
        match self.overflowing_rem(rhs) {
            (remainder, false) => Some(remainder),
            _ => None,
        }
    }

    /// `MIN / -1` wraps to `MIN`. Panics on a zero divisor.
    #[track_caller]
    pub fn wrapping_div(self, rhs: Self) -> Self {
        if self.is_min_over_negative_one(rhs) {
            return self;
        }
        self.div_rem(rhs).0
    }

    /// `MIN % -1` is zero. Panics on a zero divisor.
    #[track_caller]
    pub fn wrapping_rem(self, rhs: Self) -> Self {
        if self.is_min_over_negative_one(rhs) {
            return Self::ZERO;
        }
        self.rem_strict(rhs)
    }

    pub fn try_div(self, rhs: Self) -> Result<Self, DoubleWidthError> {
        if rhs.is_zero() {
            return Err(DoubleWidthError::DivisionByZero);
        }
        self.checked_div(rhs).ok_or(DoubleWidthError::DIV)
    }

    pub fn try_rem(self, rhs: Self) -> Result<Self, DoubleWidthError> {
        if rhs.is_zero() {
            return Err(DoubleWidthError::RemainderByZero);
        }
        self.checked_rem(rhs).ok_or(DoubleWidthError::REM)
    }

    /// Whether `rhs` divides `self`. Every value is a multiple of `-1`;
    /// only zero is a multiple of zero.
    pub fn is_multiple_of(self, rhs: Self) -> bool {
        if rhs.is_zero() {
            return self.is_zero();
        }
        if Self::SIGNED && rhs == !Self::ZERO {
            return true;
        }
        self.div_rem_unchecked(rhs).1.is_zero()
    }

    #[track_caller]
    pub(crate) fn div_strict(self, rhs: Self) -> Self {
        self.try_div(rhs).unwrap_or_else(|err| trap(err))
    }

    #[track_caller]
    pub(crate) fn rem_strict(self, rhs: Self) -> Self {
        self.try_rem(rhs).unwrap_or_else(|err| trap(err))
    }

    /// Divides the double-width value `high:low` by `divisor`.
    ///
    /// The quotient and remainder follow truncating division. This is the
    /// inverse of [`full_mul`](Self::full_mul).
    ///
    /// # Panics
    ///
    /// If `divisor` is zero or the quotient does not fit in `Self`.
    ///
    /// ```
    /// use doublewidth::I128;
    ///
    /// let a = I128::from(-7i64);
    /// let b = I128::MAX;
    /// let (high, low) = a.full_mul(b);
    /// assert_eq!(I128::full_div_rem(high, low, b), (a, I128::ZERO));
    /// ```
    #[track_caller]
    pub fn full_div_rem(high: Self, low: DoubleWidth<Low<B>>, divisor: Self) -> (Self, Self) {
        let negative = high.is_negative();
        let (high_bits, low_bits) = if negative {
            negate_wide(high.to_magnitude_bits(), low)
        } else {
            (high.to_magnitude_bits(), low)
        };
        let (quotient, remainder) = DoubleWidth::<Low<B>>::div_rem_wide_magnitude(
            high_bits,
            low_bits,
            divisor.magnitude(),
        );
        let quotient_negative = negative != divisor.is_negative();
        let quotient = Self::with_sign(quotient, quotient_negative)
            .unwrap_or_else(|| trap(DoubleWidthError::DIV));
        let remainder = Self::with_sign(remainder, negative)
            .unwrap_or_else(|| trap(DoubleWidthError::DIV));
        (quotient, remainder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dword::{I128, I1024, U128, U256};

    type U16 = DoubleWidth<u8>;
    type I16 = DoubleWidth<i8>;

    fn i16_pair(x: i16) -> I16 {
        DoubleWidth::new((x >> 8) as i8, x as u8)
    }

    fn u16_pair(x: u16) -> U16 {
        DoubleWidth::new((x >> 8) as u8, x as u8)
    }

    fn u128_pair(x: u128) -> U128 {
        DoubleWidth::new((x >> 64) as u64, x as u64)
    }

    fn i128_pair(x: i128) -> I128 {
        DoubleWidth::new((x >> 64) as i64, x as u64)
    }

    #[test]
    fn test_small_scenario() {
        assert_eq!(u16_pair(1000).div_rem(u16_pair(3)), (u16_pair(333), u16_pair(1)));
        assert_eq!(i16_pair(-1111) % i16_pair(3), i16_pair(-1));
        assert_eq!(i16_pair(-1111) / i16_pair(3), i16_pair(-370));
        assert_eq!(i16_pair(1111) % i16_pair(-3), i16_pair(1));
    }

    #[test]
    fn test_unsigned_div_rem_matches_native() {
        for a in (0..=u16::MAX).step_by(97) {
            for b in (1..=u16::MAX).step_by(331) {
                assert_eq!(
                    u16_pair(a).div_rem(u16_pair(b)),
                    (u16_pair(a / b), u16_pair(a % b)),
                    "{a} / {b}"
                );
            }
        }
    }

    #[test]
    fn test_signed_div_rem_matches_native() {
        let samples = [i16::MIN, -32767, -1111, -257, -256, -3, -1, 1, 2, 3, 255, 256, 1000, i16::MAX];
        for &a in &samples {
            for &b in &samples {
                if a == i16::MIN && b == -1 {
                    continue;
                }
                assert_eq!(
                    i16_pair(a).div_rem(i16_pair(b)),
                    (i16_pair(a / b), i16_pair(a % b)),
                    "{a} / {b}"
                );
            }
        }
    }

    #[test]
    fn test_u128_division_exercises_normalization() {
        let samples = [
            1u128,
            3,
            u64::MAX as u128,
            (1 << 64) + 1,
            (1 << 127) + 12345,
            0x1234_5678_9abc_def0_0fed_cba9_8765_4321,
            u128::MAX - 1,
            u128::MAX,
        ];
        for &a in &samples {
            for &b in &samples {
                assert_eq!(
                    u128_pair(a).div_rem(u128_pair(b)),
                    (u128_pair(a / b), u128_pair(a % b)),
                    "{a} / {b}"
                );
            }
        }
    }

    #[test]
    fn test_i128_division_matches_native() {
        let samples = [i128::MIN, i128::MIN + 1, -(1 << 100) - 7, -3, -1, 1, 7, 1 << 64, i128::MAX];
        for &a in &samples {
            for &b in &samples {
                let expected = (a.overflowing_div(b).0, a.overflowing_rem(b).0);
                if a == i128::MIN && b == -1 {
                    assert_eq!(i128_pair(a).overflowing_div(i128_pair(b)), (I128::MIN, true));
                    continue;
                }
                assert_eq!(
                    i128_pair(a).div_rem(i128_pair(b)),
                    (i128_pair(expected.0), i128_pair(expected.1)),
                    "{a} / {b}"
                );
            }
        }
    }

    #[test]
    fn test_triple_estimate_correction() {
        // 0x7f00 / 0x80 estimates 254; the true quotient is 252.
        let divisor = U16::new(0x80, 0xff);
        let (quotient, remainder) = div_rem_triple((0x7f, 0x00, 0x00), divisor);
        assert_eq!(quotient as u32, 0x7f_0000u32 / 0x80ff);
        assert_eq!(quotient, 252);
        assert_eq!(remainder, u16_pair((0x7f_0000u32 % 0x80ff) as u16));

        // Equal top words estimate the maximum digit.
        let (quotient, remainder) = div_rem_triple((0x80, 0x00, 0x00), divisor);
        assert_eq!(quotient as u32, 0x80_0000u32 / 0x80ff);
        assert_eq!(remainder, u16_pair((0x80_0000u32 % 0x80ff) as u16));
    }

    #[test]
    fn test_wide_division_matches_native() {
        let divisors = [1u16, 3, 0xff, 0x100, 0x1234, 0x8000, 0xffff];
        let dividends = [0u32, 1, 0xffff, 0x1_0000, 0x00ff_ffff, 0x1234_5678, 0xfffe_0001];
        for &d in &divisors {
            for &n in &dividends {
                if n >> 16 >= d as u32 {
                    continue;
                }
                let (q, r) = U16::full_div_rem(
                    u16_pair((n >> 16) as u16),
                    u16_pair(n as u16),
                    u16_pair(d),
                );
                assert_eq!(q, u16_pair((n / d as u32) as u16), "{n} / {d}");
                assert_eq!(r, u16_pair((n % d as u32) as u16), "{n} / {d}");
            }
        }
    }

    #[test]
    fn test_signed_full_div_rem_inverts_full_mul() {
        let samples = [i16::MIN, -1111, -1, 1, 3, 1000, i16::MAX];
        for &a in &samples {
            for &b in &samples {
                let (high, low) = i16_pair(a).full_mul(i16_pair(b));
                assert_eq!(
                    I16::full_div_rem(high, low, i16_pair(b)),
                    (i16_pair(a), I16::ZERO),
                    "{a} * {b}"
                );
            }
        }
        let (high, low) = i16_pair(-1111).full_mul(i16_pair(1000));
        let (quotient, remainder) = I16::full_div_rem(high, low.wrapping_sub(U16::ONE), i16_pair(1000));
        assert_eq!(quotient, i16_pair(-1111));
        assert_eq!(remainder, i16_pair(-1));
    }

    #[test]
    #[should_panic(expected = "attempt to divide with overflow")]
    fn test_full_div_rem_quotient_overflow_traps() {
        U16::full_div_rem(u16_pair(5), U16::ZERO, u16_pair(5));
    }

    #[test]
    fn test_reporting_forms() {
        assert_eq!(I16::MIN.overflowing_div(i16_pair(-1)), (I16::MIN, true));
        assert_eq!(I16::MIN.overflowing_rem(i16_pair(-1)), (I16::MIN, true));
        assert_eq!(i16_pair(7).overflowing_div(I16::ZERO), (i16_pair(7), true));
        assert_eq!(i16_pair(7).overflowing_rem(I16::ZERO), (i16_pair(7), true));
        assert_eq!(I16::MIN.checked_div(i16_pair(-1)), None);
        assert_eq!(U16::MAX.checked_rem(U16::ZERO), None);
        assert_eq!(I16::MIN.wrapping_div(i16_pair(-1)), I16::MIN);
        assert_eq!(I16::MIN.wrapping_rem(i16_pair(-1)), I16::ZERO);
        assert_eq!(U16::ONE.try_div(U16::ZERO), Err(DoubleWidthError::DivisionByZero));
        assert_eq!(U16::ONE.try_rem(U16::ZERO), Err(DoubleWidthError::RemainderByZero));
        assert_eq!(I16::MIN.try_rem(i16_pair(-1)), Err(DoubleWidthError::REM));
    }

    #[test]
    fn test_wide_reporting_forms() {
        let minus_one = !I1024::ZERO;
        assert_eq!(I1024::MIN.overflowing_div(minus_one), (I1024::MIN, true));
        assert_eq!(I1024::MIN.checked_div(minus_one), None);
        assert_eq!(U256::MAX.overflowing_rem(U256::ZERO), (U256::MAX, true));
    }

    #[test]
    fn test_is_multiple_of() {
        assert!(U16::ZERO.is_multiple_of(U16::ZERO));
        assert!(!U16::ONE.is_multiple_of(U16::ZERO));
        assert!(u16_pair(21).is_multiple_of(u16_pair(7)));
        assert!(!u16_pair(22).is_multiple_of(u16_pair(7)));
        assert!(I16::MIN.is_multiple_of(i16_pair(-1)));
        assert!(i16_pair(-21).is_multiple_of(i16_pair(7)));
        let nested = DoubleWidth::<U16>::new(U16::ZERO, U16::ZERO);
        assert!(nested.is_multiple_of(DoubleWidth::ZERO));
    }

    #[test]
    #[should_panic(expected = "attempt to divide by zero")]
    fn test_div_by_zero_traps() {
        let _ = U256::ONE / U256::ZERO;
    }

    #[test]
    #[should_panic(expected = "attempt to calculate the remainder with a divisor of zero")]
    fn test_rem_by_zero_traps() {
        let _ = I128::ONE % I128::ZERO;
    }

    #[test]
    #[should_panic(expected = "attempt to divide with overflow")]
    fn test_min_over_negative_one_traps() {
        let _ = I1024::MIN / !I1024::ZERO;
    }
}
