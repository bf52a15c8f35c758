//! Radix formatting and parsing.
//!
//! Both directions are generic over [`BaseInt`] and use nothing but its
//! arithmetic: formatting divides the magnitude by the radix until it is
//! zero, parsing multiplies and adds with overflow checks. Non-decimal
//! formats print the two's-complement bit pattern, as the native integer
//! formats do.

use std::fmt;
use std::str::FromStr;

use crate::dword::DoubleWidth;
use crate::error::DoubleWidthError;
use crate::int::{BaseInt, UnsignedInt};

const DIGITS_LOWER: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const DIGITS_UPPER: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Digits of an unsigned value, most significant first.
fn unsigned_digits<M: UnsignedInt>(mut value: M, radix: u32, upper: bool) -> String {
    let table = if upper { DIGITS_UPPER } else { DIGITS_LOWER };
    let radix = M::truncating_from_u64(u64::from(radix));
    let mut digits = Vec::new();
    loop {
        let (quotient, remainder) = value.div_rem(radix);
        digits.push(table[remainder.word(0) as usize]);
        value = quotient;
        if value == M::ZERO {
            break;
        }
    }
    digits.reverse();
    // Every byte comes from the ASCII digit tables.
    digits.into_iter().map(char::from).collect()
}

fn check_radix(radix: u32) {
    assert!(
        (2..=36).contains(&radix),
        "radix must be in the range 2..=36, got {radix}"
    );
}

/// Formats any integer in `radix`, with a leading `-` for negative values.
///
/// # Panics
///
/// If `radix` is outside `2..=36`.
pub fn to_str_radix<T: BaseInt>(value: T, radix: u32) -> String {
    check_radix(radix);
    let digits = unsigned_digits(value.magnitude(), radix, false);
    if value.is_negative() {
        format!("-{digits}")
    } else {
        digits
    }
}

/// Parses an optionally signed integer in `radix`.
///
/// Digits accumulate in the direction of the sign, so `MIN` parses even
/// though its magnitude does not fit.
///
/// # Panics
///
/// If `radix` is outside `2..=36`.
pub fn from_str_radix<T: BaseInt>(src: &str, radix: u32) -> Result<T, DoubleWidthError> {
    check_radix(radix);
    if src.is_empty() {
        return Err(DoubleWidthError::Empty);
    }
    let (negative, digits) = match src.as_bytes()[0] {
        b'-' => (true, &src[1..]),
        b'+' => (false, &src[1..]),
        _ => (false, src),
    };
    if digits.is_empty() || (negative && !T::SIGNED) {
        return Err(DoubleWidthError::InvalidDigit);
    }

    let overflow = DoubleWidthError::NotRepresentable { bits: T::BITS };
    let base = T::truncating_from_u64(u64::from(radix));
    let mut value = T::ZERO;
    for c in digits.chars() {
        let digit = c.to_digit(radix).ok_or(DoubleWidthError::InvalidDigit)?;
        let digit = T::truncating_from_u64(u64::from(digit));
        value = value.checked_mul(base).ok_or(overflow)?;
        value = if negative {
            value.checked_sub(digit)
        } else {
            value.checked_add(digit)
        }
        .ok_or(overflow)?;
    }
    Ok(value)
}

impl<B: BaseInt> DoubleWidth<B> {
    /// ```
    /// use doublewidth::I128;
    ///
    /// assert_eq!(I128::from(-255i64).to_str_radix(16), "-ff");
    /// ```
    pub fn to_str_radix(self, radix: u32) -> String {
        to_str_radix(self, radix)
    }

    /// ```
    /// use doublewidth::{DoubleWidth, I256};
    ///
    /// let x = DoubleWidth::<i8>::from_str_radix("-1111", 10).unwrap();
    /// assert_eq!(x.to_string(), "-1111");
    /// assert!(I256::from_str_radix("zz", 10).is_err());
    /// ```
    pub fn from_str_radix(src: &str, radix: u32) -> Result<Self, DoubleWidthError> {
        from_str_radix(src, radix)
    }
}

impl<B: BaseInt> FromStr for DoubleWidth<B> {
    type Err = DoubleWidthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        from_str_radix(s, 10)
    }
}

impl<B: BaseInt> fmt::Display for DoubleWidth<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = unsigned_digits(self.magnitude(), 10, false);
        f.pad_integral(!self.is_negative(), "", &digits)
    }
}

macro_rules! impl_bit_pattern_fmt {
    ($($trait:ident => $radix:expr, $prefix:expr, $upper:expr;)*) => {$(
        impl<B: BaseInt> fmt::$trait for DoubleWidth<B> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let digits = unsigned_digits(self.to_magnitude_bits(), $radix, $upper);
                f.pad_integral(true, $prefix, &digits)
            }
        }
    )*};
}

impl_bit_pattern_fmt! {
    LowerHex => 16, "0x", false;
    UpperHex => 16, "0x", true;
    Octal => 8, "0o", false;
    Binary => 2, "0b", false;
}
