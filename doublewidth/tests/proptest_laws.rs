//! Property-based tests for the arithmetic laws every width must satisfy.
//!
//! The 128-bit composites are checked directly against native `u128` and
//! `i128`; the wider ones against algebraic identities.

use doublewidth::{DoubleWidth, I128, I256, U128, U256};
use proptest::prelude::*;

// ============================================================================
// Helpers
// ============================================================================

fn u128_of(x: u128) -> U128 {
    U128::new((x >> 64) as u64, x as u64)
}

fn i128_of(x: i128) -> I128 {
    I128::new((x >> 64) as i64, x as u64)
}

/// Strategy: any 256-bit unsigned value, with a bias toward short values
/// so the single-word division paths get exercised.
fn u256() -> impl Strategy<Value = U256> {
    prop_oneof![
        any::<[u64; 4]>().prop_map(|w| U256::new(U128::new(w[3], w[2]), U128::new(w[1], w[0]))),
        any::<u64>().prop_map(U256::from_int),
        any::<[u64; 3]>().prop_map(|w| U256::new(U128::new(0, w[2]), U128::new(w[1], w[0]))),
    ]
}

fn i256() -> impl Strategy<Value = I256> {
    u256().prop_map(I256::from_magnitude_bits)
}

fn nonzero_u256() -> impl Strategy<Value = U256> {
    u256().prop_filter("nonzero divisor", |x| !x.is_zero())
}

// ============================================================================
// Against native 128-bit integers
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn prop_u128_matches_native(a in any::<u128>(), b in any::<u128>()) {
        let (sum, overflow) = a.overflowing_add(b);
        prop_assert_eq!(u128_of(a).overflowing_add(u128_of(b)), (u128_of(sum), overflow));
        let (difference, overflow) = a.overflowing_sub(b);
        prop_assert_eq!(u128_of(a).overflowing_sub(u128_of(b)), (u128_of(difference), overflow));
        let (product, overflow) = a.overflowing_mul(b);
        prop_assert_eq!(u128_of(a).overflowing_mul(u128_of(b)), (u128_of(product), overflow));
        if b != 0 {
            prop_assert_eq!(u128_of(a).div_rem(u128_of(b)), (u128_of(a / b), u128_of(a % b)));
        }
        prop_assert_eq!(u128_of(a).cmp(&u128_of(b)), a.cmp(&b));
        prop_assert_eq!(u128_of(a).to_string(), a.to_string());
    }

    #[test]
    fn prop_i128_matches_native(a in any::<i128>(), b in any::<i128>()) {
        let (sum, overflow) = a.overflowing_add(b);
        prop_assert_eq!(i128_of(a).overflowing_add(i128_of(b)), (i128_of(sum), overflow));
        let (product, overflow) = a.overflowing_mul(b);
        prop_assert_eq!(i128_of(a).overflowing_mul(i128_of(b)), (i128_of(product), overflow));
        if b != 0 {
            let quotient = a.checked_div(b).map(i128_of);
            let remainder = a.checked_rem(b).map(i128_of);
            prop_assert_eq!(i128_of(a).checked_div(i128_of(b)), quotient);
            prop_assert_eq!(i128_of(a).checked_rem(i128_of(b)), remainder);
        }
        prop_assert_eq!(i128_of(a).cmp(&i128_of(b)), a.cmp(&b));
        prop_assert_eq!(format!("{:x}", i128_of(a)), format!("{a:x}"));
    }

    #[test]
    fn prop_i128_shifts_match_native(a in any::<i128>(), shift in 0u32..300) {
        prop_assert_eq!(i128_of(a).wrapping_shl(shift), i128_of(a.wrapping_shl(shift)));
        prop_assert_eq!(i128_of(a).wrapping_shr(shift), i128_of(a.wrapping_shr(shift)));
        prop_assert_eq!(i128_of(a).leading_zeros(), a.leading_zeros());
        prop_assert_eq!(i128_of(a).trailing_zeros(), a.trailing_zeros());
        prop_assert_eq!(i128_of(a).swap_bytes(), i128_of(a.swap_bytes()));
    }
}

// ============================================================================
// Laws at 256 bits
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn prop_parts_round_trip(a in i256()) {
        let (high, low) = a.into_parts();
        prop_assert_eq!(I256::new(high, low), a);
        prop_assert_eq!(I256::from_magnitude_bits(a.to_magnitude_bits()), a);
    }

    #[test]
    fn prop_add_sub_inverse(a in u256(), b in u256()) {
        // (a + b) - b == a modulo 2^256
        prop_assert_eq!(a.wrapping_add(b).wrapping_sub(b), a);
    }

    #[test]
    fn prop_mul_div_inverse(a in u256(), b in nonzero_u256()) {
        if let Some(product) = a.checked_mul(b) {
            prop_assert_eq!(product / b, a);
            prop_assert!(product.is_multiple_of(b));
        }
    }

    #[test]
    fn prop_unsigned_division_law(a in u256(), b in nonzero_u256()) {
        let (quotient, remainder) = a.div_rem(b);
        prop_assert!(remainder < b);
        prop_assert_eq!(quotient * b + remainder, a);
    }

    #[test]
    fn prop_signed_division_law(a in i256(), b in i256()) {
        prop_assume!(!b.is_zero());
        prop_assume!(!(a == I256::MIN && b == -I256::ONE));
        let (quotient, remainder) = a.div_rem(b);
        prop_assert_eq!(quotient.wrapping_mul(b).wrapping_add(remainder), a);
        prop_assert!(remainder.is_zero() || remainder.is_negative() == a.is_negative());
        prop_assert!(remainder.unsigned_abs() < b.unsigned_abs());
    }

    #[test]
    fn prop_full_mul_div_inverse(a in u256(), b in nonzero_u256(), c in u256()) {
        // a * b + (c mod b) divided by b gives back a and the remainder.
        let extra = c % b;
        let (high, low) = a.full_mul(b);
        let (low, carry) = low.overflowing_add(extra);
        let high = high + U256::from_int(u8::from(carry));
        prop_assert_eq!(U256::full_div_rem(high, low, b), (a, extra));
    }

    #[test]
    fn prop_masked_shift_round_trip(a in u256(), shift in 0u32..256) {
        prop_assert_eq!(a.wrapping_shl(shift).wrapping_shr(shift), a & (U256::MAX >> shift));
        if a.leading_zeros() >= shift {
            prop_assert_eq!((a << shift) >> shift, a);
        }
        prop_assert_eq!(a.wrapping_shl(shift + 256), a.wrapping_shl(shift));
    }

    #[test]
    fn prop_signed_shift_reverses(a in i256(), shift in -300i64..300) {
        prop_assert_eq!(a << shift, a >> -shift);
    }

    #[test]
    fn prop_radix_round_trip(a in i256(), radix in 2u32..=36) {
        let text = a.to_str_radix(radix);
        prop_assert_eq!(I256::from_str_radix(&text, radix), Ok(a));
        prop_assert_eq!(a.to_string().parse::<I256>(), Ok(a));
    }

    #[test]
    fn prop_int_conversion_round_trip(a in any::<i64>(), b in any::<u64>()) {
        prop_assert_eq!(I256::from_int(a).checked_cast::<i64>(), Some(a));
        prop_assert_eq!(U256::from_int(b).checked_cast::<u64>(), Some(b));
        let nested = DoubleWidth::<DoubleWidth<i8>>::checked_from_int(a);
        prop_assert_eq!(nested.is_some(), i32::try_from(a).is_ok());
    }
}
