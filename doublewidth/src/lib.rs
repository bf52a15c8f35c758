//! Fixed-width integers built by doubling.
//!
//! [`DoubleWidth<B>`] pairs a `high` half of type `B` with a `low` half of
//! `B`'s unsigned type, giving an integer twice as wide as `B`. The pair
//! implements the same [`BaseInt`] interface it is built from, so it nests:
//!
//! ```
//! use doublewidth::{DoubleWidth, I1024, U256};
//!
//! type U32 = DoubleWidth<DoubleWidth<u8>>;
//! assert_eq!(U32::BITS, 32);
//!
//! let (value, overflow) = U256::MAX.overflowing_add(U256::ONE);
//! assert_eq!(value, U256::ZERO);
//! assert!(overflow);
//!
//! assert!(I1024::MIN.checked_div(-I1024::ONE).is_none());
//! ```
//!
//! Arithmetic operators trap on overflow. Every trapping operation also has
//! an `overflowing_*` form that reports a flag, a `checked_*` form that
//! returns `Option`, and where it makes sense a `try_*` form returning
//! [`DoubleWidthError`]. Negation and the other sign-only operations exist
//! only when the base implements [`SignedInt`].

pub mod error;
pub mod int;
pub mod radix;

mod arith;
mod cmp;
mod convert;
mod div;
mod dword;
mod mul;
mod ops;
mod shift;
mod signed;

pub use convert::Words;
pub use dword::{DoubleWidth, Low, I1024, I128, I256, I512, U1024, U128, U256, U512};
pub use error::DoubleWidthError;
pub use int::{BaseInt, SignedInt, UnsignedInt, WORD_BITS};
