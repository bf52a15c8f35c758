//! Ordering of composites.
//!
//! `high` decides first; its own ordering already encodes the sign, so the
//! same rule serves signed and unsigned composites. Ties fall to `low`.

use std::cmp::Ordering;

use crate::dword::DoubleWidth;
use crate::int::BaseInt;

impl<B: BaseInt> Ord for DoubleWidth<B> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        match self.high.cmp(&other.high) {
            Ordering::Equal => self.low.cmp(&other.low),
            ord => ord,
        }
    }
}

impl<B: BaseInt> PartialOrd for DoubleWidth<B> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
