use thiserror::Error;

/// Errors from double-width arithmetic, conversion and parsing.
///
/// The `Display` text of the arithmetic variants matches the panic
/// messages of native Rust integers, so the trapping operators read the
/// same as `u64` overflow in a debug build.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum DoubleWidthError {
    #[error("attempt to {op} with overflow")]
    Overflow { op: &'static str },
    #[error("attempt to divide by zero")]
    DivisionByZero,
    #[error("attempt to calculate the remainder with a divisor of zero")]
    RemainderByZero,
    #[error("value is not representable in a {bits}-bit integer")]
    NotRepresentable { bits: u32 },
    #[error("cannot convert a NaN or infinite float to an integer")]
    NonFinite,
    #[error("cannot parse integer from empty string")]
    Empty,
    #[error("invalid digit found in string")]
    InvalidDigit,
    #[error("{half_bits}-bit halves cannot be viewed as 64-bit words")]
    UnsupportedWordView { half_bits: u32 },
}

impl DoubleWidthError {
    pub(crate) const ADD: Self = DoubleWidthError::Overflow { op: "add" };
    pub(crate) const SUB: Self = DoubleWidthError::Overflow { op: "subtract" };
    pub(crate) const MUL: Self = DoubleWidthError::Overflow { op: "multiply" };
    pub(crate) const DIV: Self = DoubleWidthError::Overflow { op: "divide" };
    pub(crate) const REM: Self = DoubleWidthError::Overflow {
        op: "calculate the remainder",
    };
    pub(crate) const NEG: Self = DoubleWidthError::Overflow { op: "negate" };
}

/// Panics with the error's message. Every trapping operation funnels
/// through here.
#[cold]
#[track_caller]
pub(crate) fn trap(err: DoubleWidthError) -> ! {
    panic!("{err}")
}
