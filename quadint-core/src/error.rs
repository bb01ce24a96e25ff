//! Errors produced by the 128-bit integer engine.

use std::fmt;
use thiserror::Error;
use tracing::trace;

/// The operation that raised an [`Int128Error`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Addition.
    Add,
    /// Subtraction.
    Sub,
    /// Negation.
    Neg,
    /// Absolute value.
    Abs,
    /// Multiplication.
    Mul,
    /// Exponentiation.
    Pow,
    /// Truncating division.
    Div,
    /// Truncating remainder.
    Rem,
    /// Left shift.
    Shl,
    /// Sign-extending right shift.
    Shr,
    /// Zero-filling right shift.
    Ushr,
    /// Parsing from text.
    Parse,
    /// Rendering to text.
    Render,
    /// Random generation.
    Random,
    /// Conversion from a rational decomposition.
    FromRational,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Add => "addition",
            Self::Sub => "subtraction",
            Self::Neg => "negation",
            Self::Abs => "absolute value",
            Self::Mul => "multiplication",
            Self::Pow => "exponentiation",
            Self::Div => "division",
            Self::Rem => "remainder",
            Self::Shl => "shift left",
            Self::Shr => "shift right",
            Self::Ushr => "unsigned shift right",
            Self::Parse => "parse",
            Self::Render => "render",
            Self::Random => "random generation",
            Self::FromRational => "rational conversion",
        };
        f.write_str(name)
    }
}

/// Why a string could not be parsed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormatErrorKind {
    /// The input (after an optional sign) contained no digits.
    Empty,
    /// A character is not a digit in the requested radix.
    InvalidDigit,
}

impl fmt::Display for FormatErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("cannot parse integer from empty string"),
            Self::InvalidDigit => f.write_str("invalid digit found in string"),
        }
    }
}

/// The error type returned by every fallible 128-bit integer operation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Int128Error {
    /// The result does not fit in a 128-bit two's-complement integer.
    #[error("{op} overflowed 128 bits: {operands}")]
    Overflow {
        /// The failing operation.
        op: Operation,
        /// The operands, rendered in decimal.
        operands: String,
    },
    /// Division or remainder by zero.
    #[error("{op} by zero is undefined: {dividend} / 0")]
    Undefined {
        /// The failing operation.
        op: Operation,
        /// The dividend, rendered in decimal.
        dividend: String,
    },
    /// The text is not a number in the requested radix.
    #[error("{kind}: {input:?} (radix {radix})")]
    Format {
        /// What went wrong.
        kind: FormatErrorKind,
        /// The offending input.
        input: String,
        /// The radix the input was parsed in.
        radix: u32,
    },
    /// An argument was rejected before any computation took place.
    #[error("invalid argument to {op}: {reason}")]
    InvalidArgument {
        /// The rejecting operation.
        op: Operation,
        /// Human readable reason.
        reason: String,
    },
    /// A rational decomposition does not denote an integer.
    #[error("{value} is not an integer")]
    NotIntegral {
        /// The rational value, rendered as `numerator/denominator`.
        value: String,
    },
}

impl Int128Error {
    pub(crate) fn overflow(op: Operation, operands: impl Into<String>) -> Self {
        let operands = operands.into();
        trace!(%op, %operands, "128-bit overflow");
        Self::Overflow { op, operands }
    }

    pub(crate) fn undefined(op: Operation, dividend: impl Into<String>) -> Self {
        let dividend = dividend.into();
        trace!(%op, %dividend, "division by zero");
        Self::Undefined { op, dividend }
    }

    pub(crate) fn format(kind: FormatErrorKind, input: &str, radix: u32) -> Self {
        trace!(%kind, input, radix, "unparsable integer");
        Self::Format { kind, input: input.to_owned(), radix }
    }

    pub(crate) fn invalid_argument(op: Operation, reason: impl Into<String>) -> Self {
        let reason = reason.into();
        trace!(%op, %reason, "invalid argument");
        Self::InvalidArgument { op, reason }
    }

    /// Returns `true` for [`Int128Error::Overflow`].
    pub const fn is_overflow(&self) -> bool {
        matches!(self, Self::Overflow { .. })
    }

    /// Returns `true` for [`Int128Error::Undefined`].
    pub const fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined { .. })
    }

    /// Returns `true` for [`Int128Error::Format`].
    pub const fn is_format(&self) -> bool {
        matches!(self, Self::Format { .. })
    }

    /// Returns `true` for [`Int128Error::InvalidArgument`].
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    /// The operation that failed, when the error records one.
    pub const fn operation(&self) -> Option<Operation> {
        match self {
            Self::Overflow { op, .. } |
            Self::Undefined { op, .. } |
            Self::InvalidArgument { op, .. } => Some(*op),
            Self::Format { .. } => Some(Operation::Parse),
            Self::NotIntegral { .. } => Some(Operation::FromRational),
        }
    }
}

/// The error type returned when an [`Int128`](crate::types::Int128) does not fit a narrower
/// native integer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("out of range integer conversion attempted")]
pub struct TryFromInt128Error;
