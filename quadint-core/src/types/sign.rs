//! The sign of a 128-bit value, read off the top bit of its first quarter.

use std::{fmt, ops};

/// Whether a value lies below zero. Zero is [`Sign::Positive`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Sign {
    /// Zero or above.
    Positive,
    /// Below zero.
    Negative,
}

impl Sign {
    /// The sign encoded by a two's-complement sign bit.
    #[inline(always)]
    pub const fn from_sign_bit(set: bool) -> Self {
        if set {
            Self::Negative
        } else {
            Self::Positive
        }
    }

    #[inline(always)]
    pub const fn is_negative(self) -> bool {
        matches!(self, Self::Negative)
    }

    #[inline(always)]
    pub const fn is_positive(self) -> bool {
        !self.is_negative()
    }

    /// `'-'` or `'+'`.
    #[inline(always)]
    pub const fn as_char(self) -> char {
        if self.is_negative() {
            '-'
        } else {
            '+'
        }
    }

    /// Sign of a product or quotient: negative when exactly one factor is.
    #[inline(always)]
    pub const fn product(self, other: Self) -> Self {
        Self::from_sign_bit(self.is_negative() ^ other.is_negative())
    }
}

impl ops::Neg for Sign {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::from_sign_bit(!self.is_negative())
    }
}

impl ops::Mul for Sign {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.product(rhs)
    }
}

/// Prints nothing for a positive sign unless `{:+}` asks for it.
impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() || f.sign_plus() {
            fmt::Write::write_char(f, self.as_char())
        } else {
            Ok(())
        }
    }
}
