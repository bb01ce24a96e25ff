//! The decomposition a rational-number type uses to consume and produce 128-bit integers.

use super::{int128::Mode, Arithmetic, Int128, Sign};
use crate::error::{Int128Error, Operation};
use std::fmt;

/// A value `numerator / (denominator * 10^scale)`.
///
/// [`Int128::to_rational`] always produces an integral decomposition: the value itself as the
/// numerator, a denominator of one and a scale of zero. [`Int128::from_rational`] accepts any
/// decomposition that denotes an integer.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RationalParts {
    numerator: Int128,
    denominator: Int128,
    scale: u32,
    sign: Sign,
}

impl RationalParts {
    /// Creates a decomposition. The denominator must not be zero.
    pub fn new(numerator: Int128, denominator: Int128, scale: u32) -> Result<Self, Int128Error> {
        if denominator.is_zero() {
            return Err(Int128Error::undefined(Operation::FromRational, numerator.to_decimal()))
        }
        let sign = if numerator.is_zero() {
            Sign::Positive
        } else {
            numerator.sign().product(denominator.sign())
        };
        Ok(Self { numerator, denominator, scale, sign })
    }

    /// The signed numerator.
    pub const fn numerator(&self) -> &Int128 {
        &self.numerator
    }

    /// The signed denominator, never zero.
    pub const fn denominator(&self) -> &Int128 {
        &self.denominator
    }

    /// Power of ten the denominator is additionally scaled by.
    pub const fn scale(&self) -> u32 {
        self.scale
    }

    /// Sign of the whole value; zero is positive.
    pub const fn sign(&self) -> Sign {
        self.sign
    }

    /// Returns `true` if the denominator is one and there is no scale.
    pub fn is_integral_form(&self) -> bool {
        self.scale == 0 && self.denominator.same_quarters(super::int128::quarters::ONE)
    }
}

impl fmt::Display for RationalParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)?;
        if self.scale != 0 {
            write!(f, "e-{}", self.scale)?;
        }
        Ok(())
    }
}

impl<M: Mode> Int128<M> {
    /// Decomposes `self` as `self / 1` with scale zero.
    pub fn to_rational(&self) -> RationalParts {
        RationalParts {
            numerator: self.immutable(),
            denominator: Int128::ONE,
            scale: 0,
            sign: self.sign(),
        }
    }
}

impl Int128 {
    /// Recovers the integer a decomposition denotes.
    ///
    /// Fails with [`Int128Error::NotIntegral`] when the division leaves a remainder, and with an
    /// overflow when the quotient does not fit (`MIN_VALUE / -1`).
    pub fn from_rational(parts: &RationalParts) -> Result<Self, Int128Error> {
        if parts.numerator.is_zero() {
            return Ok(Int128::ZERO)
        }
        if parts.is_integral_form() {
            return Ok(parts.numerator.clone())
        }

        let not_integral = || Int128Error::NotIntegral { value: parts.to_string() };
        let mut divisor = parts.denominator.mutable();
        for _ in 0..parts.scale {
            // a divisor past 2^127 always exceeds a non-zero numerator
            if divisor.mul(&Int128::TEN).is_err() {
                return Err(not_integral())
            }
        }

        let (quotient, remainder) = parts.numerator.div_rem(&divisor).map_err(|err| match err {
            Int128Error::Overflow { operands, .. } => {
                Int128Error::overflow(Operation::FromRational, operands)
            }
            other => other,
        })?;
        if !remainder.is_zero() {
            return Err(not_integral())
        }
        Ok(quotient)
    }
}
