use super::{
    div::{self, DivFault, DivPart},
    fmt::decimal,
    mode::{Mode, Target},
    mul, quarters, shift, Int128,
};
use crate::error::{Int128Error, Operation};

/// Checked arithmetic on 128-bit integers, written once for both storage modes.
///
/// The receiver is a [`Target`]: an `&Int128` gets a freshly built result, an
/// `&mut Int128<Mutable>` is overwritten in place and handed back so calls chain without
/// allocating. A failing operation returns an error and leaves the receiver untouched.
///
/// ```
/// use quadint_core::types::{Arithmetic, Int128};
///
/// let a = Int128::from(100);
/// let (q, r) = a.div_rem(&Int128::from(9)).unwrap();
/// assert_eq!((q, r), (Int128::from(11), Int128::from(1)));
///
/// assert!(Int128::MAX_VALUE.add(&Int128::ONE).unwrap_err().is_overflow());
/// ```
pub trait Arithmetic: Target {
    /// `self + rhs`. Overflows when both operands share a sign the result does not.
    fn add<M: Mode>(self, rhs: &Int128<M>) -> Result<Self::Output, Int128Error> {
        let lhs = self.read();
        let sum = quarters::add_carrying(lhs, rhs.quarters, 0);
        let (a, b, s) = (
            quarters::is_negative(lhs),
            quarters::is_negative(rhs.quarters),
            quarters::is_negative(sum),
        );
        if a == b && s != a {
            return Err(Int128Error::overflow(Operation::Add, binary(lhs, "+", rhs.quarters)))
        }
        Ok(self.materialize(sum))
    }

    /// `self - rhs`, computed as `self + !rhs + 1` so that `rhs == MIN_VALUE` needs no
    /// intermediate negation.
    fn sub<M: Mode>(self, rhs: &Int128<M>) -> Result<Self::Output, Int128Error> {
        let lhs = self.read();
        let difference = quarters::wrapping_sub(lhs, rhs.quarters);
        let (a, b, d) = (
            quarters::is_negative(lhs),
            quarters::is_negative(rhs.quarters),
            quarters::is_negative(difference),
        );
        if a != b && d != a {
            return Err(Int128Error::overflow(Operation::Sub, binary(lhs, "-", rhs.quarters)))
        }
        Ok(self.materialize(difference))
    }

    /// `-self`. Negating `MIN_VALUE` overflows.
    fn neg(self) -> Result<Self::Output, Int128Error> {
        let value = self.read();
        if value == quarters::MIN {
            return Err(Int128Error::overflow(Operation::Neg, format!("-({})", decimal(value))))
        }
        Ok(self.materialize(quarters::wrapping_neg(value)))
    }

    /// `|self|`. The absolute value of `MIN_VALUE` overflows.
    fn abs(self) -> Result<Self::Output, Int128Error> {
        let value = self.read();
        if value == quarters::MIN {
            return Err(Int128Error::overflow(Operation::Abs, format!("|{}|", decimal(value))))
        }
        Ok(self.materialize(quarters::unsigned_abs(value)))
    }

    /// `self * rhs`, see [`MulShape`](super::MulShape) for the algorithm.
    fn mul<M: Mode>(self, rhs: &Int128<M>) -> Result<Self::Output, Int128Error> {
        let lhs = self.read();
        match mul::checked_mul(lhs, rhs.quarters) {
            Some(product) => Ok(self.materialize(product)),
            None => Err(Int128Error::overflow(Operation::Mul, binary(lhs, "*", rhs.quarters))),
        }
    }

    /// `self ^ exp` by repeated multiplication in a mutable accumulator.
    fn pow(self, exp: u32) -> Result<Self::Output, Int128Error> {
        let base: Int128 = Int128::with_quarters(self.read());
        let mut acc = Int128::ONE.mutable();
        match base.quarters {
            _ if exp == 0 => {}
            quarters::ZERO | quarters::ONE => acc.quarters = base.quarters,
            quarters::MINUS_ONE if exp % 2 == 1 => acc.quarters = base.quarters,
            quarters::MINUS_ONE => {}
            _ => {
                for _ in 0..exp {
                    if acc.mul(&base).is_err() {
                        return Err(Int128Error::overflow(
                            Operation::Pow,
                            format!("{} ^ {exp}", decimal(base.quarters)),
                        ))
                    }
                }
            }
        }
        Ok(self.materialize(acc.quarters))
    }

    /// Truncating division, rounding the quotient toward zero.
    ///
    /// Division by zero is [`Int128Error::Undefined`]; `MIN_VALUE / -1` overflows.
    fn div<M: Mode>(self, rhs: &Int128<M>) -> Result<Self::Output, Int128Error> {
        let lhs = self.read();
        let (quotient, _) = divide(lhs, rhs.quarters, DivPart::Quotient, Operation::Div)?;
        Ok(self.materialize(quotient))
    }

    /// Truncating remainder; the result has the sign of `self` or is zero.
    fn rem<M: Mode>(self, rhs: &Int128<M>) -> Result<Self::Output, Int128Error> {
        let lhs = self.read();
        let (_, remainder) = divide(lhs, rhs.quarters, DivPart::Remainder, Operation::Rem)?;
        Ok(self.materialize(remainder))
    }

    /// Quotient and remainder in one pass. The quotient is materialized into the receiver, the
    /// remainder is returned as a new immutable value.
    fn div_rem<M: Mode>(self, rhs: &Int128<M>) -> Result<(Self::Output, Int128), Int128Error> {
        let lhs = self.read();
        let (quotient, remainder) = divide(lhs, rhs.quarters, DivPart::Both, Operation::Div)?;
        Ok((self.materialize(quotient), Int128::with_quarters(remainder)))
    }

    /// Shifts left by `count` bits, filling with zeros. `count >= 128` yields zero.
    fn shl(self, count: i32) -> Result<Self::Output, Int128Error> {
        let count = shift_count(count, Operation::Shl)?;
        let value = self.read();
        Ok(self.materialize(shift::shift_left(value, count)))
    }

    /// Sign-extending right shift. `count >= 128` yields `0` or `-1`.
    fn shr(self, count: i32) -> Result<Self::Output, Int128Error> {
        let count = shift_count(count, Operation::Shr)?;
        let value = self.read();
        Ok(self.materialize(shift::shift_right(value, count, quarters::blank(value))))
    }

    /// Zero-filling right shift. `count >= 128` yields zero.
    fn ushr(self, count: i32) -> Result<Self::Output, Int128Error> {
        let count = shift_count(count, Operation::Ushr)?;
        let value = self.read();
        Ok(self.materialize(shift::shift_right(value, count, 0)))
    }

    /// Bitwise and.
    fn and<M: Mode>(self, rhs: &Int128<M>) -> Self::Output {
        let value = shift::zip(self.read(), rhs.quarters, |a, b| a & b);
        self.materialize(value)
    }

    /// Bitwise or.
    fn or<M: Mode>(self, rhs: &Int128<M>) -> Self::Output {
        let value = shift::zip(self.read(), rhs.quarters, |a, b| a | b);
        self.materialize(value)
    }

    /// Bitwise exclusive or.
    fn xor<M: Mode>(self, rhs: &Int128<M>) -> Self::Output {
        let value = shift::zip(self.read(), rhs.quarters, |a, b| a ^ b);
        self.materialize(value)
    }

    /// Bitwise inversion (ones' complement).
    fn inv(self) -> Self::Output {
        let value = quarters::invert(self.read());
        self.materialize(value)
    }

    /// A mutable view of the receiver: a new accumulator for immutable values, the receiver
    /// itself for mutable ones.
    fn mutable(self) -> Self::Mutable {
        self.into_mutable()
    }
}

impl<T: Target> Arithmetic for T {}

fn binary(lhs: super::Quarters, symbol: &str, rhs: super::Quarters) -> String {
    format!("{} {symbol} {}", decimal(lhs), decimal(rhs))
}

fn shift_count(count: i32, op: Operation) -> Result<u32, Int128Error> {
    u32::try_from(count)
        .map_err(|_| Int128Error::invalid_argument(op, format!("negative shift count {count}")))
}

fn divide(
    lhs: super::Quarters,
    rhs: super::Quarters,
    part: DivPart,
    op: Operation,
) -> Result<(super::Quarters, super::Quarters), Int128Error> {
    div::divide(lhs, rhs, part).map_err(|fault| match fault {
        DivFault::DivideByZero => Int128Error::undefined(op, decimal(lhs)),
        DivFault::Overflow => Int128Error::overflow(op, binary(lhs, "/", rhs)),
    })
}
