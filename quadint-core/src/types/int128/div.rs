//! Truncating division and remainder.

use super::{
    quarters::{self, Quarters, ONE, ZERO},
    shift,
};
use std::cmp::Ordering;

/// Which results of a division the caller needs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DivPart {
    /// Only the quotient.
    Quotient,
    /// Only the remainder; the quotient is not range checked, so `MIN_VALUE % -1` is zero.
    Remainder,
    /// Quotient and remainder together.
    Both,
}

impl DivPart {
    const fn wants_quotient(self) -> bool {
        !matches!(self, Self::Remainder)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum DivFault {
    DivideByZero,
    Overflow,
}

/// Divides `dividend` by `divisor`, returning `(quotient, remainder)`.
///
/// The quotient is rounded toward zero and takes the product sign of the operands; the remainder
/// takes the sign of the dividend. When `part` is [`DivPart::Remainder`] the returned quotient is
/// zero.
pub(super) fn divide(
    dividend: Quarters,
    divisor: Quarters,
    part: DivPart,
) -> Result<(Quarters, Quarters), DivFault> {
    if divisor == ZERO {
        return Err(DivFault::DivideByZero)
    }
    if divisor == ONE {
        return Ok((dividend, ZERO))
    }

    let quotient_negative = quarters::is_negative(dividend) != quarters::is_negative(divisor);
    let remainder_negative = quarters::is_negative(dividend);
    let n = quarters::unsigned_abs(dividend);
    let d = quarters::unsigned_abs(divisor);

    let (quotient, remainder) = match quarters::cmp_unsigned(d, n) {
        Ordering::Greater => (ZERO, n),
        Ordering::Equal => (ONE, ZERO),
        Ordering::Less => exact_power_of_two(n, d).unwrap_or_else(|| long_divide(n, d, part)),
    };

    // |remainder| < |divisor| <= 2^127, so only the quotient can leave the range
    let remainder =
        quarters::from_sign_and_abs(remainder_negative, remainder).ok_or(DivFault::Overflow)?;
    let quotient = if part.wants_quotient() {
        quarters::from_sign_and_abs(quotient_negative, quotient).ok_or(DivFault::Overflow)?
    } else {
        ZERO
    };
    Ok((quotient, remainder))
}

/// A power-of-two dividend is divided exactly by a single shift when the divisor is the
/// dividend shifted right by their leading-zero difference.
fn exact_power_of_two(n: Quarters, d: Quarters) -> Option<(Quarters, Quarters)> {
    if quarters::count_ones(n) != 1 {
        return None
    }
    let difference = quarters::leading_zeros(d) - quarters::leading_zeros(n);
    if shift::shift_right(n, difference, 0) != d {
        return None
    }
    let mut quotient = ZERO;
    quarters::set_bit(&mut quotient, difference);
    Some((quotient, ZERO))
}

/// Restoring binary long division of unsigned values, `d < n`.
fn long_divide(n: Quarters, d: Quarters, part: DivPart) -> (Quarters, Quarters) {
    let mut quotient = ZERO;
    let mut remainder = ZERO;
    for index in (0..128 - quarters::leading_zeros(n)).rev() {
        // remainder < d <= 2^127, so the doubling never drops a bit
        remainder = shift::shift_left(remainder, 1);
        if quarters::bit(n, index) {
            remainder[3] |= 1;
        }
        if quarters::cmp_unsigned(remainder, d) != Ordering::Less {
            remainder = quarters::wrapping_sub(remainder, d);
            if part.wants_quotient() {
                quarters::set_bit(&mut quotient, index);
            }
        }
    }
    (quotient, remainder)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Arithmetic, Int128};

    fn div_rem(a: i128, b: i128) -> Result<(i128, i128), DivFault> {
        let (x, y) = (Int128::from(a).quarters(), Int128::from(b).quarters());
        let (q, r) = divide(x, y, DivPart::Both)?;
        let native = |q: Quarters| Int128::from_quarters(q[0], q[1], q[2], q[3]).to_i128();
        Ok((native(q), native(r)))
    }

    #[test]
    fn preconditions() {
        assert_eq!(div_rem(5, 0), Err(DivFault::DivideByZero));
        assert_eq!(div_rem(0, 0), Err(DivFault::DivideByZero));
        assert_eq!(div_rem(i128::MIN, 1), Ok((i128::MIN, 0)));
        assert_eq!(div_rem(-77, 1), Ok((-77, 0)));
        assert_eq!(div_rem(0, -3), Ok((0, 0)));
    }

    #[test]
    fn small_dividends() {
        assert_eq!(div_rem(3, 7), Ok((0, 3)));
        assert_eq!(div_rem(-3, 7), Ok((0, -3)));
        assert_eq!(div_rem(3, i128::MIN), Ok((0, 3)));
        assert_eq!(div_rem(-9, -9), Ok((1, 0)));
        assert_eq!(div_rem(9, -9), Ok((-1, 0)));
        assert_eq!(div_rem(i128::MIN, i128::MIN), Ok((1, 0)));
    }

    #[test]
    fn powers_of_two() {
        let n = Int128::from(1i128 << 100).quarters();
        assert_eq!(exact_power_of_two(n, [0, 0, 0, 24]), None);
        assert_eq!(exact_power_of_two(n, [0, 0, 0, 16]), Some(([1, 0, 0, 0], ZERO)));
        let q = exact_power_of_two(
            Int128::from(1i128 << 100).quarters(),
            Int128::from(1i128 << 36).quarters(),
        );
        assert_eq!(q, Some((Int128::from(1i128 << 64).quarters(), ZERO)));

        assert_eq!(div_rem(1 << 100, 1 << 36), Ok((1 << 64, 0)));
        assert_eq!(div_rem(1 << 100, -(1 << 99)), Ok((-2, 0)));
        assert_eq!(div_rem(i128::MIN, 1 << 64), Ok((-(1 << 63), 0)));
        // not a power-of-two divisor: general path
        assert_eq!(div_rem(1 << 100, 3), Ok(((1 << 100) / 3, (1 << 100) % 3)));
    }

    #[test]
    fn min_by_minus_one() {
        let min = Int128::MIN_VALUE.quarters();
        let minus_one = Int128::MINUS_ONE.quarters();
        assert_eq!(divide(min, minus_one, DivPart::Quotient), Err(DivFault::Overflow));
        assert_eq!(divide(min, minus_one, DivPart::Both), Err(DivFault::Overflow));
        assert_eq!(divide(min, minus_one, DivPart::Remainder), Ok((ZERO, ZERO)));
    }

    #[test]
    fn truncates_toward_zero() {
        assert_eq!(div_rem(7, 2), Ok((3, 1)));
        assert_eq!(div_rem(-7, 2), Ok((-3, -1)));
        assert_eq!(div_rem(7, -2), Ok((-3, 1)));
        assert_eq!(div_rem(-7, -2), Ok((3, -1)));
        assert_eq!(div_rem(100, 9), Ok((11, 1)));
    }

    #[test]
    fn matches_native_division() {
        let samples = [
            1,
            -1,
            2,
            7,
            -13,
            1000,
            u32::MAX as i128,
            i64::MIN as i128,
            0x1234_5678_9ABC_DEF0_1234,
            -0x7777_0000_0000_0000_0000_0001,
            i128::MAX,
            i128::MIN,
            i128::MIN + 1,
        ];
        for &a in &samples {
            for &b in &samples {
                let expected = a.checked_div(b).map(|q| (q, a % b));
                assert_eq!(div_rem(a, b).ok(), expected, "{a} / {b}");

                if let Some((q, r)) = expected {
                    // truncating division law
                    assert_eq!(q * b + r, a);
                    assert!(r == 0 || (r < 0) == (a < 0));
                }

                let x = Int128::from(a);
                let y = Int128::from(b);
                // MIN_VALUE % -1 is zero rather than an overflow
                let remainder = (b != 0).then(|| a.wrapping_rem(b));
                assert_eq!(x.rem(&y).ok().map(|r| r.to_i128()), remainder, "{a} % {b}");
                assert_eq!(x.div(&y).ok().map(|q| q.to_i128()), a.checked_div(b), "{a} / {b}");
            }
        }
    }
}
