//! Word-level primitives shared by every operation.
//!
//! A [`Quarters`] array holds `[q1, q2, q3, q4]`, most significant first. Functions here never
//! allocate and never fail; overflow detection is the caller's job.

use std::cmp::Ordering;

/// The four 32-bit words of a 128-bit value, most significant first.
pub type Quarters = [u32; 4];

pub(crate) const ZERO: Quarters = [0, 0, 0, 0];
pub(crate) const ONE: Quarters = [0, 0, 0, 1];
pub(crate) const MINUS_ONE: Quarters = [u32::MAX; 4];
pub(crate) const MIN: Quarters = [0x8000_0000, 0, 0, 0];

/// Sign bit of `q1`.
#[inline(always)]
pub(crate) const fn is_negative(q: Quarters) -> bool {
    q[0] >> 31 == 1
}

/// The sign-extension filler for `q`.
#[inline(always)]
pub(crate) const fn blank(q: Quarters) -> u32 {
    if is_negative(q) {
        u32::MAX
    } else {
        0
    }
}

/// Number of trailing quarters differing from `blank`.
#[inline]
pub(crate) fn magnitude_against(q: Quarters, blank: u32) -> u8 {
    q.iter().position(|&word| word != blank).map_or(0, |index| (4 - index) as u8)
}

/// Signed magnitude: trailing quarters differing from the sign filler.
#[inline]
pub(crate) fn magnitude(q: Quarters) -> u8 {
    magnitude_against(q, blank(q))
}

/// Magnitude of `q` read as an unsigned value.
#[inline]
pub(crate) fn unsigned_magnitude(q: Quarters) -> u8 {
    magnitude_against(q, 0)
}

#[inline(always)]
pub(crate) fn invert(q: Quarters) -> Quarters {
    q.map(|word| !word)
}

/// Adds `a`, `b` and `carry_in` word by word from the least significant quarter up, dropping the
/// final carry.
pub(crate) fn add_carrying(a: Quarters, b: Quarters, carry_in: u32) -> Quarters {
    let mut sum = ZERO;
    let mut carry = u64::from(carry_in);
    for i in (0..4).rev() {
        let wide = u64::from(a[i]) + u64::from(b[i]) + carry;
        sum[i] = wide as u32;
        carry = wide >> 32;
    }
    sum
}

/// Two's complement; `MIN` maps onto itself.
#[inline]
pub(crate) fn wrapping_neg(q: Quarters) -> Quarters {
    add_carrying(invert(q), ZERO, 1)
}

/// `a - b` modulo 2^128.
#[inline]
pub(crate) fn wrapping_sub(a: Quarters, b: Quarters) -> Quarters {
    add_carrying(a, invert(b), 1)
}

/// Absolute value as an unsigned quantity; `MIN` becomes 2^127.
#[inline]
pub(crate) fn unsigned_abs(q: Quarters) -> Quarters {
    if is_negative(q) {
        wrapping_neg(q)
    } else {
        q
    }
}

/// Applies a sign to an unsigned absolute value, or `None` when the result is not representable.
pub(crate) fn from_sign_and_abs(negative: bool, abs: Quarters) -> Option<Quarters> {
    match (negative, is_negative(abs)) {
        (false, false) => Some(abs),
        (true, false) => Some(wrapping_neg(abs)),
        (true, true) if abs == MIN => Some(MIN),
        _ => None,
    }
}

/// Unsigned comparison, most significant quarter first.
#[inline(always)]
pub(crate) fn cmp_unsigned(a: Quarters, b: Quarters) -> Ordering {
    a.cmp(&b)
}

pub(crate) fn leading_zeros(q: Quarters) -> u32 {
    let mut zeros = 0;
    for word in q {
        zeros += word.leading_zeros();
        if word != 0 {
            break
        }
    }
    zeros
}

pub(crate) fn trailing_zeros(q: Quarters) -> u32 {
    let mut zeros = 0;
    for word in q.into_iter().rev() {
        zeros += word.trailing_zeros();
        if word != 0 {
            break
        }
    }
    zeros
}

#[inline]
pub(crate) fn count_ones(q: Quarters) -> u32 {
    q.iter().map(|word| word.count_ones()).sum()
}

/// Bit `index` counted from the least significant bit.
#[inline(always)]
pub(crate) const fn bit(q: Quarters, index: u32) -> bool {
    (q[3 - (index / 32) as usize] >> (index % 32)) & 1 == 1
}

#[inline(always)]
pub(crate) fn set_bit(q: &mut Quarters, index: u32) {
    q[3 - (index / 32) as usize] |= 1 << (index % 32);
}
