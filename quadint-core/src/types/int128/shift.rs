//! Multi-word shifts and per-quarter bitwise operations.

use super::quarters::{Quarters, ZERO};

/// Shifts left by `count` bits. Whole quarters move by `count / 32`, the remaining `count % 32`
/// bits are carried in from the next less significant quarter.
pub(super) fn shift_left(q: Quarters, count: u32) -> Quarters {
    if count >= 128 {
        return ZERO
    }
    let words = (count / 32) as usize;
    let bits = count % 32;

    let mut out = ZERO;
    for (i, slot) in out.iter_mut().enumerate() {
        let source = i + words;
        if source >= 4 {
            break
        }
        let mut word = q[source] << bits;
        if bits != 0 && source + 1 < 4 {
            word |= q[source + 1] >> (32 - bits);
        }
        *slot = word;
    }
    out
}

/// Shifts right by `count` bits, feeding `fill` in from the top. `fill` is the blank quarter for
/// a sign-extending shift and zero for an unsigned one.
pub(super) fn shift_right(q: Quarters, count: u32, fill: u32) -> Quarters {
    if count >= 128 {
        return [fill; 4]
    }
    let words = (count / 32) as usize;
    let bits = count % 32;
    let source = |index: usize| if index >= words { q[index - words] } else { fill };

    let mut out = ZERO;
    for (i, slot) in out.iter_mut().enumerate() {
        let current = source(i);
        *slot = if bits == 0 {
            current
        } else {
            let above = if i == 0 { fill } else { source(i - 1) };
            (current >> bits) | (above << (32 - bits))
        };
    }
    out
}

/// Combines two values quarter by quarter.
#[inline(always)]
pub(super) fn zip(a: Quarters, b: Quarters, op: impl Fn(u32, u32) -> u32) -> Quarters {
    [op(a[0], b[0]), op(a[1], b[1]), op(a[2], b[2]), op(a[3], b[3])]
}
