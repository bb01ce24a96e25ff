//! Magnitude-classified multiplication.
//!
//! A full 128x128 product needs 256 bits. Instead both operands are reduced to their unsigned
//! absolute values and classified by how many quarters they occupy; every product that fits in
//! 128 bits falls into one of four [`MulShape`]s, each a short fixed list of 32x32 limb products.

use super::quarters::{self, Quarters, ONE, ZERO};

/// Operand layout selected by the magnitudes of the two absolute values.
///
/// Limbs are named `a..d` for the smaller operand and `e..h` for the larger one, most
/// significant first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MulShape {
    /// 32x32: `d*h`.
    Narrow,
    /// 64x64: `c*g<<64 + (d*g + c*h)<<32 + d*h`.
    Half,
    /// 32x128: `d*e<<96 + d*f<<64 + d*g<<32 + d*h`.
    Wide,
    /// 64x96: `c*f<<96 + (d*f + c*g)<<64 + (d*g + c*h)<<32 + d*h`.
    Skewed,
}

impl MulShape {
    /// Selects the formula for operands occupying `small <= large` quarters, or `None` when the
    /// product cannot fit in 128 bits.
    pub const fn classify(small: u8, large: u8) -> Option<Self> {
        match (small, large) {
            (0..=1, 0..=1) => Some(Self::Narrow),
            (0..=2, 0..=2) => Some(Self::Half),
            (0..=1, 3..=4) => Some(Self::Wide),
            (2, 3) => Some(Self::Skewed),
            _ => None,
        }
    }

    /// Limb products as `(small index, large index)` pairs into the most-significant-first
    /// quarter arrays.
    const fn terms(self) -> &'static [(usize, usize)] {
        const C: usize = 2;
        const D: usize = 3;
        const E: usize = 0;
        const F: usize = 1;
        const G: usize = 2;
        const H: usize = 3;
        match self {
            Self::Narrow => &[(D, H)],
            Self::Half => &[(C, G), (D, G), (C, H), (D, H)],
            Self::Wide => &[(D, E), (D, F), (D, G), (D, H)],
            Self::Skewed => &[(C, F), (D, F), (C, G), (D, G), (C, H), (D, H)],
        }
    }

    /// Multiplies two unsigned values laid out as this shape describes. `None` if the product
    /// carries into a fifth quarter.
    fn multiply(self, small: Quarters, large: Quarters) -> Option<Quarters> {
        let mut acc = Accumulator::default();
        for &(i, j) in self.terms() {
            let product = u64::from(small[i]) * u64::from(large[j]);
            acc.add((3 - i) + (3 - j), product);
        }
        acc.finish()
    }
}

/// Five 32-bit words, least significant first; the fifth only ever catches overflow.
#[derive(Default)]
struct Accumulator {
    words: [u32; 5],
    spilled: bool,
}

impl Accumulator {
    /// Adds a 64-bit partial product whose low half lands on word `position`.
    fn add(&mut self, position: usize, product: u64) {
        let mut carry = 0;
        for (offset, word) in self.words[position..].iter_mut().enumerate() {
            let addend = match offset {
                0 => product as u32,
                1 => (product >> 32) as u32,
                _ => 0,
            };
            let wide = u64::from(*word) + u64::from(addend) + carry;
            *word = wide as u32;
            carry = wide >> 32;
        }
        self.spilled |= carry != 0;
    }

    fn finish(self) -> Option<Quarters> {
        let [w0, w1, w2, w3, w4] = self.words;
        if self.spilled || w4 != 0 {
            return None
        }
        Some([w3, w2, w1, w0])
    }
}

/// Signed product of two values, `None` on overflow.
pub(super) fn checked_mul(lhs: Quarters, rhs: Quarters) -> Option<Quarters> {
    match (lhs, rhs) {
        (ZERO, _) | (_, ZERO) => return Some(ZERO),
        (ONE, other) | (other, ONE) => return Some(other),
        _ => {}
    }

    let negative = quarters::is_negative(lhs) != quarters::is_negative(rhs);
    let (mut small, mut large) = (quarters::unsigned_abs(lhs), quarters::unsigned_abs(rhs));
    if quarters::unsigned_magnitude(small) > quarters::unsigned_magnitude(large) {
        std::mem::swap(&mut small, &mut large);
    }

    let shape = MulShape::classify(
        quarters::unsigned_magnitude(small),
        quarters::unsigned_magnitude(large),
    )?;
    let product = shape.multiply(small, large)?;
    quarters::from_sign_and_abs(negative, product)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Arithmetic, Int128};

    fn product(a: i128, b: i128) -> Option<i128> {
        checked_mul(Int128::from(a).quarters(), Int128::from(b).quarters())
            .map(|q| Int128::from_quarters(q[0], q[1], q[2], q[3]).to_i128())
    }

    #[test]
    fn classification() {
        assert_eq!(MulShape::classify(0, 0), Some(MulShape::Narrow));
        assert_eq!(MulShape::classify(1, 1), Some(MulShape::Narrow));
        assert_eq!(MulShape::classify(1, 2), Some(MulShape::Half));
        assert_eq!(MulShape::classify(2, 2), Some(MulShape::Half));
        assert_eq!(MulShape::classify(1, 3), Some(MulShape::Wide));
        assert_eq!(MulShape::classify(1, 4), Some(MulShape::Wide));
        assert_eq!(MulShape::classify(2, 3), Some(MulShape::Skewed));
        assert_eq!(MulShape::classify(2, 4), None);
        assert_eq!(MulShape::classify(3, 3), None);
        assert_eq!(MulShape::classify(4, 4), None);
    }

    #[test]
    fn narrow() {
        assert_eq!(product(7, 6), Some(42));
        assert_eq!(product(-7, 6), Some(-42));
        let max = u32::MAX as i128;
        assert_eq!(product(max, max), Some(max * max));
    }

    #[test]
    fn half() {
        let a = 0x1234_5678_9ABC_DEF0;
        let b = -0x0FED_CBA9_8765_4321;
        assert_eq!(product(a, b), Some(a * b));
        assert_eq!(product(u64::MAX as i128, u64::MAX as i128), None);
        assert_eq!(product(i64::MIN as i128, i64::MIN as i128), Some(1 << 126));
    }

    #[test]
    fn wide() {
        let a = 0x7FFF_FFFF_1234_5678_9ABC_DEF0_0000_0001;
        assert_eq!(product(a, 1), Some(a));
        assert_eq!(product(-a, 1), Some(-a));
        assert_eq!(product(a / 3, 3), Some((a / 3) * 3));
        assert_eq!(product(a, 2), None);
        assert_eq!(product(1 << 96, -(1 << 31)), Some(i128::MIN));
        assert_eq!(product(1 << 96, 1 << 31), None);
    }

    #[test]
    fn skewed() {
        let a = 0xABCD_EF01_2345_6789_ABCD; // three quarters
        let b = 0x1_0000_0001; // two quarters
        assert_eq!(product(a, b), Some(a * b));
        assert_eq!(product(-(1 << 64), 1 << 63), Some(i128::MIN));
        assert_eq!(product(1 << 64, 1 << 63), None);
        assert_eq!(product(u64::MAX as i128, (1 << 80) - 1), None);
    }

    #[test]
    fn large_operands_overflow() {
        assert_eq!(product(1 << 64, 1 << 64), None);
        assert_eq!(product(i128::MIN, -1), None);
        assert_eq!(product(i128::MIN, 2), None);
        assert_eq!(product(i128::MAX, i128::MAX), None);
    }

    #[test]
    fn identities_short_circuit() {
        assert_eq!(product(i128::MIN, 1), Some(i128::MIN));
        assert_eq!(product(1, i128::MAX), Some(i128::MAX));
        assert_eq!(product(i128::MIN, 0), Some(0));
        assert_eq!(product(0, i128::MAX), Some(0));
    }

    #[test]
    fn matches_native_products() {
        let samples = [
            0,
            1,
            -1,
            3,
            -5,
            i32::MAX as i128,
            i32::MIN as i128,
            u32::MAX as i128,
            i64::MAX as i128,
            i64::MIN as i128,
            0x1_0000_0000_0000_0000,
            -0x3_0000_0000_0000_0007,
            0x7_FFFF_FFFF_FFFF_FFFF_FFFF,
            i128::MAX,
            i128::MIN,
        ];
        for &a in &samples {
            for &b in &samples {
                assert_eq!(product(a, b), a.checked_mul(b), "{a} * {b}");
                let checked = Int128::from(a).mul(&Int128::from(b)).ok();
                assert_eq!(checked.map(|value| value.to_i128()), a.checked_mul(b), "{a} * {b}");
            }
        }
    }
}
