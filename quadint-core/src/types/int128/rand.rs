//! Random values for testing, drawn from an injected [`Rng`].

use super::{quarters::Quarters, Int128};
use crate::error::{Int128Error, Operation};
use rand::{
    distributions::{Distribution, Standard},
    Rng,
};

impl Int128 {
    /// A value drawn uniformly from all 2^128 bit patterns.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::from_quarters(rng.gen(), rng.gen(), rng.gen(), rng.gen())
    }

    /// A value with a random sign and exactly `magnitude` informative quarters (1 to 4).
    pub fn random_with_magnitude<R: Rng + ?Sized>(
        rng: &mut R,
        magnitude: u8,
    ) -> Result<Self, Int128Error> {
        if !(1..=4).contains(&magnitude) {
            return Err(Int128Error::invalid_argument(
                Operation::Random,
                format!("magnitude {magnitude} is outside 1..=4"),
            ))
        }
        Ok(Self::with_quarters(sample(rng, magnitude)))
    }
}

fn sample<R: Rng + ?Sized>(rng: &mut R, magnitude: u8) -> Quarters {
    let negative: bool = rng.gen();
    let blank = if negative { u32::MAX } else { 0 };
    let top = 4 - magnitude as usize;

    let mut value = [blank; 4];
    for word in &mut value[top + 1..] {
        *word = rng.gen();
    }
    // the top informative quarter must differ from the blank, and at full magnitude it also
    // carries the sign bit
    value[top] = loop {
        let mut word: u32 = rng.gen();
        if top == 0 {
            word = if negative { word | 0x8000_0000 } else { word & 0x7FFF_FFFF };
        }
        if word != blank {
            break word
        }
    };
    value
}

/// Samples values whose magnitude is itself uniform over 1 to 4 quarters, so small and large
/// operands are equally likely.
impl Distribution<Int128> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Int128 {
        let magnitude = rng.gen_range(1..=4);
        Int128::with_quarters(sample(rng, magnitude))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn magnitudes_are_exact() {
        let mut rng = StdRng::seed_from_u64(42);
        for magnitude in 1..=4 {
            for _ in 0..200 {
                let value = Int128::random_with_magnitude(&mut rng, magnitude).unwrap();
                assert_eq!(value.magnitude(), magnitude, "{value}");
            }
        }
    }

    #[test]
    fn both_signs_appear() {
        let mut rng = StdRng::seed_from_u64(7);
        let values: Vec<Int128> = (0..64).map(|_| rng.gen()).collect();
        assert!(values.iter().any(Int128::is_negative));
        assert!(values.iter().any(Int128::is_positive));
        assert!(values.iter().all(|value| (1..=4).contains(&value.magnitude())));
    }

    #[test]
    fn rejects_bad_magnitudes() {
        let mut rng = StdRng::seed_from_u64(1);
        for magnitude in [0, 5, u8::MAX] {
            let err = Int128::random_with_magnitude(&mut rng, magnitude).unwrap_err();
            assert!(err.is_invalid_argument());
            assert_eq!(err.operation(), Some(Operation::Random));
        }
    }

    #[test]
    fn seeded_sources_repeat() {
        let a = Int128::random(&mut StdRng::seed_from_u64(99));
        let b = Int128::random(&mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }
}
