#![cfg(feature = "rand")]

mod arithmetic;
mod modes;
mod text;

use once_cell::sync::Lazy;
use quadint_core::types::Int128;
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Number of random samples per property.
const SAMPLES: usize = 2_000;

/// Edge values every property is checked against in addition to random samples.
static EDGES: Lazy<Vec<i128>> = Lazy::new(|| {
    let mut edges = vec![0, 1, -1, 2, -2, 10, -10, i128::MIN, i128::MAX, i128::MIN + 1];
    for bits in [31, 32, 63, 64, 95, 96, 126] {
        let power = 1i128 << bits;
        edges.extend([power, -power, power - 1, -(power - 1)]);
    }
    edges
});

/// A seeded source, so failures reproduce.
fn rng() -> StdRng {
    StdRng::seed_from_u64(0x5EED_1234)
}

/// Random values of every magnitude together with their native counterparts.
fn samples() -> Vec<(Int128, i128)> {
    let mut rng = rng();
    let random = (0..SAMPLES).map(|_| {
        let value: Int128 = rng.gen();
        let native = value.to_i128();
        (value, native)
    });
    EDGES.iter().map(|&native| (Int128::from(native), native)).chain(random).collect()
}

#[track_caller]
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}
