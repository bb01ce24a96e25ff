use crate::samples;
use quadint_core::types::{Arithmetic, Int128, Mutable};
use std::{sync::Arc, thread};

#[test]
fn cumulative_results_match_immutable_results() {
    let values = samples();
    for pair in values.windows(2) {
        let (a, b) = (&pair[0].0, &pair[1].0);

        let mut acc: Int128<Mutable> = a.mutable();
        let fresh = a.mul(b);
        let in_place = acc.mul(b).map(|acc| acc.immutable());
        match (fresh, in_place) {
            (Ok(fresh), Ok(in_place)) => assert_eq!(fresh, in_place),
            (Err(fresh), Err(in_place)) => {
                assert_eq!(fresh, in_place);
                // a failed cumulative operation leaves the accumulator untouched
                assert_eq!(&acc, a);
            }
            (fresh, in_place) => panic!("modes disagree: {fresh:?} vs {in_place:?}"),
        }
    }
}

#[test]
fn accumulator_survives_failed_division() {
    let mut acc = Int128::MIN_VALUE.mutable();
    assert!(acc.div(&Int128::MINUS_ONE).unwrap_err().is_overflow());
    assert_eq!(acc, Int128::MIN_VALUE);
    assert!(acc.rem(&Int128::ZERO).unwrap_err().is_undefined());
    assert_eq!(acc, Int128::MIN_VALUE);
    acc.rem(&Int128::MINUS_ONE).unwrap();
    assert_eq!(acc, Int128::ZERO);
}

#[test]
fn immutable_values_share_across_threads() {
    let value = Arc::new(Int128::from_str_radix("-123456789012345678901234567890", 10).unwrap());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let value = Arc::clone(&value);
            thread::spawn(move || value.to_string())
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), "-123456789012345678901234567890");
    }
    assert_eq!(value.to_decimal(), "-123456789012345678901234567890");
}
