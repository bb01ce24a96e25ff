use crate::{init_tracing, samples};
use quadint_core::types::{Arithmetic, Int128};

#[test]
fn addition_matches_native() {
    init_tracing();
    let values = samples();
    for pair in values.windows(2) {
        let ((a, x), (b, y)) = (&pair[0], &pair[1]);
        assert_eq!(a.add(b).ok().map(|v| v.to_i128()), x.checked_add(*y), "{x} + {y}");
        assert_eq!(a.sub(b).ok().map(|v| v.to_i128()), x.checked_sub(*y), "{x} - {y}");
    }
}

#[test]
fn add_then_subtract_restores() {
    let values = samples();
    for pair in values.windows(2) {
        let (a, b) = (&pair[0].0, &pair[1].0);
        if let Ok(sum) = a.add(b) {
            assert_eq!(&sum.sub(b).unwrap(), a);
        }
        assert_eq!(&a.mul(&Int128::ONE).unwrap(), a);
        assert_eq!(a.mul(&Int128::ZERO).unwrap(), Int128::ZERO);
    }
}

#[test]
fn multiplication_matches_native() {
    let values = samples();
    for (i, (a, x)) in values.iter().enumerate() {
        for (b, y) in values.iter().skip(i).step_by(37) {
            assert_eq!(a.mul(b).ok().map(|v| v.to_i128()), x.checked_mul(*y), "{x} * {y}");
        }
    }
}

#[test]
fn division_matches_native() {
    let values = samples();
    for (i, (a, x)) in values.iter().enumerate() {
        for (b, y) in values.iter().skip(i).step_by(41) {
            match a.div_rem(b) {
                Ok((q, r)) => {
                    assert_eq!(q.to_i128(), x / y, "{x} / {y}");
                    assert_eq!(r.to_i128(), x % y, "{x} % {y}");
                    // truncating division law
                    assert_eq!(&q.mul(b).unwrap().add(&r).unwrap(), a);
                    assert!(r.is_zero() || r.sign() == a.sign());
                }
                Err(err) if *y == 0 => assert!(err.is_undefined()),
                Err(err) => {
                    assert!(err.is_overflow());
                    assert_eq!((*x, *y), (i128::MIN, -1));
                }
            }
        }
    }
}

#[test]
fn self_division() {
    for (a, _) in samples() {
        if a.is_zero() {
            assert!(a.div(&a).unwrap_err().is_undefined());
            assert!(a.rem(&a).unwrap_err().is_undefined());
            continue
        }
        assert_eq!(a.div(&a).unwrap(), Int128::ONE);
        assert_eq!(a.rem(&a).unwrap(), Int128::ZERO);
        assert_eq!(Int128::ZERO.div(&a).unwrap(), Int128::ZERO);
    }
}

#[test]
fn shifts_match_native() {
    for (a, x) in samples().into_iter().take(200) {
        for n in [0, 1, 5, 31, 32, 33, 64, 100, 127] {
            assert_eq!(a.shl(n).unwrap().to_i128(), x << n, "{x} << {n}");
            assert_eq!(a.shr(n).unwrap().to_i128(), x >> n, "{x} >> {n}");
            assert_eq!(a.ushr(n).unwrap().to_i128(), ((x as u128) >> n) as i128, "{x} >>> {n}");
        }
        assert_eq!(a.shl(128).unwrap(), Int128::ZERO);
        assert_eq!(a.ushr(128).unwrap(), Int128::ZERO);
        let n = a.leading_zeros() as i32;
        assert_eq!(a.shl(n).unwrap().ushr(n).unwrap(), a);
    }
}

#[test]
fn ordering_matches_native() {
    let values = samples();
    for pair in values.windows(2) {
        let ((a, x), (b, y)) = (&pair[0], &pair[1]);
        assert_eq!(a.cmp(b), x.cmp(y), "{x} <=> {y}");
        assert_eq!(a == b, x == y);
    }
}

#[test]
fn concrete_scenarios() {
    let min: Int128 = "-170141183460469231731687303715884105728".parse().unwrap();
    assert_eq!(min, Int128::MIN_VALUE);
    assert!(Int128::MAX_VALUE.add(&Int128::ONE).unwrap_err().is_overflow());
    assert!(Int128::MIN_VALUE.sub(&Int128::ONE).unwrap_err().is_overflow());
    assert!(Int128::MIN_VALUE.neg().unwrap_err().is_overflow());
    assert_eq!(Int128::from(7).mul(&Int128::from(6)).unwrap(), Int128::from(42));
    assert_eq!(
        Int128::from(100).div_rem(&Int128::from(9)).unwrap(),
        (Int128::from(11), Int128::from(1))
    );
    assert_eq!(Int128::from(1).shl(127).unwrap(), Int128::MIN_VALUE);
    assert!(Int128::from_str_radix("12a", 10).unwrap_err().is_format());
}
