use quadint::{
    prelude::*,
    rand::{rngs::StdRng, SeedableRng},
};

fn main() -> Result<(), Int128Error> {
    // construction and rendering
    let a = Int128::from(-255);
    let b: Int128 = "170141183460469231731687303715884105727".parse()?;
    println!("a = {a} (hex {a:#x}, radix 36 {})", a.to_string_radix(36)?);
    println!("b = {b} = MAX_VALUE: {}", b == Int128::MAX_VALUE);
    println!("a bits: {}", a.to_twos_complement_string());

    // checked arithmetic never wraps
    match b.add(&Int128::ONE) {
        Ok(sum) => println!("unexpected sum {sum}"),
        Err(err) => println!("MAX_VALUE + 1: {err}"),
    }
    let (q, r) = b.div_rem(&a)?;
    println!("b / a = {q} remainder {r}");

    // a mutable accumulator computes 30! in place
    let mut acc = Int128::ONE.mutable();
    for n in 1..=30 {
        acc.mul(&Int128::from(n))?;
    }
    println!("30! = {}", acc.immutable());

    // random values of each magnitude
    let mut rng = StdRng::seed_from_u64(2024);
    for magnitude in 1..=4 {
        let value = Int128::random_with_magnitude(&mut rng, magnitude)?;
        println!("magnitude {magnitude}: {value}");
    }

    // rational decomposition
    let parts = a.to_rational();
    println!("{a} as a rational: {parts} ({} sign)", parts.sign().as_char());
    Ok(())
}
