#![warn(missing_debug_implementations, missing_docs, rust_2018_idioms, unreachable_pub)]
#![deny(rustdoc::broken_intra_doc_links)]
#![doc(test(
    no_crate_inject,
    attr(deny(warnings, rust_2018_idioms), allow(dead_code, unused_variables))
))]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! # quadint
//!
//! Overflow-checked 128-bit two's-complement integers, built from four 32-bit quarters.
//!
//! # Quickstart
//!
//! A prelude is provided which imports all the important things for you.
//!
//! ```rust
//! use quadint::prelude::*;
//!
//! let a: Int128 = "-170141183460469231731687303715884105728".parse().unwrap();
//! assert_eq!(a, Int128::MIN_VALUE);
//!
//! // checked operations return errors instead of wrapping
//! let err = Int128::MAX_VALUE.add(&Int128::ONE).unwrap_err();
//! assert!(err.is_overflow());
//!
//! let (q, r) = Int128::from(100).div_rem(&Int128::from(9)).unwrap();
//! assert_eq!((q, r), (Int128::from(11), Int128::ONE));
//! ```
//!
//! ## Mutable accumulators
//!
//! Chained computations can run in place on a mutable accumulator instead of allocating a new
//! value per step:
//!
//! ```rust
//! use quadint::prelude::*;
//!
//! let mut acc = Int128::ONE.mutable();
//! for factor in 1..=20 {
//!     acc.mul(&Int128::from(factor)).unwrap();
//! }
//! assert_eq!(acc.immutable().to_string(), "2432902008176640000");
//! ```
//!
//! ## Text
//!
//! Values parse from and render to any radix between 2 and 36, and dump their raw bits:
//!
//! ```rust
//! use quadint::prelude::*;
//!
//! let value = Int128::from_str_radix("-ff", 16).unwrap();
//! assert_eq!(value.to_string_radix(2).unwrap(), "-11111111");
//! assert!(value.to_twos_complement_string().ends_with("_11111111111111111111111100000001"));
//! ```

/// # 128-bit integer types
///
/// Re-exports the core crate: [`types::Int128`] and its modes, [`types::Sign`], the rational
/// decomposition and the error types.
pub mod core {
    pub use quadint_core::*;
}

pub use quadint_core::{error, types};

// re-export rand to avoid potential confusion when there's rand version mismatches
#[cfg(feature = "rand")]
#[cfg_attr(docsrs, doc(cfg(feature = "rand")))]
pub use quadint_core::rand;

/// Easy import of frequently used type definitions and traits
pub mod prelude {
    pub use quadint_core::{error::*, types::*};
}
