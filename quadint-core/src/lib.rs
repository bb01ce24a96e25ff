#![cfg_attr(docsrs, feature(doc_cfg))]
//! Overflow-checked 128-bit two's-complement integers built from four 32-bit quarters.
//!
//! _It is recommended to use the `quadint` facade crate instead of depending on this crate
//! directly._
//!
//! [`Int128`](types::Int128) reproduces the exact bit patterns of a native 128-bit signed integer
//! with 32/64-bit arithmetic only, and reports overflow instead of wrapping around. Every
//! operation is available in two modes sharing one implementation:
//!
//! ```rust
//! use quadint_core::types::{Arithmetic, Int128};
//!
//! // immutable values return a new value from every operation
//! let a = Int128::from(7);
//! assert_eq!(a.mul(&Int128::from(6))?, Int128::from(42));
//!
//! // a mutable accumulator is overwritten in place
//! let mut acc = a.mutable();
//! acc.pow(3)?.sub(&Int128::ONE)?;
//! assert_eq!(acc, Int128::from(342));
//!
//! assert!(Int128::MAX_VALUE.add(&Int128::ONE).is_err());
//! # Ok::<(), quadint_core::Int128Error>(())
//! ```
//!
//! # Features
//!
//! - `serde` (default): `Serialize`/`Deserialize` as decimal strings.
//! - `rand` (default): random values of chosen magnitude for testing.

pub mod types;

pub mod error;
pub use error::{FormatErrorKind, Int128Error, Operation, TryFromInt128Error};

// re-export rand to avoid potential confusion when there's rand version mismatches
#[cfg(feature = "rand")]
pub use rand;
