//! This module contains a 128-bit signed integer built from four 32-bit quarters.
//!
//! Every operation reproduces the exact bit pattern of a two's-complement 128-bit integer using
//! only native 32/64-bit arithmetic, and reports overflow instead of wrapping around.
//!
//! Values come in two modes sharing one representation, see [`Mode`]:
//!
//! ```
//! use quadint_core::types::{Arithmetic, Int128};
//!
//! // Immutable values: every operation returns a new value.
//! let six = Int128::from(6);
//! let product = Int128::from(7).mul(&six).unwrap();
//! assert_eq!(product, Int128::from(42));
//!
//! // Mutable accumulators: cumulative operations overwrite the receiver.
//! let mut acc = Int128::ONE.mutable();
//! acc.shl(100).unwrap().add(&six).unwrap();
//! assert_eq!(acc.immutable().to_string(), "1267650600228229401496703205382");
//! ```

mod arith;
mod cmp;
mod convert;
mod div;
mod fmt;
mod mode;
mod mul;
mod ops;
pub(crate) mod quarters;
#[cfg(feature = "rand")]
mod rand;
#[cfg(feature = "serde")]
mod serde;
mod shift;

pub use self::{
    arith::Arithmetic,
    div::DivPart,
    fmt::Radix,
    mode::{Immutable, Mode, Mutable, RenderCache, Target},
    mul::MulShape,
    quarters::Quarters,
};

use super::Sign;
use std::hash::{Hash, Hasher};

/// A 128-bit two's-complement signed integer.
///
/// The value is stored as four 32-bit quarters `q1..q4`, most significant first. The sign is the
/// top bit of `q1`. `M` selects the storage mode: [`Immutable`] (the default) or [`Mutable`].
///
/// ## Diversion from standard numeric types
///
/// Arithmetic never wraps. The checked methods of [`Arithmetic`] return an
/// [`Int128Error`](crate::Int128Error), and the `std::ops` operators panic where a primitive would
/// panic in debug builds, in every build profile.
pub struct Int128<M: Mode = Immutable> {
    quarters: Quarters,
    cache: M::Cache,
}

#[allow(clippy::declare_interior_mutable_const)]
impl Int128 {
    /// Zero (additive identity) of this type.
    pub const ZERO: Self = Self::from_quarters(0, 0, 0, 0);

    /// One (multiplicative identity) of this type.
    pub const ONE: Self = Self::from_quarters(0, 0, 0, 1);

    /// Two.
    pub const TWO: Self = Self::from_quarters(0, 0, 0, 2);

    /// Ten, the default radix.
    pub const TEN: Self = Self::from_quarters(0, 0, 0, 10);

    /// Minus one.
    pub const MINUS_ONE: Self = Self::from_quarters(u32::MAX, u32::MAX, u32::MAX, u32::MAX);

    /// The minimum value which can be inhabited by this type, `-2^127`.
    pub const MIN_VALUE: Self = Self::from_quarters(0x8000_0000, 0, 0, 0);

    /// The maximum value which can be inhabited by this type, `2^127 - 1`.
    pub const MAX_VALUE: Self = Self::from_quarters(0x7FFF_FFFF, u32::MAX, u32::MAX, u32::MAX);

    /// Creates a value from four raw quarters, most significant first. The bit pattern is taken
    /// verbatim.
    #[inline(always)]
    pub const fn from_quarters(q1: u32, q2: u32, q3: u32, q4: u32) -> Self {
        Self { quarters: [q1, q2, q3, q4], cache: RenderCache::new() }
    }

    /// Sign-extends a 32-bit integer.
    #[inline(always)]
    pub const fn from_i32(value: i32) -> Self {
        let blank = if value < 0 { u32::MAX } else { 0 };
        Self::from_quarters(blank, blank, blank, value as u32)
    }

    /// Sign-extends a 64-bit integer.
    #[inline(always)]
    pub const fn from_i64(value: i64) -> Self {
        let blank = if value < 0 { u32::MAX } else { 0 };
        Self::from_quarters(blank, blank, (value >> 32) as u32, value as u32)
    }
}

impl<M: Mode> Int128<M> {
    #[inline(always)]
    pub(crate) fn with_quarters(quarters: Quarters) -> Self {
        Self { quarters, cache: M::Cache::default() }
    }

    /// The four quarters, most significant first.
    #[inline(always)]
    pub const fn quarters(&self) -> Quarters {
        self.quarters
    }

    /// Returns the sign of self.
    #[inline(always)]
    pub const fn sign(&self) -> Sign {
        Sign::from_sign_bit(quarters::is_negative(self.quarters))
    }

    /// The sign-extension filler: `0x00000000` for non-negative values, `0xFFFFFFFF` otherwise.
    #[inline(always)]
    pub const fn blank(&self) -> u32 {
        quarters::blank(self.quarters)
    }

    /// Number of trailing quarters that carry information, i.e. differ from [`Self::blank`].
    ///
    /// Ranges from 0 (every quarter is blank: `0` or `-1`) to 4.
    #[inline]
    pub fn magnitude(&self) -> u8 {
        quarters::magnitude(self.quarters)
    }

    /// Returns `true` if `self` is zero.
    #[inline(always)]
    pub fn is_zero(&self) -> bool {
        self.same_quarters(quarters::ZERO)
    }

    /// Returns `true` if `self` is strictly positive.
    #[inline(always)]
    pub fn is_positive(&self) -> bool {
        !quarters::is_negative(self.quarters) && !self.is_zero()
    }

    /// Returns `true` if `self` is strictly negative.
    #[inline(always)]
    pub const fn is_negative(&self) -> bool {
        quarters::is_negative(self.quarters)
    }

    /// Returns `-1`, `0` or `1` depending on the sign of `self`.
    #[inline]
    pub fn signum(&self) -> Int128 {
        match (self.sign(), self.is_zero()) {
            (Sign::Negative, _) => Int128::MINUS_ONE,
            (Sign::Positive, true) => Int128::ZERO,
            (Sign::Positive, false) => Int128::ONE,
        }
    }

    /// Returns the number of ones in the binary representation of `self`.
    #[inline]
    pub fn count_ones(&self) -> u32 {
        quarters::count_ones(self.quarters)
    }

    /// Returns the number of zeros in the binary representation of `self`.
    #[inline]
    pub fn count_zeros(&self) -> u32 {
        128 - self.count_ones()
    }

    /// Returns the number of leading zeros in the binary representation of `self`.
    #[inline]
    pub fn leading_zeros(&self) -> u32 {
        quarters::leading_zeros(self.quarters)
    }

    /// Returns the number of trailing zeros in the binary representation of `self`.
    #[inline]
    pub fn trailing_zeros(&self) -> u32 {
        quarters::trailing_zeros(self.quarters)
    }

    /// Return the least number of bits needed to represent the number, sign bit included for
    /// non-negative values other than zero.
    pub fn bits(&self) -> u32 {
        let unsigned_bits = 128 - quarters::leading_zeros(quarters::unsigned_abs(self.quarters));
        // `-2^k` fits in exactly as many bits as `2^k` needs unsigned.
        if self.count_zeros() == self.trailing_zeros() {
            unsigned_bits
        } else {
            unsigned_bits + 1
        }
    }

    /// Return if specific bit is set, counting from the least significant bit.
    ///
    /// # Panics
    ///
    /// If index exceeds 127.
    #[inline(always)]
    #[track_caller]
    pub const fn bit(&self, index: u32) -> bool {
        assert!(index < 128, "bit index out of range");
        quarters::bit(self.quarters, index)
    }

    /// An immutable snapshot of `self`.
    #[inline]
    pub fn immutable(&self) -> Int128 {
        Int128::with_quarters(self.quarters)
    }

    /// Exact word-for-word equality with raw quarters, used to recognise canonical constants.
    #[inline(always)]
    pub(crate) fn same_quarters(&self, other: Quarters) -> bool {
        self.quarters == other
    }
}

impl<M: Mode> Clone for Int128<M> {
    fn clone(&self) -> Self {
        Self { quarters: self.quarters, cache: self.cache.clone() }
    }
}

impl<M: Mode> Default for Int128<M> {
    fn default() -> Self {
        Self::with_quarters(quarters::ZERO)
    }
}

impl<M: Mode> Hash for Int128<M> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.quarters.hash(state);
    }
}
