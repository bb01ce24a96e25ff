//! The immutable/mutable duality.
//!
//! Every operation is written once in [`Arithmetic`](super::Arithmetic) against a [`Target`]: it
//! reads the receiver's quarters, computes new ones, and hands them to [`Target::materialize`].
//! Only that last step differs between modes:
//!
//! - `&Int128<Immutable>` builds a fresh value and leaves the receiver alone.
//! - `&mut Int128<Mutable>` overwrites the receiver and returns it, so chained cumulative
//!   operations never allocate.

use super::{fmt::Radix, quarters::Quarters, Int128};
use once_cell::sync::OnceCell;
use std::{borrow::Cow, fmt, hash::Hash};

mod private {
    pub trait Sealed {}
}

/// Storage mode of an [`Int128`]. Implemented by [`Immutable`] and [`Mutable`] only.
pub trait Mode:
    private::Sealed + Clone + Copy + fmt::Debug + Default + Eq + Hash + Send + Sync + 'static
{
    /// Rendering cache carried by each value of this mode.
    type Cache: Clone + Default + fmt::Debug + Send + Sync;

    /// Returns the rendering in `radix`, invoking `render` unless a cached copy exists.
    fn rendering<'a>(
        cache: &'a Self::Cache,
        radix: Radix,
        render: impl FnOnce() -> String,
    ) -> Cow<'a, str>;
}

/// Values that never change once built. Safe to share across threads.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Immutable;

/// Accumulators whose storage is overwritten by cumulative operations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Mutable;

impl private::Sealed for Immutable {}
impl private::Sealed for Mutable {}

/// Number of radices between 2 and 36.
const RADICES: usize = 35;

/// Write-once renderings of an immutable value, one slot per radix.
///
/// The slot table is only allocated by the first rendering. Racing first renders of the same
/// radix all produce the same string, and only one of them is kept.
#[derive(Clone, Debug, Default)]
pub struct RenderCache {
    slots: OnceCell<Box<[OnceCell<Box<str>>]>>,
}

impl RenderCache {
    pub(crate) const fn new() -> Self {
        Self { slots: OnceCell::new() }
    }

    fn get_or_render(&self, radix: Radix, render: impl FnOnce() -> String) -> &str {
        let slots = self.slots.get_or_init(|| (0..RADICES).map(|_| OnceCell::new()).collect());
        slots[radix.get() as usize - 2].get_or_init(|| render().into_boxed_str())
    }
}

impl Mode for Immutable {
    type Cache = RenderCache;

    fn rendering<'a>(
        cache: &'a Self::Cache,
        radix: Radix,
        render: impl FnOnce() -> String,
    ) -> Cow<'a, str> {
        Cow::Borrowed(cache.get_or_render(radix, render))
    }
}

impl Mode for Mutable {
    type Cache = ();

    fn rendering<'a>(
        _: &'a Self::Cache,
        _: Radix,
        render: impl FnOnce() -> String,
    ) -> Cow<'a, str> {
        Cow::Owned(render())
    }
}

/// Where the result of an operation is written.
///
/// Implemented for `&Int128<Immutable>` (allocate a new value) and `&mut Int128<Mutable>`
/// (overwrite in place and hand the receiver back).
pub trait Target: private::Sealed + Sized {
    /// What an operation returns: a new value or the overwritten receiver.
    type Output;

    /// What [`Arithmetic::mutable`](super::Arithmetic::mutable) returns.
    type Mutable;

    /// The receiver's current quarters.
    fn read(&self) -> Quarters;

    /// Turns computed quarters into the operation's result.
    fn materialize(self, quarters: Quarters) -> Self::Output;

    /// A mutable view: a new copy for immutable values, the receiver itself otherwise.
    fn into_mutable(self) -> Self::Mutable;
}

impl<'a> private::Sealed for &'a Int128<Immutable> {}
impl<'a> private::Sealed for &'a mut Int128<Mutable> {}

impl<'a> Target for &'a Int128<Immutable> {
    type Output = Int128<Immutable>;
    type Mutable = Int128<Mutable>;

    #[inline(always)]
    fn read(&self) -> Quarters {
        self.quarters
    }

    #[inline(always)]
    fn materialize(self, quarters: Quarters) -> Self::Output {
        Int128::with_quarters(quarters)
    }

    #[inline(always)]
    fn into_mutable(self) -> Self::Mutable {
        Int128::with_quarters(self.quarters)
    }
}

impl<'a> Target for &'a mut Int128<Mutable> {
    type Output = &'a mut Int128<Mutable>;
    type Mutable = &'a mut Int128<Mutable>;

    #[inline(always)]
    fn read(&self) -> Quarters {
        self.quarters
    }

    #[inline(always)]
    fn materialize(self, quarters: Quarters) -> Self::Output {
        self.quarters = quarters;
        self
    }

    #[inline(always)]
    fn into_mutable(self) -> Self::Mutable {
        self
    }
}
