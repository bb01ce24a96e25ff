//! 128-bit integer types and the pieces they are built from.

mod int128;
pub use int128::{
    Arithmetic, DivPart, Immutable, Int128, Mode, MulShape, Mutable, Quarters, Radix, RenderCache,
    Target,
};

mod rational;
pub use rational::RationalParts;

mod sign;
pub use sign::Sign;
