//! `std::ops` operators.
//!
//! Immutable values get the full operator set. Mutable accumulators only get the `*Assign`
//! operators, which run the cumulative operation in place. Where the checked [`Arithmetic`]
//! method would return an error the operator panics, in every build profile.

use super::{
    mode::{Mode, Mutable},
    Arithmetic, Int128,
};
use crate::error::Int128Error;
use std::{iter, ops};

macro_rules! impl_arithmetic_ops {
    ($($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident;)+) => {$(
        impl<T: Into<Int128>> ops::$trait<T> for Int128 {
            type Output = Self;

            #[track_caller]
            fn $method(self, rhs: T) -> Self::Output {
                handle_error(Arithmetic::$method(&self, &rhs.into()))
            }
        }

        impl<'a, M: Mode> ops::$trait<&'a Int128<M>> for &'a Int128 {
            type Output = Int128;

            #[track_caller]
            fn $method(self, rhs: &'a Int128<M>) -> Self::Output {
                handle_error(Arithmetic::$method(self, rhs))
            }
        }

        impl<T: Into<Int128>> ops::$assign_trait<T> for Int128 {
            #[track_caller]
            fn $assign_method(&mut self, rhs: T) {
                *self = handle_error(Arithmetic::$method(&*self, &rhs.into()));
            }
        }

        impl<M: Mode> ops::$assign_trait<&Int128<M>> for Int128<Mutable> {
            #[track_caller]
            fn $assign_method(&mut self, rhs: &Int128<M>) {
                handle_error(Arithmetic::$method(self, rhs));
            }
        }

        impl<M: Mode> ops::$assign_trait<Int128<M>> for Int128<Mutable> {
            #[track_caller]
            fn $assign_method(&mut self, rhs: Int128<M>) {
                handle_error(Arithmetic::$method(self, &rhs));
            }
        }
    )+};
}

impl_arithmetic_ops! {
    Add, add, AddAssign, add_assign;
    Sub, sub, SubAssign, sub_assign;
    Mul, mul, MulAssign, mul_assign;
    Div, div, DivAssign, div_assign;
    Rem, rem, RemAssign, rem_assign;
}

macro_rules! impl_bitwise_ops {
    ($($trait:ident, $op:ident, $method:ident, $assign_trait:ident, $assign_method:ident;)+) => {$(
        impl<T: Into<Int128>> ops::$trait<T> for Int128 {
            type Output = Self;

            #[inline(always)]
            fn $method(self, rhs: T) -> Self::Output {
                Arithmetic::$op(&self, &rhs.into())
            }
        }

        impl<'a, M: Mode> ops::$trait<&'a Int128<M>> for &'a Int128 {
            type Output = Int128;

            #[inline(always)]
            fn $method(self, rhs: &'a Int128<M>) -> Self::Output {
                Arithmetic::$op(self, rhs)
            }
        }

        impl<T: Into<Int128>> ops::$assign_trait<T> for Int128 {
            #[inline(always)]
            fn $assign_method(&mut self, rhs: T) {
                *self = Arithmetic::$op(&*self, &rhs.into());
            }
        }

        impl<M: Mode> ops::$assign_trait<&Int128<M>> for Int128<Mutable> {
            #[inline(always)]
            fn $assign_method(&mut self, rhs: &Int128<M>) {
                Arithmetic::$op(self, rhs);
            }
        }
    )+};
}

impl_bitwise_ops! {
    BitAnd, and, bitand, BitAndAssign, bitand_assign;
    BitOr, or, bitor, BitOrAssign, bitor_assign;
    BitXor, xor, bitxor, BitXorAssign, bitxor_assign;
}

// `>>` is the sign-extending shift; `Arithmetic::ushr` has no operator.
macro_rules! impl_shift {
    ($($t:ty),+) => {$(
        impl ops::Shl<$t> for Int128 {
            type Output = Self;

            #[track_caller]
            fn shl(self, rhs: $t) -> Self::Output {
                handle_error(Arithmetic::shl(&self, shift_count(rhs)))
            }
        }

        impl ops::ShlAssign<$t> for Int128 {
            #[track_caller]
            fn shl_assign(&mut self, rhs: $t) {
                *self = handle_error(Arithmetic::shl(&*self, shift_count(rhs)));
            }
        }

        impl ops::ShlAssign<$t> for Int128<Mutable> {
            #[track_caller]
            fn shl_assign(&mut self, rhs: $t) {
                handle_error(Arithmetic::shl(self, shift_count(rhs)));
            }
        }

        impl ops::Shr<$t> for Int128 {
            type Output = Self;

            #[track_caller]
            fn shr(self, rhs: $t) -> Self::Output {
                handle_error(Arithmetic::shr(&self, shift_count(rhs)))
            }
        }

        impl ops::ShrAssign<$t> for Int128 {
            #[track_caller]
            fn shr_assign(&mut self, rhs: $t) {
                *self = handle_error(Arithmetic::shr(&*self, shift_count(rhs)));
            }
        }

        impl ops::ShrAssign<$t> for Int128<Mutable> {
            #[track_caller]
            fn shr_assign(&mut self, rhs: $t) {
                handle_error(Arithmetic::shr(self, shift_count(rhs)));
            }
        }
    )+};
}

impl_shift!(i32, u32, usize);

impl ops::Neg for Int128 {
    type Output = Int128;

    #[inline(always)]
    #[track_caller]
    fn neg(self) -> Self::Output {
        handle_error(Arithmetic::neg(&self))
    }
}

impl ops::Neg for &Int128 {
    type Output = Int128;

    #[inline(always)]
    #[track_caller]
    fn neg(self) -> Self::Output {
        handle_error(Arithmetic::neg(self))
    }
}

impl ops::Not for Int128 {
    type Output = Int128;

    #[inline(always)]
    fn not(self) -> Self::Output {
        Arithmetic::inv(&self)
    }
}

impl ops::Not for &Int128 {
    type Output = Int128;

    #[inline(always)]
    fn not(self) -> Self::Output {
        Arithmetic::inv(self)
    }
}

impl<T: Into<Int128>> iter::Sum<T> for Int128 {
    #[track_caller]
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = T>,
    {
        let mut acc = Int128::ZERO.mutable();
        for value in iter {
            let value: Int128 = value.into();
            acc += value;
        }
        acc.immutable()
    }
}

impl<T: Into<Int128>> iter::Product<T> for Int128 {
    #[track_caller]
    fn product<I>(iter: I) -> Self
    where
        I: Iterator<Item = T>,
    {
        let mut acc = Int128::ONE.mutable();
        for value in iter {
            let value: Int128 = value.into();
            acc *= value;
        }
        acc.immutable()
    }
}

/// Shift amounts past `i32::MAX` behave like any other count of at least 128.
#[inline(always)]
fn shift_count<T: TryInto<i32>>(count: T) -> i32 {
    count.try_into().unwrap_or(i32::MAX)
}

/// Panic with the error the checked operation reported.
#[inline(always)]
#[track_caller]
fn handle_error<T>(result: Result<T, Int128Error>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("{err}"),
    }
}
