use super::{mode::Mode, quarters, Int128};
use std::cmp::Ordering;

impl<M: Mode> Int128<M> {
    /// Signed comparison: differing signs decide immediately, otherwise the quarters compare as
    /// unsigned words, most significant first.
    #[inline]
    pub fn compare<N: Mode>(&self, other: &Int128<N>) -> Ordering {
        let (a, b) = (self.quarters(), other.quarters());
        match (quarters::is_negative(a), quarters::is_negative(b)) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => quarters::cmp_unsigned(a, b),
        }
    }
}

impl<M: Mode, N: Mode> PartialEq<Int128<N>> for Int128<M> {
    #[inline(always)]
    fn eq(&self, other: &Int128<N>) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl<M: Mode> Eq for Int128<M> {}

impl<M: Mode, N: Mode> PartialOrd<Int128<N>> for Int128<M> {
    #[inline(always)]
    fn partial_cmp(&self, other: &Int128<N>) -> Option<Ordering> {
        Some(self.compare(other))
    }
}

impl<M: Mode> Ord for Int128<M> {
    #[inline(always)]
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}
