//! Text representations: radix strings, the two's-complement dump and `std::fmt` impls.

use super::{
    mode::Mode,
    quarters::{self, Quarters, ZERO},
    Arithmetic, Int128,
};
use crate::error::{FormatErrorKind, Int128Error, Operation};
use std::{borrow::Cow, fmt, str::FromStr};

const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// A radix accepted by the text conversions, between 2 and 36 inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Radix(u32);

impl Radix {
    /// Base 2.
    pub const BINARY: Self = Self(2);
    /// Base 8.
    pub const OCTAL: Self = Self(8);
    /// Base 10, the default.
    pub const DECIMAL: Self = Self(10);
    /// Base 16.
    pub const HEXADECIMAL: Self = Self(16);

    /// Returns `None` unless `2 <= radix <= 36`.
    pub const fn new(radix: u32) -> Option<Self> {
        match radix {
            2..=36 => Some(Self(radix)),
            _ => None,
        }
    }

    /// The radix as a plain number.
    #[inline(always)]
    pub const fn get(self) -> u32 {
        self.0
    }

    fn checked(radix: u32, op: Operation) -> Result<Self, Int128Error> {
        Self::new(radix).ok_or_else(|| {
            Int128Error::invalid_argument(op, format!("radix {radix} is outside 2..=36"))
        })
    }
}

impl Default for Radix {
    fn default() -> Self {
        Self::DECIMAL
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Divides an unsigned value in place by a single word, returning the remainder.
fn short_div(value: &mut Quarters, divisor: u32) -> u32 {
    let divisor = u64::from(divisor);
    let mut remainder = 0;
    for word in value.iter_mut() {
        let current = (remainder << 32) | u64::from(*word);
        *word = (current / divisor) as u32;
        remainder = current % divisor;
    }
    remainder as u32
}

/// Renders `value` read as an unsigned integer.
fn render_unsigned(mut value: Quarters, radix: Radix) -> String {
    let mut digits = Vec::with_capacity(128);
    loop {
        let digit = short_div(&mut value, radix.get());
        digits.push(DIGITS[digit as usize]);
        if value == ZERO {
            break
        }
    }
    digits.iter().rev().map(|&digit| char::from(digit)).collect()
}

fn render(value: Quarters, radix: Radix) -> String {
    let digits = render_unsigned(quarters::unsigned_abs(value), radix);
    if quarters::is_negative(value) {
        format!("-{digits}")
    } else {
        digits
    }
}

/// Signed decimal rendering of raw quarters.
pub(crate) fn decimal(value: Quarters) -> String {
    render(value, Radix::DECIMAL)
}

impl<M: Mode> Int128<M> {
    /// The signed decimal rendering, see [`Self::to_str_radix`].
    pub fn to_decimal(&self) -> Cow<'_, str> {
        self.to_str_radix(Radix::DECIMAL)
    }

    /// The signed rendering in `radix` with lowercase digits and a leading `-` for negative
    /// values.
    ///
    /// Immutable values render each radix at most once and borrow the cached text afterwards.
    /// Mutable values render on every call.
    pub fn to_str_radix(&self, radix: Radix) -> Cow<'_, str> {
        M::rendering(&self.cache, radix, || render(self.quarters, radix))
    }

    /// Renders `self` in `radix` (2 to 36), see [`Self::to_str_radix`].
    pub fn to_string_radix(&self, radix: u32) -> Result<String, Int128Error> {
        let radix = Radix::checked(radix, Operation::Render)?;
        Ok(self.to_str_radix(radix).into_owned())
    }

    /// Renders all 128 bits as four zero-padded 32-bit binary groups, most significant first,
    /// joined by `_`.
    pub fn to_twos_complement_string(&self) -> String {
        let [q1, q2, q3, q4] = self.quarters;
        format!("{q1:032b}_{q2:032b}_{q3:032b}_{q4:032b}")
    }
}

impl Int128 {
    /// Parses an optionally signed string of digits in `radix` (2 to 36).
    ///
    /// Digits are validated before any arithmetic, so a malformed string is always a
    /// [`Int128Error::Format`] even when its digits would overflow.
    pub fn from_str_radix(src: &str, radix: u32) -> Result<Self, Int128Error> {
        let radix = Radix::checked(radix, Operation::Parse)?;
        let (negative, digits) = match src.as_bytes().first() {
            Some(b'-') => (true, &src[1..]),
            Some(b'+') => (false, &src[1..]),
            _ => (false, src),
        };
        if digits.is_empty() {
            return Err(Int128Error::format(FormatErrorKind::Empty, src, radix.get()))
        }
        let digits = digits
            .chars()
            .map(|c| c.to_digit(radix.get()))
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| Int128Error::format(FormatErrorKind::InvalidDigit, src, radix.get()))?;

        let base = Int128::from(radix.get());
        let mut acc = Int128::ZERO.mutable();
        for digit in digits {
            let digit = Int128::from(digit);
            // negative values accumulate downwards so that MIN_VALUE is reachable
            let step = acc.mul(&base).and_then(|acc| {
                if negative {
                    acc.sub(&digit)
                } else {
                    acc.add(&digit)
                }
            });
            if step.is_err() {
                return Err(Int128Error::overflow(
                    Operation::Parse,
                    format!("{src:?} in radix {radix}"),
                ))
            }
        }
        Ok(acc.immutable())
    }

    /// Parses the dump produced by [`Int128::to_twos_complement_string`].
    pub fn from_twos_complement_str(src: &str) -> Result<Self, Int128Error> {
        if src.is_empty() {
            return Err(Int128Error::format(FormatErrorKind::Empty, src, 2))
        }
        let invalid = || Int128Error::format(FormatErrorKind::InvalidDigit, src, 2);

        let mut words = ZERO;
        let mut groups = src.split('_');
        for word in words.iter_mut() {
            let group = groups.next().ok_or_else(invalid)?;
            if group.len() != 32 || !group.bytes().all(|b| b == b'0' || b == b'1') {
                return Err(invalid())
            }
            *word = u32::from_str_radix(group, 2).map_err(|_| invalid())?;
        }
        if groups.next().is_some() {
            return Err(invalid())
        }
        Ok(Self::with_quarters(words))
    }
}

impl FromStr for Int128 {
    type Err = Int128Error;

    fn from_str(src: &str) -> Result<Self, Self::Err> {
        Self::from_str_radix(src, 10)
    }
}

/// Sign-magnitude rendering shared by the `std::fmt` traits.
fn pad<M: Mode>(
    value: &Int128<M>,
    f: &mut fmt::Formatter<'_>,
    radix: Radix,
    prefix: &str,
    uppercase: bool,
) -> fmt::Result {
    let mut digits = render_unsigned(quarters::unsigned_abs(value.quarters), radix);
    if uppercase {
        digits.make_ascii_uppercase();
    }
    f.pad_integral(!value.is_negative(), prefix, &digits)
}

impl<M: Mode> fmt::Display for Int128<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let decimal = self.to_decimal();
        let (non_negative, digits) = match decimal.strip_prefix('-') {
            Some(digits) => (false, digits),
            None => (true, &*decimal),
        };
        f.pad_integral(non_negative, "", digits)
    }
}

impl<M: Mode> fmt::Debug for Int128<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl<M: Mode> fmt::LowerHex for Int128<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        pad(self, f, Radix::HEXADECIMAL, "0x", false)
    }
}

impl<M: Mode> fmt::UpperHex for Int128<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        pad(self, f, Radix::HEXADECIMAL, "0x", true)
    }
}

impl<M: Mode> fmt::Octal for Int128<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        pad(self, f, Radix::OCTAL, "0o", false)
    }
}

impl<M: Mode> fmt::Binary for Int128<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        pad(self, f, Radix::BINARY, "0b", false)
    }
}
