use super::{mode::Mode, quarters, Int128};
use crate::error::TryFromInt128Error;

const TWO_POW_64: f64 = 18_446_744_073_709_551_616.0;

impl<M: Mode> Int128<M> {
    /// The low 64 bits reinterpreted as an `i64`, like an `as` cast.
    #[inline(always)]
    pub const fn to_long(&self) -> i64 {
        self.low_u64() as i64
    }

    /// The low 32 bits reinterpreted as an `i32`, like an `as` cast.
    #[inline(always)]
    pub const fn to_int(&self) -> i32 {
        self.quarters[3] as i32
    }

    /// Approximates the value as `high * 2^64 + low` over the absolute value, then applies the
    /// sign. Precision is lost beyond 53 significant bits.
    pub fn to_double(&self) -> f64 {
        let [q1, q2, q3, q4] = quarters::unsigned_abs(self.quarters);
        let high = (u64::from(q1) << 32) | u64::from(q2);
        let low = (u64::from(q3) << 32) | u64::from(q4);
        let magnitude = high as f64 * TWO_POW_64 + low as f64;
        if self.is_negative() {
            -magnitude
        } else {
            magnitude
        }
    }

    /// Converts to the native 128-bit integer. Lossless.
    pub const fn to_i128(&self) -> i128 {
        ((self.high_i64() as i128) << 64) | self.low_u64() as i128
    }

    /// The two's-complement representation as big-endian bytes.
    pub fn to_be_bytes(&self) -> [u8; 16] {
        let mut bytes = [0; 16];
        for (chunk, word) in bytes.chunks_exact_mut(4).zip(self.quarters) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        bytes
    }

    #[inline(always)]
    const fn high_i64(&self) -> i64 {
        (((self.quarters[0] as u64) << 32) | self.quarters[1] as u64) as i64
    }

    #[inline(always)]
    const fn low_u64(&self) -> u64 {
        ((self.quarters[2] as u64) << 32) | self.quarters[3] as u64
    }
}

impl Int128 {
    /// Creates a value from its two's-complement big-endian bytes.
    pub const fn from_be_bytes(bytes: [u8; 16]) -> Self {
        Self::from_quarters(
            be_word(&bytes, 0),
            be_word(&bytes, 4),
            be_word(&bytes, 8),
            be_word(&bytes, 12),
        )
    }

    /// Converts from the native 128-bit integer. Lossless.
    pub const fn from_i128(value: i128) -> Self {
        Self::from_quarters(
            (value >> 96) as u32,
            (value >> 64) as u32,
            (value >> 32) as u32,
            value as u32,
        )
    }
}

#[inline(always)]
const fn be_word(bytes: &[u8; 16], at: usize) -> u32 {
    u32::from_be_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
}

macro_rules! impl_conversions {
    (signed: $($i:ty),+; unsigned: $($u:ty),+) => {
        $(
            impl From<$i> for Int128 {
                #[inline(always)]
                fn from(value: $i) -> Self {
                    Self::from_i64(value as i64)
                }
            }
        )+

        $(
            impl From<$u> for Int128 {
                #[inline(always)]
                fn from(value: $u) -> Self {
                    let value = value as u64;
                    Self::from_quarters(0, 0, (value >> 32) as u32, value as u32)
                }
            }
        )+

        $(
            impl<M: Mode> TryFrom<Int128<M>> for $i {
                type Error = TryFromInt128Error;

                #[inline]
                fn try_from(value: Int128<M>) -> Result<$i, Self::Error> {
                    <$i>::try_from(value.to_i128()).map_err(|_| TryFromInt128Error)
                }
            }
        )+

        $(
            impl<M: Mode> TryFrom<Int128<M>> for $u {
                type Error = TryFromInt128Error;

                #[inline]
                fn try_from(value: Int128<M>) -> Result<$u, Self::Error> {
                    <$u>::try_from(value.to_i128()).map_err(|_| TryFromInt128Error)
                }
            }
        )+
    };
}

impl_conversions!(signed: i8, i16, i32, i64, isize; unsigned: u8, u16, u32, u64, usize);

impl From<i128> for Int128 {
    #[inline(always)]
    fn from(value: i128) -> Self {
        Self::from_i128(value)
    }
}

impl<M: Mode> From<Int128<M>> for i128 {
    #[inline(always)]
    fn from(value: Int128<M>) -> Self {
        value.to_i128()
    }
}

impl<M: Mode> TryFrom<Int128<M>> for u128 {
    type Error = TryFromInt128Error;

    #[inline]
    fn try_from(value: Int128<M>) -> Result<u128, Self::Error> {
        if quarters::is_negative(value.quarters) {
            return Err(TryFromInt128Error)
        }
        Ok(value.to_i128() as u128)
    }
}

impl TryFrom<u128> for Int128 {
    type Error = TryFromInt128Error;

    #[inline]
    fn try_from(value: u128) -> Result<Self, Self::Error> {
        i128::try_from(value).map(Self::from_i128).map_err(|_| TryFromInt128Error)
    }
}

impl From<Int128<super::Mutable>> for Int128 {
    #[inline(always)]
    fn from(value: Int128<super::Mutable>) -> Self {
        value.immutable()
    }
}
