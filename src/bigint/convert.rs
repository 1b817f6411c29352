use super::BigInteger;
use crate::error::{Error, Result};
use crate::magnitude::digits;
use std::sync::OnceLock;

/// Sign and magnitude of a primitive integer.
pub(crate) trait Native: Copy {
    fn split(self) -> (bool, u128);
}

macro_rules! native_signed {
    ($($ty:ty)*) => {
        $(
            impl Native for $ty {
                #[inline]
                fn split(self) -> (bool, u128) {
                    // `unsigned_abs` covers the most negative value.
                    (self < 0, self.unsigned_abs() as u128)
                }
            }
        )*
    };
}

macro_rules! native_unsigned {
    ($($ty:ty)*) => {
        $(
            impl Native for $ty {
                #[inline]
                fn split(self) -> (bool, u128) {
                    (false, self as u128)
                }
            }
        )*
    };
}

native_signed!(i8 i16 i32 i64 i128 isize);
native_unsigned!(u8 u16 u32 u64 u128 usize);

macro_rules! from_native {
    ($($ty:ty)*) => {
        $(
            impl From<$ty> for BigInteger {
                #[inline]
                fn from(value: $ty) -> Self {
                    let (negative, magnitude) = value.split();
                    BigInteger::from_parts(digits::from_u128(magnitude), negative)
                }
            }
        )*
    };
}

from_native!(i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize);

// Each target keeps its own bounds, built on first use and shared afterwards.
macro_rules! try_from_signed {
    ($($ty:ty)*) => {
        $(
            impl<'a> TryFrom<&'a BigInteger> for $ty {
                type Error = Error;

                fn try_from(value: &BigInteger) -> Result<Self> {
                    static BOUNDS: OnceLock<(BigInteger, BigInteger)> = OnceLock::new();
                    let (min, max) = BOUNDS.get_or_init(|| {
                        (BigInteger::from(<$ty>::MIN), BigInteger::from(<$ty>::MAX))
                    });
                    if value < min || value > max {
                        return Err(Error::cast_overflow(value.clone(), stringify!($ty)));
                    }
                    let magnitude = match digits::to_u128(value.digits()) {
                        Some(magnitude) => magnitude,
                        None => return Err(Error::cast_overflow(value.clone(), stringify!($ty))),
                    };
                    // In range, so only `MIN` wraps here and negating it is exact.
                    let narrowed = magnitude as $ty;
                    Ok(if value.is_negative() {
                        narrowed.wrapping_neg()
                    } else {
                        narrowed
                    })
                }
            }

            impl TryFrom<BigInteger> for $ty {
                type Error = Error;

                #[inline]
                fn try_from(value: BigInteger) -> Result<Self> {
                    <$ty>::try_from(&value)
                }
            }
        )*
    };
}

macro_rules! try_from_unsigned {
    ($($ty:ty)*) => {
        $(
            impl<'a> TryFrom<&'a BigInteger> for $ty {
                type Error = Error;

                fn try_from(value: &BigInteger) -> Result<Self> {
                    static MAX: OnceLock<BigInteger> = OnceLock::new();
                    if value.is_negative() {
                        return Err(Error::negative_to_unsigned(value.clone(), stringify!($ty)));
                    }
                    if value > MAX.get_or_init(|| BigInteger::from(<$ty>::MAX)) {
                        return Err(Error::cast_overflow(value.clone(), stringify!($ty)));
                    }
                    match digits::to_u128(value.digits()) {
                        Some(magnitude) => Ok(magnitude as $ty),
                        None => Err(Error::cast_overflow(value.clone(), stringify!($ty))),
                    }
                }
            }

            impl TryFrom<BigInteger> for $ty {
                type Error = Error;

                #[inline]
                fn try_from(value: BigInteger) -> Result<Self> {
                    <$ty>::try_from(&value)
                }
            }
        )*
    };
}

try_from_signed!(i8 i16 i32 i64 i128 isize);
try_from_unsigned!(u8 u16 u32 u64 u128 usize);

impl<'a> From<&'a BigInteger> for bool {
    /// True for every non-zero value.
    #[inline]
    fn from(value: &BigInteger) -> bool {
        !value.is_zero()
    }
}

impl<'a> TryFrom<&'a BigInteger> for f64 {
    type Error = Error;

    fn try_from(value: &BigInteger) -> Result<f64> {
        value.to_f64()
    }
}

impl<'a> TryFrom<&'a str> for BigInteger {
    type Error = Error;

    fn try_from(text: &str) -> Result<BigInteger> {
        text.parse()
    }
}
