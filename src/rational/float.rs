//! Conversion to `f64` by binary exponent search.
//!
//! The conversion looks for the smallest `e` in `[-1024, 1074]` for which
//! `|n| * 2^e / d`, truncated, reaches `2^52`. That truncated integer is the
//! mantissa with its hidden bit set, `-e` is the binary exponent, and the
//! float is assembled directly from its bit fields. When no such `e` exists
//! the value is denormal and the mantissa is read at `e = 1074`. Truncation
//! makes the result the nearest `f64` at or below the exact magnitude.

use super::Rational;
use crate::bigint::BigInteger;
use crate::error::{Error, Result};
use std::sync::OnceLock;

// CONSTANTS
// ---------

const MANTISSA_SIZE: i32 = 52;
const EXPONENT_BIAS: i32 = 0x3FF + MANTISSA_SIZE;
const DENORMAL_EXPONENT: i32 = 1 - EXPONENT_BIAS;
const MAX_EXPONENT: i32 = 0x7FF - EXPONENT_BIAS;
const SIGN_MASK: u64 = 0x8000000000000000;
const HIDDEN_BIT_MASK: u64 = 0x0010000000000000;
const MANTISSA_MASK: u64 = 0x000FFFFFFFFFFFFF;

/// Range of the binary exponent search. At the low end every finite `f64`
/// scales below `2^52`, at the high end the smallest denormal scales to 1.
const SEARCH_LOW: i32 = -1024;
const SEARCH_HIGH: i32 = -DENORMAL_EXPONENT;

/// `2^52` as a `BigInteger`, built once.
fn mantissa_bound() -> &'static BigInteger {
    static BOUND: OnceLock<BigInteger> = OnceLock::new();
    BOUND.get_or_init(|| BigInteger::from(HIDDEN_BIT_MASK))
}

/// Unpacked float: the magnitude is `mant * 2^exp`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct ExtendedFloat {
    mant: u64,
    exp: i32,
}

impl ExtendedFloat {
    /// Move the mantissa up to the hidden bit, as far as the exponent range
    /// allows. Stopping early leaves a denormal.
    fn normalize(&mut self) {
        if self.mant == 0 {
            return;
        }
        while self.mant & HIDDEN_BIT_MASK == 0 && self.exp > DENORMAL_EXPONENT {
            self.mant <<= 1;
            self.exp -= 1;
        }
    }

    /// Export to a native float, or `None` if the magnitude is infinite.
    fn into_f64(self, negative: bool) -> Option<f64> {
        let sign = if negative { SIGN_MASK } else { 0 };
        if self.mant == 0 || self.exp < DENORMAL_EXPONENT {
            // sub-denormal, underflow
            Some(f64::from_bits(sign))
        } else if self.exp >= MAX_EXPONENT {
            None
        } else {
            let exp = if self.exp == DENORMAL_EXPONENT && self.mant & HIDDEN_BIT_MASK == 0 {
                0
            } else {
                (self.exp + EXPONENT_BIAS) as u64
            };
            let bits = sign | exp << MANTISSA_SIZE | self.mant & MANTISSA_MASK;
            Some(f64::from_bits(bits))
        }
    }
}

impl Rational {
    /// `|numerator| * 2^shift / denominator`, truncated.
    fn scaled(&self, shift: i32) -> BigInteger {
        let power = BigInteger::from(2u32).pow(shift.unsigned_abs() as usize);
        let magnitude = self.numerator.abs();
        let magnitude = if shift >= 0 {
            magnitude * power
        } else {
            magnitude.div_rem_nonzero(&power).0
        };
        magnitude.div_rem_nonzero(&self.denominator).0
    }

    /// Converts to the nearest `f64` at or below the exact magnitude.
    ///
    /// Fails with `CastOverflow`, carrying the integer part, above
    /// `f64::MAX`. Magnitudes under `2^-1022` become denormals with fewer
    /// mantissa bits, and anything under the smallest denormal becomes zero.
    ///
    /// ```
    /// use longint::Rational;
    ///
    /// let x = Rational::new(7.into(), 5.into()).unwrap();
    /// assert_eq!(x.to_f64().unwrap(), 1.4);
    ///
    /// let huge: Rational = "1000".parse::<Rational>().unwrap();
    /// assert_eq!(huge.to_f64().unwrap(), 1000.0);
    /// ```
    pub fn to_f64(&self) -> Result<f64> {
        if self.is_zero() {
            return Ok(0.0);
        }

        let bound = mantissa_bound();
        if self.scaled(SEARCH_LOW) >= *bound {
            return Err(self.f64_overflow());
        }

        let exponent = if self.scaled(SEARCH_HIGH) < *bound {
            SEARCH_HIGH
        } else {
            // Invariant: scaled(low) < bound <= scaled(high).
            let (mut low, mut high) = (SEARCH_LOW, SEARCH_HIGH);
            while high - low > 1 {
                let mid = low + (high - low) / 2;
                if self.scaled(mid) >= *bound {
                    high = mid;
                } else {
                    low = mid;
                }
            }
            high
        };
        tracing::debug!(exponent, "binary exponent of f64 conversion");

        let mant = u64::try_from(&self.scaled(exponent))?;
        let mut fp = ExtendedFloat {
            mant,
            exp: -exponent,
        };
        fp.normalize();
        fp.into_f64(self.is_negative())
            .ok_or_else(|| self.f64_overflow())
    }

    #[cold]
    fn f64_overflow(&self) -> Error {
        Error::cast_overflow(self.trunc(), "f64")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ratio(n: i64, d: i64) -> Rational {
        Rational::new(n.into(), d.into()).unwrap()
    }

    #[test]
    fn into_f64_test() {
        let fp = ExtendedFloat { mant: HIDDEN_BIT_MASK, exp: -MANTISSA_SIZE };
        assert_eq!(fp.into_f64(false), Some(1.0));
        assert_eq!(fp.into_f64(true), Some(-1.0));

        // Smallest denormal.
        let fp = ExtendedFloat { mant: 1, exp: DENORMAL_EXPONENT };
        assert_eq!(fp.into_f64(false), Some(f64::from_bits(1)));

        // Largest finite and the first infinite exponent.
        let fp = ExtendedFloat { mant: (1 << 53) - 1, exp: MAX_EXPONENT - 1 };
        assert_eq!(fp.into_f64(false), Some(f64::MAX));
        let fp = ExtendedFloat { mant: HIDDEN_BIT_MASK, exp: MAX_EXPONENT };
        assert_eq!(fp.into_f64(false), None);
    }

    #[test]
    fn normalize_test() {
        let mut fp = ExtendedFloat { mant: 1, exp: 0 };
        fp.normalize();
        assert_eq!(fp, ExtendedFloat { mant: HIDDEN_BIT_MASK, exp: -52 });

        // Stops at the denormal exponent.
        let mut fp = ExtendedFloat { mant: 1, exp: DENORMAL_EXPONENT + 3 };
        fp.normalize();
        assert_eq!(fp, ExtendedFloat { mant: 8, exp: DENORMAL_EXPONENT });
    }

    #[test]
    fn small_fractions_test() {
        assert_eq!(ratio(7, 5).to_f64().unwrap(), 1.4);
        assert_eq!(ratio(-3, 5).to_f64().unwrap(), -0.6);
        assert_eq!(ratio(1, 3).to_f64().unwrap(), 1.0 / 3.0);
        assert_eq!(ratio(1, 1024).to_f64().unwrap(), 1.0 / 1024.0);
        assert_eq!(Rational::zero().to_f64().unwrap(), 0.0);
    }

    #[test]
    fn truncates_toward_zero_test() {
        // The nearest f64 to 0.1 lies above it; truncation picks the one below.
        assert_eq!(ratio(1, 10).to_f64().unwrap(), f64::from_bits(0x3FB9999999999999));
        assert_eq!(ratio(-1, 10).to_f64().unwrap(), -f64::from_bits(0x3FB9999999999999));

        let x = Rational::from(BigInteger::from(u64::MAX));
        assert_eq!(x.to_f64().unwrap(), 18446744073709549568.0);
    }

    #[test]
    fn extremes_test() {
        let max: BigInteger = format!("{:.0}", f64::MAX).parse().unwrap();
        assert_eq!(Rational::from(max.clone()).to_f64().unwrap(), f64::MAX);

        let err = Rational::from(max * 2).to_f64().unwrap_err();
        assert!(err.is_cast());

        let tiny = Rational::new(1.into(), BigInteger::from(2).pow(1000)).unwrap();
        assert_eq!(tiny.to_f64().unwrap(), f64::from_bits(23 << 52));

        // Denormals: 2^-1030, 3 * 2^-1074 and the smallest one.
        let denormal = Rational::new(1.into(), BigInteger::from(2).pow(1030)).unwrap();
        assert_eq!(denormal.to_f64().unwrap(), f64::from_bits(1 << 44));
        let denormal = Rational::new(3.into(), BigInteger::from(2).pow(1074)).unwrap();
        assert_eq!(denormal.to_f64().unwrap(), f64::from_bits(3));
        let denormal = Rational::new((-7).into(), BigInteger::from(2).pow(1076)).unwrap();
        assert_eq!(denormal.to_f64().unwrap(), -f64::from_bits(1));

        let below = Rational::new(1.into(), BigInteger::from(2).pow(1100)).unwrap();
        assert_eq!(below.to_f64().unwrap(), 0.0);
    }
}
