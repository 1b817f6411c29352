//! The signed arbitrary-precision integer.

use crate::error::{Error, Result};
use crate::magnitude::math::large;
use crate::magnitude::{div, Digit, DigitVec, Magnitude, BASE, DIGIT_WIDTH};
use core::cmp::Ordering;
use core::fmt::{self, Debug};
use core::mem;

mod convert;
mod ops;
mod parse;
mod partial_eq;

pub use self::parse::from_literal;
pub(crate) use self::parse::padded;

/// An integer of unbounded size.
///
/// The value is kept as a sign flag and a little-endian vector of base-1000
/// sub-digits. The representation is canonical: there are no most significant
/// zero sub-digits and zero is never negative, so the derived `Eq` and `Hash`
/// agree with numeric equality.
///
/// ```
/// use longint::BigInteger;
///
/// let a: BigInteger = "179179179179179179179179179179".parse().unwrap();
/// let b = BigInteger::from(-1_000_000_007i64);
/// let product = &a * &b;
/// assert_eq!(product.to_string(), "-179179180433433433433433433433254254253");
/// assert_eq!(&product / &b, a);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BigInteger {
    digits: DigitVec,
    negative: bool,
}

impl Magnitude for BigInteger {
    #[inline]
    fn data(&self) -> &DigitVec {
        &self.digits
    }

    #[inline]
    fn data_mut(&mut self) -> &mut DigitVec {
        &mut self.digits
    }
}

impl BigInteger {
    /// The value zero.
    pub fn zero() -> Self {
        BigInteger {
            digits: vec![0],
            negative: false,
        }
    }

    /// The value one.
    pub fn one() -> Self {
        BigInteger {
            digits: vec![1],
            negative: false,
        }
    }

    /// Builds a value from raw sub-digits, re-establishing the canonical form.
    pub(crate) fn from_parts(digits: DigitVec, negative: bool) -> Self {
        let mut value = BigInteger { digits, negative };
        value.normalize();
        value.resolve_sign();
        value
    }

    #[inline]
    pub(crate) fn digits(&self) -> &[Digit] {
        &self.digits
    }

    /// Returns true if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.is_zero_magnitude()
    }

    /// Returns true if the value is strictly below zero.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Returns true if the value is strictly above zero.
    #[inline]
    pub fn is_positive(&self) -> bool {
        !self.negative && !self.is_zero()
    }

    /// Returns `-1`, `0` or `1` according to the sign of the value.
    pub fn signum(&self) -> i32 {
        if self.negative {
            -1
        } else if self.is_zero() {
            0
        } else {
            1
        }
    }

    /// The absolute value.
    pub fn abs(&self) -> BigInteger {
        BigInteger {
            digits: self.digits.clone(),
            negative: false,
        }
    }

    /// Number of decimal digits in the magnitude. Zero has one digit.
    pub fn decimal_len(&self) -> usize {
        let top = self.digits[self.digits.len() - 1];
        let top_len = if top >= 100 {
            3
        } else if top >= 10 {
            2
        } else {
            1
        };
        (self.digits.len() - 1) * DIGIT_WIDTH + top_len
    }

    #[inline]
    pub(crate) fn invert_sign(&mut self) {
        self.negative = !self.negative;
        self.resolve_sign();
    }

    /// Forces zero to be non-negative.
    #[inline]
    fn resolve_sign(&mut self) {
        if self.is_zero_magnitude() {
            self.negative = false;
        }
    }

    // ADDITION

    pub(crate) fn add_absolute(&mut self, other: &BigInteger) {
        large::iadd(&mut self.digits, &other.digits);
    }

    /// Replaces the magnitude by `| |self| - |other| |`, flipping the sign
    /// when `other` is the larger one.
    pub(crate) fn subtract_absolute(&mut self, other: &BigInteger) {
        match self.compare_absolute(other) {
            Ordering::Less => {
                large::rsub(&mut self.digits, &other.digits);
                self.negative = !self.negative;
            }
            Ordering::Equal => {
                self.digits.clear();
                self.digits.push(0);
            }
            Ordering::Greater => large::isub(&mut self.digits, &other.digits),
        }
        self.resolve_sign();
    }

    // INCREMENT

    /// Adds one in place.
    pub fn increment(&mut self) {
        if self.is_zero() {
            self.digits[0] = 1;
        } else if self.negative {
            self.isub_small(1);
            self.resolve_sign();
        } else {
            self.iadd_small(1);
        }
    }

    /// Subtracts one in place.
    pub fn decrement(&mut self) {
        if self.is_zero() {
            self.digits[0] = 1;
            self.negative = true;
        } else if self.negative {
            self.iadd_small(1);
        } else {
            self.isub_small(1);
            self.resolve_sign();
        }
    }

    /// Adds one in place and returns the previous value.
    pub fn post_increment(&mut self) -> BigInteger {
        let old = self.clone();
        self.increment();
        old
    }

    /// Subtracts one in place and returns the previous value.
    pub fn post_decrement(&mut self) -> BigInteger {
        let old = self.clone();
        self.decrement();
        old
    }

    // SHIFT

    /// Multiplies by `1000^k`, or for negative `k` drops the `|k|` least
    /// significant base-1000 sub-digits (truncating toward zero).
    ///
    /// ```
    /// use longint::BigInteger;
    ///
    /// let mut x = BigInteger::from(-123_456);
    /// x.shift(2);
    /// assert_eq!(x, -123_456_000_000i64);
    /// x.shift(-3);
    /// assert_eq!(x, -123);
    /// x.shift(-1);
    /// assert!(x.is_zero());
    /// ```
    pub fn shift(&mut self, k: isize) {
        if k >= 0 {
            self.ishl_digits(k as usize);
        } else {
            self.ishr_digits(k.unsigned_abs());
            self.resolve_sign();
        }
    }

    // DIVISION

    /// Truncating quotient and remainder in one pass.
    ///
    /// The quotient is rounded toward zero and the remainder takes the sign
    /// of `self`, the same as the primitive `/` and `%`.
    ///
    /// ```
    /// use longint::BigInteger;
    ///
    /// let (q, r) = BigInteger::from(-7).div_rem(&BigInteger::from(2)).unwrap();
    /// assert_eq!((q, r), (BigInteger::from(-3), BigInteger::from(-1)));
    ///
    /// let err = BigInteger::from(5).div_rem(&BigInteger::zero()).unwrap_err();
    /// assert!(err.is_arithmetic());
    /// ```
    pub fn div_rem(&self, other: &BigInteger) -> Result<(BigInteger, BigInteger)> {
        if other.is_zero() {
            return Err(Error::division_by_zero(self.clone()));
        }
        Ok(self.div_rem_nonzero(other))
    }

    pub(crate) fn div_rem_nonzero(&self, other: &BigInteger) -> (BigInteger, BigInteger) {
        let (quotient, remainder) = div::divrem(&self.digits, &other.digits);
        (
            BigInteger::from_parts(quotient, self.negative != other.negative),
            BigInteger::from_parts(remainder, self.negative),
        )
    }

    /// Truncating division, or `DivisionByZero` for a zero divisor.
    pub fn checked_div(&self, other: &BigInteger) -> Result<BigInteger> {
        self.div_rem(other).map(|(quotient, _)| quotient)
    }

    /// Remainder with the sign of `self`, or `DivisionByZero` for a zero
    /// divisor.
    pub fn checked_rem(&self, other: &BigInteger) -> Result<BigInteger> {
        self.div_rem(other).map(|(_, remainder)| remainder)
    }

    // POWER

    /// Raises `self` to a non-negative native exponent.
    pub fn pow(&self, exponent: usize) -> BigInteger {
        let mut result = BigInteger::one();
        let mut base = self.clone();
        let mut exponent = exponent;
        while exponent != 0 {
            if exponent & 1 != 0 {
                result *= &base;
            }
            exponent >>= 1;
            if exponent != 0 {
                base = &base * &base;
            }
        }
        result
    }

    /// Raises `base` to an arbitrarily large exponent.
    ///
    /// The exponent is consumed one base-1000 sub-digit at a time, least
    /// significant first: the result picks up `current^d` and `current`
    /// becomes `current^1000`, both by square-and-multiply. Negative
    /// exponents follow truncating division, so only `1` and `-1` give a
    /// non-zero result and a zero base fails with `DivisionByZero`.
    ///
    /// ```
    /// use longint::BigInteger;
    ///
    /// let two = BigInteger::from(2);
    /// let e = BigInteger::from(100);
    /// assert_eq!(
    ///     BigInteger::power(&two, &e).unwrap().to_string(),
    ///     "1267650600228229401496703205376",
    /// );
    /// assert_eq!(BigInteger::power(&two, &-e).unwrap(), 0);
    /// ```
    pub fn power(base: &BigInteger, exponent: &BigInteger) -> Result<BigInteger> {
        if exponent.is_negative() {
            return if base.is_zero() {
                Err(Error::division_by_zero(BigInteger::one()))
            } else if base.digits == [1] {
                let odd = exponent.digits[0] % 2 == 1;
                Ok(if base.negative && odd {
                    BigInteger::from(-1)
                } else {
                    BigInteger::one()
                })
            } else {
                Ok(BigInteger::zero())
            };
        }

        let mut result = BigInteger::one();
        let mut current = base.clone();
        let (last, rest) = match exponent.digits.split_last() {
            Some(split) => split,
            None => return Ok(result),
        };
        for &digit in rest {
            if digit != 0 {
                result *= &current.pow(digit as usize);
            }
            current = current.pow(BASE as usize);
        }
        if *last != 0 {
            result *= &current.pow(*last as usize);
        }
        Ok(result)
    }

    /// Greatest common divisor, always non-negative.
    ///
    /// ```
    /// use longint::BigInteger;
    ///
    /// let a = BigInteger::from(-84);
    /// let b = BigInteger::from(36);
    /// assert_eq!(a.gcd(&b), 12);
    /// ```
    pub fn gcd(&self, other: &BigInteger) -> BigInteger {
        gcd(self, other)
    }

    /// Converts to the nearest `f64` at or below the magnitude, failing with
    /// `CastOverflow` beyond `f64::MAX`.
    pub fn to_f64(&self) -> Result<f64> {
        crate::Rational::from(self.clone()).to_f64()
    }
}

/// Greatest common divisor by Euclid's algorithm. The result is
/// non-negative, and `gcd(0, 0)` is 0.
pub fn gcd(a: &BigInteger, b: &BigInteger) -> BigInteger {
    let mut a = a.abs();
    let mut b = b.abs();
    while !b.is_zero() {
        let (_, remainder) = a.div_rem_nonzero(&b);
        a = mem::replace(&mut b, remainder);
    }
    a
}

impl Default for BigInteger {
    fn default() -> Self {
        BigInteger::zero()
    }
}

impl Ord for BigInteger {
    fn cmp(&self, other: &BigInteger) -> Ordering {
        match (self.negative, other.negative) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => large::compare(&self.digits, &other.digits),
            (true, true) => large::compare(&other.digits, &self.digits),
        }
    }
}

impl PartialOrd for BigInteger {
    fn partial_cmp(&self, other: &BigInteger) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Debug for BigInteger {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "BigInteger({})", self)
    }
}
