//! Exact fractions over `BigInteger`.

use crate::bigint::{gcd, BigInteger};
use crate::error::{Error, Result};
use core::cmp::Ordering;
use core::fmt::{self, Debug, Display};
use core::iter::{Product, Sum};
use core::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign,
};
use core::str::FromStr;

mod decimal;
mod float;

/// A fraction kept in lowest terms with a positive denominator.
///
/// Because the representation is canonical, the derived `Eq` and `Hash` agree
/// with numeric equality.
///
/// ```
/// use longint::Rational;
///
/// let third = Rational::new(1.into(), 3.into()).unwrap();
/// let sixth = Rational::new(1.into(), 6.into()).unwrap();
/// assert_eq!(third + sixth, Rational::new(1.into(), 2.into()).unwrap());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Rational {
    numerator: BigInteger,
    denominator: BigInteger,
}

impl Rational {
    /// Builds `numerator / denominator` in lowest terms.
    ///
    /// Fails with `DivisionByZero`, carrying the numerator, when the
    /// denominator is zero.
    pub fn new(numerator: BigInteger, denominator: BigInteger) -> Result<Rational> {
        if denominator.is_zero() {
            return Err(Error::division_by_zero(numerator));
        }
        let mut value = Rational {
            numerator,
            denominator,
        };
        value.reduct();
        Ok(value)
    }

    /// The value zero.
    pub fn zero() -> Rational {
        Rational::from(BigInteger::zero())
    }

    /// The value one.
    pub fn one() -> Rational {
        Rational::from(BigInteger::one())
    }

    /// The numerator, which carries the sign.
    #[inline]
    pub fn numerator(&self) -> &BigInteger {
        &self.numerator
    }

    /// The denominator, always positive.
    #[inline]
    pub fn denominator(&self) -> &BigInteger {
        &self.denominator
    }

    /// Splits into `(numerator, denominator)`.
    pub fn into_parts(self) -> (BigInteger, BigInteger) {
        (self.numerator, self.denominator)
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.numerator.is_negative()
    }

    /// True when the denominator is one.
    #[inline]
    pub fn is_integer(&self) -> bool {
        self.denominator == 1
    }

    /// The absolute value.
    pub fn abs(&self) -> Rational {
        Rational {
            numerator: self.numerator.abs(),
            denominator: self.denominator.clone(),
        }
    }

    /// The integer part, truncated toward zero.
    pub fn trunc(&self) -> BigInteger {
        self.numerator.div_rem_nonzero(&self.denominator).0
    }

    /// Brings the fraction to lowest terms with a positive denominator.
    fn reduct(&mut self) {
        let divisor = gcd(&self.numerator, &self.denominator);
        if divisor != 1 {
            self.numerator = self.numerator.div_rem_nonzero(&divisor).0;
            self.denominator = self.denominator.div_rem_nonzero(&divisor).0;
        }
        if self.denominator.is_negative() {
            self.numerator.invert_sign();
            self.denominator.invert_sign();
        }
    }

    /// `1 / self`, or `DivisionByZero` when `self` is zero.
    pub fn recip(&self) -> Result<Rational> {
        Rational::new(self.denominator.clone(), self.numerator.clone())
    }

    /// `self / other`, or `DivisionByZero` carrying `self`'s numerator when
    /// `other` is zero.
    pub fn checked_div(&self, other: &Rational) -> Result<Rational> {
        let mut result = self.clone();
        result.try_div_assign(other)?;
        Ok(result)
    }

    fn try_div_assign(&mut self, other: &Rational) -> Result<()> {
        if other.is_zero() {
            return Err(Error::division_by_zero(self.numerator.clone()));
        }
        self.numerator *= &other.denominator;
        self.denominator *= &other.numerator;
        self.reduct();
        Ok(())
    }

    /// Parses `"n"` or `"n/d"`.
    pub(crate) fn parse_decimal(bytes: &[u8]) -> Result<Rational> {
        match memchr::memchr(b'/', bytes) {
            None => BigInteger::parse_decimal(bytes).map(Rational::from),
            Some(slash) => {
                let numerator = BigInteger::parse_decimal(&bytes[..slash])
                    .map_err(|err| Error::invalid_input(bytes, err.column()))?;
                // Positions inside the denominator are shifted past the slash.
                let denominator = BigInteger::parse_decimal(&bytes[slash + 1..])
                    .map_err(|err| Error::invalid_input(bytes, slash + 1 + err.column()))?;
                Rational::new(numerator, denominator)
            }
        }
    }
}

impl Default for Rational {
    fn default() -> Self {
        Rational::zero()
    }
}

impl From<BigInteger> for Rational {
    fn from(numerator: BigInteger) -> Self {
        Rational {
            numerator,
            denominator: BigInteger::one(),
        }
    }
}

impl<'a> From<&'a BigInteger> for Rational {
    fn from(numerator: &BigInteger) -> Self {
        Rational::from(numerator.clone())
    }
}

macro_rules! from_native {
    ($($ty:ty)*) => {
        $(
            impl From<$ty> for Rational {
                #[inline]
                fn from(value: $ty) -> Self {
                    Rational::from(BigInteger::from(value))
                }
            }

            impl PartialEq<$ty> for Rational {
                fn eq(&self, other: &$ty) -> bool {
                    self.denominator == 1 && self.numerator == *other
                }
            }
        )*
    };
}

from_native!(i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize);

impl<'a> From<&'a Rational> for bool {
    /// True for every non-zero value.
    fn from(value: &Rational) -> bool {
        !value.is_zero()
    }
}

// ARITHMETIC

impl<'a> AddAssign<&'a Rational> for Rational {
    fn add_assign(&mut self, other: &Rational) {
        self.numerator *= &other.denominator;
        self.numerator += &other.numerator * &self.denominator;
        self.denominator *= &other.denominator;
        self.reduct();
    }
}

impl<'a> SubAssign<&'a Rational> for Rational {
    fn sub_assign(&mut self, other: &Rational) {
        self.numerator *= &other.denominator;
        self.numerator -= &other.numerator * &self.denominator;
        self.denominator *= &other.denominator;
        self.reduct();
    }
}

impl<'a> MulAssign<&'a Rational> for Rational {
    fn mul_assign(&mut self, other: &Rational) {
        self.numerator *= &other.numerator;
        self.denominator *= &other.denominator;
        self.reduct();
    }
}

/// # Panics
///
/// Panics with the `DivisionByZero` message if `other` is zero. Use
/// [`Rational::checked_div`] to get the error instead.
impl<'a> DivAssign<&'a Rational> for Rational {
    fn div_assign(&mut self, other: &Rational) {
        if let Err(err) = self.try_div_assign(other) {
            panic!("{}", err);
        }
    }
}

macro_rules! forward_binop {
    ($($imp:ident $method:ident $assign_imp:ident $assign_method:ident)*) => {
        $(
            impl $assign_imp<Rational> for Rational {
                #[inline]
                fn $assign_method(&mut self, other: Rational) {
                    self.$assign_method(&other);
                }
            }

            impl $imp<Rational> for Rational {
                type Output = Rational;

                #[inline]
                fn $method(mut self, other: Rational) -> Rational {
                    self.$assign_method(&other);
                    self
                }
            }

            impl<'a> $imp<&'a Rational> for Rational {
                type Output = Rational;

                #[inline]
                fn $method(mut self, other: &Rational) -> Rational {
                    self.$assign_method(other);
                    self
                }
            }

            impl<'a, 'b> $imp<&'b Rational> for &'a Rational {
                type Output = Rational;

                #[inline]
                fn $method(self, other: &Rational) -> Rational {
                    let mut result = self.clone();
                    result.$assign_method(other);
                    result
                }
            }
        )*
    };
}

forward_binop! {
    Add add AddAssign add_assign
    Sub sub SubAssign sub_assign
    Mul mul MulAssign mul_assign
    Div div DivAssign div_assign
}

impl Neg for Rational {
    type Output = Rational;

    fn neg(mut self) -> Rational {
        self.numerator.invert_sign();
        self
    }
}

impl<'a> Neg for &'a Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        -self.clone()
    }
}

impl Sum for Rational {
    fn sum<I: Iterator<Item = Rational>>(iter: I) -> Self {
        iter.fold(Rational::zero(), |acc, x| acc + x)
    }
}

impl Product for Rational {
    fn product<I: Iterator<Item = Rational>>(iter: I) -> Self {
        iter.fold(Rational::one(), |acc, x| acc * x)
    }
}

// ORDERING

impl Ord for Rational {
    /// Cross-multiplies; denominators are positive so the direction holds.
    fn cmp(&self, other: &Rational) -> Ordering {
        if self.denominator == other.denominator {
            return self.numerator.cmp(&other.numerator);
        }
        let lhs = &self.numerator * &other.denominator;
        let rhs = &other.numerator * &self.denominator;
        lhs.cmp(&rhs)
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Rational) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// TEXT

impl Display for Rational {
    /// `"n"` for integers, otherwise `"n/d"`.
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        if self.denominator == 1 {
            Display::fmt(&self.numerator, formatter)
        } else {
            write!(formatter, "{}/{}", self.numerator, self.denominator)
        }
    }
}

impl Debug for Rational {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "Rational({})", self)
    }
}

impl FromStr for Rational {
    type Err = Error;

    /// ```
    /// use longint::Rational;
    ///
    /// let x: Rational = "-6/4".parse().unwrap();
    /// assert_eq!(x.to_string(), "-3/2");
    /// assert!("1/0".parse::<Rational>().unwrap_err().is_arithmetic());
    /// ```
    fn from_str(s: &str) -> Result<Rational> {
        Rational::parse_decimal(s.as_bytes())
    }
}

impl<'a> TryFrom<&'a Rational> for f64 {
    type Error = Error;

    fn try_from(value: &Rational) -> Result<f64> {
        value.to_f64()
    }
}
