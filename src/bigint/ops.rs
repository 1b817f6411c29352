use super::BigInteger;
use crate::magnitude::math::large;
use core::iter::{Product, Sum};
use core::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
};

impl<'a> AddAssign<&'a BigInteger> for BigInteger {
    fn add_assign(&mut self, other: &BigInteger) {
        if self.negative == other.negative {
            self.add_absolute(other);
        } else {
            self.subtract_absolute(other);
        }
    }
}

impl<'a> SubAssign<&'a BigInteger> for BigInteger {
    fn sub_assign(&mut self, other: &BigInteger) {
        if self.negative == other.negative {
            self.subtract_absolute(other);
        } else {
            self.add_absolute(other);
        }
    }
}

impl<'a> MulAssign<&'a BigInteger> for BigInteger {
    fn mul_assign(&mut self, other: &BigInteger) {
        large::imul(&mut self.digits, &other.digits);
        self.negative = self.negative != other.negative;
        self.resolve_sign();
    }
}

/// Truncating division.
///
/// # Panics
///
/// Panics with the `DivisionByZero` message if `other` is zero. Use
/// [`BigInteger::checked_div`] to get the error instead.
impl<'a> DivAssign<&'a BigInteger> for BigInteger {
    fn div_assign(&mut self, other: &BigInteger) {
        match self.div_rem(other) {
            Ok((quotient, _)) => *self = quotient,
            Err(err) => panic!("{}", err),
        }
    }
}

/// Remainder with the sign of the dividend.
///
/// # Panics
///
/// Panics with the `DivisionByZero` message if `other` is zero. Use
/// [`BigInteger::checked_rem`] to get the error instead.
impl<'a> RemAssign<&'a BigInteger> for BigInteger {
    fn rem_assign(&mut self, other: &BigInteger) {
        match self.div_rem(other) {
            Ok((_, remainder)) => *self = remainder,
            Err(err) => panic!("{}", err),
        }
    }
}

// Every owned and borrowed combination forwards to the `&BigInteger`
// assigning form above.
macro_rules! forward_binop {
    ($($imp:ident $method:ident $assign_imp:ident $assign_method:ident)*) => {
        $(
            impl $assign_imp<BigInteger> for BigInteger {
                #[inline]
                fn $assign_method(&mut self, other: BigInteger) {
                    self.$assign_method(&other);
                }
            }

            impl $imp<BigInteger> for BigInteger {
                type Output = BigInteger;

                #[inline]
                fn $method(mut self, other: BigInteger) -> BigInteger {
                    self.$assign_method(&other);
                    self
                }
            }

            impl<'a> $imp<&'a BigInteger> for BigInteger {
                type Output = BigInteger;

                #[inline]
                fn $method(mut self, other: &BigInteger) -> BigInteger {
                    self.$assign_method(other);
                    self
                }
            }

            impl<'a> $imp<BigInteger> for &'a BigInteger {
                type Output = BigInteger;

                #[inline]
                fn $method(self, other: BigInteger) -> BigInteger {
                    let mut result = self.clone();
                    result.$assign_method(&other);
                    result
                }
            }

            impl<'a, 'b> $imp<&'b BigInteger> for &'a BigInteger {
                type Output = BigInteger;

                #[inline]
                fn $method(self, other: &BigInteger) -> BigInteger {
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
    Rem rem RemAssign rem_assign
}

macro_rules! native_binop {
    ($imp:ident $method:ident $assign_imp:ident $assign_method:ident: $($ty:ty)*) => {
        $(
            impl $assign_imp<$ty> for BigInteger {
                #[inline]
                fn $assign_method(&mut self, other: $ty) {
                    self.$assign_method(&BigInteger::from(other));
                }
            }

            impl $imp<$ty> for BigInteger {
                type Output = BigInteger;

                #[inline]
                fn $method(mut self, other: $ty) -> BigInteger {
                    self.$assign_method(&BigInteger::from(other));
                    self
                }
            }

            impl<'a> $imp<$ty> for &'a BigInteger {
                type Output = BigInteger;

                #[inline]
                fn $method(self, other: $ty) -> BigInteger {
                    let mut result = self.clone();
                    result.$assign_method(&BigInteger::from(other));
                    result
                }
            }

            impl $imp<BigInteger> for $ty {
                type Output = BigInteger;

                #[inline]
                fn $method(self, other: BigInteger) -> BigInteger {
                    let mut result = BigInteger::from(self);
                    result.$assign_method(&other);
                    result
                }
            }

            impl<'a> $imp<&'a BigInteger> for $ty {
                type Output = BigInteger;

                #[inline]
                fn $method(self, other: &BigInteger) -> BigInteger {
                    let mut result = BigInteger::from(self);
                    result.$assign_method(other);
                    result
                }
            }
        )*
    };
}

macro_rules! native_binops {
    ($($ty:ty)*) => {
        native_binop!(Add add AddAssign add_assign: $($ty)*);
        native_binop!(Sub sub SubAssign sub_assign: $($ty)*);
        native_binop!(Mul mul MulAssign mul_assign: $($ty)*);
        native_binop!(Div div DivAssign div_assign: $($ty)*);
        native_binop!(Rem rem RemAssign rem_assign: $($ty)*);
    };
}

native_binops!(i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize);

impl Neg for BigInteger {
    type Output = BigInteger;

    #[inline]
    fn neg(mut self) -> BigInteger {
        self.invert_sign();
        self
    }
}

impl<'a> Neg for &'a BigInteger {
    type Output = BigInteger;

    #[inline]
    fn neg(self) -> BigInteger {
        -self.clone()
    }
}

impl Sum for BigInteger {
    fn sum<I: Iterator<Item = BigInteger>>(iter: I) -> Self {
        iter.fold(BigInteger::zero(), |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a BigInteger> for BigInteger {
    fn sum<I: Iterator<Item = &'a BigInteger>>(iter: I) -> Self {
        iter.fold(BigInteger::zero(), |acc, x| acc + x)
    }
}

impl Product for BigInteger {
    fn product<I: Iterator<Item = BigInteger>>(iter: I) -> Self {
        iter.fold(BigInteger::one(), |acc, x| acc * x)
    }
}

impl<'a> Product<&'a BigInteger> for BigInteger {
    fn product<I: Iterator<Item = &'a BigInteger>>(iter: I) -> Self {
        iter.fold(BigInteger::one(), |acc, x| acc * x)
    }
}
