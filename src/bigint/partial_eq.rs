use super::convert::Native;
use super::BigInteger;
use crate::magnitude::digits;
use core::cmp::Ordering;

impl BigInteger {
    /// Compare against a primitive split into sign and magnitude, without
    /// building a `BigInteger` for it.
    fn cmp_native(&self, negative: bool, magnitude: u128) -> Ordering {
        let own = match digits::to_u128(&self.digits) {
            Some(own) => own,
            // Wider than any primitive.
            None if self.negative => return Ordering::Less,
            None => return Ordering::Greater,
        };
        match (self.negative, negative) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => own.cmp(&magnitude),
            (true, true) => magnitude.cmp(&own),
        }
    }
}

macro_rules! partialeq_numeric {
    ($($ty:ty)*) => {
        $(
            impl PartialEq<$ty> for BigInteger {
                fn eq(&self, other: &$ty) -> bool {
                    let (negative, magnitude) = other.split();
                    self.cmp_native(negative, magnitude) == Ordering::Equal
                }
            }

            impl PartialEq<BigInteger> for $ty {
                fn eq(&self, other: &BigInteger) -> bool {
                    other == self
                }
            }

            impl<'a> PartialEq<$ty> for &'a BigInteger {
                fn eq(&self, other: &$ty) -> bool {
                    **self == *other
                }
            }

            impl PartialOrd<$ty> for BigInteger {
                fn partial_cmp(&self, other: &$ty) -> Option<Ordering> {
                    let (negative, magnitude) = other.split();
                    Some(self.cmp_native(negative, magnitude))
                }
            }

            impl PartialOrd<BigInteger> for $ty {
                fn partial_cmp(&self, other: &BigInteger) -> Option<Ordering> {
                    other.partial_cmp(self).map(Ordering::reverse)
                }
            }
        )*
    };
}

partialeq_numeric!(i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize);
