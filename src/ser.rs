//! Writing numbers as decimal text and through serde.

use crate::bigint::{padded, BigInteger};
use crate::error::{Error, Result};
use crate::rational::Rational;
use alloc::vec::Vec;
use serde::ser::{Serialize, Serializer};
use std::io;

impl Serialize for BigInteger {
    /// Serializes as the canonical decimal string.
    #[inline]
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl Serialize for Rational {
    /// Serializes as `"n/d"`, or `"n"` for integers.
    #[inline]
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// A number type that can write its decimal text to a byte stream.
///
/// This trait is sealed and implemented by [`BigInteger`] and [`Rational`].
pub trait WriteDecimal: private::Sealed {
    #[doc(hidden)]
    fn write_decimal<W>(&self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write;
}

mod private {
    pub trait Sealed {}
}

impl private::Sealed for BigInteger {}

impl WriteDecimal for BigInteger {
    fn write_decimal<W>(&self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if self.is_negative() {
            writer.write_all(b"-")?;
        }
        let (top, rest) = match self.digits().split_last() {
            Some(split) => split,
            None => return writer.write_all(b"0"),
        };
        let mut buffer = itoa::Buffer::new();
        writer.write_all(buffer.format(*top).as_bytes())?;
        for &digit in rest.iter().rev() {
            writer.write_all(&padded(digit))?;
        }
        Ok(())
    }
}

impl private::Sealed for Rational {}

impl WriteDecimal for Rational {
    fn write_decimal<W>(&self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.numerator().write_decimal(writer)?;
        if !self.is_integer() {
            writer.write_all(b"/")?;
            self.denominator().write_decimal(writer)?;
        }
        Ok(())
    }
}

/// Write the canonical decimal text of a number into the IO stream.
///
/// # Errors
///
/// Fails with an `Io` error if the writer does.
///
/// ```
/// use longint::BigInteger;
///
/// let x: BigInteger = "-1000000007".parse().unwrap();
/// let mut out = Vec::new();
/// longint::to_writer(&mut out, &x).unwrap();
/// assert_eq!(out, b"-1000000007");
/// ```
#[inline]
pub fn to_writer<W, T>(mut writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + WriteDecimal,
{
    value.write_decimal(&mut writer).map_err(Error::io)
}

/// Collect the canonical decimal text of a number into a byte vector.
#[inline]
pub fn to_vec<T>(value: &T) -> Result<Vec<u8>>
where
    T: ?Sized + WriteDecimal,
{
    let mut writer = Vec::with_capacity(32);
    to_writer(&mut writer, value)?;
    Ok(writer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_display_test() {
        for text in ["0", "7", "-1000", "1000000", "179179179179179179179179179179"] {
            let x: BigInteger = text.parse().unwrap();
            assert_eq!(to_vec(&x).unwrap(), text.as_bytes());
        }
        let x: Rational = "-10/4".parse().unwrap();
        assert_eq!(to_vec(&x).unwrap(), b"-5/2");
        assert_eq!(to_vec(&Rational::from(12)).unwrap(), b"12");
    }

    struct Broken;

    impl io::Write for Broken {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "broken pipe"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn io_error_test() {
        let err = to_writer(Broken, &BigInteger::one()).unwrap_err();
        assert!(err.is_io());
        assert_eq!(err.to_string(), "broken pipe");
    }
}
