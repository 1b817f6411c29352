//! Reading numbers from whitespace-separated text and from serde.

use crate::bigint::BigInteger;
use crate::error::{Error, Result};
use crate::rational::Rational;
use crate::read::{Fused, IoRead, Position, Read, SliceRead, StrRead};
use alloc::vec::Vec;
use core::fmt;
use core::iter::FusedIterator;
use core::marker::PhantomData;
use serde::de::{self, Deserialize, Deserializer, Visitor};
use std::io;

/// A number type that can be parsed from decimal text.
///
/// This trait is sealed and implemented by [`BigInteger`] and [`Rational`].
pub trait FromDecimal: Sized + private::Sealed {
    #[doc(hidden)]
    fn from_decimal(bytes: &[u8]) -> Result<Self>;
}

mod private {
    pub trait Sealed {}
}

impl private::Sealed for BigInteger {}

impl FromDecimal for BigInteger {
    fn from_decimal(bytes: &[u8]) -> Result<Self> {
        BigInteger::parse_decimal(bytes)
    }
}

impl private::Sealed for Rational {}

impl FromDecimal for Rational {
    fn from_decimal(bytes: &[u8]) -> Result<Self> {
        Rational::parse_decimal(bytes)
    }
}

//////////////////////////////////////////////////////////////////////////////

/// Iterator that parses a stream of whitespace-separated numbers.
///
/// Every token runs up to the next ASCII whitespace byte and is parsed with
/// the same rules as `FromStr`. Errors carry the line and column of the
/// offending byte. After the first error the iterator yields nothing more.
///
/// ```
/// use longint::{BigInteger, StreamParser};
///
/// let data = "100 200\n-300";
/// let stream = StreamParser::<_, BigInteger>::from_str(data);
/// let values: Vec<BigInteger> = stream.map(Result::unwrap).collect();
/// assert_eq!(values, [100, 200, -300]);
///
/// let mut stream = longint::from_str::<BigInteger>("1 2\n 3x");
/// stream.next();
/// stream.next();
/// let err = stream.next().unwrap().unwrap_err();
/// assert_eq!((err.line(), err.column()), (2, 3));
/// assert!(stream.next().is_none());
/// ```
pub struct StreamParser<R, T> {
    read: R,
    scratch: Vec<u8>,
    failed: bool,
    output: PhantomData<T>,
}

impl<R, T> StreamParser<R, T>
where
    R: Read,
    T: FromDecimal,
{
    /// Create a stream parser over any input source.
    ///
    /// Usually `from_reader`, `from_str` or `from_slice` is more convenient.
    pub fn new(read: R) -> Self {
        StreamParser {
            read,
            scratch: Vec::new(),
            failed: false,
            output: PhantomData,
        }
    }

    /// Parse the next number, failing with `EofWhileParsingValue` when only
    /// whitespace remains.
    pub fn next_value(&mut self) -> Result<T> {
        if self.failed {
            return Err(Error::eof());
        }
        let result = self.parse_token();
        if result.is_err() {
            self.failed = true;
        }
        result
    }

    fn parse_token(&mut self) -> Result<T> {
        let start = match self.skip_whitespace()? {
            Some(start) => start,
            None => return Err(Error::eof()),
        };

        self.scratch.clear();
        while let Some(ch) = self.read.peek()? {
            if ch.is_ascii_whitespace() {
                break;
            }
            self.scratch.push(ch);
            self.read.discard();
        }

        T::from_decimal(&self.scratch).map_err(|err| {
            // Errors without a column name the token as a whole.
            err.fix_position(|code, column| {
                Error::syntax(code, start.line, start.column + column.saturating_sub(1))
            })
        })
    }

    /// Position of the first byte of the next token, if there is one.
    fn skip_whitespace(&mut self) -> Result<Option<Position>> {
        while let Some(ch) = self.read.peek()? {
            if !ch.is_ascii_whitespace() {
                return Ok(Some(self.read.peek_position()));
            }
            self.read.discard();
        }
        Ok(None)
    }
}

impl<R, T> StreamParser<IoRead<R>, T>
where
    R: io::Read,
    T: FromDecimal,
{
    /// Create a stream parser from an `io::Read`.
    pub fn from_reader(reader: R) -> Self {
        StreamParser::new(IoRead::new(reader))
    }
}

impl<'a, T> StreamParser<SliceRead<'a>, T>
where
    T: FromDecimal,
{
    /// Create a stream parser from a `&[u8]`.
    pub fn from_slice(bytes: &'a [u8]) -> Self {
        StreamParser::new(SliceRead::new(bytes))
    }
}

impl<'a, T> StreamParser<StrRead<'a>, T>
where
    T: FromDecimal,
{
    /// Create a stream parser from a `&str`.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &'a str) -> Self {
        StreamParser::new(StrRead::new(s))
    }
}

impl<R, T> Iterator for StreamParser<R, T>
where
    R: Read,
    T: FromDecimal,
{
    type Item = Result<T>;

    fn next(&mut self) -> Option<Result<T>> {
        match self.next_value() {
            Ok(value) => Some(Ok(value)),
            Err(err) if err.is_eof() => None,
            Err(err) => Some(Err(err)),
        }
    }
}

impl<R, T> FusedIterator for StreamParser<R, T>
where
    R: Read + Fused,
    T: FromDecimal,
{
}

/// Parse whitespace-separated numbers from an IO stream.
///
/// Reads are issued one byte at a time; wrap slow sources in a
/// `std::io::BufReader`.
///
/// ```
/// use longint::BigInteger;
/// use std::io::Cursor;
///
/// let input = Cursor::new("179 -57");
/// let total: BigInteger = longint::from_reader::<BigInteger, _>(input)
///     .map(Result::unwrap)
///     .sum();
/// assert_eq!(total, 122);
/// ```
pub fn from_reader<T, R>(reader: R) -> StreamParser<IoRead<R>, T>
where
    T: FromDecimal,
    R: io::Read,
{
    StreamParser::from_reader(reader)
}

/// Parse whitespace-separated numbers from a string.
pub fn from_str<T>(s: &str) -> StreamParser<StrRead<'_>, T>
where
    T: FromDecimal,
{
    StreamParser::from_str(s)
}

/// Parse whitespace-separated numbers from bytes.
pub fn from_slice<T>(bytes: &[u8]) -> StreamParser<SliceRead<'_>, T>
where
    T: FromDecimal,
{
    StreamParser::from_slice(bytes)
}

//////////////////////////////////////////////////////////////////////////////

/// Accepts decimal strings and native integers.
struct DecimalVisitor<T> {
    expecting: &'static str,
    output: PhantomData<T>,
}

impl<'de, T> Visitor<'de> for DecimalVisitor<T>
where
    T: FromDecimal + From<i64> + From<u64> + From<i128> + From<u128>,
{
    type Value = T;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str(self.expecting)
    }

    #[inline]
    fn visit_i64<E>(self, value: i64) -> core::result::Result<T, E> {
        Ok(T::from(value))
    }

    #[inline]
    fn visit_u64<E>(self, value: u64) -> core::result::Result<T, E> {
        Ok(T::from(value))
    }

    #[inline]
    fn visit_i128<E>(self, value: i128) -> core::result::Result<T, E> {
        Ok(T::from(value))
    }

    #[inline]
    fn visit_u128<E>(self, value: u128) -> core::result::Result<T, E> {
        Ok(T::from(value))
    }

    fn visit_str<E>(self, value: &str) -> core::result::Result<T, E>
    where
        E: de::Error,
    {
        T::from_decimal(value.as_bytes()).map_err(de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for BigInteger {
    #[inline]
    fn deserialize<D>(deserializer: D) -> core::result::Result<BigInteger, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(DecimalVisitor {
            expecting: "an integer or a decimal string",
            output: PhantomData,
        })
    }
}

impl<'de> Deserialize<'de> for Rational {
    #[inline]
    fn deserialize<D>(deserializer: D) -> core::result::Result<Rational, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(DecimalVisitor {
            expecting: "an integer or a string of the form \"n/d\"",
            output: PhantomData,
        })
    }
}
