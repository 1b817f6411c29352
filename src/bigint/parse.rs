//! Decimal text in and out.

use super::BigInteger;
use crate::error::{Error, Result};
use crate::magnitude::{Digit, DigitVec, DIGIT_WIDTH};
use alloc::string::String;
use core::fmt::{self, Display};
use core::str::FromStr;

impl BigInteger {
    /// Parses an optional `-` followed by one or more ASCII digits.
    ///
    /// On failure the error's `column()` is the one-based index of the first
    /// offending byte.
    pub(crate) fn parse_decimal(bytes: &[u8]) -> Result<BigInteger> {
        let (negative, body) = match bytes.split_first() {
            Some((b'-', rest)) => (true, rest),
            _ => (false, bytes),
        };
        let sign_len = negative as usize;
        if body.is_empty() {
            return Err(Error::invalid_input(bytes, bytes.len() + 1));
        }
        if let Some(index) = body.iter().position(|b| !b.is_ascii_digit()) {
            return Err(Error::invalid_input(bytes, sign_len + index + 1));
        }

        // Sub-digits are cut from the right, so only the most significant one
        // may be short.
        let mut digits = DigitVec::with_capacity(body.len() / DIGIT_WIDTH + 1);
        for chunk in body.rchunks(DIGIT_WIDTH) {
            let digit = chunk
                .iter()
                .fold(0, |acc: Digit, &b| acc * 10 + (b - b'0') as Digit);
            digits.push(digit);
        }
        Ok(BigInteger::from_parts(digits, negative))
    }

    /// Appends the canonical magnitude text, without sign.
    pub(crate) fn write_magnitude(&self, out: &mut String) {
        let (top, rest) = match self.digits.split_last() {
            Some(split) => split,
            None => return,
        };
        let mut buffer = itoa::Buffer::new();
        out.push_str(buffer.format(*top));
        for &digit in rest.iter().rev() {
            out.extend(padded(digit).iter().map(|&b| b as char));
        }
    }
}

/// Three zero-padded decimal characters of a sub-digit.
#[inline]
pub(crate) fn padded(digit: Digit) -> [u8; DIGIT_WIDTH] {
    [
        b'0' + (digit / 100) as u8,
        b'0' + (digit / 10 % 10) as u8,
        b'0' + (digit % 10) as u8,
    ]
}

impl FromStr for BigInteger {
    type Err = Error;

    /// ```
    /// use longint::BigInteger;
    ///
    /// let x: BigInteger = "-000179".parse().unwrap();
    /// assert_eq!(x, -179);
    /// assert_eq!(x.to_string(), "-179");
    ///
    /// let err = "12x4".parse::<BigInteger>().unwrap_err();
    /// assert_eq!(err.column(), 3);
    /// ```
    fn from_str(s: &str) -> Result<BigInteger> {
        BigInteger::parse_decimal(s.as_bytes())
    }
}

impl Display for BigInteger {
    /// Canonical decimal text. Width, fill and `+` are honoured.
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        let mut text = String::with_capacity(self.decimal_len());
        self.write_magnitude(&mut text);
        formatter.pad_integral(!self.negative, "", &text)
    }
}

/// Backs the `bigint!` macro; panics on malformed input.
#[doc(hidden)]
pub fn from_literal(text: &str) -> BigInteger {
    let text = text.trim_matches('"');
    let digits: String = text.chars().filter(|&c| c != '_' && !c.is_whitespace()).collect();
    match BigInteger::parse_decimal(digits.as_bytes()) {
        Ok(value) => value,
        Err(err) => panic!("invalid bigint! literal: {}", err),
    }
}
