//! Arbitrary-precision integers and exact fractions
//!
//! # What is in here?
//!
//! `longint` provides two value types:
//!
//! * [`BigInteger`]: a signed integer of unbounded size, stored as base-1000
//!   sub-digits. Multiplication of long operands goes through a floating
//!   point FFT, division is schoolbook long division with a binary search for
//!   each quotient sub-digit.
//! * [`Rational`]: a fraction of two `BigInteger`s, always in lowest terms
//!   with a positive denominator.
//!
//! Both types implement the usual operator traits for owned and borrowed
//! operands, compare directly against primitive integers, and read and write
//! canonical decimal text.
//!
//! # Operating on big integers
//!
//! ```
//! use longint::BigInteger;
//!
//! let mut x: BigInteger = "179179179179179179179179179179".parse().unwrap();
//! x *= 1000;
//! x += -179;
//! assert_eq!(x.to_string(), "179179179179179179179179179178821");
//!
//! let y = BigInteger::power(&BigInteger::from(2), &BigInteger::from(100)).unwrap();
//! assert_eq!(y.to_string(), "1267650600228229401496703205376");
//! ```
//!
//! Division by zero through the operators panics. The `checked_*` methods
//! return an [`Error`] instead:
//!
//! ```
//! use longint::BigInteger;
//!
//! let x = BigInteger::from(57);
//! let err = x.checked_div(&BigInteger::zero()).unwrap_err();
//! assert!(err.is_arithmetic());
//! assert_eq!(err.to_string(), "Division by zero! Trying to divide 57 by zero");
//! ```
//!
//! Casting back to a primitive fails when the value is out of range:
//!
//! ```
//! use longint::{bigint, BigInteger};
//!
//! assert_eq!(i64::try_from(&bigint!(-9000)).unwrap(), -9000);
//! assert!(u8::try_from(&bigint!(-1)).is_err());
//! assert!(i64::try_from(&bigint!(179179179179179179179179179179)).is_err());
//! ```
//!
//! # Fractions
//!
//! ```
//! use longint::Rational;
//!
//! let x: Rational = "7/5".parse().unwrap();
//! let y: Rational = "-3/5".parse().unwrap();
//! assert_eq!((&x + &y).to_string(), "4/5");
//! assert_eq!((&x * &y).as_decimal(4), "-0.8400");
//! assert_eq!(x.to_f64().unwrap(), 1.4);
//! ```
//!
//! # Reading many numbers
//!
//! [`from_reader`], [`from_str`] and [`from_slice`] return a
//! [`StreamParser`] that yields one value per whitespace-separated token,
//! with line and column information on failure.
//!
//! ```
//! use longint::BigInteger;
//!
//! let total: BigInteger = longint::from_str::<BigInteger>("1 2 3\n4")
//!     .map(Result::unwrap)
//!     .sum();
//! assert_eq!(total, 10);
//! ```
//!
//! # Serde
//!
//! Both types serialize as decimal strings, and deserialize from strings or
//! integers.
//!
//! ```
//! use longint::BigInteger;
//!
//! let x: BigInteger = serde_json::from_str("\"-123456789123456789123456789\"").unwrap();
//! assert_eq!(serde_json::to_string(&x).unwrap(), "\"-123456789123456789123456789\"");
//! let y: BigInteger = serde_json::from_str("42").unwrap();
//! assert_eq!(y, 42);
//! ```

#![doc(html_root_url = "https://docs.rs/longint/0.1.0")]
// Ignored clippy lints
#![allow(
    // digit arithmetic converts between u32, u64 and usize on purpose
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_lossless,
    // the operator impls are generated by macros
    clippy::suspicious_op_assign_impl,
    clippy::suspicious_arithmetic_impl,
)]
// Ignored clippy_pedantic lints
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::doc_markdown,
)]

extern crate alloc;
extern crate serde_core as serde;

#[macro_use]
mod macros;

mod bigint;
mod de;
pub mod error;
mod magnitude;
mod rational;
pub mod read;
mod ser;

#[doc(inline)]
pub use crate::bigint::{gcd, BigInteger};
#[doc(inline)]
pub use crate::de::{from_reader, from_slice, from_str, FromDecimal, StreamParser};
#[doc(inline)]
pub use crate::error::{Error, Result};
#[doc(inline)]
pub use crate::rational::Rational;
#[doc(inline)]
pub use crate::ser::{to_vec, to_writer, WriteDecimal};

// Not public API. Used from the expansion of `bigint!`.
#[doc(hidden)]
pub mod __private {
    pub use crate::bigint::from_literal;
}
