//! Unsigned magnitude kernel shared by `BigInteger` and `Rational`.
//!
//! Magnitudes are little-endian vectors of base-1000 sub-digits, so for a
//! `vec![7, 0, 1]`, `1` is the most significant sub-digit and the value is
//! `1_000_007`.

pub(crate) mod digits;
pub(crate) mod div;
pub(crate) mod fft;
pub(crate) mod math;

pub(crate) use self::digits::{Digit, DigitVec, BASE, DIGIT_WIDTH};
pub(crate) use self::math::Magnitude;

/// Shorter operands than this use schoolbook multiplication.
pub(crate) const FFT_CUTOFF: usize = 32;

/// Longest transform the multiplier runs in one piece.
///
/// Every coefficient of a product this long stays below `2^40`, far inside the
/// exactly representable integer range of an `f64`.
pub(crate) const MAX_FFT_LEN: usize = 1 << 20;
