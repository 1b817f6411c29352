//! Long division of magnitudes.
//!
//! Quotient sub-digits are found most significant first. At each position
//! the divisor is aligned with the running remainder and the largest `d` in
//! `0..BASE` with `d * divisor <= window` is found by binary search, where
//! `window` is the remainder shifted right by the position. Aligning through
//! the window instead of materializing `divisor * BASE^position` keeps every
//! step proportional to the divisor length.

use super::digits::{is_zero, normalize, zero, Wide};
use super::math::{large, small};
use super::{Digit, DigitVec, BASE};
use core::cmp::Ordering;

/// Quotient and remainder of `x / y`, both normalized. `y` must be non-zero.
pub(crate) fn divrem(x: &[Digit], y: &[Digit]) -> (DigitVec, DigitVec) {
    debug_assert!(!is_zero(y));

    if y.len() > x.len() {
        return (zero(), x.to_vec());
    }
    if y.len() == 1 {
        return short_divrem(x, y[0]);
    }

    let offset = x.len() - y.len();
    tracing::trace!(dividend = x.len(), divisor = y.len(), "long division");

    let mut remainder = x.to_vec();
    let mut quotient = vec![0; offset + 1];
    let mut product = DigitVec::with_capacity(y.len() + 1);
    for position in (0..=offset).rev() {
        if remainder.len() <= position {
            continue;
        }
        let digit = search_digit(&remainder[position..], y, &mut product);
        if digit != 0 {
            small::mul_into(y, digit, &mut product);
            large::isub_impl(&mut remainder, &product, position);
        }
        quotient[position] = digit;
    }

    normalize(&mut quotient);
    (quotient, remainder)
}

/// Largest `d` in `0..BASE` with `d * y <= window`.
fn search_digit(window: &[Digit], y: &[Digit], product: &mut DigitVec) -> Digit {
    if large::less(window, y) {
        return 0;
    }

    // Invariant: lo * y <= window < hi * y.
    let (mut lo, mut hi) = (1, BASE);
    while hi - lo > 1 {
        let mid = lo + (hi - lo) / 2;
        small::mul_into(y, mid, product);
        match large::compare(product, window) {
            Ordering::Greater => hi = mid,
            Ordering::Less | Ordering::Equal => lo = mid,
        }
    }
    lo
}

/// Division by a single sub-digit.
fn short_divrem(x: &[Digit], y: Digit) -> (DigitVec, DigitVec) {
    debug_assert!(y != 0);

    let mut quotient = vec![0; x.len()];
    let mut rem: Wide = 0;
    for (qi, &xi) in quotient.iter_mut().zip(x).rev() {
        let current = rem * BASE as Wide + xi as Wide;
        *qi = (current / y as Wide) as Digit;
        rem = current % y as Wide;
    }

    normalize(&mut quotient);
    (quotient, vec![rem as Digit])
}
