//! Sub-digit storage and normalization.

use alloc::vec::Vec;

// ALIASES
// -------

/// A single base-`BASE` sub-digit, always in `0..BASE`.
pub(crate) type Digit = u32;

/// Accumulator wide enough for `Digit * Digit + carry`.
pub(crate) type Wide = u64;

/// Little-endian sub-digit buffer.
pub(crate) type DigitVec = Vec<Digit>;

/// Radix of the sub-digit vector.
pub(crate) const BASE: Digit = 1000;

/// Decimal characters held by one sub-digit.
pub(crate) const DIGIT_WIDTH: usize = 3;

// NORMALIZE
// ---------

/// Pop most-significant zero sub-digits, leaving `[0]` for a zero value.
#[inline]
pub(crate) fn normalize(x: &mut DigitVec) {
    while x.len() > 1 && x[x.len() - 1] == 0 {
        x.pop();
    }
    if x.is_empty() {
        x.push(0);
    }
}

/// Check if a normalized buffer holds zero.
#[inline]
pub(crate) fn is_zero(x: &[Digit]) -> bool {
    x.len() == 1 && x[0] == 0
}

/// Zero in normalized form.
#[inline]
pub(crate) fn zero() -> DigitVec {
    vec![0]
}

// SPLIT
// -----

/// Split a native integer into sub-digits, in little-endian order.
pub(crate) fn from_u128(mut value: u128) -> DigitVec {
    // u128::MAX has 39 decimal digits.
    let mut x = DigitVec::with_capacity(13);
    loop {
        x.push((value % BASE as u128) as Digit);
        value /= BASE as u128;
        if value == 0 {
            break;
        }
    }
    x
}

/// Reassemble sub-digits into a native integer, or `None` on overflow.
pub(crate) fn to_u128(x: &[Digit]) -> Option<u128> {
    let mut value: u128 = 0;
    for &digit in x.iter().rev() {
        value = value.checked_mul(BASE as u128)?.checked_add(digit as u128)?;
    }
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_test() {
        let mut x = vec![1, 2, 0, 0];
        normalize(&mut x);
        assert_eq!(x, vec![1, 2]);

        let mut x = vec![0, 0, 0];
        normalize(&mut x);
        assert_eq!(x, vec![0]);

        let mut x = vec![];
        normalize(&mut x);
        assert_eq!(x, vec![0]);

        // Idempotent.
        normalize(&mut x);
        assert_eq!(x, vec![0]);
    }

    #[test]
    fn split_test() {
        assert_eq!(from_u128(0), vec![0]);
        assert_eq!(from_u128(999), vec![999]);
        assert_eq!(from_u128(1_000_007), vec![7, 0, 1]);
        assert_eq!(to_u128(&[7, 0, 1]), Some(1_000_007));
        assert_eq!(to_u128(&from_u128(u128::MAX)), Some(u128::MAX));

        let mut x = from_u128(u128::MAX);
        x.push(1);
        assert_eq!(to_u128(&x), None);
    }
}
