//! Building-blocks for magnitude arithmetic.
//!
//! These algorithms assume little-endian order for the sub-digit buffers,
//! so for a `vec![0, 1, 2, 3]`, `3` is the most significant sub-digit, and
//! `0` is the least significant sub-digit. Every buffer handed in is
//! normalized, and every buffer handed back is normalized again.

use super::digits::{normalize, Wide};
use super::{fft, Digit, DigitVec, BASE, FFT_CUTOFF};
use core::cmp;
use core::iter;

// SCALAR
// ------

// Scalar-to-scalar operations on single sub-digits, with an explicit carry
// or borrow in `0..BASE`.

pub(crate) mod scalar {
use super::*;

// ADDITION

/// Add two sub-digits and a carry, returning the (digit, carry) pair.
#[inline]
pub fn add(x: Digit, y: Digit, carry: Digit) -> (Digit, Digit) {
    let sum = x + y + carry;
    if sum >= BASE {
        (sum - BASE, 1)
    } else {
        (sum, 0)
    }
}

/// AddAssign with carry, returning the outgoing carry.
#[inline]
pub fn iadd(x: &mut Digit, y: Digit, carry: Digit) -> Digit {
    let t = add(*x, y, carry);
    *x = t.0;
    t.1
}

// SUBTRACTION

/// Subtract a sub-digit and a borrow, returning the (digit, borrow) pair.
#[inline]
pub fn sub(x: Digit, y: Digit, borrow: Digit) -> (Digit, Digit) {
    let subtrahend = y + borrow;
    if x >= subtrahend {
        (x - subtrahend, 0)
    } else {
        (x + BASE - subtrahend, 1)
    }
}

/// SubAssign with borrow, returning the outgoing borrow.
#[inline]
pub fn isub(x: &mut Digit, y: Digit, borrow: Digit) -> Digit {
    let t = sub(*x, y, borrow);
    *x = t.0;
    t.1
}

// MULTIPLICATION

/// Multiply two sub-digits with carry.
///
/// Returns the (low, high) components.
#[inline]
pub fn mul(x: Digit, y: Digit, carry: Digit) -> (Digit, Digit) {
    // 999 * 999 + 999 fits comfortably in the wide type.
    let z = x as Wide * y as Wide + carry as Wide;
    ((z % BASE as Wide) as Digit, (z / BASE as Wide) as Digit)
}

/// MulAssign with carry, returning the outgoing carry.
#[inline]
pub fn imul(x: &mut Digit, y: Digit, carry: Digit) -> Digit {
    let t = mul(*x, y, carry);
    *x = t.0;
    t.1
}

}   // scalar

// SMALL
// -----

// Large-to-small operations, to modify a magnitude by a single sub-digit.

pub(crate) mod small {
use super::*;

// ADDITION

/// Implied AddAssign implementation for adding a sub-digit to a magnitude.
///
/// Allows us to choose a start-index in x to store, to allow incrementing
/// from a non-zero start.
#[inline]
pub fn iadd_impl(x: &mut DigitVec, y: Digit, xstart: usize) {
    if x.len() <= xstart {
        x.resize(xstart, 0);
        x.push(y);
    } else {
        let mut carry = scalar::iadd(&mut x[xstart], y, 0);

        // Ripple until the carry stops.
        let mut index = xstart + 1;
        while carry != 0 && index < x.len() {
            carry = scalar::iadd(&mut x[index], 0, carry);
            index += 1;
        }

        if carry != 0 {
            x.push(carry);
        }
    }
}

/// AddAssign a sub-digit to a magnitude.
#[inline]
pub fn iadd(x: &mut DigitVec, y: Digit) {
    iadd_impl(x, y, 0);
}

// SUBTRACTION

/// SubAssign a sub-digit from a magnitude, starting at `xstart`.
/// Does not do overflowing subtraction.
#[inline]
pub fn isub_impl(x: &mut DigitVec, y: Digit, xstart: usize) {
    debug_assert!(x.len() > xstart && (x[xstart] >= y || x.len() > xstart + 1));

    let mut borrow = scalar::isub(&mut x[xstart], y, 0);

    // Ripple until the borrow stops.
    let mut index = xstart + 1;
    while borrow != 0 && index < x.len() {
        borrow = scalar::isub(&mut x[index], 0, borrow);
        index += 1;
    }
    debug_assert_eq!(borrow, 0);
    normalize(x);
}

/// SubAssign a sub-digit from a magnitude.
#[inline]
pub fn isub(x: &mut DigitVec, y: Digit) {
    isub_impl(x, y, 0);
}

// MULTIPLICATION

/// MulAssign a sub-digit to a magnitude.
#[inline]
pub fn imul(x: &mut DigitVec, y: Digit) {
    debug_assert!(y < BASE);
    let mut carry: Digit = 0;
    for xi in x.iter_mut() {
        carry = scalar::imul(xi, y, carry);
    }

    if carry != 0 {
        x.push(carry);
    }
    if y == 0 {
        normalize(x);
    }
}

/// Mul a sub-digit to a magnitude.
#[inline]
pub fn mul(x: &[Digit], y: Digit) -> DigitVec {
    let mut z = DigitVec::with_capacity(x.len() + 1);
    mul_into(x, y, &mut z);
    z
}

/// Mul a sub-digit to a magnitude, reusing the buffer in `out`.
#[inline]
pub fn mul_into(x: &[Digit], y: Digit, out: &mut DigitVec) {
    out.clear();
    out.extend_from_slice(x);
    imul(out, y);
}

// SHIFTS

/// Shift-left `n` sub-digits, multiplying by `BASE^n`.
///
/// Zero stays zero.
#[inline]
pub fn ishl_digits(x: &mut DigitVec, n: usize) {
    if n != 0 && !(x.len() == 1 && x[0] == 0) {
        x.splice(0..0, iter::repeat(0).take(n));
    }
}

/// Shift-right `n` sub-digits, dropping the low ones.
#[inline]
pub fn ishr_digits(x: &mut DigitVec, n: usize) {
    if n >= x.len() {
        x.clear();
        x.push(0);
    } else {
        x.drain(..n);
    }
}

}   // small

// LARGE
// -----

// Large-to-large operations between two magnitudes.

pub(crate) mod large {
use super::*;

// RELATIVE OPERATORS

/// Compare `x` to `y`, in little-endian order.
#[inline]
pub fn compare(x: &[Digit], y: &[Digit]) -> cmp::Ordering {
    if x.len() > y.len() {
        cmp::Ordering::Greater
    } else if x.len() < y.len() {
        cmp::Ordering::Less
    } else {
        for (&xi, &yi) in x.iter().rev().zip(y.iter().rev()) {
            if xi > yi {
                return cmp::Ordering::Greater;
            } else if xi < yi {
                return cmp::Ordering::Less;
            }
        }
        cmp::Ordering::Equal
    }
}

/// Check if x is less than y.
#[inline]
pub fn less(x: &[Digit], y: &[Digit]) -> bool {
    compare(x, y) == cmp::Ordering::Less
}

/// Check if x is greater than or equal to y.
#[inline]
pub fn greater_equal(x: &[Digit], y: &[Digit]) -> bool {
    !less(x, y)
}

// ADDITION

/// Implied AddAssign implementation for magnitudes.
///
/// Adds `y` scaled by `BASE^xstart`, growing `x` only as far as needed.
pub fn iadd_impl(x: &mut DigitVec, y: &[Digit], xstart: usize) {
    if xstart + y.len() > x.len() {
        x.resize(xstart + y.len(), 0);
    }

    let mut carry = 0;
    for (xi, &yi) in x[xstart..].iter_mut().zip(y) {
        carry = scalar::iadd(xi, yi, carry);
    }

    if carry != 0 {
        small::iadd_impl(x, carry, y.len() + xstart);
    }
}

/// AddAssign magnitude to magnitude.
#[inline]
pub fn iadd(x: &mut DigitVec, y: &[Digit]) {
    iadd_impl(x, y, 0);
}

// SUBTRACTION

/// SubAssign `y` scaled by `BASE^xstart` from `x`.
///
/// The window `x[xstart..]` must be at least `y`.
pub fn isub_impl(x: &mut DigitVec, y: &[Digit], xstart: usize) {
    debug_assert!(x.len() >= xstart && greater_equal(&x[xstart..], y));

    let mut borrow = 0;
    for (xi, &yi) in x[xstart..].iter_mut().zip(y) {
        borrow = scalar::isub(xi, yi, borrow);
    }

    if borrow != 0 {
        small::isub_impl(x, 1, y.len() + xstart);
    } else {
        normalize(x);
    }
}

/// SubAssign magnitude from magnitude, requiring `x >= y`.
#[inline]
pub fn isub(x: &mut DigitVec, y: &[Digit]) {
    isub_impl(x, y, 0);
}

/// Reverse subtraction: stores `y - x` into `x`, requiring `y >= x`.
pub fn rsub(x: &mut DigitVec, y: &[Digit]) {
    debug_assert!(greater_equal(y, x));

    x.resize(y.len(), 0);
    let mut borrow = 0;
    for (xi, &yi) in x.iter_mut().zip(y) {
        let t = scalar::sub(yi, *xi, borrow);
        *xi = t.0;
        borrow = t.1;
    }
    debug_assert_eq!(borrow, 0);
    normalize(x);
}

// MULTIPLICATION

/// Grade-school multiplication algorithm.
///
/// One row per sub-digit of `y`, so `y` should be the shorter operand.
pub fn long_mul(x: &[Digit], y: &[Digit]) -> DigitVec {
    let mut z = small::mul(x, y[0]);
    z.resize(x.len() + y.len(), 0);

    for (i, &yi) in y[1..].iter().enumerate() {
        if yi != 0 {
            let zi = small::mul(x, yi);
            iadd_impl(&mut z, &zi, i + 1);
        }
    }

    normalize(&mut z);
    z
}

/// Mul magnitude to magnitude, picking the algorithm from the shorter length.
pub fn mul(x: &[Digit], y: &[Digit]) -> DigitVec {
    let (short, long) = if x.len() <= y.len() { (x, y) } else { (y, x) };
    if short.len() == 1 {
        small::mul(long, short[0])
    } else if short.len() <= FFT_CUTOFF {
        long_mul(long, short)
    } else {
        fft::mul(long, short)
    }
}

/// MulAssign magnitude to magnitude.
#[inline]
pub fn imul(x: &mut DigitVec, y: &[Digit]) {
    if y.len() == 1 {
        small::imul(x, y[0]);
    } else {
        *x = mul(x, y);
    }
}

}   // large

// TRAITS
// ------

/// Shared magnitude operations for the signed types.
///
/// Implementors expose their sub-digit buffer and get sign-agnostic helpers
/// that keep the buffer normalized.
pub(crate) trait Magnitude {
    /// Get access to the underlying sub-digits.
    fn data(&self) -> &DigitVec;

    /// Get mutable access to the underlying sub-digits.
    fn data_mut(&mut self) -> &mut DigitVec;

    /// Compare magnitudes, ignoring any sign.
    #[inline]
    fn compare_absolute(&self, y: &Self) -> cmp::Ordering {
        large::compare(self.data(), y.data())
    }

    #[inline]
    fn is_zero_magnitude(&self) -> bool {
        let data = self.data();
        data.len() == 1 && data[0] == 0
    }

    #[inline]
    fn normalize(&mut self) {
        normalize(self.data_mut());
    }

    /// AddAssign a sub-digit to the magnitude.
    #[inline]
    fn iadd_small(&mut self, y: Digit) {
        small::iadd(self.data_mut(), y);
    }

    /// SubAssign a sub-digit from a magnitude at least as large.
    #[inline]
    fn isub_small(&mut self, y: Digit) {
        small::isub(self.data_mut(), y);
    }

    /// Multiply by `BASE^n`.
    #[inline]
    fn ishl_digits(&mut self, n: usize) {
        small::ishl_digits(self.data_mut(), n);
    }

    /// Drop the `n` least significant sub-digits.
    #[inline]
    fn ishr_digits(&mut self, n: usize) {
        small::ishr_digits(self.data_mut(), n);
    }
}

// TESTS
// -----

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Default)]
    struct Magn {
        data: DigitVec,
    }

    impl Magnitude for Magn {
        fn data(&self) -> &DigitVec {
            &self.data
        }

        fn data_mut(&mut self) -> &mut DigitVec {
            &mut self.data
        }
    }

    fn magn(x: &[Digit]) -> Magn {
        Magn { data: x.to_vec() }
    }

    #[test]
    fn compare_test() {
        // Simple
        let x = magn(&[1]);
        let y = magn(&[2]);
        assert_eq!(x.compare_absolute(&y), cmp::Ordering::Less);
        assert_eq!(x.compare_absolute(&x), cmp::Ordering::Equal);
        assert_eq!(y.compare_absolute(&x), cmp::Ordering::Greater);

        // Check asymmetric
        let x = magn(&[5, 1]);
        let y = magn(&[999]);
        assert_eq!(x.compare_absolute(&y), cmp::Ordering::Greater);
        assert_eq!(y.compare_absolute(&x), cmp::Ordering::Less);

        // Most significant sub-digit decides.
        let x = magn(&[0, 1, 9]);
        let y = magn(&[999, 0, 9]);
        assert_eq!(x.compare_absolute(&y), cmp::Ordering::Greater);
        assert_eq!(y.compare_absolute(&x), cmp::Ordering::Less);
    }

    #[test]
    fn iadd_small_test() {
        // No carry.
        let mut x = magn(&[5]);
        x.iadd_small(7);
        assert_eq!(x.data, vec![12]);

        // Single carry, new sub-digit.
        let mut x = magn(&[999]);
        x.iadd_small(5);
        assert_eq!(x.data, vec![4, 1]);

        // Ripple carry.
        let mut x = magn(&[999, 999, 999]);
        x.iadd_small(1);
        assert_eq!(x.data, vec![0, 0, 0, 1]);

        // Offset start.
        let mut x = vec![1];
        small::iadd_impl(&mut x, 3, 2);
        assert_eq!(x, vec![1, 0, 3]);
    }

    #[test]
    fn isub_small_test() {
        let mut x = magn(&[12]);
        x.isub_small(7);
        assert_eq!(x.data, vec![5]);

        // Ripple borrow and shrink.
        let mut x = magn(&[0, 0, 1]);
        x.isub_small(1);
        assert_eq!(x.data, vec![999, 999]);

        // Down to zero.
        let mut x = magn(&[1]);
        x.isub_small(1);
        assert_eq!(x.data, vec![0]);
    }

    #[test]
    fn imul_small_test() {
        let mut x = vec![5];
        small::imul(&mut x, 7);
        assert_eq!(x, vec![35]);

        // Carry out of every sub-digit.
        let mut x = vec![999, 999];
        small::imul(&mut x, 999);
        assert_eq!(x, vec![1, 999, 998]);

        // Zero collapses.
        let mut x = vec![1, 2, 3];
        small::imul(&mut x, 0);
        assert_eq!(x, vec![0]);
    }

    #[test]
    fn shift_test() {
        let mut x = magn(&[7, 1]);
        x.ishl_digits(2);
        assert_eq!(x.data, vec![0, 0, 7, 1]);
        x.ishr_digits(3);
        assert_eq!(x.data, vec![1]);
        x.ishr_digits(5);
        assert_eq!(x.data, vec![0]);

        let mut x = magn(&[0]);
        x.ishl_digits(4);
        assert_eq!(x.data, vec![0]);
    }

    #[test]
    fn iadd_large_test() {
        let mut x = vec![999, 999];
        large::iadd(&mut x, &[1]);
        assert_eq!(x, vec![0, 0, 1]);

        let mut x = vec![1];
        large::iadd(&mut x, &[999, 999, 1]);
        assert_eq!(x, vec![0, 0, 2]);

        // Offset
        let mut x = vec![5];
        large::iadd_impl(&mut x, &[999, 1], 1);
        assert_eq!(x, vec![5, 999, 1]);
    }

    #[test]
    fn isub_large_test() {
        let mut x = vec![0, 0, 1];
        large::isub(&mut x, &[1]);
        assert_eq!(x, vec![999, 999]);

        let mut x = vec![123, 456];
        large::isub(&mut x, &[123, 456]);
        assert_eq!(x, vec![0]);

        // Windowed: 5_003_002 - 3_000 * 1000.
        let mut x = vec![2, 3, 5];
        large::isub_impl(&mut x, &[0, 3], 1);
        assert_eq!(x, vec![2, 3, 2]);
    }

    #[test]
    fn rsub_test() {
        let mut x = vec![1];
        large::rsub(&mut x, &[0, 0, 1]);
        assert_eq!(x, vec![999, 999]);

        let mut x = vec![4, 2];
        large::rsub(&mut x, &[4, 2]);
        assert_eq!(x, vec![0]);
    }

    #[test]
    fn mul_test() {
        // 999_999 * 999_999 = 999_998_000_001
        assert_eq!(large::long_mul(&[999, 999], &[999, 999]), vec![1, 0, 998, 999]);
        assert_eq!(large::mul(&[999, 999], &[999, 999]), vec![1, 0, 998, 999]);
        assert_eq!(large::mul(&[0], &[999, 999]), vec![0]);

        // (10^9 + 7)^2 = 1_000_000_014_000_000_049
        let mut x = vec![7, 0, 0, 1];
        large::imul(&mut x, &[7, 0, 0, 1]);
        assert_eq!(x, vec![49, 0, 0, 14, 0, 0, 1]);
    }
}
