//! Convolution multiplication over complex coefficients.
//!
//! Both operands are loaded into power-of-two coefficient buffers, moved to
//! point-value form with an iterative radix-2 transform, multiplied
//! pointwise, and brought back with the inverse transform. Rounding the real
//! parts and propagating base-1000 carries recovers the exact product as long
//! as the round-off on every coefficient stays within one half, which
//! [`MAX_FFT_LEN`] guarantees.

use super::digits::{normalize, Wide};
use super::math::large;
use super::{Digit, DigitVec, BASE, MAX_FFT_LEN};
use alloc::vec::Vec;
use core::f64::consts::PI;
use num_complex::Complex64;

/// Multiply two normalized magnitudes.
pub(crate) fn mul(x: &[Digit], y: &[Digit]) -> DigitVec {
    if x.len() + y.len() > MAX_FFT_LEN {
        chunked_mul(x, y, MAX_FFT_LEN / 2)
    } else {
        convolve(x, y)
    }
}

/// Split both operands into `chunk`-long pieces and accumulate the piecewise
/// products at their offsets.
pub(crate) fn chunked_mul(x: &[Digit], y: &[Digit], chunk: usize) -> DigitVec {
    tracing::debug!(lhs = x.len(), rhs = y.len(), chunk, "chunked fft multiplication");

    let mut result = vec![0; x.len() + y.len()];
    for (i, xc) in x.chunks(chunk).enumerate() {
        for (j, yc) in y.chunks(chunk).enumerate() {
            let product = convolve(xc, yc);
            large::iadd_impl(&mut result, &product, (i + j) * chunk);
        }
    }
    normalize(&mut result);
    result
}

/// Full convolution of two sub-digit sequences, carried into base `BASE`.
fn convolve(x: &[Digit], y: &[Digit]) -> DigitVec {
    let len = (x.len() + y.len()).next_power_of_two();
    tracing::trace!(len, lhs = x.len(), rhs = y.len(), "fft convolution");

    let roots = RootTable::new(len);
    let mut fx = to_coefficients(x, len);
    let mut fy = to_coefficients(y, len);
    transform(&mut fx, &roots, false);
    transform(&mut fy, &roots, false);
    for (a, b) in fx.iter_mut().zip(&fy) {
        *a *= *b;
    }
    transform(&mut fx, &roots, true);

    from_coefficients(&fx)
}

fn to_coefficients(x: &[Digit], len: usize) -> Vec<Complex64> {
    let mut values = Vec::with_capacity(len);
    values.extend(x.iter().map(|&digit| Complex64::new(digit as f64, 0.0)));
    values.resize(len, Complex64::new(0.0, 0.0));
    values
}

/// Round each real part to the nearest integer and resolve carries.
fn from_coefficients(values: &[Complex64]) -> DigitVec {
    let mut digits = DigitVec::with_capacity(values.len() + 1);
    let mut carry: Wide = 0;
    for value in values {
        carry += (value.re + 0.5) as Wide;
        digits.push((carry % BASE as Wide) as Digit);
        carry /= BASE as Wide;
    }
    while carry != 0 {
        digits.push((carry % BASE as Wide) as Digit);
        carry /= BASE as Wide;
    }
    normalize(&mut digits);
    digits
}

// TRANSFORM
// ---------

/// Roots of unity `e^{2πik/len}` for `k < len / 2`, each from its own angle.
struct RootTable {
    roots: Vec<Complex64>,
}

impl RootTable {
    fn new(len: usize) -> Self {
        let roots = (0..len / 2)
            .map(|k| {
                let angle = 2.0 * PI * k as f64 / len as f64;
                Complex64::new(angle.cos(), angle.sin())
            })
            .collect();
        RootTable { roots }
    }

    #[inline]
    fn get(&self, index: usize, inverse: bool) -> Complex64 {
        let root = self.roots[index];
        if inverse {
            root.conj()
        } else {
            root
        }
    }
}

/// Reverses the low `bits` bits of `x`.
#[inline]
fn reverse_bits(x: usize, bits: u32) -> usize {
    x.reverse_bits() >> (usize::BITS - bits)
}

fn bit_reverse_permute(values: &mut [Complex64]) {
    let bits = values.len().trailing_zeros();
    for i in 0..values.len() {
        let j = reverse_bits(i, bits);
        if i < j {
            values.swap(i, j);
        }
    }
}

/// In-place iterative transform; `values.len()` must be a power of two of at
/// least 2.
fn transform(values: &mut [Complex64], roots: &RootTable, inverse: bool) {
    let len = values.len();
    debug_assert!(len >= 2 && len.is_power_of_two());

    bit_reverse_permute(values);

    let mut half = 1;
    while half < len {
        let stride = len / (2 * half);
        for start in (0..len).step_by(2 * half) {
            for j in 0..half {
                let w = roots.get(j * stride, inverse);
                let u = values[start + j];
                let v = values[start + j + half] * w;
                values[start + j] = u + v;
                values[start + j + half] = u - v;
            }
        }
        half *= 2;
    }

    if inverse {
        let scale = len as f64;
        for value in values.iter_mut() {
            *value /= scale;
        }
    }
}
