//! Polynomial and modified Bessel function evaluation.

use crate::num::Float;

/// Relative size of a series term below which [`bessel_i0`] stops summing.
const BESSEL_TOLERANCE: f64 = 1e-17;

/// Upper bound on series terms; reached only for arguments near overflow.
const BESSEL_MAX_TERMS: usize = 500;

/// Evaluate a polynomial at `x` by Horner's rule.
///
/// `coeff[0]` is the **highest-order** coefficient and `coeff[n]` the constant
/// term, so a slice of length `n + 1` describes a degree-`n` polynomial. An
/// empty slice evaluates to `0`.
///
/// ```rust
/// use sigops::poly::polynomial;
///
/// // x^2 - 1 at x = 2
/// assert_eq!(polynomial(&[1.0f32, 0.0, -1.0], 2.0), 3.0);
/// ```
#[inline]
pub fn polynomial<T: Float>(coeff: &[T], x: T) -> T {
    coeff.iter().fold(T::zero(), |acc, &c| acc.mul_add(x, c))
}

/// Modified Bessel function of the first kind, order zero.
///
/// Sums the power series `Σ ((x/2)^k / k!)²` in `f64`. Every term is
/// positive, so there is no cancellation and the result is accurate to a few
/// ulps of `f64` well beyond the `|x| < 20` range used for Kaiser windows.
/// `I0` is even; arguments above roughly 713 overflow to infinity.
pub fn bessel_i0<T: Float>(x: T) -> T {
    let half = x.to_f64() * 0.5;
    let y = half * half;
    let mut sum = 1.0f64;
    let mut term = 1.0f64;
    for k in 1..=BESSEL_MAX_TERMS {
        let kf = k as f64;
        term *= y / (kf * kf);
        sum += term;
        if term < sum * BESSEL_TOLERANCE {
            break;
        }
    }
    T::from_f64(sum)
}
