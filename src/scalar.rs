//! Scalar math primitives.
//!
//! Every function here maps one or two scalars to a scalar and never panics.
//! Undefined results either propagate as NaN/Inf (the plain primitives) or are
//! replaced by `0` (the `safe_*` helpers and [`reciprocal`]). Callers decide
//! where to pay for sanitizing: pipe a risky value through [`fix_nan_inf`]
//! before it reaches a divider, logarithm or the host's output buffer.

use crate::num::Float;
use crate::poly::polynomial;

/// Return `0` if `x` is NaN, otherwise `x`.
#[inline(always)]
pub fn fix_nan<T: Float>(x: T) -> T {
    if x.is_nan() {
        T::zero()
    } else {
        x
    }
}

/// Return `0` if `x` is positive or negative infinity, otherwise `x`.
#[inline(always)]
pub fn fix_inf<T: Float>(x: T) -> T {
    if x.is_infinite() {
        T::zero()
    } else {
        x
    }
}

/// Composition of [`fix_nan`] and [`fix_inf`]: the result is always finite.
///
/// ```rust
/// use sigops::scalar::fix_nan_inf;
///
/// assert_eq!(fix_nan_inf(f32::NAN), 0.0);
/// assert_eq!(fix_nan_inf(f32::NEG_INFINITY), 0.0);
/// assert_eq!(fix_nan_inf(-3.5f32), -3.5);
/// ```
#[inline(always)]
pub fn fix_nan_inf<T: Float>(x: T) -> T {
    fix_inf(fix_nan(x))
}

/// Raise `x` to at least `lo`.
#[inline(always)]
pub fn clip_min<T: Float>(x: T, lo: T) -> T {
    if x < lo {
        lo
    } else {
        x
    }
}

/// Lower `x` to at most `hi`.
#[inline(always)]
pub fn clip_max<T: Float>(x: T, hi: T) -> T {
    if x > hi {
        hi
    } else {
        x
    }
}

/// Clamp `x` to the inclusive range `[lo, hi]`.
///
/// Applies [`clip_min`] then [`clip_max`]. An inverted range (`lo > hi`) is
/// the caller's mistake; it does not panic and always yields `hi`. A NaN
/// input passes through unchanged.
#[inline(always)]
pub fn clip<T: Float>(x: T, lo: T, hi: T) -> T {
    clip_max(clip_min(x, lo), hi)
}

/// Floored remainder of `a / b`: the result carries the sign of `b`.
///
/// Unlike the truncating `%`, `modulo(-1, 4) == 3`, which keeps angle and
/// index wrapping consistent on both sides of zero. For positive `b` the
/// result lies in `[0, b)`, never on `b` itself. `b == 0` returns `0`.
#[inline]
pub fn modulo<T: Float>(a: T, b: T) -> T {
    let zero = T::zero();
    if b == zero {
        return zero;
    }
    let r = a.fmod(b);
    if r != zero && ((r < zero) != (b < zero)) {
        // A remainder far smaller than b rounds onto b itself.
        let m = r + b;
        if m == b {
            zero
        } else {
            m
        }
    } else {
        r
    }
}

/// Round to the nearest integer, halves away from zero.
#[inline(always)]
pub fn round<T: Float>(x: T) -> T {
    x.round()
}

/// Linear interpolation `a + (b - a)·t`.
///
/// Not clamped: `t` outside `[0, 1]` extrapolates along the same line.
#[inline(always)]
pub fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    a + (b - a) * t
}

/// `1 / x`, with division by zero mapped to `0`.
#[inline(always)]
pub fn reciprocal<T: Float>(x: T) -> T {
    fix_nan_inf(T::one() / x)
}

#[inline]
pub fn safe_sin<T: Float>(x: T) -> T {
    fix_nan_inf(x.sin())
}

#[inline]
pub fn safe_cos<T: Float>(x: T) -> T {
    fix_nan_inf(x.cos())
}

/// Tangent; a non-finite result (infinite input) maps to `0`.
#[inline]
pub fn safe_tan<T: Float>(x: T) -> T {
    fix_nan_inf(x.tan())
}

/// Arcsine with the argument clamped into `[-1, 1]`.
#[inline]
pub fn safe_asin<T: Float>(x: T) -> T {
    let one = T::one();
    clip(fix_nan(x), -one, one).asin()
}

/// Arccosine with the argument clamped into `[-1, 1]`.
#[inline]
pub fn safe_acos<T: Float>(x: T) -> T {
    let one = T::one();
    clip(fix_nan(x), -one, one).acos()
}

#[inline]
pub fn safe_atan<T: Float>(x: T) -> T {
    fix_nan(x.atan())
}

/// Four-quadrant arctangent of `y / x`; NaN arguments yield `0`.
#[inline]
pub fn safe_atan2<T: Float>(y: T, x: T) -> T {
    fix_nan_inf(y.atan2(x))
}

/// `base^exp`, with NaN (negative base, fractional exponent) and overflow
/// mapped to `0`.
#[inline]
pub fn safe_pow<T: Float>(base: T, exp: T) -> T {
    fix_nan_inf(base.powf(exp))
}

/// Square root; negative and NaN inputs yield `0`.
#[inline]
pub fn safe_sqrt<T: Float>(x: T) -> T {
    if x > T::zero() {
        fix_inf(x.sqrt())
    } else {
        T::zero()
    }
}

/// Natural logarithm; non-positive and NaN inputs yield `0`.
#[inline]
pub fn safe_log<T: Float>(x: T) -> T {
    if x > T::zero() {
        fix_inf(x.ln())
    } else {
        T::zero()
    }
}

/// Cubic soft clipper.
///
/// Clips to `[-1, 1]`, then shapes with `1.5x - 0.5x³`. The curve is
/// monotone, has unity-and-a-half slope at the origin and reaches `±1` with
/// zero slope exactly at the clip points, so there is no kink in the output.
#[inline]
pub fn soft_clip<T: Float>(x: T) -> T {
    let one = T::one();
    let x = clip(x, -one, one);
    let zero = T::zero();
    let coeff = [T::from_f32(-0.5), zero, T::from_f32(1.5), zero];
    polynomial(&coeff, x)
}
