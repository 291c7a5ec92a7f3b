use core::f32::consts::PI as PI32;

use crate::error::KernelError;

/// Floating-point abstraction shared by every kernel.
///
/// Implemented for `f32` and `f64`. Transcendental functions go through
/// `libm` so the crate stays `no_std`.
pub trait Float:
    Copy
    + Clone
    + PartialEq
    + PartialOrd
    + core::fmt::Debug
    + core::ops::Add<Output = Self>
    + core::ops::Sub<Output = Self>
    + core::ops::Mul<Output = Self>
    + core::ops::Div<Output = Self>
    + core::ops::Neg<Output = Self>
    + 'static
{
    fn zero() -> Self;
    fn one() -> Self;
    fn from_f32(x: f32) -> Self;
    fn from_f64(x: f64) -> Self;
    fn to_f64(self) -> f64;
    fn pi() -> Self;

    fn is_nan(self) -> bool;
    fn is_infinite(self) -> bool;
    #[inline(always)]
    fn is_finite(self) -> bool {
        !self.is_nan() && !self.is_infinite()
    }

    fn abs(self) -> Self;
    fn copysign(self, sign: Self) -> Self;
    fn sqrt(self) -> Self;
    fn ln(self) -> Self;
    fn log10(self) -> Self;
    fn powf(self, exp: Self) -> Self;
    /// Round half away from zero.
    fn round(self) -> Self;
    /// Truncating remainder (C `fmod`).
    fn fmod(self, rhs: Self) -> Self;
    fn cos(self) -> Self;
    fn sin(self) -> Self;
    fn sin_cos(self) -> (Self, Self);
    fn tan(self) -> Self;
    fn asin(self) -> Self;
    fn acos(self) -> Self;
    fn atan(self) -> Self;
    fn atan2(self, x: Self) -> Self;

    #[inline(always)]
    fn two_pi() -> Self {
        Self::pi() + Self::pi()
    }
    #[inline(always)]
    fn mul_add(self, a: Self, b: Self) -> Self {
        self * a + b
    }
}

impl Float for f32 {
    fn zero() -> Self {
        0.0
    }
    fn one() -> Self {
        1.0
    }
    fn from_f32(x: f32) -> Self {
        x
    }
    fn from_f64(x: f64) -> Self {
        x as f32
    }
    fn to_f64(self) -> f64 {
        self as f64
    }
    fn pi() -> Self {
        PI32
    }
    #[inline(always)]
    fn is_nan(self) -> bool {
        f32::is_nan(self)
    }
    #[inline(always)]
    fn is_infinite(self) -> bool {
        f32::is_infinite(self)
    }
    #[inline(always)]
    fn abs(self) -> Self {
        libm::fabsf(self)
    }
    #[inline(always)]
    fn copysign(self, sign: Self) -> Self {
        libm::copysignf(self, sign)
    }
    #[inline(always)]
    fn sqrt(self) -> Self {
        libm::sqrtf(self)
    }
    fn ln(self) -> Self {
        libm::logf(self)
    }
    fn log10(self) -> Self {
        libm::log10f(self)
    }
    fn powf(self, exp: Self) -> Self {
        libm::powf(self, exp)
    }
    #[inline(always)]
    fn round(self) -> Self {
        libm::roundf(self)
    }
    fn fmod(self, rhs: Self) -> Self {
        libm::fmodf(self, rhs)
    }
    fn cos(self) -> Self {
        libm::cosf(self)
    }
    fn sin(self) -> Self {
        libm::sinf(self)
    }
    fn sin_cos(self) -> (Self, Self) {
        libm::sincosf(self)
    }
    fn tan(self) -> Self {
        libm::tanf(self)
    }
    fn asin(self) -> Self {
        libm::asinf(self)
    }
    fn acos(self) -> Self {
        libm::acosf(self)
    }
    fn atan(self) -> Self {
        libm::atanf(self)
    }
    fn atan2(self, x: Self) -> Self {
        libm::atan2f(self, x)
    }
}

impl Float for f64 {
    fn zero() -> Self {
        0.0
    }
    fn one() -> Self {
        1.0
    }
    fn from_f32(x: f32) -> Self {
        x as f64
    }
    fn from_f64(x: f64) -> Self {
        x
    }
    fn to_f64(self) -> f64 {
        self
    }
    fn pi() -> Self {
        core::f64::consts::PI
    }
    #[inline(always)]
    fn is_nan(self) -> bool {
        f64::is_nan(self)
    }
    #[inline(always)]
    fn is_infinite(self) -> bool {
        f64::is_infinite(self)
    }
    #[inline(always)]
    fn abs(self) -> Self {
        libm::fabs(self)
    }
    #[inline(always)]
    fn copysign(self, sign: Self) -> Self {
        libm::copysign(self, sign)
    }
    #[inline(always)]
    fn sqrt(self) -> Self {
        libm::sqrt(self)
    }
    fn ln(self) -> Self {
        libm::log(self)
    }
    fn log10(self) -> Self {
        libm::log10(self)
    }
    fn powf(self, exp: Self) -> Self {
        libm::pow(self, exp)
    }
    #[inline(always)]
    fn round(self) -> Self {
        libm::round(self)
    }
    fn fmod(self, rhs: Self) -> Self {
        libm::fmod(self, rhs)
    }
    fn cos(self) -> Self {
        libm::cos(self)
    }
    fn sin(self) -> Self {
        libm::sin(self)
    }
    fn sin_cos(self) -> (Self, Self) {
        libm::sincos(self)
    }
    fn tan(self) -> Self {
        libm::tan(self)
    }
    fn asin(self) -> Self {
        libm::asin(self)
    }
    fn acos(self) -> Self {
        libm::acos(self)
    }
    fn atan(self) -> Self {
        libm::atan(self)
    }
    fn atan2(self, x: Self) -> Self {
        libm::atan2(self, x)
    }
}

/// A complex value `re + i·im`.
///
/// Plain `Copy` data; every operation returns a new value and never
/// allocates.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Complex<T: Float> {
    pub re: T,
    pub im: T,
}

impl<T: Float> Complex<T> {
    pub fn new(re: T, im: T) -> Self {
        Self { re, im }
    }
    pub fn zero() -> Self {
        Self {
            re: T::zero(),
            im: T::zero(),
        }
    }
    /// Unit phasor `cos(theta) + i·sin(theta)`.
    #[inline(always)]
    pub fn expi(theta: T) -> Self {
        let (sin, cos) = theta.sin_cos();
        Self { re: cos, im: sin }
    }
    /// Build from magnitude and phase in radians.
    #[inline]
    pub fn from_polar(magnitude: T, phase: T) -> Self {
        Self::expi(phase).scale(magnitude)
    }
    #[allow(clippy::should_implement_trait)]
    #[inline(always)]
    pub fn add(self, other: Self) -> Self {
        Self {
            re: self.re + other.re,
            im: self.im + other.im,
        }
    }
    #[allow(clippy::should_implement_trait)]
    #[inline(always)]
    pub fn sub(self, other: Self) -> Self {
        Self {
            re: self.re - other.re,
            im: self.im - other.im,
        }
    }
    #[allow(clippy::should_implement_trait)]
    #[inline(always)]
    pub fn mul(self, other: Self) -> Self {
        Self {
            re: self.re * other.re - self.im * other.im,
            im: self.re * other.im + self.im * other.re,
        }
    }

    /// Complex division using Smith's algorithm.
    ///
    /// Scaling by the ratio of the divisor's components keeps intermediate
    /// products in range where the textbook `(ac + bd) / (c² + d²)` form would
    /// overflow. Dividing by `(0, 0)` yields non-finite parts; sanitize with
    /// [`Complex::fix_nan_inf`] where that matters.
    #[allow(clippy::should_implement_trait)]
    #[inline]
    pub fn div(self, other: Self) -> Self {
        if other.re.abs() >= other.im.abs() {
            let r = other.im / other.re;
            let d = other.re + other.im * r;
            Self {
                re: (self.re + self.im * r) / d,
                im: (self.im - self.re * r) / d,
            }
        } else {
            let r = other.re / other.im;
            let d = other.im + other.re * r;
            Self {
                re: (self.re * r + self.im) / d,
                im: (self.im * r - self.re) / d,
            }
        }
    }

    /// Multiply both components by a real scalar.
    #[inline(always)]
    pub fn scale(self, k: T) -> Self {
        Self {
            re: self.re * k,
            im: self.im * k,
        }
    }

    #[inline(always)]
    pub fn conj(self) -> Self {
        Self {
            re: self.re,
            im: -self.im,
        }
    }

    /// `re² + im²`.
    #[inline(always)]
    pub fn norm_sqr(self) -> T {
        self.re * self.re + self.im * self.im
    }

    /// Euclidean magnitude `sqrt(re² + im²)`.
    ///
    /// The squares are not rescaled, so components beyond roughly `1.8e19`
    /// (`f32`) or `1.3e154` (`f64`) overflow to infinity. Audio-range values
    /// are nowhere near that limit.
    #[inline]
    pub fn magnitude(self) -> T {
        self.norm_sqr().sqrt()
    }

    /// Phase angle in radians, in `[-π, π]`.
    #[inline]
    pub fn arg(self) -> T {
        self.im.atan2(self.re)
    }

    /// `(magnitude, phase)` pair.
    #[inline]
    pub fn to_polar(self) -> (T, T) {
        (self.magnitude(), self.arg())
    }

    /// Principal square root.
    ///
    /// The branch cut lies along the negative real axis. The result always has
    /// a non-negative real part and its imaginary part carries the sign of
    /// `self.im`, so `-4 + 0i` maps to `2i` and `-4 - 0i` to `-2i`.
    pub fn sqrt(self) -> Self {
        let zero = T::zero();
        if self.re == zero && self.im == zero {
            return Self { re: zero, im: self.im };
        }
        let half = T::from_f32(0.5);
        let t = ((self.re.abs() + self.magnitude()) * half).sqrt();
        if self.re >= zero {
            Self {
                re: t,
                im: self.im / (t + t),
            }
        } else {
            Self {
                re: self.im.abs() / (t + t),
                im: t.copysign(self.im),
            }
        }
    }

    #[inline(always)]
    pub fn is_finite(self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }

    /// Replace a NaN or infinite component with zero.
    #[inline]
    pub fn fix_nan_inf(self) -> Self {
        Self {
            re: crate::scalar::fix_nan_inf(self.re),
            im: crate::scalar::fix_nan_inf(self.im),
        }
    }
}

impl<T: Float> core::ops::Neg for Complex<T> {
    type Output = Self;
    #[inline(always)]
    fn neg(self) -> Self {
        Self {
            re: -self.re,
            im: -self.im,
        }
    }
}

impl<T: Float> core::ops::Add for Complex<T> {
    type Output = Self;
    #[inline(always)]
    fn add(self, other: Self) -> Self {
        Complex::<T>::add(self, other)
    }
}

impl<T: Float> core::ops::Sub for Complex<T> {
    type Output = Self;
    #[inline(always)]
    fn sub(self, other: Self) -> Self {
        Complex::<T>::sub(self, other)
    }
}

impl<T: Float> core::ops::Mul for Complex<T> {
    type Output = Self;
    #[inline(always)]
    fn mul(self, other: Self) -> Self {
        Complex::<T>::mul(self, other)
    }
}

impl<T: Float> core::ops::Div for Complex<T> {
    type Output = Self;
    #[inline(always)]
    fn div(self, other: Self) -> Self {
        Complex::<T>::div(self, other)
    }
}

pub type Complex32 = Complex<f32>;
pub type Complex64 = Complex<f64>;

/// Separate real and imaginary arrays viewed as one complex spectrum.
#[derive(Debug, PartialEq)]
pub struct SplitComplex<'a, T: Float> {
    pub re: &'a mut [T],
    pub im: &'a mut [T],
}

impl<'a, T: Float> SplitComplex<'a, T> {
    /// Pair two arrays of equal length.
    pub fn new(re: &'a mut [T], im: &'a mut [T]) -> Result<Self, KernelError> {
        if re.len() != im.len() {
            return Err(KernelError::MismatchedLengths);
        }
        Ok(Self { re, im })
    }
    pub fn len(&self) -> usize {
        self.re.len()
    }
    pub fn is_empty(&self) -> bool {
        self.re.is_empty()
    }
    pub fn get(&self, k: usize) -> Option<Complex<T>> {
        Some(Complex::new(*self.re.get(k)?, *self.im.get(k)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complex_operations() {
        let a = Complex64::new(1.0, -2.0);
        let b = Complex64::new(3.0, 4.0);
        let c = a.mul(b);
        assert!((c.re - (1.0 * 3.0 - (-2.0) * 4.0)).abs() < 1e-12);
        let n = -a;
        assert_eq!(n.re, -1.0);
        assert_eq!(n.im, 2.0);
        let e = Complex64::expi(<f64 as Float>::pi());
        assert!((e.re + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_div_inverts_mul() {
        let a = Complex32::new(2.5, -1.0);
        let b = Complex32::new(-0.25, 4.0);
        let q = a / b;
        let back = q * b;
        assert!((back.re - a.re).abs() < 1e-5);
        assert!((back.im - a.im).abs() < 1e-5);
    }

    #[test]
    fn test_sqrt_branch_cut_sides() {
        let above = Complex64::new(-4.0, 0.0).sqrt();
        let below = Complex64::new(-4.0, -0.0).sqrt();
        assert_eq!(above, Complex64::new(0.0, 2.0));
        assert_eq!(below, Complex64::new(0.0, -2.0));
    }

    #[test]
    fn test_split_complex_rejects_uneven() {
        let mut re = [0.0f32; 3];
        let mut im = [0.0f32; 2];
        assert_eq!(
            SplitComplex::new(&mut re, &mut im).unwrap_err(),
            KernelError::MismatchedLengths
        );
    }
}
