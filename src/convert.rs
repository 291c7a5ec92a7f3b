//! Unit and scale conversions.
//!
//! Angle conversions are a single multiply by a constant ratio. Decibel
//! conversions do not clamp: `a_to_db(0.0)` is negative infinity, and callers
//! that need a bounded value pipe it through [`crate::scalar::fix_inf`].

use crate::num::{Complex, Float};
use crate::scalar::modulo;

#[inline(always)]
pub fn deg_to_rad<T: Float>(deg: T) -> T {
    deg * (T::pi() / T::from_f32(180.0))
}

#[inline(always)]
pub fn deg_to_turn<T: Float>(deg: T) -> T {
    deg / T::from_f32(360.0)
}

#[inline(always)]
pub fn rad_to_deg<T: Float>(rad: T) -> T {
    rad * (T::from_f32(180.0) / T::pi())
}

#[inline(always)]
pub fn rad_to_turn<T: Float>(rad: T) -> T {
    rad / T::two_pi()
}

#[inline(always)]
pub fn turn_to_deg<T: Float>(turn: T) -> T {
    turn * T::from_f32(360.0)
}

#[inline(always)]
pub fn turn_to_rad<T: Float>(turn: T) -> T {
    turn * T::two_pi()
}

/// Wrap a phase into the half-open interval `(-π, π]`.
///
/// Uses a floored remainder, so inputs any number of turns away from the
/// principal range land on the same value as their principal equivalent.
/// NaN and infinite inputs produce NaN.
///
/// ```rust
/// use sigops::convert::wrap_pos_neg_pi;
/// use core::f64::consts::PI;
///
/// assert!((wrap_pos_neg_pi(3.0 * PI) - PI).abs() < 1e-12);
/// assert!((wrap_pos_neg_pi(-PI) - PI).abs() < 1e-12);
/// assert!((wrap_pos_neg_pi(0.5 + 40.0 * PI) - 0.5).abs() < 1e-9);
/// ```
#[inline]
pub fn wrap_pos_neg_pi<T: Float>(x: T) -> T {
    let pi = T::pi();
    // pi - [0, 2pi) lands in (-pi, pi]; rounding can push the remainder onto 2pi.
    let y = pi - modulo(pi - x, T::two_pi());
    if y <= -pi {
        y + T::two_pi()
    } else {
        y
    }
}

/// Wrap a phase into `[0, 2π)`.
#[inline]
pub fn wrap_zero_two_pi<T: Float>(x: T) -> T {
    modulo(x, T::two_pi())
}

/// Amplitude to decibels: `20·log10(|a|)`.
///
/// `0` maps to negative infinity.
#[inline]
pub fn a_to_db<T: Float>(amplitude: T) -> T {
    T::from_f32(20.0) * amplitude.abs().log10()
}

/// Decibels to amplitude: `10^(db/20)`.
#[inline]
pub fn db_to_a<T: Float>(db: T) -> T {
    T::from_f32(10.0).powf(db / T::from_f32(20.0))
}

/// Power to decibels: `10·log10(|p|)`.
#[inline]
pub fn pow_to_db<T: Float>(power: T) -> T {
    T::from_f32(10.0) * power.abs().log10()
}

/// Decibels to power: `10^(db/10)`.
#[inline]
pub fn db_to_pow<T: Float>(db: T) -> T {
    T::from_f32(10.0).powf(db / T::from_f32(10.0))
}

/// Cartesian `(re, im)` to `(magnitude, phase)`, phase in `[-π, π]`.
#[inline]
pub fn cartesian_to_polar<T: Float>(re: T, im: T) -> (T, T) {
    Complex::new(re, im).to_polar()
}

/// `(magnitude, phase)` to cartesian `(re, im)`.
#[inline]
pub fn polar_to_cartesian<T: Float>(magnitude: T, phase: T) -> (T, T) {
    let c = Complex::from_polar(magnitude, phase);
    (c.re, c.im)
}
