//! Window functions written into caller buffers, and block-edge smoothing.
//!
//! Every function fills or scales a buffer the caller owns and allocates
//! nothing, so a window can be regenerated in place whenever its shape
//! parameter changes.

use crate::num::Float;
use crate::poly::bessel_i0;

/// Fill `out` with a periodic Hann window.
///
/// A single-sample window is `[1.0]`; an empty slice is left alone.
pub fn hann_window<T: Float>(out: &mut [T]) {
    let n = out.len();
    if n == 1 {
        out[0] = T::one();
        return;
    }
    let half = T::from_f32(0.5);
    let step = T::two_pi() / T::from_f64(n as f64);
    for (i, w) in out.iter_mut().enumerate() {
        *w = half - half * (step * T::from_f64(i as f64)).cos();
    }
}

/// Fill `out` with a symmetric Kaiser window of shape `beta`.
///
/// `w[i] = I0(beta·sqrt(1 - r²)) / I0(beta)` with `r` running from -1 to 1
/// across the window, so the centre sample is 1 and the ends are
/// `1 / I0(beta)`. `beta = 0` gives a rectangular window.
pub fn kaiser_window<T: Float>(out: &mut [T], beta: T) {
    let n = out.len();
    if n == 0 {
        return;
    }
    if n == 1 {
        out[0] = T::one();
        return;
    }
    let beta = beta.to_f64();
    let denom = bessel_i0(beta);
    let m = (n - 1) as f64 / 2.0;
    for (i, w) in out.iter_mut().enumerate() {
        let r = (i as f64 - m) / m;
        let arg = beta * (1.0 - r * r).max(0.0).sqrt();
        *w = T::from_f64(bessel_i0(arg) / denom);
    }
}

/// Fade the first and last `ramp` samples of a block with a raised-cosine
/// ramp.
///
/// Sample `i` from either edge is scaled by `0.5 - 0.5·cos(π(i+1)/(ramp+1))`,
/// so every ramp gain lies strictly between 0 and 1 and the interior is left
/// untouched. `ramp` is limited to half the block so the two ramps never
/// overlap. Used to hide the discontinuity when an operator switches its
/// output on or off at a block boundary.
pub fn smooth_block_edges<T: Float>(block: &mut [T], ramp: usize) {
    let n = block.len();
    let ramp = ramp.min(n / 2);
    if ramp == 0 {
        return;
    }
    let half = T::from_f32(0.5);
    let step = T::pi() / T::from_f64((ramp + 1) as f64);
    for i in 0..ramp {
        let gain = half - half * (step * T::from_f64((i + 1) as f64)).cos();
        block[i] = block[i] * gain;
        block[n - 1 - i] = block[n - 1 - i] * gain;
    }
}

#[cfg(all(feature = "internal-tests", test))]
mod tests {
    use super::*;

    #[test]
    fn test_hann() {
        let mut w = [0.0f32; 8];
        hann_window(&mut w);
        assert!((w[0] - 0.0).abs() < 1e-6);
        assert!((w[4] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_kaiser() {
        let mut w = [0.0f32; 9];
        kaiser_window(&mut w, 5.0);
        // Peak amplitude at center
        assert!((w[4] - 1.0).abs() < 1e-6);
        // Symmetry
        for (a, b) in w.iter().zip(w.iter().rev()) {
            assert!((*a - *b).abs() < 1e-6);
        }
        assert!(w.iter().all(|&x| x.is_finite()));
    }

    #[test]
    fn test_kaiser_zero_beta_is_rectangular() {
        let mut w = [0.0f64; 5];
        kaiser_window(&mut w, 0.0);
        assert!(w.iter().all(|&x| x == 1.0));
    }
}
