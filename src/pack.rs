//! Half-complex spectral packing.
//!
//! A real-input FFT of size `n` has a conjugate-symmetric spectrum, so only
//! `n/2 + 1` bins are independent. In-place real FFT routines store those bins
//! in a single length-`n` buffer. This module fixes the layout as:
//!
//! | index            | holds        | for                 |
//! |------------------|--------------|---------------------|
//! | `k`              | `Re X[k]`    | `0 <= k <= n/2`     |
//! | `n - k`          | `Im X[k]`    | `1 <= k <= (n-1)/2` |
//!
//! Bin 0 and, for even `n`, the Nyquist bin `n/2` are purely real and their
//! imaginary parts are not stored. For odd `n` there is no Nyquist bin and the
//! highest stored bin `(n-1)/2` keeps its imaginary part.
//!
//! [`real_fft_unpack`] expands the packed form into a full `n`-bin spectrum,
//! synthesizing bins above `n/2` as conjugate mirrors; [`real_ifft_pack`]
//! folds the first `n/2 + 1` bins of a spectrum back into the packed form for
//! the matching inverse transform.

use crate::error::KernelError;
use crate::num::{Complex, Float, SplitComplex};

/// Number of independent bins of a size-`n` real transform: `n/2 + 1`.
#[inline]
pub const fn bin_count(n: usize) -> usize {
    n / 2 + 1
}

/// Index of the Nyquist bin, present only for even non-zero `n`.
#[inline]
pub const fn nyquist_index(n: usize) -> Option<usize> {
    if n != 0 && n % 2 == 0 {
        Some(n / 2)
    } else {
        None
    }
}

/// Whether bin `k` of a size-`n` transform has no stored imaginary part.
#[inline]
fn is_real_bin(k: usize, n: usize) -> bool {
    k == 0 || 2 * k == n
}

/// Read bin `k` of a packed buffer, mirroring bins above `n/2`.
///
/// Returns `None` when `k` is not a bin of the buffer.
pub fn packed_bin<T: Float>(packed: &[T], k: usize) -> Option<Complex<T>> {
    let n = packed.len();
    if k >= n {
        return None;
    }
    let half = n / 2;
    if k <= half {
        let im = if is_real_bin(k, n) {
            T::zero()
        } else {
            packed[n - k]
        };
        Some(Complex::new(packed[k], im))
    } else {
        // k > n/2 mirrors bin n - k, which is stored.
        let mirror = n - k;
        Some(Complex::new(packed[mirror], -packed[k]))
    }
}

/// Expand a packed half-complex buffer into the full complex spectrum.
///
/// `out_re` and `out_im` must both have the length of `packed`. Bins
/// `0..=n/2` come from the packed form; bins above `n/2` are the conjugates of
/// bins `n - k`. The imaginary parts of DC and (for even `n`) Nyquist are
/// written as exact zeros.
pub fn real_fft_unpack<T: Float>(
    packed: &[T],
    out_re: &mut [T],
    out_im: &mut [T],
) -> Result<(), KernelError> {
    let n = packed.len();
    if n == 0 {
        kernel_log!(warn, "real_fft_unpack: empty packed buffer");
        return Err(KernelError::EmptyInput);
    }
    if out_re.len() != n || out_im.len() != n {
        kernel_log!(
            warn,
            "real_fft_unpack: outputs {}/{} do not match packed length {}",
            out_re.len(),
            out_im.len(),
            n
        );
        return Err(KernelError::MismatchedLengths);
    }
    let half = n / 2;
    out_re[0] = packed[0];
    out_im[0] = T::zero();
    for k in 1..=half {
        out_re[k] = packed[k];
        out_im[k] = if is_real_bin(k, n) {
            T::zero()
        } else {
            packed[n - k]
        };
    }
    for k in half + 1..n {
        out_re[k] = out_re[n - k];
        out_im[k] = -out_im[n - k];
    }
    Ok(())
}

/// Fold a spectrum back into the packed half-complex layout.
///
/// Only the first `n/2 + 1` entries of `re` and `im` are read, where
/// `n = packed.len()`; the arrays may hold the full spectrum or just the
/// independent half. Imaginary parts of DC and Nyquist are ignored.
pub fn real_ifft_pack<T: Float>(
    re: &[T],
    im: &[T],
    packed: &mut [T],
) -> Result<(), KernelError> {
    let n = packed.len();
    if n == 0 {
        kernel_log!(warn, "real_ifft_pack: empty packed buffer");
        return Err(KernelError::EmptyInput);
    }
    if re.len() != im.len() || re.len() < bin_count(n) {
        kernel_log!(
            warn,
            "real_ifft_pack: spectrum {}/{} too short for packed length {}",
            re.len(),
            im.len(),
            n
        );
        return Err(KernelError::MismatchedLengths);
    }
    let half = n / 2;
    for k in 0..=half {
        packed[k] = re[k];
        if !is_real_bin(k, n) {
            packed[n - k] = im[k];
        }
    }
    Ok(())
}

/// [`real_fft_unpack`] writing into a [`SplitComplex`] view.
pub fn real_fft_unpack_split<T: Float>(
    packed: &[T],
    out: &mut SplitComplex<'_, T>,
) -> Result<(), KernelError> {
    real_fft_unpack(packed, out.re, out.im)
}

/// [`real_ifft_pack`] reading from a [`SplitComplex`] view.
pub fn real_ifft_pack_split<T: Float>(
    spectrum: &SplitComplex<'_, T>,
    packed: &mut [T],
) -> Result<(), KernelError> {
    real_ifft_pack(spectrum.re, spectrum.im, packed)
}
