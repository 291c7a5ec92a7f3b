//! # sigops - numeric kernels for block-based audio operators
//!
//! A small, allocation-free toolkit of the numeric primitives shared by
//! real-time signal operators: amplitude/decibel conversion, phase wrapping,
//! cartesian/polar conversion, soft clipping, block-edge smoothing and the
//! helpers those operators are built from.
//!
//! ## Features
//!
//! - **Stateless kernels**: every function runs to completion on the calling
//!   thread with no locks, no I/O and no heap allocation
//! - **Sentinel error values**: undefined numeric results are sanitized with
//!   [`scalar::fix_nan_inf`] and friends instead of panicking
//! - **Complex arithmetic** with a numerically stable division and a principal
//!   square root
//! - **Half-complex packing** between a real FFT's packed output and separate
//!   real/imaginary spectra
//! - **Array utilities**: rotation, FFT shift, bubble sort, quick sort
//! - **Polynomial and Bessel I0** evaluation for window generation
//! - **Block adapter**: per-sample kernels applied across host blocks, plus a
//!   start-up operator registry
//!
//! ## Cargo Features
//!
//! - `std` (default): implement `std::error::Error` for [`KernelError`]
//! - `verbose-logging`: emit diagnostics through the `log` facade. Never enable
//!   this on a hard real-time audio thread.
//! - `internal-tests`: property tests inside the library modules
//!
//! ## Examples
//!
//! ```rust
//! use sigops::convert::{a_to_db, db_to_a};
//! use sigops::scalar::fix_inf;
//!
//! assert!((a_to_db(0.5f32) + 6.0206).abs() < 1e-3);
//! assert!((db_to_a(-6.0206f32) - 0.5).abs() < 1e-4);
//! assert_eq!(fix_inf(a_to_db(0.0f32)), 0.0);
//! ```
//!
//! ## License
//!
//! Licensed under either of
//! - Apache License, Version 2.0 (<https://www.apache.org/licenses/LICENSE-2.0>)
//! - MIT license (<https://opensource.org/licenses/MIT>)
//!
//! at your option.

#![no_std]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

/// Emit a diagnostic through `log` when `verbose-logging` is enabled.
///
/// Expands to nothing otherwise so the audio path carries no logging cost.
macro_rules! kernel_log {
    ($level:ident, $($arg:tt)+) => {
        #[cfg(feature = "verbose-logging")]
        {
            log::$level!(target: "sigops", $($arg)+);
        }
    };
}

/// Floating-point abstraction and complex numbers
///
/// The [`Float`] trait backed by `libm`, the [`Complex`] value type and the
/// split real/imaginary view used by the packing routines.
pub mod num;

/// Error type for slice-shape violations.
pub mod error;

/// Scalar math primitives
///
/// NaN/Inf sanitizing, clipping, floored modulo, rounding, interpolation and
/// domain-safe trig, power, root and log.
pub mod scalar;

/// Unit and scale conversions
///
/// Angle units, phase wrapping, amplitude/power decibels and polar form.
pub mod convert;

/// Half-complex spectral packing
///
/// Conversion between a real FFT's packed output and full real/imaginary
/// spectra.
pub mod pack;

/// Array utilities
///
/// Circular rotation, FFT shift and in-place sorting.
pub mod array;

/// Polynomial and Bessel evaluation
pub mod poly;

/// Window functions and block-edge smoothing
///
/// Kaiser and Hann windows written into caller buffers.
pub mod window;

/// Block adapter contract
///
/// Applies per-sample kernels across host blocks and provides the start-up
/// operator registry.
pub mod block;

pub use block::{Kernel, Operator, OperatorRegistry, Sample};
pub use error::KernelError;
pub use num::{Complex, Complex32, Complex64, Float};
