// Test intent: verifies complex arithmetic: products, stable division, principal square
// root and magnitude.

use sigops::num::{Complex32, Complex64};

const EPSILON: f64 = 1e-12;

fn close(a: Complex64, b: Complex64, tol: f64) -> bool {
    (a.re - b.re).abs() <= tol && (a.im - b.im).abs() <= tol
}

#[test]
fn complex32_mul_produces_expected_result() {
    let a = Complex32::new(1.0, 2.0);
    let b = Complex32::new(3.0, 4.0);
    let c = a.mul(b);
    assert!((c.re + 5.0).abs() < 1e-6);
    assert!((c.im - 10.0).abs() < 1e-6);
}

#[test]
fn add_sub_scale() {
    let a = Complex64::new(1.5, -2.0);
    let b = Complex64::new(-0.5, 4.0);
    assert_eq!(a + b, Complex64::new(1.0, 2.0));
    assert_eq!(a - b, Complex64::new(2.0, -6.0));
    assert_eq!(a.scale(2.0), Complex64::new(3.0, -4.0));
    assert_eq!(a.conj(), Complex64::new(1.5, 2.0));
}

/// Dividing then multiplying by the same non-zero divisor recovers the
/// dividend, for divisors dominated by either component.
#[test]
fn div_then_mul_recovers_dividend() {
    let a = Complex64::new(3.0, -7.5);
    for b in [
        Complex64::new(2.0, 0.5),
        Complex64::new(0.25, -9.0),
        Complex64::new(-4.0, 4.0),
        Complex64::new(0.0, 1.0),
        Complex64::new(-1.0, 0.0),
    ] {
        let back = (a / b) * b;
        assert!(close(back, a, 1e-12), "{:?} / {:?}", a, b);
    }
    assert!(close(
        Complex64::new(1.0, 0.0) / Complex64::new(0.0, 1.0),
        Complex64::new(0.0, -1.0),
        EPSILON
    ));
}

/// Operands whose squared magnitude overflows still divide correctly.
#[test]
fn div_large_magnitude_is_stable() {
    let a = Complex32::new(1.0e30, 1.0e30);
    let b = Complex32::new(2.0e30, 2.0e30);
    let q = a.div(b);
    assert!((q.re - 0.5).abs() < 1e-6, "{:?}", q);
    assert!(q.im.abs() < 1e-6, "{:?}", q);
}

/// Division by zero produces non-finite parts that the sanitizer clears.
#[test]
fn div_by_zero_sanitizes() {
    let q = Complex32::new(1.0, 1.0) / Complex32::zero();
    assert!(!q.is_finite());
    assert_eq!(q.fix_nan_inf(), Complex32::zero());
}

/// The principal root has a non-negative real part and squares back.
#[test]
fn sqrt_principal_branch() {
    assert_eq!(Complex64::new(4.0, 0.0).sqrt(), Complex64::new(2.0, 0.0));
    assert_eq!(Complex64::new(-9.0, 0.0).sqrt(), Complex64::new(0.0, 3.0));
    assert!(close(
        Complex64::new(0.0, 2.0).sqrt(),
        Complex64::new(1.0, 1.0),
        EPSILON
    ));
    assert_eq!(Complex64::zero().sqrt(), Complex64::zero());
    for &(re, im) in &[(3.0, 4.0), (-3.0, 4.0), (-3.0, -4.0), (0.5, -0.25), (-1e-3, 1e3)] {
        let z = Complex64::new(re, im);
        let r = z.sqrt();
        assert!(r.re >= 0.0);
        assert!(close(r * r, z, 1e-9), "sqrt({:?}) = {:?}", z, r);
    }
}

/// Approaching the negative real axis from above and below gives roots on
/// opposite sides of the cut.
#[test]
fn sqrt_branch_cut_continuity() {
    let above = Complex64::new(-4.0, 1e-12).sqrt();
    let below = Complex64::new(-4.0, -1e-12).sqrt();
    assert!(close(above, Complex64::new(0.0, 2.0), 1e-9));
    assert!(close(below, Complex64::new(0.0, -2.0), 1e-9));
}

#[test]
fn magnitude_and_phase() {
    let z = Complex64::new(-3.0, 4.0);
    assert_eq!(z.magnitude(), 5.0);
    assert_eq!(z.norm_sqr(), 25.0);
    let (mag, phase) = z.to_polar();
    assert!(close(Complex64::from_polar(mag, phase), z, 1e-12));
    assert!((Complex64::new(0.0, -1.0).arg() + core::f64::consts::FRAC_PI_2).abs() < EPSILON);
}

/// Without rescaling, components near the square root of the maximum float
/// overflow the magnitude. This is a documented limit.
#[test]
fn magnitude_overflow_limit() {
    assert!(Complex32::new(1.0e19, 0.0).magnitude().is_finite());
    assert!(Complex32::new(1.0e20, 0.0).magnitude().is_infinite());
}
