//! Basic usage example for sigops
//!
//! Walks through the kernel groups: sanitizing, unit conversion, complex
//! arithmetic, half-complex packing, array utilities, windows and the
//! operator registry.

use sigops::array::{fft_shift, quick_sort_all, rotate_array};
use sigops::convert::{a_to_db, db_to_a, wrap_pos_neg_pi};
use sigops::pack::{bin_count, real_fft_unpack};
use sigops::poly::{bessel_i0, polynomial};
use sigops::scalar::{fix_inf, soft_clip};
use sigops::window::kaiser_window;
use sigops::{Complex32, OperatorRegistry};

fn main() {
    println!("=== sigops Basic Usage Example ===\n");

    // 1. Amplitude and decibels
    println!("1. Amplitude <-> decibels");
    for a in [1.0f32, 0.5, 0.0] {
        let db = a_to_db(a);
        println!("   {:>4} -> {:>8.3} dB (fixed: {:.3})", a, db, fix_inf(db));
    }
    println!("   -6 dB -> {:.4}", db_to_a(-6.0f32));
    println!();

    // 2. Phase wrapping and soft clipping
    println!("2. Phase wrap and soft clip");
    for x in [4.0f32, -7.0, 100.0] {
        println!("   wrap({}) = {:.4}", x, wrap_pos_neg_pi(x));
    }
    let shaped: Vec<f32> = [-2.0f32, -0.5, 0.0, 0.5, 2.0]
        .iter()
        .map(|&x| soft_clip(x))
        .collect();
    println!("   soft_clip: {:?}", shaped);
    println!();

    // 3. Complex arithmetic
    println!("3. Complex numbers");
    let a = Complex32::new(1.0, 2.0);
    let b = Complex32::new(3.0, -1.0);
    let q = a / b;
    println!("   ({:?}) / ({:?}) = {:.3}+{:.3}i", a, b, q.re, q.im);
    println!("   sqrt(-4) = {:?}", Complex32::new(-4.0, 0.0).sqrt());
    println!();

    // 4. Half-complex packing
    println!("4. Packed real spectrum");
    let packed = [1.0f32, 0.5, 0.0, 0.0, 0.0, 0.0, 0.0, -0.5];
    let mut re = [0.0f32; 8];
    let mut im = [0.0f32; 8];
    match real_fft_unpack(&packed, &mut re, &mut im) {
        Ok(()) => {
            println!("   {} independent bins", bin_count(packed.len()));
            println!("   re: {:?}", re);
            println!("   im: {:?}", im);
        }
        Err(e) => println!("   unpack failed: {}", e),
    }
    println!();

    // 5. Rotation and sorting
    println!("5. Arrays");
    let mut bins = [0, 1, 2, 3, -4, -3, -2, -1];
    let mut temp = [0; 8];
    if fft_shift(&mut bins, &mut temp).is_ok() {
        println!("   fft_shift: {:?}", bins);
    }
    if rotate_array(&mut bins, &mut temp, -3).is_ok() {
        println!("   rotated left 3: {:?}", bins);
    }
    quick_sort_all(&mut bins);
    println!("   sorted: {:?}", bins);
    println!();

    // 6. Polynomials, Bessel and windows
    println!("6. Polynomials and windows");
    println!("   x^2 - 1 at 2 = {}", polynomial(&[1.0f64, 0.0, -1.0], 2.0));
    println!("   I0(5) = {:.6}", bessel_i0(5.0f64));
    let mut window = [0.0f32; 9];
    kaiser_window(&mut window, 6.0);
    println!("   kaiser(9, 6): {:?}", window);
    println!();

    // 7. Operators
    println!("7. Operator registry");
    let registry = OperatorRegistry::with_builtins();
    let mut names: Vec<&str> = registry.names().collect();
    names.sort_unstable();
    println!("   {} operators: {}", registry.len(), names.join(", "));
    if let Some(op) = registry.get("atodb") {
        let input = [1.0f32, 0.1, 0.01, 0.001];
        let mut output = [0.0f32; 4];
        match op.perform(&[&input[..]], &mut [&mut output[..]]) {
            Ok(()) => println!("   atodb {:?} -> {:?}", input, output),
            Err(e) => println!("   atodb failed: {}", e),
        }
    }

    println!("\n=== Example completed successfully! ===");
}
