//! Demonstrates enabling verbose logging for sigops.
use sigops::array::rotate_array;
use sigops::pack::real_fft_unpack;
use sigops::{Operator, OperatorRegistry};

fn invert(x: f32) -> f32 {
    -x
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .init();

    let mut registry = OperatorRegistry::with_builtins();
    registry.register(Operator::unary("invert", invert));

    let mut array = [1.0f32, 2.0, 3.0, 4.0];
    let mut temp = [0.0f32; 4];
    rotate_array(&mut array, &mut temp, 9).unwrap();

    let packed = [1.0f32; 8];
    let mut re = [0.0f32; 4];
    let mut im = [0.0f32; 8];
    let _ = real_fft_unpack(&packed, &mut re, &mut im);
}
