// Test intent: verifies rotation and the two sorting routines.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sigops::array::{bubble_sort, fft_shift, quick_sort, quick_sort_all, rotate_array};
use sigops::KernelError;

fn is_sorted<T: PartialOrd>(v: &[T]) -> bool {
    v.windows(2).all(|w| w[0] <= w[1])
}

#[test]
fn rotate_right_by_one() {
    let mut a = [1.0f32, 2.0, 3.0, 4.0];
    let mut temp = [0.0f32; 4];
    rotate_array(&mut a, &mut temp, 1).unwrap();
    assert_eq!(a, [4.0, 1.0, 2.0, 3.0]);
}

/// A zero shift, or any multiple of the length, leaves the array alone.
#[test]
fn rotate_zero_is_noop() {
    let mut temp = [0; 5];
    for shift in [0isize, 5, -5, 500] {
        let mut a = [1, 2, 3, 4, 5];
        rotate_array(&mut a, &mut temp, shift).unwrap();
        assert_eq!(a, [1, 2, 3, 4, 5], "shift {}", shift);
    }
}

/// Negative and out-of-range shifts are normalized modulo the length.
#[test]
fn rotate_normalizes_shift() {
    let mut temp = [0; 4];
    let mut a = [1, 2, 3, 4];
    rotate_array(&mut a, &mut temp, -1).unwrap();
    assert_eq!(a, [2, 3, 4, 1]);
    let mut a = [1, 2, 3, 4];
    rotate_array(&mut a, &mut temp, 6).unwrap();
    assert_eq!(a, [3, 4, 1, 2]);
    let mut a = [1, 2, 3, 4];
    rotate_array(&mut a, &mut temp, -7).unwrap();
    assert_eq!(a, [4, 1, 2, 3]);
}

/// A longer scratch buffer is fine; a shorter one is rejected untouched.
#[test]
fn rotate_scratch_length() {
    let mut a = [1, 2, 3];
    let mut temp = [0; 8];
    rotate_array(&mut a, &mut temp, 2).unwrap();
    assert_eq!(a, [2, 3, 1]);

    let mut short = [0; 2];
    assert_eq!(
        rotate_array(&mut a, &mut short, 1),
        Err(KernelError::MismatchedLengths)
    );
    assert_eq!(a, [2, 3, 1]);

    let mut empty: [i32; 0] = [];
    rotate_array(&mut empty, &mut [], 3).unwrap();
}

/// FFT shift moves bin zero to the centre and undoes itself for even sizes.
#[test]
fn fft_shift_centres_dc() {
    let mut a = [0, 1, 2, 3, -4, -3, -2, -1];
    let mut temp = [0; 8];
    fft_shift(&mut a, &mut temp).unwrap();
    assert_eq!(a, [-4, -3, -2, -1, 0, 1, 2, 3]);
    fft_shift(&mut a, &mut temp).unwrap();
    assert_eq!(a, [0, 1, 2, 3, -4, -3, -2, -1]);

    let mut odd = [0, 1, 2, -2, -1];
    let mut temp = [0; 5];
    fft_shift(&mut odd, &mut temp).unwrap();
    assert_eq!(odd, [-2, -1, 0, 1, 2]);
}

#[test]
fn sorts_small_example() {
    let mut a = [3.0f32, 1.0, 2.0];
    bubble_sort(&mut a);
    assert_eq!(a, [1.0, 2.0, 3.0]);
    let mut b = [3.0f32, 1.0, 2.0];
    quick_sort(&mut b, 0, 2).unwrap();
    assert_eq!(b, [1.0, 2.0, 3.0]);
}

/// Bubble sort keeps equal keys in their original order.
#[test]
fn bubble_sort_is_stable() {
    let mut pairs = [(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd'), (0, 'e')];
    // Order by the first field only.
    #[derive(Clone, Copy, Debug, PartialEq)]
    struct Key(i32, char);
    impl PartialOrd for Key {
        fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
            self.0.partial_cmp(&other.0)
        }
    }
    let mut keys: Vec<Key> = pairs.iter().map(|&(k, c)| Key(k, c)).collect();
    bubble_sort(&mut keys);
    let order: String = keys.iter().map(|k| k.1).collect();
    assert_eq!(order, "ebdac");
    pairs.sort_by_key(|p| p.0);
    assert_eq!(pairs.iter().map(|p| p.1).collect::<String>(), order);
}

/// Quick sort touches only the inclusive sub-range it is given.
#[test]
fn quick_sort_sub_range() {
    let mut a = [9, 8, 7, 6, 5, 4, 3];
    quick_sort(&mut a, 2, 5).unwrap();
    assert_eq!(a, [9, 8, 4, 5, 6, 7, 3]);
}

/// Degenerate and invalid ranges.
#[test]
fn quick_sort_range_edges() {
    let mut a = [3, 2, 1];
    quick_sort(&mut a, 2, 0).unwrap();
    quick_sort(&mut a, 1, 1).unwrap();
    assert_eq!(a, [3, 2, 1]);
    assert_eq!(quick_sort(&mut a, 0, 3), Err(KernelError::IndexOutOfRange));
    assert_eq!(a, [3, 2, 1]);
    let mut empty: [f32; 0] = [];
    quick_sort_all(&mut empty);
    bubble_sort(&mut empty);
}

/// Sorted and reverse-sorted inputs, the quadratic case for a last-element
/// pivot, still sort correctly without exhausting the stack.
#[test]
fn quick_sort_adversarial_inputs() {
    let mut ascending: Vec<i32> = (0..5_000).collect();
    quick_sort_all(&mut ascending);
    assert!(is_sorted(&ascending));
    let mut descending: Vec<i32> = (0..5_000).rev().collect();
    quick_sort_all(&mut descending);
    assert!(is_sorted(&descending));
    let mut constant = vec![1.5f32; 5_000];
    quick_sort_all(&mut constant);
    assert!(is_sorted(&constant));
}

/// Both sorts produce the same non-decreasing permutation as the standard
/// library on random data with duplicates.
#[test]
fn sorts_match_std_on_random_data() {
    let mut rng = StdRng::seed_from_u64(42);
    for len in [0usize, 1, 2, 3, 10, 64, 257] {
        let data: Vec<f32> = (0..len)
            .map(|_| (rng.gen_range(-50..50) as f32) * 0.5)
            .collect();
        let mut expected = data.clone();
        expected.sort_by(|a, b| a.partial_cmp(b).unwrap());

        let mut a = data.clone();
        bubble_sort(&mut a);
        assert_eq!(a, expected);

        let mut b = data.clone();
        if len > 0 {
            quick_sort(&mut b, 0, len - 1).unwrap();
        }
        assert_eq!(b, expected);
    }
}
