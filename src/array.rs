//! Array utilities: circular rotation and in-place sorting.
//!
//! All routines work on caller-owned storage through `&mut` borrows and never
//! allocate. Scratch space for rotation is supplied by the caller.

use crate::error::KernelError;

/// Circularly rotate `array` right by `shift` positions.
///
/// Element `i` moves to `(i + shift) mod len`; negative shifts rotate left and
/// any shift is reduced modulo the length first. `temp` is scratch space and
/// must be at least as long as `array`; only its first `array.len()` entries
/// are touched. A shift that reduces to zero leaves `array` as it was.
///
/// ```rust
/// use sigops::array::rotate_array;
///
/// let mut a = [1, 2, 3, 4];
/// let mut temp = [0; 4];
/// rotate_array(&mut a, &mut temp, 1).unwrap();
/// assert_eq!(a, [4, 1, 2, 3]);
/// ```
pub fn rotate_array<T: Copy>(
    array: &mut [T],
    temp: &mut [T],
    shift: isize,
) -> Result<(), KernelError> {
    let n = array.len();
    if temp.len() < n {
        kernel_log!(
            warn,
            "rotate_array: scratch length {} shorter than array length {}",
            temp.len(),
            n
        );
        return Err(KernelError::MismatchedLengths);
    }
    if n == 0 {
        return Ok(());
    }
    // A slice length always fits in isize.
    let s = shift.rem_euclid(n as isize) as usize;
    if s != shift.unsigned_abs() {
        kernel_log!(debug, "rotate_array: shift {} normalized to {}", shift, s);
    }
    if s == 0 {
        return Ok(());
    }
    let temp = &mut temp[..n];
    temp[s..].copy_from_slice(&array[..n - s]);
    temp[..s].copy_from_slice(&array[n - s..]);
    array.copy_from_slice(temp);
    Ok(())
}

/// Move bin zero to the centre of the array, rotating right by `len / 2`.
///
/// For even lengths this is its own inverse.
pub fn fft_shift<T: Copy>(array: &mut [T], temp: &mut [T]) -> Result<(), KernelError> {
    let half = (array.len() / 2) as isize;
    rotate_array(array, temp, half)
}

/// Stable in-place ascending bubble sort.
///
/// Quadratic time, no extra memory, and a pass without swaps ends the sort
/// early, so already sorted input costs a single pass. Intended for the small
/// arrays found in block-rate code. Incomparable values (NaN) stay where the
/// swaps leave them.
pub fn bubble_sort<T: PartialOrd + Copy>(array: &mut [T]) {
    let mut unsorted = array.len();
    while unsorted > 1 {
        let mut last_swap = 0;
        for i in 1..unsorted {
            if array[i - 1] > array[i] {
                array.swap(i - 1, i);
                last_swap = i;
            }
        }
        unsorted = last_swap;
    }
}

/// In-place ascending quick sort over the inclusive index range
/// `[beginning, end]`.
///
/// Lomuto partitioning around the last element of each range. Recursion
/// descends into the smaller partition and loops on the larger one, so stack
/// depth stays logarithmic, but running time is quadratic on already sorted
/// or reverse-sorted input. Not stable.
///
/// `beginning >= end` sorts nothing. `end` past the last index is rejected
/// with [`KernelError::IndexOutOfRange`] before anything moves.
pub fn quick_sort<T: PartialOrd + Copy>(
    array: &mut [T],
    beginning: usize,
    end: usize,
) -> Result<(), KernelError> {
    if beginning >= end {
        return Ok(());
    }
    if end >= array.len() {
        kernel_log!(
            warn,
            "quick_sort: range end {} outside array of length {}",
            end,
            array.len()
        );
        return Err(KernelError::IndexOutOfRange);
    }
    quick_sort_range(&mut array[beginning..=end]);
    Ok(())
}

/// Quick sort the whole slice.
pub fn quick_sort_all<T: PartialOrd + Copy>(array: &mut [T]) {
    quick_sort_range(array);
}

fn quick_sort_range<T: PartialOrd + Copy>(mut array: &mut [T]) {
    while array.len() > 1 {
        let p = partition(array);
        let (left, right) = core::mem::take(&mut array).split_at_mut(p);
        // right[0] is the pivot, already in its final place.
        let right = &mut right[1..];
        if left.len() < right.len() {
            quick_sort_range(left);
            array = right;
        } else {
            quick_sort_range(right);
            array = left;
        }
    }
}

/// Partition around the last element; returns the pivot's final index.
fn partition<T: PartialOrd + Copy>(array: &mut [T]) -> usize {
    let last = array.len() - 1;
    let pivot = array[last];
    let mut store = 0;
    for i in 0..last {
        if array[i] < pivot {
            array.swap(i, store);
            store += 1;
        }
    }
    array.swap(store, last);
    store
}

#[cfg(all(feature = "internal-tests", test))]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use proptest::prelude::*;

    #[test]
    fn partition_places_pivot() {
        let mut a = [5, 1, 4, 2, 3];
        let p = partition(&mut a);
        assert_eq!(p, 2);
        assert_eq!(a[p], 3);
        assert!(a[..p].iter().all(|&x| x < 3));
        assert!(a[p + 1..].iter().all(|&x| x > 3));
    }

    proptest! {
        #[test]
        fn prop_sorts_agree_with_std(ref v in proptest::collection::vec(-1000i32..1000, 0..64)) {
            let mut expected: Vec<i32> = v.clone();
            expected.sort();
            let mut a = v.clone();
            bubble_sort(&mut a);
            prop_assert_eq!(&a, &expected);
            let mut b = v.clone();
            quick_sort_all(&mut b);
            prop_assert_eq!(&b, &expected);
        }

        #[test]
        fn prop_rotation_composes(ref v in proptest::collection::vec(any::<u8>(), 1..32), s1 in -64isize..64, s2 in -64isize..64) {
            let mut temp = v.clone();
            let mut a = v.clone();
            rotate_array(&mut a, &mut temp, s1).unwrap();
            rotate_array(&mut a, &mut temp, s2).unwrap();
            let mut b = v.clone();
            rotate_array(&mut b, &mut temp, s1 + s2).unwrap();
            prop_assert_eq!(a, b);
        }
    }
}
