use crate::method::partition::partition_range;
use crate::method::pivot::{median_of_medians, median_of_three};

/// Ranges at most this long take their pivot from a median-of-three probe,
/// larger ranges pay for the grouped median reduction.
const SMALL_RANGE: usize = 16;

/// Select the k-th smallest element (0-based rank) of `values`.
///
/// The slice is permuted as a side effect: on return `values[k]` holds the
/// answer, everything before it is `<=` it and everything after it is `>=` it.
/// The working range narrows around `k` on every iteration, and with the
/// grouped pivot rule the worst case stays linear in the slice length.
pub fn select_kth(values: &mut [f64], k: usize) -> f64 {
    debug_assert!(k < values.len(), "Rank must lie within the slice.");

    let mut low = 0;
    let mut high = values.len() - 1;
    loop {
        if high <= low {
            // The range collapsed onto the target index
            return values[k];
        }
        if high == low + 1 {
            // Two elements left, a single comparison settles both positions
            if values[low] > values[high] {
                values.swap(low, high);
            }
            return values[k];
        }

        let pivot_idx = choose_pivot(values, low, high);
        let p = partition_range(values, low, high, pivot_idx);

        if p == k {
            return values[p];
        }
        if p < k {
            low = p + 1;
        } else {
            high = p - 1;
        }
    }
}

/// Pick a pivot index within `[low, high]`, by value quality for large ranges
/// and by a three-point probe for small ones.
fn choose_pivot(values: &mut [f64], low: usize, high: usize) -> usize {
    let len = high - low + 1;
    if len <= SMALL_RANGE {
        return median_of_three(values, low, low + len / 2, high);
    }

    // The grouped reduction yields a value, locate it back within the range
    let pivot = median_of_medians(&mut values[low..=high]);
    low + values[low..=high]
        .iter()
        .position(|&v| v == pivot)
        .expect("Elements must not be NaN.")
}

#[test]
fn test_select_kth() {
    let mut values = vec![7.0, 2.0, 5.0, 1.0, 8.0, 3.0];
    assert_eq!(select_kth(&mut values, 2), 3.0);
    assert_eq!(values[2], 3.0);

    let mut values = vec![4.0];
    assert_eq!(select_kth(&mut values, 0), 4.0);

    let mut values = vec![9.0, 1.0];
    assert_eq!(select_kth(&mut values, 0), 1.0);
    let mut values = vec![9.0, 1.0];
    assert_eq!(select_kth(&mut values, 1), 9.0);
}

#[test]
fn test_select_kth_every_rank() {
    use rand::{thread_rng, Rng};

    let mut rng = thread_rng();
    for _ in 0..20 {
        let values: Vec<f64> = (0..40).map(|_| rng.gen_range(-50..50) as f64).collect();
        let mut sorted = values.clone();
        sorted.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        for k in 0..values.len() {
            let mut scratch = values.clone();
            assert_eq!(select_kth(&mut scratch, k), sorted[k]);
        }
    }
}

#[test]
fn test_select_kth_partially_partitions() {
    use rand::{thread_rng, Rng};

    let mut rng = thread_rng();
    let mut values: Vec<f64> = (0..200).map(|_| rng.gen::<f64>()).collect();
    let k = 70;
    let answer = select_kth(&mut values, k);

    assert_eq!(values[k], answer);
    assert!(values[..k].iter().all(|&v| v <= answer));
    assert!(values[k + 1..].iter().all(|&v| v >= answer));
}

#[test]
fn test_select_kth_duplicates() {
    // Large runs of equal elements must not stall the narrowing loop
    let mut values = vec![3.0, 3.0, 5.0, 5.0, 5.0, 1.0, 1.0, 1.0, 7.0, 7.0];
    assert_eq!(select_kth(&mut values, 4), 3.0);
    assert_eq!(select_kth(&mut values, 5), 5.0);

    let mut values = vec![2.0; 64];
    assert_eq!(select_kth(&mut values, 31), 2.0);
}

#[test]
fn test_select_kth_sorted_input() {
    let mut values: Vec<f64> = (0..1000).map(|v| v as f64).collect();
    assert_eq!(select_kth(&mut values, 500), 500.0);

    let mut values: Vec<f64> = (0..1000).rev().map(|v| v as f64).collect();
    assert_eq!(select_kth(&mut values, 0), 0.0);
    assert_eq!(select_kth(&mut values, 999), 999.0);
}
