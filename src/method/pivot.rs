use std::cmp::Ordering;

/// Number of elements per block in the grouped median reduction.
pub const BLOCK: usize = 5;

/// Sort a block of at most five elements in place and return its middle value.
fn median_of_block(block: &mut [f64]) -> f64 {
    block.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    block[block.len() / 2]
}

#[test]
fn test_median_of_block() {
    assert_eq!(median_of_block(&mut [7.0]), 7.0);
    assert_eq!(median_of_block(&mut [9.0, 2.0]), 9.0);
    assert_eq!(median_of_block(&mut [9.0, 2.0, 4.0]), 4.0);
    assert_eq!(median_of_block(&mut [5.0, 1.0, 4.0, 2.0, 3.0]), 3.0);
}

/// Select a pivot value that is guaranteed to sit well inside the value
/// distribution of `values`.
///
/// The slice is cut into consecutive blocks of five, each block is sorted in
/// place so its median lands at the middle, and the block medians are gathered
/// into a scratch buffer. The same reduction is then repeated on that buffer,
/// compacting it in place, until at most one block remains. The result is a
/// pseudomedian drawn from the slice itself, greater than a good fraction of
/// the elements and less than another, which keeps quickselect linear on
/// adversarial inputs.
pub fn median_of_medians(values: &mut [f64]) -> f64 {
    debug_assert!(!values.is_empty(), "Cannot select a pivot from an empty range.");
    if values.len() <= BLOCK {
        return median_of_block(values);
    }

    // First round: one median per block of five, short final block included
    let mut medians: Vec<f64> = Vec::with_capacity(values.len().div_ceil(BLOCK));
    for block in values.chunks_mut(BLOCK) {
        medians.push(median_of_block(block));
    }

    // Reduce the scratch buffer in place until a single block remains
    while medians.len() > BLOCK {
        let n_blocks = medians.len().div_ceil(BLOCK);
        for b in 0..n_blocks {
            let start = b * BLOCK;
            let end = usize::min(start + BLOCK, medians.len());
            let m = median_of_block(&mut medians[start..end]);
            medians[b] = m;
        }
        medians.truncate(n_blocks);
    }

    median_of_block(&mut medians)
}

#[test]
fn test_median_of_medians() {
    // Two full reduction rounds over a sorted ramp settle on the true median
    let mut values: Vec<f64> = (0..125).map(|v| v as f64).collect();
    assert_eq!(median_of_medians(&mut values), 62.0);

    // Same ramp reversed
    let mut values: Vec<f64> = (0..125).rev().map(|v| v as f64).collect();
    assert_eq!(median_of_medians(&mut values), 62.0);

    // At most one block: plain block median
    let mut values = vec![8.0, 6.0, 7.0, 5.0, 3.0];
    assert_eq!(median_of_medians(&mut values), 6.0);
    let mut values = vec![2.0];
    assert_eq!(median_of_medians(&mut values), 2.0);
}

#[test]
fn test_median_of_medians_is_pseudomedian() {
    use rand::{thread_rng, Rng};

    let mut rng = thread_rng();
    for n in [8, 25, 100, 1000] {
        let mut values: Vec<f64> = (0..n).map(|_| rng.gen::<f64>()).collect();
        let original = values.clone();
        let pivot = median_of_medians(&mut values);

        // Always drawn from the input, never its extremes
        assert!(original.contains(&pivot));
        let min = original.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = original.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        assert!(pivot > min && pivot < max);
    }
}

#[test]
fn test_median_of_medians_short_final_block() {
    // 7 elements: blocks [5, 2], medians are 3.0 and 7.0, result 7.0
    let mut values = vec![5.0, 1.0, 4.0, 2.0, 3.0, 7.0, 6.0];
    assert_eq!(median_of_medians(&mut values), 7.0);
}

/// Index of the median of `values[low]`, `values[mid]` and `values[high]`.
pub fn median_of_three(values: &[f64], low: usize, mid: usize, high: usize) -> usize {
    if values[low] <= values[mid] {
        if values[mid] <= values[high] {
            mid
        } else if values[low] <= values[high] {
            high
        } else {
            low
        }
    } else if values[low] <= values[high] {
        low
    } else if values[mid] <= values[high] {
        high
    } else {
        mid
    }
}

#[test]
fn test_median_of_three() {
    // All orderings of three distinct values point at 2.0
    for values in [
        [1.0, 2.0, 3.0],
        [1.0, 3.0, 2.0],
        [2.0, 1.0, 3.0],
        [2.0, 3.0, 1.0],
        [3.0, 1.0, 2.0],
        [3.0, 2.0, 1.0],
    ] {
        let idx = median_of_three(&values, 0, 1, 2);
        assert_eq!(values[idx], 2.0);
    }
    // Ties resolve to one of the tied positions
    let values = [7.0, 7.0, 1.0];
    let idx = median_of_three(&values, 0, 1, 2);
    assert_eq!(values[idx], 7.0);
}
