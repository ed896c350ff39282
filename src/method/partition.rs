/// Partition `values[low..=high]` in place around the element at `pivot_idx`.
///
/// The pivot is parked at `low`, then two cursors nibble inward from both
/// ends, swapping out-of-place pairs as they go. Both cursors stop on elements
/// equal to the pivot, so runs of duplicates end up split between both sides
/// and each outer iteration makes progress even when every element is equal.
/// On return the pivot occupies its final sorted position within the subrange
/// and that absolute index is returned: everything before it is `<=` the
/// pivot and everything after it is `>=` the pivot.
pub fn partition_range(values: &mut [f64], low: usize, high: usize, pivot_idx: usize) -> usize {
    debug_assert!(low < high && high < values.len(), "Subrange must hold at least two elements.");
    debug_assert!(low <= pivot_idx && pivot_idx <= high, "Pivot must lie within the subrange.");

    values.swap(low, pivot_idx);
    let pivot = values[low];

    let mut left = low;
    let mut right = high + 1;
    loop {
        // Scan rightward over elements below the pivot
        left += 1;
        while left <= high && values[left] < pivot {
            left += 1;
        }
        // Scan leftward over elements above it; the parked pivot stops the cursor
        right -= 1;
        while values[right] > pivot {
            right -= 1;
        }
        if right <= left {
            break;
        }
        values.swap(left, right);
    }

    // The right cursor rests on the last element `<=` the pivot
    values.swap(low, right);
    right
}

#[test]
fn test_partition_range() {
    // Pivot value 5.0 of a sorted range lands back in the middle
    let mut values = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
    assert_eq!(partition_range(&mut values, 0, 8, 4), 4);
    assert_eq!(values[4], 5.0);

    // Pivot is the minimum / maximum of the subrange
    let mut values = vec![4.0, 9.0, 1.0, 7.0, 3.0];
    assert_eq!(partition_range(&mut values, 0, 4, 2), 0);
    assert_eq!(values[0], 1.0);
    let mut values = vec![4.0, 9.0, 1.0, 7.0, 3.0];
    assert_eq!(partition_range(&mut values, 0, 4, 1), 4);
    assert_eq!(values[4], 9.0);
}

#[test]
fn test_partition_range_splits_around_pivot() {
    use rand::{thread_rng, Rng};

    let mut rng = thread_rng();
    for _ in 0..100 {
        let mut values: Vec<f64> = (0..50).map(|_| rng.gen_range(0..20) as f64).collect();
        let mut sorted = values.clone();
        sorted.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        let pivot_idx = rng.gen_range(0..values.len());
        let pivot = values[pivot_idx];
        let p = partition_range(&mut values, 0, 49, pivot_idx);

        assert_eq!(values[p], pivot);
        assert!(values[..p].iter().all(|&v| v <= pivot));
        assert!(values[p + 1..].iter().all(|&v| v >= pivot));

        // Only the order may change, never the values
        let mut after = values.clone();
        after.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        assert_eq!(after, sorted);
    }
}

#[test]
fn test_partition_range_all_equal() {
    // Cursors interleave and meet near the middle rather than running to an end
    let mut values = vec![5.0; 9];
    assert_eq!(partition_range(&mut values, 0, 8, 4), 4);
    assert_eq!(values, vec![5.0; 9]);
}

#[test]
fn test_partition_range_subrange_untouched_outside() {
    let mut values = vec![100.0, -7.0, 3.0, 9.0, 1.0, 4.0, -100.0];
    let p = partition_range(&mut values, 1, 5, 3);
    assert_eq!(values[0], 100.0);
    assert_eq!(values[6], -100.0);
    assert_eq!(values[p], 9.0);
    assert_eq!(p, 5);
}
