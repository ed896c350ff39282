use crate::method::select::select_kth;

/// Calculate the median of `values` by selection, without fully sorting.
///
/// The slice is permuted (partially sorted) as a side effect; callers that
/// need the original order must pass a copy. An empty slice has no median and
/// yields `None`. Odd lengths return the middle order statistic, even lengths
/// the mean of the two middle order statistics; the second selection runs over
/// the partially partitioned leftovers of the first, so it terminates quickly.
pub fn median(values: &mut [f64]) -> Option<f64> {
    match values.len() {
        0 => None,
        1 => Some(values[0]),
        2 => Some((values[0] + values[1]) / 2.0),
        n => {
            let mid = (n - 1) / 2;
            if n % 2 == 1 {
                Some(select_kth(values, mid))
            } else {
                let lower = select_kth(values, mid);
                let upper = select_kth(values, mid + 1);
                Some((lower + upper) / 2.0)
            }
        }
    }
}

#[test]
fn test_median() {
    assert_eq!(median(&mut []), None);
    assert_eq!(median(&mut [42.0]), Some(42.0));
    assert_eq!(median(&mut [3.0, 1.0]), Some(2.0));
    assert_eq!(median(&mut [3.0, 1.0, 2.0]), Some(2.0));
    assert_eq!(median(&mut [7.0, 4.0, 1.0, 8.0]), Some(5.5));
}

#[test]
fn test_median_duplicates() {
    assert_eq!(
        median(&mut [3.0, 3.0, 5.0, 5.0, 5.0, 1.0, 1.0, 1.0, 7.0, 7.0]),
        Some(4.0)
    );
    assert_eq!(
        median(&mut [3.0, 3.0, 5.0, 5.0, 1.0, 1.0, 1.0, 7.0, 7.0]),
        Some(3.0)
    );
    assert_eq!(median(&mut [3.0, 3.0, 3.0, 3.0, 3.0]), Some(3.0));
    assert_eq!(median(&mut [0.0, 0.0, 0.0, 0.0, 0.0]), Some(0.0));
}

#[test]
fn test_median_sorted_input() {
    assert_eq!(median(&mut [1.0, 2.0, 3.0, 4.0, 5.0]), Some(3.0));
    assert_eq!(median(&mut [1.0, 2.0, 3.0, 4.0, 5.0, 6.0]), Some(3.5));
    assert_eq!(median(&mut [5.0, 4.0, 3.0, 2.0, 1.0]), Some(3.0));
    assert_eq!(median(&mut [6.0, 5.0, 4.0, 3.0, 2.0, 1.0]), Some(3.5));
}

#[test]
fn test_median_signs_and_fractions() {
    assert_eq!(median(&mut [-5.0, -1.0, -10.0, -3.0, -7.0]), Some(-5.0));
    assert_eq!(median(&mut [-10.0, -20.0, -30.0, -40.0, -50.0]), Some(-30.0));
    assert_eq!(median(&mut [10.0, -3.0, 5.0, 0.0, -10.0, 8.0]), Some(2.5));
    assert_eq!(median(&mut [0.0, 1.0, -1.0, 5.0, -5.0]), Some(0.0));
    assert_eq!(median(&mut [1.5, 2.7, 3.2, 4.8, 5.1]), Some(3.2));
}

#[test]
fn test_median_large_ramp() {
    let mut values: Vec<f64> = (1..=10001).map(|v| v as f64).collect();
    assert_eq!(median(&mut values), Some(5001.0));
}

#[test]
fn test_median_permutes_but_preserves_values() {
    use rand::{thread_rng, Rng};

    let mut rng = thread_rng();
    let mut values: Vec<f64> = (0..101).map(|_| rng.gen_range(0..30) as f64).collect();
    let mut expected = values.clone();
    expected.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    median(&mut values).unwrap();

    values.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    assert_eq!(values, expected);
}
