/// Calculate the median value of a vector by sorting a copy.
///
/// This is the straightforward reference implementation; `method::median`
/// computes the same value by selection without the full sort.
pub fn calc_median(x: &[f64]) -> Option<f64> {
    if x.is_empty() {
        return None;
    }
    let mut sorted = x.to_vec();
    sorted.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let mid = sorted.len() / 2;

    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

#[test]
fn test_calc_median() {
    assert_eq!(calc_median(&[5.0, 3.0, 4.0, 2.0, 1.0]), Some(3.0));
    assert_eq!(calc_median(&[1.0, 3.0, 4.0, 2.0]), Some(2.5));
    assert_eq!(calc_median(&[7.0]), Some(7.0));
    assert_eq!(calc_median(&[]), None);
}

#[test]
fn test_calc_median_matches_selection() {
    use crate::method::median::median;
    use rand::{thread_rng, Rng};

    let mut rng = thread_rng();
    for n in 1..50 {
        let values: Vec<f64> = (0..n).map(|_| rng.gen_range(-10..10) as f64).collect();
        let mut scratch = values.clone();
        assert_eq!(median(&mut scratch), calc_median(&values));
    }
}

/// Calculate the mean of a slice.
pub fn calc_mean(x: &[f64]) -> f64 {
    let total: f64 = x.iter().sum();
    total / (x.len() as f64)
}

#[test]
fn test_calc_mean() {
    assert_eq!(calc_mean(&[1.0, 2.0, 3.0]), 2.0);
    assert_eq!(calc_mean(&[5.0, 5.0]), 5.0);
    assert_eq!(calc_mean(&[10.0, 20.0]), 15.0);
}
