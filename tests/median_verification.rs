use std::time::Instant;

use rand::{thread_rng, Rng};

use rs_fastmedian::method::median::median;
use rs_fastmedian::stats::linalg::{calc_least_squares, calc_r2};
use rs_fastmedian::stats::vec::calc_median;
use rs_fastmedian::util::numeric::duration_ms;

#[test]
fn test_selection_agrees_with_sort_oracle() {
    let mut rng = thread_rng();
    for _ in 0..200 {
        let n = rng.gen_range(1..=300);
        // Eighths are exactly representable, so equality against the oracle is exact
        let values: Vec<f64> = (0..n)
            .map(|_| rng.gen_range(-1000..1000) as f64 / 8.0)
            .collect();

        let mut scratch = values.clone();
        assert_eq!(median(&mut scratch), calc_median(&values));
    }
}

#[test]
fn test_selection_agrees_on_duplicate_heavy_arrays() {
    let mut rng = thread_rng();
    for n in [10_000, 100_001] {
        let values: Vec<f64> = (0..n).map(|_| rng.gen_range(0..500) as f64).collect();
        let mut scratch = values.clone();
        assert_eq!(median(&mut scratch), calc_median(&values));
    }
}

#[test]
fn test_absent_and_trivial_lengths() {
    let mut rng = thread_rng();

    assert_eq!(median(&mut []), None);

    for _ in 0..50 {
        let x = rng.gen_range(-1000..1000) as f64 / 4.0;
        assert_eq!(median(&mut [x]), Some(x));

        // The two-element mean must not depend on order
        let y = rng.gen_range(-1000..1000) as f64 / 4.0;
        assert_eq!(median(&mut [x, y]), Some((x + y) / 2.0));
        assert_eq!(median(&mut [y, x]), Some((x + y) / 2.0));
    }
}

#[test]
fn test_median_value_is_idempotent() {
    // The first call permutes the buffer but leaves the multiset unchanged,
    // so a second call over the permuted buffer yields the same value
    let mut rng = thread_rng();
    for n in [5, 64, 1001] {
        let mut values: Vec<f64> = (0..n).map(|_| rng.gen::<f64>()).collect();
        let first = median(&mut values);
        let second = median(&mut values);
        assert_eq!(first, second);
    }
}

#[test]
fn test_adversarial_shapes_complete_and_agree() {
    // Shapes crafted to defeat fixed-position pivots must stay linear and correct
    let mut values: Vec<f64> = (0..100_001).map(|v| v as f64).collect();
    assert_eq!(median(&mut values), Some(50_000.0));

    let mut values: Vec<f64> = (0..100_001).rev().map(|v| v as f64).collect();
    assert_eq!(median(&mut values), Some(50_000.0));

    let mut values = vec![7.5; 100_000];
    assert_eq!(median(&mut values), Some(7.5));

    let mut values: Vec<f64> = (0..100_000).map(|v| (v % 2) as f64).collect();
    assert_eq!(median(&mut values), Some(0.5));

    // Organ pipe: every value appears twice, rising then falling
    let mut values: Vec<f64> = (0..50_000).chain((0..50_000).rev()).map(|v| v as f64).collect();
    assert_eq!(median(&mut values), Some(24_999.5));
}

/// Time a single selection over a fresh random array of the given size.
fn time_selection_ms(size: usize, rng: &mut impl Rng) -> f64 {
    let mut values: Vec<f64> = (0..size).map(|_| rng.gen_range(0..size) as f64).collect();
    let start = Instant::now();
    median(&mut values).unwrap();
    duration_ms(start.elapsed())
}

#[test]
fn test_selection_time_grows_linearly() {
    let mut rng = thread_rng();

    // Warm up the allocator before measuring
    time_selection_ms(100_000, &mut rng);

    let mut sizes: Vec<f64> = Vec::new();
    let mut times: Vec<f64> = Vec::new();
    for size in (50_000..=500_000).step_by(50_000) {
        // Take the fastest of three runs to damp scheduler noise
        let ms = (0..3)
            .map(|_| time_selection_ms(size, &mut rng))
            .fold(f64::INFINITY, f64::min);
        sizes.push(size as f64);
        times.push(ms);
    }

    // A quadratic regression from a bad pivot rule destroys the linear fit
    let params = calc_least_squares(&sizes, &times);
    let r2 = calc_r2(&times, &params.predict(&sizes));
    assert!(
        r2 >= 0.8,
        "Elapsed time should scale linearly with input size (r2 = {})",
        r2
    );
}
