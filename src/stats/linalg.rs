use crate::model::linalg::LinearModelParams;
use crate::stats::vec::calc_mean;

/// Fit an ordinary least squares line through the X/Y sample pairs.
pub fn calc_least_squares(x: &[f64], y: &[f64]) -> LinearModelParams {
    assert_eq!(x.len(), y.len(), "Least squares requires equal length vectors.");
    assert!(!x.is_empty(), "Least squares requires at least one sample.");

    let n = x.len() as f64;
    let sum_x: f64 = x.iter().sum();
    let sum_y: f64 = y.iter().sum();
    let sum_xy: f64 = x.iter().zip(y.iter()).map(|(&x_i, &y_i)| x_i * y_i).sum();
    let sum_xx: f64 = x.iter().map(|&x_i| x_i * x_i).sum();

    let gradient = (n * sum_xy - sum_x * sum_y) / (n * sum_xx - sum_x * sum_x);
    let intercept = (sum_y - gradient * sum_x) / n;

    LinearModelParams::new(gradient, intercept)
}

#[test]
fn test_calc_least_squares() {
    use crate::util::numeric::round_f64;

    let params = calc_least_squares(&[1.0, 2.0, 3.0], &[3.0, 5.0, 7.0]);
    assert_eq!(params.gradient, 2.0);
    assert_eq!(params.intercept, 1.0);

    let params = calc_least_squares(&[0.0, 1.0, 2.0, 3.0], &[1.0, 3.0, 4.0, 7.0]);
    assert_eq!(round_f64(params.gradient, 10), 1.9);
    assert_eq!(round_f64(params.intercept, 10), 0.9);
}

/// Calculate the coefficient of determination
pub fn calc_r2(y: &[f64], y_hat: &[f64]) -> f64 {
    assert_eq!(y.len(), y_hat.len(), "R2 requires equal length vectors.");

    let y_mean = calc_mean(y);

    let (numerator, denominator) = y.iter().zip(y_hat.iter()).fold(
        (0.0, 0.0),
        |(num, denom), (&y_i, &y_hat_i)| {
            (
                num + (y_i - y_hat_i).powi(2),
                denom + (y_i - y_mean).powi(2),
            )
        },
    );

    1.0 - (numerator / denominator)
}

#[test]
fn test_calc_r2() {
    assert_eq!(
        calc_r2(&[84.0, 0.0, 62.0, 20.0], &[0.0, 59.04, 11.48, 137.76]),
        -5.112312310133756
    );
    assert_eq!(calc_r2(&[22.0, 0.0], &[0.0, 103.7]), -45.43673553719008);
}

#[test]
fn test_calc_r2_perfect_fit() {
    let x = [1.0, 2.0, 3.0, 4.0];
    let y = [3.0, 5.0, 7.0, 9.0];
    let params = calc_least_squares(&x, &y);
    assert_eq!(calc_r2(&y, &params.predict(&x)), 1.0);
}
