/// The parameters of a fitted linear model.
#[derive(Debug, Copy, Clone)]
pub struct LinearModelParams {
    pub gradient: f64,
    pub intercept: f64,
}

impl LinearModelParams {
    pub fn new(gradient: f64, intercept: f64) -> Self {
        Self {
            gradient,
            intercept,
        }
    }

    /// Compute the estimate for each X value.
    pub fn predict(&self, x: &[f64]) -> Vec<f64> {
        x.iter()
            .map(|x0| self.gradient * x0 + self.intercept)
            .collect()
    }
}

#[test]
fn test_predict() {
    let params = LinearModelParams::new(2.0, 1.0);
    assert_eq!(params.predict(&[0.0, 1.0, 2.0]), vec![1.0, 3.0, 5.0]);
}
