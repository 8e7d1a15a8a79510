//! Booth test function

use ndarray::{Array1, Array2, arr2};

/// Booth function - 2D convex quadratic
/// f(x) = (x1 + 2 x2 - 7)^2 + (2 x1 + x2 - 5)^2
/// Global minimum: f(x) = 0 at x = (1, 3)
/// Bounds: x_i in [-10, 10]
pub fn booth(x: &Array1<f64>) -> f64 {
    let x1 = x[0];
    let x2 = x[1];
    (x1 + 2.0 * x2 - 7.0).powi(2) + (2.0 * x1 + x2 - 5.0).powi(2)
}

/// Gradient of [`booth`]
pub fn booth_grad(x: &Array1<f64>) -> Array1<f64> {
    let x1 = x[0];
    let x2 = x[1];
    Array1::from(vec![
        10.0 * x1 + 8.0 * x2 - 34.0,
        8.0 * x1 + 10.0 * x2 - 38.0,
    ])
}

/// Hessian of [`booth`]: constant and positive definite
pub fn booth_hess(_x: &Array1<f64>) -> Array2<f64> {
    arr2(&[[10.0, 8.0], [8.0, 10.0]])
}
