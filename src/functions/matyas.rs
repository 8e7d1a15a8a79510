//! Matyas test function

use ndarray::{Array1, Array2, arr2};

/// Matyas function - 2D convex, very shallow around the minimum
/// f(x) = 0.26 (x1^2 + x2^2) - 0.48 x1 x2
/// Global minimum: f(x) = 0 at x = (0, 0)
/// Bounds: x_i in [-10, 10]
pub fn matyas(x: &Array1<f64>) -> f64 {
    let x1 = x[0];
    let x2 = x[1];
    0.26 * (x1.powi(2) + x2.powi(2)) - 0.48 * x1 * x2
}

/// Gradient of [`matyas`]
pub fn matyas_grad(x: &Array1<f64>) -> Array1<f64> {
    let x1 = x[0];
    let x2 = x[1];
    Array1::from(vec![0.52 * x1 - 0.48 * x2, 0.52 * x2 - 0.48 * x1])
}

/// Hessian of [`matyas`]: constant, eigenvalues 0.04 and 1.0
pub fn matyas_hess(_x: &Array1<f64>) -> Array2<f64> {
    arr2(&[[0.52, -0.48], [-0.48, 0.52]])
}
