//! Exponential-minus-linear test function (N-dimensional, convex, separable)

use ndarray::{Array1, Array2};

/// f(x) = sum_i (e^(x_i/2) - x_i), the N-dimensional extension of
/// the 1D exponential-minus-linear function. Separable and strictly convex.
/// Global minimum: f(x) = n (2 - 2 ln 2) at x = (2 ln 2, ..., 2 ln 2)
/// Bounds: x_i in [-5, 5]
pub fn exp_linear_nd(x: &Array1<f64>) -> f64 {
    x.iter().map(|&xi| (0.5 * xi).exp() - xi).sum()
}

/// Gradient of [`exp_linear_nd`]: component-wise 0.5 e^(x_i/2) - 1
pub fn exp_linear_nd_grad(x: &Array1<f64>) -> Array1<f64> {
    x.mapv(|xi| 0.5 * (0.5 * xi).exp() - 1.0)
}

/// Hessian of [`exp_linear_nd`]: diagonal with entries 0.25 e^(x_i/2)
pub fn exp_linear_nd_hess(x: &Array1<f64>) -> Array2<f64> {
    Array2::from_diag(&x.mapv(|xi| 0.25 * (0.5 * xi).exp()))
}
