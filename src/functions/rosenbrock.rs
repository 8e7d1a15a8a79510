//! Rosenbrock test function

use ndarray::{Array1, Array2};

/// Rosenbrock function - N-dimensional, non-convex
/// Global minimum: f(x) = 0 at x = (1, 1, ..., 1)
/// Bounds: x_i in [-2.048, 2.048]
pub fn rosenbrock(x: &Array1<f64>) -> f64 {
    let mut sum = 0.0;
    for i in 0..x.len() - 1 {
        let xi = x[i];
        let xi_plus_1 = x[i + 1];
        sum += 100.0 * (xi_plus_1 - xi.powi(2)).powi(2) + (1.0 - xi).powi(2);
    }
    sum
}

/// Gradient of [`rosenbrock`]. Each interior component receives
/// contributions from two consecutive valley terms.
pub fn rosenbrock_grad(x: &Array1<f64>) -> Array1<f64> {
    let n = x.len();
    let mut g = Array1::zeros(n);
    for i in 0..n - 1 {
        g[i] += -400.0 * x[i] * (x[i + 1] - x[i].powi(2)) - 2.0 * (1.0 - x[i]);
        g[i + 1] += 200.0 * (x[i + 1] - x[i].powi(2));
    }
    g
}

/// Hessian of [`rosenbrock`]: tridiagonal.
pub fn rosenbrock_hess(x: &Array1<f64>) -> Array2<f64> {
    let n = x.len();
    let mut h = Array2::zeros((n, n));
    for i in 0..n - 1 {
        h[[i, i]] += 1200.0 * x[i].powi(2) - 400.0 * x[i + 1] + 2.0;
        h[[i, i + 1]] += -400.0 * x[i];
        h[[i + 1, i]] += -400.0 * x[i];
        h[[i + 1, i + 1]] += 200.0;
    }
    h
}
