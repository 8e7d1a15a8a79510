//! Himmelblau test function

use ndarray::{Array1, Array2, arr2};

/// Himmelblau function - 2D multimodal
/// f(x) = (x1^2 + x2 - 11)^2 + (x1 + x2^2 - 7)^2
/// Global minima: f(x) = 0 at (3, 2), (-2.805118, 3.131312),
/// (-3.779310, -3.283186), (3.584428, -1.848126)
/// Bounds: x_i in [-6, 6]
pub fn himmelblau(x: &Array1<f64>) -> f64 {
    let x1 = x[0];
    let x2 = x[1];
    (x1.powi(2) + x2 - 11.0).powi(2) + (x1 + x2.powi(2) - 7.0).powi(2)
}

/// Gradient of [`himmelblau`]
pub fn himmelblau_grad(x: &Array1<f64>) -> Array1<f64> {
    let x1 = x[0];
    let x2 = x[1];
    let u = x1.powi(2) + x2 - 11.0;
    let v = x1 + x2.powi(2) - 7.0;
    Array1::from(vec![4.0 * x1 * u + 2.0 * v, 2.0 * u + 4.0 * x2 * v])
}

/// Hessian of [`himmelblau`]
pub fn himmelblau_hess(x: &Array1<f64>) -> Array2<f64> {
    let x1 = x[0];
    let x2 = x[1];
    arr2(&[
        [
            12.0 * x1.powi(2) + 4.0 * x2 - 42.0,
            4.0 * (x1 + x2),
        ],
        [
            4.0 * (x1 + x2),
            4.0 * x1 + 12.0 * x2.powi(2) - 26.0,
        ],
    ])
}
