//! Central finite-difference approximations used to verify analytic
//! gradients and Hessians against their defining functions.

use ndarray::{Array1, Array2};

/// Central-difference approximation of f'(x).
pub fn fd_derivative<F: Fn(f64) -> f64>(f: F, x: f64, h: f64) -> f64 {
    (f(x + h) - f(x - h)) / (2.0 * h)
}

/// Central-difference approximation of f''(x).
pub fn fd_second_derivative<F: Fn(f64) -> f64>(f: F, x: f64, h: f64) -> f64 {
    (f(x + h) - 2.0 * f(x) + f(x - h)) / (h * h)
}

/// Central-difference gradient of a scalar field, one coordinate at a time.
pub fn fd_gradient<F: Fn(&Array1<f64>) -> f64>(f: F, x: &Array1<f64>, h: f64) -> Array1<f64> {
    let n = x.len();
    let mut g = Array1::zeros(n);
    let mut probe = x.clone();
    for i in 0..n {
        probe[i] = x[i] + h;
        let plus = f(&probe);
        probe[i] = x[i] - h;
        let minus = f(&probe);
        probe[i] = x[i];
        g[i] = (plus - minus) / (2.0 * h);
    }
    g
}

/// Central-difference Hessian built by differentiating a gradient function.
/// The result is symmetrized by averaging each off-diagonal pair, since the
/// column-wise differences are not exactly symmetric in floating point.
pub fn fd_hessian<G: Fn(&Array1<f64>) -> Array1<f64>>(
    grad: G,
    x: &Array1<f64>,
    h: f64,
) -> Array2<f64> {
    let n = x.len();
    let mut hess = Array2::zeros((n, n));
    let mut probe = x.clone();
    for j in 0..n {
        probe[j] = x[j] + h;
        let plus = grad(&probe);
        probe[j] = x[j] - h;
        let minus = grad(&probe);
        probe[j] = x[j];
        for i in 0..n {
            hess[[i, j]] = (plus[i] - minus[i]) / (2.0 * h);
        }
    }

    for i in 0..n {
        for j in 0..i {
            let avg = 0.5 * (hess[[i, j]] + hess[[j, i]]);
            hess[[i, j]] = avg;
            hess[[j, i]] = avg;
        }
    }
    hess
}
