//! Rastrigin test function

use ndarray::{Array1, Array2};
use std::f64::consts::PI;

/// Rastrigin function - N-dimensional, highly multimodal
/// f(x) = 10 n + sum(x_i^2 - 10 cos(2 pi x_i))
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-5.12, 5.12]
pub fn rastrigin(x: &Array1<f64>) -> f64 {
    let n = x.len() as f64;
    10.0 * n
        + x.iter()
            .map(|&xi| xi.powi(2) - 10.0 * (2.0 * PI * xi).cos())
            .sum::<f64>()
}

/// Gradient of [`rastrigin`]: component-wise 2 x_i + 20 pi sin(2 pi x_i)
pub fn rastrigin_grad(x: &Array1<f64>) -> Array1<f64> {
    x.mapv(|xi| 2.0 * xi + 20.0 * PI * (2.0 * PI * xi).sin())
}

/// Hessian of [`rastrigin`]: diagonal with entries 2 + 40 pi^2 cos(2 pi x_i)
pub fn rastrigin_hess(x: &Array1<f64>) -> Array2<f64> {
    Array2::from_diag(&x.mapv(|xi| 2.0 + 40.0 * PI.powi(2) * (2.0 * PI * xi).cos()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::derivative_check::fd_gradient;

    #[test]
    fn test_rastrigin_known_minimum() {
        let origin = Array1::from(vec![0.0, 0.0]);
        assert!(rastrigin(&origin).abs() < 1e-12);
        assert!(rastrigin_grad(&origin).iter().all(|&g| g.abs() < 1e-12));

        // Away from the origin the function is positive and the diagonal
        // curvature at the minimum is strongly positive.
        let x = Array1::from(vec![1.0, -2.0]);
        assert!(rastrigin(&x) > 0.0);
        let h = rastrigin_hess(&origin);
        assert!((h[[0, 0]] - (2.0 + 40.0 * PI.powi(2))).abs() < 1e-10);
        assert_eq!(h[[0, 1]], 0.0);
    }

    #[test]
    fn test_rastrigin_gradient_matches_finite_differences() {
        for point in [vec![0.25, -0.75], vec![1.1, 2.3, -3.7]] {
            let x = Array1::from(point.clone());
            let fd = fd_gradient(rastrigin, &x, 1e-6);
            let g = rastrigin_grad(&x);
            for i in 0..x.len() {
                assert!(
                    (fd[i] - g[i]).abs() < 1e-3 * (1.0 + g[i].abs()),
                    "component {} at {:?}: finite difference {} vs analytic {}",
                    i,
                    point,
                    fd[i],
                    g[i]
                );
            }
        }
    }
}
