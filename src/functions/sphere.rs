//! Sphere test function

use ndarray::{Array1, Array2};

/// Sphere function - N-dimensional, convex
/// f(x) = sum(x[i]^2)
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-5, 5]
pub fn sphere(x: &Array1<f64>) -> f64 {
    x.iter().map(|&xi| xi * xi).sum()
}

/// Gradient of [`sphere`]: 2x
pub fn sphere_grad(x: &Array1<f64>) -> Array1<f64> {
    x.mapv(|xi| 2.0 * xi)
}

/// Hessian of [`sphere`]: constant 2I
pub fn sphere_hess(x: &Array1<f64>) -> Array2<f64> {
    Array2::from_diag(&Array1::from_elem(x.len(), 2.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere_known_properties() {
        let origin = Array1::from(vec![0.0, 0.0]);
        assert_eq!(sphere(&origin), 0.0);
        assert!(sphere_grad(&origin).iter().all(|&g| g == 0.0));

        let x = Array1::from(vec![1.0, -2.0, 3.0]);
        assert_eq!(sphere(&x), 14.0);
        assert_eq!(sphere_grad(&x), Array1::from(vec![2.0, -4.0, 6.0]));

        let h = sphere_hess(&x);
        assert_eq!(h.shape(), &[3, 3]);
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(h[[i, j]], if i == j { 2.0 } else { 0.0 });
            }
        }
    }
}
