//! Quartic well test function (1D, non-convex, smooth)

/// f(x) = 0.01 x^4 - 0.02 x^3 - 0.2 x^2 + 0.5 x + 1
/// Non-convex with a local minimum near x = 3.3672 and the
/// global minimum f(x) = -0.95302 at x = -3.0747
/// Bounds: x in [-5, 5]
pub fn quartic_well(x: f64) -> f64 {
    0.01 * x * x * x * x - 0.02 * x * x * x - 0.2 * x * x + 0.5 * x + 1.0
}

/// First derivative of [`quartic_well`]: f'(x) = 0.04 x^3 - 0.06 x^2 - 0.4 x + 0.5
pub fn quartic_well_grad(x: f64) -> f64 {
    0.04 * x * x * x - 0.06 * x * x - 0.4 * x + 0.5
}

/// Second derivative of [`quartic_well`]: f''(x) = 0.12 x^2 - 0.12 x - 0.4
/// Negative between the two inflection points, so the function is not convex.
pub fn quartic_well_hess(x: f64) -> f64 {
    0.12 * x * x - 0.12 * x - 0.4
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::derivative_check::{fd_derivative, fd_second_derivative};

    #[test]
    fn test_quartic_well_known_properties() {
        // Stationary points of the cubic derivative.
        let x_global = -3.0747;
        let x_local = 3.3672;

        assert!(
            quartic_well_grad(x_global).abs() < 1e-3,
            "gradient should be near zero at the global minimum, got {}",
            quartic_well_grad(x_global)
        );
        assert!(
            quartic_well_grad(x_local).abs() < 1e-3,
            "gradient should be near zero at the local minimum, got {}",
            quartic_well_grad(x_local)
        );

        // Both stationary points are minima (positive curvature), and the
        // left one is the global minimum.
        assert!(quartic_well_hess(x_global) > 0.0);
        assert!(quartic_well_hess(x_local) > 0.0);
        assert!(quartic_well(x_global) < quartic_well(x_local));
        assert!((quartic_well(x_global) + 0.95302).abs() < 1e-4);
    }

    #[test]
    fn test_quartic_well_is_not_convex() {
        // The second derivative changes sign, e.g. at the origin.
        assert!(quartic_well_hess(0.0) < 0.0);
        assert!(quartic_well_hess(5.0) > 0.0);
    }

    #[test]
    fn test_quartic_well_derivatives_match_finite_differences() {
        let mut x = -5.0;
        while x <= 5.0 {
            let fd_g = fd_derivative(quartic_well, x, 1e-6);
            assert!(
                (fd_g - quartic_well_grad(x)).abs() < 1e-6,
                "gradient mismatch at x = {}: finite difference {} vs analytic {}",
                x,
                fd_g,
                quartic_well_grad(x)
            );

            let fd_h = fd_second_derivative(quartic_well, x, 1e-4);
            assert!(
                (fd_h - quartic_well_hess(x)).abs() < 1e-5,
                "Hessian mismatch at x = {}: finite difference {} vs analytic {}",
                x,
                fd_h,
                quartic_well_hess(x)
            );

            x += 0.25;
        }
    }
}
