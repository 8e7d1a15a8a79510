//! Exponential-minus-linear test function (1D, convex)

/// f(x) = e^(x/2) - x, strictly convex on the whole real line
/// Global minimum: f(x) = 2 - 2 ln 2 at x = 2 ln 2
/// Bounds: x in [-5, 5]
pub fn exp_linear(x: f64) -> f64 {
    (0.5 * x).exp() - x
}

/// First derivative of [`exp_linear`]: f'(x) = 0.5 e^(x/2) - 1
pub fn exp_linear_grad(x: f64) -> f64 {
    0.5 * (0.5 * x).exp() - 1.0
}

/// Second derivative of [`exp_linear`]: f''(x) = 0.25 e^(x/2), positive everywhere
pub fn exp_linear_hess(x: f64) -> f64 {
    0.25 * (0.5 * x).exp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::derivative_check::{fd_derivative, fd_second_derivative};

    #[test]
    fn test_exp_linear_known_minimum() {
        let x_star = 2.0 * std::f64::consts::LN_2;
        let f_star = 2.0 - 2.0 * std::f64::consts::LN_2;

        assert!(
            exp_linear_grad(x_star).abs() < 1e-14,
            "gradient should vanish at the minimum, got {}",
            exp_linear_grad(x_star)
        );
        assert!(
            (exp_linear(x_star) - f_star).abs() < 1e-14,
            "value at minimum should be {}, got {}",
            f_star,
            exp_linear(x_star)
        );
        assert!(
            exp_linear_hess(x_star) > 0.0,
            "curvature at the minimum should be positive"
        );
    }

    #[test]
    fn test_exp_linear_derivatives_match_finite_differences() {
        let mut x = -5.0;
        while x <= 5.0 {
            let fd_g = fd_derivative(exp_linear, x, 1e-6);
            assert!(
                (fd_g - exp_linear_grad(x)).abs() < 1e-7,
                "gradient mismatch at x = {}: finite difference {} vs analytic {}",
                x,
                fd_g,
                exp_linear_grad(x)
            );

            let fd_h = fd_second_derivative(exp_linear, x, 1e-4);
            assert!(
                (fd_h - exp_linear_hess(x)).abs() < 1e-5,
                "Hessian mismatch at x = {}: finite difference {} vs analytic {}",
                x,
                fd_h,
                exp_linear_hess(x)
            );

            x += 0.25;
        }
    }
}
