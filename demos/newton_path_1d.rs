//! Build a Newton iteration path on the 1D convex example function by hand
//! and render it on top of the function and its derivatives.

use math_example_functions::plot::{linspace, plot_convergence_1d};
use math_example_functions::{ConvergenceTrace, exp_linear, exp_linear_grad, exp_linear_hess};

fn main() {
    let mut trace = ConvergenceTrace::new("exp_linear");

    // A few Newton steps, recorded point by point. The minimum is at
    // x = 2 ln 2, so the iterates settle quickly.
    let mut x = 4.0;
    for _ in 0..8 {
        trace
            .record(&[x], exp_linear(x))
            .expect("1D points share a dimension");
        x -= exp_linear_grad(x) / exp_linear_hess(x);
    }

    let best = trace.best().expect("trace has points");
    println!(
        "Newton path: {} points, best f = {:.9} at x = {:.9}",
        trace.len(),
        best.best_so_far,
        best.x[0]
    );
    println!(
        "Expected minimum: f = {:.9} at x = {:.9}",
        2.0 - 2.0 * std::f64::consts::LN_2,
        2.0 * std::f64::consts::LN_2
    );

    let xs = linspace(-5.0, 5.0, 200).expect("valid sample grid");
    let plot = plot_convergence_1d(
        "exp_linear",
        exp_linear,
        exp_linear_grad,
        exp_linear_hess,
        &xs,
        &trace,
        "newton",
    )
    .expect("1D trace matches the 1D plot");

    let out = std::env::temp_dir().join("exp_linear_newton.html");
    plot.write_html(&out);
    println!("Plot written to {:?}", out);
}
