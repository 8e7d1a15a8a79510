//! Build a gradient-descent path on the 2D restriction of the separable
//! convex example function, save it as a CSV trace, and render the surface
//! with the path overlaid.

use math_example_functions::plot::plot_convergence_2d;
use math_example_functions::{ConvergenceTrace, exp_linear_nd, exp_linear_nd_grad};
use ndarray::Array1;

fn main() {
    let mut trace = ConvergenceTrace::new("exp_linear_nd");

    let mut x = Array1::from(vec![4.0, -4.0]);
    let step = 0.8;
    for _ in 0..40 {
        trace
            .record(x.as_slice().expect("contiguous"), exp_linear_nd(&x))
            .expect("2D points share a dimension");
        let g = exp_linear_nd_grad(&x);
        x = &x - &(&g * step);
    }

    let best = trace.best().expect("trace has points");
    println!(
        "Descent path: {} points, best f = {:.9} at ({:.6}, {:.6})",
        trace.len(),
        best.best_so_far,
        best.x[0],
        best.x[1]
    );

    let csv = std::env::temp_dir().join("exp_linear_nd.csv");
    trace.save_csv(&csv).expect("trace CSV is writable");
    println!("Trace CSV written to {:?}", csv);

    let plot = plot_convergence_2d(
        "exp_linear_nd",
        exp_linear_nd,
        (-5.0, 5.0),
        (-5.0, 5.0),
        100,
        100,
        &trace,
    )
    .expect("2D trace matches the surface plot");

    let out = std::env::temp_dir().join("exp_linear_nd_descent.html");
    plot.write_html(&out);
    println!("Plot written to {:?}", out);
}
