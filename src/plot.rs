//! Plotting helpers built on Plotly: function curves with derivative
//! overlays, contour and surface views, and convergence-path overlays.
//!
//! Every routine returns a [`plotly::Plot`] so callers can decide between
//! `write_html`, `to_json`, or further trace additions.

use crate::FunctionMetadata;
use crate::error::{ExampleError, Result};
use crate::registry::{Objective, Scalar1d};
use crate::trace::ConvergenceTrace;
use ndarray::Array1;
use plotly::common::{DashType, Line, Marker, MarkerSymbol, Mode, Title};
use plotly::contour::Contour;
use plotly::layout::{Axis, AxisType, Legend};
use plotly::{Layout, Plot, Scatter, Scatter3D, Surface};

// Tableau palette, matching the classic f / f' / f'' color coding.
const COLOR_VALUE: &str = "rgba(31, 119, 180, 1.0)";
const COLOR_GRAD: &str = "rgba(255, 127, 14, 1.0)";
const COLOR_HESS: &str = "rgba(44, 160, 44, 1.0)";
const COLOR_PATH: &str = "rgba(0, 0, 0, 1.0)";

/// Evenly spaced sample grid over [lower, upper] with n points.
pub fn linspace(lower: f64, upper: f64, n: usize) -> Result<Vec<f64>> {
    if n < 2 {
        return Err(ExampleError::SampleGridTooSmall { min: 2, got: n });
    }
    if lower >= upper {
        return Err(ExampleError::DegenerateBounds { lower, upper });
    }
    Ok((0..n)
        .map(|i| lower + (upper - lower) * i as f64 / (n - 1) as f64)
        .collect())
}

/// Plot a 1D function with its first and second derivatives on the given
/// sample points: solid value curve, dashed gradient, dotted Hessian, with
/// zero axis lines and a legend.
pub fn plot_function_1d(
    name: &str,
    f: Scalar1d,
    grad: Scalar1d,
    hess: Scalar1d,
    xs: &[f64],
) -> Result<Plot> {
    if xs.len() < 2 {
        return Err(ExampleError::SampleGridTooSmall {
            min: 2,
            got: xs.len(),
        });
    }

    let f_vals: Vec<f64> = xs.iter().map(|&x| f(x)).collect();
    let g_vals: Vec<f64> = xs.iter().map(|&x| grad(x)).collect();
    let h_vals: Vec<f64> = xs.iter().map(|&x| hess(x)).collect();

    let value_trace = Scatter::new(xs.to_vec(), f_vals)
        .mode(Mode::Lines)
        .name("f")
        .line(Line::new().color(COLOR_VALUE).width(2.0));
    let grad_trace = Scatter::new(xs.to_vec(), g_vals)
        .mode(Mode::Lines)
        .name("f'")
        .line(Line::new().color(COLOR_GRAD).width(2.0).dash(DashType::Dash));
    let hess_trace = Scatter::new(xs.to_vec(), h_vals)
        .mode(Mode::Lines)
        .name("f''")
        .line(Line::new().color(COLOR_HESS).width(2.0).dash(DashType::Dot));

    let mut plot = Plot::new();
    plot.add_trace(value_trace);
    plot.add_trace(grad_trace);
    plot.add_trace(hess_trace);
    plot.set_layout(layout_1d(name));
    Ok(plot)
}

/// Same as [`plot_function_1d`], with the convergence path overlaid as a
/// connected marker series. The trace must hold 1-dimensional points.
pub fn plot_convergence_1d(
    name: &str,
    f: Scalar1d,
    grad: Scalar1d,
    hess: Scalar1d,
    xs: &[f64],
    trace: &ConvergenceTrace,
    label: &str,
) -> Result<Plot> {
    require_dimension(trace, 1)?;

    let mut plot = plot_function_1d(name, f, grad, hess, xs)?;

    let path_x: Vec<f64> = trace.points().iter().map(|p| p.x[0]).collect();
    let path_y: Vec<f64> = trace.points().iter().map(|p| p.f_value).collect();
    let path_trace = Scatter::new(path_x, path_y)
        .mode(Mode::LinesMarkers)
        .name(label)
        .line(
            Line::new()
                .color(COLOR_PATH)
                .width(1.5)
                .dash(DashType::DashDot),
        )
        .marker(Marker::new().color(COLOR_PATH).size(6));
    plot.add_trace(path_trace);
    Ok(plot)
}

/// Contour plot of a 2D restriction of a function, optionally with global
/// minima markers from metadata and a convergence path overlay.
pub fn plot_contour_2d(
    name: &str,
    f: Objective,
    x_bounds: (f64, f64),
    y_bounds: (f64, f64),
    xn: usize,
    yn: usize,
    trace: Option<&ConvergenceTrace>,
    metadata: Option<&FunctionMetadata>,
) -> Result<Plot> {
    let x_vals = linspace(x_bounds.0, x_bounds.1, xn)?;
    let y_vals = linspace(y_bounds.0, y_bounds.1, yn)?;
    let z_vals = sample_grid(f, &x_vals, &y_vals);

    let contour = Contour::new(x_vals, y_vals, z_vals);

    let mut plot = Plot::new();
    plot.add_trace(contour);

    if let Some(meta) = metadata {
        add_global_minima(&mut plot, meta, x_bounds, y_bounds);
    }
    if let Some(trace) = trace {
        require_dimension(trace, 2)?;
        add_path_2d(&mut plot, trace);
    }

    let layout = Layout::new()
        .title(Title::with_text(format!("Function: {}", name)))
        .x_axis(Axis::new().title(Title::with_text("x1")))
        .y_axis(Axis::new().title(Title::with_text("x2")));
    plot.set_layout(layout);
    Ok(plot)
}

/// 3D surface plot of a 2D restriction of a function.
pub fn plot_surface_2d(
    name: &str,
    f: Objective,
    x_bounds: (f64, f64),
    y_bounds: (f64, f64),
    xn: usize,
    yn: usize,
) -> Result<Plot> {
    let x_vals = linspace(x_bounds.0, x_bounds.1, xn)?;
    let y_vals = linspace(y_bounds.0, y_bounds.1, yn)?;
    let z_vals = sample_grid(f, &x_vals, &y_vals);

    let surface = Surface::new(z_vals).x(x_vals).y(y_vals).opacity(0.85);

    let mut plot = Plot::new();
    plot.add_trace(surface);
    plot.set_layout(Layout::new().title(Title::with_text(format!("Function: {}", name))));
    Ok(plot)
}

/// Same as [`plot_surface_2d`], with the convergence path drawn through
/// 3D space as a connected marker series at the recorded function values.
pub fn plot_convergence_2d(
    name: &str,
    f: Objective,
    x_bounds: (f64, f64),
    y_bounds: (f64, f64),
    xn: usize,
    yn: usize,
    trace: &ConvergenceTrace,
) -> Result<Plot> {
    require_dimension(trace, 2)?;

    let mut plot = plot_surface_2d(name, f, x_bounds, y_bounds, xn, yn)?;

    let path_x: Vec<f64> = trace.points().iter().map(|p| p.x[0]).collect();
    let path_y: Vec<f64> = trace.points().iter().map(|p| p.x[1]).collect();
    let path_z: Vec<f64> = trace.points().iter().map(|p| p.f_value).collect();

    let path_trace = Scatter3D::new(path_x, path_y, path_z)
        .mode(Mode::LinesMarkers)
        .name(&trace.function_name)
        .line(
            Line::new()
                .color(COLOR_PATH)
                .width(2.0)
                .dash(DashType::DashDot),
        )
        .marker(Marker::new().color(COLOR_PATH).size(3));
    plot.add_trace(path_trace);
    Ok(plot)
}

/// Best-so-far and per-evaluation function values against iteration number,
/// with a log-scaled value axis.
pub fn plot_convergence_history(trace: &ConvergenceTrace) -> Result<Plot> {
    if trace.is_empty() {
        return Err(ExampleError::EmptyTrace {
            name: trace.function_name.clone(),
        });
    }

    let iterations: Vec<usize> = trace.points().iter().map(|p| p.iteration).collect();
    let f_values: Vec<f64> = trace.points().iter().map(|p| p.f_value).collect();
    let best_values: Vec<f64> = trace.points().iter().map(|p| p.best_so_far).collect();

    let eval_trace = Scatter::new(iterations.clone(), f_values)
        .mode(Mode::Markers)
        .name("Evaluations")
        .marker(
            Marker::new()
                .color("rgba(128, 128, 128, 0.5)")
                .size(4)
                .symbol(MarkerSymbol::Circle),
        );
    let best_trace = Scatter::new(iterations, best_values)
        .mode(Mode::Lines)
        .name("Best So Far")
        .line(Line::new().color(COLOR_VALUE).width(2.5));

    let layout = Layout::new()
        .title(Title::with_text(format!(
            "Convergence: {}",
            trace.function_name
        )))
        .x_axis(Axis::new().title(Title::with_text("Iteration")))
        .y_axis(
            Axis::new()
                .title(Title::with_text("Function Value"))
                .type_(AxisType::Log),
        )
        .legend(Legend::new().x(0.7).y(0.9));

    let mut plot = Plot::new();
    plot.add_trace(eval_trace);
    plot.add_trace(best_trace);
    plot.set_layout(layout);
    Ok(plot)
}

fn layout_1d(name: &str) -> Layout {
    Layout::new()
        .title(Title::with_text(format!("Function: {}", name)))
        .x_axis(
            Axis::new()
                .title(Title::with_text("x"))
                .zero_line(true)
                .show_grid(true),
        )
        .y_axis(Axis::new().zero_line(true).show_grid(true))
        .legend(Legend::new().x(0.02).y(0.98))
}

fn require_dimension(trace: &ConvergenceTrace, expected: usize) -> Result<()> {
    match trace.dimension() {
        None => Err(ExampleError::EmptyTrace {
            name: trace.function_name.clone(),
        }),
        Some(dim) if dim != expected => Err(ExampleError::PlotDimensionMismatch {
            expected,
            got: dim,
        }),
        Some(_) => Ok(()),
    }
}

/// Evaluate f row by row over the cartesian grid; rows follow y, columns x.
fn sample_grid(f: Objective, x_vals: &[f64], y_vals: &[f64]) -> Vec<Vec<f64>> {
    let mut z_vals = Vec::with_capacity(y_vals.len());
    for &y in y_vals {
        let mut row = Vec::with_capacity(x_vals.len());
        for &x in x_vals {
            let input = Array1::from(vec![x, y]);
            row.push(f(&input));
        }
        z_vals.push(row);
    }
    z_vals
}

fn add_global_minima(
    plot: &mut Plot,
    metadata: &FunctionMetadata,
    x_bounds: (f64, f64),
    y_bounds: (f64, f64),
) {
    let valid_minima: Vec<&(Vec<f64>, f64)> = metadata
        .global_minima
        .iter()
        .filter(|(coords, _)| {
            coords.len() >= 2
                && coords[0] >= x_bounds.0
                && coords[0] <= x_bounds.1
                && coords[1] >= y_bounds.0
                && coords[1] <= y_bounds.1
        })
        .collect();

    if valid_minima.is_empty() {
        return;
    }

    let x_coords: Vec<f64> = valid_minima.iter().map(|(coords, _)| coords[0]).collect();
    let y_coords: Vec<f64> = valid_minima.iter().map(|(coords, _)| coords[1]).collect();

    let minima_trace = Scatter::new(x_coords, y_coords)
        .mode(Mode::Markers)
        .name("Global Minima")
        .marker(
            Marker::new()
                .color("rgba(255, 255, 255, 1.0)")
                .size(10)
                .line(Line::new().color("rgba(255, 0, 255, 1.0)").width(2.0))
                .symbol(MarkerSymbol::Diamond),
        );
    plot.add_trace(minima_trace);
}

fn add_path_2d(plot: &mut Plot, trace: &ConvergenceTrace) {
    let x_coords: Vec<f64> = trace.points().iter().map(|p| p.x[0]).collect();
    let y_coords: Vec<f64> = trace.points().iter().map(|p| p.x[1]).collect();

    let path_trace = Scatter::new(x_coords, y_coords)
        .mode(Mode::LinesMarkers)
        .name("Path")
        .line(
            Line::new()
                .color(COLOR_PATH)
                .width(1.5)
                .dash(DashType::DashDot),
        )
        .marker(Marker::new().color(COLOR_PATH).size(5));
    plot.add_trace(path_trace);

    if let Some(best) = trace.best() {
        let best_trace = Scatter::new(vec![best.x[0]], vec![best.x[1]])
            .mode(Mode::Markers)
            .name("Best Solution")
            .marker(
                Marker::new()
                    .color("rgba(255, 0, 0, 1.0)")
                    .size(12)
                    .line(Line::new().color("rgba(255, 255, 255, 1.0)").width(2.0))
                    .symbol(MarkerSymbol::Star),
            );
        plot.add_trace(best_trace);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::functions::{
        exp_linear, exp_linear_grad, exp_linear_hess, exp_linear_nd, sphere,
    };

    #[test]
    fn test_linspace_endpoints() {
        let xs = linspace(-5.0, 5.0, 11).unwrap();
        assert_eq!(xs.len(), 11);
        assert_eq!(xs[0], -5.0);
        assert_eq!(xs[10], 5.0);
        assert!((xs[5] - 0.0).abs() < 1e-12);
    }

    #[test]
    fn test_linspace_rejects_bad_input() {
        assert!(matches!(
            linspace(-5.0, 5.0, 1),
            Err(ExampleError::SampleGridTooSmall { .. })
        ));
        assert!(matches!(
            linspace(5.0, -5.0, 10),
            Err(ExampleError::DegenerateBounds { .. })
        ));
    }

    #[test]
    fn test_plot_function_1d_builds() {
        let xs = linspace(-5.0, 5.0, 50).unwrap();
        let plot =
            plot_function_1d("exp_linear", exp_linear, exp_linear_grad, exp_linear_hess, &xs)
                .unwrap();
        // value, gradient, and Hessian curves
        assert_eq!(plot.data().len(), 3);
    }

    #[test]
    fn test_plot_convergence_1d_rejects_2d_trace() {
        let xs = linspace(-5.0, 5.0, 50).unwrap();
        let mut trace = ConvergenceTrace::new("sphere");
        trace.record(&[1.0, 2.0], 5.0).unwrap();

        let err = plot_convergence_1d(
            "exp_linear",
            exp_linear,
            exp_linear_grad,
            exp_linear_hess,
            &xs,
            &trace,
            "newton",
        )
        .err()
        .unwrap();
        assert!(err.is_dimension_error());
    }

    #[test]
    fn test_plot_convergence_2d_overlays_path() {
        let mut trace = ConvergenceTrace::new("exp_linear_nd");
        trace.record(&[4.0, -4.0], exp_linear_nd(&Array1::from(vec![4.0, -4.0]))).unwrap();
        trace.record(&[2.0, 0.0], exp_linear_nd(&Array1::from(vec![2.0, 0.0]))).unwrap();

        let plot = plot_convergence_2d(
            "exp_linear_nd",
            exp_linear_nd,
            (-5.0, 5.0),
            (-5.0, 5.0),
            30,
            30,
            &trace,
        )
        .unwrap();
        // surface plus the path overlay
        assert_eq!(plot.data().len(), 2);
    }

    #[test]
    fn test_plot_contour_2d_with_metadata_markers() {
        let metadata = crate::get_function_metadata();
        let meta = metadata.get("sphere").unwrap();

        let plot = plot_contour_2d(
            "sphere",
            sphere,
            (-5.0, 5.0),
            (-5.0, 5.0),
            20,
            20,
            None,
            Some(meta),
        )
        .unwrap();
        // contour plus the minima markers
        assert_eq!(plot.data().len(), 2);
    }

    #[test]
    fn test_plot_convergence_history_requires_points() {
        let trace = ConvergenceTrace::new("empty");
        assert!(matches!(
            plot_convergence_history(&trace),
            Err(ExampleError::EmptyTrace { .. })
        ));
    }
}
