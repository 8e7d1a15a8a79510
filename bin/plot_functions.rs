use clap::Parser;
use directories::ProjectDirs;
use plotly::Plot;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use math_example_functions::plot::{
    linspace, plot_contour_2d, plot_convergence_1d, plot_convergence_2d,
    plot_convergence_history, plot_function_1d, plot_surface_2d,
};
use math_example_functions::{ConvergenceTrace, FunctionRegistry, get_function_metadata};

/// CLI arguments for rendering the function catalog
#[derive(Parser)]
#[command(name = "plot_functions")]
#[command(about = "Render catalog functions, their derivatives, and convergence traces with Plotly")]
struct Args {
    /// Height of the plot in pixels
    #[arg(short = 'H', long, default_value = "800")]
    height: usize,

    /// Width of the plot in pixels
    #[arg(short = 'W', long, default_value = "800")]
    width: usize,

    /// Number of points along the x-axis
    #[arg(short = 'x', long, default_value = "100")]
    xn: usize,

    /// Number of points along the y-axis (2D plots only)
    #[arg(short = 'y', long, default_value = "100")]
    yn: usize,

    /// X-axis bounds (min,max), used when metadata bounds are disabled
    #[arg(long, default_value = "-5.0,5.0")]
    x_bounds: String,

    /// Y-axis bounds (min,max), used when metadata bounds are disabled
    #[arg(long, default_value = "-5.0,5.0")]
    y_bounds: String,

    /// Output directory for HTML files
    #[arg(short, long)]
    output_dir: Option<String>,

    /// List of specific functions to plot (comma-separated), if empty plots all
    #[arg(short, long)]
    functions: Option<String>,

    /// Directory containing CSV files with convergence traces
    #[arg(long)]
    csv_dir: Option<String>,

    /// Overlay convergence traces found in --csv-dir
    #[arg(long)]
    show_traces: bool,

    /// Also render best-so-far convergence history charts
    #[arg(long)]
    convergence_plots: bool,

    /// Use function metadata for bounds (overrides x_bounds and y_bounds)
    #[arg(long, default_value = "true")]
    use_metadata: bool,
}

fn main() {
    let args = Args::parse();

    let output_dir = args.output_dir.clone().unwrap_or_else(|| {
        let proj_dirs = ProjectDirs::from("org", "mathexamples", "math-example-functions")
            .expect("Failed to determine project directories");
        let plots_dir = proj_dirs.cache_dir().join("plots");
        plots_dir.to_string_lossy().to_string()
    });
    std::fs::create_dir_all(&output_dir).expect("Failed to create output directory");

    let cli_x_bounds = parse_bounds(&args.x_bounds).expect("Invalid x_bounds format");
    let cli_y_bounds = parse_bounds(&args.y_bounds).expect("Invalid y_bounds format");

    let registry = FunctionRegistry::new();
    let metadata = get_function_metadata();

    let requested: Option<Vec<String>> = args
        .functions
        .as_ref()
        .map(|names| names.split(',').map(|s| s.trim().to_string()).collect());
    let wanted = |name: &str| match &requested {
        Some(names) => names.iter().any(|n| n == name),
        None => true,
    };

    let mut rendered = Vec::new();

    for name in registry.names_1d() {
        if !wanted(&name) {
            continue;
        }
        println!("Processing function: {}", name);

        let curve = registry
            .get_1d(&name)
            .expect("registry names must resolve");
        let bounds = if args.use_metadata {
            metadata
                .get(&name)
                .map(|meta| meta.bounds[0])
                .unwrap_or(cli_x_bounds)
        } else {
            cli_x_bounds
        };
        let xs = match linspace(bounds.0, bounds.1, args.xn) {
            Ok(xs) => xs,
            Err(e) => {
                eprintln!("  Skipping '{}': {}", name, e);
                continue;
            }
        };

        let trace = load_trace(args.csv_dir.as_deref(), &name);

        let plot = if args.show_traces && trace.is_some() {
            plot_convergence_1d(
                &name,
                curve.f,
                curve.grad,
                curve.hess,
                &xs,
                trace.as_ref().expect("checked above"),
                "path",
            )
        } else {
            plot_function_1d(&name, curve.f, curve.grad, curve.hess, &xs)
        };

        match plot {
            Ok(plot) => {
                write_plot(plot, &output_dir, &name, args.width, args.height);
                rendered.push(name.clone());
            }
            Err(e) => eprintln!("  Warning: failed to build plot for '{}': {}", name, e),
        }

        maybe_render_history(&args, trace.as_ref(), &output_dir, &name, &mut rendered);
    }

    for name in registry.names_nd() {
        if !wanted(&name) {
            continue;
        }
        println!("Processing function: {}", name);

        let field = registry
            .get_nd(&name)
            .expect("registry names must resolve");
        let meta = metadata.get(&name);
        let (x_bounds, y_bounds) = if args.use_metadata {
            match meta {
                Some(meta) if meta.bounds.len() >= 2 => (meta.bounds[0], meta.bounds[1]),
                _ => {
                    eprintln!(
                        "  Warning: no usable metadata bounds for '{}', using CLI bounds",
                        name
                    );
                    (cli_x_bounds, cli_y_bounds)
                }
            }
        } else {
            (cli_x_bounds, cli_y_bounds)
        };

        let trace = load_trace(args.csv_dir.as_deref(), &name);
        let overlay = if args.show_traces { trace.as_ref() } else { None };

        match plot_contour_2d(
            &name, field.f, x_bounds, y_bounds, args.xn, args.yn, overlay, meta,
        ) {
            Ok(plot) => {
                write_plot(plot, &output_dir, &format!("{}_contour", name), args.width, args.height);
                rendered.push(format!("{}_contour", name));
            }
            Err(e) => eprintln!("  Warning: failed to build contour for '{}': {}", name, e),
        }

        let surface = match overlay {
            Some(trace) => plot_convergence_2d(
                &name, field.f, x_bounds, y_bounds, args.xn, args.yn, trace,
            ),
            None => plot_surface_2d(&name, field.f, x_bounds, y_bounds, args.xn, args.yn),
        };
        match surface {
            Ok(plot) => {
                write_plot(plot, &output_dir, &format!("{}_surface", name), args.width, args.height);
                rendered.push(format!("{}_surface", name));
            }
            Err(e) => eprintln!("  Warning: failed to build surface for '{}': {}", name, e),
        }

        maybe_render_history(&args, trace.as_ref(), &output_dir, &name, &mut rendered);
    }

    write_index(&output_dir, &rendered);
    println!(
        "Rendered {} plots into directory: {}",
        rendered.len(),
        output_dir
    );
}

fn parse_bounds(bounds_str: &str) -> Result<(f64, f64), Box<dyn std::error::Error>> {
    let cleaned = bounds_str.trim_matches(|c| c == '\'' || c == '"');
    let parts: Vec<&str> = if cleaned.contains(',') {
        cleaned.split(',').collect()
    } else {
        cleaned.split_whitespace().collect()
    };

    if parts.len() != 2 {
        return Err("Bounds must be in format 'min,max' or 'min max'".into());
    }

    let min = parts[0].trim().parse::<f64>()?;
    let max = parts[1].trim().parse::<f64>()?;
    Ok((min, max))
}

/// Look for `<csv_dir>/<name>.csv` and load it as a convergence trace.
fn load_trace(csv_dir: Option<&str>, name: &str) -> Option<ConvergenceTrace> {
    let dir = csv_dir?;
    let path = PathBuf::from(dir).join(format!("{}.csv", name));
    if !path.exists() {
        return None;
    }
    match ConvergenceTrace::load_csv(&path) {
        Ok(trace) => {
            println!("  Loaded trace with {} points from {:?}", trace.len(), path);
            Some(trace)
        }
        Err(e) => {
            eprintln!("  Warning: failed to load trace from {:?}: {}", path, e);
            None
        }
    }
}

fn maybe_render_history(
    args: &Args,
    trace: Option<&ConvergenceTrace>,
    output_dir: &str,
    name: &str,
    rendered: &mut Vec<String>,
) {
    if !args.convergence_plots {
        return;
    }
    let Some(trace) = trace else {
        println!("  No trace file found for function '{}'", name);
        return;
    };
    match plot_convergence_history(trace) {
        Ok(plot) => {
            write_plot(plot, output_dir, &format!("{}_convergence", name), args.width, args.height);
            rendered.push(format!("{}_convergence", name));
        }
        Err(e) => eprintln!(
            "  Warning: failed to build convergence history for '{}': {}",
            name, e
        ),
    }
}

fn write_plot(mut plot: Plot, output_dir: &str, name: &str, width: usize, height: usize) {
    let layout = plot.layout().clone().width(width).height(height);
    plot.set_layout(layout);

    let path = Path::new(output_dir).join(format!("{}.html", name));
    plot.write_html(&path);
    println!("  Saved {:?}", path);
}

fn write_index(output_dir: &str, rendered: &[String]) {
    let path = Path::new(output_dir).join("index.html");
    let mut file = File::create(&path).expect("Failed to create index file");

    writeln!(file, "<!DOCTYPE html>\n<html>\n<head><title>Function plots</title></head>\n<body>")
        .expect("Failed to write index");
    writeln!(file, "<h1>Function plots</h1>\n<ul>").expect("Failed to write index");
    for name in rendered {
        writeln!(file, "  <li><a href=\"{0}.html\">{0}</a></li>", name)
            .expect("Failed to write index");
    }
    writeln!(file, "</ul>\n</body>\n</html>").expect("Failed to write index");

    println!("Index written to {:?}", path);
}
