#![doc = include_str!("../README.md")]

use std::collections::HashMap;

pub mod derivative_check;
pub mod error;
pub mod functions;
pub mod plot;
pub mod registry;
pub mod trace;

pub use error::{ExampleError, Result};
pub use functions::*;
pub use registry::FunctionRegistry;
pub use trace::{ConvergenceTrace, TracePoint};

/// Metadata for a catalog function: bounds, minima, and shape properties.
#[derive(Debug, Clone)]
pub struct FunctionMetadata {
    /// Function name
    pub name: String,
    /// Bounds for each dimension (min, max)
    pub bounds: Vec<(f64, f64)>,
    /// Global minima locations and values
    pub global_minima: Vec<(Vec<f64>, f64)>,
    /// Whether the function is convex
    pub convex: bool,
    /// Typical dimension(s) for the function (1 for scalar curves)
    pub dimensions: Vec<usize>,
    /// Description of the function
    pub description: String,
}

/// Get metadata for all catalog functions.
pub fn get_function_metadata() -> HashMap<String, FunctionMetadata> {
    let mut metadata = HashMap::new();

    let ln4 = 2.0 * std::f64::consts::LN_2;

    metadata.insert(
        "exp_linear".to_string(),
        FunctionMetadata {
            name: "exp_linear".to_string(),
            bounds: vec![(-5.0, 5.0)],
            global_minima: vec![(vec![ln4], 2.0 - ln4)],
            convex: true,
            dimensions: vec![1],
            description: "Convex 1D exponential-minus-linear function".to_string(),
        },
    );

    metadata.insert(
        "quartic_well".to_string(),
        FunctionMetadata {
            name: "quartic_well".to_string(),
            bounds: vec![(-5.0, 5.0)],
            global_minima: vec![(vec![-3.0747], -0.95302)],
            convex: false,
            dimensions: vec![1],
            description: "Non-convex smooth quartic with one local and one global minimum"
                .to_string(),
        },
    );

    metadata.insert(
        "exp_linear_nd".to_string(),
        FunctionMetadata {
            name: "exp_linear_nd".to_string(),
            bounds: vec![(-5.0, 5.0); 2],
            global_minima: vec![(vec![ln4, ln4], 2.0 * (2.0 - ln4))],
            convex: true,
            dimensions: vec![2],
            description: "Convex separable exponential-minus-linear function".to_string(),
        },
    );

    metadata.insert(
        "sphere".to_string(),
        FunctionMetadata {
            name: "sphere".to_string(),
            bounds: vec![(-5.0, 5.0); 2],
            global_minima: vec![(vec![0.0, 0.0], 0.0)],
            convex: true,
            dimensions: vec![2],
            description: "Simple quadratic sphere function".to_string(),
        },
    );

    metadata.insert(
        "booth".to_string(),
        FunctionMetadata {
            name: "booth".to_string(),
            bounds: vec![(-10.0, 10.0); 2],
            global_minima: vec![(vec![1.0, 3.0], 0.0)],
            convex: true,
            dimensions: vec![2],
            description: "Booth function, a convex quadratic bowl".to_string(),
        },
    );

    metadata.insert(
        "matyas".to_string(),
        FunctionMetadata {
            name: "matyas".to_string(),
            bounds: vec![(-10.0, 10.0); 2],
            global_minima: vec![(vec![0.0, 0.0], 0.0)],
            convex: true,
            dimensions: vec![2],
            description: "Matyas function, a shallow convex quadratic".to_string(),
        },
    );

    metadata.insert(
        "rosenbrock".to_string(),
        FunctionMetadata {
            name: "rosenbrock".to_string(),
            bounds: vec![(-2.048, 2.048); 2],
            global_minima: vec![(vec![1.0, 1.0], 0.0)],
            convex: false,
            dimensions: vec![2],
            description: "Classic Rosenbrock banana function".to_string(),
        },
    );

    metadata.insert(
        "himmelblau".to_string(),
        FunctionMetadata {
            name: "himmelblau".to_string(),
            bounds: vec![(-6.0, 6.0); 2],
            global_minima: vec![
                (vec![3.0, 2.0], 0.0),
                (vec![-2.805118, 3.131312], 0.0),
                (vec![-3.779310, -3.283186], 0.0),
                (vec![3.584428, -1.848126], 0.0),
            ],
            convex: false,
            dimensions: vec![2],
            description: "Himmelblau's function with four global minima".to_string(),
        },
    );

    metadata.insert(
        "rastrigin".to_string(),
        FunctionMetadata {
            name: "rastrigin".to_string(),
            bounds: vec![(-5.12, 5.12); 2],
            global_minima: vec![(vec![0.0, 0.0], 0.0)],
            convex: false,
            dimensions: vec![2],
            description: "Highly multimodal Rastrigin function".to_string(),
        },
    );

    metadata
}

/// Helper to get bounds for a specific function from metadata.
/// Returns None if the function is not in the catalog.
pub fn get_function_bounds(function_name: &str) -> Option<Vec<(f64, f64)>> {
    let metadata = get_function_metadata();
    metadata.get(function_name).map(|meta| meta.bounds.clone())
}
