//! Name-based registry mapping each catalog function to its value, gradient,
//! and Hessian. Used by the plotting binary to discover what it can render.

use crate::functions::*;
use ndarray::{Array1, Array2};
use std::collections::HashMap;

/// 1D value, first-derivative, or second-derivative function.
pub type Scalar1d = fn(f64) -> f64;

/// N-dimensional value function.
pub type Objective = fn(&Array1<f64>) -> f64;

/// N-dimensional gradient function.
pub type Gradient = fn(&Array1<f64>) -> Array1<f64>;

/// N-dimensional Hessian function.
pub type HessianFn = fn(&Array1<f64>) -> Array2<f64>;

/// A 1D function with its analytic derivatives.
#[derive(Clone, Copy)]
pub struct Differentiable1d {
    /// Value f(x)
    pub f: Scalar1d,
    /// First derivative f'(x)
    pub grad: Scalar1d,
    /// Second derivative f''(x)
    pub hess: Scalar1d,
}

/// An N-dimensional function with its analytic derivatives.
#[derive(Clone, Copy)]
pub struct DifferentiableNd {
    /// Value f(x)
    pub f: Objective,
    /// Gradient vector
    pub grad: Gradient,
    /// Hessian matrix
    pub hess: HessianFn,
}

/// Registry of all catalog functions, keyed by name.
pub struct FunctionRegistry {
    curves: HashMap<String, Differentiable1d>,
    fields: HashMap<String, DifferentiableNd>,
}

impl FunctionRegistry {
    /// Creates a registry holding the full catalog.
    pub fn new() -> Self {
        let mut curves = HashMap::new();
        curves.insert(
            "exp_linear".to_string(),
            Differentiable1d {
                f: exp_linear,
                grad: exp_linear_grad,
                hess: exp_linear_hess,
            },
        );
        curves.insert(
            "quartic_well".to_string(),
            Differentiable1d {
                f: quartic_well,
                grad: quartic_well_grad,
                hess: quartic_well_hess,
            },
        );

        let mut fields = HashMap::new();
        fields.insert(
            "exp_linear_nd".to_string(),
            DifferentiableNd {
                f: exp_linear_nd,
                grad: exp_linear_nd_grad,
                hess: exp_linear_nd_hess,
            },
        );
        fields.insert(
            "sphere".to_string(),
            DifferentiableNd {
                f: sphere,
                grad: sphere_grad,
                hess: sphere_hess,
            },
        );
        fields.insert(
            "booth".to_string(),
            DifferentiableNd {
                f: booth,
                grad: booth_grad,
                hess: booth_hess,
            },
        );
        fields.insert(
            "matyas".to_string(),
            DifferentiableNd {
                f: matyas,
                grad: matyas_grad,
                hess: matyas_hess,
            },
        );
        fields.insert(
            "rosenbrock".to_string(),
            DifferentiableNd {
                f: rosenbrock,
                grad: rosenbrock_grad,
                hess: rosenbrock_hess,
            },
        );
        fields.insert(
            "himmelblau".to_string(),
            DifferentiableNd {
                f: himmelblau,
                grad: himmelblau_grad,
                hess: himmelblau_hess,
            },
        );
        fields.insert(
            "rastrigin".to_string(),
            DifferentiableNd {
                f: rastrigin,
                grad: rastrigin_grad,
                hess: rastrigin_hess,
            },
        );

        Self { curves, fields }
    }

    /// Look up a 1D function triple by name.
    pub fn get_1d(&self, name: &str) -> Option<&Differentiable1d> {
        self.curves.get(name)
    }

    /// Look up an N-dimensional function triple by name.
    pub fn get_nd(&self, name: &str) -> Option<&DifferentiableNd> {
        self.fields.get(name)
    }

    /// Names of all 1D functions, sorted.
    pub fn names_1d(&self) -> Vec<String> {
        let mut names: Vec<String> = self.curves.keys().cloned().collect();
        names.sort();
        names
    }

    /// Names of all N-dimensional functions, sorted.
    pub fn names_nd(&self) -> Vec<String> {
        let mut names: Vec<String> = self.fields.keys().cloned().collect();
        names.sort();
        names
    }
}

impl Default for FunctionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
