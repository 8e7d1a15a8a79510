//! Benchmarks for catalog function and derivative evaluation.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use math_example_functions::{
    exp_linear, exp_linear_grad, exp_linear_nd, exp_linear_nd_grad, rosenbrock, rosenbrock_grad,
    rosenbrock_hess,
};
use ndarray::Array1;

fn benchmark_curves(c: &mut Criterion) {
    c.bench_function("exp_linear_value", |b| {
        b.iter(|| exp_linear(black_box(1.25)))
    });
    c.bench_function("exp_linear_grad", |b| {
        b.iter(|| exp_linear_grad(black_box(1.25)))
    });
}

fn benchmark_fields(c: &mut Criterion) {
    let x = Array1::from(vec![0.3, -0.8, 1.7, 0.1, -1.2, 0.9, 2.0, -0.4]);

    c.bench_function("rosenbrock_value_8d", |b| {
        b.iter(|| rosenbrock(black_box(&x)))
    });
    c.bench_function("rosenbrock_grad_8d", |b| {
        b.iter(|| rosenbrock_grad(black_box(&x)))
    });
    c.bench_function("rosenbrock_hess_8d", |b| {
        b.iter(|| rosenbrock_hess(black_box(&x)))
    });
    c.bench_function("exp_linear_nd_value_8d", |b| {
        b.iter(|| exp_linear_nd(black_box(&x)))
    });
    c.bench_function("exp_linear_nd_grad_8d", |b| {
        b.iter(|| exp_linear_nd_grad(black_box(&x)))
    });
}

criterion_group!(benches, benchmark_curves, benchmark_fields);
criterion_main!(benches);
