//! Standard benchmark objectives for exercising the optimizer.
//!
//! All functions are minimization targets with known optima, drawn from the
//! usual real-parameter optimization test suites.

use std::f64::consts::PI;

/// Sphere function - unimodal, separable.
///
/// Global minimum: f(0, 0, ..., 0) = 0
///
/// # Example
/// ```
/// use enjambre::benchmarks::sphere;
/// assert!((sphere(&[0.0, 0.0, 0.0])).abs() < 1e-10);
/// assert_eq!(sphere(&[1.0, 2.0]), 5.0);
/// ```
#[must_use]
pub fn sphere(x: &[f64]) -> f64 {
    x.iter().map(|xi| xi * xi).sum()
}

/// Rosenbrock function - unimodal, non-separable, narrow curved valley.
///
/// Global minimum: f(1, 1, ..., 1) = 0
///
/// # Example
/// ```
/// use enjambre::benchmarks::rosenbrock;
/// assert!((rosenbrock(&[1.0, 1.0, 1.0])).abs() < 1e-10);
/// ```
#[must_use]
pub fn rosenbrock(x: &[f64]) -> f64 {
    x.windows(2)
        .map(|w| {
            let a = w[1] - w[0] * w[0];
            let b = 1.0 - w[0];
            100.0 * a * a + b * b
        })
        .sum()
}

/// Rastrigin function - highly multimodal, separable.
///
/// Global minimum: f(0, 0, ..., 0) = 0, with local minima on a regular
/// lattice around it.
///
/// # Example
/// ```
/// use enjambre::benchmarks::rastrigin;
/// assert!((rastrigin(&[0.0, 0.0])).abs() < 1e-10);
/// ```
#[must_use]
pub fn rastrigin(x: &[f64]) -> f64 {
    let n = x.len() as f64;
    10.0 * n
        + x.iter()
            .map(|xi| xi * xi - 10.0 * (2.0 * PI * xi).cos())
            .sum::<f64>()
}

/// Ackley function - multimodal, non-separable, nearly flat outer region.
///
/// Global minimum: f(0, 0, ..., 0) = 0
///
/// # Example
/// ```
/// use enjambre::benchmarks::ackley;
/// assert!(ackley(&[0.0, 0.0, 0.0]).abs() < 1e-10);
/// ```
#[must_use]
pub fn ackley(x: &[f64]) -> f64 {
    let n = x.len() as f64;
    let sum_sq: f64 = x.iter().map(|xi| xi * xi).sum();
    let sum_cos: f64 = x.iter().map(|xi| (2.0 * PI * xi).cos()).sum();

    -20.0 * (-0.2 * (sum_sq / n).sqrt()).exp() - (sum_cos / n).exp() + 20.0 + std::f64::consts::E
}
