// =========================================================================
// FALSIFY-PSO: inline falsification tests for the swarm contract.
//
// Each test states a property a correct PSO must satisfy and tries to
// falsify it. Assertion messages name the violated property.
//
// References:
//   - Kennedy & Eberhart (1995) "Particle Swarm Optimization"
// =========================================================================

use super::*;
use crate::benchmarks::sphere;

fn space() -> Bounds {
    Bounds::new(-5.0, 5.0).expect("valid bounds")
}

/// FALSIFY-PSO-001: PSO finds near-optimal on sphere function f(x)=Σx²
#[test]
fn falsify_pso_001_sphere_convergence() {
    let config = SwarmConfig::new(2, space()).with_seed(42);
    let mut swarm = Swarm::new(config, sphere).expect("valid config");
    let result = swarm.optimize();

    assert!(
        result.objective_value < 1.0,
        "FALSIFIED PSO-001: sphere objective {} >= 1.0",
        result.objective_value
    );
}

/// FALSIFY-PSO-002: solution dimension matches the configured space
#[test]
fn falsify_pso_002_solution_dimension() {
    let config = SwarmConfig::new(3, space()).with_max_iter(30).with_seed(42);
    let mut swarm = Swarm::new(config, sphere).expect("valid config");
    let result = swarm.optimize();

    assert_eq!(
        result.solution.len(),
        3,
        "FALSIFIED PSO-002: solution dim {} != configured dim 3",
        result.solution.len()
    );
}

/// FALSIFY-PSO-003: solution stays within bounds
#[test]
fn falsify_pso_003_within_bounds() {
    let bounds = Bounds::new(-2.0, 2.0).expect("valid bounds");
    let config = SwarmConfig::new(3, bounds).with_max_iter(60).with_seed(42);
    let mut swarm = Swarm::new(config, sphere).expect("valid config");
    let result = swarm.optimize();

    for (i, &v) in result.solution.iter().enumerate() {
        assert!(
            (-2.0..=2.0).contains(&v),
            "FALSIFIED PSO-003: solution[{i}]={v} outside bounds [-2, 2]"
        );
    }
}

/// FALSIFY-PSO-004: global best value never increases across iterations
#[test]
fn falsify_pso_004_monotone_global_best() {
    let config = SwarmConfig::new(3, space()).with_seed(42);
    let mut swarm = Swarm::new(config, sphere).expect("valid config");
    let result = swarm.optimize();

    for (i, window) in result.history.windows(2).enumerate() {
        assert!(
            window[1] <= window[0],
            "FALSIFIED PSO-004: best value rose from {} to {} at iteration {i}",
            window[0],
            window[1]
        );
    }
}

/// FALSIFY-PSO-005: identical seeds produce identical runs
#[test]
fn falsify_pso_005_determinism() {
    let run = || {
        let config = SwarmConfig::new(3, space()).with_seed(99);
        let mut swarm = Swarm::new(config, sphere).expect("valid config");
        swarm.optimize()
    };
    let a = run();
    let b = run();

    assert_eq!(
        a.solution, b.solution,
        "FALSIFIED PSO-005: same seed produced different solutions"
    );
    assert_eq!(
        a.objective_value, b.objective_value,
        "FALSIFIED PSO-005: same seed produced different objective values"
    );
}

/// FALSIFY-PSO-006: early stopping fires strictly before the ceiling once
/// the configured number of non-improving iterations accumulates
#[test]
fn falsify_pso_006_early_stopping() {
    // A constant objective can never improve, so the stall counter reaches
    // the patience on consecutive iterations from the start.
    let flat = |_x: &[f64]| 7.5;
    let config = SwarmConfig::new(2, space())
        .with_max_iter(1000)
        .with_early_stopping(8)
        .with_seed(42);
    let mut swarm = Swarm::new(config, flat).expect("valid config");
    let result = swarm.optimize();

    assert_eq!(
        result.iterations, 8,
        "FALSIFIED PSO-006: expected exactly 8 iterations, ran {}",
        result.iterations
    );
    assert_eq!(
        result.termination,
        TerminationReason::EarlyStopped,
        "FALSIFIED PSO-006: termination reason was {:?}",
        result.termination
    );
}

/// FALSIFY-PSO-007: the returned best equals one particle's personal best
/// and dominates all others
#[test]
fn falsify_pso_007_global_best_consensus() {
    let config = SwarmConfig::new(3, space()).with_max_iter(50).with_seed(42);
    let mut swarm = Swarm::new(config, sphere).expect("valid config");
    let result = swarm.optimize();

    let mut exact = 0;
    for particle in swarm.particles() {
        assert!(
            result.objective_value <= particle.best_value(),
            "FALSIFIED PSO-007: a personal best {} beats the global best {}",
            particle.best_value(),
            result.objective_value
        );
        if particle.best_value() == result.objective_value {
            exact += 1;
        }
    }
    assert!(
        exact >= 1,
        "FALSIFIED PSO-007: global best matches no particle"
    );
}
