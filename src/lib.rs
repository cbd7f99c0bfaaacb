//! Enjambre: particle swarm optimization for bounded continuous spaces.
//!
//! Enjambre minimizes an arbitrary scalar objective over a box-bounded
//! real-valued search space with a population-based, gradient-free swarm.
//! The objective is an opaque `Fn(&[f64]) -> f64`; no gradients, no
//! smoothness assumptions.
//!
//! # Quick Start
//!
//! ```
//! use enjambre::prelude::*;
//!
//! // Minimize f(x) = Σxᵢ² over [-5, 5]³.
//! let objective = |x: &[f64]| x.iter().map(|xi| xi * xi).sum();
//!
//! let config = SwarmConfig::new(3, Bounds::new(-5.0, 5.0)?)
//!     .with_seed(42)
//!     .with_early_stopping(20);
//! let mut swarm = Swarm::new(config, objective)?;
//! let result = swarm.optimize();
//!
//! assert!(result.objective_value < 1.0);
//! # Ok::<(), enjambre::error::EnjambreError>(())
//! ```
//!
//! # Modules
//!
//! - [`swarm`]: the optimizer - population, global best, iteration loop
//! - [`particle`]: per-particle position/velocity/personal-best state
//! - [`bounds`]: the shared search interval
//! - [`stopping`]: stall tracking for early termination
//! - [`result`]: optimization outcome and termination reason
//! - [`benchmarks`]: standard test objectives (sphere, rastrigin, ...)
//!
//! # Algorithm notes
//!
//! The update rule is the canonical inertia-weight PSO (Kennedy & Eberhart
//! 1995; Shi & Eberhart 1998). Out-of-bounds moves are handled by damped
//! reflection: the coordinate clamps to the wall and its velocity is halved
//! and sign-flipped. Velocity magnitude is never capped proactively, so
//! divergent coefficient choices (`w > 1`) can grow velocities without
//! bound - choose coefficients accordingly.

pub mod benchmarks;
pub mod bounds;
pub mod error;
pub mod particle;
pub mod prelude;
pub mod result;
pub mod stopping;
pub mod swarm;

pub use bounds::Bounds;
pub use error::{EnjambreError, Result};
pub use particle::Particle;
pub use result::{OptimizationResult, TerminationReason};
pub use swarm::{Progress, Swarm, SwarmConfig};

#[cfg(test)]
mod tests_contract;
