//! Particle swarm optimizer.
//!
//! A population of [`Particle`]s explores a bounded continuous space,
//! each pulled toward its own best-known position and the swarm's global
//! best:
//!
//! ```text
//! For each iteration:
//!   1. Every particle updates velocity against the same global-best snapshot
//!   2. Every particle moves, reflecting off the walls with damping
//!   3. The global best is rescanned over all personal bests
//!   4. Stop early after `early_stopping` iterations without improvement
//! ```
//!
//! # References
//!
//! - Kennedy & Eberhart (1995): "Particle Swarm Optimization"
//! - Shi & Eberhart (1998): "A Modified Particle Swarm Optimizer"

use rand::prelude::*;
use serde::{Deserialize, Serialize};

use crate::bounds::Bounds;
use crate::error::{EnjambreError, Result};
use crate::particle::Particle;
use crate::result::{OptimizationResult, TerminationReason};
use crate::stopping::ImprovementTracker;

/// How often [`Progress::Iteration`] events are emitted.
const PROGRESS_CADENCE: usize = 10;

/// Swarm parameters.
///
/// All fields are plain data; the struct serializes for experiment records.
/// Defaults follow the canonical inertia-weight PSO: `w = 0.5`,
/// `c1 = c2 = 1.5`, 30 particles, 100 iterations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwarmConfig {
    /// Population size (positive).
    pub num_particles: usize,
    /// Search-space dimensionality (positive).
    pub dimensions: usize,
    /// Interval applied to every dimension.
    pub bounds: Bounds,
    /// Hard iteration ceiling (positive).
    pub max_iter: usize,
    /// Inertia weight `w`: how much previous velocity persists.
    pub inertia: f64,
    /// Cognitive weight `c1`: pull toward the particle's own best.
    pub cognitive: f64,
    /// Social weight `c2`: pull toward the swarm's best.
    pub social: f64,
    /// Stop after this many consecutive iterations without strict
    /// improvement of the global best. `None` disables early stopping.
    pub early_stopping: Option<usize>,
    /// Random seed for reproducibility.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl SwarmConfig {
    /// Config with default coefficients for a given search space.
    #[must_use]
    pub fn new(dimensions: usize, bounds: Bounds) -> Self {
        Self {
            num_particles: 30,
            dimensions,
            bounds,
            max_iter: 100,
            inertia: 0.5,
            cognitive: 1.5,
            social: 1.5,
            early_stopping: None,
            seed: None,
        }
    }

    /// Set the population size.
    #[must_use]
    pub fn with_num_particles(mut self, num_particles: usize) -> Self {
        self.num_particles = num_particles;
        self
    }

    /// Set the iteration ceiling.
    #[must_use]
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Set inertia, cognitive, and social coefficients at once.
    #[must_use]
    pub fn with_coefficients(mut self, inertia: f64, cognitive: f64, social: f64) -> Self {
        self.inertia = inertia;
        self.cognitive = cognitive;
        self.social = social;
        self
    }

    /// Enable early stopping after `patience` non-improving iterations.
    #[must_use]
    pub fn with_early_stopping(mut self, patience: usize) -> Self {
        self.early_stopping = Some(patience);
        self
    }

    /// Set the random seed for reproducibility.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    fn validate(&self) -> Result<()> {
        if self.num_particles == 0 {
            return Err(EnjambreError::InvalidHyperparameter {
                param: "num_particles".to_string(),
                value: "0".to_string(),
                constraint: ">0".to_string(),
            });
        }
        if self.dimensions == 0 {
            return Err(EnjambreError::InvalidHyperparameter {
                param: "dimensions".to_string(),
                value: "0".to_string(),
                constraint: ">0".to_string(),
            });
        }
        if self.max_iter == 0 {
            return Err(EnjambreError::InvalidHyperparameter {
                param: "max_iter".to_string(),
                value: "0".to_string(),
                constraint: ">0".to_string(),
            });
        }
        Ok(())
    }
}

/// Progress events surfaced to an injected sink.
///
/// The optimizer itself never prints; wire a sink via
/// [`Swarm::with_progress`] to report iterations to a logger, a channel, or
/// stdout.
#[derive(Debug, Clone, PartialEq)]
pub enum Progress {
    /// Emitted every 10th iteration.
    Iteration {
        /// Zero-based iteration index.
        iteration: usize,
        /// Global best value after this iteration.
        best_value: f64,
    },
    /// Emitted once when `optimize` returns.
    Finished {
        /// Iterations executed by the run.
        iterations: usize,
        /// Final global best position.
        best_position: Vec<f64>,
        /// Final global best value.
        best_value: f64,
    },
}

/// Particle swarm over a fixed objective.
///
/// The objective is supplied at construction and treated as an opaque total
/// function; panics it raises propagate to the caller mid-iteration, leaving
/// the swarm in whatever state the sweep reached.
///
/// # Example
///
/// ```
/// use enjambre::prelude::*;
///
/// let objective = |x: &[f64]| x.iter().map(|xi| xi * xi).sum();
///
/// let config = SwarmConfig::new(3, Bounds::new(-5.0, 5.0).unwrap()).with_seed(42);
/// let mut swarm = Swarm::new(config, objective).unwrap();
/// let result = swarm.optimize();
///
/// assert!(result.objective_value < 1.0);
/// assert_eq!(result.solution.len(), 3);
/// ```
pub struct Swarm<F> {
    config: SwarmConfig,
    objective: F,
    particles: Vec<Particle>,
    global_best_position: Vec<f64>,
    global_best_value: f64,
    history: Vec<f64>,
    evaluations: usize,
    rng: StdRng,
    progress: Option<Box<dyn FnMut(Progress)>>,
}

impl<F> Swarm<F>
where
    F: Fn(&[f64]) -> f64,
{
    /// Build a swarm of independently-initialized particles and seed the
    /// global best from their initial personal bests.
    ///
    /// Fails on a zero `num_particles`, `dimensions`, or `max_iter` before
    /// any particle state is created.
    pub fn new(config: SwarmConfig, objective: F) -> Result<Self> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let particles: Vec<Particle> = (0..config.num_particles)
            .map(|_| Particle::new(config.dimensions, config.bounds, &objective, &mut rng))
            .collect::<Result<_>>()?;
        let evaluations = particles.len();

        let mut global_best_position = particles[0].best_position().to_vec();
        let mut global_best_value = particles[0].best_value();
        for particle in &particles[1..] {
            if particle.best_value() < global_best_value {
                global_best_position = particle.best_position().to_vec();
                global_best_value = particle.best_value();
            }
        }

        let history = vec![global_best_value];
        Ok(Self {
            config,
            objective,
            particles,
            global_best_position,
            global_best_value,
            history,
            evaluations,
            rng,
            progress: None,
        })
    }

    /// Attach a progress sink. Events: one [`Progress::Iteration`] every
    /// 10th iteration and one [`Progress::Finished`] per `optimize` call.
    #[must_use]
    pub fn with_progress<S>(mut self, sink: S) -> Self
    where
        S: FnMut(Progress) + 'static,
    {
        self.progress = Some(Box::new(sink));
        self
    }

    /// Run up to `max_iter` iterations and return the global best.
    ///
    /// Each iteration sweeps every particle against the same global-best
    /// snapshot, then rescans once. Improvement is strict floating-point
    /// `<`; with `early_stopping = Some(k)` the loop exits as soon as `k`
    /// consecutive iterations fail to improve.
    ///
    /// Calling `optimize` again resumes from the current particle state
    /// rather than resetting; history and evaluation counts accumulate.
    pub fn optimize(&mut self) -> OptimizationResult {
        let mut tracker =
            ImprovementTracker::new(self.config.early_stopping, self.global_best_value);
        let mut termination = TerminationReason::MaxIterations;
        let mut iterations = 0;

        for iteration in 0..self.config.max_iter {
            for particle in &mut self.particles {
                particle.update_velocity(
                    &self.global_best_position,
                    self.config.inertia,
                    self.config.cognitive,
                    self.config.social,
                    &mut self.rng,
                );
                particle.update_position(self.config.bounds, &self.objective);
            }
            self.evaluations += self.particles.len();

            self.update_global_best();
            tracker.observe(self.global_best_value);
            self.history.push(self.global_best_value);
            iterations = iteration + 1;

            if iteration % PROGRESS_CADENCE == 0 {
                if let Some(sink) = self.progress.as_mut() {
                    sink(Progress::Iteration {
                        iteration,
                        best_value: self.global_best_value,
                    });
                }
            }

            if tracker.stalled() {
                termination = TerminationReason::EarlyStopped;
                break;
            }
        }

        if let Some(sink) = self.progress.as_mut() {
            sink(Progress::Finished {
                iterations,
                best_position: self.global_best_position.clone(),
                best_value: self.global_best_value,
            });
        }

        OptimizationResult::new(
            self.global_best_position.clone(),
            self.global_best_value,
            self.evaluations,
            iterations,
            self.history.clone(),
            termination,
        )
    }

    /// Rescan all personal bests; the first strictly smaller value wins,
    /// ties never replace the recorded best.
    fn update_global_best(&mut self) {
        for particle in &self.particles {
            if particle.best_value() < self.global_best_value {
                self.global_best_position = particle.best_position().to_vec();
                self.global_best_value = particle.best_value();
            }
        }
    }

    /// The parameters this swarm was built with.
    #[must_use]
    pub fn config(&self) -> &SwarmConfig {
        &self.config
    }

    /// The population, in creation order.
    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Best position found so far across the whole swarm.
    #[must_use]
    pub fn global_best_position(&self) -> &[f64] {
        &self.global_best_position
    }

    /// Objective value at [`global_best_position`](Self::global_best_position).
    #[must_use]
    pub fn global_best_value(&self) -> f64 {
        self.global_best_value
    }

    /// Global best value after initialization and after each iteration,
    /// accumulated across `optimize` calls.
    #[must_use]
    pub fn history(&self) -> &[f64] {
        &self.history
    }
}
