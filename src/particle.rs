//! A single candidate solution with velocity and personal-best memory.
//!
//! Each particle owns its position, velocity, and the best position it has
//! visited. It reads only a snapshot of the swarm's global best, so particles
//! never hold references into each other.

use rand::Rng;

use crate::bounds::Bounds;
use crate::error::{EnjambreError, Result};

/// One member of the swarm.
///
/// The personal best is a copy, never an alias of the live position, and
/// `best_value` is non-increasing over the particle's lifetime.
#[derive(Debug, Clone)]
pub struct Particle {
    position: Vec<f64>,
    velocity: Vec<f64>,
    best_position: Vec<f64>,
    best_value: f64,
}

impl Particle {
    /// Create a particle with uniformly random position in the bounds and
    /// velocity in `[-span, span]`, evaluating the objective once to seed
    /// the personal best.
    pub fn new<F, R>(dimensions: usize, bounds: Bounds, objective: &F, rng: &mut R) -> Result<Self>
    where
        F: Fn(&[f64]) -> f64,
        R: Rng + ?Sized,
    {
        if dimensions == 0 {
            return Err(EnjambreError::InvalidHyperparameter {
                param: "dimensions".to_string(),
                value: "0".to_string(),
                constraint: ">0".to_string(),
            });
        }

        let span = bounds.span();
        let position: Vec<f64> = (0..dimensions)
            .map(|_| rng.gen_range(bounds.lower()..=bounds.upper()))
            .collect();
        let velocity: Vec<f64> = (0..dimensions).map(|_| rng.gen_range(-span..=span)).collect();

        let best_value = objective(&position);
        Ok(Self {
            best_position: position.clone(),
            position,
            velocity,
            best_value,
        })
    }

    /// Objective value at the current position. No side effects; panics from
    /// the objective propagate to the caller.
    pub fn evaluate<F>(&self, objective: &F) -> f64
    where
        F: Fn(&[f64]) -> f64,
    {
        objective(&self.position)
    }

    /// Apply the velocity update rule against a global-best snapshot.
    ///
    /// Per dimension `i`, with independent uniforms `r1, r2 ∈ [0, 1)`:
    ///
    /// ```text
    /// v[i] = w·v[i] + c1·r1·(best[i] − x[i]) + c2·r2·(gbest[i] − x[i])
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `global_best` has a different length than the particle's
    /// position. Passing a mismatched vector is a caller bug.
    pub fn update_velocity<R>(
        &mut self,
        global_best: &[f64],
        w: f64,
        c1: f64,
        c2: f64,
        rng: &mut R,
    ) where
        R: Rng + ?Sized,
    {
        assert_eq!(
            global_best.len(),
            self.position.len(),
            "global best dimension {} does not match particle dimension {}",
            global_best.len(),
            self.position.len()
        );

        for i in 0..self.position.len() {
            let r1 = rng.gen::<f64>();
            let r2 = rng.gen::<f64>();
            let cognitive = c1 * r1 * (self.best_position[i] - self.position[i]);
            let social = c2 * r2 * (global_best[i] - self.position[i]);
            self.velocity[i] = w * self.velocity[i] + cognitive + social;
        }
    }

    /// Move by the current velocity with damped reflection at the walls,
    /// then refresh the personal best on strict improvement.
    ///
    /// A coordinate that lands outside the bounds is clamped exactly to the
    /// violated bound and that dimension's velocity is halved and
    /// sign-flipped, so the particle re-enters the interior on a later step
    /// instead of pinning to the wall. Velocity magnitude is never bounded
    /// proactively; divergent coefficients (e.g. `w > 1`) can grow it
    /// without limit.
    pub fn update_position<F>(&mut self, bounds: Bounds, objective: &F)
    where
        F: Fn(&[f64]) -> f64,
    {
        for i in 0..self.position.len() {
            self.position[i] += self.velocity[i];

            if self.position[i] < bounds.lower() {
                self.position[i] = bounds.lower();
                self.velocity[i] *= -0.5;
            } else if self.position[i] > bounds.upper() {
                self.position[i] = bounds.upper();
                self.velocity[i] *= -0.5;
            }
        }

        let value = objective(&self.position);
        if value < self.best_value {
            self.best_position = self.position.clone();
            self.best_value = value;
        }
    }

    /// Current position, always within bounds after any update.
    #[must_use]
    pub fn position(&self) -> &[f64] {
        &self.position
    }

    /// Current velocity, unconstrained in magnitude.
    #[must_use]
    pub fn velocity(&self) -> &[f64] {
        &self.velocity
    }

    /// Best position visited so far.
    #[must_use]
    pub fn best_position(&self) -> &[f64] {
        &self.best_position
    }

    /// Objective value at [`best_position`](Self::best_position).
    #[must_use]
    pub fn best_value(&self) -> f64 {
        self.best_value
    }
}
