//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use enjambre::prelude::*;
//! ```

pub use crate::bounds::Bounds;
pub use crate::error::{EnjambreError, Result};
pub use crate::particle::Particle;
pub use crate::result::{OptimizationResult, TerminationReason};
pub use crate::swarm::{Progress, Swarm, SwarmConfig};
