//! Error types for composite construction.

use core::fmt;

/// Errors raised while building composites.
///
/// The stepping path itself never fails: malformed numeric input
/// degrades to NaN/infinity instead of raising. Only structural
/// mistakes caught at construction time surface here.
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// A constraint binding names a particle outside the arena.
    ParticleOutOfBounds { index: usize, count: usize },
    /// A line composite needs at least two particles.
    InsufficientParticles { count: usize },
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::ParticleOutOfBounds { index, count } => {
                write!(f, "particle index {} out of bounds (count: {})", index, count)
            }
            SimulationError::InsufficientParticles { count } => {
                write!(f, "a line needs at least 2 particles (got: {})", count)
            }
        }
    }
}
