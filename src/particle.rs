//! Verlet particles: velocity is implicit in the positional delta.

use crate::float::Float;
use crate::vec::Vec3;

/// A point mass storing its current and previous position.
///
/// Velocity is never stored; it is derived as `position - prev_position`
/// and carried forward by the integration step.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Particle<F: Float> {
    pub position: Vec3<F>,
    pub prev_position: Vec3<F>,
}

impl<F: Float> Particle<F> {
    /// Create a particle at rest (zero initial velocity).
    pub fn new(position: Vec3<F>) -> Self {
        Particle { position, prev_position: position }
    }

    /// Create a particle with an explicit previous position, encoding an
    /// initial velocity of `position - prev_position`.
    pub fn from_positions(position: Vec3<F>, prev_position: Vec3<F>) -> Self {
        Particle { position, prev_position }
    }

    pub fn velocity(&self) -> Vec3<F> {
        self.position - self.prev_position
    }

    /// Back-compute `prev_position` so the next step carries `velocity`.
    pub fn set_velocity(&mut self, velocity: Vec3<F>) {
        self.prev_position = self.position - velocity;
    }

    pub fn distance(&self, other: &Particle<F>) -> F {
        self.position.distance(other.position)
    }
}
