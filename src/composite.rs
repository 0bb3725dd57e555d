//! Composites: ordered particle groups with locally-scoped constraints.

use crate::constraint::{Constraint, DistanceConstraint, PinConstraint};
use crate::error::SimulationError;
use crate::float::Float;
use crate::particle::Particle;
use crate::vec::Vec3;
use alloc::vec::Vec as AllocVec;

/// An ordered group of particles plus the constraints scoped to them
/// (one limb, one rope, one shape).
///
/// The composite owns its particles; constraints bind to them by index
/// into the `particles` arena. Constraints are projected in insertion
/// order, which determines relaxation behavior.
pub struct Composite<F: Float> {
    pub particles: AllocVec<Particle<F>>,
    pub constraints: AllocVec<Constraint<F>>,
    position_buffer: AllocVec<F>,
    index_buffer: Option<AllocVec<u32>>,
}

impl<F: Float> Composite<F> {
    pub fn new() -> Self {
        Composite {
            particles: AllocVec::new(),
            constraints: AllocVec::new(),
            position_buffer: AllocVec::new(),
            index_buffer: None,
        }
    }

    /// A composite holding a single free particle.
    pub fn point(position: Vec3<F>) -> Self {
        let mut composite = Composite::new();
        composite.particles.push(Particle::new(position));
        composite
    }

    /// A polyline of `particle_count` particles evenly spaced from
    /// `start` to `end`, consecutive pairs linked by distance
    /// constraints with rest length `length / segments`. Carries a
    /// line-list index buffer for the rendering layer.
    pub fn line(
        start: Vec3<F>,
        end: Vec3<F>,
        particle_count: usize,
        length: F,
    ) -> Result<Self, SimulationError> {
        if particle_count < 2 {
            return Err(SimulationError::InsufficientParticles { count: particle_count });
        }
        let segments = particle_count - 1;
        let step = (end - start).divide(F::from_f32(segments as f32));
        let rest = length / F::from_f32(segments as f32);

        let mut composite = Composite::new();
        for i in 0..particle_count {
            let position = start + step.scale(F::from_f32(i as f32));
            composite.particles.push(Particle::new(position));
        }
        for i in 0..segments {
            composite.constraints.push(Constraint::Distance(
                DistanceConstraint::new(i, i + 1, rest, rest),
            ));
        }

        let mut indices = AllocVec::with_capacity(segments * 2);
        for i in 0..segments {
            indices.push(i as u32);
            indices.push((i + 1) as u32);
        }
        composite.index_buffer = Some(indices);

        Ok(composite)
    }

    /// Append a pin holding `particles[index]` at its current position.
    /// Chainable; panics if the index is out of bounds (see [`try_pin`]).
    ///
    /// [`try_pin`]: Composite::try_pin
    pub fn pin(&mut self, index: usize) -> &mut Self {
        let pin = PinConstraint::from_particles(index, &self.particles);
        self.constraints.push(Constraint::Pin(pin));
        self
    }

    /// Fallible form of [`pin`].
    ///
    /// [`pin`]: Composite::pin
    pub fn try_pin(&mut self, index: usize) -> Result<&mut Self, SimulationError> {
        if index >= self.particles.len() {
            return Err(SimulationError::ParticleOutOfBounds {
                index,
                count: self.particles.len(),
            });
        }
        Ok(self.pin(index))
    }

    pub fn pin_first(&mut self) -> &mut Self {
        self.pin(0)
    }

    pub fn pin_last(&mut self) -> &mut Self {
        self.pin(self.particles.len() - 1)
    }

    /// Project all local constraints once, in insertion order.
    pub fn solve_constraints(&mut self) {
        for constraint in self.constraints.iter() {
            constraint.solve(&mut self.particles);
        }
    }

    /// Copy each particle's `(x, y, z)` into the flat position buffer,
    /// in particle order, resizing it to `3 * particle_count`.
    pub fn update_position_buffer(&mut self) {
        self.position_buffer.resize(self.particles.len() * 3, F::zero());
        let mut index = 0;
        for particle in self.particles.iter() {
            self.position_buffer[index] = particle.position.x;
            self.position_buffer[index + 1] = particle.position.y;
            self.position_buffer[index + 2] = particle.position.z;
            index += 3;
        }
    }

    /// The flat `3 * N` position buffer read by the rendering layer.
    /// Empty until [`update_position_buffer`] (or a system step) runs.
    ///
    /// [`update_position_buffer`]: Composite::update_position_buffer
    pub fn position_buffer(&self) -> &[F] {
        &self.position_buffer
    }

    /// Vertex connectivity for the rendering layer, if this composite
    /// represents a connected shape. Plain composites have none.
    pub fn index_buffer(&self) -> Option<&[u32]> {
        self.index_buffer.as_deref()
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    pub fn constraint_count(&self) -> usize {
        self.constraints.len()
    }
}

impl<F: Float> Default for Composite<F> {
    fn default() -> Self {
        Self::new()
    }
}
