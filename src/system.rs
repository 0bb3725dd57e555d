//! The top-level particle system: integrate, relax, publish.

use crate::composite::Composite;
use crate::config::SystemConfig;
use crate::constraint::Constraint;
use crate::float::Float;
use crate::force::Force;
use crate::observer::{NoOpStepObserver, StepObserver};
use alloc::vec::Vec as AllocVec;

/// Coordinates one discrete simulation step over a set of composites.
///
/// Forces and constraints registered on the system are global: forces
/// displace every particle during integration, constraints are applied
/// across every composite during each relaxation pass, after that pass
/// has projected the composites' own local constraints.
///
/// Stepping is synchronous and single-threaded; a step either completes
/// the full integrate + relax + publish sequence or unwinds entirely.
pub struct ParticleSystem<F: Float> {
    pub config: SystemConfig<F>,
    pub composites: AllocVec<Composite<F>>,
    pub forces: AllocVec<Force<F>>,
    pub constraints: AllocVec<Constraint<F>>,
}

impl<F: Float> ParticleSystem<F> {
    pub fn new(iterations: usize) -> Self {
        Self::with_config(SystemConfig::new().with_iterations(iterations))
    }

    pub fn with_config(config: SystemConfig<F>) -> Self {
        ParticleSystem {
            config,
            composites: AllocVec::new(),
            forces: AllocVec::new(),
            constraints: AllocVec::new(),
        }
    }

    /// Move a composite into the system. Returns its index.
    pub fn add_composite(&mut self, composite: Composite<F>) -> usize {
        let index = self.composites.len();
        self.composites.push(composite);
        index
    }

    pub fn add_force(&mut self, force: Force<F>) {
        self.forces.push(force);
    }

    pub fn add_forces<I: IntoIterator<Item = Force<F>>>(&mut self, forces: I) {
        self.forces.extend(forces);
    }

    pub fn add_constraint(&mut self, constraint: Constraint<F>) {
        self.constraints.push(constraint);
    }

    pub fn add_constraints<I: IntoIterator<Item = Constraint<F>>>(&mut self, constraints: I) {
        self.constraints.extend(constraints);
    }

    pub fn composite(&self, index: usize) -> &Composite<F> {
        &self.composites[index]
    }

    pub fn composite_mut(&mut self, index: usize) -> &mut Composite<F> {
        &mut self.composites[index]
    }

    pub fn composite_count(&self) -> usize {
        self.composites.len()
    }

    pub fn particle_count(&self) -> usize {
        self.composites.iter().map(|c| c.particles.len()).sum()
    }

    /// Run one simulation step: integrate all particles, run the
    /// configured number of relaxation passes, publish position buffers.
    pub fn update(&mut self) {
        self.update_with(&mut NoOpStepObserver);
    }

    /// [`update`], reporting each phase to `observer`.
    ///
    /// [`update`]: ParticleSystem::update
    pub fn update_with<O: StepObserver>(&mut self, observer: &mut O) {
        self.integrate();
        observer.on_integrate();
        for i in 0..self.config.iterations {
            self.relax();
            observer.on_relax_iteration(i);
        }
        self.publish();
        observer.on_step_complete();
    }

    /// Advance every particle by its damped Verlet velocity, then apply
    /// the global forces in registration order. The previous position is
    /// snapshotted before velocity and forces land, so the next step's
    /// velocity reflects this step's full displacement.
    fn integrate(&mut self) {
        for composite in self.composites.iter_mut() {
            for particle in composite.particles.iter_mut() {
                let velocity = particle.velocity().scale(self.config.friction);
                particle.prev_position = particle.position;
                particle.position = particle.position + velocity;
                for force in self.forces.iter() {
                    force.apply(particle);
                }
            }
        }
    }

    /// One Gauss-Seidel pass: every composite's local constraints in
    /// insertion order, then every global constraint across every
    /// composite in registration order.
    fn relax(&mut self) {
        for composite in self.composites.iter_mut() {
            composite.solve_constraints();
        }
        for composite in self.composites.iter_mut() {
            for constraint in self.constraints.iter() {
                constraint.solve(&mut composite.particles);
            }
        }
    }

    fn publish(&mut self) {
        for composite in self.composites.iter_mut() {
            composite.update_position_buffer();
        }
    }
}
