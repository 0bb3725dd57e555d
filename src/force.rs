//! Forces displace particle positions additively during integration.

use crate::float::Float;
use crate::particle::Particle;
use crate::vec::Vec3;

/// A force that can be applied to a particle.
///
/// The variant set is closed; dispatch is an exhaustive match, so an
/// unimplemented force is a compile error rather than a runtime one.
pub enum Force<F: Float> {
    Directional(DirectionalForce<F>),
}

impl<F: Float> Force<F> {
    pub fn apply(&self, particle: &mut Particle<F>) {
        match self {
            Force::Directional(f) => f.apply(particle),
        }
    }
}

/// Constant per-step displacement, e.g. gravity.
///
/// The integration step already carries velocity forward through the
/// Verlet delta, so adding the same vector every step behaves as a
/// constant acceleration with an implicit unit time-step squared.
pub struct DirectionalForce<F: Float> {
    pub force: Vec3<F>,
}

impl<F: Float> DirectionalForce<F> {
    pub fn new(force: Vec3<F>) -> Self {
        DirectionalForce { force }
    }

    pub fn apply(&self, particle: &mut Particle<F>) {
        particle.position = particle.position + self.force;
    }
}
