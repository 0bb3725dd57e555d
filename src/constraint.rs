//! Geometric constraints solved by iterative relaxation: pin, distance,
//! axis, box.

use crate::float::Float;
use crate::particle::Particle;
use crate::vec::Vec3;

/// A constraint that can be projected onto a composite's particle arena.
///
/// Index-bound variants (pin, distance, axis) resolve their particle
/// indices against the slice at application time. The box variant is
/// particle-wise and sweeps every particle of the slice, which is what
/// makes it usable as a system-wide constraint.
pub enum Constraint<F: Float> {
    Pin(PinConstraint<F>),
    Distance(DistanceConstraint<F>),
    Axis(AxisConstraint<F>),
    Box(BoxConstraint<F>),
}

impl<F: Float> Constraint<F> {
    /// Project the constraint. Corrections read the most recently updated
    /// positions, so application order matters (Gauss-Seidel).
    pub fn solve(&self, particles: &mut [Particle<F>]) {
        match self {
            Constraint::Pin(c) => c.solve(particles),
            Constraint::Distance(c) => c.solve(particles),
            Constraint::Axis(c) => c.solve(particles),
            Constraint::Box(c) => c.solve(particles),
        }
    }
}

/// Holds a particle at a fixed target position.
pub struct PinConstraint<F: Float> {
    pub particle: usize,
    pub position: Vec3<F>,
}

impl<F: Float> PinConstraint<F> {
    pub fn new(particle: usize, position: Vec3<F>) -> Self {
        PinConstraint { particle, position }
    }

    /// Pin a particle at the position it currently occupies.
    pub fn from_particles(particle: usize, particles: &[Particle<F>]) -> Self {
        PinConstraint { particle, position: particles[particle].position }
    }

    /// Unconditionally overwrites the bound particle's position,
    /// overriding any displacement applied earlier in the iteration.
    pub fn solve(&self, particles: &mut [Particle<F>]) {
        particles[self.particle].position = self.position;
    }
}

/// Keeps the distance between two particles inside `[min, max]`.
pub struct DistanceConstraint<F: Float> {
    pub a: usize,
    pub b: usize,
    pub min_distance: F,
    pub max_distance: F,
}

impl<F: Float> DistanceConstraint<F> {
    pub fn new(a: usize, b: usize, min_distance: F, max_distance: F) -> Self {
        DistanceConstraint { a, b, min_distance, max_distance }
    }

    /// Lock both bounds to the particles' current separation.
    pub fn from_particles(a: usize, b: usize, particles: &[Particle<F>]) -> Self {
        let rest = particles[a].distance(&particles[b]);
        DistanceConstraint { a, b, min_distance: rest, max_distance: rest }
    }

    /// No-op while the separation is in range. Otherwise both particles
    /// absorb half the correction toward the violated bound (equal-mass).
    pub fn solve(&self, particles: &mut [Particle<F>]) {
        let mut delta = particles[self.a].position - particles[self.b].position;
        let mut dist = delta.length();

        if dist >= self.min_distance && dist <= self.max_distance {
            return;
        }
        let target = if dist < self.min_distance {
            self.min_distance
        } else {
            self.max_distance
        };

        // Coincident points have no direction; substitute a small x
        // offset so the division below stays finite.
        if dist.is_near_zero(F::from_f32(1e-4)) {
            delta = Vec3::new(F::from_f32(0.1), F::zero(), F::zero());
            dist = F::from_f32(0.1);
        }

        let diff = (target - dist) / dist * F::half();
        let offset = delta.scale(diff);
        particles[self.a].position = particles[self.a].position + offset;
        particles[self.b].position = particles[self.b].position - offset;
    }
}

/// Confines a particle to the infinite line through `start` and `end`
/// (a slider joint).
pub struct AxisConstraint<F: Float> {
    pub start: Vec3<F>,
    pub end: Vec3<F>,
    pub particle: usize,
}

impl<F: Float> AxisConstraint<F> {
    pub fn new(start: Vec3<F>, end: Vec3<F>, particle: usize) -> Self {
        AxisConstraint { start, end, particle }
    }

    /// Orthogonal projection onto the line. Always succeeds.
    pub fn solve(&self, particles: &mut [Particle<F>]) {
        let axis = (self.end - self.start).normalize();
        let t = (particles[self.particle].position - self.start).dot(axis);
        particles[self.particle].position = self.start + axis.scale(t);
    }
}

/// Axis-aligned bounding box applied to every particle it sees.
///
/// `bounce_friction` scales the velocity component remembered on the
/// clamped axis: 1 keeps the full pre-collision velocity, 0 zeroes it
/// on contact.
pub struct BoxConstraint<F: Float> {
    pub min: Vec3<F>,
    pub max: Vec3<F>,
    pub bounce_friction: F,
}

impl<F: Float> BoxConstraint<F> {
    pub fn new(min: Vec3<F>, max: Vec3<F>) -> Self {
        BoxConstraint { min, max, bounce_friction: F::one() }
    }

    pub fn with_bounce_friction(mut self, bounce_friction: F) -> Self {
        self.bounce_friction = bounce_friction;
        self
    }

    pub fn solve(&self, particles: &mut [Particle<F>]) {
        for p in particles.iter_mut() {
            self.clamp(p);
        }
    }

    /// Clamp one particle into the box, axis by axis. The velocity is
    /// captured before any axis is clamped; on a clamped axis the
    /// previous position becomes `boundary + velocity * bounce_friction`.
    pub fn clamp(&self, p: &mut Particle<F>) {
        let velocity = p.velocity();
        if p.position.x < self.min.x {
            p.position.x = self.min.x;
            p.prev_position.x = self.min.x + velocity.x * self.bounce_friction;
        } else if p.position.x > self.max.x {
            p.position.x = self.max.x;
            p.prev_position.x = self.max.x + velocity.x * self.bounce_friction;
        }
        if p.position.y < self.min.y {
            p.position.y = self.min.y;
            p.prev_position.y = self.min.y + velocity.y * self.bounce_friction;
        } else if p.position.y > self.max.y {
            p.position.y = self.max.y;
            p.prev_position.y = self.max.y + velocity.y * self.bounce_friction;
        }
        if p.position.z < self.min.z {
            p.position.z = self.min.z;
            p.prev_position.z = self.min.z + velocity.z * self.bounce_friction;
        } else if p.position.z > self.max.z {
            p.position.z = self.max.z;
            p.prev_position.z = self.max.z + velocity.z * self.bounce_friction;
        }
    }
}
