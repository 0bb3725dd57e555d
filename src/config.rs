//! Configuration for the particle system.

use crate::float::Float;

/// Per-system stepping parameters.
///
/// Each system owns its configuration, so independent simulations are
/// configurable and testable in isolation.
///
/// # Builder Pattern
/// ```
/// use medusa::config::SystemConfig;
///
/// let config: SystemConfig<f32> = SystemConfig::new()
///     .with_iterations(8)
///     .with_friction(0.99);
/// ```
pub struct SystemConfig<F: Float> {
    /// Velocity damping factor applied during integration.
    /// 1.0 = no damping. Default: 1.0.
    pub friction: F,
    /// Number of relaxation passes per step. More passes increase
    /// constraint stiffness but do not guarantee convergence. Default: 1.
    pub iterations: usize,
}

impl<F: Float> SystemConfig<F> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        SystemConfig {
            friction: F::one(),
            iterations: 1,
        }
    }

    /// Set the friction factor.
    pub fn with_friction(mut self, friction: F) -> Self {
        self.friction = friction;
        self
    }

    /// Set the number of relaxation passes.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }
}

impl<F: Float> Default for SystemConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}
