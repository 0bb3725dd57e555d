//! Step observer trait for monitoring simulation progress.

/// Trait for observing the phases of a simulation step.
///
/// The kernel carries no logging; implement this to monitor stepping
/// (debugging, instrumentation, tests counting relaxation passes).
/// All methods have default no-op implementations.
pub trait StepObserver {
    /// Called after all particles have been integrated.
    fn on_integrate(&mut self) {}

    /// Called after each relaxation pass over the constraints.
    fn on_relax_iteration(&mut self, _iteration: usize) {}

    /// Called once the position buffers are published and the step is done.
    fn on_step_complete(&mut self) {}
}

/// A no-op observer. Use as default when no observation is needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}
