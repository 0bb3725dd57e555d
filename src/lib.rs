//! 3D Verlet particle simulation kernel with iterative constraint
//! relaxation.
//!
//! `medusa` advances point masses under position-based Verlet
//! integration and satisfies geometric constraints (pins, distance
//! ranges, bounding boxes, axis projections) by repeated Gauss-Seidel
//! sweeps. It is the simulation half of a procedural-animation stack:
//! a rendering layer reads each composite's flat position buffer after
//! every step and never touches the kernel otherwise.
//!
//! # Features
//!
//! - **Verlet particles**: velocity implicit in the positional delta
//! - **Constraint relaxation**: pin, distance range, box, and axis
//!   constraints, solved iteratively in a strict, deterministic order
//! - **Composites**: particle groups with locally-scoped constraints and
//!   position/index buffers for rendering
//! - **Observable**: monitor stepping via the [`StepObserver`] trait
//! - **`no_std` compatible**: works in embedded and WASM environments

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod particle;
pub mod force;
pub mod constraint;
pub mod composite;
pub mod system;
pub mod config;
pub mod observer;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec3;
pub use particle::Particle;
pub use force::{Force, DirectionalForce};
pub use constraint::{Constraint, PinConstraint, DistanceConstraint, AxisConstraint, BoxConstraint};
pub use composite::Composite;
pub use system::ParticleSystem;
pub use config::SystemConfig;
pub use observer::{StepObserver, NoOpStepObserver};
pub use error::SimulationError;
