//! The 3D vector value type used throughout the kernel.

use crate::float::Float;
use core::ops::{Add, Sub};

/// Immutable 3D vector. Every operation returns a new value.
///
/// The kernel never validates numeric input: dividing by zero or
/// normalizing a zero-length vector produces infinities/NaN that
/// propagate through subsequent arithmetic instead of raising an error.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec3<F: Float> {
    pub x: F,
    pub y: F,
    pub z: F,
}

impl<F: Float> Vec3<F> {
    /// Create a new 3D vector.
    pub fn new(x: F, y: F, z: F) -> Self {
        Vec3 { x, y, z }
    }

    /// The origin (all components zero).
    pub fn zero() -> Self {
        Vec3 { x: F::zero(), y: F::zero(), z: F::zero() }
    }

    /// Scale all components by a scalar.
    pub fn scale(self, k: F) -> Self {
        Vec3 { x: self.x * k, y: self.y * k, z: self.z * k }
    }

    /// Scale by the reciprocal of `k`. A zero divisor yields an
    /// infinite/NaN reciprocal that propagates, it does not panic.
    pub fn divide(self, k: F) -> Self {
        self.scale(F::one() / k)
    }

    /// Dot product.
    pub fn dot(self, other: Self) -> F {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Squared length (avoids sqrt).
    pub fn length_sq(self) -> F {
        self.dot(self)
    }

    /// Length (magnitude).
    pub fn length(self) -> F {
        self.length_sq().sqrt()
    }

    /// Distance to another point.
    pub fn distance(self, other: Self) -> F {
        (self - other).length()
    }

    /// Squared distance to another point.
    pub fn distance_sq(self, other: Self) -> F {
        (self - other).length_sq()
    }

    /// Divide by own length. Undefined (NaN components) at zero length;
    /// callers must guard.
    pub fn normalize(self) -> Self {
        self.divide(self.length())
    }
}

impl<F: Float> Add for Vec3<F> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Vec3 { x: self.x + rhs.x, y: self.y + rhs.y, z: self.z + rhs.z }
    }
}

impl<F: Float> Sub for Vec3<F> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Vec3 { x: self.x - rhs.x, y: self.y - rhs.y, z: self.z - rhs.z }
    }
}
