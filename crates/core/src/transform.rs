//! Reusable vector transformers
//!
//! This module defines the `VectorTransform` trait: an operation configured
//! once (an offset, a scale factor, a length limit, a rotation angle) and
//! then applied to any number of vectors. Each transformer delegates to the
//! matching free function in [`crate::core_types::vec3`], so both forms
//! always agree.
//!
//! The parameterised transformers derive serde traits so a host application
//! can keep them in its own configuration.
//!
//! # Usage
//! ```
//! use vecmath_core::transform::{Clamp, Scale, VectorTransform};
//! use vecmath_core::Vec3;
//!
//! let limit = Scale::new(3.0).then(Clamp::new(5.0));
//! let out = limit.apply(Vec3::new(2.0, 3.0, -1.0));
//! assert!((out.norm() - 5.0).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

use crate::core_types::units::Radians;
use crate::core_types::vec3::{self, Vec3};

/// An operation from one vector to another, configured ahead of time
///
/// Implementors must be pure: `apply` may be called concurrently and must
/// return the same output for the same input.
pub trait VectorTransform: Send + Sync {
    /// Apply the transform to `v`
    fn apply(&self, v: Vec3) -> Vec3;

    /// Run `self` first, then `next`
    fn then<T>(self, next: T) -> Chain<Self, T>
    where
        Self: Sized,
        T: VectorTransform,
    {
        Chain {
            first: self,
            second: next,
        }
    }
}

impl<F> VectorTransform for F
where
    F: Fn(Vec3) -> Vec3 + Send + Sync,
{
    #[inline]
    fn apply(&self, v: Vec3) -> Vec3 {
        self(v)
    }
}

/// Two transforms applied left to right, built by [`VectorTransform::then`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Chain<A, B> {
    first: A,
    second: B,
}

impl<A: VectorTransform, B: VectorTransform> VectorTransform for Chain<A, B> {
    #[inline]
    fn apply(&self, v: Vec3) -> Vec3 {
        self.second.apply(self.first.apply(v))
    }
}

// ============================================================================
// PARAMETERISED TRANSFORMS
// ============================================================================

/// Add a fixed offset
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Translate {
    pub offset: Vec3,
}

impl Translate {
    #[must_use]
    pub const fn new(offset: Vec3) -> Self {
        Translate { offset }
    }
}

impl VectorTransform for Translate {
    #[inline]
    fn apply(&self, v: Vec3) -> Vec3 {
        vec3::add(self.offset, v)
    }
}

/// Multiply every component by a fixed factor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scale {
    pub factor: f64,
}

impl Scale {
    #[must_use]
    pub const fn new(factor: f64) -> Self {
        Scale { factor }
    }
}

impl VectorTransform for Scale {
    #[inline]
    fn apply(&self, v: Vec3) -> Vec3 {
        vec3::scale(self.factor, v)
    }
}

/// Divide every component by a fixed factor (IEEE semantics for zero)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Divide {
    pub factor: f64,
}

impl Divide {
    #[must_use]
    pub const fn new(factor: f64) -> Self {
        Divide { factor }
    }
}

impl VectorTransform for Divide {
    #[inline]
    fn apply(&self, v: Vec3) -> Vec3 {
        vec3::divide(self.factor, v)
    }
}

/// Limit vector length to `max_length`, keeping direction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Clamp {
    pub max_length: f64,
}

impl Clamp {
    #[must_use]
    pub const fn new(max_length: f64) -> Self {
        Clamp { max_length }
    }
}

impl VectorTransform for Clamp {
    #[inline]
    fn apply(&self, v: Vec3) -> Vec3 {
        vec3::clamp(self.max_length, v)
    }
}

/// Counter-clockwise rotation around the z axis
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RotateAroundZ {
    pub angle: Radians,
}

impl RotateAroundZ {
    #[must_use]
    pub const fn new(angle: Radians) -> Self {
        RotateAroundZ { angle }
    }
}

impl VectorTransform for RotateAroundZ {
    #[inline]
    fn apply(&self, v: Vec3) -> Vec3 {
        vec3::rotate_around_z(self.angle, v)
    }
}

// ============================================================================
// PARAMETERLESS TRANSFORMS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Negate;

impl VectorTransform for Negate {
    #[inline]
    fn apply(&self, v: Vec3) -> Vec3 {
        vec3::negate(v)
    }
}

/// Unit length; zero vectors pass through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Normalize;

impl VectorTransform for Normalize {
    #[inline]
    fn apply(&self, v: Vec3) -> Vec3 {
        vec3::normalize(v)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProjectOntoXy;

impl VectorTransform for ProjectOntoXy {
    #[inline]
    fn apply(&self, v: Vec3) -> Vec3 {
        vec3::project_onto_xy(v)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PerpendicularXy;

impl VectorTransform for PerpendicularXy {
    #[inline]
    fn apply(&self, v: Vec3) -> Vec3 {
        vec3::perpendicular_xy(v)
    }
}

/// Y/Z axis swap; applying it twice is the identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SwapYz;

impl VectorTransform for SwapYz {
    #[inline]
    fn apply(&self, v: Vec3) -> Vec3 {
        vec3::xyz_to_xzy(v)
    }
}
