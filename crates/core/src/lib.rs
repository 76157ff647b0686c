//! Vector Math Core Library
//!
//! Pure, stateless operations over 3-dimensional vectors, used as the
//! geometry/physics primitive layer of a larger simulation.
//!
//! ## Contents
//!
//! - [`core_types::vec3`]: the [`Vec3`] alias and free functions (arithmetic,
//!   normalization, clamping, projection, rotation, perpendiculars)
//! - [`core_types::units`]: [`Radians`] and [`Degrees`] angle newtypes
//! - [`transform`]: configured, reusable transformers and pipelines
//!
//! No function here mutates its arguments, performs I/O, or fails. Degenerate
//! inputs have defined results: zero-length vectors pass through
//! `normalize`/`clamp`, and division by zero follows IEEE-754.
//!
//! ```
//! use vecmath_core::core_types::vec3;
//! use vecmath_core::{Radians, Vec3};
//!
//! let v = vec3::rotate_around_z(Radians::HALF_TURN, Vec3::new(1.0, 1.0, 1.0));
//! assert!((v.x + 1.0).abs() < 1e-8 && (v.y + 1.0).abs() < 1e-8);
//! ```

// Core types and utilities
pub mod core_types;

pub mod transform;

// Re-export core types
pub use core_types::{Degrees, Direction, Radians, Vec3};
pub use transform::VectorTransform;
