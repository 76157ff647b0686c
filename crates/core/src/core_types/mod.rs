//! Core types and utilities

pub mod units;
pub mod vec3;

// Re-export
pub use units::{Degrees, Radians};
pub use vec3::{Direction, Vec3};
