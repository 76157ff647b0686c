//! 3D vector type and the pure operations over it.
//!
//! Every function here takes its vectors by value and returns a new value.
//! Nothing is mutated and nothing is cached, so all of it is safe to call
//! from any number of threads at once.
//!
//! Operations that are usually configured once and then applied to many
//! vectors (add, subtract, dot, scale, divide, clamp, rotate) also come in
//! a partially applied form, e.g. [`scale_by`], which returns a reusable
//! closure. See [`crate::transform`] for the equivalent struct-based transformers.

use nalgebra::Vector3;

use super::units::Radians;

/// 3D vector type for positions, displacements, and directions.
///
/// This is a simple alias for `nalgebra::Vector3<f64>`. Components are read
/// as `v.x`, `v.y`, `v.z`, and equality is exact IEEE-754 equality per
/// component (so `-0.0 == 0.0`).
pub type Vec3 = Vector3<f64>;

/// A [`Vec3`] used as a direction. Unit length is expected but not enforced.
pub type Direction = Vec3;

/// Componentwise sum.
#[inline]
#[must_use]
pub fn add(a: Vec3, b: Vec3) -> Vec3 {
    a + b
}

/// Componentwise difference, `a - b`.
#[inline]
#[must_use]
pub fn subtract(a: Vec3, b: Vec3) -> Vec3 {
    a - b
}

/// Multiply every component by `factor`.
#[inline]
#[must_use]
pub fn scale(factor: f64, v: Vec3) -> Vec3 {
    Vec3::new(v.x * factor, v.y * factor, v.z * factor)
}

/// Divide every component by `factor`.
///
/// A zero `factor` is not rejected: the result follows IEEE-754 division
/// (±infinity, or NaN for `0.0 / 0.0`).
#[inline]
#[must_use]
pub fn divide(factor: f64, v: Vec3) -> Vec3 {
    Vec3::new(v.x / factor, v.y / factor, v.z / factor)
}

#[inline]
#[must_use]
pub fn negate(v: Vec3) -> Vec3 {
    -v
}

/// Euclidean length, `sqrt(x² + y² + z²)`.
///
/// Finite vectors whose squared length overflows `f64` are measured after
/// rescaling by their largest component, so the result stays finite as long
/// as the true length does.
#[inline]
#[must_use]
pub fn magnitude(v: Vec3) -> f64 {
    let squared = squared_magnitude(v);
    if squared.is_infinite() && is_finite(v) {
        let largest = largest_component(v);
        return largest * squared_magnitude(divide(largest, v)).sqrt();
    }
    squared.sqrt()
}

/// `x² + y² + z²`. Prefer this over [`magnitude`] for comparisons.
///
/// Overflows to infinity once a component exceeds about `1e154`.
#[inline]
#[must_use]
pub fn squared_magnitude(v: Vec3) -> f64 {
    v.x * v.x + v.y * v.y + v.z * v.z
}

/// Rescale to unit length, keeping the direction.
///
/// A vector whose squared magnitude is exactly zero is returned unchanged.
/// Very large finite vectors are rescaled first, so they still come out at
/// unit length. Infinite or NaN components propagate NaN.
#[inline]
#[must_use]
pub fn normalize(v: Vec3) -> Vec3 {
    let squared = squared_magnitude(v);
    if squared == 0.0 {
        return v;
    }
    if squared.is_infinite() && is_finite(v) {
        // rescaled squared length lies in [1, 3]
        return normalize(divide(largest_component(v), v));
    }
    divide(squared.sqrt(), v)
}

/// Limit the length of `v` to `max_length`, keeping its direction.
///
/// Vectors that are already short enough come back untouched, bit for bit.
/// Only longer vectors pay for the square root in [`normalize`]. A negative
/// `max_length` limits by its absolute value, and longer vectors come out
/// pointing the opposite way.
#[inline]
#[must_use]
pub fn clamp(max_length: f64, v: Vec3) -> Vec3 {
    let squared = squared_magnitude(v);
    let limit_squared = max_length * max_length;
    let short_enough = if squared.is_infinite() && limit_squared.is_infinite() {
        magnitude(v) <= max_length.abs()
    } else {
        squared <= limit_squared
    };
    if short_enough {
        v
    } else {
        scale(max_length, normalize(v))
    }
}

fn is_finite(v: Vec3) -> bool {
    v.x.is_finite() && v.y.is_finite() && v.z.is_finite()
}

fn largest_component(v: Vec3) -> f64 {
    v.x.abs().max(v.y.abs()).max(v.z.abs())
}

/// Drop the z component (project onto the XY plane).
#[inline]
#[must_use]
pub fn project_onto_xy(v: Vec3) -> Vec3 {
    Vec3::new(v.x, v.y, 0.0)
}

#[inline]
#[must_use]
pub fn dot(a: Vec3, b: Vec3) -> f64 {
    a.x * b.x + a.y * b.y + a.z * b.z
}

/// Rotate counter-clockwise around the z axis by `angle`.
///
/// z passes through unchanged. Any angle is accepted; sine and cosine take
/// care of whole turns.
#[inline]
#[must_use]
pub fn rotate_around_z(angle: Radians, v: Vec3) -> Vec3 {
    let (sin, cos) = angle.sin_cos();
    Vec3::new(cos * v.x - sin * v.y, sin * v.x + cos * v.y, v.z)
}

/// 90° counter-clockwise turn of the XY projection: `(-y, x, 0)`.
///
/// The sign of zero is preserved, so the zero vector maps to `(-0, 0, 0)`.
#[inline]
#[must_use]
pub fn perpendicular_xy(v: Vec3) -> Vec3 {
    Vec3::new(-v.y, v.x, 0.0)
}

/// True iff all three components are exactly zero (no epsilon).
#[inline]
#[must_use]
pub fn is_zero(v: Vec3) -> bool {
    v.x == 0.0 && v.y == 0.0 && v.z == 0.0
}

#[inline]
#[must_use]
pub fn is_not_zero(v: Vec3) -> bool {
    !is_zero(v)
}

/// Components as `[x, y, z]`.
#[inline]
#[must_use]
pub fn to_array(v: Vec3) -> [f64; 3] {
    [v.x, v.y, v.z]
}

/// Swap y and z, converting between z-up and y-up conventions.
///
/// The swap is its own inverse; [`xzy_to_xyz`] is this same function.
#[inline]
#[must_use]
pub fn xyz_to_xzy(v: Vec3) -> Vec3 {
    Vec3::new(v.x, v.z, v.y)
}

pub use self::xyz_to_xzy as xzy_to_xyz;

// ============================================================================
// PARTIALLY APPLIED FORMS
// ============================================================================

/// `scale(factor, _)` as a reusable closure.
#[inline]
pub fn scale_by(factor: f64) -> impl Fn(Vec3) -> Vec3 + Copy {
    move |v| scale(factor, v)
}

/// `divide(factor, _)` as a reusable closure.
#[inline]
pub fn divide_by(factor: f64) -> impl Fn(Vec3) -> Vec3 + Copy {
    move |v| divide(factor, v)
}

/// `clamp(max_length, _)` as a reusable closure.
#[inline]
pub fn clamp_to(max_length: f64) -> impl Fn(Vec3) -> Vec3 + Copy {
    move |v| clamp(max_length, v)
}

/// `rotate_around_z(angle, _)` as a reusable closure.
#[inline]
pub fn rotate_by(angle: Radians) -> impl Fn(Vec3) -> Vec3 + Copy {
    move |v| rotate_around_z(angle, v)
}

/// `add(offset, _)` as a reusable closure.
#[inline]
pub fn add_to(offset: Vec3) -> impl Fn(Vec3) -> Vec3 + Copy {
    move |v| add(offset, v)
}

/// `subtract(minuend, _)` as a reusable closure: `|v| minuend - v`.
#[inline]
pub fn subtract_from(minuend: Vec3) -> impl Fn(Vec3) -> Vec3 + Copy {
    move |v| subtract(minuend, v)
}

/// `dot(w, _)` as a reusable closure.
#[inline]
pub fn dot_with(w: Vec3) -> impl Fn(Vec3) -> f64 + Copy {
    move |v| dot(w, v)
}
