//! Concrete vector scenarios
//!
//! Fixed inputs with known outputs for each public operation.
//!
//! Run tests with: `cargo test --test vector_scenarios`

use approx::assert_abs_diff_eq;
use std::f64::consts::PI;
use vecmath_core::core_types::vec3::{
    self, add, add_to, clamp, clamp_to, is_not_zero, is_zero, perpendicular_xy, project_onto_xy,
    rotate_around_z, scale, scale_by, subtract, subtract_from, to_array, xyz_to_xzy, xzy_to_xyz,
};
use vecmath_core::{Radians, Vec3};

#[test]
fn test_add_two_vectors() {
    let v1 = Vec3::new(0.0, 0.0, 0.0);
    let v2 = Vec3::new(1.0, 1.0, 1.0);
    assert_eq!(add(v1, v2), Vec3::new(1.0, 1.0, 1.0));
    assert_eq!(add_to(v1)(v2), Vec3::new(1.0, 1.0, 1.0));
}

#[test]
fn test_subtract_two_vectors() {
    let v1 = Vec3::new(0.0, 0.0, 0.0);
    let v2 = Vec3::new(1.0, 1.0, 1.0);
    assert_eq!(subtract(v1, v2), Vec3::new(-1.0, -1.0, -1.0));
    assert_eq!(subtract_from(v1)(v2), Vec3::new(-1.0, -1.0, -1.0));
}

#[test]
fn test_scale_vector() {
    let v1 = Vec3::new(2.0, 3.0, -1.0);
    assert_eq!(scale(3.0, v1), Vec3::new(6.0, 9.0, -3.0));
    assert_eq!(scale_by(3.0)(v1), Vec3::new(6.0, 9.0, -3.0));
}

#[test]
fn test_clamp_vector_longer_than_limit() {
    // length about 7
    let v1 = Vec3::new(3.0, 4.0, 5.0);
    let clamped = clamp(2.0, v1);
    assert_abs_diff_eq!(vec3::magnitude(clamped), 2.0, epsilon = 1e-7);
}

#[test]
fn test_clamp_vector_shorter_than_limit() {
    let v1 = Vec3::new(3.0, 4.0, 5.0);
    let clamped = clamp_to(10.0)(v1);
    assert_eq!(clamped, v1);
    assert_eq!(to_array(clamped).map(f64::to_bits), to_array(v1).map(f64::to_bits));
}

#[test]
fn test_project_onto_xy_plane() {
    let v1 = Vec3::new(3.0, 4.0, 5.0);
    assert_eq!(project_onto_xy(v1), Vec3::new(3.0, 4.0, 0.0));
}

#[test]
fn test_rotate_half_turn_around_z() {
    let rotated = rotate_around_z(Radians::new(PI), Vec3::new(1.0, 1.0, 1.0));
    assert_abs_diff_eq!(rotated.x, -1.0, epsilon = 1e-8);
    assert_abs_diff_eq!(rotated.y, -1.0, epsilon = 1e-8);
    assert_abs_diff_eq!(rotated.z, 1.0, epsilon = 1e-8);
}

#[test]
fn test_rotate_two_full_turns_around_z() {
    let rotated = rotate_around_z(Radians::new(4.0 * PI), Vec3::new(1.0, 1.0, 1.0));
    assert_abs_diff_eq!(rotated.x, 1.0, epsilon = 1e-8);
    assert_abs_diff_eq!(rotated.y, 1.0, epsilon = 1e-8);
    assert_abs_diff_eq!(rotated.z, 1.0, epsilon = 1e-8);
}

#[test]
fn test_perpendicular_vectors() {
    assert_eq!(
        perpendicular_xy(Vec3::new(1.0, 1.0, 0.0)),
        Vec3::new(-1.0, 1.0, 0.0)
    );
    assert_eq!(
        perpendicular_xy(Vec3::new(0.0, -1.0, 0.0)),
        Vec3::new(1.0, 0.0, 0.0)
    );
}

#[test]
fn test_perpendicular_of_zero_vector() {
    let p = perpendicular_xy(Vec3::new(0.0, 0.0, 0.0));
    assert_eq!(
        to_array(p).map(f64::to_bits),
        [(-0.0_f64).to_bits(), 0.0_f64.to_bits(), 0.0_f64.to_bits()]
    );
}

#[test]
fn test_zero_vector_checks() {
    assert!(is_zero(Vec3::new(0.0, 0.0, 0.0)));
    assert!(!is_zero(Vec3::new(1e-12, 0.0, 0.0)));
    assert!(is_not_zero(Vec3::new(1e-12, 0.0, 0.0)));
}

#[test]
fn test_axis_swap_round_trip() {
    let v = Vec3::new(1.0, 2.0, 3.0);
    let swapped = xyz_to_xzy(v);
    assert_eq!(to_array(swapped), [1.0, 3.0, 2.0]);
    assert_eq!(xzy_to_xyz(swapped), v);
}
