//! End-to-end transform scenarios for void_linalg
//!
//! These go through the public prelude only, the way a renderer or physics
//! system would. Tolerance checks need the `approx` impls.

#![cfg(feature = "approx")]

use approx::assert_abs_diff_eq;
use void_linalg::prelude::*;
use void_linalg::{clz, consts, popcount};

#[test]
fn scenario_translate_moves_the_origin() {
    let m = translate(Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(m * Vec4::new(0.0, 0.0, 0.0, 1.0), Vec4::new(1.0, 2.0, 3.0, 1.0));
}

#[test]
fn scenario_rotate_z_quarter_turn_is_counter_clockwise() {
    let v = rotate_z(consts::HALF_PI) * Vec4::new(1.0, 0.0, 0.0, 1.0);
    assert_abs_diff_eq!(v, Vec4::new(0.0, 1.0, 0.0, 1.0), epsilon = 1e-6);
}

#[test]
fn scenario_decompose_recovers_translate_rotate_scale() {
    let t = Vec3::new(10.0, -5.0, 2.5);
    let q = Quat::from_axis_angle(Vec3::new(1.0, 1.0, 0.0).normalize(), 2.2);
    let s = Vec3::new(0.5, 1.5, 3.0);

    let parts = decompose(&(translate(t) * rotate(q) * scale(s)));

    assert_abs_diff_eq!(parts.translation, t, epsilon = 1e-5);
    assert_abs_diff_eq!(parts.scale, s, epsilon = 1e-5);
    let q_back = if parts.rotation.dot(q) < 0.0 { -parts.rotation } else { parts.rotation };
    assert_abs_diff_eq!(q_back, q, epsilon = 1e-5);
}

#[test]
fn scenario_mat3_identity_and_zero_determinants() {
    assert_eq!(Mat3::IDENTITY.determinant(), 1.0);
    assert_eq!(Mat3::ZERO.determinant(), 0.0);
}

#[test]
fn scenario_bit_counting_boundaries() {
    assert_eq!(popcount(0u32), 0);
    assert_eq!(popcount(0xFFu8), 8);
    assert_eq!(clz(0u32), 32);
    assert_eq!(clz(1u32), 31);
    assert_eq!(ilog10(0), 0);
    assert_eq!(ilog10(9), 0);
    assert_eq!(ilog10(10), 1);
    assert_eq!(ilog10(999), 2);
    assert_eq!(ilog10(1000), 3);
    assert_eq!(ilog10(10_000_000_000_000_000_000), 19);
}

#[test]
fn scenario_model_view_projection_pipeline() {
    // Unit cube pushed 5 units in front of a camera at the origin.
    let model = Transform::new(Vec3::new(0.0, 0.0, -5.0), Quat::IDENTITY, Vec3::ONE).to_matrix();
    let view = lookat_rh(Vec3::ZERO, Vec3::NEG_Z, Vec3::Y);
    let projection = perspective_rh_zo(radians(60.0), 16.0 / 9.0, 0.1, 100.0);
    let mvp = projection * view * model;

    let center = mvp.transform_point(Vec3::ZERO);
    assert_abs_diff_eq!(center.x, 0.0, epsilon = 1e-6);
    assert_abs_diff_eq!(center.y, 0.0, epsilon = 1e-6);
    assert!(center.z > 0.0 && center.z < 1.0);

    // The near face is closer to the camera, so it ends up at smaller depth.
    let near_face = mvp.transform_point(Vec3::new(0.0, 0.0, 1.0));
    assert!(near_face.z < center.z);
}

#[test]
fn scenario_inverse_view_recovers_camera() {
    let eye = Vec3::new(3.0, 4.0, 5.0);
    let view = lookat_rh(eye, Vec3::ZERO, Vec3::Y);
    let camera = view.inverse();
    assert_abs_diff_eq!(camera.transform_point(Vec3::ZERO), eye, epsilon = 1e-4);
    assert_abs_diff_eq!(view * camera, Mat4::IDENTITY, epsilon = 1e-4);
    assert!(view.try_inverse().is_ok());
}

#[test]
fn scenario_singular_projection_is_detected_only_by_try_inverse() {
    // Collapsing scale leaves a singular matrix.
    let flat = scale(Vec3::new(1.0, 1.0, 0.0));
    assert_eq!(flat.determinant(), 0.0);
    assert!(flat.inverse().as_array().iter().any(|v| !v.is_finite()));
    assert!(matches!(flat.try_inverse(), Err(MathError::Singular { .. })));
}

#[test]
fn scenario_orient_camera_then_interpolate() {
    let from = Vec3::NEG_Z;
    let to = Vec3::new(1.0, 0.0, -1.0).normalize();
    let q = Quat::orient_towards(from, to);
    assert_abs_diff_eq!(q * from, to, epsilon = 1e-6);

    let a = Transform::IDENTITY;
    let b = Transform::from_rotation(q);
    let halfway = a.lerp(&b, 0.5).transform_direction(from);
    // half of a 45 degree turn bisects the two directions
    let expected = (from + to).normalize();
    assert_abs_diff_eq!(halfway, expected, epsilon = 1e-5);
}

#[test]
fn scenario_pick_ray_against_oriented_box() {
    let model = Transform::new(
        Vec3::new(0.0, 0.0, -10.0),
        Quat::from_rotation_y(consts::PI / 6.0),
        Vec3::new(2.0, 1.0, 1.0),
    );
    let obb = Obb::new(
        model.translation,
        model.rotation * Vec3::X,
        model.rotation * Vec3::Y,
        model.rotation * Vec3::Z,
        model.scale,
    );

    let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -2.0));
    let hit = ray.closest_point(obb.center);
    assert_eq!(hit, obb.center);
    assert!(obb.contains_point(hit));
    assert!(obb.to_extent().contains_point(hit));

    let enclosing = outer_extent(&obb.to_extent(), &Extent3::new(Vec3::ZERO, Vec3::ZERO));
    assert!(enclosing.contains_point(Vec3::ZERO));
    assert!(enclosing.contains_point(obb.center));
}
