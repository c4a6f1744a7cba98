use orrery_geom::{Aabb, Vec3, wrap_angle};
use std::f32::consts::{PI, TAU};

fn approx_eq(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() <= eps
}

fn vec3_approx_eq(a: Vec3, b: Vec3, eps: f32) -> bool {
    approx_eq(a.x, b.x, eps) && approx_eq(a.y, b.y, eps) && approx_eq(a.z, b.z, eps)
}

#[test]
fn vec3_constants() {
    assert!(vec3_approx_eq(Vec3::ZERO, Vec3::new(0.0, 0.0, 0.0), 1e-6));
    assert_eq!(Vec3::planar(3.0, -2.0), Vec3::new(3.0, -2.0, 0.0));
}

#[test]
fn vec3_add_sub_neg() {
    let a = Vec3::new(1.0, 2.0, 3.0);
    let b = Vec3::new(-4.0, 5.0, -6.0);
    let c = a + b;
    assert!(vec3_approx_eq(c, Vec3::new(-3.0, 7.0, -3.0), 1e-6));
    assert!(vec3_approx_eq(c - a, b, 1e-6));
    assert!(vec3_approx_eq(-a, Vec3::new(-1.0, -2.0, -3.0), 1e-6));
}

#[test]
fn vec3_length() {
    let v = Vec3::new(3.0, 4.0, 0.0);
    assert!(approx_eq(v.length_squared(), 25.0, 1e-6));
    assert!(approx_eq(v.length(), 5.0, 1e-6));
    assert_eq!(Vec3::ZERO.length(), 0.0);
}

#[test]
fn aabb_centered_and_contains() {
    let b = Aabb::centered(Vec3::new(80.0, 80.0, 40.0));
    assert_eq!(b.min, Vec3::new(-80.0, -80.0, -40.0));
    assert!(b.contains(Vec3::new(80.0, -80.0, 40.0)));
    assert!(!b.contains(Vec3::new(0.0, 0.0, 40.5)));
}

#[test]
fn aabb_max_origin_distance() {
    let b = Aabb::centered(Vec3::new(80.0, 80.0, 40.0));
    assert!(approx_eq(b.max_origin_distance(), 120.0, 1e-3));

    // Offset boxes take the farthest face on each axis
    let off = Aabb::new(Vec3::new(-1.0, 2.0, 0.0), Vec3::new(3.0, 4.0, 0.0));
    assert!(approx_eq(off.max_origin_distance(), 5.0, 1e-6));
}

#[test]
fn wrap_angle_reduces() {
    assert_eq!(wrap_angle(0.0), 0.0);
    assert!(approx_eq(wrap_angle(TAU + PI), PI, 1e-5));
    assert!(approx_eq(wrap_angle(-PI / 2.0), 1.5 * PI, 1e-5));
    assert!(wrap_angle(-1e-9) < TAU);
}
