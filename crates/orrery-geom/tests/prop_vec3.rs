use orrery_geom::Vec3;
use proptest::num::f32::NORMAL;
use proptest::prelude::*;
use proptest::strategy::Strategy;

fn approx_abs_rel(a: f32, b: f32, atol: f32, rtol: f32) -> bool {
    let diff = (a - b).abs();
    let scale = a.abs().max(b.abs());
    diff <= atol + rtol * scale
}

fn bounded_f32() -> impl Strategy<Value = f32> {
    NORMAL.prop_filter("bounded", |v| v.is_finite() && v.abs() <= 1e4)
}

fn arb_vec3() -> impl Strategy<Value = Vec3> {
    (bounded_f32(), bounded_f32(), bounded_f32()).prop_map(|(x, y, z)| Vec3::new(x, y, z))
}

proptest! {
    // Length is unchanged by negation and matches the dot product
    #[test]
    fn length_matches_dot(v in arb_vec3()) {
        prop_assert_eq!((-v).length(), v.length());
        prop_assert!(approx_abs_rel(v.length() * v.length(), v.dot(v), 1e-3, 1e-4));
    }

    // Negation flips the sign of the dot product
    #[test]
    fn neg_flips_dot(a in arb_vec3(), b in arb_vec3()) {
        prop_assert_eq!((-a).dot(b), -(a.dot(b)));
    }

    // Planar points never leave the orbital plane
    #[test]
    fn planar_has_zero_z(x in bounded_f32(), y in bounded_f32()) {
        let p = Vec3::planar(x, y);
        prop_assert_eq!(p.z, 0.0);
        prop_assert!(approx_abs_rel(p.length(), x.hypot(y), 1e-6, 1e-5));
    }
}
