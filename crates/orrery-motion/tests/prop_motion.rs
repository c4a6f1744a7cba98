use orrery_motion::{
    CameraPlanner, CameraRig, OrbitClock, TwinkleGenerator, TwinkleNoise, TwinkleParams,
    schedule_frames,
};
use proptest::prelude::*;

fn approx_abs_rel(a: f32, b: f32, atol: f32, rtol: f32) -> bool {
    let diff = (a - b).abs();
    let scale = a.abs().max(b.abs());
    diff <= atol + rtol * scale
}

fn radius() -> impl Strategy<Value = f32> {
    0.1f32..500.0
}

fn speed() -> impl Strategy<Value = f32> {
    -5.0f32..5.0
}

fn total() -> impl Strategy<Value = u32> {
    1u32..2_000
}

fn interval() -> impl Strategy<Value = u32> {
    1u32..300
}

proptest! {
    // Orbiting bodies stay on their circle at every scheduled frame
    #[test]
    fn orbit_keeps_radius(r in radius(), s in speed(), total in total(), step in interval(), fps in 1u32..120) {
        let clock = OrbitClock { frame_rate: fps, ..OrbitClock::default() };
        for f in schedule_frames(total, step).unwrap() {
            let p = clock.position(r, s, f);
            prop_assert!(approx_abs_rel(p.length(), r, 1e-4, 1e-5));
            prop_assert_eq!(p.z, 0.0);
        }
    }

    // A stationary body has the same position at every frame
    #[test]
    fn zero_speed_is_stationary(r in radius(), total in total(), step in interval()) {
        let clock = OrbitClock::default();
        let first = clock.position(r, 0.0, 0);
        for f in schedule_frames(total, step).unwrap() {
            prop_assert_eq!(clock.position(r, 0.0, f), first);
        }
    }

    // Schedules are strictly increasing, start at 0 and end on the total once
    #[test]
    fn schedule_shape(total in total(), step in interval()) {
        let frames = schedule_frames(total, step).unwrap();
        prop_assert_eq!(frames[0], 0);
        prop_assert_eq!(*frames.last().unwrap(), total);
        prop_assert!(frames.windows(2).all(|w| w[0] < w[1] && w[1] - w[0] <= step));
        prop_assert_eq!(frames.iter().filter(|&&f| f == total).count(), 1);
    }

    // The camera closes its loop exactly for any timeline length
    #[test]
    fn camera_loop_is_exact(total in total(), d in 1.0f32..200.0, h in 0.5f32..100.0, tilt in 0.0f32..=90.0) {
        let rig = CameraRig { distance: d, height: h, tilt_deg: tilt };
        let p = CameraPlanner::new(rig, total, OrbitClock::default()).unwrap();
        prop_assert_eq!(p.sweep_angle(0), p.sweep_angle(total));
        prop_assert_eq!(p.pose(0), p.pose(total));
        let mid = p.pose(total / 2);
        prop_assert!(approx_abs_rel(mid.position.x.hypot(mid.position.y), d, 1e-3, 1e-4));
    }

    // Twinkle depends only on (seed, frame), never on query order
    #[test]
    fn twinkle_order_independent(seed in any::<u32>(), frames in prop::collection::vec(0u32..10_000, 1..20), smooth in any::<bool>()) {
        let params = TwinkleParams {
            noise: if smooth { TwinkleNoise::Smooth } else { TwinkleNoise::White },
            ..TwinkleParams::default()
        };
        let g = TwinkleGenerator::new(&params);
        let forward: Vec<f32> = frames.iter().map(|&f| g.emission(3.0, seed, f)).collect();
        let backward: Vec<f32> = frames.iter().rev().map(|&f| g.emission(3.0, seed, f)).collect();
        let reversed: Vec<f32> = backward.into_iter().rev().collect();
        prop_assert_eq!(forward, reversed);
    }

    // Smooth twinkle is keyed by every bit of the seed
    #[test]
    fn smooth_twinkle_differs_per_seed(a in any::<u32>(), b in any::<u32>()) {
        prop_assume!(a != b);
        let params = TwinkleParams { noise: TwinkleNoise::Smooth, ..TwinkleParams::default() };
        let g = TwinkleGenerator::new(&params);
        let ta: Vec<f32> = (0..150).map(|f| g.emission(3.0, a, f)).collect();
        let tb: Vec<f32> = (0..150).map(|f| g.emission(3.0, b, f)).collect();
        prop_assert_ne!(ta, tb);
    }

    // Seeds that agree in their low half still twinkle apart
    #[test]
    fn smooth_twinkle_uses_high_seed_bits(low in 0u32..0x1_0000, hi_a in 0u32..0x1_0000, hi_b in 0u32..0x1_0000) {
        prop_assume!(hi_a != hi_b);
        let params = TwinkleParams { noise: TwinkleNoise::Smooth, ..TwinkleParams::default() };
        let g = TwinkleGenerator::new(&params);
        let (sa, sb) = ((hi_a << 16) | low, (hi_b << 16) | low);
        let ta: Vec<f32> = (0..150).map(|f| g.emission(3.0, sa, f)).collect();
        let tb: Vec<f32> = (0..150).map(|f| g.emission(3.0, sb, f)).collect();
        prop_assert_ne!(ta, tb);
    }
}
