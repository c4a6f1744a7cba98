use std::f32::consts::TAU;

use orrery_geom::{Vec3, wrap_angle};

/// Radians per second per unit of orbit speed.
///
/// Chosen so that a speed of 1.0 completes one revolution over 150 frames at
/// 12 fps, which is the timeline the default scene is tuned for.
pub const DEFAULT_ANGULAR_SCALE: f32 = TAU * 12.0 / 150.0;

/// Orbit angle in `[0, TAU)` reached after `frame` frames.
///
/// A `frame_rate` of 0 is treated as 1 so every input yields a finite angle.
#[inline]
pub fn orbit_angle(speed: f32, frame: u32, frame_rate: u32, angular_scale: f32) -> f32 {
    let seconds = frame as f32 / frame_rate.max(1) as f32;
    wrap_angle(speed * seconds * angular_scale)
}

/// Position on a circle of `radius` around the origin, in the orbital plane.
///
/// A zero radius is the central body and always sits at the origin. A
/// `frame_rate` of 0 is treated as 1, as in [`orbit_angle`].
#[inline]
pub fn position(radius: f32, speed: f32, frame: u32, frame_rate: u32, angular_scale: f32) -> (f32, f32) {
    if radius == 0.0 {
        return (0.0, 0.0);
    }
    let (s, c) = orbit_angle(speed, frame, frame_rate, angular_scale).sin_cos();
    (radius * c, radius * s)
}

/// Frame rate and angular scale shared by everything that moves on a circle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitClock {
    pub frame_rate: u32,
    pub angular_scale: f32,
}

impl Default for OrbitClock {
    fn default() -> Self {
        Self {
            frame_rate: 12,
            angular_scale: DEFAULT_ANGULAR_SCALE,
        }
    }
}

impl OrbitClock {
    #[inline]
    pub fn angle(&self, speed: f32, frame: u32) -> f32 {
        orbit_angle(speed, frame, self.frame_rate, self.angular_scale)
    }

    #[inline]
    pub fn position(&self, radius: f32, speed: f32, frame: u32) -> Vec3 {
        let (x, y) = position(radius, speed, frame, self.frame_rate, self.angular_scale);
        Vec3::planar(x, y)
    }

    /// Speed that sweeps exactly one revolution over `total_frames`.
    ///
    /// Zero frame counts and rates are treated as 1.
    pub fn loop_speed(&self, total_frames: u32) -> f32 {
        let seconds = total_frames.max(1) as f32 / self.frame_rate.max(1) as f32;
        TAU / (seconds * self.angular_scale)
    }
}
