use std::f32::consts::FRAC_PI_2;

use orrery_geom::{Euler, Vec3, wrap_angle};
use serde::Deserialize;

use crate::error::ConfigError;
use crate::kinematics::OrbitClock;

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct CameraRig {
    #[serde(default = "default_distance")]
    pub distance: f32,
    #[serde(default = "default_height")]
    pub height: f32,
    /// Pitch in degrees; 0 looks straight down, 90 looks at the horizon.
    #[serde(default = "default_tilt")]
    pub tilt_deg: f32,
}

fn default_distance() -> f32 {
    60.0
}
fn default_height() -> f32 {
    30.0
}
fn default_tilt() -> f32 {
    55.0
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            distance: default_distance(),
            height: default_height(),
            tilt_deg: default_tilt(),
        }
    }
}

impl CameraRig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.distance.is_finite() && self.distance > 0.0) {
            return Err(ConfigError::InvalidCamera("distance must be positive"));
        }
        if !(self.height.is_finite() && self.height > 0.0) {
            return Err(ConfigError::InvalidCamera("height must be positive"));
        }
        if !(0.0..=90.0).contains(&self.tilt_deg) {
            return Err(ConfigError::InvalidCamera("tilt must be within [0, 90] degrees"));
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub look_at: Vec3,
    pub rotation: Euler,
    /// Sweep angle in `[0, TAU)` the position was derived from.
    pub sweep: f32,
}

/// Plans a camera that circles the origin once per timeline.
#[derive(Clone, Debug)]
pub struct CameraPlanner {
    rig: CameraRig,
    total_frames: u32,
    clock: OrbitClock,
    speed: f32,
}

impl CameraPlanner {
    pub fn new(rig: CameraRig, total_frames: u32, clock: OrbitClock) -> Result<Self, ConfigError> {
        rig.validate()?;
        if total_frames < 1 {
            return Err(ConfigError::InvalidTimeline("total frames must be at least 1"));
        }
        let speed = clock.loop_speed(total_frames);
        Ok(Self {
            rig,
            total_frames,
            clock,
            speed,
        })
    }

    /// Sweep angle for `frame`. The timeline is periodic, so the frame is
    /// folded into `[0, total_frames)` first; frame `total_frames` lands on
    /// exactly the same angle as frame 0.
    pub fn sweep_angle(&self, frame: u32) -> f32 {
        self.clock.angle(self.speed, frame % self.total_frames)
    }

    pub fn pose(&self, frame: u32) -> CameraPose {
        let sweep = self.sweep_angle(frame);
        let ring = self.clock.position(self.rig.distance, self.speed, frame % self.total_frames);
        let position = Vec3::new(ring.x, ring.y, self.rig.height);
        // Yaw turns the lens from +Y to face back toward the origin.
        let yaw = wrap_angle(sweep + FRAC_PI_2);
        CameraPose {
            position,
            look_at: Vec3::ZERO,
            rotation: Euler::new(self.rig.tilt_deg.to_radians(), 0.0, yaw),
            sweep,
        }
    }
}

/// One-off pose query with the default clock; the clock cancels out of the
/// sweep since the speed is derived from it.
pub fn camera_pose(
    distance: f32,
    height: f32,
    tilt_deg: f32,
    frame: u32,
    total_frames: u32,
) -> Result<CameraPose, ConfigError> {
    let rig = CameraRig {
        distance,
        height,
        tilt_deg,
    };
    Ok(CameraPlanner::new(rig, total_frames, OrbitClock::default())?.pose(frame))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn loop_boundary_matches_start_exactly() {
        let p = CameraPlanner::new(CameraRig::default(), 150, OrbitClock::default()).unwrap();
        assert_eq!(p.sweep_angle(0), p.sweep_angle(150));
        assert_eq!(p.pose(0), p.pose(150));
    }

    #[test]
    fn halfway_is_opposite_side() {
        let pose = camera_pose(60.0, 30.0, 55.0, 75, 150).unwrap();
        assert!((pose.sweep - PI).abs() < 1e-4);
        assert!((pose.position.x + 60.0).abs() < 1e-3);
        assert!(pose.position.y.abs() < 1e-3);
        assert_eq!(pose.position.z, 30.0);
    }

    #[test]
    fn yaw_faces_origin_in_plane() {
        let p = CameraPlanner::new(CameraRig::default(), 90, OrbitClock::default()).unwrap();
        for frame in [0, 10, 33, 89] {
            let pose = p.pose(frame);
            // Heading of the lens at yaw (rotated from +Y) in the XY plane
            let heading = Vec3::new(-pose.rotation.yaw.sin(), pose.rotation.yaw.cos(), 0.0);
            let planar = Vec3::new(-pose.position.x, -pose.position.y, 0.0);
            let to_origin = Vec3::new(planar.x / planar.length(), planar.y / planar.length(), 0.0);
            assert!(heading.dot(to_origin) > 0.999);
        }
    }

    #[test]
    fn rejects_out_of_range_rig() {
        assert!(matches!(camera_pose(0.0, 30.0, 55.0, 0, 150), Err(ConfigError::InvalidCamera(_))));
        assert!(matches!(camera_pose(60.0, -1.0, 55.0, 0, 150), Err(ConfigError::InvalidCamera(_))));
        assert!(matches!(camera_pose(60.0, 30.0, 91.0, 0, 150), Err(ConfigError::InvalidCamera(_))));
        assert!(matches!(camera_pose(60.0, 30.0, 55.0, 0, 0), Err(ConfigError::InvalidTimeline(_))));
        assert!(camera_pose(60.0, 30.0, 0.0, 0, 150).is_ok());
        assert!(camera_pose(60.0, 30.0, 90.0, 0, 150).is_ok());
    }
}
