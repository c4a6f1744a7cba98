//! Pure animation math: circular orbits, keyframe cadence, twinkle and camera sweep.
#![forbid(unsafe_code)]

pub mod camera;
pub mod error;
pub mod hash;
pub mod kinematics;
pub mod schedule;
pub mod twinkle;

pub use camera::{CameraPlanner, CameraPose, CameraRig, camera_pose};
pub use error::ConfigError;
pub use kinematics::{DEFAULT_ANGULAR_SCALE, OrbitClock, orbit_angle, position};
pub use schedule::{Cadence, Timeline, schedule_frames};
pub use twinkle::{TwinkleGenerator, TwinkleNoise, TwinkleParams};
