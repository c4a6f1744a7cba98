use serde::Deserialize;

use crate::error::ConfigError;
use crate::kinematics::{DEFAULT_ANGULAR_SCALE, OrbitClock};

/// Frames at which a sample is committed: `0, interval, 2*interval, ...`
/// followed by `total_frames` exactly once.
///
/// Ending on `total_frames` puts a key on the loop boundary even when the
/// interval does not divide the timeline.
pub fn schedule_frames(total_frames: u32, interval: u32) -> Result<Vec<u32>, ConfigError> {
    if total_frames < 1 {
        return Err(ConfigError::InvalidTimeline("total frames must be at least 1"));
    }
    if interval < 1 {
        return Err(ConfigError::InvalidTimeline("keyframe interval must be at least 1"));
    }
    let mut frames: Vec<u32> = (0..total_frames).step_by(interval as usize).collect();
    frames.push(total_frames);
    Ok(frames)
}

/// Which sampling cadence an animated entity follows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cadence {
    Orbit,
    Camera,
    Twinkle,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Timeline {
    #[serde(default = "default_total_frames")]
    pub total_frames: u32,
    #[serde(default = "default_frame_rate")]
    pub frame_rate: u32,
    #[serde(default = "default_angular_scale")]
    pub angular_scale: f32,
    #[serde(default = "default_planet_interval")]
    pub planet_keyframe_interval: u32,
    #[serde(default = "default_camera_interval")]
    pub camera_keyframe_interval: u32,
    #[serde(default = "default_twinkle_interval")]
    pub twinkle_keyframe_interval: u32,
}

fn default_total_frames() -> u32 {
    150
}
fn default_frame_rate() -> u32 {
    12
}
fn default_angular_scale() -> f32 {
    DEFAULT_ANGULAR_SCALE
}
fn default_planet_interval() -> u32 {
    5
}
fn default_camera_interval() -> u32 {
    5
}
fn default_twinkle_interval() -> u32 {
    10
}

impl Default for Timeline {
    fn default() -> Self {
        Self {
            total_frames: default_total_frames(),
            frame_rate: default_frame_rate(),
            angular_scale: default_angular_scale(),
            planet_keyframe_interval: default_planet_interval(),
            camera_keyframe_interval: default_camera_interval(),
            twinkle_keyframe_interval: default_twinkle_interval(),
        }
    }
}

impl Timeline {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.total_frames < 1 {
            return Err(ConfigError::InvalidTimeline("total frames must be at least 1"));
        }
        if self.frame_rate < 1 {
            return Err(ConfigError::InvalidTimeline("frame rate must be at least 1"));
        }
        if !(self.angular_scale.is_finite() && self.angular_scale > 0.0) {
            return Err(ConfigError::InvalidTimeline("angular scale must be positive"));
        }
        if self.planet_keyframe_interval < 1
            || self.camera_keyframe_interval < 1
            || self.twinkle_keyframe_interval < 1
        {
            return Err(ConfigError::InvalidTimeline("keyframe interval must be at least 1"));
        }
        Ok(())
    }

    #[inline]
    pub fn clock(&self) -> OrbitClock {
        OrbitClock {
            frame_rate: self.frame_rate,
            angular_scale: self.angular_scale,
        }
    }

    #[inline]
    pub fn interval(&self, cadence: Cadence) -> u32 {
        match cadence {
            Cadence::Orbit => self.planet_keyframe_interval,
            Cadence::Camera => self.camera_keyframe_interval,
            Cadence::Twinkle => self.twinkle_keyframe_interval,
        }
    }

    pub fn frames(&self, cadence: Cadence) -> Result<Vec<u32>, ConfigError> {
        schedule_frames(self.total_frames, self.interval(cadence))
    }
}
