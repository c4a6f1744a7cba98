use fastnoise_lite::{FastNoiseLite, NoiseType};
use serde::Deserialize;

use crate::error::ConfigError;
use crate::hash::rand_signed;

const TWINKLE_SALT: u32 = 0x7A1E_57A4;

/// Source of the `[-1, 1]` jitter applied to a star's brightness.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TwinkleNoise {
    /// Independent uniform draw per frame (flicker).
    #[default]
    White,
    /// Gradient noise along the frame axis (slow shimmer).
    Smooth,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct TwinkleParams {
    #[serde(default = "default_jitter_amplitude")]
    pub jitter_amplitude: f32,
    #[serde(default)]
    pub noise: TwinkleNoise,
    /// Cycles per frame for [`TwinkleNoise::Smooth`].
    #[serde(default = "default_smooth_frequency")]
    pub smooth_frequency: f32,
}

fn default_jitter_amplitude() -> f32 {
    0.17
}
fn default_smooth_frequency() -> f32 {
    0.08
}

impl Default for TwinkleParams {
    fn default() -> Self {
        Self {
            jitter_amplitude: default_jitter_amplitude(),
            noise: TwinkleNoise::White,
            smooth_frequency: default_smooth_frequency(),
        }
    }
}

impl TwinkleParams {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.jitter_amplitude.is_finite() && self.jitter_amplitude >= 0.0) {
            return Err(ConfigError::InvalidStarField("jitter amplitude must be >= 0"));
        }
        if !(self.smooth_frequency.is_finite() && self.smooth_frequency > 0.0) {
            return Err(ConfigError::InvalidStarField("smooth frequency must be > 0"));
        }
        Ok(())
    }
}

/// Brightness jitter keyed by `(seed, frame)`.
///
/// Holds no per-call state: any frame can be queried in any order and yields
/// the same value as a sequential sweep.
pub struct TwinkleGenerator {
    amplitude: f32,
    /// Frequency of the smooth noise; `None` for white noise.
    smooth_frequency: Option<f32>,
}

impl TwinkleGenerator {
    pub fn new(params: &TwinkleParams) -> Self {
        let smooth_frequency = match params.noise {
            TwinkleNoise::White => None,
            TwinkleNoise::Smooth => Some(params.smooth_frequency),
        };
        Self {
            amplitude: params.jitter_amplitude,
            smooth_frequency,
        }
    }

    /// Jitter in `[-1, 1]`.
    pub fn noise(&self, seed: u32, frame: u32) -> f32 {
        match self.smooth_frequency {
            None => rand_signed(seed, frame, 0, TWINKLE_SALT),
            Some(freq) => {
                // The whole seed keys the noise lattice; no two seeds share a track.
                let mut n = FastNoiseLite::with_seed(seed as i32);
                n.set_noise_type(Some(NoiseType::OpenSimplex2));
                n.set_frequency(Some(freq));
                n.get_noise_2d(frame as f32, 0.0).clamp(-1.0, 1.0)
            }
        }
    }

    /// `base * (1 + amplitude * noise)`, clamped to be non-negative.
    pub fn emission(&self, base_brightness: f32, seed: u32, frame: u32) -> f32 {
        let jitter = self.amplitude * self.noise(seed, frame);
        (base_brightness * (1.0 + jitter)).max(0.0)
    }
}

/// One-off form of [`TwinkleGenerator::emission`].
pub fn emission(params: &TwinkleParams, base_brightness: f32, seed: u32, frame: u32) -> f32 {
    TwinkleGenerator::new(params).emission(base_brightness, seed, frame)
}
