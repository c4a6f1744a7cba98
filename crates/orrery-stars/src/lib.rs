//! Background star field placement with a minimum distance from the origin.
#![forbid(unsafe_code)]

use orrery_geom::{Aabb, Vec3};
use orrery_motion::ConfigError;
use orrery_motion::hash::derive_seed;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;
use serde::Deserialize;

/// Keeps the field's RNG stream apart from anything else keyed by the master seed.
const STAR_FIELD_SALT: u64 = 0x57A2_F1E1_D000_0001;

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct StarFieldParams {
    #[serde(default = "default_count")]
    pub count: usize,
    #[serde(default = "default_min_distance")]
    pub min_distance: f32,
    /// Half extents of the sampling box centered on the origin.
    #[serde(default = "default_half_extents")]
    pub half_extents: [f32; 3],
    /// Inclusive `[min, max]` base brightness.
    #[serde(default = "default_brightness")]
    pub brightness: [f32; 2],
    #[serde(default = "default_size")]
    pub size: f32,
    /// Resample budget per star before giving up.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
}

fn default_count() -> usize {
    20
}
fn default_min_distance() -> f32 {
    50.0
}
fn default_half_extents() -> [f32; 3] {
    [80.0, 80.0, 40.0]
}
fn default_brightness() -> [f32; 2] {
    [2.0, 4.0]
}
fn default_size() -> f32 {
    0.12
}
fn default_max_attempts() -> u32 {
    1000
}

impl Default for StarFieldParams {
    fn default() -> Self {
        Self {
            count: default_count(),
            min_distance: default_min_distance(),
            half_extents: default_half_extents(),
            brightness: default_brightness(),
            size: default_size(),
            max_attempts: default_max_attempts(),
        }
    }
}

impl StarFieldParams {
    #[inline]
    pub fn bounds(&self) -> Aabb {
        let [x, y, z] = self.half_extents;
        Aabb::centered(Vec3::new(x, y, z))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.min_distance.is_finite() && self.min_distance >= 0.0) {
            return Err(ConfigError::InvalidStarField("min distance must be >= 0"));
        }
        if self.half_extents.iter().any(|h| !(h.is_finite() && *h >= 0.0)) {
            return Err(ConfigError::InvalidStarField("half extents must be >= 0"));
        }
        let [lo, hi] = self.brightness;
        if !(lo.is_finite() && hi.is_finite() && lo >= 0.0 && lo <= hi) {
            return Err(ConfigError::InvalidStarField("brightness range must satisfy 0 <= min <= max"));
        }
        if !(self.size.is_finite() && self.size > 0.0) {
            return Err(ConfigError::InvalidStarField("star size must be positive"));
        }
        if self.max_attempts < 1 {
            return Err(ConfigError::InvalidStarField("max attempts must be at least 1"));
        }
        if self.count > 0 && self.min_distance > self.bounds().max_origin_distance() {
            return Err(ConfigError::InvalidStarField("min distance lies outside the sampling volume"));
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BackgroundStar {
    pub index: u32,
    pub position: Vec3,
    pub base_brightness: f32,
    /// Derived from the index, never drawn from the RNG.
    pub twinkle_seed: u32,
    pub size: f32,
}

pub struct StarFieldGenerator {
    params: StarFieldParams,
}

impl StarFieldGenerator {
    pub fn new(params: StarFieldParams) -> Result<Self, ConfigError> {
        params.validate()?;
        Ok(Self { params })
    }

    #[inline]
    pub fn params(&self) -> &StarFieldParams {
        &self.params
    }

    /// Generates the field from the master seed with a fresh ChaCha stream.
    pub fn generate(&self, master_seed: u64) -> Result<Vec<BackgroundStar>, ConfigError> {
        let mut rng = ChaChaRng::seed_from_u64(master_seed ^ STAR_FIELD_SALT);
        self.generate_with(master_seed, &mut rng)
    }

    /// Generates exactly `count` stars drawing placement and brightness from `rng`.
    pub fn generate_with<R: Rng>(
        &self,
        master_seed: u64,
        rng: &mut R,
    ) -> Result<Vec<BackgroundStar>, ConfigError> {
        let p = &self.params;
        let bounds = p.bounds();
        let [lo, hi] = p.brightness;
        let mut stars = Vec::with_capacity(p.count);
        let mut resamples = 0u64;
        for i in 0..p.count {
            let mut attempts = 0u32;
            let position = loop {
                if attempts == p.max_attempts {
                    return Err(ConfigError::PlacementExhausted {
                        index: i,
                        attempts,
                    });
                }
                attempts += 1;
                let candidate = sample_in(&bounds, rng);
                if candidate.length() >= p.min_distance {
                    break candidate;
                }
            };
            resamples += u64::from(attempts - 1);
            let index = i as u32;
            stars.push(BackgroundStar {
                index,
                position,
                base_brightness: rng.random_range(lo..=hi),
                twinkle_seed: derive_seed(master_seed, index),
                size: p.size,
            });
        }
        log::debug!(
            "star field: {} stars, {} resamples (min distance {:.1})",
            stars.len(),
            resamples,
            p.min_distance
        );
        Ok(stars)
    }
}

#[inline]
fn sample_in<R: Rng>(bounds: &Aabb, rng: &mut R) -> Vec3 {
    Vec3::new(
        rng.random_range(bounds.min.x..=bounds.max.x),
        rng.random_range(bounds.min.y..=bounds.max.y),
        rng.random_range(bounds.min.z..=bounds.max.z),
    )
}

/// `count` stars at least `min_distance` from the origin, otherwise default parameters.
pub fn generate(count: usize, min_distance: f32, seed: u64) -> Result<Vec<BackgroundStar>, ConfigError> {
    let params = StarFieldParams {
        count,
        min_distance,
        ..StarFieldParams::default()
    };
    StarFieldGenerator::new(params)?.generate(seed)
}
