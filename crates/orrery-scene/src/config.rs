use serde::Deserialize;
use std::error::Error;
use std::fs;
use std::path::Path;

use orrery_motion::{CameraRig, Timeline, TwinkleParams};
use orrery_stars::StarFieldParams;

use crate::body::{BodyConfig, default_bodies};

/// Everything a build needs. Unset sections fall back to the classic scene.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct SceneConfig {
    #[serde(default = "default_master_seed")]
    pub master_seed: u64,
    #[serde(default)]
    pub timeline: Timeline,
    #[serde(default)]
    pub camera: CameraRig,
    #[serde(default)]
    pub stars: StarFieldParams,
    #[serde(default)]
    pub twinkle: TwinkleParams,
    #[serde(default)]
    pub render: RenderSettings,
    #[serde(default = "default_bodies")]
    pub bodies: Vec<BodyConfig>,
}

fn default_master_seed() -> u64 {
    0x0A11_CE5E
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            master_seed: default_master_seed(),
            timeline: Timeline::default(),
            camera: CameraRig::default(),
            stars: StarFieldParams::default(),
            twinkle: TwinkleParams::default(),
            render: RenderSettings::default(),
            bodies: default_bodies(),
        }
    }
}

impl SceneConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, Box<dyn Error>> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: &Path) -> Result<Self, Box<dyn Error>> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }
}

/// Backend-facing scene settings carried through the plan untouched.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct RenderSettings {
    #[serde(default = "default_engine")]
    pub engine: String,
    #[serde(default = "default_samples")]
    pub samples: u32,
    #[serde(default = "default_background")]
    pub background: [f32; 3],
    #[serde(default = "default_orbit_ring_bevel")]
    pub orbit_ring_bevel: f32,
    #[serde(default = "default_orbit_ring_color")]
    pub orbit_ring_color: [f32; 3],
    #[serde(default = "default_orbit_ring_emission")]
    pub orbit_ring_emission: f32,
}

fn default_engine() -> String {
    "cycles".into()
}
fn default_samples() -> u32 {
    64
}
fn default_background() -> [f32; 3] {
    [0.0, 0.0, 0.03]
}
fn default_orbit_ring_bevel() -> f32 {
    0.08
}
fn default_orbit_ring_color() -> [f32; 3] {
    [0.3, 0.6, 1.0]
}
fn default_orbit_ring_emission() -> f32 {
    0.4
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            engine: default_engine(),
            samples: default_samples(),
            background: default_background(),
            orbit_ring_bevel: default_orbit_ring_bevel(),
            orbit_ring_color: default_orbit_ring_color(),
            orbit_ring_emission: default_orbit_ring_emission(),
        }
    }
}
