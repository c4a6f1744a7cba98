use orrery_geom::Vec3;
use orrery_motion::{CameraPose, CameraRig};
use orrery_stars::BackgroundStar;

use crate::body::CelestialBody;
use crate::config::RenderSettings;

/// What a track animates.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Entity {
    Body(String),
    BackgroundStar(u32),
    Camera,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SampleValue {
    Position(Vec3),
    Camera(CameraPose),
    Emission(f32),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KeyframeSample {
    pub frame: u32,
    pub value: SampleValue,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Track {
    pub entity: Entity,
    pub samples: Vec<KeyframeSample>,
}

/// Static circle drawn under an orbiting body.
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitRing {
    pub body: String,
    pub radius: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlanSettings {
    pub total_frames: u32,
    pub frame_rate: u32,
    pub render: RenderSettings,
}

/// A complete build: descriptors plus one ordered track per animated entity.
///
/// Tracks come in a fixed order (orbiting bodies in config order, background
/// stars by index, then the camera) so equal inputs give equal plans.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationPlan {
    pub settings: PlanSettings,
    pub bodies: Vec<CelestialBody>,
    pub orbit_rings: Vec<OrbitRing>,
    pub stars: Vec<BackgroundStar>,
    pub camera: CameraRig,
    pub tracks: Vec<Track>,
}

impl AnimationPlan {
    pub fn track(&self, entity: &Entity) -> Option<&Track> {
        self.tracks.iter().find(|t| &t.entity == entity)
    }

    pub fn keyframe_count(&self) -> usize {
        self.tracks.iter().map(|t| t.samples.len()).sum()
    }

    pub fn central_body(&self) -> Option<&CelestialBody> {
        self.bodies.iter().find(|b| b.is_central())
    }
}
