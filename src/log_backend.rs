use std::convert::Infallible;

use orrery_scene::{AnimationPlan, BodyClass, Entity, SampleValue, SceneBackend};
use serde::Serialize;

/// What a build produced, in numbers.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlanSummary {
    pub build: usize,
    pub total_frames: u32,
    pub frame_rate: u32,
    pub bodies: usize,
    pub ringed: usize,
    pub orbit_rings: usize,
    pub stars: usize,
    pub tracks: usize,
    pub keyframes: usize,
    pub camera_start: [f32; 3],
}

/// Backend that writes each plan to the log instead of a scene.
#[derive(Default)]
pub struct LogBackend {
    builds: usize,
    live_tracks: usize,
}

impl LogBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SceneBackend for LogBackend {
    type Handle = PlanSummary;
    type Error = Infallible;

    fn clear(&mut self) -> Result<(), Infallible> {
        if self.live_tracks > 0 {
            log::debug!("clearing {} tracks from build {}", self.live_tracks, self.builds);
        }
        self.live_tracks = 0;
        Ok(())
    }

    fn commit(&mut self, plan: &AnimationPlan) -> Result<PlanSummary, Infallible> {
        self.builds += 1;
        self.live_tracks = plan.tracks.len();
        let s = &plan.settings;
        log::info!(
            "scene: {} frames @ {} fps, {} samples ({}), background {:?}",
            s.total_frames,
            s.frame_rate,
            s.render.samples,
            s.render.engine,
            s.render.background
        );
        for body in &plan.bodies {
            match body.class {
                BodyClass::Star { emission } => {
                    log::info!(" * {} (star, size {}, emission {})", body.name, body.size, emission)
                }
                BodyClass::Planet => log::info!(
                    " * {} r={} speed={} size {}",
                    body.name,
                    body.orbit_radius,
                    body.orbit_speed,
                    body.size
                ),
                BodyClass::RingedPlanet { ring } => log::info!(
                    " * {} r={} speed={} size {} ring {}/{}",
                    body.name,
                    body.orbit_radius,
                    body.orbit_speed,
                    body.size,
                    ring.major_radius,
                    ring.minor_radius
                ),
            }
        }
        for track in &plan.tracks {
            let label = match &track.entity {
                Entity::Body(name) => name.clone(),
                Entity::BackgroundStar(i) => format!("star#{}", i),
                Entity::Camera => "camera".to_string(),
            };
            log::debug!("track {}: {} keys", label, track.samples.len());
        }

        let camera_start = plan
            .track(&Entity::Camera)
            .and_then(|t| t.samples.first())
            .and_then(|k| match k.value {
                SampleValue::Camera(pose) => Some([pose.position.x, pose.position.y, pose.position.z]),
                _ => None,
            })
            .unwrap_or_default();
        Ok(PlanSummary {
            build: self.builds,
            total_frames: s.total_frames,
            frame_rate: s.frame_rate,
            bodies: plan.bodies.len(),
            ringed: plan.bodies.iter().filter(|b| b.ring().is_some()).count(),
            orbit_rings: plan.orbit_rings.len(),
            stars: plan.stars.len(),
            tracks: plan.tracks.len(),
            keyframes: plan.keyframe_count(),
            camera_start,
        })
    }
}
