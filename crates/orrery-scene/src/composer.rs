use std::fmt;

use hashbrown::HashSet;
use orrery_motion::{Cadence, CameraPlanner, ConfigError, TwinkleGenerator};
use orrery_stars::{BackgroundStar, StarFieldGenerator};

use crate::backend::SceneBackend;
use crate::body::CelestialBody;
use crate::config::SceneConfig;
use crate::plan::{
    AnimationPlan, Entity, KeyframeSample, OrbitRing, PlanSettings, SampleValue, Track,
};

/// Failure of [`SceneComposer::build_into`]. Backend errors pass through as-is.
#[derive(Debug)]
pub enum BuildError<E> {
    Config(ConfigError),
    Backend(E),
}

impl<E: fmt::Display> fmt::Display for BuildError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::Config(e) => write!(f, "configuration error: {}", e),
            BuildError::Backend(e) => write!(f, "backend error: {}", e),
        }
    }
}

impl<E: std::error::Error> std::error::Error for BuildError<E> {}

impl<E> From<ConfigError> for BuildError<E> {
    fn from(e: ConfigError) -> Self {
        BuildError::Config(e)
    }
}

/// Validates a [`SceneConfig`] and samples every animated entity into an
/// [`AnimationPlan`].
pub struct SceneComposer {
    config: SceneConfig,
}

impl SceneComposer {
    pub fn new(config: SceneConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// Checks every invariant and returns the validated bodies.
    ///
    /// Nothing is sampled before this succeeds.
    pub fn validate(&self) -> Result<Vec<CelestialBody>, ConfigError> {
        let cfg = &self.config;
        cfg.timeline.validate()?;
        cfg.camera.validate()?;
        cfg.twinkle.validate()?;
        cfg.stars.validate()?;

        let mut seen: HashSet<&str> = HashSet::with_capacity(cfg.bodies.len());
        let mut bodies = Vec::with_capacity(cfg.bodies.len());
        for b in &cfg.bodies {
            if !seen.insert(b.name.as_str()) {
                return Err(ConfigError::DuplicateBody(b.name.clone()));
            }
            bodies.push(CelestialBody::from_config(b)?);
        }
        let stars = bodies.iter().filter(|b| b.is_central()).count();
        if stars != 1 {
            return Err(ConfigError::CentralStarCount(stars));
        }
        Ok(bodies)
    }

    pub fn build(&self) -> Result<AnimationPlan, ConfigError> {
        let cfg = &self.config;
        let bodies = self.validate()?;
        let timeline = &cfg.timeline;
        let clock = timeline.clock();
        let total = timeline.total_frames;

        // Everything that can fail is resolved up front.
        let camera = CameraPlanner::new(cfg.camera.clone(), total, clock)?;
        let orbit_frames = timeline.frames(Cadence::Orbit)?;
        let camera_frames = timeline.frames(Cadence::Camera)?;
        let twinkle_frames = timeline.frames(Cadence::Twinkle)?;
        let stars = StarFieldGenerator::new(cfg.stars.clone())?.generate(cfg.master_seed)?;
        let twinkle = TwinkleGenerator::new(&cfg.twinkle);

        let mut tracks = Vec::with_capacity(bodies.len() + stars.len());
        let mut orbit_rings = Vec::new();
        for body in bodies.iter().filter(|b| !b.is_central()) {
            orbit_rings.push(OrbitRing {
                body: body.name.clone(),
                radius: body.orbit_radius,
            });
            let samples = orbit_frames
                .iter()
                .map(|&frame| KeyframeSample {
                    frame,
                    value: SampleValue::Position(body.position_at(&clock, frame)),
                })
                .collect();
            tracks.push(Track {
                entity: Entity::Body(body.name.clone()),
                samples,
            });
            log::debug!(
                "body {}: r={:.2} speed={:.2}, {} keys",
                body.name,
                body.orbit_radius,
                body.orbit_speed,
                orbit_frames.len()
            );
        }

        for star in &stars {
            tracks.push(twinkle_track(star, &twinkle, &twinkle_frames, total));
        }

        let samples = camera_frames
            .iter()
            .map(|&frame| KeyframeSample {
                frame,
                value: SampleValue::Camera(camera.pose(frame)),
            })
            .collect();
        tracks.push(Track {
            entity: Entity::Camera,
            samples,
        });

        let plan = AnimationPlan {
            settings: PlanSettings {
                total_frames: total,
                frame_rate: timeline.frame_rate,
                render: cfg.render.clone(),
            },
            bodies,
            orbit_rings,
            stars,
            camera: cfg.camera.clone(),
            tracks,
        };
        log::info!(
            "built plan: {} bodies, {} stars, {} tracks, {} keyframes over {} frames",
            plan.bodies.len(),
            plan.stars.len(),
            plan.tracks.len(),
            plan.keyframe_count(),
            total
        );
        Ok(plan)
    }

    /// Builds the whole plan, then hands it to `backend` in one call.
    pub fn build_into<B: SceneBackend>(
        &self,
        backend: &mut B,
    ) -> Result<B::Handle, BuildError<B::Error>> {
        let plan = self.build()?;
        backend.materialize(&plan).map_err(BuildError::Backend)
    }
}

// Twinkle is sampled on the folded frame so the last key repeats the first.
fn twinkle_track(
    star: &BackgroundStar,
    twinkle: &TwinkleGenerator,
    frames: &[u32],
    total_frames: u32,
) -> Track {
    let samples = frames
        .iter()
        .map(|&frame| KeyframeSample {
            frame,
            value: SampleValue::Emission(twinkle.emission(
                star.base_brightness,
                star.twinkle_seed,
                frame % total_frames,
            )),
        })
        .collect();
    Track {
        entity: Entity::BackgroundStar(star.index),
        samples,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::RecordingBackend;
    use crate::body::BodyConfig;
    use orrery_geom::Vec3;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn default_scene_builds() {
        let plan = SceneComposer::new(SceneConfig::default()).build().unwrap();
        assert_eq!(plan.bodies.len(), 10);
        assert_eq!(plan.stars.len(), 20);
        assert_eq!(plan.orbit_rings.len(), 9);
        // 9 orbiting bodies, 20 stars, one camera
        assert_eq!(plan.tracks.len(), 30);
        assert_eq!(plan.tracks.last().unwrap().entity, Entity::Camera);
        let earth = plan.track(&Entity::Body("Earth".into())).unwrap();
        assert_eq!(earth.samples.len(), 31);
        assert_eq!(earth.samples[0].frame, 0);
        match earth.samples[0].value {
            SampleValue::Position(p) => assert!(approx(p, Vec3::new(10.0, 0.0, 0.0))),
            other => panic!("unexpected sample {:?}", other),
        }
        assert!(plan.track(&Entity::Body("Sun".into())).is_none());
    }

    #[test]
    fn zero_frames_fail_before_sampling() {
        let mut cfg = SceneConfig::default();
        cfg.timeline.total_frames = 0;
        let mut backend = RecordingBackend::new();
        let err = SceneComposer::new(cfg).build_into(&mut backend).unwrap_err();
        assert!(matches!(err, BuildError::Config(ConfigError::InvalidTimeline(_))));
        assert_eq!(backend.clears(), 0);
        assert!(backend.plan().is_none());
    }

    #[test]
    fn duplicate_names_rejected() {
        let mut cfg = SceneConfig::default();
        cfg.bodies
            .push(BodyConfig::planet("Earth", 1.0, [0.2, 0.5, 1.0], 50.0, 0.1));
        assert_eq!(
            SceneComposer::new(cfg).build(),
            Err(ConfigError::DuplicateBody("Earth".into()))
        );
    }

    #[test]
    fn exactly_one_star() {
        let mut cfg = SceneConfig::default();
        cfg.bodies.retain(|b| b.name != "Sun");
        assert_eq!(
            SceneComposer::new(cfg).build(),
            Err(ConfigError::CentralStarCount(0))
        );

        let mut cfg = SceneConfig::default();
        cfg.bodies.push(BodyConfig::star("Sirius", 2.0, [1.0, 1.0, 1.0]));
        assert_eq!(
            SceneComposer::new(cfg).build(),
            Err(ConfigError::CentralStarCount(2))
        );
    }

    #[test]
    fn loop_boundary_keys_match() {
        let plan = SceneComposer::new(SceneConfig::default()).build().unwrap();
        let cam = plan.track(&Entity::Camera).unwrap();
        let (first, last) = (cam.samples[0], cam.samples[cam.samples.len() - 1]);
        assert_eq!(last.frame, 150);
        assert_eq!(first.value, last.value);

        let star = plan.track(&Entity::BackgroundStar(3)).unwrap();
        assert_eq!(star.samples.last().unwrap().frame, 150);
        assert_eq!(star.samples[0].value, star.samples.last().unwrap().value);
    }

    #[test]
    fn materialize_clears_then_commits() {
        let composer = SceneComposer::new(SceneConfig::default());
        let mut backend = RecordingBackend::new();
        assert_eq!(composer.build_into(&mut backend).unwrap(), 1);
        assert_eq!(composer.build_into(&mut backend).unwrap(), 2);
        assert_eq!(backend.clears(), 2);
        assert_eq!(backend.plan(), Some(&composer.build().unwrap()));
    }

    #[test]
    fn unreachable_min_distance_is_config_error() {
        let mut cfg = SceneConfig::default();
        cfg.stars.min_distance = 500.0;
        assert!(matches!(
            SceneComposer::new(cfg).build(),
            Err(ConfigError::InvalidStarField(_))
        ));
    }
}
