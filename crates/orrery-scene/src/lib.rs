//! Scene composition: body table, config loading, animation plan and backend seam.
#![forbid(unsafe_code)]

pub mod backend;
pub mod body;
pub mod composer;
pub mod config;
pub mod plan;

pub use backend::{RecordingBackend, SceneBackend};
pub use body::{BodyClass, BodyConfig, BodyKind, CelestialBody, RingParams, default_bodies};
pub use composer::{BuildError, SceneComposer};
pub use config::{RenderSettings, SceneConfig};
pub use plan::{AnimationPlan, Entity, KeyframeSample, OrbitRing, PlanSettings, SampleValue, Track};
