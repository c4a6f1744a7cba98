use orrery_geom::Vec3;
use orrery_motion::{ConfigError, OrbitClock};
use serde::Deserialize;

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BodyKind {
    Star,
    Planet,
    RingedPlanet,
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
pub struct RingParams {
    #[serde(default = "default_ring_major")]
    pub major_radius: f32,
    #[serde(default = "default_ring_minor")]
    pub minor_radius: f32,
}

fn default_ring_major() -> f32 {
    3.2
}
fn default_ring_minor() -> f32 {
    0.15
}

impl Default for RingParams {
    fn default() -> Self {
        Self {
            major_radius: default_ring_major(),
            minor_radius: default_ring_minor(),
        }
    }
}

fn default_star_emission() -> f32 {
    10.0
}

/// One row of the body table as written in a config file.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct BodyConfig {
    pub name: String,
    pub kind: BodyKind,
    pub size: f32,
    pub color: [f32; 3],
    #[serde(default)]
    pub orbit_radius: f32,
    #[serde(default)]
    pub orbit_speed: f32,
    #[serde(default)]
    pub ring: Option<RingParams>,
    #[serde(default)]
    pub emission: Option<f32>,
}

impl BodyConfig {
    pub fn planet(name: &str, size: f32, color: [f32; 3], orbit_radius: f32, orbit_speed: f32) -> Self {
        Self {
            name: name.into(),
            kind: BodyKind::Planet,
            size,
            color,
            orbit_radius,
            orbit_speed,
            ring: None,
            emission: None,
        }
    }

    pub fn star(name: &str, size: f32, color: [f32; 3]) -> Self {
        Self {
            name: name.into(),
            kind: BodyKind::Star,
            size,
            color,
            orbit_radius: 0.0,
            orbit_speed: 0.0,
            ring: None,
            emission: Some(default_star_emission()),
        }
    }

    pub fn ringed(mut self, ring: RingParams) -> Self {
        self.kind = BodyKind::RingedPlanet;
        self.ring = Some(ring);
        self
    }
}

/// The classic scene: the Sun, nine orbiting bodies, Saturn with rings.
pub fn default_bodies() -> Vec<BodyConfig> {
    vec![
        BodyConfig::star("Sun", 3.0, [1.0, 0.9, 0.2]),
        BodyConfig::planet("Mercury", 0.4, [0.6, 0.6, 0.6], 5.0, 0.9),
        BodyConfig::planet("Venus", 0.9, [0.9, 0.7, 0.3], 7.0, 0.8),
        BodyConfig::planet("Earth", 1.0, [0.2, 0.5, 1.0], 10.0, 0.7),
        BodyConfig::planet("Mars", 0.5, [0.9, 0.3, 0.2], 13.0, 0.65),
        BodyConfig::planet("Jupiter", 2.2, [0.8, 0.6, 0.4], 18.0, 0.55),
        BodyConfig::planet("Saturn", 1.9, [0.9, 0.8, 0.5], 24.0, 0.5).ringed(RingParams::default()),
        BodyConfig::planet("Uranus", 1.4, [0.4, 0.8, 0.9], 30.0, 0.45),
        BodyConfig::planet("Neptune", 1.4, [0.3, 0.4, 0.9], 36.0, 0.4),
        BodyConfig::planet("Pluto", 0.3, [0.7, 0.6, 0.5], 42.0, 0.35),
    ]
}

/// Kind-specific payload; a ring exists only on a ringed planet.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BodyClass {
    Star { emission: f32 },
    Planet,
    RingedPlanet { ring: RingParams },
}

#[derive(Clone, Debug, PartialEq)]
pub struct CelestialBody {
    pub name: String,
    pub class: BodyClass,
    pub size: f32,
    pub color: [f32; 3],
    pub orbit_radius: f32,
    pub orbit_speed: f32,
}

impl CelestialBody {
    pub fn from_config(cfg: &BodyConfig) -> Result<Self, ConfigError> {
        let invalid = |reason: &'static str| ConfigError::InvalidBody {
            name: cfg.name.clone(),
            reason,
        };
        if cfg.name.trim().is_empty() {
            return Err(invalid("name must not be empty"));
        }
        if !(cfg.size.is_finite() && cfg.size > 0.0) {
            return Err(invalid("size must be positive"));
        }
        if cfg.color.iter().any(|c| !(0.0..=1.0).contains(c)) {
            return Err(invalid("color channels must lie in [0, 1]"));
        }
        if !(cfg.orbit_radius.is_finite() && cfg.orbit_radius >= 0.0) {
            return Err(invalid("orbit radius must be >= 0"));
        }
        if !cfg.orbit_speed.is_finite() {
            return Err(invalid("orbit speed must be finite"));
        }
        match cfg.kind {
            BodyKind::Star if cfg.orbit_radius != 0.0 => {
                return Err(invalid("the central star must have orbit radius 0"));
            }
            BodyKind::Planet | BodyKind::RingedPlanet if cfg.orbit_radius == 0.0 => {
                return Err(invalid("only the central star may have orbit radius 0"));
            }
            _ => {}
        }
        if cfg.ring.is_some() && cfg.kind != BodyKind::RingedPlanet {
            return Err(invalid("ring parameters require kind ringed_planet"));
        }
        if cfg.emission.is_some() && cfg.kind != BodyKind::Star {
            return Err(invalid("emission applies only to the central star"));
        }

        let class = match cfg.kind {
            BodyKind::Star => {
                let emission = cfg.emission.unwrap_or_else(default_star_emission);
                if !(emission.is_finite() && emission >= 0.0) {
                    return Err(invalid("emission must be >= 0"));
                }
                BodyClass::Star { emission }
            }
            BodyKind::Planet => BodyClass::Planet,
            BodyKind::RingedPlanet => {
                let ring = cfg.ring.unwrap_or_default();
                if !(ring.minor_radius > 0.0 && ring.major_radius > ring.minor_radius) {
                    return Err(invalid("ring needs 0 < minor radius < major radius"));
                }
                BodyClass::RingedPlanet { ring }
            }
        };
        Ok(Self {
            name: cfg.name.clone(),
            class,
            size: cfg.size,
            color: cfg.color,
            orbit_radius: cfg.orbit_radius,
            orbit_speed: cfg.orbit_speed,
        })
    }

    #[inline]
    pub fn kind(&self) -> BodyKind {
        match self.class {
            BodyClass::Star { .. } => BodyKind::Star,
            BodyClass::Planet => BodyKind::Planet,
            BodyClass::RingedPlanet { .. } => BodyKind::RingedPlanet,
        }
    }

    #[inline]
    pub fn ring(&self) -> Option<RingParams> {
        match self.class {
            BodyClass::RingedPlanet { ring } => Some(ring),
            _ => None,
        }
    }

    #[inline]
    pub fn is_central(&self) -> bool {
        matches!(self.class, BodyClass::Star { .. })
    }

    /// Absolute position at `frame`; the same rule for every kind.
    #[inline]
    pub fn position_at(&self, clock: &OrbitClock, frame: u32) -> Vec3 {
        clock.position(self.orbit_radius, self.orbit_speed, frame)
    }
}
