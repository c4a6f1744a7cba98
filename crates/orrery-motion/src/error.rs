use std::fmt;

/// Raised for any configuration that cannot produce a consistent animation.
///
/// Every check happens before sampling starts, so a `ConfigError` always means
/// nothing was handed to a backend.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Frame count, frame rate or keyframe interval below 1.
    InvalidTimeline(&'static str),
    /// Camera distance/height not positive, or tilt outside `[0, 90]` degrees.
    InvalidCamera(&'static str),
    /// A body descriptor that breaks the kind/radius/ring invariants.
    InvalidBody { name: String, reason: &'static str },
    DuplicateBody(String),
    /// The system needs exactly one central star; carries the count found.
    CentralStarCount(usize),
    /// Star field parameters that are out of range.
    InvalidStarField(&'static str),
    /// Rejection sampling ran out of attempts for the given star index.
    PlacementExhausted { index: usize, attempts: u32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTimeline(msg) => write!(f, "invalid timeline: {}", msg),
            ConfigError::InvalidCamera(msg) => write!(f, "invalid camera: {}", msg),
            ConfigError::InvalidBody { name, reason } => {
                write!(f, "invalid body '{}': {}", name, reason)
            }
            ConfigError::DuplicateBody(name) => write!(f, "duplicate body name '{}'", name),
            ConfigError::CentralStarCount(n) => {
                write!(f, "expected exactly one central star, found {}", n)
            }
            ConfigError::InvalidStarField(msg) => write!(f, "invalid star field: {}", msg),
            ConfigError::PlacementExhausted { index, attempts } => write!(
                f,
                "star {} not placed after {} attempts; min distance unreachable",
                index, attempts
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
