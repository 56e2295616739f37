use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("cannot serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("stiffness must be positive and below {limit} for the given damping, got {value}")]
    InvalidStiffness { value: f32, limit: f32 },
    #[error("damping must be in (0, 1), got {0}")]
    InvalidDamping(f32),
    #[error("{name} must be at least 1")]
    InvalidSegments { name: &'static str },
    #[error("{name} must be finite and not negative, got {value}")]
    InvalidLength { name: &'static str, value: f32 },
    #[error("window size must be positive, got {width}x{height}")]
    InvalidWindowSize { width: f32, height: f32 },
    #[error("invalid colour {0:?}, expected \"#rrggbb\"")]
    InvalidColor(String),
    #[error("unknown preset {0:?}, expected \"vanilla\" or \"component\"")]
    UnknownPreset(String),
}
