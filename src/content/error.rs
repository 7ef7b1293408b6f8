//! Configuration errors raised while loading and validating content.

use thiserror::Error;

/// A configuration problem detected at startup.
///
/// These are fatal to the component being initialised and are never produced
/// once the simulation is ticking.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {file}: {source}")]
    Io {
        file: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {file}: {message}")]
    Parse { file: String, message: String },

    #[error("dash curve {0}")]
    Curve(&'static str),

    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },

    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f32 },

    #[error("{field} must be finite")]
    NotFinite { field: &'static str },

    #[error("{field} = {value} lies outside [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },

    #[error("region '{region}' references unknown archetype '{archetype}'")]
    UnknownArchetype { region: String, archetype: String },

    #[error("region '{region}' references unknown boundary {index}")]
    UnknownBoundary { region: String, index: usize },

    #[error("region '{region}' has an inverted offset range ({min}, {max})")]
    OffsetRange { region: String, min: f32, max: f32 },

    #[error("boundary {index} must lie further along the rail than boundary {previous}")]
    BoundaryOrder { index: usize, previous: usize },
}

/// Reject non-finite and non-positive values.
pub(crate) fn require_positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::NotFinite { field });
    }
    if value <= 0.0 {
        return Err(ConfigError::NonPositive { field, value });
    }
    Ok(())
}

/// Reject non-finite and negative values.
pub(crate) fn require_non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::NotFinite { field });
    }
    if value < 0.0 {
        return Err(ConfigError::Negative { field, value });
    }
    Ok(())
}
