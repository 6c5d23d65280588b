//! Error types for configuring a run.
//!
//! The tick itself is infallible; everything that can go wrong is caught
//! when a [`Tuning`](crate::Tuning) is validated.

use thiserror::Error;

/// Configuration rejected before a simulation could be built.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Viewport width/height must be positive and finite
    #[error("invalid viewport {width}x{height}: dimensions must be positive and finite")]
    InvalidViewport { width: f32, height: f32 },

    /// Ground line must sit inside the viewport
    #[error("ground margin {margin} must be within [0, {height})")]
    InvalidGroundMargin { margin: f32, height: f32 },

    /// Player does not fit between the left edge and the right edge / ground
    #[error("player {width}x{height} does not fit in the play area")]
    PlayerTooLarge { width: f32, height: f32 },

    /// A random range has min > max or a non-finite bound
    #[error("invalid range for {name}: [{min}, {max}]")]
    InvalidRange {
        name: &'static str,
        min: f32,
        max: f32,
    },

    /// A value that must be strictly positive was not
    #[error("{name} must be positive, got {value}")]
    NotPositive { name: &'static str, value: f32 },

    /// A value that may be zero but not negative or non-finite
    #[error("{name} must be finite and non-negative, got {value}")]
    Negative { name: &'static str, value: f32 },

    /// A chance outside [0, 1]
    #[error("{name} must be a probability in [0, 1], got {value}")]
    InvalidProbability { name: &'static str, value: f32 },

    /// JSON tuning file could not be parsed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for configuration.
pub type Result<T> = std::result::Result<T, ConfigError>;
