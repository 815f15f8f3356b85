//! Centralized error types for the mascot engine.
//!
//! The engine consumes already-valid continuous signals, so the only
//! recoverable failures live at construction time.

/// Main error type for the mascot engine.
///
/// This is the primary error type that should be used in public APIs.
#[derive(thiserror::Error, Debug)]
pub enum RigError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors raised while validating a [`RigConfig`](crate::rig::RigConfig).
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },

    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f32 },

    #[error("viewport must have a positive area, got {width}x{height}")]
    EmptyViewport { width: f32, height: f32 },

    #[error("blink interval bounds are inverted: [{min}, {max}]")]
    InvertedBlinkInterval { min: f32, max: f32 },
}

/// Result type for rig operations.
pub type RigResult<T> = Result<T, RigError>;
