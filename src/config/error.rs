//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Typing speed must be greater than zero")]
    InvalidTypingSpeed,

    #[error("Typing jitter must be at most 50 percent")]
    JitterTooLarge,

    #[error("Dwell tick interval must be greater than zero")]
    InvalidDwellTick,

    #[error("Inactivity cutoff must be at least one dwell tick")]
    InvalidInactivityCutoff,

    #[error("Demo step delay must be greater than zero")]
    InvalidDemoDelay,

    #[error("Mock session count exceeds maximum allowed (1000)")]
    TooManyMockSessions,
}
