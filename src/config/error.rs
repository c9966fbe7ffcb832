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
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid bind address: {0}")]
    InvalidBindAddress(String),

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Upload limit must be greater than zero")]
    InvalidUploadLimit,

    #[error("SMTP host must not be empty")]
    MissingSmtpHost,

    #[error("Invalid mail relay URL")]
    InvalidRelayUrl,

    #[error("JPEG quality must be between 1 and 100")]
    InvalidJpegQuality,

    #[error("Viewport width must be between 320 and 4096 pixels")]
    InvalidViewportWidth,

    #[error("Invalid capture timeout")]
    InvalidCaptureTimeout,

    #[error("Session idle TTL must be greater than zero")]
    InvalidSessionTtl,

    #[error("Session limit must be greater than zero")]
    InvalidSessionLimit,

    #[error("Sweep interval must be between one second and the idle TTL")]
    InvalidSweepInterval,
}
