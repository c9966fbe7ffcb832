//! Export configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Headless capture settings for PDF export
#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    /// Browser binary; searched on PATH when unset
    pub chrome_executable: Option<PathBuf>,

    /// JPEG quality of the captured page (1-100)
    #[serde(default = "default_jpeg_quality")]
    pub jpeg_quality: u8,

    /// Viewport width in CSS pixels
    #[serde(default = "default_viewport_width")]
    pub viewport_width: u32,

    /// Upper bound for one capture in seconds
    #[serde(default = "default_capture_timeout")]
    pub capture_timeout_secs: u64,
}

impl ExportConfig {
    /// Validate export configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(1..=100).contains(&self.jpeg_quality) {
            return Err(ValidationError::InvalidJpegQuality);
        }
        if !(320..=4096).contains(&self.viewport_width) {
            return Err(ValidationError::InvalidViewportWidth);
        }
        if self.capture_timeout_secs == 0 || self.capture_timeout_secs > 300 {
            return Err(ValidationError::InvalidCaptureTimeout);
        }
        Ok(())
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            chrome_executable: None,
            jpeg_quality: default_jpeg_quality(),
            viewport_width: default_viewport_width(),
            capture_timeout_secs: default_capture_timeout(),
        }
    }
}

fn default_jpeg_quality() -> u8 {
    95
}

fn default_viewport_width() -> u32 {
    1024
}

fn default_capture_timeout() -> u64 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_config_defaults() {
        let config = ExportConfig::default();
        assert_eq!(config.jpeg_quality, 95);
        assert_eq!(config.viewport_width, 1024);
        assert_eq!(config.capture_timeout_secs, 30);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_quality_range() {
        let config = ExportConfig {
            jpeg_quality: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = ExportConfig {
            jpeg_quality: 101,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_viewport_width() {
        let config = ExportConfig {
            viewport_width: 100,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_capture_timeout() {
        let config = ExportConfig {
            capture_timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
