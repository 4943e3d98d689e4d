//! Configuration validation for sbom-compliance.
//!
//! Provides validation traits and implementations for all configuration types.

use super::types::{AppConfig, BehaviorConfig, OutputConfig};
use crate::compliance::MAX_SCORE;
use crate::reports::ReportFormat;

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.output.validate());
        errors.extend(self.behavior.validate());
        errors
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if let Some(file) = &self.file {
            if file.as_os_str().is_empty() {
                errors.push(ConfigError {
                    field: "output.file".to_string(),
                    message: "Output file path must not be empty".to_string(),
                });
            } else if file.is_dir() {
                errors.push(ConfigError {
                    field: "output.file".to_string(),
                    message: format!("{} is a directory", file.display()),
                });
            }
        }
        if self.no_color && self.format == ReportFormat::Json {
            tracing::debug!("output.no_color has no effect on JSON output");
        }
        errors
    }
}

impl Validatable for BehaviorConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if let Some(min) = self.min_score
            && !(0.0..=MAX_SCORE).contains(&min)
        {
            errors.push(ConfigError {
                field: "behavior.min_score".to_string(),
                message: format!("Minimum score must be between 0 and {MAX_SCORE}, got {min}"),
            });
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_config_is_valid() {
        assert!(AppConfig::default().is_valid());
    }

    #[test]
    fn test_min_score_range() {
        let config = AppConfig::builder().min_score(Some(120.0)).build();
        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "behavior.min_score");

        let config = AppConfig::builder().min_score(Some(f64::NAN)).build();
        assert!(!config.is_valid());
        assert!(AppConfig::builder().min_score(Some(75.0)).build().is_valid());
    }

    #[test]
    fn test_empty_output_file_rejected() {
        let config = AppConfig::builder()
            .output_file(Some(PathBuf::new()))
            .build();
        assert!(!config.is_valid());
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError {
            field: "behavior.min_score".to_string(),
            message: "out of range".to_string(),
        };
        assert_eq!(err.to_string(), "behavior.min_score: out of range");
    }
}
