//! Configuration module for sbom-compliance.
//!
//! This module provides:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - YAML config file loading and discovery
//! - CLI argument merging
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use sbom_compliance::config::{AppConfig, load_or_default};
//!
//! let (config, loaded_from) = load_or_default(None);
//! let config = AppConfig::builder()
//!     .framework(FrameworkKind::Ntia)
//!     .min_score(Some(70.0))
//!     .build();
//! ```
//!
//! # Configuration File
//!
//! Place a `.sbom-compliance.yaml` file in your project root or
//! `~/.config/sbom-compliance/`:
//!
//! ```yaml
//! framework: fsct
//! output:
//!   format: json
//! behavior:
//!   min_score: 70
//! ```

pub mod file;
mod types;
mod validation;

pub use types::{AppConfig, AppConfigBuilder, BehaviorConfig, OutputConfig};
pub use validation::{ConfigError, Validatable};

pub use file::{
    ConfigFileError, discover_config_file, generate_example_config, load_config_file,
    load_or_default,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// This schema documents all configuration options that can be set in
/// `.sbom-compliance.yaml` config files. Editors can use it for validation
/// and autocompletion.
pub fn generate_json_schema() -> Result<String, serde_json::Error> {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_lists_top_level_sections() {
        let schema = generate_json_schema().unwrap();
        assert!(schema.contains("\"framework\""));
        assert!(schema.contains("\"min_score\""));
    }
}
