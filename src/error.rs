//! Unified error types for sbom-compliance.
//!
//! Evaluation itself never fails on missing data; the errors here cover the
//! edges around it: loading documents, wiring frameworks, rendering reports
//! and reading configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for sbom-compliance operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SbomComplianceError {
    /// Errors while loading a normalized document
    #[error("Failed to load SBOM: {context}")]
    Load {
        context: String,
        #[source]
        source: LoadErrorKind,
    },

    /// Framework wiring errors surfaced by the engine
    #[error("Compliance evaluation failed: {context}")]
    Compliance {
        context: String,
        #[source]
        source: ComplianceError,
    },

    /// Errors during report generation
    #[error("Report generation failed: {context}")]
    Report {
        context: String,
        #[source]
        source: ReportErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Framework wiring defects.
///
/// These indicate that a framework's criteria and its category table have
/// drifted apart, or that a caller asked for a framework that does not exist.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ComplianceError {
    #[error("record references category {key} which framework '{framework}' does not declare")]
    UnknownCategory { framework: String, key: u8 },

    #[error("unknown framework '{0}' (expected one of: ntia, fsct, custom)")]
    UnknownFramework(String),
}

/// Specific load error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum LoadErrorKind {
    #[error("Unsupported document extension: {0} (expected .json, .yaml or .yml)")]
    UnsupportedExtension(String),

    #[error("Invalid JSON structure: {0}")]
    InvalidJson(String),

    #[error("Invalid YAML structure: {0}")]
    InvalidYaml(String),

    #[error("Document is empty")]
    Empty,
}

/// Specific report error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ReportErrorKind {
    #[error("JSON serialization failed: {0}")]
    JsonSerializationError(String),

    #[error("Output format not supported for this operation: {0}")]
    UnsupportedFormat(String),
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for sbom-compliance operations
pub type Result<T> = std::result::Result<T, SbomComplianceError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl SbomComplianceError {
    /// Create a load error with context
    pub fn load(context: impl Into<String>, source: LoadErrorKind) -> Self {
        Self::Load {
            context: context.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a report error
    pub fn report(context: impl Into<String>, source: ReportErrorKind) -> Self {
        Self::Report {
            context: context.into(),
            source,
        }
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for SbomComplianceError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for SbomComplianceError {
    fn from(err: serde_json::Error) -> Self {
        Self::load(
            "JSON deserialization",
            LoadErrorKind::InvalidJson(err.to_string()),
        )
    }
}

impl From<serde_yaml::Error> for SbomComplianceError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::load(
            "YAML deserialization",
            LoadErrorKind::InvalidYaml(err.to_string()),
        )
    }
}

impl From<ComplianceError> for SbomComplianceError {
    fn from(err: ComplianceError) -> Self {
        Self::Compliance {
            context: String::new(),
            source: err,
        }
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// The context string is prepended to any context the error already carries,
/// so a failure reads as a path through the call stack.
///
/// ```ignore
/// use sbom_compliance::error::ErrorContext;
///
/// let content = std::fs::read_to_string(path)
///     .with_context(|| format!("reading {}", path.display()))?;
/// ```
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, evaluated only on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<SbomComplianceError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

/// Add context to an error, chaining with any existing context.
fn add_context_to_error(err: SbomComplianceError, new_ctx: &str) -> SbomComplianceError {
    use SbomComplianceError as E;
    match err {
        E::Load { context, source } => E::Load {
            context: chain_context(new_ctx, &context),
            source,
        },
        E::Compliance { context, source } => E::Compliance {
            context: chain_context(new_ctx, &context),
            source,
        },
        E::Report { context, source } => E::Report {
            context: chain_context(new_ctx, &context),
            source,
        },
        E::Io {
            path,
            message,
            source,
        } => E::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        E::Config(msg) => E::Config(chain_context(new_ctx, &msg)),
        E::Validation(msg) => E::Validation(chain_context(new_ctx, &msg)),
    }
}

/// Chain two context strings: "`new`: `existing`", or just `new` when
/// nothing was there before.
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}

/// Extension trait for Option types to convert to errors with context.
pub trait OptionContext<T> {
    /// Convert None to an error with the given context.
    fn context_none(self, context: impl Into<String>) -> Result<T>;

    /// Convert None to an error with context from a closure.
    fn with_context_none<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T> OptionContext<T> for Option<T> {
    fn context_none(self, context: impl Into<String>) -> Result<T> {
        self.ok_or_else(|| SbomComplianceError::Validation(context.into()))
    }

    fn with_context_none<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.ok_or_else(|| SbomComplianceError::Validation(f().into()))
    }
}
