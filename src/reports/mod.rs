//! Report generation for compliance results.
//!
//! This module renders an evaluated document in three shapes:
//! - JSON: Structured data for programmatic integration
//! - Detailed: Aligned per-element table for terminals
//! - Basic: One line per document, friendly to shell pipelines

mod json;
mod summary;
mod table;
mod types;

pub use json::JsonReporter;
pub use summary::BasicReporter;
pub use table::DetailedReporter;
pub use types::{ComplianceReport, ReportFormat};

use std::io::Write;
use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Format error: {0}")]
    FormatError(#[from] std::fmt::Error),
}

impl From<ReportError> for crate::error::SbomComplianceError {
    fn from(err: ReportError) -> Self {
        use crate::error::ReportErrorKind;
        match err {
            ReportError::IoError(source) => Self::from(source),
            ReportError::SerializationError(msg) => {
                Self::report("rendering", ReportErrorKind::JsonSerializationError(msg))
            }
            ReportError::FormatError(e) => {
                Self::report("rendering", ReportErrorKind::UnsupportedFormat(e.to_string()))
            }
        }
    }
}

/// Trait for report generators
pub trait ReportGenerator: Send + Sync {
    /// Render one evaluated document
    fn generate(&self, report: &ComplianceReport) -> Result<String, ReportError>;

    /// Render several documents into one output.
    ///
    /// Defaults to rendering each report and separating them with a blank
    /// line; formats with a document-level envelope override this.
    fn generate_all(&self, reports: &[ComplianceReport]) -> Result<String, ReportError> {
        let rendered = reports
            .iter()
            .map(|r| self.generate(r))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rendered.join("\n\n"))
    }

    /// Write reports to a writer
    fn write_reports(
        &self,
        reports: &[ComplianceReport],
        writer: &mut dyn Write,
    ) -> Result<(), ReportError> {
        let output = self.generate_all(reports)?;
        writer.write_all(output.as_bytes())?;
        writer.write_all(b"\n")?;
        Ok(())
    }

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Create a report generator for the given format
#[must_use]
pub fn create_reporter(format: ReportFormat) -> Box<dyn ReportGenerator> {
    create_reporter_with_options(format, true)
}

/// Create a report generator with color control
#[must_use]
pub fn create_reporter_with_options(
    format: ReportFormat,
    use_color: bool,
) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Json => Box::new(JsonReporter::new()),
        ReportFormat::Detailed => {
            if use_color {
                Box::new(DetailedReporter::new())
            } else {
                Box::new(DetailedReporter::new().no_color())
            }
        }
        ReportFormat::Basic => Box::new(BasicReporter::new()),
    }
}

/// Apply ANSI color formatting if colored output is enabled.
pub(crate) fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}
