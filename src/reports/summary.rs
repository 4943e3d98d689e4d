//! Basic report generator for shell output.

use super::{ComplianceReport, ReportError, ReportFormat, ReportGenerator};

/// One line per document: total, required and optional scores.
pub struct BasicReporter;

impl BasicReporter {
    /// Create a new basic reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for BasicReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for BasicReporter {
    fn generate(&self, report: &ComplianceReport) -> Result<String, ReportError> {
        Ok(format!(
            "Score:{:.1} RequiredScore:{:.1} OptionalScore:{:.1} for {}",
            report.score.total, report.score.required, report.score.optional, report.file_name
        ))
    }

    fn generate_all(&self, reports: &[ComplianceReport]) -> Result<String, ReportError> {
        let lines = reports
            .iter()
            .map(|r| self.generate(r))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Basic
    }
}
