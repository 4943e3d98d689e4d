//! JSON report generator.

use super::{ComplianceReport, ReportError, ReportFormat, ReportGenerator};
use crate::compliance::{Maturity, Section};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Version of the report layout, bumped on incompatible changes.
pub const ENGINE_VERSION: &str = "1";

/// JSON report generator
pub struct JsonReporter {
    /// Pretty print output
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    fn serialize<T: Serialize>(&self, value: &T) -> Result<String, ReportError> {
        let result = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        result.map_err(|e| ReportError::SerializationError(e.to_string()))
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for JsonReporter {
    fn generate(&self, report: &ComplianceReport) -> Result<String, ReportError> {
        self.serialize(&JsonComplianceReport::from_report(report))
    }

    /// A single document renders as an object, several as an array.
    fn generate_all(&self, reports: &[ComplianceReport]) -> Result<String, ReportError> {
        if let [single] = reports {
            return self.generate(single);
        }
        let all: Vec<_> = reports
            .iter()
            .map(JsonComplianceReport::from_report)
            .collect();
        self.serialize(&all)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}

#[derive(Serialize)]
struct JsonComplianceReport<'a> {
    report_name: &'a str,
    subtitle: &'a str,
    revision: &'a str,
    run: RunInfo<'a>,
    tool: ToolInfo,
    summary: Summary,
    sections: Vec<JsonSection<'a>>,
}

impl<'a> JsonComplianceReport<'a> {
    fn from_report(report: &'a ComplianceReport) -> Self {
        Self {
            report_name: &report.report_name,
            subtitle: &report.subtitle,
            revision: &report.revision,
            run: RunInfo {
                id: Uuid::new_v4().to_string(),
                generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
                file_name: &report.file_name,
                framework: report.framework.name(),
                engine_version: ENGINE_VERSION,
            },
            tool: ToolInfo {
                name: env!("CARGO_PKG_NAME"),
                version: env!("CARGO_PKG_VERSION"),
                vendor: env!("CARGO_PKG_AUTHORS"),
            },
            summary: Summary {
                max_score: report.score.max_score,
                total_score: round2(report.score.total),
                required_elements_score: round2(report.score.required),
                optional_elements_score: round2(report.score.optional),
            },
            sections: report.sections.iter().map(JsonSection::from).collect(),
        }
    }
}

#[derive(Serialize)]
struct RunInfo<'a> {
    id: String,
    generated_at: String,
    file_name: &'a str,
    framework: &'static str,
    engine_version: &'static str,
}

#[derive(Serialize)]
struct ToolInfo {
    name: &'static str,
    version: &'static str,
    vendor: &'static str,
}

#[derive(Serialize)]
struct Summary {
    max_score: f64,
    total_score: f64,
    required_elements_score: f64,
    optional_elements_score: f64,
}

#[derive(Serialize)]
struct JsonSection<'a> {
    section_title: &'a str,
    section_id: &'a str,
    section_data_field: &'a str,
    required: bool,
    element_id: &'a str,
    element_result: &'a str,
    score: f64,
    maturity: Maturity,
}

impl<'a> From<&'a Section> for JsonSection<'a> {
    fn from(section: &'a Section) -> Self {
        Self {
            section_title: &section.section_title,
            section_id: &section.section_id,
            section_data_field: &section.section_data_field,
            required: section.required,
            element_id: &section.element_id,
            element_result: &section.element_result,
            score: round2(section.score),
            maturity: section.maturity,
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
