//! Report type definitions.

use crate::compliance::{DocumentScore, Evaluation, Framework, FrameworkKind, Section};
use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Output format for reports
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Aligned per-element table with a category breakdown
    #[default]
    Detailed,
    /// Structured JSON output
    Json,
    /// One summary line per document
    Basic,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Detailed => write!(f, "detailed"),
            Self::Json => write!(f, "json"),
            Self::Basic => write!(f, "basic"),
        }
    }
}

/// One evaluated document, everything a renderer needs.
#[derive(Debug, Clone)]
pub struct ComplianceReport {
    /// Input file the document came from
    pub file_name: String,
    pub framework: FrameworkKind,
    pub report_name: String,
    pub subtitle: String,
    pub revision: String,
    pub score: DocumentScore,
    pub sections: Vec<Section>,
}

impl ComplianceReport {
    #[must_use]
    pub fn new(framework: &Framework, evaluation: Evaluation, file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            framework: framework.kind,
            report_name: framework.name.to_string(),
            subtitle: framework.subtitle.to_string(),
            revision: framework.revision.to_string(),
            score: evaluation.score,
            sections: evaluation.sections,
        }
    }
}
