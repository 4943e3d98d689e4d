//! Evaluation and report output stages.

use super::{OutputTarget, load_document, should_use_color, write_output};
use crate::compliance::{self, Framework};
use crate::config::AppConfig;
use crate::error::{ErrorContext, Result};
use crate::reports::{ComplianceReport, create_reporter_with_options};
use std::path::Path;

/// Load one document and evaluate it against `framework`.
///
/// Each call builds its own evaluation context, so documents can be
/// evaluated concurrently against a shared framework.
pub fn evaluate_file(path: &Path, framework: &Framework, quiet: bool) -> Result<ComplianceReport> {
    let sbom = load_document(path, quiet)?;
    let evaluation = compliance::run(framework, &sbom)
        .with_context(|| format!("evaluating {}", path.display()))?;

    tracing::debug!(
        "{}: total {:.1} (required {:.1}, optional {:.1})",
        path.display(),
        evaluation.score.total,
        evaluation.score.required,
        evaluation.score.optional
    );

    let file_name = path
        .file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
    Ok(ComplianceReport::new(framework, evaluation, file_name))
}

/// Render reports in the configured format and write them to the configured
/// destination.
pub fn output_reports(reports: &[ComplianceReport], config: &AppConfig) -> anyhow::Result<()> {
    let target = OutputTarget::from_option(config.output.file.clone());
    let use_color =
        should_use_color(config.output.no_color) && matches!(target, OutputTarget::Stdout);
    let reporter = create_reporter_with_options(config.output.format, use_color);
    let rendered = reporter.generate_all(reports)?;
    write_output(&rendered, &target, config.behavior.quiet)
}
