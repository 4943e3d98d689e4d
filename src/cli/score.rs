//! Score command handler.
//!
//! Implements the `score` subcommand: evaluate one or more documents against
//! a framework and render the results.

use crate::config::{AppConfig, Validatable};
use crate::pipeline::{evaluate_file, exit_codes, output_reports};
use crate::reports::ComplianceReport;
use anyhow::{Result, bail};
use rayon::prelude::*;
use std::path::PathBuf;

/// Run the score command, returning the desired exit code.
///
/// Documents are evaluated in parallel; each evaluation owns its context and
/// record store. Documents that fail to load are logged and skipped, and the
/// run then exits with [`exit_codes::ERROR`] after writing the rest.
///
/// The caller is responsible for calling `std::process::exit()` with the
/// returned code when it is non-zero.
pub fn run_score(paths: &[PathBuf], config: &AppConfig) -> Result<i32> {
    let errors = config.validate();
    if !errors.is_empty() {
        let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
        bail!("invalid configuration: {}", messages.join("; "));
    }
    if paths.is_empty() {
        bail!("no input documents given");
    }

    let framework = config.framework.build();
    let quiet = config.behavior.quiet;
    if !quiet {
        tracing::info!(
            "Scoring {} document(s) against {} ({} criteria)",
            paths.len(),
            framework.kind,
            framework.criterion_count()
        );
    }

    let results: Vec<_> = paths
        .par_iter()
        .map(|path| (path, evaluate_file(path, &framework, quiet)))
        .collect();

    let mut reports: Vec<ComplianceReport> = Vec::with_capacity(results.len());
    let mut failed = 0usize;
    for (path, result) in results {
        match result {
            Ok(report) => reports.push(report),
            Err(e) => {
                tracing::error!("{}: {}", path.display(), e);
                failed += 1;
            }
        }
    }

    if !reports.is_empty() {
        output_reports(&reports, config)?;
    }

    if failed > 0 {
        return Ok(exit_codes::ERROR);
    }
    Ok(min_score_exit_code(&reports, config.behavior.min_score))
}

fn min_score_exit_code(reports: &[ComplianceReport], min_score: Option<f64>) -> i32 {
    let Some(threshold) = min_score else {
        return exit_codes::SUCCESS;
    };
    let mut code = exit_codes::SUCCESS;
    for report in reports.iter().filter(|r| r.score.total < threshold) {
        tracing::error!(
            "{}: compliance score {:.1} is below minimum threshold {:.1}",
            report.file_name,
            report.score.total,
            threshold
        );
        code = exit_codes::BELOW_MIN_SCORE;
    }
    code
}
