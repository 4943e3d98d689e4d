//! **Compliance scoring for Software Bills of Materials (SBOMs).**
//!
//! `sbom-compliance` evaluates an SBOM against a compliance framework and
//! reports, for every component and for the document itself, which criteria
//! are met, the evidence found, a score and a maturity label. Scores roll up
//! into per-category composites and a 0-100 document total.
//!
//! ## Key Features
//!
//! - **Three built-in frameworks**: NTIA minimum elements, field completeness
//!   transparency (FSCT) and a custom core/format/governance profile.
//! - **Format-agnostic**: the engine talks to the [`Document`] trait, so
//!   `CycloneDX` and SPDX inputs are evaluated by the same criteria.
//! - **Dependency-aware**: relationship criteria follow the transitive closure of
//!   the primary component, cycles included.
//! - **Graded maturity**: criteria declare minimum / recommended / aspirational
//!   levels and records are classified against them.
//! - **Reporting**: JSON, an aligned detailed table and a one-line summary.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: the [`Document`] capability trait and the in-memory
//!   [`NormalizedSbom`] adapter.
//! - **[`compliance`]**: frameworks, the evaluation engine, the record store,
//!   aggregation and the section builder.
//! - **[`reports`]**: renderers over an evaluated document.
//! - **[`pipeline`]**: loading documents from disk and writing output.
//! - **[`config`]**: YAML configuration discovery, validation and merging.
//!
//! ## Getting Started
//!
//! ```no_run
//! use std::path::Path;
//! use sbom_compliance::compliance::{self, FrameworkKind};
//! use sbom_compliance::pipeline::load_document;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let sbom = load_document(Path::new("path/to/sbom.json"), true)?;
//!
//!     let framework = FrameworkKind::Ntia.build();
//!     let evaluation = compliance::run(&framework, &sbom)?;
//!
//!     println!(
//!         "total {:.1} (required {:.1}, optional {:.1})",
//!         evaluation.score.total, evaluation.score.required, evaluation.score.optional
//!     );
//!     for section in &evaluation.sections {
//!         println!("{} {} {}", section.element_id, section.section_data_field, section.score);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ### Building a Document in Memory
//!
//! ```
//! use sbom_compliance::compliance::{self, FrameworkKind};
//! use sbom_compliance::model::{Author, Component, NormalizedSbom, PrimaryComponent, SpecInfo};
//!
//! let mut sbom = NormalizedSbom::new(SpecInfo {
//!     version: "1.5".to_string(),
//!     format: "json".to_string(),
//!     ..SpecInfo::default()
//! });
//! sbom.authors.push(Author::new("Jane Doe"));
//! sbom.add_component(Component::new("app", "app").with_version("1.0.0"));
//! sbom.set_primary_component(PrimaryComponent::new("app", "app"));
//!
//! let framework = FrameworkKind::Fsct.build();
//! let evaluation = compliance::run(&framework, &sbom).unwrap();
//! assert!(evaluation.score.total > 0.0);
//! ```
//!
//! ## Command-Line Interface (CLI)
//!
//! This documentation is for the `sbom-compliance` library crate. The
//! `sbom-compliance` binary wraps it with `score`, `frameworks` and `config`
//! subcommands.

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
// Pedantic lints: allow categories that are design choices for this codebase
#![allow(
    // Cast safety: counts are averaged as f64 and are bounded in practice
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    // Doc completeness: # Errors / # Panics sections are aspirational
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    // Criterion tables are long declarative lists
    clippy::too_many_lines,
    // Variable names like `min`/`mid` are clear in context
    clippy::similar_names
)]

pub mod cli;
pub mod compliance;
pub mod config;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod reports;

// Re-export main types for convenience
pub use compliance::{
    ComplianceError, DocumentScore, Evaluation, Framework, FrameworkKind, Maturity, RecordStore,
    Section, evaluate, run,
};
pub use config::{AppConfig, AppConfigBuilder, BehaviorConfig, OutputConfig};
pub use config::{ConfigError, Validatable};
pub use error::{ErrorContext, OptionContext, Result, SbomComplianceError};
pub use model::{Component, Document, NormalizedSbom};
pub use pipeline::load_document;
pub use reports::{ComplianceReport, ReportFormat, ReportGenerator};
