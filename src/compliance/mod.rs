//! Framework-driven compliance evaluation.
//!
//! A [`Framework`] is a fixed table of weighted criteria grouped into
//! categories. [`evaluate`] runs every criterion once against a
//! [`Document`](crate::model::Document) and collects the results in a
//! [`RecordStore`]; [`aggregate_document`] folds the records into category
//! and document scores; [`build_sections`] orders them for rendering.
//!
//! ```no_run
//! use sbom_compliance::compliance::{FrameworkKind, run};
//! use sbom_compliance::model::NormalizedSbom;
//!
//! let sbom = NormalizedSbom::default();
//! let framework = FrameworkKind::Fsct.build();
//! let evaluation = run(&framework, &sbom).unwrap();
//! println!("total: {:.1}", evaluation.score.total);
//! ```
//!
//! Every evaluation builds its own [`EvaluationContext`]; nothing is cached
//! across documents, so independent documents can be evaluated in parallel.

mod aggregate;
mod engine;
mod framework;
pub mod frameworks;
mod maturity;
pub mod predicates;
mod resolver;
mod sections;
mod store;

pub use aggregate::{
    CategoryScore, DocumentScore, MAX_SCORE, aggregate_document, score_for_element,
    score_for_key_and_id,
};
pub use engine::{Evaluation, evaluate, run};
pub use framework::{
    Category, ComponentEvaluator, Criterion, DocumentEvaluator, Evaluator, Framework,
    FrameworkKind, Outcome, Scope,
};
pub use maturity::{Level, Maturity, MaturityBand, classify};
pub use resolver::{EvaluationContext, direct_dependents, resolve_primary_closure};
pub use sections::{DOC_LEVEL_LABEL, Section, build_sections};
pub use store::{ElementId, Record, RecordStore};

pub use crate::error::ComplianceError;
