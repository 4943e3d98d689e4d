//! Framework, category and criterion definitions.
//!
//! A framework is a declarative table: categories in report order, each
//! holding criteria in evaluation order. Criteria never change at runtime.

use super::maturity::{Level, MaturityBand};
use super::resolver::EvaluationContext;
use crate::error::ComplianceError;
use crate::model::{Component, Document};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What an evaluator hands back: the level it awards and its evidence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub level: Level,
    pub evidence: String,
}

impl Outcome {
    #[must_use]
    pub fn new(level: Level, evidence: impl Into<String>) -> Self {
        Self {
            level,
            evidence: evidence.into(),
        }
    }

    /// Minimum level when `met`, unmet otherwise.
    #[must_use]
    pub fn presence(met: bool, evidence: impl Into<String>) -> Self {
        let level = if met { Level::Minimum } else { Level::Unmet };
        Self::new(level, evidence)
    }

    #[must_use]
    pub fn unmet(evidence: impl Into<String>) -> Self {
        Self::new(Level::Unmet, evidence)
    }
}

/// Evaluates a document-level criterion
pub type DocumentEvaluator = fn(&dyn Document, &EvaluationContext) -> Outcome;

/// Evaluates a component-level criterion for one component
pub type ComponentEvaluator = fn(&dyn Document, &Component, &EvaluationContext) -> Outcome;

/// Evaluator plus the scope it runs at
#[derive(Clone, Copy)]
pub enum Evaluator {
    Document(DocumentEvaluator),
    Component(ComponentEvaluator),
}

impl Evaluator {
    #[must_use]
    pub fn scope(&self) -> Scope {
        match self {
            Self::Document(_) => Scope::Document,
            Self::Component(_) => Scope::Component,
        }
    }
}

impl fmt::Debug for Evaluator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Evaluator::{:?}", self.scope())
    }
}

/// Element a criterion is evaluated against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    Document,
    Component,
}

/// A single scored check
#[derive(Debug, Clone)]
pub struct Criterion {
    /// Stable title, unique within its category
    pub title: &'static str,
    pub band: MaturityBand,
    pub evaluator: Evaluator,
}

impl Criterion {
    #[must_use]
    pub fn document(title: &'static str, band: MaturityBand, eval: DocumentEvaluator) -> Self {
        Self {
            title,
            band,
            evaluator: Evaluator::Document(eval),
        }
    }

    #[must_use]
    pub fn component(
        title: &'static str,
        band: MaturityBand,
        eval: ComponentEvaluator,
    ) -> Self {
        Self {
            title,
            band,
            evaluator: Evaluator::Component(eval),
        }
    }

    /// Maximum score
    #[must_use]
    pub fn weight(&self) -> f64 {
        self.band.weight()
    }

    #[must_use]
    pub fn scope(&self) -> Scope {
        self.evaluator.scope()
    }
}

/// Named, ordered group of criteria
#[derive(Debug, Clone)]
pub struct Category {
    pub key: u8,
    pub title: &'static str,
    /// Section id shown in reports ("1.1", "2.1", ...)
    pub section_id: &'static str,
    pub required: bool,
    pub criteria: Vec<Criterion>,
}

impl Category {
    /// Sum of criterion weights
    #[must_use]
    pub fn weight(&self) -> f64 {
        self.criteria.iter().map(Criterion::weight).sum()
    }

    #[must_use]
    pub fn criterion(&self, title: &str) -> Option<&Criterion> {
        self.criteria.iter().find(|c| c.title == title)
    }
}

/// Built-in framework selector
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum FrameworkKind {
    /// NTIA minimum elements
    Ntia,
    /// Field completeness transparency
    Fsct,
    /// Core data, format and governance checks
    #[default]
    Custom,
}

impl FrameworkKind {
    pub const ALL: [Self; 3] = [Self::Ntia, Self::Fsct, Self::Custom];

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Ntia => "ntia",
            Self::Fsct => "fsct",
            Self::Custom => "custom",
        }
    }

    /// Build the framework's criterion table.
    #[must_use]
    pub fn build(self) -> Framework {
        match self {
            Self::Ntia => super::frameworks::ntia::framework(),
            Self::Fsct => super::frameworks::fsct::framework(),
            Self::Custom => super::frameworks::custom::framework(),
        }
    }
}

impl fmt::Display for FrameworkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FrameworkKind {
    type Err = ComplianceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ComplianceError::UnknownFramework(s.to_string()))
    }
}

/// A named set of categories
#[derive(Debug, Clone)]
pub struct Framework {
    pub kind: FrameworkKind,
    /// Report name
    pub name: &'static str,
    pub subtitle: &'static str,
    pub revision: &'static str,
    pub categories: Vec<Category>,
}

impl Framework {
    #[must_use]
    pub fn category(&self, key: u8) -> Option<&Category> {
        self.categories.iter().find(|c| c.key == key)
    }

    /// Category metadata for `key`, failing loudly when the framework does
    /// not declare it.
    pub fn require_category(&self, key: u8) -> Result<&Category, ComplianceError> {
        self.category(key)
            .ok_or_else(|| ComplianceError::UnknownCategory {
                framework: self.kind.name().to_string(),
                key,
            })
    }

    /// Total number of criteria across categories
    #[must_use]
    pub fn criterion_count(&self) -> usize {
        self.categories.iter().map(|c| c.criteria.len()).sum()
    }
}
