//! Built-in frameworks and the evaluators they share.
//!
//! Each framework module is a table of `(title, band, evaluator)` rows. The
//! evaluators below answer the questions more than one framework asks; a
//! framework only needs its own evaluator when its rule genuinely differs.

pub mod custom;
pub mod fsct;
pub mod ntia;

use super::framework::{Category, Criterion, Outcome};
use super::maturity::Level;
use super::predicates::{
    self, CYCLONEDX_VERSIONS, MACHINE_FORMATS, SPDX_VERSIONS, allowed, is_present,
};
use super::resolver::EvaluationContext;
use crate::model::{Component, Document, SpecType};

/// Core component data
pub const CORE_COMPONENT_DATA: u8 = 0;
/// Format, standards and machine readability
pub const FORMAT_STANDARDS: u8 = 1;
/// Governance, traceability and updates
pub const GOVERNANCE: u8 = 2;

pub(crate) fn core_category(required: bool, criteria: Vec<Criterion>) -> Category {
    Category {
        key: CORE_COMPONENT_DATA,
        title: "Core Component Data",
        section_id: "1.1",
        required,
        criteria,
    }
}

pub(crate) fn format_category(required: bool, criteria: Vec<Criterion>) -> Category {
    Category {
        key: FORMAT_STANDARDS,
        title: "Format, Standards, and Machine-Readability",
        section_id: "2.1",
        required,
        criteria,
    }
}

pub(crate) fn governance_category(required: bool, criteria: Vec<Criterion>) -> Category {
    Category {
        key: GOVERNANCE,
        title: "Governance, Traceability, and Updates",
        section_id: "3.1",
        required,
        criteria,
    }
}

// ============================================================================
// Component-level evaluators
// ============================================================================

pub(crate) fn component_name(_: &dyn Document, c: &Component, _: &EvaluationContext) -> Outcome {
    Outcome::presence(is_present(&c.name), c.name.trim())
}

pub(crate) fn component_version(
    _: &dyn Document,
    c: &Component,
    _: &EvaluationContext,
) -> Outcome {
    Outcome::presence(is_present(&c.version), c.version.trim())
}

pub(crate) fn supplier(_: &dyn Document, c: &Component, _: &EvaluationContext) -> Outcome {
    match predicates::supplier_of(c) {
        Some(s) => Outcome::presence(true, predicates::supplier_evidence(s)),
        None => Outcome::unmet(""),
    }
}

pub(crate) fn unique_identifiers(
    _: &dyn Document,
    c: &Component,
    _: &EvaluationContext,
) -> Outcome {
    let values = predicates::identifier_values(c);
    Outcome::presence(!values.is_empty(), values.join(", "))
}

pub(crate) fn relationships(_: &dyn Document, c: &Component, ctx: &EvaluationContext) -> Outcome {
    predicates::relationship_outcome(c, ctx)
}

/// Minimum when any license is asserted, recommended when every asserted
/// expression is valid SPDX.
pub(crate) fn license(_: &dyn Document, c: &Component, _: &EvaluationContext) -> Outcome {
    let asserted: Vec<_> = c.licenses.iter().filter(|l| l.is_asserted()).collect();
    let evidence = predicates::license_evidence(c);
    if asserted.is_empty() {
        Outcome::unmet(evidence)
    } else if asserted.iter().all(|l| l.is_valid_spdx) {
        Outcome::new(Level::Recommended, evidence)
    } else {
        Outcome::new(Level::Minimum, evidence)
    }
}

// ============================================================================
// Document-level evaluators
// ============================================================================

/// Minimum for a named author, recommended when a generation tool is also
/// declared. Tools alone earn nothing but still show up as evidence.
pub(crate) fn authorship(doc: &dyn Document, _: &EvaluationContext) -> Outcome {
    let evidence = predicates::authorship_evidence(doc);
    let has_author = predicates::named_authors(doc).next().is_some();
    let has_tool = predicates::named_tools(doc).next().is_some();
    let level = match (has_author, has_tool) {
        (true, true) => Level::Recommended,
        (true, false) => Level::Minimum,
        _ => Level::Unmet,
    };
    Outcome::new(level, evidence)
}

pub(crate) fn timestamp(doc: &dyn Document, _: &EvaluationContext) -> Outcome {
    let ts = doc.spec().timestamp.trim();
    Outcome::presence(predicates::is_rfc3339(ts), ts)
}

/// Declared spec version is one this engine recognizes.
pub(crate) fn schema_conformance(doc: &dyn Document, _: &EvaluationContext) -> Outcome {
    let spec = doc.spec();
    let versions = match spec.spec_type {
        SpecType::Spdx => SPDX_VERSIONS,
        SpecType::CycloneDx => CYCLONEDX_VERSIONS,
    };
    Outcome::presence(
        allowed(&spec.version, versions),
        format!("{}, {}", spec.spec_type, spec.version.trim()),
    )
}

pub(crate) fn machine_format(doc: &dyn Document, _: &EvaluationContext) -> Outcome {
    let format = doc.spec().format.trim();
    Outcome::presence(allowed(format, MACHINE_FORMATS), format)
}

/// Tools that declare both a name and a version.
pub(crate) fn tool_version(doc: &dyn Document, _: &EvaluationContext) -> Outcome {
    let versioned: Vec<String> = predicates::named_tools(doc)
        .filter(|t| is_present(&t.version))
        .map(predicates::tool_evidence)
        .collect();
    Outcome::presence(!versioned.is_empty(), versioned.join(", "))
}
