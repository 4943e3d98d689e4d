//! Field completeness transparency.
//!
//! Unlike the other frameworks, several criteria here distinguish a bare
//! minimum from a recommended answer, and lifecycle declarations are
//! scored as aspirational.

use super::{
    authorship, component_name, component_version, core_category, format_category,
    governance_category, license, relationships, supplier, timestamp, unique_identifiers,
};
use crate::compliance::framework::{Criterion, Framework, FrameworkKind, Outcome};
use crate::compliance::maturity::{Level, MaturityBand};
use crate::compliance::predicates::{self, is_present};
use crate::compliance::resolver::EvaluationContext;
use crate::model::{Component, Document};

const MINIMUM: MaturityBand = MaturityBand::minimum(10.0);
const RECOMMENDED: MaturityBand = MaturityBand::recommended(10.0, 12.0);
const ASPIRATIONAL: MaturityBand = MaturityBand::aspirational(15.0);

#[must_use]
pub fn framework() -> Framework {
    Framework {
        kind: FrameworkKind::Fsct,
        name: "Framing Software Component Transparency",
        subtitle: "Establishing a Common Software Bill of Materials",
        revision: "2024",
        categories: vec![
            core_category(
                true,
                vec![
                    Criterion::document("SBOM Primary Component", MINIMUM, primary_component),
                    Criterion::component("Component Name", MINIMUM, component_name),
                    Criterion::component("Component Version", MINIMUM, component_version),
                    Criterion::component("Supplier", MINIMUM, supplier),
                    Criterion::component("Unique Identifiers", MINIMUM, unique_identifiers),
                    Criterion::component("Checksum", RECOMMENDED, checksum),
                    Criterion::component("Dependency Relationships", RECOMMENDED, relationships),
                    Criterion::component("License", RECOMMENDED, license),
                    Criterion::component("Copyright", MINIMUM, copyright),
                ],
            ),
            format_category(
                true,
                vec![
                    Criterion::document("SBOM Timestamp", MINIMUM, timestamp),
                    Criterion::document("SBOM Type", ASPIRATIONAL, lifecycle),
                ],
            ),
            governance_category(
                true,
                vec![Criterion::document("SBOM Author", RECOMMENDED, authorship)],
            ),
        ],
    }
}

fn primary_component(doc: &dyn Document, _: &EvaluationContext) -> Outcome {
    match doc.present_primary() {
        Some(primary) => Outcome::presence(true, primary.display_name()),
        None => Outcome::unmet(""),
    }
}

/// Any digest meets the minimum; the primary component reaches the
/// recommended level with a digest stronger than SHA-1.
fn checksum(_: &dyn Document, c: &Component, ctx: &EvaluationContext) -> Outcome {
    let algorithms = predicates::checksum_algorithms(c);
    let evidence = algorithms.join(", ");
    if algorithms.is_empty() {
        return Outcome::unmet(evidence);
    }
    if ctx.is_primary(&c.id) && predicates::has_strong_checksum(c) {
        Outcome::new(Level::Recommended, evidence)
    } else {
        Outcome::new(Level::Minimum, evidence)
    }
}

fn copyright(_: &dyn Document, c: &Component, _: &EvaluationContext) -> Outcome {
    if is_present(&c.copyright) {
        Outcome::presence(true, predicates::preview(&c.copyright))
    } else {
        Outcome::unmet("")
    }
}

/// Any declared lifecycle phase is aspirational.
fn lifecycle(doc: &dyn Document, _: &EvaluationContext) -> Outcome {
    let phases: Vec<&str> = doc
        .lifecycles()
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect();
    if phases.is_empty() {
        Outcome::unmet("")
    } else {
        Outcome::new(Level::Aspirational, phases.join(", "))
    }
}
