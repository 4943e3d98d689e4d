//! NTIA minimum elements.

use super::{
    authorship, component_name, component_version, core_category, format_category,
    governance_category, machine_format, schema_conformance, supplier, timestamp, tool_version,
    unique_identifiers,
};
use crate::compliance::framework::{Criterion, Framework, FrameworkKind, Outcome};
use crate::compliance::maturity::{Level, MaturityBand};
use crate::compliance::resolver::EvaluationContext;
use crate::model::Document;

const BAND: MaturityBand = MaturityBand::minimum(10.0);

#[must_use]
pub fn framework() -> Framework {
    Framework {
        kind: FrameworkKind::Ntia,
        name: "NTIA Minimum Elements Report",
        subtitle: "Minimum Elements for a Software Bill of Materials",
        revision: "July 2021",
        categories: vec![
            core_category(
                true,
                vec![
                    Criterion::document("SBOM Author", BAND, authorship),
                    Criterion::component("Supplier Name", BAND, supplier),
                    Criterion::component("Component Name", BAND, component_name),
                    Criterion::component("Component Version", BAND, component_version),
                    Criterion::component("Other Unique Identifiers", BAND, unique_identifiers),
                    Criterion::document("Dependency Relationships", BAND, primary_dependencies),
                ],
            ),
            format_category(
                true,
                vec![
                    Criterion::document("SBOM Timestamp", BAND, timestamp),
                    Criterion::document("Machine-Readable Format", BAND, machine_readable),
                ],
            ),
            governance_category(
                false,
                vec![Criterion::document("SBOM Generation Tool", BAND, tool_version)],
            ),
        ],
    }
}

/// The primary component declares its direct dependencies.
fn primary_dependencies(doc: &dyn Document, ctx: &EvaluationContext) -> Outcome {
    let Some(primary) = doc.present_primary() else {
        return Outcome::unmet("no primary component");
    };
    let deps = ctx.direct_dependents(&primary.id);
    let names: Vec<&str> = deps.iter().map(|id| ctx.resolve_name(id)).collect();
    Outcome::presence(!names.is_empty(), names.join(", "))
}

/// Recognized spec version in a machine-parsable serialization.
fn machine_readable(doc: &dyn Document, ctx: &EvaluationContext) -> Outcome {
    let schema = schema_conformance(doc, ctx);
    let format = machine_format(doc, ctx);
    let evidence = format!("{}, {}", schema.evidence, format.evidence);
    Outcome::presence(
        schema.level == Level::Minimum && format.level == Level::Minimum,
        evidence,
    )
}
