//! Custom framework: core data, format and governance checks, every
//! criterion worth the same flat score.

use super::{
    authorship, component_name, component_version, core_category, format_category,
    governance_category, license, machine_format, relationships, schema_conformance, supplier,
    tool_version, unique_identifiers,
};
use crate::compliance::framework::{Criterion, Framework, FrameworkKind, Outcome};
use crate::compliance::predicates::{self, BUILD_PHASES, allowed, is_present};
use crate::compliance::maturity::MaturityBand;
use crate::compliance::resolver::EvaluationContext;
use crate::model::{Component, Document};

const BAND: MaturityBand = MaturityBand::minimum(10.0);

#[must_use]
pub fn framework() -> Framework {
    Framework {
        kind: FrameworkKind::Custom,
        name: "Custom SBOM Compliance Report",
        subtitle: "Core Data, Format and Governance",
        revision: "1.0",
        categories: vec![
            core_category(
                true,
                vec![
                    Criterion::component("Component name", BAND, component_name),
                    Criterion::component("Exact version", BAND, component_version),
                    Criterion::component("Supplier or vendor name", BAND, supplier),
                    Criterion::component("Other Unique Identifiers", BAND, unique_identifiers),
                    Criterion::document("Author of SBOM data", BAND, authorship),
                    Criterion::component(
                        "Component (Dependency) relationships",
                        BAND,
                        relationships,
                    ),
                    Criterion::component("Component Hash (SHA 256)", BAND, strong_hash),
                    Criterion::component("License(s) and usage terms", BAND, license),
                    Criterion::component("Download or source repository URL", BAND, download_url),
                ],
            ),
            format_category(
                true,
                vec![
                    Criterion::document("Conformance to a recognized schema", BAND, schema_conformance),
                    Criterion::document("Structured, machine-parsable format", BAND, machine_format),
                    Criterion::document(
                        "Namespace, timestamp, and version of the SBOM spec",
                        BAND,
                        namespace_timestamp_version,
                    ),
                ],
            ),
            governance_category(
                true,
                vec![
                    Criterion::document("Tool and tooling version", BAND, tool_version),
                    Criterion::document("Change history", BAND, change_history),
                    Criterion::document(
                        "Integration hooks for automated generation",
                        BAND,
                        integration_hooks,
                    ),
                    Criterion::document("Review cadence and update policy", BAND, review_cadence),
                    Criterion::document("SBOM integrity verification", BAND, integrity),
                ],
            ),
        ],
    }
}

fn strong_hash(_: &dyn Document, c: &Component, _: &EvaluationContext) -> Outcome {
    let strong: Vec<&str> = c
        .checksums
        .iter()
        .filter(|sum| sum.is_present() && sum.algorithm_kind().is_strong())
        .map(|sum| sum.algorithm.as_str())
        .collect();
    Outcome::presence(!strong.is_empty(), strong.join(", "))
}

fn download_url(_: &dyn Document, c: &Component, _: &EvaluationContext) -> Outcome {
    match predicates::download_location(c) {
        Some(url) => Outcome::presence(true, url),
        None => Outcome::unmet(""),
    }
}

fn namespace_timestamp_version(doc: &dyn Document, _: &EvaluationContext) -> Outcome {
    let spec = doc.spec();
    let fields = [
        spec.namespace.as_str(),
        spec.timestamp.as_str(),
        spec.version.as_str(),
    ];
    let met = fields.iter().all(|f| is_present(f));
    let evidence = fields
        .iter()
        .map(|f| f.trim())
        .filter(|f| !f.is_empty())
        .collect::<Vec<_>>()
        .join(", ");
    Outcome::presence(met, evidence)
}

fn change_history(doc: &dyn Document, _: &EvaluationContext) -> Outcome {
    match doc.revision().filter(|r| is_present(r)) {
        Some(revision) => Outcome::presence(true, revision.trim()),
        None => Outcome::unmet(""),
    }
}

/// A build-phase lifecycle means the SBOM came out of a pipeline.
fn integration_hooks(doc: &dyn Document, _: &EvaluationContext) -> Outcome {
    let phases: Vec<&str> = doc
        .lifecycles()
        .iter()
        .map(|p| p.trim())
        .filter(|p| allowed(p, BUILD_PHASES))
        .collect();
    Outcome::presence(!phases.is_empty(), phases.join(", "))
}

fn review_cadence(doc: &dyn Document, _: &EvaluationContext) -> Outcome {
    match doc.support_end_date().filter(|d| is_present(d)) {
        Some(date) => Outcome::presence(true, date.trim()),
        None => Outcome::unmet(""),
    }
}

fn integrity(doc: &dyn Document, _: &EvaluationContext) -> Outcome {
    match doc.signature().filter(|s| is_present(&s.value)) {
        Some(signature) => Outcome::presence(true, signature.algorithm.trim()),
        None => Outcome::unmet(""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance::frameworks::fixtures;
    use crate::compliance::maturity::Level;
    use crate::model::{Checksum, Signature};

    #[test]
    fn test_every_criterion_weighs_ten() {
        let framework = framework();
        for category in &framework.categories {
            for criterion in &category.criteria {
                assert!((criterion.weight() - 10.0).abs() < f64::EPSILON);
            }
        }
        assert!((framework.categories[0].weight() - 90.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_strong_hash_ignores_sha1() {
        let sbom = fixtures::cyclonedx();
        let ctx = EvaluationContext::build(&sbom);
        let weak = Component::new("c", "c").with_checksum(Checksum::new("SHA1", "abc"));
        assert_eq!(strong_hash(&sbom, &weak, &ctx).level, Level::Unmet);
        let strong = weak.with_checksum(Checksum::new("SHA-256", "def"));
        assert_eq!(strong_hash(&sbom, &strong, &ctx), Outcome::presence(true, "SHA-256"));
    }

    #[test]
    fn test_governance_evidence() {
        let mut sbom = fixtures::cyclonedx();
        sbom.revision = Some("3".to_string());
        sbom.lifecycles = vec!["design".to_string(), "post-build".to_string()];
        sbom.support_end_date = Some("2030-01-01".to_string());
        sbom.signature = Some(Signature {
            algorithm: "ES256".to_string(),
            value: "MEUCIQ".to_string(),
        });
        let ctx = EvaluationContext::build(&sbom);
        assert_eq!(change_history(&sbom, &ctx), Outcome::presence(true, "3"));
        assert_eq!(integration_hooks(&sbom, &ctx), Outcome::presence(true, "post-build"));
        assert_eq!(review_cadence(&sbom, &ctx).level, Level::Minimum);
        assert_eq!(integrity(&sbom, &ctx), Outcome::presence(true, "ES256"));
    }

    #[test]
    fn test_namespace_timestamp_version_needs_all_three() {
        let mut sbom = fixtures::cyclonedx();
        let ctx = EvaluationContext::build(&sbom);
        assert_eq!(namespace_timestamp_version(&sbom, &ctx).level, Level::Minimum);
        sbom.spec.namespace.clear();
        assert_eq!(namespace_timestamp_version(&sbom, &ctx).level, Level::Unmet);
    }
}
