//! Scenario tests for the field completeness transparency framework.

use sbom_compliance::compliance::{
    self, ElementId, FrameworkKind, Maturity, Section, evaluate, score_for_element,
};
use sbom_compliance::model::{
    Author, Component, NormalizedSbom, PrimaryComponent, SpecInfo, SpecType, Tool,
};
use sbom_compliance::pipeline::load_document;
use std::path::Path;

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

fn fixture_path(name: &str) -> std::path::PathBuf {
    Path::new(FIXTURES_DIR).join(name)
}

fn approx(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() < 1e-9
}

fn section<'a>(sections: &'a [Section], element: &str, field: &str) -> &'a Section {
    sections
        .iter()
        .find(|s| s.element_id == element && s.section_data_field == field)
        .unwrap_or_else(|| panic!("no section {field} for {element}"))
}

fn spdx_document() -> NormalizedSbom {
    NormalizedSbom::new(SpecInfo {
        spec_type: SpecType::Spdx,
        version: "SPDX-2.3".to_string(),
        format: "json".to_string(),
        timestamp: "2024-03-01T12:00:00Z".to_string(),
        namespace: "https://example.com/spdx/acme-app".to_string(),
        schema_url: None,
    })
}

fn fsct(sbom: &NormalizedSbom) -> compliance::Evaluation {
    compliance::run(&FrameworkKind::Fsct.build(), sbom).unwrap()
}

fn acme() -> compliance::Evaluation {
    let sbom = load_document(&fixture_path("fsct/acme-app.spdx.yaml"), true)
        .expect("fixture should load");
    compliance::run(&FrameworkKind::Fsct.build(), &sbom).unwrap()
}

#[test]
fn test_document_level_sections() {
    let evaluation = acme();
    let sections = &evaluation.sections;

    let primary = section(sections, "SBOM Level", "SBOM Primary Component");
    assert_eq!(primary.element_result, "acme-app");
    assert!(approx(primary.score, 10.0));

    let lifecycle = section(sections, "SBOM Level", "SBOM Type");
    assert_eq!(lifecycle.element_result, "build");
    assert!(approx(lifecycle.score, 15.0));
    assert_eq!(lifecycle.maturity, Maturity::Aspirational);

    let author = section(sections, "SBOM Level", "SBOM Author");
    assert_eq!(
        author.element_result,
        "Samantha Wright (samantha.wright@example.com, 800-555-1212), syft-1.1.2"
    );
    assert!(approx(author.score, 12.0));
    assert_eq!(author.maturity, Maturity::Recommended);
}

#[test]
fn test_primary_component_recommended_levels() {
    let evaluation = acme();
    let sections = &evaluation.sections;

    let checksum = section(sections, "SPDXRef-acme-app", "Checksum");
    assert_eq!(checksum.element_result, "SHA256, SHA1");
    assert!(approx(checksum.score, 12.0));
    assert_eq!(checksum.maturity, Maturity::Recommended);

    let deps = section(sections, "SPDXRef-acme-app", "Dependency Relationships");
    assert_eq!(deps.element_result, "left-pad");
    assert!(approx(deps.score, 12.0));

    let license = section(sections, "SPDXRef-acme-app", "License");
    assert_eq!(license.element_result, "MIT");
    assert!(approx(license.score, 12.0));
}

#[test]
fn test_transitive_dependency_scoring() {
    let evaluation = acme();
    let sections = &evaluation.sections;

    // Weak digest on a non-primary component stays at the minimum.
    let checksum = section(sections, "SPDXRef-left-pad", "Checksum");
    assert!(approx(checksum.score, 10.0));
    assert_eq!(checksum.maturity, Maturity::Minimum);

    // Edges declared with and without the SPDXRef- prefix line up.
    let deps = section(sections, "SPDXRef-left-pad", "Dependency Relationships");
    assert_eq!(deps.element_result, "zlib");
    assert!(approx(deps.score, 12.0));

    // Reachable leaf: minimum with no evidence.
    let leaf = section(sections, "zlib", "Dependency Relationships");
    assert!(approx(leaf.score, 10.0));
    assert_eq!(leaf.element_result, "");

    // Not reachable from the primary component.
    let orphan = section(sections, "orphan", "Dependency Relationships");
    assert!(approx(orphan.score, 0.0));
    assert_eq!(orphan.maturity, Maturity::None);
}

#[test]
fn test_copyright_preview_and_placeholders() {
    let evaluation = acme();
    let sections = &evaluation.sections;

    let copyright = section(sections, "SPDXRef-left-pad", "Copyright");
    assert_eq!(
        copyright.element_result,
        "2014 Sam Ghods\n staring in 2011 when the project w..."
    );
    assert!(approx(copyright.score, 10.0));

    let license = section(sections, "zlib", "License");
    assert!(approx(license.score, 0.0));
    assert_eq!(license.element_result, "");

    let identifiers = section(sections, "zlib", "Unique Identifiers");
    assert_eq!(
        identifiers.element_result,
        "cpe:2.3:a:zlib:zlib:1.3:*:*:*:*:*:*:*"
    );
}

#[test]
fn test_per_element_category_totals() {
    let sbom = load_document(&fixture_path("fsct/acme-app.spdx.yaml"), true).unwrap();
    let store = evaluate(&FrameworkKind::Fsct.build(), &sbom);

    let core = |id: &str| score_for_element(&store, &ElementId::component(id))[&0u8];
    assert!(approx(core("SPDXRef-acme-app"), 86.0));
    assert!(approx(core("SPDXRef-left-pad"), 84.0));
    assert!(approx(core("zlib"), 40.0));
    assert!(approx(core("orphan"), 10.0));

    let doc = score_for_element(&store, &ElementId::Document);
    assert_eq!(doc.keys().copied().collect::<Vec<_>>(), vec![0, 1, 2]);
    assert!(approx(doc[&1u8], 25.0));
}

#[test]
fn test_document_score() {
    let evaluation = acme();
    let score = &evaluation.score;

    assert!(approx(score.category(0).unwrap().score, 65.0));
    assert!(approx(score.category(0).unwrap().weight, 96.0));
    assert!(approx(score.category(1).unwrap().score, 25.0));
    assert!(approx(score.category(2).unwrap().score, 12.0));
    assert!(approx(score.total, 34.0));
    assert!(approx(score.required, 34.0));
    assert!(approx(score.optional, 0.0));
    assert!(approx(score.max_score, 100.0));
}

#[test]
fn test_author_without_tool_is_minimum() {
    let mut sbom = spdx_document();
    sbom.authors
        .push(Author::new("Samantha Wright").with_email("samantha.wright@example.com"));

    let evaluation = fsct(&sbom);
    let author = section(&evaluation.sections, "SBOM Level", "SBOM Author");
    assert_eq!(author.element_result, "Samantha Wright (samantha.wright@example.com)");
    assert!(approx(author.score, 10.0));
    assert_eq!(author.maturity, Maturity::Minimum);
}

#[test]
fn test_tool_without_author_scores_nothing() {
    let mut sbom = spdx_document();
    sbom.tools.push(Tool::new("syft", "1.1.2"));

    let evaluation = fsct(&sbom);
    let author = section(&evaluation.sections, "SBOM Level", "SBOM Author");
    assert_eq!(author.element_result, "syft-1.1.2");
    assert!(approx(author.score, 0.0));
    assert_eq!(author.maturity, Maturity::None);
}

#[test]
fn test_dependents_listed_in_declaration_order() {
    let mut sbom = spdx_document();
    for (id, name) in [
        ("SPDXRef-app", "app"),
        ("SPDXRef-lib", "lib"),
        ("SPDXRef-y", "y"),
        ("SPDXRef-x", "x"),
    ] {
        sbom.add_component(Component::new(id, name));
    }
    sbom.set_primary_component(PrimaryComponent::new("SPDXRef-app", "app"));
    sbom.add_relationship("SPDXRef-app", "SPDXRef-lib");
    sbom.add_relationship("SPDXRef-lib", "SPDXRef-x");
    sbom.add_relationship("lib", "SPDXRef-y");

    let evaluation = fsct(&sbom);
    let deps = section(&evaluation.sections, "SPDXRef-lib", "Dependency Relationships");
    assert_eq!(deps.element_result, "x, y");
    assert!(approx(deps.score, 12.0));
    assert_eq!(deps.maturity, Maturity::Recommended);

    let leaf = section(&evaluation.sections, "SPDXRef-x", "Dependency Relationships");
    assert!(approx(leaf.score, 10.0));
    assert_eq!(leaf.element_result, "");
}

#[test]
fn test_component_with_doc_id_is_scored_as_a_component() {
    let mut sbom = spdx_document();
    sbom.add_component(Component::new("doc", "a").with_version("1.0"));
    sbom.add_component(Component::new("b", "b").with_version("2.0"));

    let evaluation = fsct(&sbom);
    assert!(
        evaluation
            .sections
            .iter()
            .filter(|s| s.is_document_level())
            .all(|s| s.element_id == "SBOM Level")
    );
    let name = section(&evaluation.sections, "doc", "Component Name");
    assert!(!name.is_document_level());
    assert_eq!(name.element_result, "a");

    // Both components carry name and version only: 20 each, averaged.
    assert!(approx(evaluation.score.category(0).unwrap().score, 20.0));
}
