//! Property-based tests for score bounds and evaluation invariants.
//!
//! Documents are generated with random attribute coverage and random
//! (often cyclic) relationship graphs.

use proptest::prelude::*;
use sbom_compliance::compliance::{
    self, FrameworkKind, Maturity, MaturityBand, classify, evaluate, resolve_primary_closure,
};
use sbom_compliance::model::{
    Author, Checksum, Component, ExternalIdentifier, NormalizedSbom, PrimaryComponent, Supplier,
};

const MAX_COMPONENTS: usize = 8;

#[derive(Debug, Clone)]
struct ComponentSpec {
    name: bool,
    version: bool,
    supplier: bool,
    purl: bool,
    checksum: Option<&'static str>,
    license: Option<&'static str>,
    copyright: bool,
}

fn component_spec() -> impl Strategy<Value = ComponentSpec> {
    (
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        prop::option::of(prop::sample::select(vec!["SHA1", "SHA256", "MD5", "SHA-512"])),
        prop::option::of(prop::sample::select(vec![
            "MIT",
            "NOASSERTION",
            "Apache-2.0 OR MIT",
            "",
        ])),
        any::<bool>(),
    )
        .prop_map(
            |(name, version, supplier, purl, checksum, license, copyright)| ComponentSpec {
                name,
                version,
                supplier,
                purl,
                checksum,
                license,
                copyright,
            },
        )
}

fn build_document(
    specs: &[ComponentSpec],
    edges: &[(usize, usize)],
    primary: Option<usize>,
    author: bool,
) -> NormalizedSbom {
    let mut sbom = NormalizedSbom::default();
    sbom.spec.version = "1.5".to_string();
    sbom.spec.format = "json".to_string();
    if author {
        sbom.authors.push(Author::new("Prop Tester"));
    }
    for (i, spec) in specs.iter().enumerate() {
        let id = format!("c{i}");
        let mut c = Component::new(id.clone(), if spec.name { id.as_str() } else { "" });
        if spec.version {
            c = c.with_version("1.0.0");
        }
        if spec.supplier {
            c = c.with_supplier(Supplier::new("Supplier"));
        }
        if spec.purl {
            c = c.with_identifier(ExternalIdentifier::purl(format!("pkg:generic/{id}@1.0.0")));
        }
        if let Some(alg) = spec.checksum {
            c = c.with_checksum(Checksum::new(alg, "00ff"));
        }
        if let Some(license) = spec.license {
            c = c.with_license(license);
        }
        if spec.copyright {
            c = c.with_copyright("Copyright (c) contributors");
        }
        sbom.add_component(c);
    }
    for &(from, to) in edges {
        if from < specs.len() && to < specs.len() {
            sbom.add_relationship(format!("c{from}"), format!("c{to}"));
        }
    }
    if let Some(p) = primary.filter(|p| *p < specs.len()) {
        sbom.set_primary_component(PrimaryComponent::new(format!("c{p}"), format!("c{p}")));
    }
    sbom
}

fn document() -> impl Strategy<Value = NormalizedSbom> {
    (
        prop::collection::vec(component_spec(), 0..=MAX_COMPONENTS),
        prop::collection::vec((0..MAX_COMPONENTS, 0..MAX_COMPONENTS), 0..20),
        prop::option::of(0..MAX_COMPONENTS),
        any::<bool>(),
    )
        .prop_map(|(specs, edges, primary, author)| build_document(&specs, &edges, primary, author))
}

fn framework_kind() -> impl Strategy<Value = FrameworkKind> {
    prop::sample::select(FrameworkKind::ALL.to_vec())
}

fn band() -> impl Strategy<Value = MaturityBand> {
    prop_oneof![
        (1.0..20.0f64).prop_map(MaturityBand::minimum),
        (1.0..20.0f64, 0.0..10.0f64).prop_map(|(min, extra)| MaturityBand::recommended(min, min + extra)),
        (1.0..20.0f64).prop_map(MaturityBand::aspirational),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn record_scores_stay_within_criterion_weight(doc in document(), kind in framework_kind()) {
        let framework = kind.build();
        let store = evaluate(&framework, &doc);
        for record in store.records() {
            let category = framework.category(record.key).unwrap();
            let criterion = category.criterion(&record.criterion).unwrap();
            prop_assert!(record.score >= 0.0);
            prop_assert!(record.score <= criterion.weight());
            prop_assert_eq!(record.maturity, criterion.band.classify(record.score));
        }
    }

    #[test]
    fn composite_scores_are_bounded(doc in document(), kind in framework_kind()) {
        let framework = kind.build();
        let evaluation = compliance::run(&framework, &doc).unwrap();
        for category in &evaluation.score.categories {
            prop_assert!(category.score >= 0.0 && category.score <= category.weight);
        }
        for total in [evaluation.score.total, evaluation.score.required, evaluation.score.optional] {
            prop_assert!((0.0..=100.0).contains(&total));
        }
    }

    #[test]
    fn evaluation_is_idempotent(doc in document(), kind in framework_kind()) {
        let framework = kind.build();
        let first = compliance::run(&framework, &doc).unwrap();
        let second = compliance::run(&framework, &doc).unwrap();
        prop_assert_eq!(first.score, second.score);
        prop_assert_eq!(first.sections, second.sections);
    }

    #[test]
    fn document_sections_come_first(doc in document(), kind in framework_kind()) {
        let evaluation = compliance::run(&kind.build(), &doc).unwrap();
        let first_component = evaluation
            .sections
            .iter()
            .position(|s| !s.is_document_level())
            .unwrap_or(evaluation.sections.len());
        prop_assert!(evaluation.sections[first_component..].iter().all(|s| !s.is_document_level()));
    }

    #[test]
    fn classification_is_monotonic(band in band(), a in -5.0..30.0f64, b in -5.0..30.0f64) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(classify(low, &band) <= classify(high, &band));
        if low <= 0.0 {
            prop_assert_eq!(classify(low, &band), Maturity::None);
        }
    }

    #[test]
    fn closure_terminates_and_excludes_primary(
        edges in prop::collection::vec((0..MAX_COMPONENTS, 0..MAX_COMPONENTS), 0..40),
        primary in 0..MAX_COMPONENTS,
    ) {
        let specs = vec![
            ComponentSpec {
                name: true,
                version: true,
                supplier: false,
                purl: false,
                checksum: None,
                license: None,
                copyright: false,
            };
            MAX_COMPONENTS
        ];
        let doc = build_document(&specs, &edges, Some(primary), false);
        let closure = resolve_primary_closure(&doc);
        let root = format!("c{primary}");
        prop_assert!(!closure.contains(&root));
        prop_assert!(closure.len() < MAX_COMPONENTS);
        for id in &closure {
            let reached = edges.iter().any(|&(_, to)| format!("c{to}") == *id);
            prop_assert!(reached);
        }
    }
}
