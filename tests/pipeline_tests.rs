//! End-to-end tests for the load → evaluate → report pipeline.

use sbom_compliance::cli::run_score;
use sbom_compliance::compliance::FrameworkKind;
use sbom_compliance::config::AppConfig;
use sbom_compliance::pipeline::{DocumentFormat, evaluate_file, exit_codes, parse_document_str};
use sbom_compliance::reports::ReportFormat;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

fn fixture_path(name: &str) -> PathBuf {
    Path::new(FIXTURES_DIR).join(name)
}

#[test]
fn test_evaluate_file_uses_file_name() {
    let framework = FrameworkKind::Ntia.build();
    let report = evaluate_file(&fixture_path("ntia/minimal.cdx.json"), &framework, true).unwrap();
    assert_eq!(report.file_name, "minimal.cdx.json");
    assert_eq!(report.framework, FrameworkKind::Ntia);
    assert_eq!(report.report_name, "NTIA Minimum Elements Report");
}

#[test]
fn test_score_writes_basic_lines_in_input_order() {
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("scores.txt");
    let config = AppConfig::builder()
        .framework(FrameworkKind::Custom)
        .output_format(ReportFormat::Basic)
        .output_file(Some(out.clone()))
        .quiet(true)
        .build();
    let files = vec![
        fixture_path("fsct/acme-app.spdx.yaml"),
        fixture_path("custom/tool-golang.cdx.json"),
        fixture_path("ntia/minimal.cdx.json"),
    ];

    let code = run_score(&files, &config).unwrap();
    assert_eq!(code, exit_codes::SUCCESS);

    let written = std::fs::read_to_string(&out).unwrap();
    let names: Vec<&str> = written
        .lines()
        .map(|l| l.rsplit(" for ").next().unwrap())
        .collect();
    assert_eq!(
        names,
        vec!["acme-app.spdx.yaml", "tool-golang.cdx.json", "minimal.cdx.json"]
    );
}

#[test]
fn test_score_json_output_file() {
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("report.json");
    let config = AppConfig::builder()
        .framework(FrameworkKind::Fsct)
        .output_format(ReportFormat::Json)
        .output_file(Some(out.clone()))
        .quiet(true)
        .build();

    let code = run_score(&[fixture_path("fsct/acme-app.spdx.yaml")], &config).unwrap();
    assert_eq!(code, exit_codes::SUCCESS);

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(value["summary"]["total_score"], 34.0);
    assert_eq!(value["run"]["framework"], "fsct");
}

#[test]
fn test_min_score_gate() {
    let tmp = TempDir::new().unwrap();
    let config = AppConfig::builder()
        .framework(FrameworkKind::Ntia)
        .output_format(ReportFormat::Basic)
        .output_file(Some(tmp.path().join("gate.txt")))
        .min_score(Some(25.0))
        .quiet(true)
        .build();

    let code = run_score(&[fixture_path("ntia/minimal.cdx.json")], &config).unwrap();
    assert_eq!(code, exit_codes::BELOW_MIN_SCORE);

    let config = AppConfig {
        behavior: sbom_compliance::config::BehaviorConfig {
            min_score: Some(20.0),
            quiet: true,
        },
        ..config
    };
    let code = run_score(&[fixture_path("ntia/minimal.cdx.json")], &config).unwrap();
    assert_eq!(code, exit_codes::SUCCESS);
}

#[test]
fn test_unreadable_document_still_reports_the_rest() {
    let tmp = TempDir::new().unwrap();
    let broken = tmp.path().join("broken.json");
    std::fs::write(&broken, "{ not json").unwrap();
    let out = tmp.path().join("scores.txt");
    let config = AppConfig::builder()
        .output_format(ReportFormat::Basic)
        .output_file(Some(out.clone()))
        .quiet(true)
        .build();

    let code = run_score(&[broken, fixture_path("ntia/minimal.cdx.json")], &config).unwrap();
    assert_eq!(code, exit_codes::ERROR);
    let written = std::fs::read_to_string(&out).unwrap();
    assert_eq!(written.lines().count(), 1);
    assert!(written.contains("minimal.cdx.json"));
}

#[test]
fn test_yaml_and_json_parse_to_same_document() {
    let json = r#"{"spec": {"version": "1.5", "format": "json"},
                   "components": [{"id": "a", "name": "a", "licenses": ["MIT"]}]}"#;
    let yaml = "spec:\n  version: \"1.5\"\n  format: json\ncomponents:\n  - id: a\n    name: a\n    licenses: [MIT]\n";
    let from_json = parse_document_str(json, DocumentFormat::Json).unwrap();
    let from_yaml = parse_document_str(yaml, DocumentFormat::Yaml).unwrap();
    assert_eq!(from_json.spec, from_yaml.spec);
    assert_eq!(from_json.components, from_yaml.components);
}
