//! Frameworks command handler.
//!
//! Lists the criteria each framework evaluates, with the levels they award.

use crate::compliance::{Framework, FrameworkKind, MaturityBand, Scope};
use crate::pipeline::{OutputTarget, write_output};
use crate::reports::ReportFormat;
use anyhow::Result;
use serde_json::json;

/// Print the criterion tables of `kind`, or of every framework when `None`.
pub fn run_frameworks(kind: Option<FrameworkKind>, format: ReportFormat) -> Result<()> {
    let frameworks: Vec<Framework> = kind.map_or_else(
        || FrameworkKind::ALL.iter().map(|k| k.build()).collect(),
        |k| vec![k.build()],
    );
    let output = render_framework_listing(&frameworks, format)?;
    write_output(&output, &OutputTarget::Stdout, true)
}

/// Render criterion tables as text or JSON.
pub fn render_framework_listing(
    frameworks: &[Framework],
    format: ReportFormat,
) -> Result<String> {
    if format == ReportFormat::Json {
        let listing: Vec<_> = frameworks.iter().map(framework_json).collect();
        return Ok(serde_json::to_string_pretty(&listing)?);
    }

    let mut lines = Vec::new();
    for framework in frameworks {
        lines.push(format!(
            "{} ({}) [{}] rev {}",
            framework.name, framework.subtitle, framework.kind, framework.revision
        ));
        for category in &framework.categories {
            let marker = if category.required { "" } else { " (optional)" };
            lines.push(format!(
                "  {} {}{} - weight {:.0}",
                category.section_id,
                category.title,
                marker,
                category.weight()
            ));
            for criterion in &category.criteria {
                lines.push(format!(
                    "    {:<9} {:<48} {}",
                    scope_label(criterion.scope()),
                    criterion.title,
                    band_label(&criterion.band)
                ));
            }
        }
        lines.push(String::new());
    }
    Ok(lines.join("\n").trim_end().to_string())
}

fn framework_json(framework: &Framework) -> serde_json::Value {
    let categories: Vec<_> = framework
        .categories
        .iter()
        .map(|category| {
            let criteria: Vec<_> = category
                .criteria
                .iter()
                .map(|c| {
                    json!({
                        "title": c.title,
                        "scope": c.scope(),
                        "band": c.band,
                        "weight": c.weight(),
                    })
                })
                .collect();
            json!({
                "key": category.key,
                "section_id": category.section_id,
                "title": category.title,
                "required": category.required,
                "weight": category.weight(),
                "criteria": criteria,
            })
        })
        .collect();
    json!({
        "framework": framework.kind,
        "name": framework.name,
        "subtitle": framework.subtitle,
        "revision": framework.revision,
        "categories": categories,
    })
}

const fn scope_label(scope: Scope) -> &'static str {
    match scope {
        Scope::Document => "document",
        Scope::Component => "component",
    }
}

fn band_label(band: &MaturityBand) -> String {
    let mut parts = Vec::new();
    if band.aspirational != Some(band.minimum) {
        parts.push(format!("minimum {:.0}", band.minimum));
    }
    if let Some(score) = band.recommended {
        parts.push(format!("recommended {score:.0}"));
    }
    if let Some(score) = band.aspirational {
        parts.push(format!("aspirational {score:.0}"));
    }
    parts.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_label() {
        assert_eq!(band_label(&MaturityBand::minimum(10.0)), "minimum 10");
        assert_eq!(
            band_label(&MaturityBand::recommended(10.0, 12.0)),
            "minimum 10, recommended 12"
        );
        assert_eq!(band_label(&MaturityBand::aspirational(15.0)), "aspirational 15");
    }

    #[test]
    fn test_text_listing_mentions_every_criterion() {
        let framework = FrameworkKind::Ntia.build();
        let text =
            render_framework_listing(std::slice::from_ref(&framework), ReportFormat::Detailed)
                .unwrap();
        for category in &framework.categories {
            assert!(text.contains(category.title));
            for criterion in &category.criteria {
                assert!(text.contains(criterion.title));
            }
        }
        assert!(text.contains("(optional)"));
    }

    #[test]
    fn test_json_listing_shape() {
        let frameworks: Vec<_> = FrameworkKind::ALL.iter().map(|k| k.build()).collect();
        let text = render_framework_listing(&frameworks, ReportFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 3);
        assert_eq!(value[1]["framework"], "fsct");
        assert_eq!(value[0]["categories"][2]["required"], false);
    }
}
