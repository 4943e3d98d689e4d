//! Loading pre-normalized documents from disk.

use crate::error::{ErrorContext, LoadErrorKind, Result, SbomComplianceError};
use crate::model::NormalizedSbom;
use std::path::Path;

/// Serialization of a normalized document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Pick the format from a file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(SbomComplianceError::load(
                path.display().to_string(),
                LoadErrorKind::UnsupportedExtension(ext),
            )),
        }
    }
}

/// Parse a normalized document from a string.
///
/// Dependencies declared on the primary component are folded into the
/// relationship map, the same as [`NormalizedSbom::set_primary_component`].
pub fn parse_document_str(content: &str, format: DocumentFormat) -> Result<NormalizedSbom> {
    if content.trim().is_empty() {
        return Err(SbomComplianceError::load("parsing", LoadErrorKind::Empty));
    }
    let mut sbom: NormalizedSbom = match format {
        DocumentFormat::Json => serde_json::from_str(content)?,
        DocumentFormat::Yaml => serde_yaml::from_str(content)?,
    };
    if let Some(primary) = sbom.primary_component.take() {
        sbom.set_primary_component(primary);
    }
    Ok(sbom)
}

/// Read and parse a normalized document, choosing the format by extension.
pub fn load_document(path: &Path, quiet: bool) -> Result<NormalizedSbom> {
    if !quiet {
        tracing::info!("Loading SBOM: {}", path.display());
    }

    let format = DocumentFormat::from_path(path)?;
    let content =
        std::fs::read_to_string(path).map_err(|e| SbomComplianceError::io(path, e))?;
    let sbom = parse_document_str(&content, format)
        .with_context(|| path.display().to_string())?;

    if !quiet {
        tracing::info!(
            "Loaded {} components ({} {})",
            sbom.component_count(),
            sbom.spec.spec_type,
            sbom.spec.version
        );
    }
    Ok(sbom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Document;
    use std::path::PathBuf;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            DocumentFormat::from_path(Path::new("a.JSON")).unwrap(),
            DocumentFormat::Json
        );
        assert_eq!(
            DocumentFormat::from_path(Path::new("a.yml")).unwrap(),
            DocumentFormat::Yaml
        );
        assert!(matches!(
            DocumentFormat::from_path(Path::new("a.xml")),
            Err(SbomComplianceError::Load {
                source: LoadErrorKind::UnsupportedExtension(_),
                ..
            })
        ));
    }

    #[test]
    fn test_empty_content_rejected() {
        assert!(matches!(
            parse_document_str("  \n", DocumentFormat::Json),
            Err(SbomComplianceError::Load {
                source: LoadErrorKind::Empty,
                ..
            })
        ));
    }

    #[test]
    fn test_invalid_json_reports_load_error() {
        assert!(matches!(
            parse_document_str("{", DocumentFormat::Json),
            Err(SbomComplianceError::Load {
                source: LoadErrorKind::InvalidJson(_),
                ..
            })
        ));
    }

    #[test]
    fn test_primary_dependencies_become_relationships() {
        let json = r#"{
            "spec": {"spec_type": "cyclonedx", "version": "1.5", "format": "json"},
            "primary_component": {"id": "app", "name": "app", "dependencies": ["lib"]},
            "components": [{"id": "lib", "name": "lib"}]
        }"#;
        let sbom = parse_document_str(json, DocumentFormat::Json).unwrap();
        assert!(sbom.present_primary().is_some());
        assert_eq!(sbom.relationships["app"], vec!["lib"]);
    }

    #[test]
    fn test_load_document_missing_file() {
        let err = load_document(&PathBuf::from("/nonexistent/sbom.json"), true).unwrap_err();
        assert!(matches!(err, SbomComplianceError::Io { .. }));
    }
}
