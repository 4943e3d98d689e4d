//! Core SBOM and Component data structures.

use super::{
    Author, Checksum, Document, ExternalIdentifier, LicenseExpression, PrimaryComponent,
    Signature, SpecInfo, Supplier, Tool,
};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Normalized SBOM document - the in-memory [`Document`] adapter.
///
/// Producers that already flattened a `CycloneDX` or SPDX file into this shape
/// can serialize it as JSON or YAML and feed it straight to the engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizedSbom {
    /// Specification metadata
    pub spec: SpecInfo,
    /// Components in declaration order
    pub components: Vec<Component>,
    /// Primary/root product component (`CycloneDX` metadata.component or SPDX documentDescribes)
    pub primary_component: Option<PrimaryComponent>,
    /// Declared dependency edges, keyed by element id
    pub relationships: IndexMap<String, Vec<String>>,
    /// SBOM authors
    pub authors: Vec<Author>,
    /// Generation tools
    pub tools: Vec<Tool>,
    /// Declared lifecycle phases
    pub lifecycles: Vec<String>,
    /// Document revision
    pub revision: Option<String>,
    /// End of support for updates
    pub support_end_date: Option<String>,
    /// Document signature
    pub signature: Option<Signature>,
}

impl NormalizedSbom {
    /// Create a new empty normalized SBOM
    #[must_use]
    pub fn new(spec: SpecInfo) -> Self {
        Self {
            spec,
            ..Self::default()
        }
    }

    /// Add a component to the SBOM.
    pub fn add_component(&mut self, component: Component) {
        self.components.push(component);
    }

    /// Declare that `from` depends directly on `to`.
    ///
    /// Edges keep declaration order and duplicates are ignored.
    pub fn add_relationship(&mut self, from: impl Into<String>, to: impl Into<String>) {
        let to = to.into();
        let targets = self.relationships.entry(from.into()).or_default();
        if !targets.contains(&to) {
            targets.push(to);
        }
    }

    /// Set the primary component.
    ///
    /// Direct dependencies declared on the primary are mirrored into the
    /// relationship map so closure resolution sees them.
    pub fn set_primary_component(&mut self, primary: PrimaryComponent) {
        for dep in &primary.dependencies {
            self.add_relationship(primary.id.clone(), dep.clone());
        }
        self.primary_component = Some(primary);
    }

    /// Get total component count
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.components.len()
    }
}

impl Document for NormalizedSbom {
    fn spec(&self) -> &SpecInfo {
        &self.spec
    }

    fn components(&self) -> &[Component] {
        &self.components
    }

    fn primary_component(&self) -> Option<&PrimaryComponent> {
        self.primary_component.as_ref()
    }

    fn relationships(&self) -> &IndexMap<String, Vec<String>> {
        &self.relationships
    }

    fn authors(&self) -> &[Author] {
        &self.authors
    }

    fn tools(&self) -> &[Tool] {
        &self.tools
    }

    fn lifecycles(&self) -> &[String] {
        &self.lifecycles
    }

    fn revision(&self) -> Option<&str> {
        self.revision.as_deref()
    }

    fn support_end_date(&self) -> Option<&str> {
        self.support_end_date.as_deref()
    }

    fn signature(&self) -> Option<&Signature> {
        self.signature.as_ref()
    }
}

/// Component in the normalized SBOM
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Component {
    /// Format-specific identifier (bom-ref or SPDX id)
    pub id: String,
    /// Component name
    pub name: String,
    /// Component version
    pub version: String,
    /// Supplier information
    pub supplier: Option<Supplier>,
    /// Declared checksums
    pub checksums: Vec<Checksum>,
    /// License expressions (declared and concluded)
    pub licenses: Vec<LicenseExpression>,
    /// Copyright text
    pub copyright: String,
    /// External identifiers (purl, cpe, swid, ...)
    pub identifiers: Vec<ExternalIdentifier>,
    /// Distribution location
    pub download_url: String,
    /// Source repository location
    pub source_url: String,
}

impl Component {
    /// Create a new component
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Element id used for records: the declared id, or `name@version`
    /// when the producer left it blank.
    #[must_use]
    pub fn element_id(&self) -> String {
        if !self.id.trim().is_empty() {
            return self.id.clone();
        }
        if self.version.trim().is_empty() {
            self.name.clone()
        } else {
            format!("{}@{}", self.name, self.version)
        }
    }

    /// Display name: name when known, otherwise the id.
    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.id
        } else {
            &self.name
        }
    }

    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    #[must_use]
    pub fn with_supplier(mut self, supplier: Supplier) -> Self {
        self.supplier = Some(supplier);
        self
    }

    #[must_use]
    pub fn with_checksum(mut self, checksum: Checksum) -> Self {
        self.checksums.push(checksum);
        self
    }

    #[must_use]
    pub fn with_license(mut self, expression: impl Into<String>) -> Self {
        self.licenses.push(LicenseExpression::new(expression));
        self
    }

    #[must_use]
    pub fn with_copyright(mut self, copyright: impl Into<String>) -> Self {
        self.copyright = copyright.into();
        self
    }

    #[must_use]
    pub fn with_identifier(mut self, identifier: ExternalIdentifier) -> Self {
        self.identifiers.push(identifier);
        self
    }

    #[must_use]
    pub fn with_download_url(mut self, url: impl Into<String>) -> Self {
        self.download_url = url.into();
        self
    }

    #[must_use]
    pub fn with_source_url(mut self, url: impl Into<String>) -> Self {
        self.source_url = url.into();
        self
    }
}
