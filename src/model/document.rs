//! Read-only document capability consumed by the compliance engine.
//!
//! Every SBOM source (CycloneDX, SPDX, or an already normalized document)
//! is exposed through [`Document`]. The engine depends on nothing else, so
//! adding a new source means writing one adapter that implements this trait.

use super::{Author, Component, Signature, SpecInfo, Tool};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Prefix SPDX puts in front of element identifiers.
const SPDX_REF_PREFIX: &str = "SPDXRef-";

/// Normalize an element identifier for comparison.
///
/// Relationship maps and component ids may be written with or without the
/// `SPDXRef-` prefix depending on the producer; both spellings compare equal
/// after cleaning.
#[must_use]
pub fn clean_key(id: &str) -> &str {
    let trimmed = id.trim();
    trimmed.strip_prefix(SPDX_REF_PREFIX).unwrap_or(trimmed)
}

/// The top-level artifact an SBOM describes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrimaryComponent {
    /// Element identifier of the primary component
    pub id: String,
    /// Display name
    pub name: String,
    /// Whether the document actually designates a primary component
    #[serde(default = "designated")]
    pub present: bool,
    /// Direct dependency ids declared for the primary component
    pub dependencies: Vec<String>,
}

const fn designated() -> bool {
    true
}

impl PrimaryComponent {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            present: true,
            dependencies: Vec::new(),
        }
    }

    /// Name when known, otherwise the id.
    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.id
        } else {
            &self.name
        }
    }
}

/// Read-only view of a normalized SBOM document.
///
/// Implementations must be cheap to query repeatedly; the engine never
/// mutates a document and never assumes optional data is populated.
pub trait Document: Sync {
    /// Specification metadata
    fn spec(&self) -> &SpecInfo;

    /// Components in declaration order
    fn components(&self) -> &[Component];

    /// Primary component, when the document designates one
    fn primary_component(&self) -> Option<&PrimaryComponent>;

    /// Declared dependency edges: element id to its direct dependency ids
    fn relationships(&self) -> &IndexMap<String, Vec<String>>;

    /// SBOM authors (people or organizations)
    fn authors(&self) -> &[Author];

    /// Tools used to generate the SBOM
    fn tools(&self) -> &[Tool];

    /// Declared lifecycle phases
    fn lifecycles(&self) -> &[String];

    /// Document revision, used as evidence of change history
    fn revision(&self) -> Option<&str> {
        None
    }

    /// Declared end of support for updates
    fn support_end_date(&self) -> Option<&str> {
        None
    }

    /// Document signature
    fn signature(&self) -> Option<&Signature> {
        None
    }

    /// Primary component only when it is flagged present.
    fn present_primary(&self) -> Option<&PrimaryComponent> {
        self.primary_component().filter(|p| p.present)
    }

    /// Look up a component by element id, ignoring the `SPDXRef-` prefix.
    fn find_component(&self, id: &str) -> Option<&Component> {
        let wanted = clean_key(id);
        self.components()
            .iter()
            .find(|c| clean_key(&c.id) == wanted)
    }
}
