//! External identifiers carried by SBOM components.
//!
//! Each identifier class implements [`Identifier`], so evaluators can ask a
//! single question ("is there a valid identifier of this kind?") without
//! caring how the class validates itself.
//!
//! Recognized classes, in reporting priority order:
//!
//! 1. **PURL** (Package URL), parsed with the `packageurl` crate
//! 2. **OmniBOR** artifact ids (`gitoid:blob:sha1:<hex>`)
//! 3. **SWHID** (Software Heritage persistent id)
//! 4. **SWID** tags (tag id plus software name)
//! 5. **CPE** (Common Platform Enumeration), 2.3 formatted string or 2.2 URI

use packageurl::PackageUrl;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

static CPE23: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^cpe:2\.3:[aho\*\-](:[^:\s]+){10}$").expect("static regex")
});
static CPE22: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^cpe:/[aho]:[^\s]+$").expect("static regex"));
static SWHID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^swh:1:(cnt|dir|rel|rev|snp):[0-9a-f]{40}(;.*)?$").expect("static regex")
});
static OMNIBOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^gitoid:blob:sha1:[a-fA-F0-9]{40}$").expect("static regex"));

/// Identifier class
///
/// Declaration order is reporting priority: sorting by kind puts purls first
/// and CPEs last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum IdentifierKind {
    Purl,
    OmniborId,
    Swhid,
    Swid,
    Cpe,
}

impl IdentifierKind {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Purl => "purl",
            Self::Cpe => "cpe",
            Self::OmniborId => "omniborid",
            Self::Swhid => "swhid",
            Self::Swid => "swid",
        }
    }
}

/// Common capability of every identifier class.
pub trait Identifier {
    /// Class of this identifier
    fn kind(&self) -> IdentifierKind;

    /// Value used as report evidence
    fn value(&self) -> String;

    /// Whether the value is syntactically valid for its class
    fn is_valid(&self) -> bool;
}

/// Package URL
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Purl(pub String);

impl Identifier for Purl {
    fn kind(&self) -> IdentifierKind {
        IdentifierKind::Purl
    }

    fn value(&self) -> String {
        self.0.clone()
    }

    fn is_valid(&self) -> bool {
        PackageUrl::from_str(&self.0).is_ok()
    }
}

/// Common Platform Enumeration
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cpe(pub String);

impl Identifier for Cpe {
    fn kind(&self) -> IdentifierKind {
        IdentifierKind::Cpe
    }

    fn value(&self) -> String {
        self.0.clone()
    }

    fn is_valid(&self) -> bool {
        CPE23.is_match(&self.0) || CPE22.is_match(&self.0)
    }
}

/// Software Heritage persistent identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Swhid(pub String);

impl Identifier for Swhid {
    fn kind(&self) -> IdentifierKind {
        IdentifierKind::Swhid
    }

    fn value(&self) -> String {
        self.0.clone()
    }

    fn is_valid(&self) -> bool {
        SWHID.is_match(&self.0)
    }
}

/// OmniBOR artifact identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OmniborId(pub String);

impl Identifier for OmniborId {
    fn kind(&self) -> IdentifierKind {
        IdentifierKind::OmniborId
    }

    fn value(&self) -> String {
        self.0.clone()
    }

    fn is_valid(&self) -> bool {
        OMNIBOR.is_match(&self.0)
    }
}

/// Software identification tag
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Swid {
    pub tag_id: String,
    pub name: String,
}

impl Swid {
    #[must_use]
    pub fn new(tag_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            tag_id: tag_id.into(),
            name: name.into(),
        }
    }
}

impl Identifier for Swid {
    fn kind(&self) -> IdentifierKind {
        IdentifierKind::Swid
    }

    /// Tag id and name, comma separated
    fn value(&self) -> String {
        if self.name.is_empty() {
            self.tag_id.clone()
        } else {
            format!("{}, {}", self.tag_id, self.name)
        }
    }

    fn is_valid(&self) -> bool {
        !self.tag_id.trim().is_empty()
    }
}

/// Any recognized external identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ExternalIdentifier {
    Purl { locator: Purl },
    Cpe { locator: Cpe },
    #[serde(rename = "omniborid")]
    OmniborId { locator: OmniborId },
    Swhid { locator: Swhid },
    Swid(Swid),
}

impl ExternalIdentifier {
    #[must_use]
    pub fn purl(value: impl Into<String>) -> Self {
        Self::Purl {
            locator: Purl(value.into()),
        }
    }

    #[must_use]
    pub fn cpe(value: impl Into<String>) -> Self {
        Self::Cpe {
            locator: Cpe(value.into()),
        }
    }

    #[must_use]
    pub fn omnibor(value: impl Into<String>) -> Self {
        Self::OmniborId {
            locator: OmniborId(value.into()),
        }
    }

    #[must_use]
    pub fn swhid(value: impl Into<String>) -> Self {
        Self::Swhid {
            locator: Swhid(value.into()),
        }
    }

    #[must_use]
    pub fn swid(tag_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Swid(Swid::new(tag_id, name))
    }

    fn inner(&self) -> &dyn Identifier {
        match self {
            Self::Purl { locator } => locator,
            Self::Cpe { locator } => locator,
            Self::OmniborId { locator } => locator,
            Self::Swhid { locator } => locator,
            Self::Swid(swid) => swid,
        }
    }
}

impl Identifier for ExternalIdentifier {
    fn kind(&self) -> IdentifierKind {
        self.inner().kind()
    }

    fn value(&self) -> String {
        self.inner().value()
    }

    fn is_valid(&self) -> bool {
        self.inner().is_valid()
    }
}

impl fmt::Display for ExternalIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind().name(), self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_purl_validation() {
        assert!(ExternalIdentifier::purl("pkg:npm/acme/component@1.0.0").is_valid());
        assert!(!ExternalIdentifier::purl("npm/acme").is_valid());
    }

    #[test]
    fn test_cpe_validation() {
        assert!(
            ExternalIdentifier::cpe("cpe:2.3:a:pivotal_software:spring_framework:4.1.0:*:*:*:*:*:*:*")
                .is_valid()
        );
        assert!(ExternalIdentifier::cpe("cpe:/a:apache:log4j:2.14").is_valid());
        assert!(!ExternalIdentifier::cpe("cpe:2.3:a:too:short").is_valid());
    }

    #[test]
    fn test_swhid_and_omnibor_validation() {
        assert!(ExternalIdentifier::swhid("swh:1:cnt:94a9ed024d3859793618152ea559a168bbcbb5e2").is_valid());
        assert!(!ExternalIdentifier::swhid("swh:2:cnt:94a9ed02").is_valid());
        assert!(
            ExternalIdentifier::omnibor("gitoid:blob:sha1:a94a8fe5ccb19ba61c4c0873d391e987982fbbd3")
                .is_valid()
        );
        assert!(!ExternalIdentifier::omnibor("gitoid:blob:sha256:abc").is_valid());
    }

    #[test]
    fn test_swid_value_joins_tag_and_name() {
        let swid = ExternalIdentifier::swid(
            "swidgen-242eb18a-503e-ca37-393b-cf156ef09691_9.1.1",
            "Acme Application",
        );
        assert!(swid.is_valid());
        assert_eq!(
            swid.value(),
            "swidgen-242eb18a-503e-ca37-393b-cf156ef09691_9.1.1, Acme Application"
        );
        assert!(!ExternalIdentifier::swid("", "Nameless").is_valid());
    }

    #[test]
    fn test_priority_order() {
        let mut kinds = vec![
            IdentifierKind::Cpe,
            IdentifierKind::Swid,
            IdentifierKind::Purl,
            IdentifierKind::Swhid,
            IdentifierKind::OmniborId,
        ];
        kinds.sort();
        assert_eq!(
            kinds,
            vec![
                IdentifierKind::Purl,
                IdentifierKind::OmniborId,
                IdentifierKind::Swhid,
                IdentifierKind::Swid,
                IdentifierKind::Cpe
            ]
        );
    }
}
