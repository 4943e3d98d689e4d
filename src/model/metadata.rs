//! Metadata structures for SBOM documents and components.

use serde::{Deserialize, Serialize};

/// SBOM specification family
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpecType {
    #[serde(alias = "CycloneDX", alias = "cdx")]
    #[default]
    CycloneDx,
    #[serde(alias = "SPDX")]
    Spdx,
}

impl std::fmt::Display for SpecType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CycloneDx => write!(f, "cyclonedx"),
            Self::Spdx => write!(f, "spdx"),
        }
    }
}

/// Document-level specification metadata
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpecInfo {
    /// Specification family
    pub spec_type: SpecType,
    /// Declared spec version (e.g. "1.5" or "SPDX-2.3")
    pub version: String,
    /// Serialization format (json, xml, yaml, tag-value)
    pub format: String,
    /// Creation timestamp as declared in the document
    pub timestamp: String,
    /// Document namespace or serial number
    pub namespace: String,
    /// Schema URL, when the document declares one
    pub schema_url: Option<String>,
}

/// Human or organization credited with authoring the SBOM
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Author {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// "person" or "organization"
    pub author_type: Option<String>,
}

impl Author {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    #[must_use]
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Whether a name is actually present.
    #[must_use]
    pub fn is_named(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

/// Tool used to generate the SBOM
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tool {
    pub name: String,
    pub version: String,
}

impl Tool {
    #[must_use]
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}

/// Document signature
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Signature {
    pub algorithm: String,
    pub value: String,
}

/// Organization/supplier information
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Supplier {
    pub name: String,
    pub email: String,
    pub url: String,
    pub contacts: Vec<Contact>,
}

impl Supplier {
    /// Create a new supplier with just a name
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// True when no field carries data.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.trim().is_empty()
            && self.email.trim().is_empty()
            && self.url.trim().is_empty()
            && self.contacts.iter().all(Contact::is_empty)
    }
}

/// Contact information
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl Contact {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.trim().is_empty() && self.email.trim().is_empty() && self.phone.trim().is_empty()
    }
}

/// Cryptographic checksum as declared by the document
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Checksum {
    /// Algorithm name, exactly as written in the source document
    pub algorithm: String,
    /// Digest value (hex encoded)
    pub value: String,
}

impl Checksum {
    #[must_use]
    pub fn new(algorithm: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            algorithm: algorithm.into(),
            value: value.into(),
        }
    }

    /// Parsed algorithm
    #[must_use]
    pub fn algorithm_kind(&self) -> HashAlgorithm {
        HashAlgorithm::parse(&self.algorithm)
    }

    /// A checksum counts only when it carries a digest.
    #[must_use]
    pub fn is_present(&self) -> bool {
        !self.value.trim().is_empty()
    }
}

/// Hash algorithm types
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HashAlgorithm {
    Md2,
    Md4,
    Md5,
    Md6,
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
    Sha3_256,
    Sha3_384,
    Sha3_512,
    Blake2b256,
    Blake2b384,
    Blake2b512,
    Blake3,
    Other(String),
}

impl HashAlgorithm {
    /// Parse an algorithm name as written by either CycloneDX or SPDX.
    ///
    /// Separators and case are ignored: `SHA-256`, `sha256` and `SHA_256` are equal.
    #[must_use]
    pub fn parse(name: &str) -> Self {
        let normalized: String = name
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_uppercase();
        match normalized.as_str() {
            "MD2" => Self::Md2,
            "MD4" => Self::Md4,
            "MD5" => Self::Md5,
            "MD6" => Self::Md6,
            "SHA1" => Self::Sha1,
            "SHA224" => Self::Sha224,
            "SHA256" => Self::Sha256,
            "SHA384" => Self::Sha384,
            "SHA512" => Self::Sha512,
            "SHA3256" => Self::Sha3_256,
            "SHA3384" => Self::Sha3_384,
            "SHA3512" => Self::Sha3_512,
            "BLAKE2B256" => Self::Blake2b256,
            "BLAKE2B384" => Self::Blake2b384,
            "BLAKE2B512" => Self::Blake2b512,
            "BLAKE3" => Self::Blake3,
            _ => Self::Other(name.to_string()),
        }
    }

    /// Stronger than SHA-1.
    #[must_use]
    pub fn is_strong(&self) -> bool {
        !matches!(
            self,
            Self::Md2 | Self::Md4 | Self::Md5 | Self::Md6 | Self::Sha1 | Self::Other(_)
        )
    }
}

impl std::fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Md2 => write!(f, "MD2"),
            Self::Md4 => write!(f, "MD4"),
            Self::Md5 => write!(f, "MD5"),
            Self::Md6 => write!(f, "MD6"),
            Self::Sha1 => write!(f, "SHA-1"),
            Self::Sha224 => write!(f, "SHA-224"),
            Self::Sha256 => write!(f, "SHA-256"),
            Self::Sha384 => write!(f, "SHA-384"),
            Self::Sha512 => write!(f, "SHA-512"),
            Self::Sha3_256 => write!(f, "SHA3-256"),
            Self::Sha3_384 => write!(f, "SHA3-384"),
            Self::Sha3_512 => write!(f, "SHA3-512"),
            Self::Blake2b256 => write!(f, "BLAKE2b-256"),
            Self::Blake2b384 => write!(f, "BLAKE2b-384"),
            Self::Blake2b512 => write!(f, "BLAKE2b-512"),
            Self::Blake3 => write!(f, "BLAKE3"),
            Self::Other(s) => write!(f, "{s}"),
        }
    }
}
