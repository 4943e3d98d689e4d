//! Normalized SBOM model consumed by the compliance engine.
//!
//! The engine only ever talks to a [`Document`]. [`NormalizedSbom`] is the
//! in-crate adapter; format-specific parsers live outside this crate and
//! produce either a `NormalizedSbom` or their own `Document` implementation.
//!
//! ```ignore
//! let sbom: NormalizedSbom = serde_json::from_str(&content)?;
//! let store = compliance::evaluate(&framework, &sbom);
//! ```

mod document;
mod identifiers;
mod license;
mod metadata;
mod sbom;

pub use document::*;
pub use identifiers::*;
pub use license::*;
pub use metadata::*;
pub use sbom::*;
