//! Field-presence and evidence-formatting helpers shared by every framework.
//!
//! Frameworks differ in which checks they run and what they award; the
//! questions they ask of a document are the same, and live here.

use super::framework::Outcome;
use super::maturity::Level;
use super::resolver::EvaluationContext;
use crate::model::{
    Author, Component, Contact, Document, Identifier, IdentifierKind, Supplier, Tool,
    is_no_assertion,
};

/// Longest free-text preview kept as evidence before truncation.
pub const PREVIEW_CHARS: usize = 50;

/// Spec versions accepted as schema conformant.
pub const SPDX_VERSIONS: &[&str] = &["SPDX-2.3"];
pub const CYCLONEDX_VERSIONS: &[&str] = &["1.4", "1.5", "1.6"];

/// Serialization formats accepted as machine parsable.
pub const MACHINE_FORMATS: &[&str] = &["json", "xml", "yaml", "yml", "tag-value"];

/// Lifecycle phases that imply generation inside a build pipeline.
pub const BUILD_PHASES: &[&str] = &["pre-build", "build", "post-build"];

/// Non-empty and not a `NOASSERTION`/`NONE` placeholder.
#[must_use]
pub fn is_present(value: &str) -> bool {
    !value.trim().is_empty() && !is_no_assertion(value)
}

/// Free text cut to [`PREVIEW_CHARS`] characters with a trailing ellipsis.
#[must_use]
pub fn preview(text: &str) -> String {
    if text.chars().count() <= PREVIEW_CHARS {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(PREVIEW_CHARS).collect();
    cut.push_str("...");
    cut
}

fn join_present<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    parts
        .into_iter()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

/// `name, email, url, (contact name, contact email), ...`
#[must_use]
pub fn supplier_evidence(supplier: &Supplier) -> String {
    let contacts: Vec<String> = supplier
        .contacts
        .iter()
        .filter(|c| !c.is_empty())
        .map(contact_evidence)
        .collect();
    join_present(
        [
            supplier.name.as_str(),
            supplier.email.as_str(),
            supplier.url.as_str(),
        ]
        .into_iter()
        .chain(contacts.iter().map(String::as_str)),
    )
}

fn contact_evidence(contact: &Contact) -> String {
    format!(
        "({})",
        join_present([
            contact.name.as_str(),
            contact.email.as_str(),
            contact.phone.as_str()
        ])
    )
}

/// `Name (email, phone)`, parenthetical omitted when neither is known.
#[must_use]
pub fn author_evidence(author: &Author) -> String {
    let details = join_present([
        author.email.as_deref().unwrap_or_default(),
        author.phone.as_deref().unwrap_or_default(),
    ]);
    if details.is_empty() {
        author.name.trim().to_string()
    } else {
        format!("{} ({details})", author.name.trim())
    }
}

/// `name-version`, or just the name when unversioned.
#[must_use]
pub fn tool_evidence(tool: &Tool) -> String {
    if tool.version.trim().is_empty() {
        tool.name.trim().to_string()
    } else {
        format!("{}-{}", tool.name.trim(), tool.version.trim())
    }
}

/// Authors that carry a name
pub fn named_authors(doc: &dyn Document) -> impl Iterator<Item = &Author> {
    doc.authors().iter().filter(|a| a.is_named())
}

/// Tools that carry a name
pub fn named_tools(doc: &dyn Document) -> impl Iterator<Item = &Tool> {
    doc.tools().iter().filter(|t| is_present(&t.name))
}

/// Authors first, then tools, comma separated.
#[must_use]
pub fn authorship_evidence(doc: &dyn Document) -> String {
    named_authors(doc)
        .map(author_evidence)
        .chain(named_tools(doc).map(tool_evidence))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Supplier that carries any data
#[must_use]
pub fn supplier_of(component: &Component) -> Option<&Supplier> {
    component.supplier.as_ref().filter(|s| !s.is_empty())
}

/// Valid external identifier values in reporting priority order.
#[must_use]
pub fn identifier_values(component: &Component) -> Vec<String> {
    let mut valid: Vec<_> = component
        .identifiers
        .iter()
        .filter(|id| id.is_valid())
        .collect();
    valid.sort_by_key(|id| id.kind());
    valid.into_iter().map(|id| id.value()).collect()
}

/// Whether the component carries a valid identifier of `kind`.
#[must_use]
pub fn has_identifier(component: &Component, kind: IdentifierKind) -> bool {
    component
        .identifiers
        .iter()
        .any(|id| id.kind() == kind && id.is_valid())
}

/// Declared algorithm names of checksums that carry a digest.
#[must_use]
pub fn checksum_algorithms(component: &Component) -> Vec<&str> {
    component
        .checksums
        .iter()
        .filter(|c| c.is_present())
        .map(|c| c.algorithm.as_str())
        .collect()
}

/// At least one digest stronger than SHA-1.
#[must_use]
pub fn has_strong_checksum(component: &Component) -> bool {
    component
        .checksums
        .iter()
        .any(|c| c.is_present() && c.algorithm_kind().is_strong())
}

/// Asserted license expressions, comma separated.
#[must_use]
pub fn license_evidence(component: &Component) -> String {
    component
        .licenses
        .iter()
        .filter(|l| l.is_asserted())
        .map(|l| l.expression.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Download location, falling back to the source repository.
#[must_use]
pub fn download_location(component: &Component) -> Option<&str> {
    [component.download_url.as_str(), component.source_url.as_str()]
        .into_iter()
        .find(|url| is_present(url))
}

/// Shared relationship rule.
///
/// The primary component earns the recommended level when it declares
/// dependencies. Any other component must be reachable from the primary:
/// with direct dependencies it earns the recommended level and lists their
/// names; without, it earns the minimum level with empty evidence.
/// Unreachable components earn nothing.
#[must_use]
pub fn relationship_outcome(component: &Component, ctx: &EvaluationContext) -> Outcome {
    let deps = ctx.direct_dependents(&component.id);
    let names = || {
        deps.iter()
            .map(|id| ctx.resolve_name(id))
            .collect::<Vec<_>>()
            .join(", ")
    };

    if ctx.is_primary(&component.id) {
        return if deps.is_empty() {
            Outcome::unmet("")
        } else {
            Outcome::new(Level::Recommended, names())
        };
    }
    if !ctx.is_reachable(&component.id) {
        return Outcome::unmet("");
    }
    if deps.is_empty() {
        Outcome::new(Level::Minimum, "")
    } else {
        Outcome::new(Level::Recommended, names())
    }
}

/// RFC 3339 timestamp.
#[must_use]
pub fn is_rfc3339(value: &str) -> bool {
    chrono::DateTime::parse_from_rfc3339(value.trim()).is_ok()
}

/// Case-insensitive membership in an allow-list.
#[must_use]
pub fn allowed(value: &str, list: &[&str]) -> bool {
    let value = value.trim();
    list.iter().any(|candidate| candidate.eq_ignore_ascii_case(value))
}
