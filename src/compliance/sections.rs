//! Report sections: records joined with their category metadata.

use super::framework::Framework;
use super::maturity::Maturity;
use super::store::RecordStore;
use crate::error::ComplianceError;
use serde::{Deserialize, Serialize};

/// Label document-level records carry in reports.
pub const DOC_LEVEL_LABEL: &str = "SBOM Level";

/// One renderable row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub section_title: String,
    pub section_id: String,
    /// Criterion title
    pub section_data_field: String,
    pub required: bool,
    /// Component element id, or [`DOC_LEVEL_LABEL`] for document rows
    pub element_id: String,
    pub element_result: String,
    pub score: f64,
    pub maturity: Maturity,
    /// Set on rows produced by document-level criteria
    #[serde(default)]
    pub document_level: bool,
}

impl Section {
    #[must_use]
    pub const fn is_document_level(&self) -> bool {
        self.document_level
    }
}

/// Sections grouped by element, document level first.
///
/// Groups follow first appearance in the store; rows inside a group are
/// ordered by section id, ties keeping evaluation order. A record whose
/// category the framework does not declare fails the whole build.
pub fn build_sections(
    framework: &Framework,
    store: &RecordStore,
) -> Result<Vec<Section>, ComplianceError> {
    let mut doc_group = Vec::new();
    let mut element_groups = Vec::new();

    for id in store.all_ids() {
        let is_doc = id.is_document();
        let element_id = if is_doc {
            DOC_LEVEL_LABEL.to_string()
        } else {
            id.to_string()
        };
        let mut group = store
            .records_by_id(id)
            .map(|record| -> Result<Section, ComplianceError> {
                let category = framework.require_category(record.key)?;
                Ok(Section {
                    section_title: category.title.to_string(),
                    section_id: category.section_id.to_string(),
                    section_data_field: record.criterion.clone(),
                    required: category.required,
                    element_id: element_id.clone(),
                    element_result: record.evidence.clone(),
                    score: record.score,
                    maturity: record.maturity,
                    document_level: is_doc,
                })
            })
            .collect::<Result<Vec<_>, ComplianceError>>()?;
        group.sort_by(|a, b| a.section_id.cmp(&b.section_id));

        if is_doc {
            doc_group = group;
        } else {
            element_groups.push(group);
        }
    }

    let mut sections = doc_group;
    sections.extend(element_groups.into_iter().flatten());
    Ok(sections)
}
