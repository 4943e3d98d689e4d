//! Aggregation of records into category and document scores.
//!
//! Per category, the composite is the sum of document-level scores plus the
//! mean over component elements of each element's category sum, clamped to
//! the category weight. The document total is the mean of the composites.

use super::framework::Framework;
use super::store::{ElementId, RecordStore};
use crate::error::ComplianceError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Scale every document total is reported against.
pub const MAX_SCORE: f64 = 100.0;

/// Aggregated score for one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub key: u8,
    pub title: String,
    pub section_id: String,
    pub required: bool,
    pub weight: f64,
    pub score: f64,
}

/// Aggregated score for one document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentScore {
    pub categories: Vec<CategoryScore>,
    pub max_score: f64,
    pub total: f64,
    pub required: f64,
    pub optional: f64,
}

/// Per-category totals for one element, keyed in first-record order.
#[must_use]
pub fn score_for_element(store: &RecordStore, id: &ElementId) -> IndexMap<u8, f64> {
    let mut totals: IndexMap<u8, f64> = IndexMap::new();
    for record in store.records_by_id(id) {
        *totals.entry(record.key).or_insert(0.0) += record.score;
    }
    totals
}

/// Total of one category for one element.
#[must_use]
pub fn score_for_key_and_id(store: &RecordStore, key: u8, id: &ElementId) -> f64 {
    store.records_by_key_id(key, id).map(|r| r.score).sum()
}

/// Fold every record into category composites and document totals.
///
/// Fails when a record carries a category key the framework does not
/// declare. A document with no records scores zero everywhere.
pub fn aggregate_document(
    framework: &Framework,
    store: &RecordStore,
) -> Result<DocumentScore, ComplianceError> {
    for record in store.records() {
        framework.require_category(record.key)?;
    }

    let categories: Vec<CategoryScore> = framework
        .categories
        .iter()
        .map(|category| {
            let doc_sum = score_for_key_and_id(store, category.key, &ElementId::Document);
            let element_sums: Vec<f64> = store
                .all_ids()
                .filter(|id| !id.is_document())
                .filter(|id| store.records_by_key_id(category.key, id).next().is_some())
                .map(|id| score_for_key_and_id(store, category.key, id))
                .collect();
            let weight = category.weight();
            let score = (doc_sum + mean(&element_sums)).clamp(0.0, weight);
            CategoryScore {
                key: category.key,
                title: category.title.to_string(),
                section_id: category.section_id.to_string(),
                required: category.required,
                weight,
                score,
            }
        })
        .collect();

    let total = mean_of(categories.iter());
    let required = mean_of(categories.iter().filter(|c| c.required));
    let optional = mean_of(categories.iter().filter(|c| !c.required));

    Ok(DocumentScore {
        categories,
        max_score: MAX_SCORE,
        total,
        required,
        optional,
    })
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

fn mean_of<'a>(scores: impl Iterator<Item = &'a CategoryScore>) -> f64 {
    let values: Vec<f64> = scores.map(|c| c.score).collect();
    mean(&values).clamp(0.0, MAX_SCORE)
}

impl DocumentScore {
    #[must_use]
    pub fn category(&self, key: u8) -> Option<&CategoryScore> {
        self.categories.iter().find(|c| c.key == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance::framework::FrameworkKind;
    use crate::compliance::maturity::Maturity;
    use crate::compliance::store::Record;

    fn record(key: u8, id: &str, score: f64) -> Record {
        let element = if id == "doc" {
            ElementId::Document
        } else {
            ElementId::component(id)
        };
        Record {
            key,
            criterion: "c".to_string(),
            element,
            evidence: String::new(),
            score,
            maturity: Maturity::Minimum,
        }
    }

    #[test]
    fn test_empty_store_scores_zero() {
        let framework = FrameworkKind::Custom.build();
        let score = aggregate_document(&framework, &RecordStore::new()).unwrap();
        assert!(score.total.abs() < f64::EPSILON);
        assert!(score.optional.abs() < f64::EPSILON);
        assert!((score.max_score - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_component_scores_are_averaged_not_summed() {
        let framework = FrameworkKind::Custom.build();
        let mut store = RecordStore::new();
        store.add_record(record(0, "doc", 10.0));
        store.add_record(record(0, "a", 80.0));
        store.add_record(record(0, "b", 40.0));
        let score = aggregate_document(&framework, &store).unwrap();
        let core = score.category(0).unwrap();
        assert!((core.score - 70.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_unknown_category_fails() {
        let framework = FrameworkKind::Fsct.build();
        let mut store = RecordStore::new();
        store.add_record(record(9, "doc", 1.0));
        assert_eq!(
            aggregate_document(&framework, &store),
            Err(ComplianceError::UnknownCategory {
                framework: "fsct".to_string(),
                key: 9
            })
        );
    }

    #[test]
    fn test_score_for_element() {
        let mut store = RecordStore::new();
        store.add_record(record(1, "a", 2.0));
        store.add_record(record(0, "a", 3.0));
        store.add_record(record(1, "a", 5.0));
        let a = ElementId::component("a");
        let totals = score_for_element(&store, &a);
        assert_eq!(totals.keys().copied().collect::<Vec<_>>(), vec![1, 0]);
        assert!((totals[&1u8] - 7.0).abs() < f64::EPSILON);
        assert!((score_for_key_and_id(&store, 0, &a) - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_component_named_doc_is_averaged_not_added() {
        let framework = FrameworkKind::Custom.build();
        let mut store = RecordStore::new();
        store.add_record(record(0, "doc", 10.0));
        store.add_record(Record {
            element: ElementId::component("doc"),
            ..record(0, "x", 30.0)
        });
        store.add_record(record(0, "b", 10.0));
        let score = aggregate_document(&framework, &store).unwrap();
        let core = score.category(0).unwrap();
        assert!((core.score - 30.0).abs() < f64::EPSILON);
    }
}
