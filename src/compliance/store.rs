//! Append-only record table for one evaluation run.

use super::maturity::Maturity;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Element a record was evaluated for.
///
/// The document is its own variant, so no component id can be mistaken for
/// it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "scope", content = "id", rename_all = "snake_case")]
pub enum ElementId {
    Document,
    /// Component element id, unique within one evaluation
    Component(String),
}

impl ElementId {
    #[must_use]
    pub fn component(id: impl Into<String>) -> Self {
        Self::Component(id.into())
    }

    #[must_use]
    pub const fn is_document(&self) -> bool {
        matches!(self, Self::Document)
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Document => f.write_str("doc"),
            Self::Component(id) => f.write_str(id),
        }
    }
}

/// One evaluated criterion for one element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Category key
    pub key: u8,
    /// Criterion title
    pub criterion: String,
    pub element: ElementId,
    pub evidence: String,
    pub score: f64,
    pub maturity: Maturity,
}

impl Record {
    #[must_use]
    pub const fn is_document_level(&self) -> bool {
        self.element.is_document()
    }
}

/// Records indexed by element, iterated in insertion order.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<Record>,
    by_id: IndexMap<ElementId, Vec<usize>>,
}

impl RecordStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_record(&mut self, record: Record) {
        let index = self.records.len();
        self.by_id
            .entry(record.element.clone())
            .or_default()
            .push(index);
        self.records.push(record);
    }

    /// Distinct elements in order of first appearance
    pub fn all_ids(&self) -> impl Iterator<Item = &ElementId> {
        self.by_id.keys()
    }

    pub fn records_by_id<'a>(&'a self, id: &ElementId) -> impl Iterator<Item = &'a Record> {
        self.by_id
            .get(id)
            .into_iter()
            .flatten()
            .map(|&i| &self.records[i])
    }

    pub fn records_by_key_id<'a>(
        &'a self,
        key: u8,
        id: &ElementId,
    ) -> impl Iterator<Item = &'a Record> {
        self.records_by_id(id).filter(move |r| r.key == key)
    }

    /// Every record in insertion order
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
