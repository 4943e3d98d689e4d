//! Dependency resolution and per-evaluation lookup context.
//!
//! Everything here is computed from one document and dropped with it; no
//! lookup table outlives the evaluation that built it.

use crate::model::{Component, Document, clean_key};
use indexmap::{IndexMap, IndexSet};
use std::collections::{HashMap, HashSet, VecDeque};

/// Relationship map keyed by cleaned source id. Each source maps its cleaned
/// target ids to the target as first declared.
type Adjacency = IndexMap<String, IndexMap<String, String>>;

/// Direct dependency ids of `id`, in declaration order.
///
/// Ids compare modulo the `SPDXRef-` prefix. Returns an empty list for ids
/// with no outgoing edges. Evaluators use the cached lookup on
/// [`EvaluationContext::direct_dependents`] instead.
#[must_use]
pub fn direct_dependents(doc: &dyn Document, id: &str) -> Vec<String> {
    let wanted = clean_key(id);
    let mut targets: IndexMap<&str, &String> = IndexMap::new();
    for (from, declared) in doc.relationships() {
        if clean_key(from) != wanted {
            continue;
        }
        for target in declared {
            targets.entry(clean_key(target)).or_insert(target);
        }
    }
    targets.into_values().cloned().collect()
}

/// All ids reachable from the primary component, excluding the primary itself.
///
/// Breadth-first, so the returned set iterates in discovery order. Cycles
/// terminate through the visited set; ids that never appear as a
/// relationship key are treated as leaves. Returns an empty set when the
/// document has no primary component.
#[must_use]
pub fn resolve_primary_closure(doc: &dyn Document) -> IndexSet<String> {
    let Some(primary) = doc.present_primary() else {
        return IndexSet::new();
    };
    closure_from(clean_key(&primary.id), &adjacency(doc))
}

fn adjacency(doc: &dyn Document) -> Adjacency {
    let mut edges: Adjacency = IndexMap::new();
    for (from, targets) in doc.relationships() {
        let entry = edges.entry(clean_key(from).to_string()).or_default();
        for target in targets {
            entry
                .entry(clean_key(target).to_string())
                .or_insert_with(|| target.clone());
        }
    }
    edges
}

fn closure_from(root: &str, edges: &Adjacency) -> IndexSet<String> {
    let mut visited: IndexSet<String> = IndexSet::new();
    let mut queue: VecDeque<&str> = VecDeque::new();
    queue.push_back(root);

    while let Some(current) = queue.pop_front() {
        let Some(targets) = edges.get(current) else {
            continue;
        };
        for target in targets.keys() {
            if target != root && visited.insert(target.clone()) {
                queue.push_back(target);
            }
        }
    }
    visited
}

/// Record element ids for `components`, unique within one evaluation.
///
/// The first component to claim an id keeps it; later ones get `#<n>`
/// appended, starting from their 1-based position in the document.
fn unique_element_ids(components: &[Component]) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::with_capacity(components.len());
    components
        .iter()
        .enumerate()
        .map(|(index, component)| {
            let base = component.element_id();
            let mut candidate = base.clone();
            let mut ordinal = index + 1;
            while !seen.insert(candidate.clone()) {
                candidate = format!("{base}#{ordinal}");
                ordinal += 1;
            }
            candidate
        })
        .collect()
}

/// Read-only lookups shared by every evaluator during one evaluation.
#[derive(Debug, Clone, Default)]
pub struct EvaluationContext {
    names: HashMap<String, String>,
    edges: Adjacency,
    closure: IndexSet<String>,
    primary_id: Option<String>,
    element_ids: Vec<String>,
}

impl EvaluationContext {
    /// Build the context for one document.
    #[must_use]
    pub fn build(doc: &dyn Document) -> Self {
        let components = doc.components();
        let names = components
            .iter()
            .filter(|c| !c.name.trim().is_empty())
            .map(|c| (clean_key(&c.id).to_string(), c.name.clone()))
            .collect();

        let primary_id = doc.present_primary().map(|p| clean_key(&p.id).to_string());
        let edges = adjacency(doc);
        let closure = primary_id
            .as_deref()
            .map(|root| closure_from(root, &edges))
            .unwrap_or_default();

        let known: HashSet<&str> = components.iter().map(|c| clean_key(&c.id)).collect();
        let dangling = closure
            .iter()
            .filter(|id| !known.contains(id.as_str()))
            .count();
        if dangling > 0 {
            tracing::warn!(
                dangling,
                "relationship map references ids with no matching component"
            );
        }

        let element_ids = unique_element_ids(components);
        let renamed = components
            .iter()
            .zip(&element_ids)
            .filter(|(c, id)| c.element_id() != **id)
            .count();
        if renamed > 0 {
            tracing::debug!(renamed, "disambiguated repeated component ids");
        }
        tracing::debug!(
            components = components.len(),
            reachable = closure.len(),
            "built evaluation context"
        );

        Self {
            names,
            edges,
            closure,
            primary_id,
            element_ids,
        }
    }

    /// Whether `id` is reachable from the primary component.
    #[must_use]
    pub fn is_reachable(&self, id: &str) -> bool {
        self.closure.contains(clean_key(id))
    }

    /// Whether `id` denotes the primary component.
    #[must_use]
    pub fn is_primary(&self, id: &str) -> bool {
        self.primary_id
            .as_deref()
            .is_some_and(|primary| primary == clean_key(id))
    }

    /// Transitive dependency ids of the primary component.
    #[must_use]
    pub fn closure(&self) -> &IndexSet<String> {
        &self.closure
    }

    /// Direct dependency ids of `id` as declared, in declaration order.
    #[must_use]
    pub fn direct_dependents(&self, id: &str) -> Vec<&str> {
        self.edges
            .get(clean_key(id))
            .map(|targets| targets.values().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Record element id of each component, parallel to `components()`.
    #[must_use]
    pub fn element_ids(&self) -> &[String] {
        &self.element_ids
    }

    /// Component name for `id`, falling back to the id itself.
    #[must_use]
    pub fn resolve_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.names
            .get(clean_key(id))
            .map_or(id, String::as_str)
    }
}
