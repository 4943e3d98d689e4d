//! Single-pass evaluation driver.

use super::aggregate::{DocumentScore, aggregate_document};
use super::framework::{Evaluator, Framework};
use super::resolver::EvaluationContext;
use super::sections::{Section, build_sections};
use super::store::{ElementId, Record, RecordStore};
use crate::error::ComplianceError;
use crate::model::Document;

/// Run every criterion of `framework` against `doc`.
///
/// Categories run in declaration order, criteria in declaration order
/// within a category, and component-level criteria once per component in
/// document order. Component records carry the component's element id,
/// made unique for this run; document records carry [`ElementId::Document`].
/// The returned store owns every record of this run.
#[must_use]
pub fn evaluate(framework: &Framework, doc: &dyn Document) -> RecordStore {
    let ctx = EvaluationContext::build(doc);
    let mut store = RecordStore::new();

    for category in &framework.categories {
        for criterion in &category.criteria {
            let mut emit = |element: ElementId, outcome: super::framework::Outcome| {
                let score = criterion.band.score(outcome.level);
                store.add_record(Record {
                    key: category.key,
                    criterion: criterion.title.to_string(),
                    element,
                    evidence: outcome.evidence,
                    score,
                    maturity: criterion.band.classify(score),
                });
            };
            match criterion.evaluator {
                Evaluator::Document(eval) => emit(ElementId::Document, eval(doc, &ctx)),
                Evaluator::Component(eval) => {
                    for (component, id) in doc.components().iter().zip(ctx.element_ids()) {
                        emit(ElementId::component(id.as_str()), eval(doc, component, &ctx));
                    }
                }
            }
        }
    }

    tracing::debug!(
        framework = %framework.kind,
        records = store.len(),
        "evaluation complete"
    );
    store
}

/// Everything one evaluation produces, ready for rendering.
#[derive(Debug, Clone)]
pub struct Evaluation {
    pub store: RecordStore,
    pub score: DocumentScore,
    pub sections: Vec<Section>,
}

/// Evaluate, aggregate and build report sections in one call.
pub fn run(framework: &Framework, doc: &dyn Document) -> Result<Evaluation, ComplianceError> {
    let store = evaluate(framework, doc);
    let score = aggregate_document(framework, &store)?;
    let sections = build_sections(framework, &store)?;
    Ok(Evaluation {
        store,
        score,
        sections,
    })
}
