//! Content-policy resolution.
//!
//! A [`ClassifierParameters`] policy is a list of categories, each holding
//! concept/threshold pairs, an optional score adjustment, an action, and an
//! evaluation mode. Given per-concept scores from an evaluated artifact, the
//! resolver marks exceeded categories and merges their actions into one
//! realized verdict.
//!
//! The merge is most-restrictive-wins: severity order is
//! `Discard > Obfuscate > ObfuscateDuplicate > Regenerate >
//! RegenerateDuplicate > Passthrough`. This is a policy choice, kept explicit
//! here rather than inferred from wire enum numbering.

use std::collections::HashMap;

use tracing::debug;

use crate::proto::*;

/// Per-concept scores produced by a classifier evaluation, keyed by concept
/// string. Scores are typically in `[0, 1]`.
#[derive(Debug, Clone, Default)]
pub struct ConceptScores {
    by_concept: HashMap<String, f32>,
}

impl ConceptScores {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, concept: impl Into<String>, score: f32) {
        self.by_concept.insert(concept.into(), score);
    }

    pub fn with(mut self, concept: impl Into<String>, score: f32) -> Self {
        self.insert(concept, score);
        self
    }

    pub fn get(&self, concept: &str) -> Option<f32> {
        self.by_concept.get(concept).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.by_concept.is_empty()
    }
}

/// Severity rank of an action for verdict merging; higher is more
/// restrictive.
pub fn severity(action: Action) -> u8 {
    match action {
        Action::Passthrough => 0,
        Action::RegenerateDuplicate => 1,
        Action::Regenerate => 2,
        Action::ObfuscateDuplicate => 3,
        Action::Obfuscate => 4,
        Action::Discard => 5,
    }
}

/// Whether a category is exceeded under its evaluation mode.
///
/// Zero-shot: any concept whose adjusted score reaches its threshold trips
/// the category. Multiclass: only the highest-scoring concept is considered,
/// then compared to its own threshold. Concepts without a score are treated
/// as unevaluated. The category `adjustment` is added to each raw score
/// before comparison; absent thresholds default to 1.0.
fn category_exceeded(category: &ClassifierCategory, scores: &ConceptScores) -> bool {
    let adjustment = category.adjustment.unwrap_or(0.0);
    match category.classifier_mode() {
        ClassifierMode::Zeroshot => category.concepts.iter().any(|concept| {
            scores
                .get(&concept.concept)
                .is_some_and(|score| score + adjustment >= concept.threshold_or_default())
        }),
        ClassifierMode::Multiclass => {
            let top = category
                .concepts
                .iter()
                .filter_map(|concept| {
                    scores
                        .get(&concept.concept)
                        .map(|score| (concept, score + adjustment))
                })
                .max_by(|(_, a), (_, b)| a.total_cmp(b));
            top.is_some_and(|(concept, score)| score >= concept.threshold_or_default())
        }
    }
}

/// Resolves a policy against observed scores, producing a new
/// [`ClassifierParameters`] with `exceeds` (policy order preserved) and the
/// single realized action. Empty `exceeds` realizes `Passthrough`.
pub fn resolve(policy: &ClassifierParameters, scores: &ConceptScores) -> ClassifierParameters {
    let mut exceeds = Vec::new();
    let mut realized = Action::Passthrough;
    for category in &policy.categories {
        if category_exceeded(category, scores) {
            let action = category.action();
            if severity(action) > severity(realized) {
                realized = action;
            }
            exceeds.push(category.clone());
        }
    }
    debug!(
        exceeded = exceeds.len(),
        action = ?realized,
        "classifier policy resolved"
    );
    ClassifierParameters {
        categories: policy.categories.clone(),
        exceeds,
        realized_action: Some(realized as i32),
    }
}

/// Reads per-concept scores out of a classifier result message. A
/// classification artifact reports observed scores through the `threshold`
/// slot of its concepts, the only numeric slot the schema gives a concept.
pub fn scores_from_result(result: &ClassifierParameters) -> ConceptScores {
    let mut scores = ConceptScores::new();
    for category in &result.categories {
        for concept in &category.concepts {
            if let Some(score) = concept.threshold {
                scores.insert(concept.concept.clone(), score);
            }
        }
    }
    scores
}

/// Applies a policy to every classification artifact of an answer, returning
/// a new answer (received messages are never mutated in place).
///
/// Each classifier payload is replaced by its resolved form; when the
/// realized action is `Discard` the artifact's finish reason becomes
/// `Filter`, which downstream `OnStatus` rules can branch on.
pub fn apply_policy(answer: &Answer, policy: &ClassifierParameters) -> Answer {
    let mut out = answer.clone();
    for artifact in &mut out.artifacts {
        let Some(artifact::Data::Classifier(result)) = &artifact.data else {
            continue;
        };
        let scores = scores_from_result(result);
        let resolved = resolve(policy, &scores);
        if resolved.realized_action() == Action::Discard {
            artifact.finish_reason = FinishReason::Filter as i32;
        }
        artifact.data = Some(artifact::Data::Classifier(resolved));
    }
    out
}
