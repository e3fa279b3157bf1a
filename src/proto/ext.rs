//! Helpers over the raw prost representation.
//!
//! Enum-typed fields are `i32` on the wire so unknown values survive
//! round-trips; the derive already generates typed getters for them (mapping
//! out-of-range values to each enum's zero variant), so what lives here is
//! only what the derive does not give us: constructors, defaulted optional
//! scalars, and filter/aggregation logic.

use super::generation::*;

impl PromptParameters {
    /// Prompt weight with the documented default: absent means 1.0.
    pub fn weight_or_default(&self) -> f32 {
        self.weight.unwrap_or(1.0)
    }

    /// Whether this prompt is an initialization image.
    pub fn is_init(&self) -> bool {
        self.init.unwrap_or(false)
    }
}

impl Prompt {
    pub fn from_text(text: impl Into<String>) -> Self {
        Prompt {
            parameters: None,
            prompt: Some(prompt::Prompt::Text(text.into())),
        }
    }

    pub fn from_tokens(tokens: Tokens) -> Self {
        Prompt {
            parameters: None,
            prompt: Some(prompt::Prompt::Tokens(tokens)),
        }
    }

    pub fn from_artifact(artifact: Artifact) -> Self {
        Prompt {
            parameters: None,
            prompt: Some(prompt::Prompt::Artifact(artifact)),
        }
    }

    pub fn with_parameters(mut self, parameters: PromptParameters) -> Self {
        self.parameters = Some(parameters);
        self
    }
}

impl Artifact {
    /// Typed view of the declared artifact type. (The derive-generated
    /// getter for the `type` field would be `r#type()`; this reads better.)
    pub fn artifact_type(&self) -> ArtifactType {
        ArtifactType::try_from(self.r#type).unwrap_or(ArtifactType::None)
    }
}

impl ClassifierConcept {
    /// Concept threshold; absent means 1.0, i.e. effectively never exceeded
    /// by scores below certainty.
    pub fn threshold_or_default(&self) -> f32 {
        self.threshold.unwrap_or(1.0)
    }
}

impl OnStatus {
    pub fn reasons(&self) -> impl Iterator<Item = FinishReason> + '_ {
        self.reason.iter().filter_map(|r| FinishReason::try_from(*r).ok())
    }

    pub fn actions(&self) -> impl Iterator<Item = StageAction> + '_ {
        self.action.iter().filter_map(|a| StageAction::try_from(*a).ok())
    }
}

impl ArtifactTypeFilter {
    /// Filter semantics: a nonempty include list admits only listed types;
    /// otherwise a nonempty exclude list rejects listed types; an empty
    /// filter admits everything.
    pub fn admits(&self, ty: ArtifactType) -> bool {
        if !self.include.is_empty() {
            self.include.contains(&(ty as i32))
        } else if !self.exclude.is_empty() {
            !self.exclude.contains(&(ty as i32))
        } else {
            true
        }
    }
}

impl Answer {
    /// Finish reasons of all artifacts, in artifact order, deduplicated.
    pub fn finish_reasons(&self) -> Vec<FinishReason> {
        let mut reasons = Vec::new();
        for artifact in &self.artifacts {
            let reason = artifact.finish_reason();
            if !reasons.contains(&reason) {
                reasons.push(reason);
            }
        }
        reasons
    }

    /// Artifact types present in this answer, deduplicated.
    pub fn artifact_types(&self) -> Vec<ArtifactType> {
        let mut types = Vec::new();
        for artifact in &self.artifacts {
            let ty = artifact.artifact_type();
            if !types.contains(&ty) {
                types.push(ty);
            }
        }
        types
    }
}
