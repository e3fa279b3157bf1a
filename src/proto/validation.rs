//! Cross-field invariants the wire encoding cannot express.
//!
//! The oneof groups already make "two members set" unrepresentable; what is
//! left is agreement between an artifact's declared `type` and its payload
//! arm, sanity ranges on generation knobs, and referential integrity of
//! chain stage ids.

use std::collections::HashSet;

use super::generation::*;

/// Validation limits for generation parameters.
pub mod limits {
    /// Maximum image edge in pixels.
    pub const MAX_DIMENSION: u64 = 16_384;

    /// Maximum samples per request.
    pub const MAX_SAMPLES: u64 = 64;

    /// Maximum diffusion steps per request.
    pub const MAX_STEPS: u64 = 1_000;
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("artifact {uuid}: declared type {declared:?} does not match payload arm {payload}")]
    ArtifactPayloadMismatch {
        uuid: String,
        declared: ArtifactType,
        payload: &'static str,
    },

    #[error("parameter '{parameter}' out of range: {value} (max {max})")]
    OutOfRange {
        parameter: &'static str,
        value: u64,
        max: u64,
    },

    #[error("parameter '{parameter}' must be positive")]
    NotPositive { parameter: &'static str },

    #[error("prompt weight must be finite, got {0}")]
    NonFiniteWeight(f32),

    #[error("stage id '{0}' appears more than once")]
    DuplicateStageId(String),

    #[error("stage '{stage}' has no request")]
    MissingRequest { stage: String },

    #[error("on_status target '{target}' in stage '{stage}' names no stage")]
    DanglingTarget { stage: String, target: String },
}

pub type ValidationResult = Result<(), ValidationError>;

fn payload_name(data: &artifact::Data) -> &'static str {
    match data {
        artifact::Data::Binary(_) => "binary",
        artifact::Data::Text(_) => "text",
        artifact::Data::Tokens(_) => "tokens",
        artifact::Data::Classifier(_) => "classifier",
        artifact::Data::Tensor(_) => "tensor",
    }
}

/// Checks that the artifact's declared type agrees with its payload arm.
/// `ArtifactType::None` and an absent payload are always accepted.
pub fn validate_artifact(artifact: &Artifact) -> ValidationResult {
    let Some(data) = &artifact.data else {
        return Ok(());
    };
    let declared = artifact.artifact_type();
    let ok = match declared {
        ArtifactType::None => true,
        ArtifactType::Image
        | ArtifactType::Video
        | ArtifactType::Mask
        | ArtifactType::Latent
        | ArtifactType::Depth
        | ArtifactType::ThreeDModel
        | ArtifactType::Audio => matches!(data, artifact::Data::Binary(_)),
        ArtifactType::Text => matches!(data, artifact::Data::Text(_)),
        ArtifactType::Tokens => matches!(data, artifact::Data::Tokens(_)),
        ArtifactType::Classifications => matches!(data, artifact::Data::Classifier(_)),
        ArtifactType::Embedding | ArtifactType::Tensor => {
            matches!(data, artifact::Data::Tensor(_))
        }
    };
    if ok {
        Ok(())
    } else {
        Err(ValidationError::ArtifactPayloadMismatch {
            uuid: artifact.uuid.clone(),
            declared,
            payload: payload_name(data),
        })
    }
}

fn validate_image(image: &ImageParameters) -> ValidationResult {
    for (parameter, value) in [("height", image.height), ("width", image.width)] {
        if let Some(v) = value {
            if v == 0 {
                return Err(ValidationError::NotPositive { parameter });
            }
            if v > limits::MAX_DIMENSION {
                return Err(ValidationError::OutOfRange {
                    parameter,
                    value: v,
                    max: limits::MAX_DIMENSION,
                });
            }
        }
    }
    if let Some(samples) = image.samples {
        if samples == 0 {
            return Err(ValidationError::NotPositive { parameter: "samples" });
        }
        if samples > limits::MAX_SAMPLES {
            return Err(ValidationError::OutOfRange {
                parameter: "samples",
                value: samples,
                max: limits::MAX_SAMPLES,
            });
        }
    }
    if let Some(steps) = image.steps {
        if steps == 0 {
            return Err(ValidationError::NotPositive { parameter: "steps" });
        }
        if steps > limits::MAX_STEPS {
            return Err(ValidationError::OutOfRange {
                parameter: "steps",
                value: steps,
                max: limits::MAX_STEPS,
            });
        }
    }
    Ok(())
}

/// Validates a single request: prompt weights must be finite, image knobs in
/// range, and any artifact prompts internally consistent.
pub fn validate_request(request: &Request) -> ValidationResult {
    for prompt in &request.prompt {
        if let Some(params) = &prompt.parameters {
            let weight = params.weight_or_default();
            if !weight.is_finite() {
                return Err(ValidationError::NonFiniteWeight(weight));
            }
        }
        if let Some(prompt::Prompt::Artifact(artifact)) = &prompt.prompt {
            validate_artifact(artifact)?;
        }
    }
    if let Some(request::Params::Image(image)) = &request.params {
        validate_image(image)?;
    }
    Ok(())
}

/// Validates chain structure: unique stage ids, a request per stage, and
/// every `on_status` target resolving to a declared stage id. Backward
/// targets are legal; dangling ones are not.
pub fn validate_chain(chain: &ChainRequest) -> ValidationResult {
    let mut ids = HashSet::new();
    for (index, stage) in chain.stage.iter().enumerate() {
        if !stage.id.is_empty() && !ids.insert(stage.id.as_str()) {
            return Err(ValidationError::DuplicateStageId(stage.id.clone()));
        }
        if stage.request.is_none() {
            return Err(ValidationError::MissingRequest {
                stage: if stage.id.is_empty() {
                    format!("#{index}")
                } else {
                    stage.id.clone()
                },
            });
        }
    }
    for stage in &chain.stage {
        for rule in &stage.on_status {
            if let Some(target) = &rule.target {
                if !ids.contains(target.as_str()) {
                    return Err(ValidationError::DanglingTarget {
                        stage: stage.id.clone(),
                        target: target.clone(),
                    });
                }
            }
        }
        if let Some(request) = &stage.request {
            validate_request(request)?;
        }
    }
    Ok(())
}
