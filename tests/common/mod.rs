//! Shared test fixtures: a scriptable backend and request builders.

use std::sync::Mutex;

use async_trait::async_trait;

use genchain::chain::{BackendError, GenerationBackend};
use genchain::proto::*;

/// One scripted backend reply.
#[derive(Clone)]
pub enum Reply {
    /// An answer with a single artifact of the given type and finish reason.
    Artifact(ArtifactType, FinishReason),
    /// A classification result artifact with observed per-concept scores.
    Classification(Vec<(&'static str, f32)>),
    /// A backend-level failure.
    Fail(BackendError),
}

/// Backend that pops scripted replies in order; panics if called more often
/// than scripted.
pub struct MockBackend {
    replies: Mutex<Vec<Reply>>,
}

impl MockBackend {
    pub fn new(replies: Vec<Reply>) -> Self {
        // Stored reversed so pop() yields script order.
        let mut replies = replies;
        replies.reverse();
        Self {
            replies: Mutex::new(replies),
        }
    }

    pub fn remaining(&self) -> usize {
        self.replies.lock().unwrap().len()
    }
}

#[async_trait]
impl GenerationBackend for MockBackend {
    async fn run(&self, request: &Request) -> Result<Answer, BackendError> {
        let reply = self
            .replies
            .lock()
            .unwrap()
            .pop()
            .expect("backend called beyond its script");
        let artifact = match reply {
            Reply::Fail(error) => return Err(error),
            Reply::Artifact(ty, reason) => Artifact {
                r#type: ty as i32,
                mime: "application/octet-stream".into(),
                finish_reason: reason as i32,
                data: Some(artifact::Data::Binary(vec![0xab])),
                ..Default::default()
            },
            Reply::Classification(scores) => {
                let result = ClassifierParameters {
                    categories: vec![ClassifierCategory {
                        name: "observed".into(),
                        concepts: scores
                            .into_iter()
                            .map(|(concept, score)| ClassifierConcept {
                                concept: concept.into(),
                                threshold: Some(score),
                            })
                            .collect(),
                        ..Default::default()
                    }],
                    ..Default::default()
                };
                Artifact {
                    r#type: ArtifactType::Classifications as i32,
                    finish_reason: FinishReason::Stop as i32,
                    data: Some(artifact::Data::Classifier(result)),
                    ..Default::default()
                }
            }
        };
        Ok(Answer {
            answer_id: format!("answer-for-{}", request.request_id),
            request_id: request.request_id.clone(),
            artifacts: vec![artifact],
            ..Default::default()
        })
    }
}

pub fn stage(id: &str, on_status: Vec<OnStatus>) -> Stage {
    Stage {
        id: id.into(),
        request: Some(Request {
            engine_id: "test-engine".into(),
            request_id: format!("req-{id}"),
            requested_type: ArtifactType::Image as i32,
            prompt: vec![Prompt::from_text("test prompt")],
            ..Default::default()
        }),
        on_status,
    }
}

pub fn rule(
    reasons: &[FinishReason],
    actions: &[StageAction],
    target: Option<&str>,
) -> OnStatus {
    OnStatus {
        reason: reasons.iter().map(|r| *r as i32).collect(),
        target: target.map(String::from),
        action: actions.iter().map(|a| *a as i32).collect(),
        artifact_type: None,
    }
}

pub fn chain(request_id: &str, stages: Vec<Stage>) -> ChainRequest {
    ChainRequest {
        request_id: request_id.into(),
        stage: stages,
    }
}
