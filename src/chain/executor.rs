//! The chain executor state machine.
//!
//! State is the current stage index plus a jump table built once from all
//! stage ids. Stages run strictly sequentially within one chain (a branch
//! decision may redirect the next index), while independent chains share
//! nothing and run fully in parallel.
//!
//! Per stage:
//! 1. invoke the backend with the stage's request;
//! 2. collect the answer's finish reasons and artifact types;
//! 3. evaluate `on_status` rules in list order, first match wins; no match
//!    means an implicit `Pass` to the next stage;
//! 4. apply the matched rule's actions in order: `Pass` continues to the
//!    next stage or to the rule's `target`, `Discard` drops this stage's
//!    answer from the batch, `Return` stops the chain.
//!
//! Backward jumps are legal; `max_stage_visits` bounds total visits so a
//! cyclic chain fails with [`ChainError::LoopExceeded`] instead of hanging.

use std::collections::HashMap;

use chrono::Utc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::backend::{BackendError, GenerationBackend};
use crate::classifier;
use crate::config::{ChainConfig, ConfigError};
use crate::proto::validation::{validate_chain, ValidationError};
use crate::proto::*;

#[derive(Debug, thiserror::Error)]
pub enum ChainError {
    #[error("stage '{stage}' jumps to unknown target '{target}'")]
    UnknownTarget { stage: String, target: String },

    #[error("chain exceeded the bound of {0} stage visits")]
    LoopExceeded(usize),

    #[error("chain cancelled")]
    Cancelled,

    #[error(transparent)]
    InvalidChain(#[from] ValidationError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type ChainResult<T> = Result<T, ChainError>;

/// Runs chains against one backend. Cheap to clone per chain if the backend
/// handle is shared.
pub struct ChainExecutor<B> {
    backend: B,
    config: ChainConfig,
}

/// Where execution goes after a stage's actions are applied.
enum Continuation {
    Next(usize),
    Stop,
}

impl<B: GenerationBackend> ChainExecutor<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            config: ChainConfig::default(),
        }
    }

    pub fn with_config(backend: B, config: ChainConfig) -> ChainResult<Self> {
        config.validate()?;
        Ok(Self { backend, config })
    }

    /// Runs the chain to completion, producing one answer per non-discarded
    /// stage visit.
    pub async fn execute(&self, chain: &ChainRequest) -> ChainResult<AnswerBatch> {
        self.execute_with_cancel(chain, CancellationToken::new())
            .await
    }

    /// Like [`execute`](Self::execute), aborting when `cancel` fires. An
    /// in-flight backend call is dropped and no partial batch is returned.
    pub async fn execute_with_cancel(
        &self,
        chain: &ChainRequest,
        cancel: CancellationToken,
    ) -> ChainResult<AnswerBatch> {
        validate_chain(chain)?;

        let jump_table: HashMap<&str, usize> = chain
            .stage
            .iter()
            .enumerate()
            .filter(|(_, stage)| !stage.id.is_empty())
            .map(|(index, stage)| (stage.id.as_str(), index))
            .collect();

        let mut answers = Vec::new();
        let mut index = 0;
        let mut visits = 0;

        while index < chain.stage.len() {
            visits += 1;
            if visits > self.config.max_stage_visits {
                return Err(ChainError::LoopExceeded(self.config.max_stage_visits));
            }

            let stage = &chain.stage[index];
            // Presence enforced by validate_chain.
            let Some(request) = stage.request.as_ref() else {
                return Err(ChainError::InvalidChain(ValidationError::MissingRequest {
                    stage: stage.id.clone(),
                }));
            };

            debug!(chain = %chain.request_id, stage = %stage.id, index, visits, "running stage");
            let answer = tokio::select! {
                biased;
                _ = cancel.cancelled() => return Err(ChainError::Cancelled),
                result = self.run_stage(request) => result,
            };

            let answer = match &request.params {
                Some(request::Params::Classifier(policy)) => {
                    classifier::apply_policy(&answer, policy)
                }
                _ => answer,
            };

            match self.apply_rules(stage, index, &answer, &jump_table)? {
                (false, Continuation::Next(next)) => {
                    answers.push(answer);
                    index = next;
                }
                (true, Continuation::Next(next)) => {
                    debug!(stage = %stage.id, "stage answer discarded");
                    index = next;
                }
                (discarded, Continuation::Stop) => {
                    if !discarded {
                        answers.push(answer);
                    }
                    break;
                }
            }
        }

        let batch = AnswerBatch {
            batch_id: Uuid::new_v4().to_string(),
            answers,
        };
        info!(
            chain = %chain.request_id,
            batch = %batch.batch_id,
            answers = batch.answers.len(),
            visits,
            "chain finished"
        );
        Ok(batch)
    }

    /// Invokes the backend, folding backend errors into an answer with
    /// `finish_reason = Error` so branch rules can react to them.
    async fn run_stage(&self, request: &Request) -> Answer {
        let received = Utc::now().timestamp_millis() as u64;
        let result = match self.config.backend_timeout {
            Some(deadline) => tokio::time::timeout(deadline, self.backend.run(request))
                .await
                .unwrap_or(Err(BackendError::Timeout)),
            None => self.backend.run(request).await,
        };
        match result {
            Ok(answer) => answer,
            Err(error) => {
                warn!(request = %request.request_id, %error, "backend error, folding into answer");
                error_answer(request, received, &error)
            }
        }
    }

    /// Evaluates the stage's rules against the answer and applies the
    /// matched rule's actions. Returns (discarded, continuation).
    fn apply_rules(
        &self,
        stage: &Stage,
        index: usize,
        answer: &Answer,
        jump_table: &HashMap<&str, usize>,
    ) -> ChainResult<(bool, Continuation)> {
        let reasons = answer.finish_reasons();
        let types = answer.artifact_types();

        let matched = stage.on_status.iter().find(|rule| {
            let reason_hit = rule.reasons().any(|r| reasons.contains(&r));
            let type_hit = match &rule.artifact_type {
                // A constrained filter needs at least one admitted artifact.
                Some(filter) => types.iter().any(|ty| filter.admits(*ty)),
                None => true,
            };
            reason_hit && type_hit
        });

        let Some(rule) = matched else {
            // Implicit pass.
            return Ok((false, Continuation::Next(index + 1)));
        };
        debug!(stage = %stage.id, target = ?rule.target, "branch rule matched");

        let mut discarded = false;
        let mut next = Continuation::Next(index + 1);
        for action in rule.actions() {
            match action {
                StageAction::Pass => {
                    next = match &rule.target {
                        Some(target) => Continuation::Next(
                            *jump_table.get(target.as_str()).ok_or_else(|| {
                                ChainError::UnknownTarget {
                                    stage: stage.id.clone(),
                                    target: target.clone(),
                                }
                            })?,
                        ),
                        None => Continuation::Next(index + 1),
                    };
                }
                StageAction::Discard => discarded = true,
                StageAction::Return => {
                    return Ok((discarded, Continuation::Stop));
                }
            }
        }
        Ok((discarded, next))
    }
}

/// Synthesizes the answer for a failed backend call: a single artifact with
/// `finish_reason = Error` and the error text, so the failure is a
/// first-class branch condition rather than a chain abort.
fn error_answer(request: &Request, received: u64, error: &BackendError) -> Answer {
    Answer {
        answer_id: Uuid::new_v4().to_string(),
        request_id: request.request_id.clone(),
        received,
        created: Utc::now().timestamp_millis() as u64,
        meta: Some(AnswerMeta {
            engine_id: Some(request.engine_id.clone()),
            ..Default::default()
        }),
        artifacts: vec![Artifact {
            r#type: ArtifactType::Text as i32,
            mime: "text/plain".into(),
            uuid: Uuid::new_v4().to_string(),
            finish_reason: FinishReason::Error as i32,
            data: Some(artifact::Data::Text(error.to_string())),
            ..Default::default()
        }],
    }
}
