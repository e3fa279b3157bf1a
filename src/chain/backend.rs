//! The generation backend seam.
//!
//! The actual generative models (diffusion samplers, upscalers, frame
//! interpolators, depth estimators) live behind this trait; the executor
//! treats them as a black box from request to answer.

use async_trait::async_trait;

use crate::proto::{Answer, Request};

/// Errors a backend may surface. Inside a chain these are not hard
/// failures: the executor folds them into an answer with
/// `finish_reason = Error` so branch rules can react to them.
#[derive(Debug, Clone, thiserror::Error)]
pub enum BackendError {
    #[error("backend timed out")]
    Timeout,

    #[error("model '{0}' unavailable")]
    ModelUnavailable(String),

    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// One generation engine: turns a request into an answer.
///
/// Implementations must be safe to call concurrently; independent chains
/// run in parallel against the same backend. Retry policy, if any, belongs
/// to the implementation, never to the executor.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    async fn run(&self, request: &Request) -> Result<Answer, BackendError>;
}

#[async_trait]
impl<B: GenerationBackend + ?Sized> GenerationBackend for std::sync::Arc<B> {
    async fn run(&self, request: &Request) -> Result<Answer, BackendError> {
        (**self).run(request).await
    }
}
