//! Chain execution: sequential stage running with branch control.
//!
//! A [`crate::proto::ChainRequest`] is an ordered list of stages; each stage
//! wraps one request plus `OnStatus` branch rules evaluated against that
//! stage's answer. The executor walks the stages, invoking a
//! [`GenerationBackend`] per stage, and assembles an `AnswerBatch`.

pub mod assets;
pub mod backend;
pub mod executor;

pub use assets::{AssetError, AssetStore, MemoryAssetStore};
pub use backend::{BackendError, GenerationBackend};
pub use executor::{ChainError, ChainExecutor, ChainResult};
