//! genchain: wire protocol and execution semantics for a generative-media
//! service.
//!
//! Clients build a [`proto::Request`] describing prompts, sampling and
//! guidance parameters, or transforms; a backend turns it into one or more
//! [`proto::Artifact`]s wrapped in a [`proto::Answer`]. Requests can be
//! chained into ordered [`proto::Stage`]s whose [`proto::OnStatus`] rules
//! inspect the prior stage's finish reasons and artifact types to decide
//! whether to pass, discard, jump, or return early.
//!
//! The crate has three load-bearing pieces:
//!
//! - [`proto`] / [`codec`]: the message schema as prost value types plus
//!   length-prefixed binary framing,
//! - [`chain`]: the sequential stage runner with branch control,
//! - [`classifier`]: aggregation of content-policy verdicts into one
//!   realized action.
//!
//! The generative models themselves sit behind the
//! [`chain::GenerationBackend`] trait and are not part of this crate.

pub mod chain;
pub mod classifier;
pub mod codec;
pub mod config;
pub mod logging;
pub mod proto;
